//! Variant class generation.

use astgen_schema::ir::{ResolvedVariant, SchemaIr};

use crate::writer::CodeWriter;

/// Generator for the nested variant classes.
pub struct VariantGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> VariantGenerator<'a> {
    /// Creates a new variant generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates all variant classes, in schema order, separated by blank lines.
    #[must_use]
    pub fn generate(&self) -> String {
        self.ir
            .variants
            .iter()
            .map(|v| self.generate_variant(v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generates one variant class: final fields in declaration order, the
    /// single all-fields constructor, and the `accept` override forwarding to
    /// the variant's visitor method.
    fn generate_variant(&self, variant: &ResolvedVariant) -> String {
        let mut w = CodeWriter::new();
        w.indent();
        w.line(&format!(
            "static class {} extends {} {{",
            variant.name, self.ir.base_name
        ));
        w.indent();

        for field in &variant.fields {
            w.line(&format!("final {};", field.declaration()));
        }
        w.blank();

        w.line(&format!(
            "{}({}) {{",
            variant.name,
            variant.constructor_params()
        ));
        w.indent();
        for field in &variant.fields {
            w.line(&format!("this.{} = {};", field.name, field.name));
        }
        w.dedent();
        w.line("}");
        w.blank();

        w.line("@Override");
        w.line("<R> R accept(Visitor<R> visitor) {");
        w.indent();
        w.line(&format!("return visitor.{}(this);", variant.visit_method));
        w.dedent();
        w.line("}");

        w.dedent();
        w.line("}");
        w.finish()
    }
}
