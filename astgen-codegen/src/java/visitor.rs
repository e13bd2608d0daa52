//! Visitor interface generation.

use astgen_schema::ir::SchemaIr;

use crate::writer::CodeWriter;

/// Generator for the `Visitor<R>` interface.
pub struct VisitorGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the visitor interface declaration.
    ///
    /// One dispatch method per variant, in schema order, each taking a single
    /// parameter of the variant's type named after the lower-cased base name
    /// and returning the caller-supplied result type `R`.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut w = CodeWriter::new();
        w.indent();
        w.line("interface Visitor<R> {");
        w.indent();

        for variant in &self.ir.variants {
            w.line(&format!(
                "R {}({} {});",
                variant.visit_method, variant.name, self.ir.param_name
            ));
        }

        w.dedent();
        w.line("}");
        w.finish()
    }
}
