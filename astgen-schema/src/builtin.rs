//! Built-in hierarchy definitions.
//!
//! These are the compile-time schema literals the `generate_ast` tool emits.
//! `Token` and `Object` are opaque types owned by the surrounding interpreter
//! project; the generator only emits references to them by name.

use crate::types::{FieldDef, Schema, VariantDef};

/// Returns the `Expr` hierarchy of the Lox interpreter.
#[must_use]
pub fn expr() -> Schema {
    let mut schema = Schema::new("Expr");
    schema.add_variant(variant(
        "Binary",
        &[("Expr", "left"), ("Token", "operator"), ("Expr", "right")],
    ));
    schema.add_variant(variant("Grouping", &[("Expr", "expression")]));
    schema.add_variant(variant("Literal", &[("Object", "value")]));
    schema.add_variant(variant("Unary", &[("Token", "operator"), ("Expr", "right")]));
    schema
}

/// Returns all built-in hierarchies, in emission order.
#[must_use]
pub fn all() -> Vec<Schema> {
    vec![expr()]
}

fn variant(name: &str, fields: &[(&str, &str)]) -> VariantDef {
    let mut def = VariantDef::new(name);
    for &(type_name, field_name) in fields {
        def.add_field(FieldDef::new(type_name, field_name));
    }
    def
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_has_four_variants_in_order() {
        let schema = expr();
        let names: Vec<&str> = schema.variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Binary", "Grouping", "Literal", "Unary"]);
    }

    #[test]
    fn test_binary_fields() {
        let schema = expr();
        let binary = schema.get_variant("Binary").expect("Binary variant");
        let fields: Vec<(&str, &str)> = binary
            .fields
            .iter()
            .map(|f| (f.type_name.as_str(), f.name.as_str()))
            .collect();
        assert_eq!(
            fields,
            [("Expr", "left"), ("Token", "operator"), ("Expr", "right")]
        );
    }

    #[test]
    fn test_literal_references_opaque_object_type() {
        let schema = expr();
        let literal = schema.get_variant("Literal").expect("Literal variant");
        assert_eq!(literal.fields.len(), 1);
        assert_eq!(literal.fields[0].type_name, "Object");
        assert_eq!(literal.fields[0].name, "value");
    }

    #[test]
    fn test_all_contains_expr() {
        let schemas = all();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].base_name, "Expr");
    }
}
