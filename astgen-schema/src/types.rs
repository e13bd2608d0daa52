//! Schema type definitions.
//!
//! This module contains the data structures describing one tagged-variant
//! hierarchy: a base type name plus an ordered list of variant definitions,
//! each carrying an ordered list of typed fields. Declaration order is
//! significant everywhere: it fixes constructor parameter order and the
//! order of emitted declarations.

/// Complete description of one AST hierarchy.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Base type name (e.g. `Expr`).
    pub base_name: String,
    /// Variant definitions, in declaration order.
    pub variants: Vec<VariantDef>,
}

impl Schema {
    /// Creates a new empty hierarchy schema.
    #[must_use]
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            variants: Vec::new(),
        }
    }

    /// Adds a variant to the hierarchy.
    pub fn add_variant(&mut self, variant: VariantDef) {
        self.variants.push(variant);
    }

    /// Looks up a variant by name.
    #[must_use]
    pub fn get_variant(&self, name: &str) -> Option<&VariantDef> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Returns true if a variant with the given name exists.
    #[must_use]
    pub fn has_variant(&self, name: &str) -> bool {
        self.get_variant(name).is_some()
    }
}

/// One concrete case of the hierarchy.
#[derive(Debug, Clone)]
pub struct VariantDef {
    /// Variant name (e.g. `Binary`).
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl VariantDef {
    /// Creates a new variant definition with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the variant.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }
}

/// One typed attribute of a variant.
///
/// The type name is emitted by reference only. Opaque types owned by the
/// surrounding project (e.g. `Token`) are valid here; the generator never
/// resolves or validates them.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Type name as it appears in generated code.
    pub type_name: String,
    /// Field name.
    pub name: String,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        let mut schema = Schema::new("Expr");
        let mut unary = VariantDef::new("Unary");
        unary.add_field(FieldDef::new("Token", "operator"));
        unary.add_field(FieldDef::new("Expr", "right"));
        schema.add_variant(unary);
        schema.add_variant(VariantDef::new("Grouping"));
        schema
    }

    #[test]
    fn test_schema_new_is_empty() {
        let schema = Schema::new("Expr");
        assert_eq!(schema.base_name, "Expr");
        assert!(schema.variants.is_empty());
    }

    #[test]
    fn test_add_variant_preserves_order() {
        let schema = sample_schema();
        assert_eq!(schema.variants.len(), 2);
        assert_eq!(schema.variants[0].name, "Unary");
        assert_eq!(schema.variants[1].name, "Grouping");
    }

    #[test]
    fn test_get_variant() {
        let schema = sample_schema();
        assert!(schema.get_variant("Unary").is_some());
        assert!(schema.get_variant("Binary").is_none());
        assert!(schema.has_variant("Grouping"));
        assert!(!schema.has_variant("grouping"));
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let schema = sample_schema();
        let unary = schema.get_variant("Unary").unwrap();
        assert_eq!(unary.fields.len(), 2);
        assert_eq!(unary.fields[0].type_name, "Token");
        assert_eq!(unary.fields[0].name, "operator");
        assert_eq!(unary.fields[1].type_name, "Expr");
        assert_eq!(unary.fields[1].name, "right");
    }
}
