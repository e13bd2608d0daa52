//! Intermediate representation for code generation.
//!
//! This module provides a flattened, resolved representation of the schema:
//! every derived name the renderers need (visitor method names, the visitor
//! parameter name) is computed once here, so generation is a pure walk over
//! already-resolved data.

use crate::types::{FieldDef, Schema, VariantDef};

/// Intermediate representation of a hierarchy for code generation.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Base type name.
    pub base_name: String,
    /// Parameter name used in visitor method signatures (lower-cased base name).
    pub param_name: String,
    /// Resolved variants, in schema order.
    pub variants: Vec<ResolvedVariant>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a schema.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let variants = schema
            .variants
            .iter()
            .map(|v| ResolvedVariant::from_variant(v, &schema.base_name))
            .collect();

        Self {
            base_name: schema.base_name.clone(),
            param_name: schema.base_name.to_ascii_lowercase(),
            variants,
        }
    }

    /// Gets a resolved variant by name.
    #[must_use]
    pub fn get_variant(&self, name: &str) -> Option<&ResolvedVariant> {
        self.variants.iter().find(|v| v.name == name)
    }
}

/// Resolved variant information.
#[derive(Debug, Clone)]
pub struct ResolvedVariant {
    /// Variant class name.
    pub name: String,
    /// Visitor method name (`visit<Variant><Base>`).
    pub visit_method: String,
    /// Resolved fields, in declaration order.
    pub fields: Vec<ResolvedField>,
}

impl ResolvedVariant {
    /// Creates a resolved variant from a variant definition.
    #[must_use]
    pub fn from_variant(variant: &VariantDef, base_name: &str) -> Self {
        Self {
            name: variant.name.clone(),
            visit_method: format!("visit{}{}", variant.name, base_name),
            fields: variant.fields.iter().map(ResolvedField::from_field).collect(),
        }
    }

    /// Returns the constructor parameter list (`Type name, Type name, ...`).
    #[must_use]
    pub fn constructor_params(&self) -> String {
        self.fields
            .iter()
            .map(ResolvedField::declaration)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Resolved field information.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    /// Type name as emitted.
    pub type_name: String,
    /// Field name.
    pub name: String,
}

impl ResolvedField {
    /// Creates a resolved field from a field definition.
    #[must_use]
    pub fn from_field(field: &FieldDef) -> Self {
        Self {
            type_name: field.type_name.clone(),
            name: field.name.clone(),
        }
    }

    /// Returns the `Type name` declaration form used in parameter lists.
    #[must_use]
    pub fn declaration(&self) -> String {
        format!("{} {}", self.type_name, self.name)
    }
}
