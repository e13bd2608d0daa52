//! Prelude module for convenient imports.
//!
//! ```
//! use astgen::prelude::*;
//! ```

// Schema types
pub use astgen_schema::builtin;
pub use astgen_schema::ir::{ResolvedField, ResolvedVariant, SchemaIr};
pub use astgen_schema::types::{FieldDef, Schema, VariantDef};

// Codegen types
pub use astgen_codegen::java::{VariantGenerator, VisitorGenerator};
pub use astgen_codegen::writer::CodeWriter;
pub use astgen_codegen::{CodegenError, generate_hierarchy, write_hierarchy};
