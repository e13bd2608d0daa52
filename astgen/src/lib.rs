//! # astgen
//!
//! Source generator for tagged-variant AST hierarchies.
//!
//! astgen takes a declarative schema (a base type name plus an ordered list
//! of variants, each with ordered typed fields) and emits Java source for the
//! hierarchy, including a double-dispatch visitor interface: one dispatch
//! method per variant, and an `accept` override on each variant forwarding to
//! its own method.
//!
//! ## Quick Start
//!
//! ```
//! use astgen::prelude::*;
//!
//! let ir = SchemaIr::from_schema(&builtin::expr());
//! let source = generate_hierarchy(&ir);
//! assert!(source.contains("abstract class Expr"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Hierarchy schema model, IR, and built-in definitions
//! - [`codegen`] - Java source rendering and the output-file write

pub mod prelude;

/// Schema model and code-generation IR.
pub mod schema {
    pub use astgen_schema::*;
}

/// Java source generation.
pub mod codegen {
    pub use astgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use astgen_codegen::{CodegenError, generate_hierarchy, write_hierarchy};
pub use astgen_schema::{FieldDef, Schema, SchemaIr, VariantDef, builtin};
