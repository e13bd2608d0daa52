//! # astgen Schema
//!
//! Schema model for tagged-variant AST hierarchies.
//!
//! This crate provides:
//! - Type definitions for hierarchy schemas (base type, variants, fields)
//! - Intermediate representation for code generation
//! - Built-in hierarchy definitions consumed by the `generate_ast` tool

pub mod builtin;
pub mod ir;
pub mod types;

pub use ir::{ResolvedField, ResolvedVariant, SchemaIr};
pub use types::{FieldDef, Schema, VariantDef};
