//! # astgen Codegen
//!
//! Java source generation for tagged-variant AST hierarchies.
//!
//! This crate provides:
//! - Visitor interface generation (one dispatch method per variant)
//! - Variant class generation (fields, constructor, `accept` override)
//! - Hierarchy composition and the single output-file write
//!
//! Generation is deterministic: the same schema always renders to the same
//! bytes, so regenerating over an existing file is idempotent.

pub mod error;
pub mod java;
pub mod writer;

pub use error::CodegenError;

use std::path::{Path, PathBuf};

use astgen_schema::SchemaIr;

use crate::java::{VariantGenerator, VisitorGenerator};
use crate::writer::CodeWriter;

/// Java package the generated hierarchies belong to.
const PACKAGE: &str = "com.craftinginterpreters.lox";

/// File extension of generated sources.
const EXTENSION: &str = "java";

/// Generates the complete Java source for one hierarchy.
///
/// The output is an abstract base class wrapping the `Visitor<R>` interface,
/// one static variant class per schema entry, and the abstract `accept`
/// dispatch method each variant overrides.
#[must_use]
pub fn generate_hierarchy(ir: &SchemaIr) -> String {
    let visitor = VisitorGenerator::new(ir).generate();
    let variants = VariantGenerator::new(ir).generate();

    let mut w = CodeWriter::new();
    w.line(&format!("package {};", PACKAGE));
    w.blank();
    w.line("import java.util.List;");
    w.blank();
    w.line(&format!("abstract class {} {{", ir.base_name));
    w.raw(&visitor);
    w.blank();
    w.raw(&variants);
    w.blank();
    w.indent();
    w.line("abstract <R> R accept(Visitor<R> visitor);");
    w.dedent();
    w.line("}");
    w.finish()
}

/// Writes the generated hierarchy to `<output_dir>/<BaseName>.java`.
///
/// An existing file is overwritten unconditionally. Returns the path of the
/// written file.
///
/// # Errors
/// Returns `CodegenError::Io` if the output directory does not exist or is
/// not writable. No partial-file cleanup is attempted.
pub fn write_hierarchy(output_dir: &Path, ir: &SchemaIr) -> Result<PathBuf, CodegenError> {
    let path = output_dir.join(format!("{}.{}", ir.base_name, EXTENSION));
    std::fs::write(&path, generate_hierarchy(ir))?;
    Ok(path)
}
