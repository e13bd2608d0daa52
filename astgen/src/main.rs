//! CLI entry point for the `generate_ast` tool.
//!
//! Run with: `generate_ast <output directory>`
//!
//! Emits one Java source file per built-in hierarchy into the given
//! directory, overwriting existing files. Diagnostics go through `tracing`
//! and are enabled via `RUST_LOG`.

use std::path::Path;
use std::process::ExitCode;

use astgen_codegen::write_hierarchy;
use astgen_schema::{SchemaIr, builtin};
use tracing::{debug, error};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [output_dir] = args.as_slice() else {
        println!("Usage: generate_ast <output directory>");
        return ExitCode::from(1);
    };

    let output_dir = Path::new(output_dir);
    for schema in builtin::all() {
        let ir = SchemaIr::from_schema(&schema);
        match write_hierarchy(output_dir, &ir) {
            Ok(path) => debug!(path = %path.display(), base = %ir.base_name, "wrote hierarchy"),
            Err(e) => {
                error!(base = %ir.base_name, "code generation failed: {e}");
                eprintln!("generate_ast: {e}");
                return ExitCode::from(1);
            }
        }
    }

    ExitCode::SUCCESS
}
