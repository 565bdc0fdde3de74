//! Compile command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use dnalang_compiler::{CompilationResult, CompileOptions, compile_with};

use super::common::load_source;

/// Execute the compile command.
///
/// The result record is printed to stdout whether or not compilation
/// succeeds; a failed compilation is then reported as an error.
pub fn execute(
    input: &Path,
    emit: Option<&Path>,
    compact: bool,
    options: &CompileOptions,
) -> Result<()> {
    let source = load_source(input)?;
    let result = compile_with(&source, options);

    let json = if compact {
        serde_json::to_string(&result)
    } else {
        serde_json::to_string_pretty(&result)
    }
    .context("Failed to serialize compilation result")?;
    println!("{json}");

    match &result {
        CompilationResult::Success(compilation) => {
            if let Some(path) = emit {
                fs::write(path, &compilation.qiskit_code)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
                info!(path = %path.display(), "wrote generated code");
                eprintln!(
                    "{} Wrote {} ({} qubits)",
                    style("✓").green().bold(),
                    style(path.display()).green(),
                    compilation.num_qubits
                );
            }
            Ok(())
        }
        CompilationResult::Failure(failure) => {
            anyhow::bail!("{}: {}", failure.error_type, failure.error)
        }
    }
}
