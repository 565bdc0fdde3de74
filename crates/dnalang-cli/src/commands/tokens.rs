//! Tokens command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use dnalang_compiler::tokenize;

use super::common::load_source;

/// Execute the tokens command.
pub fn execute(input: &Path) -> Result<()> {
    let source = load_source(input)?;
    let tokens =
        tokenize(&source).map_err(|e| anyhow::anyhow!("{}: {}", e.category(), e))?;

    println!(
        "{} {} tokens in {}",
        style("→").cyan().bold(),
        tokens.len(),
        style(input.display()).green()
    );

    for token in &tokens {
        let position = format!("{}:{}", token.line, token.column);
        let kind = if token.kind.is_keyword() {
            style(token.kind.name()).magenta()
        } else {
            style(token.kind.name()).yellow()
        };
        println!("  {position:>8}  {kind:<14} {}", token.text);
    }

    Ok(())
}
