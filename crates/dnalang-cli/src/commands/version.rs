//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - DNA-Lang to Qiskit compiler",
        style("dnalang").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  dnalang-compiler  Lexer, parser and Qiskit code generator");
    println!("  dnalang-cli       Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
