//! DNA-Lang to Qiskit compiler.
//!
//! DNA-Lang describes quantum circuits as organisms: a genome maps external
//! data onto qubits, a quantum-state block prepares, entangles and measures
//! them, and a fitness expression scores the result. This crate lexes and
//! parses DNA-Lang source and generates the equivalent Qiskit Python script.
//!
//! # Pipeline
//!
//! | Stage | Entry point | Output |
//! |-------|-------------|--------|
//! | Lexing | [`tokenize`] | `Vec<Token>` |
//! | Parsing | [`parse`] | [`ast::Program`] |
//! | Code generation | [`generate`] | [`GeneratedCode`] |
//! | All of the above | [`compile`] | [`CompilationResult`] |
//!
//! # Example
//!
//! ```rust
//! use dnalang_compiler::compile;
//!
//! let source = r#"
//!     organism Test {
//!         genome {
//!             gene G1 = encode(data) -> qubits[2];
//!         }
//!         quantum_state {
//!             entangle(q[0], q[1]);
//!         }
//!         fitness = score > 0;
//!     }
//! "#;
//!
//! let result = compile(source);
//! let compilation = result.success().unwrap();
//! assert_eq!(compilation.num_qubits, 2);
//! assert!(compilation.qiskit_code.contains("qc.cx(0, 1)"));
//! ```
//!
//! # Errors
//!
//! Lexing and parsing stop at the first error. [`compile`] reports it as a
//! [`CompilationResult::Failure`] labelled `LexError` or `ParseError`;
//! [`try_compile`] returns the [`CompileError`] itself.

pub mod ast;
mod codegen;
mod compiler;
mod error;
mod lexer;
mod options;
mod parser;

pub use codegen::{GeneratedCode, PREAMBLE, generate};
pub use compiler::{
    Compilation, CompilationResult, CompileFailure, TokenSummary, compile, compile_with,
    try_compile,
};
pub use error::{CompileError, CompileResult, LEX_ERROR, PARSE_ERROR};
pub use lexer::{KEYWORDS, Token, TokenKind, tokenize};
pub use options::{CompileOptions, ConfigError, DEFAULT_TOKEN_PREVIEW_LIMIT};
pub use parser::parse;
