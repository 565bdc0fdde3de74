//! Error types for the DNA-Lang compiler.

use thiserror::Error;

use crate::lexer::TokenKind;

/// Category label for failures raised while scanning source text.
pub const LEX_ERROR: &str = "LexError";

/// Category label for failures raised while building the syntax tree.
pub const PARSE_ERROR: &str = "ParseError";

/// Errors that can occur while compiling DNA-Lang source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// No token pattern matches at the current position.
    #[error("Unexpected character '{character}' at line {line}, column {column}")]
    LexError {
        character: char,
        line: usize,
        column: usize,
    },

    /// A token of a different kind than the grammar requires.
    #[error("Expected {expected}, got {found} at line {line}, column {column}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        line: usize,
        column: usize,
    },

    /// Input ended while a token was still required.
    #[error("Expected {expected}, got EOF")]
    UnexpectedEof { expected: TokenKind },

    /// A `NUMBER` token used as a qubit count or index is not a
    /// non-negative integer.
    #[error("Invalid qubit number '{text}' at line {line}")]
    InvalidNumber { text: String, line: usize },
}

impl CompileError {
    /// The failure category reported by the compiler facade.
    pub fn category(&self) -> &'static str {
        match self {
            CompileError::LexError { .. } => LEX_ERROR,
            CompileError::UnexpectedToken { .. }
            | CompileError::UnexpectedEof { .. }
            | CompileError::InvalidNumber { .. } => PARSE_ERROR,
        }
    }

    /// The token kind the parser was waiting for, if this is a syntax error.
    pub fn expected(&self) -> Option<TokenKind> {
        match self {
            CompileError::UnexpectedToken { expected, .. }
            | CompileError::UnexpectedEof { expected } => Some(*expected),
            CompileError::LexError { .. } | CompileError::InvalidNumber { .. } => None,
        }
    }
}

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
