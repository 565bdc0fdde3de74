//! Compiler facade: lex, parse and generate in one call.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::ast::Program;
use crate::codegen::generate;
use crate::error::{CompileError, CompileResult};
use crate::lexer::{Token, TokenKind, tokenize};
use crate::options::CompileOptions;
use crate::parser::parse;

/// A token as echoed back in a compilation result. The column is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSummary {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
}

impl From<Token> for TokenSummary {
    fn from(token: Token) -> Self {
        Self {
            kind: token.kind,
            value: token.text,
            line: token.line,
        }
    }
}

/// A successful compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compilation {
    /// Generated Qiskit source.
    pub qiskit_code: String,
    /// Qubits declared across all organisms.
    pub num_qubits: u64,
    /// The parsed syntax tree.
    pub ast: Program,
    /// The leading tokens of the source, up to the configured preview limit.
    pub tokens: Vec<TokenSummary>,
}

/// A failed compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileFailure {
    /// Human-readable message.
    pub error: String,
    /// `LexError` or `ParseError`.
    pub error_type: &'static str,
}

impl From<&CompileError> for CompileFailure {
    fn from(err: &CompileError) -> Self {
        Self {
            error: err.to_string(),
            error_type: err.category(),
        }
    }
}

/// Outcome of compiling one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilationResult {
    Success(Compilation),
    Failure(CompileFailure),
}

impl CompilationResult {
    /// Whether the compilation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, CompilationResult::Success(_))
    }

    /// The successful compilation, if any.
    pub fn success(&self) -> Option<&Compilation> {
        match self {
            CompilationResult::Success(compilation) => Some(compilation),
            CompilationResult::Failure(_) => None,
        }
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&CompileFailure> {
        match self {
            CompilationResult::Success(_) => None,
            CompilationResult::Failure(failure) => Some(failure),
        }
    }
}

/// Both outcomes serialize as one flat record led by a `success` flag.
#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for CompilationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CompilationResult::Success(body) => Envelope {
                success: true,
                body,
            }
            .serialize(serializer),
            CompilationResult::Failure(body) => Envelope {
                success: false,
                body,
            }
            .serialize(serializer),
        }
    }
}

/// Compile DNA-Lang source with default options.
pub fn compile(source: &str) -> CompilationResult {
    compile_with(source, &CompileOptions::default())
}

/// Compile DNA-Lang source, converting any failure into a
/// [`CompilationResult::Failure`].
#[instrument(skip_all, fields(source_len = source.len()))]
pub fn compile_with(source: &str, options: &CompileOptions) -> CompilationResult {
    match try_compile(source, options) {
        Ok(compilation) => {
            info!(
                num_qubits = compilation.num_qubits,
                organisms = compilation.ast.organisms.len(),
                "compilation succeeded"
            );
            CompilationResult::Success(compilation)
        }
        Err(err) => {
            warn!(error_type = err.category(), "compilation failed: {err}");
            CompilationResult::Failure(CompileFailure::from(&err))
        }
    }
}

/// Run the pipeline, stopping at the first lexing or parsing error.
pub fn try_compile(source: &str, options: &CompileOptions) -> CompileResult<Compilation> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "lexed source");

    let ast = parse(&tokens)?;
    let generated = generate(&ast);
    debug!(lines = generated.code.lines().count(), "generated code");

    let tokens = tokens
        .into_iter()
        .take(options.preview_limit())
        .map(TokenSummary::from)
        .collect();

    Ok(Compilation {
        qiskit_code: generated.code,
        num_qubits: generated.num_qubits,
        ast,
        tokens,
    })
}
