//! Lexer for DNA-Lang.

use std::ops::Range;

use logos::Logos;
use serde::{Serialize, Serializer};

use crate::error::{CompileError, CompileResult};

/// Token kinds for DNA-Lang.
///
/// Logos resolves overlapping rules by longest match, so the two-character
/// operators always win over their one-character prefixes, and keywords
/// outrank the identifier rule only when the whole word matches.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
pub enum TokenKind {
    // Keywords
    #[token("organism")]
    Organism,

    #[token("genome")]
    Genome,

    #[token("gene")]
    Gene,

    #[token("encode")]
    Encode,

    #[token("qubits")]
    Qubits,

    #[token("quantum_state")]
    QuantumState,

    #[token("state")]
    State,

    #[token("superpose")]
    Superpose,

    #[token("entangle")]
    Entangle,

    #[token("measure")]
    Measure,

    #[token("control")]
    Control,

    #[token("if")]
    If,

    #[token("apply")]
    Apply,

    #[token("evolve")]
    Evolve,

    #[token("fitness")]
    Fitness,

    #[token("E_Dampening")]
    EDampening,

    #[token("Darwinism")]
    Darwinism,

    #[token("compiler")]
    Compiler,

    // Literals
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    #[regex(r#""[^"]*""#)]
    StringLiteral,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    // Punctuation
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("->")]
    Arrow,

    // Operators
    #[token("==")]
    Equals,

    #[token("=")]
    Assign,

    #[token(">")]
    Gt,

    #[token("<")]
    Lt,

    #[token("!=")]
    NotEqual,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("|")]
    Pipe,
}

/// The reserved words of DNA-Lang and the token kind each one lexes to.
pub const KEYWORDS: [(&str, TokenKind); 18] = [
    ("organism", TokenKind::Organism),
    ("genome", TokenKind::Genome),
    ("gene", TokenKind::Gene),
    ("encode", TokenKind::Encode),
    ("qubits", TokenKind::Qubits),
    ("quantum_state", TokenKind::QuantumState),
    ("state", TokenKind::State),
    ("superpose", TokenKind::Superpose),
    ("entangle", TokenKind::Entangle),
    ("measure", TokenKind::Measure),
    ("control", TokenKind::Control),
    ("if", TokenKind::If),
    ("apply", TokenKind::Apply),
    ("evolve", TokenKind::Evolve),
    ("fitness", TokenKind::Fitness),
    ("E_Dampening", TokenKind::EDampening),
    ("Darwinism", TokenKind::Darwinism),
    ("compiler", TokenKind::Compiler),
];

impl TokenKind {
    /// Look up the keyword kind for an exact word.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == text)
            .map(|(_, kind)| *kind)
    }

    /// Whether this kind is one of the reserved words.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| *kind == self)
    }

    /// Canonical upper-case label, as used in diagnostics and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Organism => "ORGANISM",
            TokenKind::Genome => "GENOME",
            TokenKind::Gene => "GENE",
            TokenKind::Encode => "ENCODE",
            TokenKind::Qubits => "QUBITS",
            TokenKind::QuantumState => "QUANTUM_STATE",
            TokenKind::State => "STATE",
            TokenKind::Superpose => "SUPERPOSE",
            TokenKind::Entangle => "ENTANGLE",
            TokenKind::Measure => "MEASURE",
            TokenKind::Control => "CONTROL",
            TokenKind::If => "IF",
            TokenKind::Apply => "APPLY",
            TokenKind::Evolve => "EVOLVE",
            TokenKind::Fitness => "FITNESS",
            TokenKind::EDampening => "E_DAMPENING",
            TokenKind::Darwinism => "DARWINISM",
            TokenKind::Compiler => "COMPILER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Arrow => "ARROW",
            TokenKind::Equals => "EQUALS",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::NotEqual => "NE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Pipe => "PIPE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A token with its source text and starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character, counted in characters.
    pub column: usize,
}

/// Maps token offsets to 1-based lines and columns as lexing advances.
///
/// Only line breaks between tokens start a new line; a break inside a
/// string literal counts toward the column of whatever follows it.
struct LineTracker<'s> {
    source: &'s str,
    /// End of the previous token.
    scanned: usize,
    line: usize,
    /// Byte offset of the first character of the current line.
    line_start: usize,
}

impl<'s> LineTracker<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            scanned: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Line and column of `span.start`.
    fn locate(&mut self, span: &Range<usize>) -> (usize, usize) {
        let gap = &self.source[self.scanned..span.start];
        for (offset, _) in gap.match_indices('\n') {
            self.line += 1;
            self.line_start = self.scanned + offset + 1;
        }
        self.scanned = span.end;

        let column = self.source[self.line_start..span.start].chars().count() + 1;
        (self.line, column)
    }
}

/// Tokenize DNA-Lang source.
///
/// Whitespace, comments and newlines are discarded. The first character
/// that no rule accepts aborts lexing with [`CompileError::LexError`].
pub fn tokenize(source: &str) -> CompileResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer(source);
    let mut lines = LineTracker::new(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (line, column) = lines.locate(&span);

        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                text: lexer.slice().to_string(),
                line,
                column,
            }),
            Err(()) => {
                let character = source[span.start..].chars().next().unwrap_or('\0');
                return Err(CompileError::LexError {
                    character,
                    line,
                    column,
                });
            }
        }
    }

    Ok(tokens)
}
