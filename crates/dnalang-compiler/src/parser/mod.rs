//! Recursive-descent parser for DNA-Lang.
//!
//! One method per grammar rule, each deciding on the kind of the current
//! token only. Tokens that do not start a rule at program or block level are
//! skipped rather than rejected.

mod genome;
mod quantum_state;

use tracing::debug;

use crate::ast::{Fitness, Organism, OrganismBlock, Program};
use crate::error::{CompileError, CompileResult};
use crate::lexer::{Token, TokenKind};

/// Parse a token sequence into a [`Program`].
pub fn parse(tokens: &[Token]) -> CompileResult<Program> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}

/// Parser state: the borrowed token stream and the cursor into it.
pub(super) struct Parser<'a> {
    pub(super) tokens: &'a [Token],
    pub(super) pos: usize,
    /// Qubits declared by all genes parsed so far, across organisms.
    declared_qubits: u64,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            declared_qubits: 0,
        }
    }

    /// Peek at the kind of the current token.
    pub(super) fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    /// Check if the current token has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Step over the current token without inspecting it.
    pub(super) fn skip(&mut self) {
        self.pos += 1;
    }

    /// Return the current token and advance if it has the expected kind.
    pub(super) fn consume(&mut self, expected: TokenKind) -> CompileResult<&'a Token> {
        let tokens = self.tokens;
        let token = tokens
            .get(self.pos)
            .ok_or(CompileError::UnexpectedEof { expected })?;

        if token.kind != expected {
            return Err(CompileError::UnexpectedToken {
                expected,
                found: token.kind,
                line: token.line,
                column: token.column,
            });
        }

        self.pos += 1;
        Ok(token)
    }

    /// Consume an identifier and return its text.
    pub(super) fn parse_identifier(&mut self) -> CompileResult<String> {
        Ok(self.consume(TokenKind::Identifier)?.text.clone())
    }

    /// Consume a number used as a qubit index.
    pub(super) fn parse_unsigned(&mut self) -> CompileResult<u64> {
        let token = self.consume(TokenKind::Number)?;
        token.text.parse().map_err(|_| invalid_number(token))
    }

    /// Consume a gene's qubit count and add it to the program total.
    ///
    /// A count that would push the total past `u64::MAX` is rejected.
    pub(super) fn parse_qubit_count(&mut self) -> CompileResult<u64> {
        let token = self.consume(TokenKind::Number)?;
        let count: u64 = token.text.parse().map_err(|_| invalid_number(token))?;
        self.declared_qubits = self
            .declared_qubits
            .checked_add(count)
            .ok_or_else(|| invalid_number(token))?;
        Ok(count)
    }

    /// Whether the cursor is on the closing brace of a block or out of input.
    pub(super) fn at_block_end(&self) -> bool {
        self.peek().is_none_or(|kind| kind == TokenKind::RBrace)
    }

    /// Parse the entire program.
    fn parse_program(&mut self) -> CompileResult<Program> {
        let mut organisms = Vec::new();

        while let Some(kind) = self.peek() {
            if kind == TokenKind::Organism {
                organisms.push(self.parse_organism()?);
            } else {
                debug!(token = %kind, pos = self.pos, "skipping top-level token");
                self.skip();
            }
        }

        debug!(organisms = organisms.len(), "parsed program");
        Ok(Program { organisms })
    }

    /// `organism NAME { (genome | quantum_state | fitness)* }`
    fn parse_organism(&mut self) -> CompileResult<Organism> {
        self.consume(TokenKind::Organism)?;
        let name = self.parse_identifier()?;
        self.consume(TokenKind::LBrace)?;

        let mut blocks = Vec::new();
        while !self.at_block_end() {
            match self.peek() {
                Some(TokenKind::Genome) => {
                    blocks.push(OrganismBlock::Genome(self.parse_genome()?));
                }
                Some(TokenKind::QuantumState) => {
                    blocks.push(OrganismBlock::QuantumState(self.parse_quantum_state()?));
                }
                Some(TokenKind::Fitness) => {
                    blocks.push(OrganismBlock::Fitness(self.parse_fitness()?));
                }
                _ => self.skip(),
            }
        }

        self.consume(TokenKind::RBrace)?;
        Ok(Organism { name, blocks })
    }

    /// `fitness = TOKEN* ;`
    fn parse_fitness(&mut self) -> CompileResult<Fitness> {
        self.consume(TokenKind::Fitness)?;
        self.consume(TokenKind::Assign)?;

        let tokens = self.tokens;
        let mut parts = Vec::new();
        while let Some(token) = tokens.get(self.pos) {
            if token.kind == TokenKind::Semicolon {
                break;
            }
            parts.push(token.text.as_str());
            self.skip();
        }

        self.consume(TokenKind::Semicolon)?;
        Ok(Fitness {
            expression: parts.join(" "),
        })
    }
}

fn invalid_number(token: &Token) -> CompileError {
    CompileError::InvalidNumber {
        text: token.text.clone(),
        line: token.line,
    }
}
