//! Quantum-state block parsing.

use super::Parser;
use crate::ast::{QuantumOp, QuantumState};
use crate::error::CompileResult;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// `quantum_state { (state | entangle | measure)* }`
    pub(super) fn parse_quantum_state(&mut self) -> CompileResult<QuantumState> {
        self.consume(TokenKind::QuantumState)?;
        self.consume(TokenKind::LBrace)?;

        let mut operations = Vec::new();
        while !self.at_block_end() {
            match self.peek() {
                Some(TokenKind::State) => operations.push(self.parse_state()?),
                Some(TokenKind::Entangle) => operations.push(self.parse_entangle()?),
                Some(TokenKind::Measure) => operations.push(self.parse_measure()?),
                _ => self.skip(),
            }
        }

        self.consume(TokenKind::RBrace)?;
        Ok(QuantumState { operations })
    }

    /// `state NAME = superpose ( PARAM, ... ) ;`
    ///
    /// Parameters are collected verbatim whatever their token kind.
    fn parse_state(&mut self) -> CompileResult<QuantumOp> {
        self.consume(TokenKind::State)?;
        let name = self.parse_identifier()?;
        self.consume(TokenKind::Assign)?;
        self.consume(TokenKind::Superpose)?;
        self.consume(TokenKind::LParen)?;

        let tokens = self.tokens;
        let mut params = Vec::new();
        while let Some(token) = tokens.get(self.pos) {
            match token.kind {
                TokenKind::RParen => break,
                TokenKind::Comma => {}
                _ => params.push(token.text.clone()),
            }
            self.skip();
        }

        self.consume(TokenKind::RParen)?;
        self.consume(TokenKind::Semicolon)?;
        Ok(QuantumOp::State { name, params })
    }

    /// `entangle ( QUBIT , QUBIT ) ;`
    fn parse_entangle(&mut self) -> CompileResult<QuantumOp> {
        self.consume(TokenKind::Entangle)?;
        self.consume(TokenKind::LParen)?;
        let qubit1 = self.parse_qubit_ref()?;
        self.consume(TokenKind::Comma)?;
        let qubit2 = self.parse_qubit_ref()?;
        self.consume(TokenKind::RParen)?;
        self.consume(TokenKind::Semicolon)?;
        Ok(QuantumOp::Entangle { qubit1, qubit2 })
    }

    /// `measure ( QUBIT ) -> NAME ;`
    fn parse_measure(&mut self) -> CompileResult<QuantumOp> {
        self.consume(TokenKind::Measure)?;
        self.consume(TokenKind::LParen)?;
        let qubit = self.parse_qubit_ref()?;
        self.consume(TokenKind::RParen)?;
        self.consume(TokenKind::Arrow)?;
        let result = self.parse_identifier()?;
        self.consume(TokenKind::Semicolon)?;
        Ok(QuantumOp::Measure { qubit, result })
    }

    /// `NAME [ INDEX ]`, keeping only the index.
    fn parse_qubit_ref(&mut self) -> CompileResult<u64> {
        self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::LBracket)?;
        let index = self.parse_unsigned()?;
        self.consume(TokenKind::RBracket)?;
        Ok(index)
    }
}
