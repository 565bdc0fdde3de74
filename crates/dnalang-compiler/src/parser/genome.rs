//! Genome block parsing.

use super::Parser;
use crate::ast::{Gene, Genome};
use crate::error::CompileResult;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// `genome { gene* }`
    pub(super) fn parse_genome(&mut self) -> CompileResult<Genome> {
        self.consume(TokenKind::Genome)?;
        self.consume(TokenKind::LBrace)?;

        let mut genes = Vec::new();
        while !self.at_block_end() {
            if self.check(TokenKind::Gene) {
                genes.push(self.parse_gene()?);
            } else {
                self.skip();
            }
        }

        self.consume(TokenKind::RBrace)?;
        Ok(Genome { genes })
    }

    /// `gene NAME = encode ( DATA ) -> qubits [ N ] ;`
    fn parse_gene(&mut self) -> CompileResult<Gene> {
        self.consume(TokenKind::Gene)?;
        let name = self.parse_identifier()?;
        self.consume(TokenKind::Assign)?;
        self.consume(TokenKind::Encode)?;
        self.consume(TokenKind::LParen)?;
        let data_ref = self.parse_identifier()?;
        self.consume(TokenKind::RParen)?;
        self.consume(TokenKind::Arrow)?;
        self.consume(TokenKind::Qubits)?;
        self.consume(TokenKind::LBracket)?;
        let num_qubits = self.parse_qubit_count()?;
        self.consume(TokenKind::RBracket)?;
        self.consume(TokenKind::Semicolon)?;

        Ok(Gene {
            name,
            data_ref,
            num_qubits,
        })
    }
}
