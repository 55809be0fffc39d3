//! Parser for riccilang
//!
//! Recursive descent over the lexer's token stream with two tokens of
//! lookahead (`cur_token` and `peek_token`). Errors never stop the parse: a
//! failed statement is dropped, its diagnostic recorded, and parsing resumes
//! with the next token.

use log::debug;

use crate::frontend::ast::*;
use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::{Error, Result, Span};

/// The parser
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<Error>,
}

impl Parser {
    /// Create a new parser from a lexer
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(Span::default()),
            peek_token: Token::eof(Span::default()),
            errors: Vec::new(),
        };
        // First advance fills peek, second moves it into cur
        parser.advance();
        parser.advance();
        parser
    }

    /// Diagnostics rendered as messages, in the order they were recorded
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Diagnostics recorded so far
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    // ==================== Helper Methods ====================

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance if the peek token is `expected`; otherwise leave the position alone
    fn expect_peek(&mut self, expected: TokenKind) -> Result<()> {
        if self.peek_is(expected) {
            self.advance();
            Ok(())
        } else {
            Err(Error::UnexpectedToken {
                expected,
                got: self.peek_token.kind,
                span: self.peek_token.span,
            })
        }
    }

    /// Move forward until the current token is `;` or end of input
    fn skip_to_semicolon(&mut self) {
        while !self.cur_is(TokenKind::Semicolon) && !self.cur_is(TokenKind::Eof) {
            self.advance();
        }
    }

    // ==================== Parsing Methods ====================

    /// Parse a complete program
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(Some(stmt)) => program.statements.push(stmt),
                Ok(None) => {}
                Err(e) => {
                    debug!("dropping statement: {}", e);
                    self.errors.push(e);
                }
            }
            self.advance();
        }

        program
    }

    /// Parse one statement; `Ok(None)` when the current token starts no statement
    fn parse_statement(&mut self) -> Result<Option<Statement>> {
        match self.cur_token.kind {
            TokenKind::Let => Ok(Some(Statement::Let(self.parse_let_statement()?))),
            TokenKind::Return => Ok(Some(Statement::Return(self.parse_return_statement()))),
            _ => {
                debug!(
                    "no statement starts with {} {:?}",
                    self.cur_token.kind, self.cur_token.literal
                );
                Ok(None)
            }
        }
    }

    fn parse_let_statement(&mut self) -> Result<LetStatement> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cur_token.clone());

        self.expect_peek(TokenKind::Assign)?;

        // TODO: parse the value expression once expression parsing exists
        self.skip_to_semicolon();

        Ok(LetStatement {
            token,
            name,
            value: None,
        })
    }

    fn parse_return_statement(&mut self) -> ReturnStatement {
        let token = self.cur_token.clone();

        self.skip_to_semicolon();

        ReturnStatement {
            token,
            return_value: None,
        }
    }
}
