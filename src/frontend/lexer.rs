//! Lexer for riccilang
//!
//! Converts source code into a stream of tokens, one per call to
//! [`Lexer::next_token`]. Scanning is byte-oriented: only ASCII letters,
//! `_` and digits take part in identifier and integer runs.

use log::trace;

use crate::frontend::token::{Token, TokenKind};
use crate::utils::Span;

/// The lexer state
pub struct Lexer {
    /// Source code as bytes
    source: Vec<u8>,
    /// Current position in source
    pos: usize,
    /// Start position of current token
    start: usize,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            source: source.as_bytes().to_vec(),
            pos: 0,
            start: 0,
        }
    }

    /// Get the current byte without advancing
    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// Advance to the next byte
    fn advance(&mut self) -> Option<u8> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Create a span from start to current position
    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Create a token covering start..pos, with that text as its literal
    fn make_token(&self, kind: TokenKind) -> Token {
        // single bytes map to chars the same way for ASCII and stray high bytes
        let literal: String = self.source[self.start..self.pos]
            .iter()
            .map(|&b| char::from(b))
            .collect();
        Token::new(kind, literal, self.make_span())
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.advance();
        }
    }

    /// Consume a maximal run of bytes matching `accept`
    fn read_run(&mut self, accept: fn(u8) -> bool) {
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            self.advance();
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> Token {
        self.read_run(is_letter);
        let mut token = self.make_token(TokenKind::Ident);
        token.kind = TokenKind::lookup_ident(&token.literal);
        token
    }

    /// Read an integer literal; the text is kept as-is
    fn read_number(&mut self) -> Token {
        self.read_run(|c| c.is_ascii_digit());
        self.make_token(TokenKind::Int)
    }

    /// If the next byte is `expected`, consume it and yield `pair`, otherwise `single`
    fn either(&mut self, expected: u8, pair: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(expected) {
            self.advance();
            pair
        } else {
            single
        }
    }

    fn scan(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return Token::eof(self.make_span());
        };

        // Runs advance past themselves
        if is_letter(c) {
            return self.read_identifier();
        }
        if c.is_ascii_digit() {
            return self.read_number();
        }

        self.advance();
        let kind = match c {
            b'=' => self.either(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.either(b'=', TokenKind::NotEq, TokenKind::Bang),
            _ => TokenKind::from_symbol(c).unwrap_or(TokenKind::Illegal),
        };

        self.make_token(kind)
    }

    /// Get the next token
    ///
    /// Never fails: unknown bytes come back as [`TokenKind::Illegal`], and once
    /// the source is exhausted every call returns the EOF token.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!("token {} {:?} at {:?}", token.kind, token.literal, token.span);
        token
    }

    /// Tokenize the entire source and return all tokens
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
