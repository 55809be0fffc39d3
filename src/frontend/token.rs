//! Token definitions for riccilang

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::utils::Span;

/// Reserved words, built once on first lookup
static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    HashMap::from([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("return", TokenKind::Return),
    ])
});

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// End of input always carries an empty literal
    pub fn eof(span: Span) -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: String::new(),
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ============ Special ============
    /// End of input
    Eof,
    /// Unknown/invalid byte
    Illegal,

    // ============ Identifiers and Literals ============
    Ident,
    Int,

    // ============ Operators ============
    /// =
    Assign,
    /// ==
    Eq,
    /// +
    Plus,
    /// -
    Minus,
    /// !
    Bang,
    /// !=
    NotEq,
    /// *
    Asterisk,
    /// /
    Slash,
    /// <
    Lt,
    /// >
    Gt,

    // ============ Delimiters ============
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// (
    LParen,
    /// )
    RParen,
    /// {
    LBrace,
    /// }
    RBrace,

    // ============ Keywords ============
    /// fn
    Function,
    /// let
    Let,
    /// return
    Return,
}

impl TokenKind {
    /// Resolve an identifier run to its keyword kind, or `Ident` if it is not reserved
    pub fn lookup_ident(ident: &str) -> TokenKind {
        KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
    }

    /// Kind of a single-byte operator or delimiter, if `ch` is one
    pub fn from_symbol(ch: u8) -> Option<TokenKind> {
        let kind = match ch {
            b'=' => TokenKind::Assign,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'!' => TokenKind::Bang,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::NotEq => "!=",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
