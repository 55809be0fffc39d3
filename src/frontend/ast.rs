//! Abstract Syntax Tree definitions for riccilang
//!
//! Every node can report the literal of the token it started from
//! ([`Node::token_literal`]) and render itself back to source text through
//! [`fmt::Display`].

use std::fmt;

use crate::frontend::token::Token;
use crate::utils::{Error, Result};

/// Shared capability of all AST nodes
pub trait Node {
    /// Literal of the token this node was built from
    fn token_literal(&self) -> &str;
}

/// A complete program
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// let name = expr;
    Let(LetStatement),
    /// return [expr];
    Return(ReturnStatement),
    /// Expression statement
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral(lit) => lit.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral(lit) => write!(f, "{}", lit),
        }
    }
}

/// Identifier, as a binding target or as an expression
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` token
    pub token: Token,
    pub name: Identifier,
    /// Not captured yet: the parser skips the value expression
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` token
    pub token: Token,
    pub return_value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.return_value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

/// A bare expression used as a statement
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression
    pub token: Token,
    pub expression: Expression,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Decimal integer literal
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    /// Convert an `INT` token's text into its numeric value
    ///
    /// The lexer keeps integers as text; this is where the expression parser
    /// will turn them into values once `let`/`return` capture their expressions.
    pub fn from_token(token: Token) -> Result<Self> {
        match token.literal.parse::<i64>() {
            Ok(value) => Ok(Self { token, value }),
            Err(_) => Err(Error::InvalidInteger {
                literal: token.literal,
                span: token.span,
            }),
        }
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::token::TokenKind;
    use crate::utils::Span;

    fn tok(kind: TokenKind, literal: &str) -> Token {
        Token::new(kind, literal, Span::default())
    }

    fn ident(name: &str) -> Identifier {
        Identifier::new(tok(TokenKind::Ident, name))
    }

    #[test]
    fn test_let_rendering() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                token: tok(TokenKind::Let, "let"),
                name: ident("myVar"),
                value: Some(Expression::Identifier(ident("anotherVar"))),
            })],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_let_without_value() {
        let stmt = LetStatement {
            token: tok(TokenKind::Let, "let"),
            name: ident("x"),
            value: None,
        };
        assert_eq!(stmt.to_string(), "let x = ;");
    }

    #[test]
    fn test_return_rendering() {
        let five = IntegerLiteral::from_token(tok(TokenKind::Int, "5")).unwrap();
        let with_value = ReturnStatement {
            token: tok(TokenKind::Return, "return"),
            return_value: Some(Expression::IntegerLiteral(five)),
        };
        let bare = ReturnStatement {
            token: tok(TokenKind::Return, "return"),
            return_value: None,
        };
        assert_eq!(with_value.to_string(), "return 5;");
        assert_eq!(bare.to_string(), "return ;");
    }

    #[test]
    fn test_expression_statement() {
        let stmt = Statement::Expression(ExpressionStatement {
            token: tok(TokenKind::Ident, "foobar"),
            expression: Expression::Identifier(ident("foobar")),
        });
        assert_eq!(stmt.token_literal(), "foobar");
        assert_eq!(stmt.to_string(), "foobar");
    }

    #[test]
    fn test_integer_literal_conversion() {
        let lit = IntegerLiteral::from_token(tok(TokenKind::Int, "838383")).unwrap();
        assert_eq!(lit.value, 838383);
        assert_eq!(lit.token_literal(), "838383");

        let too_big = "99999999999999999999";
        let err = IntegerLiteral::from_token(tok(TokenKind::Int, too_big)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInteger { ref literal, .. } if literal == too_big
        ));
    }

    #[test]
    fn test_empty_program() {
        let program = Program::default();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }
}
