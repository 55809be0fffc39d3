use pretty_assertions::assert_eq;

use riccilang::frontend::ast::Statement;
use riccilang::{Lexer, Node, Parser, TokenKind};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source)
        .tokenize()
        .into_iter()
        .map(|t| (t.kind, t.literal))
        .collect()
}

#[test]
fn whitespace_between_tokens_does_not_change_the_stream() {
    let compact = "let x=5;return x!=y;fn(a,b){a+b;};";
    let spaced = "let  x \t=\n5 ;\r\n return   x != y ;\n\tfn ( a , b ) { a + b ; } ;  ";
    assert_eq!(kinds_and_literals(compact), kinds_and_literals(spaced));
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds_and_literals("fn let return foobar"),
        vec![
            (TokenKind::Function, "fn".to_string()),
            (TokenKind::Let, "let".to_string()),
            (TokenKind::Return, "return".to_string()),
            (TokenKind::Ident, "foobar".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn malformed_let_is_dropped_with_one_diagnostic() {
    let mut parser = Parser::new(Lexer::new(
        "let x = 5; let y = 10; let foobar = 838383; let 88924;",
    ));
    let program = parser.parse_program();

    assert_eq!(program.statements.len(), 3);
    assert_eq!(
        parser.errors(),
        vec!["expected next token to be IDENT, got INT instead".to_string()]
    );
}

#[test]
fn statements_render_keyword_then_space() {
    let mut parser = Parser::new(Lexer::new("let a = 1; return 2; let b = a; return;"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 4);

    for stmt in &program.statements {
        let keyword = match stmt {
            Statement::Let(_) => "let",
            Statement::Return(_) => "return",
            Statement::Expression(_) => unreachable!("parser does not build expression statements"),
        };
        assert_eq!(stmt.token_literal(), keyword);
        assert!(stmt.to_string().starts_with(&format!("{} ", keyword)));
    }
}

#[test]
fn illegal_bytes_do_not_stop_parsing() {
    let mut parser = Parser::new(Lexer::new("$ let x = 1; # return 2;"));
    let program = parser.parse_program();
    assert_eq!(program.statements.len(), 2);
    assert!(parser.errors().is_empty());
}
