//! Interactive read loop
//!
//! Each line is lexed and parsed on its own. Diagnostics are printed instead
//! of the program whenever the parser recorded any.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::frontend::lexer::Lexer;
use crate::frontend::parser::Parser;

pub const PROMPT: &str = ">> ";

/// Run the loop until `input` is exhausted
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("input closed, leaving read loop");
            return Ok(());
        }
        // invalid UTF-8 lexes to illegal tokens instead of ending the session
        let line = String::from_utf8_lossy(&buf);

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        let errors = parser.errors();
        if errors.is_empty() {
            writeln!(output, "{}", program)?;
        } else {
            print_parser_errors(&mut output, &errors)?;
        }
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[String]) -> Result<()> {
    writeln!(output, "parser errors:")?;
    for msg in errors {
        writeln!(output, "\t{}", msg)?;
    }
    Ok(())
}
