//! riccilang front end
//!
//! Interactive prompt plus file checking and token dumping.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use riccilang::feedback::ParseReport;
use riccilang::{repl, Lexer, Parser as RicciParser};

/// riccilang front end
#[derive(Parser, Debug)]
#[command(name = "ricci")]
#[command(version = "0.1.0")]
#[command(about = "riccilang - lexer and parser for a small interpreted language")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive prompt (default)
    Repl,
    /// Parse a source file and report diagnostics
    Check {
        /// Input source file
        input: PathBuf,

        /// Print a JSON report instead of plain messages
        #[arg(long)]
        json: bool,
    },
    /// Print the token stream of a source file
    Tokens {
        /// Input source file
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        None | Some(Commands::Repl) => run_repl(),
        Some(Commands::Check { input, json }) => check_file(input, *json),
        Some(Commands::Tokens { input }) => dump_tokens(input),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run_repl() -> Result<bool> {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "friend".to_string());

    println!("Hello {}! Welcome to the riccilang programming language!", user);
    println!("Start playing around with it by typing in commands.");

    repl::start(io::stdin().lock(), io::stdout())?;
    Ok(true)
}

fn read_source(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
}

/// Parse a file; `Ok(false)` when diagnostics were recorded
fn check_file(input: &Path, json: bool) -> Result<bool> {
    let source = read_source(input)?;

    let mut parser = RicciParser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if json {
        let report = ParseReport::new(input.display().to_string(), &program, parser.diagnostics());
        println!("{}", report.to_json());
        return Ok(report.success);
    }

    if parser.diagnostics().is_empty() {
        println!("{}: {} statements, no errors", input.display(), program.statements.len());
        return Ok(true);
    }

    for err in parser.diagnostics() {
        let span = err.span();
        eprintln!("{}:{}..{}: {}", input.display(), span.start, span.end, err);
    }
    Ok(false)
}

fn dump_tokens(input: &Path) -> Result<bool> {
    let source = read_source(input)?;

    for token in Lexer::new(&source).tokenize() {
        println!("{} {}", token.kind, token.literal);
    }
    Ok(true)
}
