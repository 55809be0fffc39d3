//! Structured Feedback Module
//!
//! Machine-readable parse results: which statements came out, and every
//! diagnostic with the byte range it points at.

use serde::{Deserialize, Serialize};

use crate::frontend::ast::Program;
use crate::utils::Error;

/// One diagnostic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl From<&Error> for Diagnostic {
    fn from(err: &Error) -> Self {
        let span = err.span();
        Self {
            message: err.to_string(),
            start: span.start,
            end: span.end,
        }
    }
}

/// Outcome of parsing one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    /// True when no diagnostic was recorded
    pub success: bool,
    pub source_file: String,
    pub statement_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn new(source_file: impl Into<String>, program: &Program, errors: &[Error]) -> Self {
        Self {
            success: errors.is_empty(),
            source_file: source_file.into(),
            statement_count: program.statements.len(),
            diagnostics: errors.iter().map(Diagnostic::from).collect(),
        }
    }

    /// Output as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
