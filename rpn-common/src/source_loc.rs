//! Source location tracking for error reporting
//!
//! The lexer may attach a location to every token it produces. The
//! generator never inspects it except to point error messages at the
//! offending token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in the program text (line and column are 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Render an optional location as a message suffix (`" at 3:7"` or nothing)
pub(crate) fn at(location: &Option<SourceLocation>) -> String {
    match location {
        Some(loc) => format!(" at {loc}"),
        None => String::new(),
    }
}
