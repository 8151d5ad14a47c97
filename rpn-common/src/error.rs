//! Error handling for the RPN generator
//!
//! Every failure aborts the generation call it happened in. None of these
//! errors is recoverable locally and the caller must not trust any partial
//! output of a failed call.

use crate::source_loc::{at, SourceLocation};
use crate::types::{LabelId, Token, TokenKind};
use thiserror::Error;

/// Main generator error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// An operator or keyword the precedence table does not know
    #[error("No precedence entry for {kind} '{text}'{suffix}", suffix = at(.location))]
    PrecedenceLookup {
        text: String,
        kind: TokenKind,
        location: Option<SourceLocation>,
    },

    #[error("Cannot build a jump of kind {kind}")]
    InvalidJumpKind { kind: TokenKind },

    /// A closing construct found no matching marker or pending label
    #[error("'{construct}'{suffix} has no matching {expected}", suffix = at(.location))]
    StackUnderflow {
        construct: String,
        expected: String,
        location: Option<SourceLocation>,
    },

    #[error("Token stream has {len} tokens, expected at least the 4-token program frame")]
    MalformedFrame { len: usize },

    #[error("'{text}'{suffix} is never closed", suffix = at(.location))]
    UnclosedConstruct {
        text: String,
        location: Option<SourceLocation>,
    },

    #[error("Jump to label {label} has no matching label")]
    UnresolvedLabel { label: LabelId },

    #[error("Label {label} is defined more than once")]
    DuplicateLabel { label: LabelId },
}

impl GeneratorError {
    /// Create a precedence lookup error for a token
    pub fn precedence_lookup(token: &Token) -> Self {
        GeneratorError::PrecedenceLookup {
            text: token.text.clone(),
            kind: token.kind,
            location: token.location,
        }
    }

    /// Create a stack underflow error for the closing token `construct`
    pub fn stack_underflow(construct: &Token, expected: &str) -> Self {
        GeneratorError::StackUnderflow {
            construct: construct.text.clone(),
            expected: expected.to_string(),
            location: construct.location,
        }
    }

    /// Create an error for a marker left open at the end of the program
    pub fn unclosed(token: &Token) -> Self {
        GeneratorError::UnclosedConstruct {
            text: token.text.clone(),
            location: token.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_lookup_message() {
        let token = Token::operator("%").with_location(SourceLocation::new(4, 12));
        let err = GeneratorError::precedence_lookup(&token);

        assert_eq!(err.to_string(), "No precedence entry for operator '%' at 4:12");
    }

    #[test]
    fn test_stack_underflow_message_without_location() {
        let err = GeneratorError::stack_underflow(&Token::keyword("done"), "'do'");
        assert_eq!(err.to_string(), "'done' has no matching 'do'");
        assert!(matches!(err, GeneratorError::StackUnderflow { location: None, .. }));
    }

    #[test]
    fn test_unclosed_message() {
        let token = Token::delimiter("(").with_location(SourceLocation::new(1, 3));
        assert_eq!(GeneratorError::unclosed(&token).to_string(), "'(' at 1:3 is never closed");
    }
}
