//! Token model shared by the lexer boundary, the generator and the driver
//!
//! Tokens are plain immutable values. The generator reads the ones handed
//! over by the lexer and creates new label and jump pseudo-tokens, it never
//! rewrites an existing token.

use crate::source_loc::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label identifier, unique within one generation call (starts at 1)
pub type LabelId = u32;

/// Kind of a token
///
/// The aliases accept the lowercase/uppercase spellings used by the lexer's
/// JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(alias = "NUMBER", alias = "number")]
    Number,
    #[serde(alias = "ID", alias = "identifier")]
    Identifier,
    #[serde(alias = "operator")]
    Operator,
    #[serde(alias = "delimiter")]
    Delimiter,
    #[serde(alias = "keyword")]
    Keyword,
    /// Pseudo-token marking a jump target
    #[serde(alias = "LABEL")]
    Label,
    /// Jump taken when the condition on top of the stack is false
    #[serde(alias = "JNE")]
    JumpConditional,
    /// Unconditional jump
    #[serde(alias = "JMP")]
    JumpUnconditional,
}

impl TokenKind {
    /// Numbers and identifiers go straight to the output
    pub fn is_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Identifier)
    }

    pub fn is_jump(self) -> bool {
        matches!(self, TokenKind::JumpConditional | TokenKind::JumpUnconditional)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Delimiter => write!(f, "delimiter"),
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Label => write!(f, "label"),
            TokenKind::JumpConditional => write!(f, "JNE"),
            TokenKind::JumpUnconditional => write!(f, "JMP"),
        }
    }
}

/// A token as produced by the lexer, or a label/jump pseudo-token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Target of a jump, or identity of a label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_index: Option<LabelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
            label_index: None,
            location: None,
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Number)
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Identifier)
    }

    pub fn operator(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Operator)
    }

    pub fn delimiter(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Delimiter)
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Keyword)
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_label(&self) -> bool {
        self.kind == TokenKind::Label
    }

    pub fn is_jump(&self) -> bool {
        self.kind.is_jump()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_kinds() {
        assert!(TokenKind::Number.is_operand());
        assert!(TokenKind::Identifier.is_operand());
        assert!(!TokenKind::Operator.is_operand());
        assert!(!TokenKind::Label.is_operand());
    }

    #[test]
    fn test_jump_kinds() {
        assert!(TokenKind::JumpConditional.is_jump());
        assert!(TokenKind::JumpUnconditional.is_jump());
        assert!(!TokenKind::Label.is_jump());
        assert!(!Token::keyword("while").is_jump());
    }

    #[test]
    fn test_token_from_lexer_json() {
        let json = r#"[
            {"text": "x", "kind": "ID", "location": {"line": 2, "column": 5}},
            {"text": ":=", "kind": "operator"},
            {"text": "10", "kind": "Number"}
        ]"#;
        let tokens: Vec<Token> = serde_json::from_str(json).unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::identifier("x").with_location(SourceLocation::new(2, 5)));
        assert_eq!(tokens[1], Token::operator(":="));
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].label_index, None);
    }

    #[test]
    fn test_token_json_skips_empty_fields() {
        let json = serde_json::to_string(&Token::identifier("n")).unwrap();
        assert_eq!(json, r#"{"text":"n","kind":"Identifier"}"#);
    }
}
