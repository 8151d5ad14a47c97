//! Closed classification of input tokens
//!
//! The lexer hands over tokens as text plus a coarse kind. Before the
//! transducer acts on a token it is classified into a [`Symbol`], so every
//! keyword and operator of the language is a variant that must be handled
//! by an exhaustive `match`.

use rpn_common::{GeneratorError, Token, TokenKind};
use std::fmt;

/// Control-flow and I/O keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Then,
    Else,
    Endif,
    While,
    Do,
    Done,
    Read,
    Write,
}

impl Keyword {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "if" => Some(Keyword::If),
            "then" => Some(Keyword::Then),
            "else" => Some(Keyword::Else),
            "endif" => Some(Keyword::Endif),
            "while" => Some(Keyword::While),
            "do" => Some(Keyword::Do),
            "done" => Some(Keyword::Done),
            "read" => Some(Keyword::Read),
            "write" => Some(Keyword::Write),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Endif => "endif",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::Done => "done",
            Keyword::Read => "read",
            Keyword::Write => "write",
        }
    }
}

/// Binary operators (`@` is the right-associative exponent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Exp,     // @
    Mul,     // *
    Div,     // /
    Add,     // +
    Sub,     // -
    Greater, // >
    Less,    // <
    Equal,   // =
    And,     // &
    Or,      // |
    Assign,  // :=
}

impl Operator {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "@" => Some(Operator::Exp),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            ">" => Some(Operator::Greater),
            "<" => Some(Operator::Less),
            "=" => Some(Operator::Equal),
            "&" => Some(Operator::And),
            "|" => Some(Operator::Or),
            ":=" => Some(Operator::Assign),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Exp => "@",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::Equal => "=",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Assign => ":=",
        }
    }

    pub fn is_right_assoc(self) -> bool {
        matches!(self, Operator::Exp)
    }
}

/// What a token means to the transducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Number or identifier
    Operand,
    LeftParen,
    RightParen,
    /// Statement separator `;`
    Semicolon,
    /// `{` or `}` of a statement block
    Block,
    Operator(Operator),
    Keyword(Keyword),
}

impl Symbol {
    /// Classify a lexer token
    ///
    /// Operands are recognised by kind, everything else by text. Label and
    /// jump pseudo-tokens never come from the lexer and are rejected along
    /// with any text the language does not define.
    pub fn classify(token: &Token) -> Result<Symbol, GeneratorError> {
        let symbol = match token.kind {
            TokenKind::Number | TokenKind::Identifier => Some(Symbol::Operand),
            TokenKind::Operator | TokenKind::Delimiter | TokenKind::Keyword => {
                Self::from_text(&token.text)
            }
            TokenKind::Label | TokenKind::JumpConditional | TokenKind::JumpUnconditional => None,
        };

        symbol.ok_or_else(|| GeneratorError::precedence_lookup(token))
    }

    fn from_text(text: &str) -> Option<Symbol> {
        match text {
            "(" => Some(Symbol::LeftParen),
            ")" => Some(Symbol::RightParen),
            ";" => Some(Symbol::Semicolon),
            "{" | "}" => Some(Symbol::Block),
            _ => Operator::from_text(text)
                .map(Symbol::Operator)
                .or_else(|| Keyword::from_text(text).map(Symbol::Keyword)),
        }
    }

    /// Markers delimit a grouping or control-flow construct on the operator stack
    pub fn is_marker(self) -> bool {
        matches!(
            self,
            Symbol::LeftParen
                | Symbol::Keyword(
                    Keyword::If | Keyword::While | Keyword::Do | Keyword::Then | Keyword::Else
                )
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Operand => write!(f, "operand"),
            Symbol::LeftParen => write!(f, "("),
            Symbol::RightParen => write!(f, ")"),
            Symbol::Semicolon => write!(f, ";"),
            Symbol::Block => write!(f, "block delimiter"),
            Symbol::Operator(op) => write!(f, "{}", op.as_str()),
            Symbol::Keyword(kw) => write!(f, "{}", kw.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_operands_by_kind() {
        assert_eq!(Symbol::classify(&Token::number("42")).unwrap(), Symbol::Operand);
        // an identifier spelled like a keyword is still an operand
        assert_eq!(Symbol::classify(&Token::identifier("do")).unwrap(), Symbol::Operand);
    }

    #[test]
    fn test_classify_by_text() {
        assert_eq!(
            Symbol::classify(&Token::operator(":=")).unwrap(),
            Symbol::Operator(Operator::Assign)
        );
        assert_eq!(
            Symbol::classify(&Token::keyword("endif")).unwrap(),
            Symbol::Keyword(Keyword::Endif)
        );
        assert_eq!(Symbol::classify(&Token::delimiter(";")).unwrap(), Symbol::Semicolon);
        assert_eq!(Symbol::classify(&Token::delimiter("{")).unwrap(), Symbol::Block);
        // some lexers report parentheses as operators
        assert_eq!(Symbol::classify(&Token::operator("(")).unwrap(), Symbol::LeftParen);
    }

    #[test]
    fn test_classify_rejects_unknown_text() {
        let err = Symbol::classify(&Token::operator("%")).unwrap_err();
        assert!(matches!(err, GeneratorError::PrecedenceLookup { ref text, .. } if text == "%"));

        assert!(Symbol::classify(&Token::keyword("program")).is_err());
    }

    #[test]
    fn test_classify_rejects_pseudo_tokens() {
        let label = Token::new("LABEL[1]", TokenKind::Label);
        assert!(Symbol::classify(&label).is_err());
    }

    #[test]
    fn test_markers() {
        assert!(Symbol::LeftParen.is_marker());
        assert!(Symbol::Keyword(Keyword::Else).is_marker());
        assert!(!Symbol::Keyword(Keyword::Write).is_marker());
        assert!(!Symbol::Operator(Operator::Assign).is_marker());
    }
}
