//! Operator precedence table (higher binds tighter)

use crate::symbol::{Keyword, Operator, Symbol};
use rpn_common::{GeneratorError, Token};

/// Precedence of a classified symbol
///
/// Operands, `)`, block braces and the closing keywords `done`/`endif`
/// never wait on the operator stack and have no entry.
pub fn precedence(symbol: Symbol) -> Option<u8> {
    let level = match symbol {
        Symbol::Operator(Operator::Exp) => 10,
        Symbol::Operator(Operator::Mul | Operator::Div) => 9,
        Symbol::Operator(Operator::Add | Operator::Sub) => 8,
        Symbol::Operator(Operator::Greater | Operator::Less | Operator::Equal) => 7,
        Symbol::Operator(Operator::And) => 6,
        Symbol::Operator(Operator::Or) => 5,
        Symbol::Operator(Operator::Assign) | Symbol::Keyword(Keyword::Write | Keyword::Read) => 4,
        Symbol::LeftParen => 3,
        Symbol::Semicolon => 2,
        Symbol::Keyword(
            Keyword::Do | Keyword::Then | Keyword::If | Keyword::While | Keyword::Else,
        ) => 1,
        Symbol::Operand
        | Symbol::RightParen
        | Symbol::Block
        | Symbol::Keyword(Keyword::Done | Keyword::Endif) => return None,
    };
    Some(level)
}

/// Look up the precedence of a token
pub fn lookup(token: &Token) -> Result<u8, GeneratorError> {
    let symbol = Symbol::classify(token)?;
    precedence(symbol).ok_or_else(|| GeneratorError::precedence_lookup(token))
}
