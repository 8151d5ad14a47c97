//! Token builder for the integration tests
//!
//! Splits a body on whitespace and types each word the way the lexer
//! would, then wraps it in the `program <name> { ... }` frame.

#![allow(dead_code)]

use rpn_generator::{generate, RpnProgram, Token};

const KEYWORDS: &[&str] = &[
    "if", "then", "else", "endif", "while", "do", "done", "read", "write",
];
const DELIMITERS: &[&str] = &["(", ")", ";", "{", "}"];

pub fn lex(body: &str) -> Vec<Token> {
    body.split_whitespace()
        .map(|word| {
            if word.chars().all(|c| c.is_ascii_digit()) {
                Token::number(word)
            } else if KEYWORDS.contains(&word) {
                Token::keyword(word)
            } else if DELIMITERS.contains(&word) {
                Token::delimiter(word)
            } else if word.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
                Token::identifier(word)
            } else {
                Token::operator(word)
            }
        })
        .collect()
}

pub fn program(body: &str) -> Vec<Token> {
    let mut tokens = vec![
        Token::keyword("program"),
        Token::identifier("test"),
        Token::delimiter("{"),
    ];
    tokens.extend(lex(body));
    tokens.push(Token::delimiter("}"));
    tokens
}

pub fn generate_body(body: &str) -> RpnProgram {
    generate(&program(body)).expect("Should generate")
}

/// Instructions as text, labels stripped
pub fn rpn(body: &str) -> String {
    generate_body(body).to_string()
}

/// Raw output as text, labels included
pub fn labelled(body: &str) -> String {
    let program = generate_body(body);
    let output = program.labelled_output().expect("Should record steps");
    output.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
}

pub const SUM_PROGRESSION: &str = "
    read ( max ) ;
    sum := 0 ;
    i := max ;
    while i > 0 do
        if i < 3 then
            write ( i * i ) ;
        else
            write ( i * i * 2 ) ;
        endif ;
        sum := sum + i ;
        i := i - 1 ;
    done ;
    write ( sum ) ;
";
