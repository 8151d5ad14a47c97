//! Lowering of `while` loops and `if` conditionals to labels and jumps
//!
//! A loop becomes
//!
//! ```text
//! LABEL[c] <cond> JNE[s] <body> JMP[c] LABEL[s]
//! ```
//!
//! and a conditional becomes
//!
//! ```text
//! <cond> JNE[e] <then> JMP[j] LABEL[e] <else> LABEL[j]
//! <cond> JNE[e] <then> LABEL[e]                          (no else branch)
//! ```
//!
//! The pending labels live on the transducer's label stack between the
//! keyword that allocates them and the keyword that places them.

use crate::labels::LabelAllocator;
use crate::symbol::{Keyword, Symbol};
use crate::transducer::Transducer;
use log::trace;
use rpn_common::{GeneratorError, Token, TokenKind};

/// `while`: open the construct and mark the re-test entry point
pub(crate) fn open_loop(gen: &mut Transducer, token: &Token) {
    gen.push_marker(Symbol::Keyword(Keyword::While), token);

    let cond_label = gen.allocator.new_label();
    trace!("while: loop entry LABEL[{cond_label}]");
    gen.labels.push(cond_label);
    gen.output.push(LabelAllocator::label_token(cond_label));
}

/// `do` / `then`: close the condition and jump over the body when it is false
pub(crate) fn open_body(
    gen: &mut Transducer,
    opener: Keyword,
    token: &Token,
) -> Result<(), GeneratorError> {
    let construct = match opener {
        Keyword::Do => Keyword::While,
        _ => Keyword::If,
    };
    let expected = format!("'{}'", construct.as_str());
    gen.flush_until(token, |s| s == Symbol::Keyword(construct), &expected)?;
    gen.push_marker(Symbol::Keyword(opener), token);

    let skip_label = gen.allocator.new_label();
    trace!("{}: body skip LABEL[{skip_label}]", opener.as_str());
    gen.labels.push(skip_label);
    gen.output
        .push(LabelAllocator::jump(TokenKind::JumpConditional, skip_label)?);

    Ok(())
}

/// Whether a body opened by `marker` may be closed by `closer`
fn closes(closer: Keyword, marker: Symbol) -> bool {
    match (closer, marker) {
        (Keyword::Done, Symbol::Keyword(Keyword::Do)) => true,
        (Keyword::Else, Symbol::Keyword(Keyword::Then)) => true,
        (Keyword::Endif, Symbol::Keyword(Keyword::Then | Keyword::Else)) => true,
        _ => false,
    }
}

/// `done` / `else` / `endif`: close the current body and place its labels
pub(crate) fn close_body(
    gen: &mut Transducer,
    closer: Keyword,
    token: &Token,
) -> Result<(), GeneratorError> {
    let expected = match closer {
        Keyword::Done => "'do'",
        Keyword::Else => "'then'",
        _ => "'then' or 'else'",
    };
    let marker = gen.flush_until(token, |s| closes(closer, s), expected)?;

    match (marker.symbol, closer) {
        (Symbol::Keyword(Keyword::Do), _) => {
            let skip_label = gen.pop_label(token)?;
            let cond_label = gen.pop_label(token)?;
            gen.output
                .push(LabelAllocator::jump(TokenKind::JumpUnconditional, cond_label)?);
            gen.output.push(LabelAllocator::label_token(skip_label));
        }
        (Symbol::Keyword(Keyword::Then), Keyword::Endif) => {
            let else_label = gen.pop_label(token)?;
            gen.output.push(LabelAllocator::label_token(else_label));
        }
        (Symbol::Keyword(Keyword::Then), _) => {
            let else_label = gen.pop_label(token)?;
            let end_label = gen.allocator.new_label();
            trace!("else: join point LABEL[{end_label}]");
            gen.labels.push(end_label);
            gen.output
                .push(LabelAllocator::jump(TokenKind::JumpUnconditional, end_label)?);
            gen.output.push(LabelAllocator::label_token(else_label));
            gen.push_marker(Symbol::Keyword(closer), token);
        }
        (Symbol::Keyword(Keyword::Else), _) => {
            let end_label = gen.pop_label(token)?;
            gen.output.push(LabelAllocator::label_token(end_label));
        }
        _ => return Err(GeneratorError::stack_underflow(token, expected)),
    }

    Ok(())
}
