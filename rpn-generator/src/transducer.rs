//! Operator-precedence transducer
//!
//! Converts the body of a program into postfix order with a shunting-yard
//! pass. Control-flow keywords are handled in [`crate::control_flow`],
//! which threads jump labels through a second stack.

use crate::control_flow;
use crate::labels::LabelAllocator;
use crate::precedence::precedence;
use crate::steps::{Step, StepRecorder};
use crate::symbol::{Keyword, Symbol};
use log::trace;
use rpn_common::{GeneratorError, LabelId, Token};

/// An entry waiting on the operator stack
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Pending {
    pub symbol: Symbol,
    pub token: Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Associativity {
    Left,
    Right,
}

/// State of one generation call
pub(crate) struct Transducer {
    pub(crate) operators: Vec<Pending>,
    pub(crate) labels: Vec<LabelId>,
    pub(crate) output: Vec<Token>,
    pub(crate) allocator: LabelAllocator,
    recorder: StepRecorder,
}

impl Transducer {
    pub(crate) fn new(record_steps: bool) -> Self {
        Self {
            operators: Vec::new(),
            labels: Vec::new(),
            output: Vec::new(),
            allocator: LabelAllocator::new(),
            recorder: StepRecorder::new(record_steps),
        }
    }

    /// Run over the program body, returning the raw output (labels
    /// included) and the recorded steps
    pub(crate) fn run(mut self, tokens: &[Token]) -> Result<(Vec<Token>, Vec<Step>), GeneratorError> {
        for token in tokens {
            self.recorder.record(Some(token), &self.operators, &self.output);
            self.dispatch(token)?;
        }

        self.drain()?;
        self.recorder.record(None, &self.operators, &self.output);
        trace!("allocated {} labels", self.allocator.allocated());

        Ok((self.output, self.recorder.finish()))
    }

    fn dispatch(&mut self, token: &Token) -> Result<(), GeneratorError> {
        let symbol = Symbol::classify(token)?;
        trace!("dispatch '{}' as {}", token.text, symbol);

        match symbol {
            Symbol::Operand => self.output.push(token.clone()),
            Symbol::Block => {}
            Symbol::LeftParen | Symbol::Keyword(Keyword::If) => self.push_marker(symbol, token),
            Symbol::Keyword(Keyword::While) => control_flow::open_loop(self, token),
            Symbol::Keyword(opener @ (Keyword::Do | Keyword::Then)) => {
                control_flow::open_body(self, opener, token)?
            }
            Symbol::Keyword(closer @ (Keyword::Done | Keyword::Else | Keyword::Endif)) => {
                control_flow::close_body(self, closer, token)?
            }
            Symbol::RightParen => {
                self.flush_until(token, |s| s == Symbol::LeftParen, "'('")?;
            }
            Symbol::Operator(op) if op.is_right_assoc() => {
                self.push_operator(symbol, token, Associativity::Right)?
            }
            Symbol::Operator(_) | Symbol::Keyword(Keyword::Read | Keyword::Write) => {
                self.push_operator(symbol, token, Associativity::Left)?
            }
            Symbol::Semicolon => {
                let level = Self::level(symbol, token)?;
                self.pop_while(level, Associativity::Left)?;
            }
        }

        Ok(())
    }

    fn level(symbol: Symbol, token: &Token) -> Result<u8, GeneratorError> {
        precedence(symbol).ok_or_else(|| GeneratorError::precedence_lookup(token))
    }

    pub(crate) fn push_marker(&mut self, symbol: Symbol, token: &Token) {
        self.operators.push(Pending {
            symbol,
            token: token.clone(),
        });
    }

    fn push_operator(
        &mut self,
        symbol: Symbol,
        token: &Token,
        assoc: Associativity,
    ) -> Result<(), GeneratorError> {
        let level = Self::level(symbol, token)?;
        self.pop_while(level, assoc)?;
        self.push_marker(symbol, token);
        Ok(())
    }

    /// Move operators that bind at least as tight as `incoming` to the output
    /// (strictly tighter for a right-associative incoming operator)
    ///
    /// Markers are only ever removed by their closing token.
    fn pop_while(&mut self, incoming: u8, assoc: Associativity) -> Result<(), GeneratorError> {
        while let Some(top) = self.operators.last() {
            if top.symbol.is_marker() {
                break;
            }
            let level = Self::level(top.symbol, &top.token)?;
            let pops = match assoc {
                Associativity::Left => level >= incoming,
                Associativity::Right => level > incoming,
            };
            if !pops {
                break;
            }
            if let Some(entry) = self.operators.pop() {
                self.output.push(entry.token);
            }
        }
        Ok(())
    }

    /// Flush operators to the output until a marker accepted by `accepts`
    /// is on top, then pop and return that marker
    ///
    /// Running out of stack, or meeting any other marker first, means the
    /// `closer` has nothing to close.
    pub(crate) fn flush_until(
        &mut self,
        closer: &Token,
        accepts: impl Fn(Symbol) -> bool,
        expected: &str,
    ) -> Result<Pending, GeneratorError> {
        loop {
            let entry = self
                .operators
                .pop()
                .ok_or_else(|| GeneratorError::stack_underflow(closer, expected))?;

            if accepts(entry.symbol) {
                return Ok(entry);
            }
            if entry.symbol.is_marker() {
                return Err(GeneratorError::stack_underflow(closer, expected));
            }
            self.output.push(entry.token);
        }
    }

    pub(crate) fn pop_label(&mut self, closer: &Token) -> Result<LabelId, GeneratorError> {
        self.labels
            .pop()
            .ok_or_else(|| GeneratorError::stack_underflow(closer, "pending label"))
    }

    /// Empty the operator stack into the output, top first
    fn drain(&mut self) -> Result<(), GeneratorError> {
        while let Some(entry) = self.operators.pop() {
            if entry.symbol.is_marker() {
                return Err(GeneratorError::unclosed(&entry.token));
            }
            self.output.push(entry.token);
        }

        match self.labels.last() {
            Some(&label) => Err(GeneratorError::unclosed(&LabelAllocator::label_token(label))),
            None => Ok(()),
        }
    }
}
