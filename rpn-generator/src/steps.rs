//! Step-by-step trace of a generation
//!
//! A step is taken before each input token is dispatched, and once more
//! after the operator stack has been drained. Each step owns its copies of
//! the stack and the output.

use crate::transducer::Pending;
use rpn_common::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the transducer state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Token about to be dispatched; `None` for the terminal step
    pub token: Option<Token>,
    /// Operator stack, bottom first
    pub stack: Vec<Token>,
    /// Output so far, labels included
    pub output: Vec<Token>,
}

impl Step {
    pub fn is_terminal(&self) -> bool {
        self.token.is_none()
    }
}

fn join(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.token.as_ref().map_or("", |t| t.text.as_str());
        write!(f, "{} | {} | {}", token, join(&self.stack), join(&self.output))
    }
}

/// Collects steps while the transducer runs
#[derive(Debug)]
pub(crate) struct StepRecorder {
    enabled: bool,
    steps: Vec<Step>,
}

impl StepRecorder {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            steps: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, token: Option<&Token>, stack: &[Pending], output: &[Token]) {
        if !self.enabled {
            return;
        }

        self.steps.push(Step {
            token: token.cloned(),
            stack: stack.iter().map(|entry| entry.token.clone()).collect(),
            output: output.to_vec(),
        });
    }

    pub(crate) fn finish(self) -> Vec<Step> {
        self.steps
    }
}
