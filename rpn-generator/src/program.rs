//! The generated postfix program

use crate::steps::Step;
use rpn_common::{LabelId, Token};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Label id to index into the instruction sequence
pub type LabelPositions = BTreeMap<LabelId, usize>;

/// Result of one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpnProgram {
    /// Operands, operators and jumps in execution order, without labels
    pub instructions: Vec<Token>,
    /// One step per body token plus the terminal step
    pub steps: Vec<Step>,
    pub label_positions: LabelPositions,
}

impl RpnProgram {
    /// Instruction index a jump token transfers control to
    pub fn jump_target(&self, jump: &Token) -> Option<usize> {
        if !jump.is_jump() {
            return None;
        }
        jump.label_index
            .and_then(|label| self.label_positions.get(&label).copied())
    }

    /// The raw output before label stripping, as recorded by the terminal step
    pub fn labelled_output(&self) -> Option<&[Token]> {
        self.steps
            .last()
            .filter(|step| step.is_terminal())
            .map(|step| step.output.as_slice())
    }
}

impl fmt::Display for RpnProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for inst in &self.instructions {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", inst)?;
            first = false;
        }
        Ok(())
    }
}
