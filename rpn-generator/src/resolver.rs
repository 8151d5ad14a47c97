//! Label resolution
//!
//! Strips label pseudo-tokens from the raw output and records where each
//! one stood in the label-free instruction sequence. Jumps keep their
//! `label_index`; the executor looks the target up in the position table.

use crate::program::LabelPositions;
use rpn_common::{GeneratorError, Token};

/// Split raw output into instructions and label positions
///
/// A label that follows the last instruction resolves to
/// `instructions.len()`, the end of the program.
pub fn resolve_labels(output: Vec<Token>) -> Result<(Vec<Token>, LabelPositions), GeneratorError> {
    let mut instructions = Vec::with_capacity(output.len());
    let mut positions = LabelPositions::new();

    for token in output {
        match (token.is_label(), token.label_index) {
            (true, Some(label)) => {
                if positions.insert(label, instructions.len()).is_some() {
                    return Err(GeneratorError::DuplicateLabel { label });
                }
            }
            _ => instructions.push(token),
        }
    }

    for jump in instructions.iter().filter(|t| t.is_jump()) {
        match jump.label_index {
            Some(label) if positions.contains_key(&label) => {}
            other => {
                return Err(GeneratorError::UnresolvedLabel {
                    label: other.unwrap_or_default(),
                })
            }
        }
    }

    Ok((instructions, positions))
}
