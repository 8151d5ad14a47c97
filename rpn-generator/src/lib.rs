//! RPN Generator
//!
//! Translates the token stream of a validated program into a postfix
//! instruction sequence for a stack machine:
//! - symbol: closed classification of lexer tokens
//! - precedence: operator precedence table
//! - labels: label ids and label/jump pseudo-tokens
//! - transducer / control_flow: the shunting-yard pass with jump lowering
//! - steps: snapshot trace of the pass
//! - resolver: label stripping and position table

pub mod symbol;
pub mod precedence;
pub mod labels;
pub mod steps;
pub mod resolver;
pub mod program;
mod transducer;
mod control_flow;

pub use labels::LabelAllocator;
pub use precedence::lookup as precedence_of;
pub use program::{LabelPositions, RpnProgram};
pub use resolver::resolve_labels;
pub use steps::Step;
pub use symbol::{Keyword, Operator, Symbol};
pub use rpn_common::{GeneratorError, LabelId, SourceLocation, Token, TokenKind};

use log::debug;
use transducer::Transducer;

/// `program`, name, `{`
const FRAME_HEADER_LEN: usize = 3;
/// `}`
const FRAME_TRAILER_LEN: usize = 1;

/// Options for generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Drop the program header and trailer before processing
    pub strip_frame: bool,
    /// Record a step per token (`RpnProgram::steps` is empty otherwise)
    pub record_steps: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            strip_frame: true,
            record_steps: true,
        }
    }
}

/// High-level generator interface
///
/// Holds no state between calls: label ids start at 1 on every call and
/// one generator may be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct RpnGenerator {
    options: GeneratorOptions,
}

impl RpnGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// Generate the postfix program for a lexed token stream
    pub fn generate(&self, tokens: &[Token]) -> Result<RpnProgram, GeneratorError> {
        let body = if self.options.strip_frame {
            strip_frame(tokens)?
        } else {
            tokens
        };
        debug!("Generating RPN for {} tokens", body.len());

        let (output, steps) = Transducer::new(self.options.record_steps).run(body)?;
        let (instructions, label_positions) = resolve_labels(output)?;
        debug!(
            "Generated {} instructions, {} labels, {} steps",
            instructions.len(),
            label_positions.len(),
            steps.len()
        );

        Ok(RpnProgram {
            instructions,
            steps,
            label_positions,
        })
    }
}

/// Generate with default options
pub fn generate(tokens: &[Token]) -> Result<RpnProgram, GeneratorError> {
    RpnGenerator::new().generate(tokens)
}

/// Remove the fixed program header and trailer by position
fn strip_frame(tokens: &[Token]) -> Result<&[Token], GeneratorError> {
    if tokens.len() < FRAME_HEADER_LEN + FRAME_TRAILER_LEN {
        return Err(GeneratorError::MalformedFrame { len: tokens.len() });
    }
    Ok(&tokens[FRAME_HEADER_LEN..tokens.len() - FRAME_TRAILER_LEN])
}
