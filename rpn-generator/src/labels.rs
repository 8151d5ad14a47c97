//! Label allocation and label/jump pseudo-tokens

use rpn_common::{GeneratorError, LabelId, Token, TokenKind};

/// Issues label identifiers for one generation call
#[derive(Debug)]
pub struct LabelAllocator {
    next_label_id: LabelId,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self { next_label_id: 1 }
    }

    pub fn new_label(&mut self) -> LabelId {
        let label = self.next_label_id;
        self.next_label_id += 1;
        label
    }

    /// Number of labels issued so far
    pub fn allocated(&self) -> u32 {
        self.next_label_id - 1
    }

    /// The label pseudo-token marking the position of `label`
    pub fn label_token(label: LabelId) -> Token {
        Token {
            text: format!("LABEL[{label}]"),
            kind: TokenKind::Label,
            label_index: Some(label),
            location: None,
        }
    }

    /// A `JNE` or `JMP` instruction targeting `label`
    pub fn jump(kind: TokenKind, label: LabelId) -> Result<Token, GeneratorError> {
        let mnemonic = match kind {
            TokenKind::JumpConditional => "JNE",
            TokenKind::JumpUnconditional => "JMP",
            _ => return Err(GeneratorError::InvalidJumpKind { kind }),
        };

        Ok(Token {
            text: format!("{mnemonic}[{label}]"),
            kind,
            label_index: Some(label),
            location: None,
        })
    }
}

impl Default for LabelAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_monotonic_from_one() {
        let mut labels = LabelAllocator::new();
        assert_eq!(labels.allocated(), 0);
        assert_eq!(labels.new_label(), 1);
        assert_eq!(labels.new_label(), 2);
        assert_eq!(labels.new_label(), 3);
        assert_eq!(labels.allocated(), 3);
    }

    #[test]
    fn test_label_token() {
        let token = LabelAllocator::label_token(7);
        assert_eq!(token.text, "LABEL[7]");
        assert_eq!(token.kind, TokenKind::Label);
        assert_eq!(token.label_index, Some(7));
    }

    #[test]
    fn test_jump_tokens() {
        let jne = LabelAllocator::jump(TokenKind::JumpConditional, 2).unwrap();
        assert_eq!(jne.text, "JNE[2]");
        assert_eq!(jne.label_index, Some(2));

        let jmp = LabelAllocator::jump(TokenKind::JumpUnconditional, 1).unwrap();
        assert_eq!(jmp.text, "JMP[1]");
        assert_eq!(jmp.kind, TokenKind::JumpUnconditional);
    }

    #[test]
    fn test_invalid_jump_kind() {
        let err = LabelAllocator::jump(TokenKind::Label, 1).unwrap_err();
        assert_eq!(err, GeneratorError::InvalidJumpKind { kind: TokenKind::Label });
    }
}
