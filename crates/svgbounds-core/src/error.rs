//! Error handling for SVG path measurement
//!
//! Two kinds of failure can come out of a path:
//! - Unsupported commands (curves, arcs, or any letter outside the line set)
//! - Malformed path data (missing move, bad operand counts, bad numbers)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Reasons a path string is rejected as malformed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedPathError {
    /// The path contains no command at all
    #[error("Path data is empty")]
    Empty,

    /// The first command group is not a move
    #[error("Path must start with a move command, found '{found}' at offset {offset}")]
    MissingLeadingMove {
        /// What was found instead (a command letter or the start of a number).
        found: String,
        /// Byte offset of the offending token.
        offset: usize,
    },

    /// The operands following a command do not form whole groups
    #[error(
        "Command '{command}' at offset {offset} takes operands in groups of {arity}, got {count}"
    )]
    OperandCount {
        /// The command letter.
        command: char,
        /// Number of operands in one invocation of the command.
        arity: usize,
        /// Number of operands actually supplied.
        count: usize,
        /// Byte offset of the command letter.
        offset: usize,
    },

    /// A numeric literal did not match the path number grammar
    #[error("Invalid number '{text}' at offset {offset}")]
    InvalidNumber {
        /// The literal as it appeared in the input.
        text: String,
        /// Byte offset of the literal.
        offset: usize,
    },

    /// A numeric literal overflowed to a non-finite value
    #[error("Number '{text}' at offset {offset} is not finite")]
    NonFinite {
        /// The literal as it appeared in the input.
        text: String,
        /// Byte offset of the literal.
        offset: usize,
    },

    /// Stepping the cursor produced a coordinate or extent outside the `f64` range
    #[error("Command '{command}' at offset {offset} moves the cursor outside the representable range")]
    CoordinateOverflow {
        /// The command letter.
        command: char,
        /// Byte offset of the command letter.
        offset: usize,
    },

    /// A character that is neither a separator, a number nor a letter
    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },
}

/// Path measurement error type
///
/// Either variant is a hard rejection of the input; no partial bounds are
/// ever produced alongside an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A curve, arc or unknown command letter was encountered
    #[error("Unsupported path command '{command}' at offset {offset}")]
    UnsupportedCommand {
        /// The command letter.
        command: char,
        /// Byte offset of the letter.
        offset: usize,
    },

    /// The path data is structurally invalid
    #[error(transparent)]
    Malformed(#[from] MalformedPathError),
}

impl PathError {
    /// Check if this is an unsupported command error
    pub fn is_unsupported_command(&self) -> bool {
        matches!(self, PathError::UnsupportedCommand { .. })
    }

    /// Check if this is a malformed path error
    pub fn is_malformed(&self) -> bool {
        matches!(self, PathError::Malformed(_))
    }

    /// Byte offset in the input where the problem was detected, if any
    pub fn offset(&self) -> Option<usize> {
        match self {
            PathError::UnsupportedCommand { offset, .. } => Some(*offset),
            PathError::Malformed(err) => match err {
                MalformedPathError::Empty => None,
                MalformedPathError::MissingLeadingMove { offset, .. }
                | MalformedPathError::OperandCount { offset, .. }
                | MalformedPathError::InvalidNumber { offset, .. }
                | MalformedPathError::NonFinite { offset, .. }
                | MalformedPathError::CoordinateOverflow { offset, .. }
                | MalformedPathError::UnexpectedCharacter { offset, .. } => Some(*offset),
            },
        }
    }
}

/// Result type using PathError
pub type Result<T> = std::result::Result<T, PathError>;
