//! Splits path data into command groups.

use crate::error::{MalformedPathError, PathError, Result};

use super::number::{scan_number, starts_number, NumberGrammar};

/// Straight-line path command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    Horizontal,
    Vertical,
    ClosePath,
}

/// Coordinate mode of a command: uppercase letters are absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Absolute,
    Relative,
}

/// A recognised command letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub mode: Mode,
}

impl Command {
    /// Maps a path command letter to a command, or `None` for anything outside
    /// `M m L l H h V v Z z`.
    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::Horizontal,
            'V' => CommandKind::Vertical,
            'Z' => CommandKind::ClosePath,
            _ => return None,
        };
        let mode = if c.is_ascii_uppercase() {
            Mode::Absolute
        } else {
            Mode::Relative
        };
        Some(Self { kind, mode })
    }

    /// The letter this command is written as.
    pub fn letter(&self) -> char {
        let upper = match self.kind {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::Horizontal => 'H',
            CommandKind::Vertical => 'V',
            CommandKind::ClosePath => 'Z',
        };
        match self.mode {
            Mode::Absolute => upper,
            Mode::Relative => upper.to_ascii_lowercase(),
        }
    }

    /// Number of operands consumed by one invocation.
    pub fn arity(&self) -> usize {
        match self.kind {
            CommandKind::MoveTo | CommandKind::LineTo => 2,
            CommandKind::Horizontal | CommandKind::Vertical => 1,
            CommandKind::ClosePath => 0,
        }
    }

    pub fn is_relative(&self) -> bool {
        self.mode == Mode::Relative
    }
}

/// One command letter and every operand up to the next command letter.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandGroup {
    pub command: Command,
    pub operands: Vec<f64>,
    /// Byte offset of the command letter in the input.
    pub offset: usize,
}

/// Tokenizes path data using the full number grammar.
pub fn tokenize(path: &str) -> Result<Vec<CommandGroup>> {
    tokenize_with(path, NumberGrammar::Full)
}

pub(crate) fn tokenize_with(path: &str, grammar: NumberGrammar) -> Result<Vec<CommandGroup>> {
    let bytes = path.as_bytes();
    let mut groups: Vec<CommandGroup> = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C | b',' => i += 1,
            _ if b.is_ascii_alphabetic() => {
                let letter = b as char;
                let command = Command::from_char(letter).ok_or(PathError::UnsupportedCommand {
                    command: letter,
                    offset: i,
                })?;
                if groups.is_empty() && command.kind != CommandKind::MoveTo {
                    return Err(MalformedPathError::MissingLeadingMove {
                        found: letter.to_string(),
                        offset: i,
                    }
                    .into());
                }
                groups.push(CommandGroup {
                    command,
                    operands: Vec::new(),
                    offset: i,
                });
                i += 1;
            }
            _ if starts_number(b) => {
                let (value, end) = scan_number(path, i, grammar)?;
                match groups.last_mut() {
                    Some(group) => group.operands.push(value),
                    None => {
                        return Err(MalformedPathError::MissingLeadingMove {
                            found: path[i..end].to_string(),
                            offset: i,
                        }
                        .into())
                    }
                }
                i = end;
            }
            _ => {
                let ch = path[i..].chars().next().unwrap_or(b as char);
                return Err(MalformedPathError::UnexpectedCharacter { ch, offset: i }.into());
            }
        }
    }

    if groups.is_empty() {
        return Err(MalformedPathError::Empty.into());
    }

    tracing::trace!("tokenized {} command groups", groups.len());
    Ok(groups)
}
