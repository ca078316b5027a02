//! Cursor state machine: applies command groups to the current point.

use crate::bounds::Bounds;
use crate::error::{MalformedPathError, Result};

use super::tokenizer::{Command, CommandGroup, CommandKind, Mode};

/// Current pen position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves the point by one invocation of `command`. `ops` holds exactly
    /// `command.arity()` operands.
    fn apply(&mut self, command: Command, ops: &[f64]) {
        match (command.kind, command.mode) {
            (CommandKind::MoveTo | CommandKind::LineTo, Mode::Absolute) => {
                self.x = ops[0];
                self.y = ops[1];
            }
            (CommandKind::MoveTo | CommandKind::LineTo, Mode::Relative) => {
                self.x += ops[0];
                self.y += ops[1];
            }
            (CommandKind::Horizontal, Mode::Absolute) => self.x = ops[0],
            (CommandKind::Horizontal, Mode::Relative) => self.x += ops[0],
            (CommandKind::Vertical, Mode::Absolute) => self.y = ops[0],
            (CommandKind::Vertical, Mode::Relative) => self.y += ops[0],
            (CommandKind::ClosePath, _) => {}
        }
    }
}

/// Consumes one command group, extending `bounds` after every point update.
///
/// Operands must form whole invocations; a group with no operands is only
/// valid for close-path, and close-path takes none. Every visited point and
/// the resulting extent must stay finite.
pub(crate) fn step(cursor: &mut Point, group: &CommandGroup, bounds: &mut Bounds) -> Result<()> {
    let command = group.command;
    let arity = command.arity();
    let count = group.operands.len();

    let whole = if arity == 0 {
        count == 0
    } else {
        count > 0 && count % arity == 0
    };
    if !whole {
        return Err(MalformedPathError::OperandCount {
            command: command.letter(),
            arity,
            count,
            offset: group.offset,
        }
        .into());
    }

    if arity == 0 {
        return Ok(());
    }

    let overflow = || MalformedPathError::CoordinateOverflow {
        command: command.letter(),
        offset: group.offset,
    };

    for ops in group.operands.chunks_exact(arity) {
        cursor.apply(command, ops);
        if !(cursor.x.is_finite() && cursor.y.is_finite()) {
            return Err(overflow().into());
        }
        bounds.extend(cursor.x, cursor.y);
        // Finite corners can still be too far apart for width/height to fit.
        if let Some(rect) = bounds.rect() {
            if !(rect.width().is_finite() && rect.height().is_finite()) {
                return Err(overflow().into());
            }
        }
    }

    tracing::trace!(
        "'{}' x{} -> cursor ({}, {})",
        command.letter(),
        count / arity,
        cursor.x,
        cursor.y
    );
    Ok(())
}
