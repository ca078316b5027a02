//! Path data measurement.
//!
//! A path string is split into command groups, then a cursor starting at the
//! origin is stepped through every group. The bounds are extended after each
//! individual point update, so implicit repetitions such as `L 10 10 20 20`
//! contribute both points.
//!
//! The cursor starts at `(0, 0)` and the first move goes through the normal
//! command rules, so a leading `m 5 5` lands on `(5, 5)`. The origin itself is
//! never added to the bounds.

pub mod number;
pub mod stepper;
pub mod tokenizer;

pub use number::NumberGrammar;
pub use stepper::Point;
pub use tokenizer::{tokenize, Command, CommandGroup, CommandKind, Mode};

use crate::bounds::Bounds;
use crate::error::Result;

/// Measures path data with a chosen number grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathParser {
    grammar: NumberGrammar,
}

impl PathParser {
    /// Parser using the full number grammar.
    pub fn new() -> Self {
        Self {
            grammar: NumberGrammar::Full,
        }
    }

    pub fn with_grammar(grammar: NumberGrammar) -> Self {
        if grammar == NumberGrammar::Legacy {
            tracing::warn!(
                "legacy number grammar selected: exponents and '+' signs will be rejected"
            );
        }
        Self { grammar }
    }

    pub fn grammar(&self) -> NumberGrammar {
        self.grammar
    }

    pub fn tokenize(&self, path: &str) -> Result<Vec<CommandGroup>> {
        tokenizer::tokenize_with(path, self.grammar)
    }

    /// Computes the bounding rectangle of `path`.
    ///
    /// The returned bounds are never empty: a path must start with a move, and
    /// a move needs at least one coordinate pair.
    pub fn bounds(&self, path: &str) -> Result<Bounds> {
        let groups = self.tokenize(path)?;

        let mut cursor = Point::default();
        let mut bounds = Bounds::new();
        for group in &groups {
            stepper::step(&mut cursor, group, &mut bounds)?;
        }

        tracing::debug!(
            "measured path ({} groups, {} grammar): {}",
            groups.len(),
            self.grammar,
            bounds
        );
        Ok(bounds)
    }
}

/// Computes the bounding rectangle of straight-line path data.
///
/// Fails with [`PathError::UnsupportedCommand`](crate::PathError::UnsupportedCommand)
/// for curve, arc or unknown commands and with
/// [`PathError::Malformed`](crate::PathError::Malformed) for structurally
/// invalid data.
///
/// ```
/// let bounds = svgbounds_core::bounds_from_path("M 100 100 L 300 100 200 300 z").unwrap();
/// assert_eq!(bounds.width(), Some(200.0));
/// assert_eq!(bounds.height(), Some(200.0));
/// ```
pub fn bounds_from_path(path: &str) -> Result<Bounds> {
    PathParser::new().bounds(path)
}
