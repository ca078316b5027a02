//! # SVGBounds Core
//!
//! Bounding rectangles for SVG path data made of straight lines.
//! Provides the path tokenizer, the cursor stepper and the bounds
//! accumulator used by the rest of the workspace.
//!
//! Only `M`, `L`, `H`, `V` and `Z` (and their relative forms) are supported.
//! Curve and arc commands are rejected with
//! [`PathError::UnsupportedCommand`] rather than approximated.

pub mod bounds;
pub mod error;
pub mod path;

pub use bounds::{Bounds, BoundsRecord, Rect};
pub use error::{MalformedPathError, PathError, Result};
pub use path::{
    bounds_from_path, tokenize, Command, CommandGroup, CommandKind, Mode, NumberGrammar,
    PathParser, Point,
};
