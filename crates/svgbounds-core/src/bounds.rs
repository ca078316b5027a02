//! Bounding rectangle accumulator.
//!
//! [`Bounds`] starts empty and grows as points are added. The empty state is
//! tracked explicitly, so an empty accumulator never reports corners or a size.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::bounds_from_path;

/// Axis-aligned rectangle with `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    fn from_point(x: f64, y: f64) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Returns true if the point lies inside or on the edge of the rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Plain serializable snapshot of a non-empty [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsRecord {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for BoundsRecord {
    fn from(rect: Rect) -> Self {
        Self {
            x1: rect.x1,
            y1: rect.y1,
            x2: rect.x2,
            y2: rect.y2,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Bounding box accumulator used while stepping through path data.
///
/// `extend`, `union` and `union_path` mutate in place and return `&mut Self`
/// so calls can be chained on an owned accumulator:
///
/// ```
/// use svgbounds_core::Bounds;
///
/// let mut bounds = Bounds::new();
/// bounds.extend(10.0, 20.0).extend(-5.0, 4.0);
/// assert_eq!(bounds.width(), Some(15.0));
/// assert_eq!(bounds.height(), Some(16.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    rect: Option<Rect>,
}

impl Bounds {
    /// Creates empty bounds.
    pub fn new() -> Self {
        Self { rect: None }
    }

    /// Builds bounds enclosing every point in the slice.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        points.iter().copied().collect()
    }

    /// Measures straight-line path data. See [`bounds_from_path`].
    pub fn from_path(path: &str) -> Result<Self> {
        bounds_from_path(path)
    }

    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    /// The enclosing rectangle, or `None` if no point has been observed.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Top-left and bottom-right corners.
    pub fn corners(&self) -> Option<((f64, f64), (f64, f64))> {
        self.rect.map(|r| ((r.x1, r.y1), (r.x2, r.y2)))
    }

    pub fn width(&self) -> Option<f64> {
        self.rect.map(|r| r.width())
    }

    pub fn height(&self) -> Option<f64> {
        self.rect.map(|r| r.height())
    }

    /// Grows the bounds to include `(x, y)`.
    ///
    /// Non-finite coordinates (NaN or infinite) are ignored, so the corners
    /// are always finite and `x1 <= x2`, `y1 <= y2` holds.
    pub fn extend(&mut self, x: f64, y: f64) -> &mut Self {
        if !(x.is_finite() && y.is_finite()) {
            tracing::trace!("ignoring non-finite point ({}, {})", x, y);
            return self;
        }

        self.rect = Some(match self.rect {
            None => Rect::from_point(x, y),
            Some(r) => Rect {
                x1: r.x1.min(x),
                y1: r.y1.min(y),
                x2: r.x2.max(x),
                y2: r.y2.max(y),
            },
        });
        self
    }

    /// Grows the bounds to include `other`. Unioning with empty bounds is a no-op.
    pub fn union(&mut self, other: &Bounds) -> &mut Self {
        if let Some(r) = other.rect {
            self.extend(r.x1, r.y1).extend(r.x2, r.y2);
        }
        self
    }

    /// Measures `path` and unions the result into these bounds.
    ///
    /// On error the bounds are left untouched.
    pub fn union_path(&mut self, path: &str) -> Result<&mut Self> {
        let other = bounds_from_path(path)?;
        Ok(self.union(&other))
    }

    /// Serializable snapshot, or `None` for empty bounds.
    pub fn to_record(&self) -> Option<BoundsRecord> {
        self.rect.map(BoundsRecord::from)
    }
}

impl From<BoundsRecord> for Bounds {
    fn from(record: BoundsRecord) -> Self {
        let mut bounds = Bounds::new();
        bounds.extend(record.x1, record.y1).extend(record.x2, record.y2);
        bounds
    }
}

impl Extend<(f64, f64)> for Bounds {
    fn extend<I: IntoIterator<Item = (f64, f64)>>(&mut self, iter: I) {
        for (x, y) in iter {
            Bounds::extend(self, x, y);
        }
    }
}

impl FromIterator<(f64, f64)> for Bounds {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut bounds = Bounds::new();
        Extend::extend(&mut bounds, iter);
        bounds
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rect {
            None => write!(f, "empty"),
            Some(r) => write!(
                f,
                "x1={} y1={} x2={} y2={} width={} height={}",
                r.x1,
                r.y1,
                r.x2,
                r.y2,
                r.width(),
                r.height()
            ),
        }
    }
}
