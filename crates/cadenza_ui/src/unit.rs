//! Deferred graphic units.
//!
//! A [`Unit`] is either a plain number or a percentage tied to a reference
//! frame (viewport or parent) and an axis. Percentages are resolved only when
//! the owning attribute is read, so a component laid out in `vw`/`ph` units
//! follows the window and its parent without ever being touched again.

use std::str::FromStr;

use crate::error::UiError;

/// Axis a percentage unit measures along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

/// Reference frame a percentage unit resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// The absolute viewport.
    Viewport,
    /// The immediate parent, falling back to the viewport for root-level
    /// components.
    Parent,
}

/// Dimensions available to unit resolution: the current viewport size and,
/// when the owning component has a parent, the parent's resolved size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitContext {
    /// Viewport size in pixels.
    pub viewport: (f32, f32),
    /// Resolved parent size, if a parent exists.
    pub parent: Option<(f32, f32)>,
}

impl UnitContext {
    /// Creates a resolution context.
    #[must_use]
    pub const fn new(viewport: (f32, f32), parent: Option<(f32, f32)>) -> Self {
        Self { viewport, parent }
    }

    /// Returns the reference dimension for the given axis and frame.
    ///
    /// Parent-frame lookups fall back to the viewport when no parent exists,
    /// so root-level components never fail to resolve.
    #[must_use]
    pub fn dimension(&self, axis: Axis, frame: Frame) -> f32 {
        let source = match frame {
            Frame::Viewport => self.viewport,
            Frame::Parent => self.parent.unwrap_or(self.viewport),
        };
        match axis {
            Axis::Width => source.0,
            Axis::Height => source.1,
        }
    }
}

/// A deferred scalar: a literal number or a reference-frame percentage.
///
/// Immutable once constructed; shorthand strings such as `"50vw"` are parsed
/// once at assignment time via [`FromStr`], never on resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    /// A plain number, returned unchanged on resolve.
    Literal(f32),
    /// A percentage of a reference dimension.
    Percent {
        /// Percentage value (`50.0` means half the reference dimension).
        value: f32,
        /// Axis of the reference dimension.
        axis: Axis,
        /// Frame the reference dimension is taken from.
        frame: Frame,
    },
}

impl Unit {
    /// The zero literal.
    pub const ZERO: Self = Self::Literal(0.0);

    /// A literal pixel value.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self::Literal(value)
    }

    /// A percentage of the viewport width.
    #[must_use]
    pub const fn vw(value: f32) -> Self {
        Self::Percent { value, axis: Axis::Width, frame: Frame::Viewport }
    }

    /// A percentage of the viewport height.
    #[must_use]
    pub const fn vh(value: f32) -> Self {
        Self::Percent { value, axis: Axis::Height, frame: Frame::Viewport }
    }

    /// A percentage of the parent width.
    #[must_use]
    pub const fn pw(value: f32) -> Self {
        Self::Percent { value, axis: Axis::Width, frame: Frame::Parent }
    }

    /// A percentage of the parent height.
    #[must_use]
    pub const fn ph(value: f32) -> Self {
        Self::Percent { value, axis: Axis::Height, frame: Frame::Parent }
    }

    /// Resolves the unit against the given context.
    #[must_use]
    pub fn resolve(&self, ctx: UnitContext) -> f32 {
        match *self {
            Self::Literal(value) => value,
            Self::Percent { value, axis, frame } => value / 100.0 * ctx.dimension(axis, frame),
        }
    }
}

impl From<f32> for Unit {
    fn from(value: f32) -> Self {
        Self::Literal(value)
    }
}

impl FromStr for Unit {
    type Err = UiError;

    /// Parses shorthand such as `"50vw"` or `"12ph"`: a numeric prefix and a
    /// trailing two-letter axis/frame suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || UiError::MalformedUnit { input: s.to_owned() };

        let trimmed = s.trim();
        if !trimmed.is_ascii() || trimmed.len() < 3 {
            return Err(malformed());
        }

        let (prefix, suffix) = trimmed.split_at(trimmed.len() - 2);
        let (axis, frame) = match suffix {
            "vw" => (Axis::Width, Frame::Viewport),
            "vh" => (Axis::Height, Frame::Viewport),
            "pw" => (Axis::Width, Frame::Parent),
            "ph" => (Axis::Height, Frame::Parent),
            _ => return Err(malformed()),
        };
        let value: f32 = prefix.trim().parse().map_err(|_| malformed())?;

        Ok(Self::Percent { value, axis, frame })
    }
}
