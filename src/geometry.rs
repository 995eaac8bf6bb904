//! Rectangle model and the closed tag sets that select edges for comparison.
//!
//! Coordinates are CSS pixels with the origin at the top-left corner and the
//! y axis growing downward, matching what browser automation layers report
//! from `getBoundingClientRect`. All values are `f64`; comparisons elsewhere
//! use full precision and only display output is rounded.

use serde::{Deserialize, Serialize};

/// Which coordinate participates in a positional comparison.
///
/// `Horizontal` measures x positions (left/centerX/right edges, widths);
/// `Vertical` measures y positions (top/centerY/bottom edges, heights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// Which edge along an axis to compare: `Start` is left/top, `End` is
/// right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Center,
    End,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        }
    }
}

/// Side of a reference element, naming where the subject is expected to sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    /// The axis a gap on this side is measured along.
    pub fn axis(&self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }
}

/// Axis-aligned bounding rectangle for a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size, e.g. the viewport.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn size_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Coordinate of the start/center/end edge along an axis.
    pub fn position(&self, axis: Axis, alignment: Alignment) -> f64 {
        match (axis, alignment) {
            (Axis::Horizontal, Alignment::Start) => self.left(),
            (Axis::Horizontal, Alignment::Center) => self.center_x(),
            (Axis::Horizontal, Alignment::End) => self.right(),
            (Axis::Vertical, Alignment::Start) => self.top(),
            (Axis::Vertical, Alignment::Center) => self.center_y(),
            (Axis::Vertical, Alignment::End) => self.bottom(),
        }
    }

    /// Width divided by height. Callers guard against zero height before
    /// treating the result as a ratio.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Signed distance between this rectangle's center and `container`'s
    /// center along an axis. Positive means shifted toward the end edge.
    pub fn offset_from_center_of(&self, container: &Rect, axis: Axis) -> f64 {
        self.position(axis, Alignment::Center) - container.position(axis, Alignment::Center)
    }

    /// Whether the interiors of the two rectangles share any area.
    ///
    /// Strict inequalities: rectangles that touch along an edge or at a
    /// corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Rectangle shrunk by `margin` on every side, with size clamped at zero.
    pub fn inset(&self, margin: f64) -> Rect {
        Rect {
            x: self.x + margin,
            y: self.y + margin,
            width: (self.width - 2.0 * margin).max(0.0),
            height: (self.height - 2.0 * margin).max(0.0),
        }
    }

    /// How far this rectangle protrudes past each edge of `container`,
    /// clamped at zero per edge. All four zeros means fully contained.
    pub fn overflow_within(&self, container: &Rect) -> EdgeOverflow {
        EdgeOverflow {
            top: (container.top() - self.top()).max(0.0),
            right: (self.right() - container.right()).max(0.0),
            bottom: (self.bottom() - container.bottom()).max(0.0),
            left: (container.left() - self.left()).max(0.0),
        }
    }

    /// Signed gap between this rectangle and `reference` with this rectangle
    /// sitting on `side` of it. Zero means the edges touch, negative means
    /// they overlap along that axis.
    pub fn gap_beside(&self, side: Side, reference: &Rect) -> f64 {
        match side {
            Side::Top => reference.top() - self.bottom(),
            Side::Bottom => self.top() - reference.bottom(),
            Side::Left => reference.left() - self.right(),
            Side::Right => self.left() - reference.right(),
        }
    }
}

/// Per-edge protrusion distances produced by [`Rect::overflow_within`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOverflow {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeOverflow {
    /// Total protrusion along the x axis.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total protrusion along the y axis.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    /// Edge/value pairs in top, right, bottom, left order.
    pub fn per_side(&self) -> [(Side, f64); 4] {
        [
            (Side::Top, self.top),
            (Side::Right, self.right),
            (Side::Bottom, self.bottom),
            (Side::Left, self.left),
        ]
    }
}

/// Gap between two rectangles along an axis, ordered by position rather than
/// by argument order, and clamped at zero when they overlap. Symmetric in its
/// first two arguments.
pub fn gap_along_axis(a: &Rect, b: &Rect, axis: Axis) -> f64 {
    let (first, second) = if a.position(axis, Alignment::Start) <= b.position(axis, Alignment::Start)
    {
        (a, b)
    } else {
        (b, a)
    };
    (second.position(axis, Alignment::Start) - first.position(axis, Alignment::End)).max(0.0)
}

/// Viewport dimensions reported by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
