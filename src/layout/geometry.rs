//! Points and edge-label geometry

use serde::{Deserialize, Serialize};

/// A node position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(&self, other: &Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Point an edge's label is centered on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
}

impl LabelAnchor {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Position> for LabelAnchor {
    fn from(p: Position) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Unit normal `(-dy, dx) / |d|` of the segment `from → to`
///
/// `None` when the endpoints coincide.
pub fn unit_normal(from: &Position, to: &Position) -> Option<(f64, f64)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = dx.hypot(dy);

    if length <= f64::EPSILON {
        None
    } else {
        Some((-dy / length, dx / length))
    }
}

/// Label point for the edge `from → to`
///
/// The midpoint of the segment, pushed `offset` along its unit normal so the
/// text does not sit on the line. Coincident endpoints (self-loops) get the
/// label `loop_offset` straight above the node instead.
pub fn edge_label_point(from: &Position, to: &Position, offset: f64, loop_offset: f64) -> LabelAnchor {
    match unit_normal(from, to) {
        Some((nx, ny)) => {
            let mid = from.midpoint(to);
            LabelAnchor::new(mid.x + nx * offset, mid.y + ny * offset)
        }
        None => LabelAnchor::new(from.x, from.y - loop_offset),
    }
}
