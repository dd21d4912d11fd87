// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Finished squiggles and the path geometry shared with in-progress ones.

use super::brush::StrokeBrush;
use kurbo::{BezPath, Point, Rect};

/// Canvas-wide draw mode, as reported to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Not drawing
    #[default]
    None,
    Line,
    Fill,
}

/// How a captured or finished point sequence is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeMode {
    /// Open polyline, stroked
    Line,
    /// Polyline closed back to its first point, filled
    Fill,
}

impl From<StrokeMode> for DrawMode {
    fn from(mode: StrokeMode) -> Self {
        match mode {
            StrokeMode::Line => DrawMode::Line,
            StrokeMode::Fill => DrawMode::Fill,
        }
    }
}

/// A finished squiggle
///
/// Always holds at least one point. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Point>,
    mode: StrokeMode,
    brush: StrokeBrush,
}

impl Stroke {
    /// Create a stroke, or `None` if `points` is empty
    pub fn new(points: Vec<Point>, mode: StrokeMode, brush: StrokeBrush) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            mode,
            brush,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    pub fn brush(&self) -> &StrokeBrush {
        &self.brush
    }

    /// Axis-aligned bounds of the recorded points
    pub fn bounds(&self) -> Rect {
        points_bounds(&self.points)
    }
}

/// Build the path for a point sequence
///
/// Moves to the first point and draws straight segments through the rest.
/// Fill mode closes the path. Returns `None` for an empty sequence.
pub fn build_path(points: &[Point], mode: StrokeMode) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;

    let mut path = BezPath::new();
    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
    if mode == StrokeMode::Fill {
        path.close_path();
    }
    Some(path)
}

/// Bounding rectangle of a point sequence (`Rect::ZERO` when empty)
fn points_bounds(points: &[Point]) -> Rect {
    let Some((first, rest)) = points.split_first() else {
        return Rect::ZERO;
    };
    rest.iter()
        .fold(Rect::from_points(*first, *first), |rect, pt| rect.union_pt(*pt))
}
