// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing functions for the squiggle canvas
//!
//! Everything here paints through `DrawTarget`, so paint order can be checked
//! without a GPU scene.

use crate::model::{CaptureState, SquiggleState, StrokeMode, build_path};
use crate::theme;
use kurbo::{Affine, Arc, BezPath, Point, Shape, Size, Stroke as StrokeStyle, Vec2};
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;
use std::f64::consts::PI;

/// Arc flattening tolerance for decorations
const ARC_TOLERANCE: f64 = 0.1;

/// The subset of a 2D drawing context the canvas needs
pub trait DrawTarget {
    /// Stroke an open or closed path
    fn stroke_path(&mut self, path: &BezPath, brush: &Brush, style: &StrokeStyle);

    /// Fill a closed path (non-zero winding)
    fn fill_path(&mut self, path: &BezPath, brush: &Brush);
}

impl DrawTarget for Scene {
    fn stroke_path(&mut self, path: &BezPath, brush: &Brush, style: &StrokeStyle) {
        self.stroke(style, Affine::IDENTITY, brush, None, path);
    }

    fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        self.fill(peniko::Fill::NonZero, Affine::IDENTITY, brush, None, path);
    }
}

// ============================================================================
// SQUIGGLES
// ============================================================================

/// Replay every finished stroke in insertion order, then the pending capture
pub fn draw_squiggles(target: &mut impl DrawTarget, state: &SquiggleState) {
    let style = StrokeStyle::new(theme::size::LINE_WIDTH);

    for stroke in state.strokes() {
        let brush = stroke.brush().to_brush(stroke.bounds());
        draw_points(target, stroke.points(), stroke.mode(), &brush, &style);
    }

    if let CaptureState::Capturing { mode, points, .. } = state.capture() {
        draw_points(target, points, *mode, &pending_brush(*mode), &style);
    }
}

/// Brush for a squiggle that has no generated brush yet
fn pending_brush(mode: StrokeMode) -> Brush {
    match mode {
        StrokeMode::Fill => Brush::Solid(theme::squiggle::PENDING_FILL),
        StrokeMode::Line => Brush::Solid(theme::squiggle::LINE),
    }
}

fn draw_points(
    target: &mut impl DrawTarget,
    points: &[Point],
    mode: StrokeMode,
    brush: &Brush,
    style: &StrokeStyle,
) {
    let Some(path) = build_path(points, mode) else {
        return;
    };

    match mode {
        StrokeMode::Line => target.stroke_path(&path, brush, style),
        StrokeMode::Fill => target.fill_path(&path, brush),
    }
}

// ============================================================================
// DECORATIONS
// ============================================================================

/// Two nested sample arcs in the bottom-right corner
pub fn draw_decorations(target: &mut impl DrawTarget, size: Size) {
    let radius = theme::size::DECORATION_RADIUS;
    let margin = theme::size::UI_PANEL_MARGIN;
    let center = Point::new(size.width - margin, size.height - margin);
    let style = StrokeStyle::new(theme::size::DECORATION_WIDTH);
    let brush = Brush::Solid(theme::decoration::ARC);

    for r in [radius, radius * 0.5] {
        let arc = Arc::new(center, Vec2::new(r, r), PI, PI / 2.0, 0.0);
        target.stroke_path(&arc.to_path(ARC_TOLERANCE), &brush, &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::model::{BrushGenerator, ButtonMap};
    use kurbo::PathEl;

    #[derive(Debug)]
    enum Op {
        Stroke { path: Vec<PathEl>, gradient: bool },
        Fill { path: Vec<PathEl>, gradient: bool },
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl DrawTarget for Recorder {
        fn stroke_path(&mut self, path: &BezPath, brush: &Brush, _style: &StrokeStyle) {
            self.ops.push(Op::Stroke {
                path: path.elements().to_vec(),
                gradient: matches!(brush, Brush::Gradient(_)),
            });
        }

        fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
            self.ops.push(Op::Fill {
                path: path.elements().to_vec(),
                gradient: matches!(brush, Brush::Gradient(_)),
            });
        }
    }

    fn new_state() -> SquiggleState {
        SquiggleState::new(
            ButtonMap::new(3),
            BrushGenerator::seeded(Variant::Extended, 5),
        )
    }

    fn first_point(path: &[PathEl]) -> Point {
        match path.first() {
            Some(PathEl::MoveTo(p)) => *p,
            other => panic!("path should start with MoveTo, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_canvas_draws_nothing() {
        let mut recorder = Recorder::default();
        draw_squiggles(&mut recorder, &new_state());
        assert!(recorder.ops.is_empty());
    }

    #[test]
    fn test_strokes_replay_in_insertion_order() {
        let mut state = new_state();
        for i in 0..4 {
            let button = if i % 2 == 0 { 1 } else { 3 };
            state.press(button, Point::new(i as f64, 0.0));
            state.drag(Point::new(i as f64, 10.0));
            state.release(button);
        }

        let mut recorder = Recorder::default();
        draw_squiggles(&mut recorder, &state);

        assert_eq!(recorder.ops.len(), 4);
        for (i, op) in recorder.ops.iter().enumerate() {
            match op {
                Op::Stroke { path, gradient } => {
                    assert_eq!(i % 2, 0);
                    assert!(!gradient);
                    assert_eq!(first_point(path), Point::new(i as f64, 0.0));
                    assert_ne!(path.last(), Some(&PathEl::ClosePath));
                }
                Op::Fill { path, gradient } => {
                    assert_eq!(i % 2, 1);
                    assert!(gradient);
                    assert_eq!(first_point(path), Point::new(i as f64, 0.0));
                    assert_eq!(path.last(), Some(&PathEl::ClosePath));
                }
            }
        }
    }

    #[test]
    fn test_pending_capture_drawn_last() {
        let mut state = new_state();
        state.press(1, Point::new(0.0, 0.0));
        state.release(1);
        state.press(3, Point::new(50.0, 50.0));
        state.drag(Point::new(60.0, 50.0));

        let mut recorder = Recorder::default();
        draw_squiggles(&mut recorder, &state);

        assert_eq!(recorder.ops.len(), 2);
        match &recorder.ops[1] {
            Op::Fill { path, gradient } => {
                assert!(!gradient);
                assert_eq!(first_point(path), Point::new(50.0, 50.0));
            }
            other => panic!("expected pending fill, got {:?}", other),
        }
    }

    #[test]
    fn test_single_point_fill_renders_without_error() {
        let mut state = new_state();
        state.press(3, Point::new(5.0, 5.0));
        state.release(3);

        let mut recorder = Recorder::default();
        draw_squiggles(&mut recorder, &state);

        match &recorder.ops[..] {
            [Op::Fill { path, .. }] => {
                assert_eq!(path, &[PathEl::MoveTo(Point::new(5.0, 5.0)), PathEl::ClosePath]);
            }
            other => panic!("expected one fill, got {:?}", other),
        }
    }

    #[test]
    fn test_decorations_stroke_two_arcs() {
        let mut recorder = Recorder::default();
        draw_decorations(&mut recorder, Size::new(400.0, 300.0));
        assert_eq!(recorder.ops.len(), 2);
        assert!(recorder.ops.iter().all(|op| matches!(op, Op::Stroke { .. })));
    }

    #[test]
    fn test_decorations_follow_canvas_size() {
        for size in [Size::new(400.0, 300.0), Size::new(800.0, 600.0)] {
            let mut recorder = Recorder::default();
            draw_decorations(&mut recorder, size);

            let Op::Stroke { path, .. } = &recorder.ops[0] else {
                panic!("decorations are stroked");
            };
            let start = first_point(path);
            let margin = theme::size::UI_PANEL_MARGIN;
            let expected = Point::new(
                size.width - margin - theme::size::DECORATION_RADIUS,
                size.height - margin,
            );
            assert!(
                (start - expected).hypot() < 1e-6,
                "arc starts at {:?}, expected {:?}",
                start,
                expected
            );
        }
    }
}
