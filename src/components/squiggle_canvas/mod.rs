// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Squiggle canvas widget - collects freehand mouse input and paints it

mod drawing;
mod paint;
mod pointer;
mod view;

pub use view::squiggle_view;

use crate::config::{Config, Variant};
use crate::model::{BrushGenerator, SquiggleState, StrokeMode};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButtonEvent,
    PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx, TextEvent, Update,
    UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;

/// The drawing canvas widget
///
/// Owns every point it has captured. Dropping the widget drops the finished
/// strokes and any pending capture with it.
pub struct SquiggleWidget {
    /// Capture state machine and finished strokes
    pub(super) state: SquiggleState,

    /// Basic or extended rendering
    pub(super) variant: Variant,
}

impl SquiggleWidget {
    /// Create an empty canvas with a freshly seeded brush generator
    pub fn new(config: &Config) -> Self {
        Self {
            state: SquiggleState::new(
                config.buttons(),
                BrushGenerator::from_entropy(config.variant),
            ),
            variant: config.variant,
        }
    }
}

impl Drop for SquiggleWidget {
    fn drop(&mut self) {
        tracing::debug!(
            "[SquiggleWidget] dropped, releasing {} point sequences",
            self.state.sequence_count()
        );
    }
}

/// Action emitted by the canvas each time a squiggle is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeFinished {
    /// Position of the stroke in paint order
    pub index: usize,
    pub mode: StrokeMode,
    pub point_count: usize,
}

impl Widget for SquiggleWidget {
    type Action = StrokeFinished;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Use all available space (expand to fill the window)
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let canvas_size = ctx.size();
        self.paint_background(scene, canvas_size);

        if self.variant == Variant::Extended {
            self.paint_decorations(scene, canvas_size);
        }

        self.paint_squiggles(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent { button, state, .. }) => {
                self.handle_pointer_down(ctx, *button, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent { button, .. }) => {
                self.handle_pointer_up(ctx, *button);
            }

            PointerEvent::Cancel(_) | PointerEvent::Leave(_) => {
                // Capture continues; an interrupted drag is not recovered
                tracing::trace!(
                    "[SquiggleWidget] pointer left or cancelled, mode {:?}",
                    self.state.mode()
                );
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        // Keys are never handled by the canvas
        if let TextEvent::Keyboard(key_event) = event {
            tracing::trace!("[SquiggleWidget] ignoring key {:?}", key_event.key);
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "Drawing canvas, {} squiggles",
            self.state.strokes().len()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masonry::core::{NewWidget, PointerButton};
    use masonry::kurbo::Point;
    use masonry::testing::{PRIMARY_MOUSE, TestHarness};
    use masonry::theme::default_property_set;

    fn harness(config: &Config) -> TestHarness<SquiggleWidget> {
        TestHarness::create(
            default_property_set(),
            NewWidget::new(SquiggleWidget::new(config)),
        )
    }

    fn stroke_points(harness: &TestHarness<SquiggleWidget>) -> Vec<Vec<Point>> {
        harness
            .root_widget()
            .state
            .strokes()
            .iter()
            .map(|stroke| stroke.points().to_vec())
            .collect()
    }

    #[test]
    fn test_left_drag_draws_line() {
        let mut harness = harness(&Config::default());

        harness.mouse_move((10.0, 10.0));
        harness.mouse_button_press(PointerButton::Primary);
        assert_eq!(harness.pointer_capture_target_id(), Some(harness.root_id()));

        harness.mouse_move((20.0, 10.0));
        harness.mouse_move((20.0, 20.0));
        let pending = harness.root_widget().state.capture().points().map(|p| p.len());
        assert_eq!(pending, Some(3));
        assert!(harness.pop_action::<StrokeFinished>().is_none());

        harness.mouse_button_release(PointerButton::Primary);
        assert_eq!(harness.pointer_capture_target_id(), None);

        assert_eq!(
            stroke_points(&harness),
            vec![vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(20.0, 20.0),
            ]]
        );
        let (finished, id) = harness.pop_action::<StrokeFinished>().unwrap();
        assert_eq!(id, harness.root_id());
        assert_eq!(
            finished,
            StrokeFinished {
                index: 0,
                mode: StrokeMode::Line,
                point_count: 3,
            }
        );
        assert!(harness.pop_action::<StrokeFinished>().is_none());
    }

    #[test]
    fn test_right_click_fills_single_point() {
        let mut harness = harness(&Config::default());

        harness.mouse_move((5.0, 5.0));
        harness.mouse_button_press(PointerButton::Secondary);
        harness.mouse_button_release(PointerButton::Secondary);

        assert_eq!(stroke_points(&harness), vec![vec![Point::new(5.0, 5.0)]]);
        let (finished, _) = harness.pop_action::<StrokeFinished>().unwrap();
        assert_eq!(finished.mode, StrokeMode::Fill);
        assert_eq!(finished.point_count, 1);
    }

    #[test]
    fn test_release_without_capture_emits_nothing() {
        let mut harness = harness(&Config::default());

        harness.mouse_move((30.0, 30.0));
        harness.mouse_button_release(PointerButton::Primary);

        // Unmapped with the default right-button fill
        harness.mouse_button_press(PointerButton::Auxiliary);
        assert_eq!(harness.pointer_capture_target_id(), None);
        harness.mouse_move((40.0, 40.0));
        harness.mouse_button_release(PointerButton::Auxiliary);

        assert!(stroke_points(&harness).is_empty());
        assert!(harness.pop_action::<StrokeFinished>().is_none());
    }

    #[test]
    fn test_leave_mid_drag_keeps_capture() {
        let mut harness = harness(&Config::default());

        harness.mouse_move((10.0, 10.0));
        harness.mouse_button_press(PointerButton::Primary);
        harness.mouse_move((20.0, 10.0));

        harness.process_pointer_event(PointerEvent::Leave(PRIMARY_MOUSE));
        assert!(harness.root_widget().state.capture().is_capturing());
        assert!(stroke_points(&harness).is_empty());
        assert!(harness.pop_action::<StrokeFinished>().is_none());

        harness.mouse_move((20.0, 20.0));
        harness.mouse_button_release(PointerButton::Primary);

        assert_eq!(
            stroke_points(&harness),
            vec![vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(20.0, 20.0),
            ]]
        );
        assert!(harness.pop_action::<StrokeFinished>().is_some());
    }

    #[test]
    fn test_other_button_release_does_not_end_line() {
        let mut harness = harness(&Config::default());

        harness.mouse_move((10.0, 10.0));
        harness.mouse_button_press(PointerButton::Primary);
        harness.mouse_move((20.0, 10.0));

        // Middle click while the left button is held
        harness.mouse_button_press(PointerButton::Auxiliary);
        harness.mouse_button_release(PointerButton::Auxiliary);
        assert!(harness.root_widget().state.capture().is_capturing());
        assert!(harness.pop_action::<StrokeFinished>().is_none());

        harness.mouse_move((30.0, 10.0));
        harness.mouse_button_release(PointerButton::Primary);

        assert_eq!(
            stroke_points(&harness),
            vec![vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(30.0, 10.0),
            ]]
        );
        let (finished, _) = harness.pop_action::<StrokeFinished>().unwrap();
        assert_eq!(finished.point_count, 3);
    }
}
