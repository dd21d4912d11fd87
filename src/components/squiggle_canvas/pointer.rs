// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for SquiggleWidget

use super::{SquiggleWidget, StrokeFinished};
use crate::model::Transition;
use masonry::core::{EventCtx, PointerButton, PointerState};

/// Number a pointer button the classic way: 1 = left, 2 = middle,
/// 3 = right, 4 and 5 for the side buttons
pub(super) fn button_number(button: PointerButton) -> Option<u8> {
    match button {
        PointerButton::Primary => Some(1),
        PointerButton::Auxiliary => Some(2),
        PointerButton::Secondary => Some(3),
        PointerButton::X1 => Some(4),
        PointerButton::X2 => Some(5),
        _ => None,
    }
}

impl SquiggleWidget {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    pub(super) fn handle_pointer_down(
        &mut self,
        ctx: &mut EventCtx<'_>,
        button: Option<PointerButton>,
        state: &PointerState,
    ) {
        let Some(number) = button.and_then(button_number) else {
            return;
        };

        let local_pos = ctx.local_position(state.position);
        tracing::debug!(
            "[SquiggleWidget::on_pointer_event] Down button {} at {:?}",
            number,
            local_pos
        );

        if self.state.press(number, local_pos).needs_redraw() {
            // Keep receiving moves and the release outside our bounds
            ctx.capture_pointer();
            ctx.request_render();
        }
    }

    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        if !self.state.capture().is_capturing() {
            return;
        }

        let local_pos = ctx.local_position(current.position);
        if self.state.drag(local_pos).needs_redraw() {
            ctx.request_render();
        }
    }

    /// Only the release of the button that started the capture finishes it.
    ///
    /// Masonry drops the pointer capture after any release, so once another
    /// button goes up the rest of the drag is only seen inside the canvas.
    pub(super) fn handle_pointer_up(
        &mut self,
        ctx: &mut EventCtx<'_>,
        button: Option<PointerButton>,
    ) {
        let Some(number) = button.and_then(button_number) else {
            return;
        };

        match self.state.release(number) {
            Transition::Ignored => return,
            Transition::Redraw => {}
            Transition::Finished(index) => {
                if let Some(stroke) = self.state.strokes().get(index) {
                    ctx.submit_action::<StrokeFinished>(StrokeFinished {
                        index,
                        mode: stroke.mode(),
                        point_count: stroke.points().len(),
                    });
                }
            }
        }

        ctx.release_pointer();
        ctx.request_render();
    }
}
