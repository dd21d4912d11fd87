// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for SquiggleWidget

use super::{SquiggleWidget, StrokeFinished};
use crate::config::Config;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a squiggle canvas with a callback for finished strokes
///
/// The canvas keeps its own strokes for its whole lifetime; the callback
/// only learns about each one as it is finished.
pub fn squiggle_view<State, F>(config: Arc<Config>, on_stroke_finished: F) -> SquiggleView<State, F>
where
    F: Fn(&mut State, StrokeFinished),
{
    SquiggleView {
        config,
        on_stroke_finished,
        phantom: PhantomData,
    }
}

/// The Xilem View for SquiggleWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct SquiggleView<State, F> {
    config: Arc<Config>,
    on_stroke_finished: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for SquiggleView<State, F> {}

impl<State: 'static, F: Fn(&mut State, StrokeFinished) + 'static> View<State, (), ViewCtx>
    for SquiggleView<State, F>
{
    type Element = Pod<SquiggleWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = SquiggleWidget::new(&self.config);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // The canvas state lives in the widget; configuration is fixed at
        // startup so there is nothing to push down
        if !Arc::ptr_eq(&self.config, &prev.config) {
            tracing::debug!("[SquiggleView::rebuild] config replaced, keeping existing canvas");
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
        // No cleanup needed; the widget drops its strokes
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<StrokeFinished>() {
            Some(finished) => {
                tracing::debug!(
                    "[SquiggleView::message] stroke {} finished ({:?}, {} points)",
                    finished.index,
                    finished.mode,
                    finished.point_count
                );
                (self.on_stroke_finished)(app_state, *finished);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
