// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas view - the drawing surface with a floating status panel

use masonry::properties::types::{AsUnit, UnitPoint};
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{
    ChildAlignment, CrossAxisAlignment, ZStackExt, flex_col, label, sized_box, transformed,
    zstack,
};

use crate::components::squiggle_view;
use crate::data::AppState;
use crate::theme;

/// Window content: full-size canvas with the status panel in the top-left
pub fn canvas_tab(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let margin = theme::size::UI_PANEL_MARGIN;

    zstack((
        // Background: the drawing canvas (full window)
        squiggle_view(state.config.clone(), |state: &mut AppState, finished| {
            state.record_stroke(finished);
        }),
        // Foreground: status panel
        transformed(status_panel(state))
            .translate((margin, margin))
            .alignment(ChildAlignment::SelfAligned(UnitPoint::TOP_LEFT)),
    ))
}

/// Squiggle counts, plus usage instructions in the extended variant
fn status_panel(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let instructions = match state.instructions() {
        Some(text) => Either::A(
            label(text)
                .text_size(14.0)
                .color(theme::text::PRIMARY),
        ),
        None => Either::B(sized_box(label("")).width(0.px()).height(0.px())),
    };

    sized_box(
        flex_col((
            instructions,
            label(state.status_line())
                .text_size(12.0)
                .color(theme::text::SECONDARY),
        ))
        .gap(4.px())
        .cross_axis_alignment(CrossAxisAlignment::Start),
    )
    .padding(8.0)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS)
}
