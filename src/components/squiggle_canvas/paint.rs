// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for SquiggleWidget

use super::SquiggleWidget;
use super::drawing::{draw_decorations, draw_squiggles};
use crate::theme;
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;

impl SquiggleWidget {
    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        let bg_rect = canvas_size.to_rect();
        fill_color(scene, &bg_rect, theme::canvas::BACKGROUND);
    }

    pub(super) fn paint_decorations(&self, scene: &mut Scene, canvas_size: Size) {
        draw_decorations(scene, canvas_size);
    }

    /// Finished strokes first, then the capture in progress on top
    pub(super) fn paint_squiggles(&self, scene: &mut Scene) {
        draw_squiggles(scene, &self.state);
    }
}
