// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! In-progress capture and the mouse button → stroke mode mapping

use super::{DrawMode, StrokeMode};
use crate::settings;
use kurbo::Point;

/// Capture state of the canvas
///
/// A pending point list exists only while capturing, and a capture always
/// has a real stroke mode.
#[derive(Debug, Clone, Default)]
pub enum CaptureState {
    /// Waiting for a mouse-down
    #[default]
    Idle,
    /// Between a recognized mouse-down and the release of that same button
    Capturing {
        mode: StrokeMode,
        /// Button that started the capture; only its release ends it
        button: u8,
        points: Vec<Point>,
    },
}

impl CaptureState {
    /// Current draw mode (`DrawMode::None` while idle)
    pub fn mode(&self) -> DrawMode {
        match self {
            CaptureState::Idle => DrawMode::None,
            CaptureState::Capturing { mode, .. } => (*mode).into(),
        }
    }

    /// Pending points, if capturing
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            CaptureState::Idle => None,
            CaptureState::Capturing { points, .. } => Some(points),
        }
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self, CaptureState::Capturing { .. })
    }
}

/// Which mouse buttons start which kind of squiggle
///
/// Buttons are numbered 1 = left, 2 = middle, 3 = right. Button 1 always
/// draws lines; the fill button is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMap {
    fill: u8,
}

impl ButtonMap {
    pub fn new(fill_button: u8) -> Self {
        Self { fill: fill_button }
    }

    /// Stroke mode started by `button`, `None` if it starts nothing
    pub fn mode_for(&self, button: u8) -> Option<StrokeMode> {
        if button == settings::buttons::LINE {
            Some(StrokeMode::Line)
        } else if button == self.fill {
            Some(StrokeMode::Fill)
        } else {
            None
        }
    }
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self::new(settings::buttons::FILL)
    }
}
