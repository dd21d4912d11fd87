// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas state machine: mouse input in, finished strokes out.
//!
//! `SquiggleState` is toolkit-independent. The canvas widget translates
//! pointer events into `press` / `drag` / `release` calls and repaints when
//! the returned `Transition` asks for it.
//!
//! ```text
//! Idle --press(line or fill button)--> Capturing(mode, button)
//! Capturing --drag--> Capturing                 (point appended)
//! Capturing --release(same button)--> Idle      (stroke appended if any points)
//! ```
//!
//! A press while already capturing keeps the pending points and mode, and
//! releasing any other button leaves the capture running.

use super::{BrushGenerator, ButtonMap, CaptureState, DrawMode, Stroke};
use kurbo::Point;

/// Result of feeding one input event to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// State changed; the canvas should repaint
    Redraw,
    /// A stroke was finished and stored at this index
    Finished(usize),
}

impl Transition {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

/// Everything the canvas owns: the capture, finished strokes, brushes
#[derive(Debug)]
pub struct SquiggleState {
    capture: CaptureState,
    /// Insertion order is paint order
    strokes: Vec<Stroke>,
    buttons: ButtonMap,
    brushes: BrushGenerator,
}

impl SquiggleState {
    pub fn new(buttons: ButtonMap, brushes: BrushGenerator) -> Self {
        Self {
            capture: CaptureState::Idle,
            strokes: Vec::new(),
            buttons,
            brushes,
        }
    }

    /// Mouse button pressed at `pos`
    ///
    /// Starts a capture when idle and the button maps to a draw mode; the
    /// press position becomes the first point.
    pub fn press(&mut self, button: u8, pos: Point) -> Transition {
        if self.capture.is_capturing() {
            tracing::trace!("press of button {} ignored, already capturing", button);
            return Transition::Ignored;
        }

        let Some(mode) = self.buttons.mode_for(button) else {
            tracing::trace!("press of unmapped button {}", button);
            return Transition::Ignored;
        };

        let mut points = Vec::new();
        push_point(&mut points, pos);
        tracing::debug!("capture started: {:?} at {:?}", mode, pos);
        self.capture = CaptureState::Capturing {
            mode,
            button,
            points,
        };
        Transition::Redraw
    }

    /// Pointer moved to `pos`
    pub fn drag(&mut self, pos: Point) -> Transition {
        match &mut self.capture {
            CaptureState::Idle => Transition::Ignored,
            CaptureState::Capturing { points, .. } => {
                push_point(points, pos);
                Transition::Redraw
            }
        }
    }

    /// Mouse button released
    ///
    /// Releasing the button that started the capture finishes it into a
    /// stroke if it holds any points. Other releases are ignored.
    pub fn release(&mut self, button: u8) -> Transition {
        match &self.capture {
            CaptureState::Capturing { button: started, .. } if *started == button => {}
            CaptureState::Capturing { button: started, .. } => {
                tracing::trace!(
                    "release of button {} ignored, capture started by {}",
                    button,
                    started
                );
                return Transition::Ignored;
            }
            CaptureState::Idle => return Transition::Ignored,
        }
        let CaptureState::Capturing { mode, points, .. } = std::mem::take(&mut self.capture) else {
            return Transition::Ignored;
        };

        let point_count = points.len();
        let brush = self.brushes.brush_for(mode);
        let Some(stroke) = Stroke::new(points, mode, brush) else {
            tracing::debug!("capture ended with no points, discarded");
            return Transition::Redraw;
        };

        if self.strokes.try_reserve(1).is_err() {
            tracing::warn!("out of memory, dropping {:?} stroke", mode);
            return Transition::Redraw;
        }
        self.strokes.push(stroke);

        let index = self.strokes.len() - 1;
        tracing::debug!(
            "stroke {} finished: {:?}, {} points",
            index,
            mode,
            point_count
        );
        Transition::Finished(index)
    }

    pub fn capture(&self) -> &CaptureState {
        &self.capture
    }

    pub fn mode(&self) -> DrawMode {
        self.capture.mode()
    }

    /// Finished strokes in paint order
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of point sequences owned: one per stroke plus the pending one
    pub fn sequence_count(&self) -> usize {
        self.strokes.len() + usize::from(self.capture.is_capturing())
    }
}

/// Append a point, dropping it if the buffer cannot grow
fn push_point(points: &mut Vec<Point>, pos: Point) {
    if points.try_reserve(1).is_err() {
        tracing::warn!("out of memory, dropping point {:?}", pos);
        return;
    }
    points.push(pos);
}
