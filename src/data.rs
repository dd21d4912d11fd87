// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Application state

use crate::components::StrokeFinished;
use crate::config::{Config, Variant};
use crate::model::StrokeMode;
use std::sync::Arc;
use xilem::WindowId;

/// Main application state
///
/// The canvas widget owns the strokes themselves; the app only keeps the
/// counts it shows in the status panel.
pub struct AppState {
    /// Startup configuration, shared with the canvas view
    pub config: Arc<Config>,

    /// Finished outline squiggles
    pub line_count: usize,

    /// Finished filled squiggles
    pub fill_count: usize,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            line_count: 0,
            fill_count: 0,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Count a squiggle the canvas just finished
    pub fn record_stroke(&mut self, finished: StrokeFinished) {
        match finished.mode {
            StrokeMode::Line => self.line_count += 1,
            StrokeMode::Fill => self.fill_count += 1,
        }
    }

    pub fn stroke_count(&self) -> usize {
        self.line_count + self.fill_count
    }

    /// One-line summary for the status panel
    pub fn status_line(&self) -> String {
        match self.stroke_count() {
            0 => "No squiggles yet".to_string(),
            1 => "1 squiggle".to_string(),
            n => format!(
                "{} squiggles ({} lines, {} filled)",
                n, self.line_count, self.fill_count
            ),
        }
    }

    /// Usage hint, shown only by the extended variant
    pub fn instructions(&self) -> Option<String> {
        if self.config.variant != Variant::Extended {
            return None;
        }
        let fill_button = match self.config.fill_button {
            2 => "middle",
            _ => "right",
        };
        Some(format!(
            "Drag with the left button to draw lines, \
             with the {} button to draw filled shapes",
            fill_button
        ))
    }
}

/// Closing the main window ends the event loop
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xilem::AppState as _;

    fn finished(mode: StrokeMode) -> StrokeFinished {
        StrokeFinished {
            index: 0,
            mode,
            point_count: 1,
        }
    }

    #[test]
    fn test_counts_and_status() {
        let mut state = AppState::new(Config::default());
        assert_eq!(state.status_line(), "No squiggles yet");

        state.record_stroke(finished(StrokeMode::Line));
        assert_eq!(state.status_line(), "1 squiggle");

        state.record_stroke(finished(StrokeMode::Fill));
        state.record_stroke(finished(StrokeMode::Fill));
        assert_eq!(state.stroke_count(), 3);
        assert_eq!(state.status_line(), "3 squiggles (1 lines, 2 filled)");
    }

    #[test]
    fn test_instructions_follow_variant() {
        let extended = AppState::new(Config::default());
        let text = extended.instructions().unwrap();
        assert!(text.contains("right button"));

        let basic = AppState::new(Config {
            variant: Variant::Basic,
            ..Config::default()
        });
        assert!(basic.instructions().is_none());

        let middle = AppState::new(Config {
            fill_button: 2,
            ..Config::default()
        });
        assert!(middle.instructions().unwrap().contains("middle button"));
    }

    #[test]
    fn test_keep_running_until_closed() {
        let mut state = AppState::new(Config::default());
        assert!(state.keep_running());

        // What the window's on_close handler does
        state.running = false;
        assert!(!state.keep_running());
    }
}
