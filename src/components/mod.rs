// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the Squiggles drawing canvas

pub mod squiggle_canvas;

// Re-export commonly used widget views and types
pub use squiggle_canvas::{StrokeFinished, squiggle_view};
