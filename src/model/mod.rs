// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing model: captured points, finished strokes and their brushes

pub mod brush;
pub mod capture;
pub mod state;
pub mod stroke;

pub use brush::{BrushGenerator, StrokeBrush};
pub use capture::{ButtonMap, CaptureState};
pub use state::{SquiggleState, Transition};
pub use stroke::{DrawMode, Stroke, StrokeMode, build_path};
