// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Application defaults and input settings.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`. Runtime
//! overrides of the window and input defaults live in `config.rs`.

// ============================================================================
// WINDOW SETTINGS
// ============================================================================
/// Window title used when neither the config file nor the command line
/// provides one
const WINDOW_TITLE: &str = "Squiggles";

/// Initial inner width of the main window (logical pixels)
const WINDOW_WIDTH: f64 = 640.0;

/// Initial inner height of the main window (logical pixels)
const WINDOW_HEIGHT: f64 = 480.0;

/// Smallest accepted window dimension from the config or command line
const WINDOW_MIN_DIMENSION: f64 = 64.0;

/// Largest accepted window dimension (a common GPU texture size limit)
const WINDOW_MAX_DIMENSION: f64 = 16384.0;

// ============================================================================
// MOUSE BUTTON SETTINGS
// ============================================================================
// Buttons are numbered 1 = left, 2 = middle, 3 = right.

/// Button that starts an outline (stroked) squiggle
const LINE_BUTTON: u8 = 1;

/// Default button that starts a filled squiggle
const FILL_BUTTON: u8 = 3;

/// Buttons that may be configured as the fill button
const FILL_BUTTON_CHOICES: [u8; 2] = [2, 3];

// ============================================================================
// BRUSH SETTINGS
// ============================================================================
/// Lower bound of each randomized pastel channel
const PASTEL_CHANNEL_MIN: f32 = 0.6;

/// Upper bound of each randomized pastel channel
const PASTEL_CHANNEL_MAX: f32 = 0.8;

/// Alpha shared by both gradient stops of a filled squiggle
const PASTEL_ALPHA: f32 = 0.85;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Main window defaults
pub mod window {
    pub const TITLE: &str = super::WINDOW_TITLE;
    pub const WIDTH: f64 = super::WINDOW_WIDTH;
    pub const HEIGHT: f64 = super::WINDOW_HEIGHT;
    pub const MIN_DIMENSION: f64 = super::WINDOW_MIN_DIMENSION;
    pub const MAX_DIMENSION: f64 = super::WINDOW_MAX_DIMENSION;
}

/// Mouse button assignments
pub mod buttons {
    /// Button that draws lines (always the primary button)
    pub const LINE: u8 = super::LINE_BUTTON;

    /// Default fill button (right button)
    pub const FILL: u8 = super::FILL_BUTTON;

    /// Valid choices for the fill button
    pub const FILL_CHOICES: [u8; 2] = super::FILL_BUTTON_CHOICES;
}

/// Pastel gradient parameters for filled squiggles
pub mod pastel {
    pub const CHANNEL_MIN: f32 = super::PASTEL_CHANNEL_MIN;
    pub const CHANNEL_MAX: f32 = super::PASTEL_CHANNEL_MAX;
    pub const ALPHA: f32 = super::PASTEL_ALPHA;
}
