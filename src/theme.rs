// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_N: Color = Color::from_rgb8(0xe0, 0xe0, 0xe0);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = BASE_O;

// ============================================================================
// SQUIGGLES
// ============================================================================
const LINE_STROKE: Color = BASE_A;
// Basic variant fills and in-progress fills (no brush generated yet)
const SOLID_FILL: Color = Color::from_rgb8(0x99, 0xbb, 0xdd);
const PENDING_FILL: Color = Color::from_rgba8(0x60, 0x60, 0x60, 0x60);

// ============================================================================
// DECORATIONS (extended variant only)
// ============================================================================
const DECORATION_ARC: Color = BASE_I;

// ============================================================================
// UI TEXT AND PANELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_C;
const SECONDARY_UI_TEXT: Color = BASE_F;
const PANEL_BACKGROUND: Color = BASE_N;
const PANEL_OUTLINE: Color = BASE_I;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the drawing canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Colors for squiggle strokes and fills
pub mod squiggle {
    use super::Color;
    /// Solid color of every outline squiggle
    pub const LINE: Color = super::LINE_STROKE;
    /// Fill color used by the basic variant
    pub const SOLID_FILL: Color = super::SOLID_FILL;
    /// Fill color of a squiggle still being drawn
    pub const PENDING_FILL: Color = super::PENDING_FILL;
}

/// Colors for cosmetic decorations
pub mod decoration {
    use super::Color;
    pub const ARC: Color = super::DECORATION_ARC;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
}

/// Colors for the floating status panel
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
}

/// Sizes for rendering
pub mod size {
    /// Width of outline squiggles
    pub const LINE_WIDTH: f64 = 1.0;

    /// Width of the decorative arcs
    pub const DECORATION_WIDTH: f64 = 2.0;
    /// Radius of the larger decorative arc
    pub const DECORATION_RADIUS: f64 = 48.0;

    // ===== UI Layout =====
    /// Margin from screen edges for floating UI panels
    pub const UI_PANEL_MARGIN: f64 = 16.0;
    /// Rounded corner radius for panels
    pub const PANEL_RADIUS: f64 = 8.0;
    /// Border thickness for panels
    pub const PANEL_BORDER_WIDTH: f64 = 1.5;
}
