// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Brush descriptors for finished squiggles.
//!
//! Outline squiggles always use the theme's solid line color. Filled
//! squiggles get a solid color in the basic variant and a two-stop pastel
//! gradient in the extended variant. Each gradient stop has its RGB channels
//! drawn independently from the pastel range in `settings::pastel`.

use super::StrokeMode;
use crate::config::Variant;
use crate::settings;
use crate::theme;
use kurbo::{Point, Rect};
use masonry::vello::peniko::{Brush, Color, Gradient};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Color description stored with a finished squiggle
#[derive(Debug, Clone, Copy)]
pub enum StrokeBrush {
    /// A single flat color
    Solid(Color),
    /// Linear gradient from `start` to `end`
    Gradient { start: Color, end: Color },
}

impl StrokeBrush {
    /// Resolve into a renderable brush
    ///
    /// Gradients run diagonally across `bounds`, top-left to bottom-right.
    pub fn to_brush(&self, bounds: Rect) -> Brush {
        match *self {
            StrokeBrush::Solid(color) => Brush::Solid(color),
            StrokeBrush::Gradient { start, end } => {
                let gradient = Gradient::new_linear(
                    Point::new(bounds.x0, bounds.y0),
                    Point::new(bounds.x1, bounds.y1),
                )
                .with_stops([start, end]);
                Brush::Gradient(gradient)
            }
        }
    }
}

/// Produces a fresh brush for each finished squiggle
///
/// Owns its random generator, seeded once from OS entropy.
#[derive(Debug)]
pub struct BrushGenerator {
    variant: Variant,
    rng: StdRng,
}

impl BrushGenerator {
    /// Create a generator seeded from OS entropy
    pub fn from_entropy(variant: Variant) -> Self {
        Self {
            variant,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed
    pub fn seeded(variant: Variant, seed: u64) -> Self {
        Self {
            variant,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Brush for a squiggle finished in `mode`
    pub fn brush_for(&mut self, mode: StrokeMode) -> StrokeBrush {
        match (mode, self.variant) {
            (StrokeMode::Fill, Variant::Extended) => StrokeBrush::Gradient {
                start: self.pastel(),
                end: self.pastel(),
            },
            (StrokeMode::Fill, Variant::Basic) => StrokeBrush::Solid(theme::squiggle::SOLID_FILL),
            (StrokeMode::Line, _) => StrokeBrush::Solid(theme::squiggle::LINE),
        }
    }

    fn pastel(&mut self) -> Color {
        let range = settings::pastel::CHANNEL_MIN..=settings::pastel::CHANNEL_MAX;
        let r = self.rng.gen_range(range.clone());
        let g = self.rng.gen_range(range.clone());
        let b = self.rng.gen_range(range);
        Color::new([r, g, b, settings::pastel::ALPHA])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_pastel_range(color: &Color) -> bool {
        let [r, g, b, a] = color.components;
        [r, g, b].iter().all(|c| {
            (settings::pastel::CHANNEL_MIN..=settings::pastel::CHANNEL_MAX).contains(c)
        }) && a == settings::pastel::ALPHA
    }

    #[test]
    fn extended_fill_gets_pastel_gradient() {
        let mut brushes = BrushGenerator::seeded(Variant::Extended, 7);
        for _ in 0..50 {
            match brushes.brush_for(StrokeMode::Fill) {
                StrokeBrush::Gradient { start, end } => {
                    assert!(in_pastel_range(&start), "start {:?}", start);
                    assert!(in_pastel_range(&end), "end {:?}", end);
                }
                other => panic!("expected gradient, got {:?}", other),
            }
        }
    }

    #[test]
    fn basic_fill_is_solid() {
        let mut brushes = BrushGenerator::seeded(Variant::Basic, 7);
        match brushes.brush_for(StrokeMode::Fill) {
            StrokeBrush::Solid(color) => {
                assert_eq!(color.components, theme::squiggle::SOLID_FILL.components);
            }
            other => panic!("expected solid, got {:?}", other),
        }
    }

    #[test]
    fn line_is_always_solid_line_color() {
        for variant in [Variant::Basic, Variant::Extended] {
            let mut brushes = BrushGenerator::seeded(variant, 1);
            match brushes.brush_for(StrokeMode::Line) {
                StrokeBrush::Solid(color) => {
                    assert_eq!(color.components, theme::squiggle::LINE.components);
                }
                other => panic!("expected solid, got {:?}", other),
            }
        }
    }

    #[test]
    fn same_seed_same_colors() {
        let mut a = BrushGenerator::seeded(Variant::Extended, 42);
        let mut b = BrushGenerator::seeded(Variant::Extended, 42);
        let (StrokeBrush::Gradient { start: a0, end: a1 }, StrokeBrush::Gradient { start: b0, end: b1 }) =
            (a.brush_for(StrokeMode::Fill), b.brush_for(StrokeMode::Fill))
        else {
            panic!("expected gradients");
        };
        assert_eq!(a0.components, b0.components);
        assert_eq!(a1.components, b1.components);
    }

    #[test]
    fn gradient_resolves_to_gradient_brush() {
        let mut brushes = BrushGenerator::seeded(Variant::Extended, 3);
        let brush = brushes
            .brush_for(StrokeMode::Fill)
            .to_brush(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(matches!(brush, Brush::Gradient(_)));
    }
}
