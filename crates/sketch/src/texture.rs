//! Background grain raster: the one-shot off-screen texture composited
//! under the live entities every frame.
//!
//! Random low-alpha dots plus a handful of short scratch lines over black,
//! in a fixed dim purple palette. Regenerated fully (never incrementally)
//! when the canvas is resized.

use glam::DVec2;
use lumina_core::{DrawContext, Rgba, SketchError, Surface, Xorshift64};

use crate::preset::SketchConfig;

/// Dot diameter range.
const DOT_SIZE_MIN: f64 = 0.5;
const DOT_SIZE_MAX: f64 = 2.0;
/// Dot alpha range in 8-bit units.
const DOT_ALPHA_MIN: f64 = 5.0;
const DOT_ALPHA_MAX: f64 = 15.0;
/// Maximum scratch-line displacement per axis.
const SCRATCH_REACH: f64 = 100.0;

/// Renders the grain texture for the given dimensions.
///
/// Returns `SketchError::InvalidDimensions` if either dimension is zero.
pub fn grain_texture(
    width: usize,
    height: usize,
    config: &SketchConfig,
    rng: &mut Xorshift64,
) -> Result<Surface, SketchError> {
    let mut surface = Surface::new(width, height)?;
    surface.fill(Rgba::BLACK);
    let (w, h) = (width as f64, height as f64);

    let mut ctx = DrawContext::new(&mut surface);
    ctx.no_stroke();
    for _ in 0..config.grain_dots {
        let pos = DVec2::new(rng.next_f64() * w, rng.next_f64() * h);
        let size = rng.next_range(DOT_SIZE_MIN, DOT_SIZE_MAX);
        let alpha = rng.next_range(DOT_ALPHA_MIN, DOT_ALPHA_MAX) / 255.0;
        ctx.set_fill(config.grain_dot_color.with_alpha(alpha));
        ctx.ellipse(pos, size);
    }

    ctx.no_fill();
    ctx.set_stroke(config.grain_line_color);
    ctx.stroke_weight(1.0);
    for _ in 0..config.grain_lines {
        let a = DVec2::new(rng.next_f64() * w, rng.next_f64() * h);
        let b = a + DVec2::new(
            rng.next_range(-SCRATCH_REACH, SCRATCH_REACH),
            rng.next_range(-SCRATCH_REACH, SCRATCH_REACH),
        );
        ctx.line(a, b);
    }

    Ok(surface)
}
