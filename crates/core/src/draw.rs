//! Immediate-mode drawing layer over a [`Surface`].
//!
//! A [`DrawContext`] borrows a surface and carries the two pieces of shared
//! mutable state the sketch relies on:
//!
//! - **Style** (fill, stroke, stroke weight, blend mode) persists across
//!   draw calls, exactly like the underlying canvas model. Every entity's
//!   draw routine must therefore set each style attribute it depends on
//!   before emitting shapes; nothing resets between entities.
//! - **Transform** (translation + rotation) is only changed inside
//!   [`DrawContext::scoped`], which restores the previous transform *and*
//!   style when the closure returns, on every return path.
//!
//! Shapes are rasterized on the CPU with signed-distance edge coverage,
//! giving one pixel of anti-aliasing. `ellipse` takes a *diameter*, matching
//! the convention the original sketch was written against.

use glam::DVec2;

use crate::color::Rgba;
use crate::surface::Surface;

/// Compositing mode for a draw call.
///
/// `Normal` is source-over alpha blending. `Lighter` adds the weighted
/// source to the destination and saturates, the canvas `'lighter'` mode
/// the sketch toggles for high-depth blobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Lighter,
}

/// Translation + rotation applied to all draw-call coordinates.
///
/// Composition order matches the canvas transform stack: `translate`
/// moves the origin in the current (possibly rotated) frame, `rotate`
/// spins subsequent coordinates around that origin.
#[derive(Debug, Clone, Copy)]
struct Transform {
    offset: DVec2,
    rotation: f64,
}

impl Transform {
    const IDENTITY: Transform = Transform {
        offset: DVec2::ZERO,
        rotation: 0.0,
    };

    fn apply(&self, p: DVec2) -> DVec2 {
        let (sin, cos) = self.rotation.sin_cos();
        self.offset + DVec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
    }
}

/// Persistent style state, the one un-synchronized shared resource of the
/// frame: each draw call reads whatever the previous call left behind.
#[derive(Debug, Clone, Copy)]
struct Style {
    fill: Option<Rgba>,
    stroke: Option<Rgba>,
    stroke_weight: f64,
    blend: BlendMode,
}

impl Style {
    const DEFAULT: Style = Style {
        fill: None,
        stroke: None,
        stroke_weight: 1.0,
        blend: BlendMode::Normal,
    };
}

/// Immediate-mode drawing handle borrowing a [`Surface`].
pub struct DrawContext<'a> {
    surface: &'a mut Surface,
    transform: Transform,
    style: Style,
}

impl<'a> DrawContext<'a> {
    /// Wraps a surface with identity transform and empty style
    /// (no fill, no stroke, weight 1, normal blending).
    pub fn new(surface: &'a mut Surface) -> Self {
        Self {
            surface,
            transform: Transform::IDENTITY,
            style: Style::DEFAULT,
        }
    }

    // ── Style state ────────────────────────────────────────────────

    /// Sets the fill color for subsequent shapes.
    pub fn set_fill(&mut self, color: Rgba) {
        self.style.fill = Some(color);
    }

    /// Disables filling for subsequent shapes.
    pub fn no_fill(&mut self) {
        self.style.fill = None;
    }

    /// Sets the stroke color for subsequent shapes.
    pub fn set_stroke(&mut self, color: Rgba) {
        self.style.stroke = Some(color);
    }

    /// Disables stroking for subsequent shapes.
    pub fn no_stroke(&mut self) {
        self.style.stroke = None;
    }

    /// Sets the stroke weight in pixels.
    pub fn stroke_weight(&mut self, weight: f64) {
        self.style.stroke_weight = weight.max(0.0);
    }

    /// Sets the compositing mode for subsequent shapes.
    pub fn set_blend(&mut self, mode: BlendMode) {
        self.style.blend = mode;
    }

    // ── Transform ──────────────────────────────────────────────────

    /// Moves the origin by `delta`, expressed in the current frame.
    pub fn translate(&mut self, delta: DVec2) {
        self.transform.offset = self.transform.apply(delta);
    }

    /// Rotates subsequent coordinates by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        self.transform.rotation += angle;
    }

    /// Runs `f` with the current transform and style saved, restoring both
    /// when it returns. Entity draw routines use this so no translation,
    /// rotation, or style change leaks to the next entity.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let transform = self.transform;
        let style = self.style;
        let out = f(self);
        self.transform = transform;
        self.style = style;
        out
    }

    // ── Shapes ─────────────────────────────────────────────────────

    /// Draws a circle of the given *diameter* centered at `center`,
    /// filling with the current fill color (if any) and stroking the
    /// outline with the current stroke color (if any).
    pub fn ellipse(&mut self, center: DVec2, diameter: f64) {
        let c = self.transform.apply(center);
        let r = diameter.abs() / 2.0;
        if let Some(fill) = self.style.fill {
            self.fill_circle(c, r, fill);
        }
        if let Some(stroke) = self.style.stroke {
            self.ring(c, r, self.style.stroke_weight, stroke);
        }
    }

    /// Draws a line segment from `a` to `b` with the current stroke color
    /// and weight. Without a stroke color this is a no-op.
    pub fn line(&mut self, a: DVec2, b: DVec2) {
        let Some(stroke) = self.style.stroke else {
            return;
        };
        let a = self.transform.apply(a);
        let b = self.transform.apply(b);
        self.stroke_segment(a, b, self.style.stroke_weight, stroke);
    }

    /// Fills an axis-aligned rectangle, weighting edge pixels by their
    /// overlap with the rectangle. Only the current translation is applied;
    /// the sketch uses this solely for the untransformed full-canvas fade
    /// overlay.
    pub fn rect(&mut self, origin: DVec2, size: DVec2) {
        let Some(fill) = self.style.fill else {
            return;
        };
        let o = self.transform.offset + origin;
        let blend = self.style.blend;
        let (x0, x1) = pixel_span(o.x, o.x + size.x);
        let (y0, y1) = pixel_span(o.y, o.y + size.y);
        for y in y0..=y1 {
            let cy = pixel_overlap(y, o.y, o.y + size.y);
            if cy <= 0.0 {
                continue;
            }
            for x in x0..=x1 {
                let coverage = pixel_overlap(x, o.x, o.x + size.x) * cy;
                if coverage > 0.0 {
                    self.surface.blend_pixel(x, y, fill, coverage, blend);
                }
            }
        }
    }

    // ── Rasterizers ────────────────────────────────────────────────

    fn fill_circle(&mut self, c: DVec2, r: f64, color: Rgba) {
        let blend = self.style.blend;
        let (x0, x1) = pixel_span(c.x - r - 1.0, c.x + r + 1.0);
        let (y0, y1) = pixel_span(c.y - r - 1.0, c.y + r + 1.0);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = (pixel_center(x, y) - c).length();
                let coverage = (0.5 + (r - d)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.surface.blend_pixel(x, y, color, coverage, blend);
                }
            }
        }
    }

    fn ring(&mut self, c: DVec2, r: f64, weight: f64, color: Rgba) {
        let blend = self.style.blend;
        let half = weight / 2.0;
        let reach = r + half + 1.0;
        let (x0, x1) = pixel_span(c.x - reach, c.x + reach);
        let (y0, y1) = pixel_span(c.y - reach, c.y + reach);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = (pixel_center(x, y) - c).length();
                let coverage = (0.5 + (half - (d - r).abs())).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.surface.blend_pixel(x, y, color, coverage, blend);
                }
            }
        }
    }

    fn stroke_segment(&mut self, a: DVec2, b: DVec2, weight: f64, color: Rgba) {
        let blend = self.style.blend;
        let half = weight / 2.0;
        let pad = half + 1.0;
        let (x0, x1) = pixel_span(a.x.min(b.x) - pad, a.x.max(b.x) + pad);
        let (y0, y1) = pixel_span(a.y.min(b.y) - pad, a.y.max(b.y) + pad);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = segment_distance(pixel_center(x, y), a, b);
                let coverage = (0.5 + (half - d)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.surface.blend_pixel(x, y, color, coverage, blend);
                }
            }
        }
    }
}

/// Center of the pixel at integer coordinates `(x, y)`.
fn pixel_center(x: isize, y: isize) -> DVec2 {
    DVec2::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// Inclusive pixel index range covering `[lo, hi]` in surface space.
fn pixel_span(lo: f64, hi: f64) -> (isize, isize) {
    (lo.floor() as isize, hi.ceil() as isize)
}

/// Overlap of pixel `p` (the unit interval `[p, p + 1)`) with `[lo, hi]`,
/// in [0, 1].
fn pixel_overlap(p: isize, lo: f64, hi: f64) -> f64 {
    let p0 = p as f64;
    (hi.min(p0 + 1.0) - lo.max(p0)).clamp(0.0, 1.0)
}

/// Distance from `p` to the closed segment `a..b`.
fn segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    fn luminance(s: &Surface, x: usize, y: usize) -> f64 {
        let px = s.pixel(x, y).unwrap();
        (px[0] + px[1] + px[2]) / 3.0
    }

    #[test]
    fn ellipse_fills_center_pixel_fully() {
        let mut s = Surface::new(21, 21).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::WHITE);
        ctx.ellipse(DVec2::new(10.5, 10.5), 10.0);
        assert!((luminance(&s, 10, 10) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ellipse_leaves_far_pixels_untouched() {
        let mut s = Surface::new(21, 21).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::WHITE);
        ctx.ellipse(DVec2::new(10.5, 10.5), 6.0);
        assert_eq!(luminance(&s, 0, 0), 0.0);
        assert_eq!(luminance(&s, 20, 10), 0.0);
    }

    #[test]
    fn ellipse_without_fill_or_stroke_draws_nothing() {
        let mut s = Surface::new(9, 9).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.ellipse(DVec2::new(4.5, 4.5), 6.0);
        assert!(s.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn stroked_ellipse_marks_rim_not_center() {
        let mut s = Surface::new(31, 31).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_stroke(Rgba::WHITE);
        ctx.stroke_weight(1.5);
        ctx.ellipse(DVec2::new(15.5, 15.5), 20.0);
        // Rim pixel at (15.5 + 10, 15.5) sits on the radius.
        assert!(luminance(&s, 25, 15) > 0.3, "rim should be lit");
        assert_eq!(luminance(&s, 15, 15), 0.0, "center must stay empty");
    }

    #[test]
    fn line_covers_midpoint() {
        let mut s = Surface::new(20, 20).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_stroke(Rgba::WHITE);
        ctx.stroke_weight(2.0);
        ctx.line(DVec2::new(2.0, 10.5), DVec2::new(18.0, 10.5));
        assert!(luminance(&s, 10, 10) > 0.9);
        assert_eq!(luminance(&s, 10, 2) , 0.0);
    }

    #[test]
    fn line_without_stroke_is_noop() {
        let mut s = Surface::new(10, 10).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.line(DVec2::new(0.0, 5.0), DVec2::new(10.0, 5.0));
        assert!(s.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rect_fade_dims_a_white_canvas() {
        let mut s = Surface::new(4, 4).unwrap();
        s.fill(Rgba::WHITE);
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::BLACK.with_alpha(25.0 / 255.0));
        ctx.rect(DVec2::ZERO, DVec2::new(4.0, 4.0));
        let expected = 1.0 - 25.0 / 255.0;
        for y in 0..4 {
            for x in 0..4 {
                assert!(
                    (luminance(&s, x, y) - expected).abs() < 1e-9,
                    "pixel ({x}, {y}) = {}",
                    luminance(&s, x, y)
                );
            }
        }
    }

    #[test]
    fn interior_rect_does_not_bleed_past_its_far_edge() {
        let mut s = Surface::new(6, 6).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::WHITE);
        ctx.rect(DVec2::new(1.0, 1.0), DVec2::new(2.0, 2.0));
        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert!((luminance(&s, x, y) - 1.0).abs() < 1e-9, "interior ({x}, {y})");
        }
        for (x, y) in [(3, 1), (3, 2), (1, 3), (3, 3), (0, 1), (1, 0)] {
            assert_eq!(luminance(&s, x, y), 0.0, "outside ({x}, {y}) must stay empty");
        }
    }

    #[test]
    fn fractional_rect_edge_gets_partial_coverage() {
        let mut s = Surface::new(4, 1).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::WHITE);
        ctx.rect(DVec2::ZERO, DVec2::new(2.5, 1.0));
        assert!((luminance(&s, 1, 0) - 1.0).abs() < 1e-9);
        assert!((luminance(&s, 2, 0) - 0.5).abs() < 1e-9, "half-covered column");
        assert_eq!(luminance(&s, 3, 0), 0.0);
    }

    #[test]
    fn translate_then_rotate_composes_like_a_transform_stack() {
        let mut s = Surface::new(40, 40).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::WHITE);
        ctx.scoped(|ctx| {
            ctx.translate(DVec2::new(20.0, 10.0));
            ctx.rotate(std::f64::consts::FRAC_PI_2);
            // (8, 0) in the rotated frame lands at (20, 18) in surface space.
            ctx.ellipse(DVec2::new(8.0, 0.0), 4.0);
        });
        assert!(luminance(&s, 20, 18) > 0.9);
        assert_eq!(luminance(&s, 28, 10), 0.0, "unrotated spot must be empty");
    }

    #[test]
    fn scoped_restores_transform_and_style() {
        let mut s = Surface::new(20, 20).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::WHITE);
        ctx.scoped(|ctx| {
            ctx.translate(DVec2::new(100.0, 100.0));
            ctx.rotate(1.0);
            ctx.no_fill();
            ctx.set_blend(BlendMode::Lighter);
        });
        // Fill survives the scope and the translation does not.
        ctx.ellipse(DVec2::new(5.5, 5.5), 4.0);
        assert!(luminance(&s, 5, 5) > 0.9);
    }

    #[test]
    fn style_persists_across_calls_outside_scopes() {
        let mut s = Surface::new(20, 20).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::WHITE);
        ctx.ellipse(DVec2::new(5.5, 5.5), 4.0);
        // No style reset between calls: the second ellipse reuses the fill.
        ctx.ellipse(DVec2::new(14.5, 14.5), 4.0);
        assert!(luminance(&s, 14, 14) > 0.9);
    }

    #[test]
    fn lighter_blend_accumulates_brightness() {
        let mut s = Surface::new(9, 9).unwrap();
        let mut ctx = DrawContext::new(&mut s);
        ctx.set_fill(Rgba::WHITE.with_alpha(0.4));
        ctx.set_blend(BlendMode::Lighter);
        ctx.ellipse(DVec2::new(4.5, 4.5), 6.0);
        ctx.ellipse(DVec2::new(4.5, 4.5), 6.0);
        let lum = luminance(&s, 4, 4);
        assert!((lum - 0.8).abs() < 1e-9, "two 0.4 additive passes, got {lum}");
    }

    #[test]
    fn segment_distance_handles_degenerate_segment() {
        let p = DVec2::new(3.0, 4.0);
        let a = DVec2::ZERO;
        assert!((segment_distance(p, a, a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        assert!((segment_distance(DVec2::new(-3.0, 4.0), a, b) - 5.0).abs() < 1e-12);
        assert!((segment_distance(DVec2::new(5.0, 2.0), a, b) - 2.0).abs() < 1e-12);
    }
}
