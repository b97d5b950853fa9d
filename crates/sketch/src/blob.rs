//! Glowing fog-like masses animated with Perlin drift and a pulsing radius.

use glam::DVec2;
use lumina_core::{BlendMode, DrawContext, Rgba, Xorshift64};
use noise::{NoiseFn, Perlin};

use crate::size_scale;

/// Maximum base radius before size scaling.
const BASE_RADIUS_MAX: f64 = 120.0;
/// Alpha range in 8-bit units.
const ALPHA_MIN: f64 = 30.0;
const ALPHA_MAX: f64 = 120.0;
/// Per-frame phase speed range.
const SPEED_MIN: f64 = 0.003;
const SPEED_MAX: f64 = 0.01;
/// Perlin sampling scale range.
const NOISE_SCALE_MIN: f64 = 0.005;
const NOISE_SCALE_MAX: f64 = 0.02;
/// Radius oscillation amplitude at depth 1.
const PULSE_AMPLITUDE: f64 = 15.0;
/// Maximum per-frame drift in pixels.
const DRIFT: f64 = 0.3;
/// Depth above which the blob composites additively.
const LIGHTER_DEPTH: f64 = 0.7;

/// A soft glowing blob.
///
/// `norm` is the resolution-independent home position; `pos` is the live
/// pixel position, which drifts away from `norm * bounds` over time and is
/// snapped back to it on resize.
#[derive(Debug, Clone)]
pub struct Blob {
    pub norm: DVec2,
    pub pos: DVec2,
    pub r_base: f64,
    pub r: f64,
    pub alpha: f64,
    pub phase: f64,
    pub speed: f64,
    pub color: Rgba,
    pub depth: f64,
    pub noise_scale: f64,
}

impl Blob {
    /// Spawns a blob at a random position with warm color variation around
    /// `tint` (in 8-bit units: red −30..0, green ±30, blue ±50).
    pub fn spawn(rng: &mut Xorshift64, bounds: DVec2, tint: Rgba) -> Blob {
        let norm = DVec2::new(rng.next_f64(), rng.next_f64());
        let r_base = rng.next_range(0.0, BASE_RADIUS_MAX) * size_scale(bounds.x, bounds.y);
        let alpha = rng.next_range(ALPHA_MIN, ALPHA_MAX) / 255.0;
        let phase = rng.next_range(0.0, std::f64::consts::TAU);
        let color = Rgba {
            r: vary(tint.r, rng.next_range(-30.0, 0.0)),
            g: vary(tint.g, rng.next_range(-30.0, 30.0)),
            b: vary(tint.b, rng.next_range(-50.0, 50.0)),
            a: alpha,
        };
        Blob {
            norm,
            pos: norm * bounds,
            r_base,
            r: r_base,
            alpha,
            phase,
            speed: rng.next_range(SPEED_MIN, SPEED_MAX),
            color,
            depth: rng.next_f64(),
            noise_scale: rng.next_range(NOISE_SCALE_MIN, NOISE_SCALE_MAX),
        }
    }

    /// Advances one frame: phase accumulates, the displayed radius follows a
    /// sine of the phase, and (when `drift` is on) two independent 1-D
    /// Perlin samples driven by the global frame counter nudge the position
    /// by at most ±[`DRIFT`] pixels. Out-of-bounds coordinates wrap to the
    /// opposite edge.
    pub fn update(&mut self, frame: u64, noise: &Perlin, drift: bool, bounds: DVec2) {
        self.phase += self.speed;
        self.r = self.r_base + self.phase.sin() * PULSE_AMPLITUDE * self.depth;
        if drift {
            let t = frame as f64 * self.noise_scale;
            self.pos.x += noise.get([t, 0.0]) * DRIFT;
            self.pos.y += noise.get([0.0, t]) * DRIFT;
        }
        if self.pos.x < 0.0 {
            self.pos.x = bounds.x;
        }
        if self.pos.x > bounds.x {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = bounds.y;
        }
        if self.pos.y > bounds.y {
            self.pos.y = 0.0;
        }
    }

    /// Draws the core disc, three outer glow discs, and five ripple rings.
    /// High-depth blobs switch to additive compositing for the whole pass.
    pub fn draw(&self, ctx: &mut DrawContext<'_>) {
        ctx.scoped(|ctx| {
            ctx.translate(self.pos);
            if self.depth > LIGHTER_DEPTH {
                ctx.set_blend(BlendMode::Lighter);
            }
            ctx.no_stroke();
            ctx.set_fill(self.color);
            ctx.ellipse(DVec2::ZERO, self.r);

            let glow = self.r * 1.5;
            for i in 0..3 {
                ctx.set_fill(self.color.with_alpha(self.alpha * 0.3 / (i + 1) as f64));
                ctx.ellipse(DVec2::ZERO, glow * (0.7 + 0.3 * i as f64));
            }

            ctx.no_fill();
            ctx.set_stroke(Rgba::WHITE.with_alpha(self.alpha * 0.5));
            ctx.stroke_weight(0.5);
            for i in 0..5 {
                ctx.ellipse(DVec2::ZERO, self.r * (0.3 + 0.1 * i as f64));
            }
        });
    }

    /// Snaps the pixel position back to the stored normalized coordinate and
    /// scales the base radius by `factor` (`min(new) / min(old)`).
    pub fn rescale(&mut self, bounds: DVec2, factor: f64) {
        self.pos = self.norm * bounds;
        self.r_base *= factor;
    }
}

/// Applies an 8-bit-unit variation to a unit-range channel, clamped.
fn vary(channel: f64, delta_u8: f64) -> f64 {
    (channel + delta_u8 / 255.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: DVec2 = DVec2::new(900.0, 900.0);

    fn warm() -> Rgba {
        Rgba::from_u8(255, 180, 120, 255)
    }

    fn spawn_one(seed: u64) -> Blob {
        let mut rng = Xorshift64::new(seed);
        Blob::spawn(&mut rng, BOUNDS, warm())
    }

    #[test]
    fn spawn_lands_within_ranges() {
        for seed in 1..50 {
            let b = spawn_one(seed);
            assert!((0.0..1.0).contains(&b.norm.x) && (0.0..1.0).contains(&b.norm.y));
            assert!((0.0..BASE_RADIUS_MAX).contains(&b.r_base));
            assert!((ALPHA_MIN / 255.0..ALPHA_MAX / 255.0).contains(&b.alpha));
            assert!((SPEED_MIN..SPEED_MAX).contains(&b.speed));
            assert!((NOISE_SCALE_MIN..NOISE_SCALE_MAX).contains(&b.noise_scale));
            assert!((0.0..1.0).contains(&b.depth));
        }
    }

    #[test]
    fn phase_advances_by_speed_each_update() {
        let mut b = spawn_one(7);
        let initial = b.phase;
        let noise = Perlin::new(7);
        for _ in 0..100 {
            b.update(0, &noise, true, BOUNDS);
        }
        assert!(
            (b.phase - (initial + 100.0 * b.speed)).abs() < 1e-9,
            "phase after 100 updates: {} vs {}",
            b.phase,
            initial + 100.0 * b.speed
        );
    }

    #[test]
    fn radius_oscillates_within_pulse_amplitude() {
        let mut b = spawn_one(11);
        let noise = Perlin::new(11);
        for frame in 0..500 {
            b.update(frame, &noise, true, BOUNDS);
            let dev = (b.r - b.r_base).abs();
            assert!(
                dev <= PULSE_AMPLITUDE * b.depth + 1e-9,
                "radius deviation {dev} exceeds amplitude"
            );
        }
    }

    #[test]
    fn position_wraps_instead_of_clamping() {
        let mut b = spawn_one(3);
        let noise = Perlin::new(3);
        b.pos = DVec2::new(-0.1, 450.0);
        b.update(0, &noise, false, BOUNDS);
        assert_eq!(b.pos.x, BOUNDS.x, "left exit wraps to the right edge");

        b.pos = DVec2::new(450.0, BOUNDS.y + 0.1);
        b.update(1, &noise, false, BOUNDS);
        assert_eq!(b.pos.y, 0.0, "bottom exit wraps to the top edge");
    }

    #[test]
    fn update_without_drift_keeps_position() {
        let mut b = spawn_one(19);
        let noise = Perlin::new(19);
        let before = b.pos;
        b.update(42, &noise, false, BOUNDS);
        assert_eq!(b.pos, before);
    }

    #[test]
    fn rescale_derives_position_from_norm() {
        let mut b = spawn_one(23);
        let noise = Perlin::new(23);
        for frame in 0..50 {
            b.update(frame, &noise, true, BOUNDS);
        }
        let wide = DVec2::new(1800.0, 900.0);
        let r_before = b.r_base;
        b.rescale(wide, 1.0);
        assert_eq!(b.pos, b.norm * wide);
        assert_eq!(b.r_base, r_before, "min extent unchanged, size unchanged");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn position_stays_in_bounds_after_any_number_of_updates(
                seed: u64,
                steps in 0_u64..2_000,
            ) {
                let mut rng = Xorshift64::new(seed);
                let mut b = Blob::spawn(&mut rng, BOUNDS, warm());
                let noise = Perlin::new(seed as u32);
                for frame in 0..steps {
                    b.update(frame, &noise, true, BOUNDS);
                    prop_assert!(
                        (0.0..=BOUNDS.x).contains(&b.pos.x)
                            && (0.0..=BOUNDS.y).contains(&b.pos.y),
                        "blob escaped at frame {frame}: {:?}", b.pos
                    );
                }
            }
        }
    }
}
