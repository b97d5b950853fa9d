//! Ember motes: the one open-ended particle list in the family.
//!
//! Unlike the four fixed pools, motes are appended every frame and only ever
//! leave through the scene's oldest-first ceiling trim. Individual motes are
//! never removed for dying; they just fade toward invisibility.

use glam::DVec2;
use lumina_core::{DrawContext, Rgba, Xorshift64};

/// Horizontal drift range in pixels per frame.
const DRIFT_MAX: f64 = 0.2;
/// Upward velocity range in pixels per frame.
const RISE_MIN: f64 = 0.2;
const RISE_MAX: f64 = 0.6;
/// Diameter range.
const SIZE_MIN: f64 = 0.5;
const SIZE_MAX: f64 = 2.0;
/// Alpha range in 8-bit units.
const ALPHA_MIN: f64 = 20.0;
const ALPHA_MAX: f64 = 80.0;
/// Per-frame alpha decay divisor growth.
const FADE_RATE: f64 = 0.02;

/// A rising ember mote.
#[derive(Debug, Clone)]
pub struct Mote {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub alpha: f64,
    pub age: f64,
}

impl Mote {
    /// Spawns a mote at a random position, drifting slowly upward.
    pub fn spawn(rng: &mut Xorshift64, bounds: DVec2) -> Mote {
        Mote {
            pos: DVec2::new(rng.next_f64() * bounds.x, rng.next_f64() * bounds.y),
            vel: DVec2::new(
                rng.next_range(-DRIFT_MAX, DRIFT_MAX),
                -rng.next_range(RISE_MIN, RISE_MAX),
            ),
            size: rng.next_range(SIZE_MIN, SIZE_MAX),
            alpha: rng.next_range(ALPHA_MIN, ALPHA_MAX) / 255.0,
            age: 0.0,
        }
    }

    /// Integrates velocity and ages one frame. Motes never reset.
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.age += 1.0;
    }

    /// Current alpha after age fade.
    fn faded_alpha(&self) -> f64 {
        self.alpha / (1.0 + self.age * FADE_RATE)
    }

    /// Draws the mote as a small warm dot that dims with age.
    pub fn draw(&self, ctx: &mut DrawContext<'_>, tint: Rgba) {
        ctx.no_stroke();
        ctx.set_fill(tint.with_alpha(self.faded_alpha()));
        ctx.ellipse(self.pos, self.size);
    }

    /// Scales the position for a resize (motes carry no normalized home).
    pub fn rescale(&mut self, ratio: DVec2) {
        self.pos *= ratio;
    }
}
