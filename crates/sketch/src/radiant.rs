//! Rotating ray bursts with a sine-driven length pulse.

use glam::DVec2;
use lumina_core::{DrawContext, Rgba, Xorshift64};

use crate::size_scale;

/// Inner radius range before size scaling.
const RADIUS_MIN: f64 = 15.0;
const RADIUS_MAX: f64 = 50.0;
/// Ray count range.
const RAYS_MIN: usize = 20;
const RAYS_MAX: usize = 100;
/// Alpha range in 8-bit units.
const ALPHA_MIN: f64 = 40.0;
const ALPHA_MAX: f64 = 120.0;
/// Rotation speed range in radians per frame.
const ROT_SPEED_MIN: f64 = 0.001;
const ROT_SPEED_MAX: f64 = 0.02;
/// Resting ray length range.
const LINE_LENGTH_MIN: f64 = 15.0;
const LINE_LENGTH_MAX: f64 = 40.0;
/// Pulse phase speed range.
const PULSE_SPEED_MIN: f64 = 0.01;
const PULSE_SPEED_MAX: f64 = 0.03;
/// Every nth ray is drawn brighter and thicker.
const ACCENT_EVERY: usize = 5;

/// A stationary burst of rotating rays.
#[derive(Debug, Clone)]
pub struct Radiant {
    pub norm: DVec2,
    pub pos: DVec2,
    pub r: f64,
    pub rays: usize,
    pub alpha: f64,
    pub angle: f64,
    pub rot_speed: f64,
    pub line_length: f64,
    pub current_length: f64,
    pub depth: f64,
    pub pulse_speed: f64,
    pub pulse_phase: f64,
}

impl Radiant {
    /// Spawns a radiant at a random stationary position.
    pub fn spawn(rng: &mut Xorshift64, bounds: DVec2) -> Radiant {
        let norm = DVec2::new(rng.next_f64(), rng.next_f64());
        let line_length = rng.next_range(LINE_LENGTH_MIN, LINE_LENGTH_MAX);
        let pulse_phase = rng.next_range(0.0, std::f64::consts::TAU);
        Radiant {
            norm,
            pos: norm * bounds,
            r: rng.next_range(RADIUS_MIN, RADIUS_MAX) * size_scale(bounds.x, bounds.y),
            rays: RAYS_MIN + rng.next_usize(RAYS_MAX - RAYS_MIN),
            alpha: rng.next_range(ALPHA_MIN, ALPHA_MAX) / 255.0,
            angle: rng.next_range(0.0, std::f64::consts::TAU),
            rot_speed: rng.next_range(ROT_SPEED_MIN, ROT_SPEED_MAX),
            line_length,
            current_length: line_length * (0.8 + pulse_phase.sin() * 0.2),
            depth: rng.next_f64(),
            pulse_speed: rng.next_range(PULSE_SPEED_MIN, PULSE_SPEED_MAX),
            pulse_phase,
        }
    }

    /// Advances rotation (scaled by depth into [0.8, 1.2] of the base speed)
    /// and the length pulse. `current_length` always lands within
    /// `line_length * [0.6, 1.0]`.
    pub fn update(&mut self) {
        self.angle += self.rot_speed * (0.8 + 0.4 * self.depth);
        self.pulse_phase += self.pulse_speed;
        self.current_length = self.line_length * (0.8 + self.pulse_phase.sin() * 0.2);
    }

    /// Draws the rays outward from the inner radius, with every
    /// [`ACCENT_EVERY`]th ray brighter and thicker, then the central core.
    pub fn draw(&self, ctx: &mut DrawContext<'_>) {
        ctx.scoped(|ctx| {
            ctx.translate(self.pos);
            ctx.rotate(self.angle);
            let stroke_alpha = self.alpha * (0.7 + 0.3 * self.depth);

            ctx.no_fill();
            for i in 0..self.rays {
                let a = std::f64::consts::TAU * i as f64 / self.rays as f64;
                let dir = DVec2::new(a.cos(), a.sin());
                if i % ACCENT_EVERY == 0 {
                    ctx.set_stroke(Rgba::from_u8(255, 255, 200, 255).with_alpha(stroke_alpha * 1.5));
                    ctx.stroke_weight(0.5 + 0.7 * self.depth);
                } else {
                    ctx.set_stroke(Rgba::from_u8(255, 240, 180, 255).with_alpha(stroke_alpha));
                    ctx.stroke_weight(0.3 + 0.5 * self.depth);
                }
                ctx.line(dir * self.r, dir * (self.r + self.current_length));
            }

            ctx.set_fill(Rgba::from_u8(255, 240, 180, 255).with_alpha(stroke_alpha * 0.5));
            ctx.no_stroke();
            ctx.ellipse(DVec2::ZERO, self.r * 0.5);
        });
    }

    /// Repositions from the normalized coordinate and scales the inner
    /// radius and resting ray length by `factor`.
    pub fn rescale(&mut self, bounds: DVec2, factor: f64) {
        self.pos = self.norm * bounds;
        self.r *= factor;
        self.line_length *= factor;
    }
}
