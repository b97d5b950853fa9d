//! Static voids: a black disc, a dim colored core, and a specular glint.

use glam::DVec2;
use lumina_core::{DrawContext, Rgba, Xorshift64};

use crate::size_scale;

/// Outer radius range before size scaling.
const RADIUS_MIN: f64 = 5.0;
const RADIUS_MAX: f64 = 10.0;
/// Inner radius as a fraction of the outer radius.
const INNER_FRACTION_MIN: f64 = 0.3;
const INNER_FRACTION_MAX: f64 = 0.7;

/// A stationary void. Holes have no update step: after construction only a
/// resize rescale may change them.
#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    pub norm: DVec2,
    pub pos: DVec2,
    pub r: f64,
    pub inner_r: f64,
    pub inner_color: Rgba,
}

impl Hole {
    /// Spawns a hole with a dim purple core varied around (20, 10, 30).
    pub fn spawn(rng: &mut Xorshift64, bounds: DVec2) -> Hole {
        let norm = DVec2::new(rng.next_f64(), rng.next_f64());
        let r = rng.next_range(RADIUS_MIN, RADIUS_MAX) * size_scale(bounds.x, bounds.y);
        let inner_color = Rgba {
            r: (20.0 + rng.next_range(-10.0, 10.0)) / 255.0,
            g: (10.0 + rng.next_range(-5.0, 5.0)) / 255.0,
            b: (30.0 + rng.next_range(-10.0, 10.0)) / 255.0,
            a: 1.0,
        };
        Hole {
            norm,
            pos: norm * bounds,
            r,
            inner_r: r * rng.next_range(INNER_FRACTION_MIN, INNER_FRACTION_MAX),
            inner_color,
        }
    }

    /// Draws the outer void, the colored core, and a small highlight offset
    /// toward the upper right.
    pub fn draw(&self, ctx: &mut DrawContext<'_>) {
        ctx.scoped(|ctx| {
            ctx.translate(self.pos);
            ctx.no_stroke();
            ctx.set_fill(Rgba::BLACK);
            ctx.ellipse(DVec2::ZERO, self.r * 2.0);
            ctx.set_fill(self.inner_color);
            ctx.ellipse(DVec2::ZERO, self.inner_r * 2.0);
            ctx.set_fill(Rgba::from_u8(60, 50, 80, 100));
            ctx.ellipse(DVec2::new(self.r * 0.2, -self.r * 0.2), self.r * 0.3);
        });
    }

    /// Repositions from the normalized coordinate and scales both radii.
    pub fn rescale(&mut self, bounds: DVec2, factor: f64) {
        self.pos = self.norm * bounds;
        self.r *= factor;
        self.inner_r *= factor;
    }
}
