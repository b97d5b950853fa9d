//! Fleeting drifting particles that flicker, expire, and restart.

use glam::DVec2;
use lumina_core::{DrawContext, Rgba, Xorshift64};
use noise::{NoiseFn, Perlin};

/// Velocity component range in pixels per frame.
const VELOCITY_MAX: f64 = 0.5;
/// Dot diameter range.
const SIZE_MIN: f64 = 1.0;
const SIZE_MAX: f64 = 3.0;
/// Base alpha range in 8-bit units.
const ALPHA_MIN: f64 = 50.0;
const ALPHA_MAX: f64 = 150.0;
/// Color variation range in 8-bit units.
const VARIATION_MAX: f64 = 100.0;
/// Lifetime range in frames.
const LIFE_MIN: f64 = 100.0;
const LIFE_MAX: f64 = 500.0;
/// Fraction of sparks rendered as streaks rather than dots.
const STREAK_FRACTION: f64 = 0.3;
/// Flicker frequency in radians per frame of age.
const FLICKER_RATE: f64 = 0.05;

/// Visual style of a spark, chosen once at construction and kept across
/// resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkKind {
    Dot,
    Streak,
}

/// A drifting particle. When its age exceeds its lifetime or it leaves the
/// canvas, all motion attributes are re-randomized and it restarts from its
/// normalized home position.
#[derive(Debug, Clone)]
pub struct Spark {
    pub norm: DVec2,
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub base_alpha: f64,
    pub color_variation: f64,
    pub life: f64,
    pub age: f64,
    pub kind: SparkKind,
}

impl Spark {
    /// Spawns a spark at a random home position and rolls its initial
    /// motion state.
    pub fn spawn(rng: &mut Xorshift64, bounds: DVec2) -> Spark {
        let norm = DVec2::new(rng.next_f64(), rng.next_f64());
        let kind = if rng.chance(STREAK_FRACTION) {
            SparkKind::Streak
        } else {
            SparkKind::Dot
        };
        let mut spark = Spark {
            norm,
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            size: 0.0,
            base_alpha: 0.0,
            color_variation: 0.0,
            life: 0.0,
            age: 0.0,
            kind,
        };
        spark.reset(rng, bounds);
        spark
    }

    /// Re-randomizes velocity, size, alpha, color variation, and lifetime,
    /// zeroes the age, and returns the spark to `norm * bounds`. The kind is
    /// a construction-time trait and survives resets.
    pub fn reset(&mut self, rng: &mut Xorshift64, bounds: DVec2) {
        self.pos = self.norm * bounds;
        self.vel = DVec2::new(
            rng.next_range(-VELOCITY_MAX, VELOCITY_MAX),
            rng.next_range(-VELOCITY_MAX, VELOCITY_MAX),
        );
        self.size = rng.next_range(SIZE_MIN, SIZE_MAX);
        self.base_alpha = rng.next_range(ALPHA_MIN, ALPHA_MAX) / 255.0;
        self.color_variation = rng.next_range(0.0, VARIATION_MAX);
        self.life = rng.next_range(LIFE_MIN, LIFE_MAX);
        self.age = 0.0;
    }

    /// Integrates velocity, ages one frame, and resets when the spark has
    /// outlived its lifetime or left the canvas.
    pub fn update(&mut self, rng: &mut Xorshift64, bounds: DVec2) {
        self.pos += self.vel;
        self.age += 1.0;
        let out = self.pos.x < 0.0
            || self.pos.x > bounds.x
            || self.pos.y < 0.0
            || self.pos.y > bounds.y;
        if self.age > self.life || out {
            self.reset(rng, bounds);
        }
    }

    /// The tinted color for this spark: `tint` (in 8-bit units roughly
    /// (255, 215, 130)) shifted by the per-spark variation.
    fn color(&self, tint: Rgba, alpha: f64) -> Rgba {
        let v = self.color_variation / 255.0;
        Rgba {
            r: (tint.r - v).clamp(0.0, 1.0),
            g: (tint.g - v * 0.5).clamp(0.0, 1.0),
            b: (tint.b + v * 0.3).clamp(0.0, 1.0),
            a: alpha.clamp(0.0, 1.0),
        }
    }

    /// Draws the spark with a sine flicker on its alpha: a short oriented
    /// streak (angle from a Perlin sample of the position) or a dot with a
    /// faint halo.
    pub fn draw(&self, ctx: &mut DrawContext<'_>, noise: &Perlin, tint: Rgba) {
        let alpha = self.base_alpha * (0.5 + 0.5 * (self.age * FLICKER_RATE).sin());
        let color = self.color(tint, alpha);
        match self.kind {
            SparkKind::Streak => {
                let sample = noise.get([self.pos.x * 0.01, self.pos.y * 0.01]);
                let angle = (sample * 0.5 + 0.5) * std::f64::consts::TAU;
                let len = self.size * 3.0;
                ctx.no_fill();
                ctx.set_stroke(color);
                ctx.stroke_weight(self.size * 0.5);
                ctx.line(self.pos, self.pos + DVec2::new(angle.cos(), angle.sin()) * len);
            }
            SparkKind::Dot => {
                ctx.no_stroke();
                ctx.set_fill(color);
                ctx.ellipse(self.pos, self.size);
                ctx.set_fill(color.scale_alpha(0.3));
                ctx.ellipse(self.pos, self.size * 3.0);
            }
        }
    }

    /// Repositions from the normalized home coordinate. Spark sizes are
    /// small enough that the original never rescaled them; neither do we.
    pub fn rescale(&mut self, bounds: DVec2) {
        self.pos = self.norm * bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: DVec2 = DVec2::new(900.0, 900.0);

    fn spawn_one(seed: u64) -> (Spark, Xorshift64) {
        let mut rng = Xorshift64::new(seed);
        let s = Spark::spawn(&mut rng, BOUNDS);
        (s, rng)
    }

    #[test]
    fn spawn_rolls_attributes_within_ranges() {
        for seed in 1..100 {
            let (s, _) = spawn_one(seed);
            assert!(s.vel.x.abs() <= VELOCITY_MAX && s.vel.y.abs() <= VELOCITY_MAX);
            assert!((SIZE_MIN..SIZE_MAX).contains(&s.size));
            assert!((ALPHA_MIN / 255.0..ALPHA_MAX / 255.0).contains(&s.base_alpha));
            assert!((0.0..VARIATION_MAX).contains(&s.color_variation));
            assert!((LIFE_MIN..LIFE_MAX).contains(&s.life));
            assert_eq!(s.age, 0.0);
        }
    }

    #[test]
    fn update_integrates_velocity_and_ages() {
        let (mut s, mut rng) = spawn_one(7);
        s.pos = DVec2::new(450.0, 450.0);
        let expected = s.pos + s.vel;
        s.update(&mut rng, BOUNDS);
        assert_eq!(s.pos, expected);
        assert_eq!(s.age, 1.0);
    }

    #[test]
    fn expiry_triggers_reset_within_one_update() {
        let (mut s, mut rng) = spawn_one(11);
        s.pos = DVec2::new(450.0, 450.0);
        s.age = s.life; // next update pushes age past life
        s.update(&mut rng, BOUNDS);
        assert_eq!(s.age, 0.0, "age must be zeroed on expiry");
        assert_eq!(s.pos, s.norm * BOUNDS, "spark returns to its home position");
    }

    #[test]
    fn leaving_the_canvas_triggers_reset() {
        let (mut s, mut rng) = spawn_one(13);
        s.pos = DVec2::new(-5.0, 450.0);
        s.vel = DVec2::ZERO;
        s.update(&mut rng, BOUNDS);
        assert_eq!(s.age, 0.0);
        assert!((0.0..=BOUNDS.x).contains(&s.pos.x));
        assert!((0.0..=BOUNDS.y).contains(&s.pos.y));
    }

    #[test]
    fn reset_redraws_motion_attributes_from_ranges() {
        let (mut s, mut rng) = spawn_one(17);
        s.reset(&mut rng, BOUNDS);
        assert!(s.vel.x.abs() <= VELOCITY_MAX);
        assert!((SIZE_MIN..SIZE_MAX).contains(&s.size));
        assert!((LIFE_MIN..LIFE_MAX).contains(&s.life));
    }

    #[test]
    fn kind_survives_reset() {
        for seed in 1..50 {
            let (mut s, mut rng) = spawn_one(seed);
            let kind = s.kind;
            for _ in 0..5 {
                s.reset(&mut rng, BOUNDS);
            }
            assert_eq!(s.kind, kind);
        }
    }

    #[test]
    fn both_kinds_occur_across_seeds() {
        let mut rng = Xorshift64::new(99);
        let kinds: Vec<SparkKind> = (0..200).map(|_| Spark::spawn(&mut rng, BOUNDS).kind).collect();
        assert!(kinds.contains(&SparkKind::Dot));
        assert!(kinds.contains(&SparkKind::Streak));
        let streaks = kinds.iter().filter(|k| **k == SparkKind::Streak).count();
        assert!((20..120).contains(&streaks), "streak fraction off: {streaks}/200");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn age_never_exceeds_life_by_more_than_one_frame(
                seed: u64,
                steps in 1_usize..3_000,
            ) {
                let mut rng = Xorshift64::new(seed);
                let mut s = Spark::spawn(&mut rng, BOUNDS);
                for _ in 0..steps {
                    s.update(&mut rng, BOUNDS);
                    prop_assert!(s.age <= s.life + 1.0);
                    // A reset fires in the same update that detects an exit,
                    // so the post-update position is always in bounds.
                    prop_assert!(
                        (0.0..=BOUNDS.x).contains(&s.pos.x)
                            && (0.0..=BOUNDS.y).contains(&s.pos.y),
                        "out of bounds after update: {:?}", s.pos
                    );
                }
            }
        }
    }
}
