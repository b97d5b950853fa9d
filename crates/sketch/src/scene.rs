//! The scene: owned entity pools, the per-frame driver, and the resize
//! handler.
//!
//! One [`Scene::step`] call renders one frame: blit the grain raster, wash
//! it with the low-alpha fade rectangle (soft-erasing last frame's leftover
//! brightness into motion trails), then draw the pools back to front —
//! holes, blobs, radiants, sparks, motes — updating each moving pool
//! immediately before its own draw pass. Nothing runs between frames and no
//! entity interacts with any other.

use glam::DVec2;
use lumina_core::{DrawContext, Rgba, SketchError, Surface, Xorshift64};
use noise::Perlin;

use crate::blob::Blob;
use crate::hole::Hole;
use crate::mote::Mote;
use crate::preset::SketchConfig;
use crate::radiant::Radiant;
use crate::recipe::Recipe;
use crate::spark::Spark;
use crate::texture::grain_texture;

/// A fully-owned sketch instance, deterministic in its seed.
pub struct Scene {
    config: SketchConfig,
    width: usize,
    height: usize,
    frame: u64,
    rng: Xorshift64,
    noise: Perlin,
    grain: Surface,
    canvas: Surface,
    blobs: Vec<Blob>,
    radiants: Vec<Radiant>,
    holes: Vec<Hole>,
    sparks: Vec<Spark>,
    motes: Vec<Mote>,
}

impl Scene {
    /// Builds a scene from a configuration and a seed: allocates the canvas
    /// and grain raster, then populates every pool at its configured count.
    ///
    /// Returns `SketchError::InvalidDimensions` if the configured canvas
    /// has a zero dimension — the fatal startup condition.
    pub fn new(config: SketchConfig, seed: u64) -> Result<Scene, SketchError> {
        let (width, height) = (config.width, config.height);
        let mut canvas = Surface::new(width, height)?;
        canvas.fill(Rgba::BLACK);

        let mut rng = Xorshift64::new(seed);
        let noise = Perlin::new(seed as u32);
        let grain = grain_texture(width, height, &config, &mut rng)?;

        let bounds = DVec2::new(width as f64, height as f64);
        let blobs = (0..config.blobs)
            .map(|_| Blob::spawn(&mut rng, bounds, config.blob_tint))
            .collect();
        let radiants = (0..config.radiants)
            .map(|_| Radiant::spawn(&mut rng, bounds))
            .collect();
        let holes = (0..config.holes)
            .map(|_| Hole::spawn(&mut rng, bounds))
            .collect();
        let sparks = (0..config.sparks)
            .map(|_| Spark::spawn(&mut rng, bounds))
            .collect();

        Ok(Scene {
            config,
            width,
            height,
            frame: 0,
            rng,
            noise,
            grain,
            canvas,
            blobs,
            radiants,
            holes,
            sparks,
            motes: Vec::new(),
        })
    }

    /// Convenience constructor from a preset name.
    pub fn from_preset(name: &str, seed: u64) -> Result<Scene, SketchError> {
        Scene::new(SketchConfig::from_name(name)?, seed)
    }

    /// Builds a scene from a [`Recipe`]: preset defaults, then the recipe's
    /// JSON overrides, then its explicit dimensions, seeded with its seed.
    /// The recipe's frame count is the caller's to drive.
    pub fn from_recipe(recipe: &Recipe) -> Result<Scene, SketchError> {
        recipe.validate()?;
        let mut config = SketchConfig::from_name(&recipe.preset)?;
        config.apply_params(&recipe.params);
        config.width = recipe.width;
        config.height = recipe.height;
        Scene::new(config, recipe.seed)
    }

    /// Renders one frame into the owned canvas and advances the frame
    /// counter. Update and draw are interleaved per pool, in draw order.
    pub fn step(&mut self) -> Result<(), SketchError> {
        self.canvas.blit(&self.grain)?;
        let bounds = self.bounds();
        let frame = self.frame;

        let mut ctx = DrawContext::new(&mut self.canvas);

        // Fade wash over the grain, the source of the motion-trail look.
        ctx.no_stroke();
        ctx.set_fill(Rgba::BLACK.with_alpha(self.config.trail_fade));
        ctx.rect(DVec2::ZERO, bounds);

        for hole in &self.holes {
            hole.draw(&mut ctx);
        }
        for blob in &mut self.blobs {
            blob.update(frame, &self.noise, self.config.noise_drift, bounds);
            blob.draw(&mut ctx);
        }
        for radiant in &mut self.radiants {
            radiant.update();
            radiant.draw(&mut ctx);
        }
        for spark in &mut self.sparks {
            spark.update(&mut self.rng, bounds);
            spark.draw(&mut ctx, &self.noise, self.config.spark_tint);
        }
        if let Some(cap) = self.config.mote_cap {
            for _ in 0..self.config.mote_spawn {
                self.motes.push(Mote::spawn(&mut self.rng, bounds));
            }
            for mote in &mut self.motes {
                mote.update();
                mote.draw(&mut ctx, self.config.spark_tint);
            }
            // Ceiling trim is the only way a mote ever leaves the list.
            if self.motes.len() > cap {
                let excess = self.motes.len() - cap;
                self.motes.drain(0..excess);
            }
        }

        self.frame += 1;
        Ok(())
    }

    /// Handles a host resize: reallocates the canvas and grain raster at
    /// the new dimensions and rescales every entity from its stored
    /// normalized position. Size-derived fields scale by
    /// `min(new) / min(old)`. Populations and identities are untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), SketchError> {
        let mut canvas = Surface::new(width, height)?;
        canvas.fill(Rgba::BLACK);
        let grain = grain_texture(width, height, &self.config, &mut self.rng)?;

        let old_min = (self.width.min(self.height)) as f64;
        let factor = (width.min(height)) as f64 / old_min;
        let ratio = DVec2::new(
            width as f64 / self.width as f64,
            height as f64 / self.height as f64,
        );

        self.canvas = canvas;
        self.grain = grain;
        self.width = width;
        self.height = height;

        let bounds = self.bounds();
        for blob in &mut self.blobs {
            blob.rescale(bounds, factor);
        }
        for radiant in &mut self.radiants {
            radiant.rescale(bounds, factor);
        }
        for hole in &mut self.holes {
            hole.rescale(bounds, factor);
        }
        for spark in &mut self.sparks {
            spark.rescale(bounds);
        }
        for mote in &mut self.motes {
            mote.rescale(ratio);
        }
        Ok(())
    }

    /// Canvas bounds in pixels.
    pub fn bounds(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }

    /// The rendered canvas after the most recent [`Scene::step`].
    pub fn surface(&self) -> &Surface {
        &self.canvas
    }

    /// Frames rendered so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The configuration this scene was built from.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Current canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn radiants(&self) -> &[Radiant] {
        &self.radiants
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn motes(&self) -> &[Mote] {
        &self.motes
    }
}
