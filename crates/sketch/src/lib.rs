#![deny(unsafe_code)]
//! The lumina generative life artwork.
//!
//! A fixed population of four entity kinds — glowing noise [`Blob`]s,
//! rotating [`Radiant`] ray bursts, static [`Hole`] voids, and drifting
//! [`Spark`]s — animated over a pre-rendered film-grain raster. The
//! [`Scene`] owns the pools and drives one frame per [`Scene::step`];
//! [`SketchConfig`] presets capture the near-duplicate variants of the
//! original sketches as tuning constants.

pub mod blob;
pub mod hole;
pub mod mote;
pub mod preset;
pub mod radiant;
pub mod recipe;
pub mod scene;
pub mod spark;
pub mod texture;

#[cfg(feature = "png")]
pub mod snapshot;

pub use blob::Blob;
pub use hole::Hole;
pub use mote::Mote;
pub use preset::SketchConfig;
pub use radiant::Radiant;
pub use recipe::Recipe;
pub use scene::Scene;
pub use spark::{Spark, SparkKind};

/// Canvas extent the original artwork was tuned against. Construction-time
/// sizes are multiplied by `min(width, height) / REFERENCE_EXTENT` so the
/// piece reads the same at any resolution.
pub const REFERENCE_EXTENT: f64 = 900.0;

/// Size scale factor for a canvas of the given dimensions.
pub(crate) fn size_scale(width: f64, height: f64) -> f64 {
    width.min(height) / REFERENCE_EXTENT
}
