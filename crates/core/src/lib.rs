#![deny(unsafe_code)]
//! Core types for the lumina generative sketch renderer.
//!
//! Provides the CPU raster [`Surface`], the [`DrawContext`] style/transform
//! layer, the [`Rgba`] color type, the [`Xorshift64`] PRNG, the
//! [`SketchError`] error type, and JSON parameter helpers.

pub mod color;
pub mod draw;
pub mod error;
pub mod params;
pub mod prng;
pub mod surface;

pub use color::Rgba;
pub use draw::{BlendMode, DrawContext};
pub use error::SketchError;
pub use prng::Xorshift64;
pub use surface::Surface;
