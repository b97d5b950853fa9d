//! Reproducible specification for one render.
//!
//! A [`Recipe`] captures everything needed to recreate a frame: preset name,
//! resolved canvas dimensions, parameter overrides, PRNG seed, and frame
//! count. Two identical recipes fed to the same binary produce bit-identical
//! output.

use lumina_core::SketchError;
use serde::{Deserialize, Serialize};

use crate::preset::SketchConfig;

/// Reproducible render specification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub preset: String,
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub frames: usize,
}

impl Recipe {
    /// Creates a recipe with default params (`{}`) and zero frames.
    pub fn new(preset: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            preset: preset.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            frames: 0,
        }
    }

    /// Validates that the preset name is recognized, the dimensions are
    /// non-zero, and the pixel count does not overflow.
    pub fn validate(&self) -> Result<(), SketchError> {
        SketchConfig::from_name(&self.preset)?;
        if self.width == 0 || self.height == 0 {
            return Err(SketchError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(SketchError::InvalidDimensions)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_recipe_with_default_params_and_frames() {
        let r = Recipe::new("memoir", 900, 900, 42);
        assert_eq!(r.preset, "memoir");
        assert_eq!((r.width, r.height), (900, 900));
        assert_eq!(r.seed, 42);
        assert_eq!(r.frames, 0);
        assert_eq!(r.params, serde_json::json!({}));
    }

    #[test]
    fn json_round_trip_with_custom_params() {
        let mut r = Recipe::new("ember", 800, 600, 8675309);
        r.params = serde_json::json!({"sparks": 50, "noise_drift": false});
        r.frames = 300;
        let json = serde_json::to_string_pretty(&r).unwrap();
        let restored: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(r, restored);
    }

    #[test]
    fn json_contains_expected_keys() {
        let v = serde_json::to_value(Recipe::new("violet", 128, 128, 1)).unwrap();
        for key in ["preset", "width", "height", "params", "seed", "frames"] {
            assert!(v.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn validate_succeeds_for_valid_recipe() {
        assert!(Recipe::new("memoir", 900, 900, 42).validate().is_ok());
    }

    #[test]
    fn validate_fails_for_zero_dimension() {
        assert!(Recipe::new("memoir", 0, 900, 42).validate().is_err());
        assert!(Recipe::new("memoir", 900, 0, 42).validate().is_err());
    }

    #[test]
    fn validate_fails_for_overflow() {
        assert!(Recipe::new("memoir", usize::MAX, 2, 42).validate().is_err());
    }

    #[test]
    fn validate_fails_for_unknown_preset() {
        assert!(matches!(
            Recipe::new("nocturne", 900, 900, 42).validate(),
            Err(SketchError::UnknownPreset(_))
        ));
    }
}
