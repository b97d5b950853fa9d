//! Named configuration presets.
//!
//! The original family of sketches consisted of near-duplicate programs that
//! differed only in tuning constants and small feature subsets. Here each
//! variant is a [`SketchConfig`] preset: `memoir` is the richest variant and
//! the default, the rest are selected by name. A free-form JSON object can
//! override individual fields per render without defining a new preset.

use lumina_core::params::{param_bool, param_f64, param_usize};
use lumina_core::{Rgba, SketchError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// All recognized preset names.
const PRESET_NAMES: &[&str] = &["memoir", "ember", "stillness", "violet"];

/// Full tuning for one sketch variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Preset name this configuration started from.
    pub name: String,
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Pool sizes. Fixed for the life of a scene.
    pub blobs: usize,
    pub radiants: usize,
    pub holes: usize,
    pub sparks: usize,
    /// Whether blobs drift on Perlin noise. One variant drops this.
    pub noise_drift: bool,
    /// Alpha of the per-frame black fade rectangle (the motion-trail wash).
    pub trail_fade: f64,
    /// Base color blobs vary around.
    pub blob_tint: Rgba,
    /// Base color sparks (and motes) vary around.
    pub spark_tint: Rgba,
    /// Grain texture dot and scratch-line colors.
    pub grain_dot_color: Rgba,
    pub grain_line_color: Rgba,
    /// Grain texture element counts.
    pub grain_dots: usize,
    pub grain_lines: usize,
    /// Mote trail list: ceiling and per-frame spawn count. A ceiling of
    /// `None` disables motes entirely.
    pub mote_cap: Option<usize>,
    pub mote_spawn: usize,
    /// Nominal frame rate of the variant. Informational only: the offline
    /// driver renders frame by frame and pacing belongs to a host loop.
    pub nominal_fps: u32,
}

impl SketchConfig {
    /// The richest variant: full pools, Perlin drift, warm palette, 900×900.
    pub fn memoir() -> SketchConfig {
        SketchConfig {
            name: "memoir".into(),
            width: 900,
            height: 900,
            blobs: 60,
            radiants: 25,
            holes: 20,
            sparks: 200,
            noise_drift: true,
            trail_fade: 25.0 / 255.0,
            blob_tint: Rgba::from_u8(255, 180, 120, 255),
            spark_tint: Rgba::from_u8(255, 215, 130, 255),
            grain_dot_color: Rgba::from_u8(30, 20, 40, 255),
            grain_line_color: Rgba::from_u8(40, 30, 50, 10),
            grain_dots: 10_000,
            grain_lines: 50,
            mote_cap: None,
            mote_spawn: 0,
            nominal_fps: 60,
        }
    }

    /// Smaller 800×600 variant with the rising ember-mote trail list.
    pub fn ember() -> SketchConfig {
        SketchConfig {
            name: "ember".into(),
            width: 800,
            height: 600,
            blobs: 40,
            radiants: 15,
            holes: 12,
            sparks: 120,
            grain_dots: 6_000,
            grain_lines: 30,
            mote_cap: Some(600),
            mote_spawn: 2,
            ..SketchConfig::memoir()
        }
    }

    /// The variant that drops Perlin drift and runs at a fixed 30 fps.
    pub fn stillness() -> SketchConfig {
        SketchConfig {
            name: "stillness".into(),
            sparks: 80,
            noise_drift: false,
            nominal_fps: 30,
            ..SketchConfig::memoir()
        }
    }

    /// Cool-palette variant; structure matches `memoir`.
    pub fn violet() -> SketchConfig {
        SketchConfig {
            name: "violet".into(),
            blob_tint: Rgba::from_u8(200, 160, 255, 255),
            spark_tint: Rgba::from_u8(190, 170, 255, 255),
            grain_dot_color: Rgba::from_u8(36, 18, 48, 255),
            ..SketchConfig::memoir()
        }
    }

    /// Looks a preset up by name.
    ///
    /// Returns `SketchError::UnknownPreset` for unrecognized names.
    pub fn from_name(name: &str) -> Result<SketchConfig, SketchError> {
        match name {
            "memoir" => Ok(SketchConfig::memoir()),
            "ember" => Ok(SketchConfig::ember()),
            "stillness" => Ok(SketchConfig::stillness()),
            "violet" => Ok(SketchConfig::violet()),
            _ => Err(SketchError::UnknownPreset(name.to_string())),
        }
    }

    /// Returns all recognized preset names.
    pub fn list_names() -> &'static [&'static str] {
        PRESET_NAMES
    }

    /// Applies a JSON override object. Missing or mistyped keys keep the
    /// preset value. `mote_cap: 0` disables motes.
    pub fn apply_params(&mut self, params: &Value) {
        self.width = param_usize(params, "width", self.width);
        self.height = param_usize(params, "height", self.height);
        self.blobs = param_usize(params, "blobs", self.blobs);
        self.radiants = param_usize(params, "radiants", self.radiants);
        self.holes = param_usize(params, "holes", self.holes);
        self.sparks = param_usize(params, "sparks", self.sparks);
        self.noise_drift = param_bool(params, "noise_drift", self.noise_drift);
        self.trail_fade = param_f64(params, "trail_fade", self.trail_fade).clamp(0.0, 1.0);
        self.grain_dots = param_usize(params, "grain_dots", self.grain_dots);
        self.grain_lines = param_usize(params, "grain_lines", self.grain_lines);
        if let Some(cap) = params.get("mote_cap").and_then(Value::as_u64) {
            self.mote_cap = if cap == 0 { None } else { Some(cap as usize) };
        }
        self.mote_spawn = param_usize(params, "mote_spawn", self.mote_spawn);
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        SketchConfig::memoir()
    }
}
