//! Opaque CPU raster the sketch draws into.
//!
//! A `Surface` stores `width * height` RGB triples as f64 in [0, 1],
//! row-major. The canvas itself carries no alpha channel: compositing
//! happens at write time, where each incoming fragment blends over (or adds
//! onto) what is already there. `Normal` is source-over; `Lighter` is the
//! additive mode the browser exposes as `globalCompositeOperation = 'lighter'`.

use crate::color::Rgba;
use crate::draw::BlendMode;
use crate::error::SketchError;

/// An opaque RGB f64 raster with per-write alpha compositing.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Surface {
    /// Creates a black surface of the given dimensions.
    ///
    /// Returns `SketchError::InvalidDimensions` if either dimension is zero
    /// or the pixel count would overflow `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::InvalidDimensions);
        }
        let pixels = width
            .checked_mul(height)
            .ok_or(SketchError::InvalidDimensions)?;
        let len = pixels.checked_mul(3).ok_or(SketchError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major RGB data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Fills every pixel with the opaque RGB of `color` (alpha ignored).
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(3) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }

    /// Returns the RGB triple at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f64; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Composites `color` onto `(x, y)` with the given extra `coverage`
    /// factor (anti-aliasing weight in [0, 1]). Writes outside the surface
    /// are silently dropped.
    pub fn blend_pixel(&mut self, x: isize, y: isize, color: Rgba, coverage: f64, mode: BlendMode) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let a = (color.a * coverage).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        let src = [color.r, color.g, color.b];
        for (dst, s) in self.data[i..i + 3].iter_mut().zip(src) {
            *dst = match mode {
                BlendMode::Normal => s * a + *dst * (1.0 - a),
                BlendMode::Lighter => (*dst + s * a).min(1.0),
            };
        }
    }

    /// Copies `src` over this surface, replacing every pixel.
    ///
    /// Returns `SketchError::DimensionMismatch` if the surfaces differ in size.
    pub fn blit(&mut self, src: &Surface) -> Result<(), SketchError> {
        if self.width != src.width || self.height != src.height {
            return Err(SketchError::DimensionMismatch {
                lhs_w: self.width,
                lhs_h: self.height,
                rhs_w: src.width,
                rhs_h: src.height,
            });
        }
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Converts the surface to an RGBA8 pixel buffer (alpha always 255).
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data
            .chunks_exact(3)
            .flat_map(|px| {
                let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
                [q(px[0]), q(px[1]), q(px[2]), 255u8]
            })
            .collect()
    }
}
