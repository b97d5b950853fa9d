//! PNG snapshot of a rendered surface.

use std::path::Path;

use image::{ImageBuffer, Rgba as ImageRgba};
use lumina_core::{SketchError, Surface};

/// Writes the surface to `path` as an opaque RGBA PNG.
///
/// I/O and encoding failures surface as `SketchError::Io`.
pub fn write_png(surface: &Surface, path: &Path) -> Result<(), SketchError> {
    let buffer: ImageBuffer<ImageRgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
        surface.width() as u32,
        surface.height() as u32,
        surface.to_rgba8(),
    )
    .ok_or_else(|| SketchError::Io("surface buffer size mismatch".to_string()))?;
    buffer
        .save(path)
        .map_err(|e| SketchError::Io(e.to_string()))
}
