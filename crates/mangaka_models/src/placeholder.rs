//! Blank placeholder panels.

use image::{ImageFormat, Rgb, RgbImage};
use mangaka_error::{BackendError, BackendErrorKind, MangakaResult};
use std::io::Cursor;

/// Placeholder width in pixels.
pub const PLACEHOLDER_WIDTH: u32 = 512;
/// Placeholder height in pixels.
pub const PLACEHOLDER_HEIGHT: u32 = 768;

/// Encode a white 512x768 PNG.
///
/// The output is byte-for-byte identical on every call.
pub fn render_placeholder() -> MangakaResult<Vec<u8>> {
    let img = RgbImage::from_pixel(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, Rgb([255, 255, 255]));

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| BackendError::new(BackendErrorKind::Placeholder(e.to_string())))?;

    Ok(bytes)
}
