use std::path::Path;

use ember_gl::{DataFormat, DataType, MagFilter, MinFilter, Texture, TextureParameter, TextureTarget};

use crate::error::{Error, Result};
use crate::gfx_debug;

/// Create a 2D texture from an encoded image file
pub fn texture2d_from_file<P: AsRef<Path>>(path: P) -> Result<Texture> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|err| Error::Io(format!("unable to open file '{}': {}", path.display(), err)))?;
    texture2d_from_bytes(&bytes)
}

/// Create a 2D texture from encoded image bytes (PNG, JPEG, ...)
///
/// The channel count of the decoded image selects the sized internal
/// format (R8/RG8/RGB8/RGBA8). Storage is immutable with a full mipmap
/// chain; min filter is trilinear, mag filter linear.
pub fn texture2d_from_bytes(bytes: &[u8]) -> Result<Texture> {
    let decoded =
        image::load_from_memory(bytes).map_err(|err| Error::Image(err.to_string()))?;

    let width = decoded.width() as i32;
    let height = decoded.height() as i32;
    let channels = decoded.color().channel_count();
    let (internal_format, upload_format) = format_for_channels(channels);

    let texture = Texture::new(TextureTarget::Texture2D);
    texture.storage_2d(mip_levels(width, height), internal_format, width, height);

    match channels {
        1 => upload(&texture, width, height, upload_format, decoded.to_luma8().as_raw()),
        2 => upload(
            &texture,
            width,
            height,
            upload_format,
            decoded.to_luma_alpha8().as_raw(),
        ),
        3 => upload(&texture, width, height, upload_format, decoded.to_rgb8().as_raw()),
        _ => upload(&texture, width, height, upload_format, decoded.to_rgba8().as_raw()),
    }

    texture.generate_mipmap();
    texture.parameter_i(
        TextureParameter::MinFilter,
        MinFilter::LinearMipmapLinear.to_gl() as i32,
    );
    texture.parameter_i(TextureParameter::MagFilter, MagFilter::Linear.to_gl() as i32);

    gfx_debug!(
        "ember::TextureLoader",
        "created {}x{} texture with {} channels",
        width,
        height,
        channels
    );
    Ok(texture)
}

fn upload(texture: &Texture, width: i32, height: i32, format: DataFormat, pixels: &[u8]) {
    texture.sub_image_2d(0, 0, 0, width, height, format, DataType::UnsignedByte, pixels);
}

/// Sized internal format and matching upload format for a decoded
/// channel count; anything above four channels clamps to RGBA
fn format_for_channels(channels: u8) -> (DataFormat, DataFormat) {
    match channels {
        1 => (DataFormat::R8, DataFormat::R),
        2 => (DataFormat::Rg8, DataFormat::Rg),
        3 => (DataFormat::Rgb8, DataFormat::Rgb),
        _ => (DataFormat::Rgba8, DataFormat::Rgba),
    }
}

/// Full mipmap chain length for the given extent
fn mip_levels(width: i32, height: i32) -> i32 {
    let extent = width.max(height).max(1);
    32 - (extent as u32).leading_zeros() as i32
}

#[cfg(test)]
#[path = "texture_loader_tests.rs"]
mod tests;
