use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{buffer::ConvertBuffer, ColorType, ImageEncoder, RgbImage, RgbaImage};

use crate::error::RenderError;

/// Writes the rendered buffer to `path`. `.ppm` produces a binary P6 pixmap
/// (alpha is dropped); any other extension is encoded by `image` from the
/// extension and keeps alpha where the format allows it.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    let is_ppm = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let mut writer = BufWriter::new(File::create(path)?);
        write_ppm(image, &mut writer)?;
        writer.flush()?;
        return Ok(());
    }

    image.save(path)?;
    Ok(())
}

pub fn write_ppm<W: Write>(image: &RgbaImage, writer: W) -> Result<(), RenderError> {
    let rgb: RgbImage = image.convert();
    PnmEncoder::new(writer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)?;
    Ok(())
}
