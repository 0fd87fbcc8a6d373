use std::path::Path;

use image::{ImageReader, ImageResult, RgbaImage};
use log::{debug, info, warn};

use crate::{
    artifact::Artifact, bitmap::encode_bmp32, config::IconJob, error::FileAccessError,
    preview::Preview,
};

pub const WIDTH_NAME: &str = "APPICON_W";
pub const HEIGHT_NAME: &str = "APPICON_H";
pub const DATA_NAME: &str = "APPICON_DATA";

/// Source slot for each output byte: RGBA -> ARBG.
const ARBG: [usize; 4] = [3, 0, 2, 1];

/// Decodes the image, whatever its format, into 8-bit RGBA.
pub fn load_icon(path: &Path) -> Result<RgbaImage, FileAccessError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| FileAccessError::read(path, e))?;
    let img = reader.decode().map_err(|e| FileAccessError::decode(path, e))?.into_rgba8();
    debug!("Decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Returns the pixels top-down with each one reordered to A, R, B, G.
pub fn reorder_channels(img: &RgbaImage) -> Vec<u8> {
    img.pixels()
        .flat_map(|px| ARBG.map(|slot| px.0[slot]))
        .collect()
}

pub fn icon_artifact(img: &RgbaImage, generator: &str) -> ImageResult<Artifact> {
    let (width, height) = img.dimensions();
    let bmp = encode_bmp32(width, height, &reorder_channels(img))?;
    Ok(Artifact::new(generator, DATA_NAME, bmp)
        .with_constant(WIDTH_NAME, width as u64)
        .with_constant(HEIGHT_NAME, height as u64))
}

pub fn embed_icon(job: &IconJob, preview: &dyn Preview) -> Result<Artifact, FileAccessError> {
    let img = load_icon(&job.source)?;

    if let Err(e) = preview.show(&img) {
        warn!("Icon preview failed: {e}");
    }

    // too large for a BMP: the source cannot be embedded
    let artifact =
        icon_artifact(&img, &job.generator).map_err(|e| FileAccessError::decode(&job.source, e))?;
    artifact.write_to(&job.output)?;
    info!(
        "Embedded {} ({}x{}, {} bytes) into {}",
        job.source.display(),
        img.width(),
        img.height(),
        artifact.data.len(),
        job.output.display()
    );
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn reorder_is_arbg() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0x11, 0x22, 0x33, 0x44]));
        assert_eq!(reorder_channels(&img), vec![0x44, 0x11, 0x33, 0x22]);
    }

    #[test]
    fn reorder_keeps_row_major_order() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
        img.put_pixel(1, 0, Rgba([5, 6, 7, 8]));
        assert_eq!(reorder_channels(&img), vec![4, 1, 3, 2, 8, 5, 7, 6]);
    }
}
