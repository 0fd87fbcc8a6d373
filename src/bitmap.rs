//! Uncompressed 32-bit BMP writer.
//!
//! The layout is fixed so the generated blob stays byte-identical for the
//! icon loader: BITMAPINFOHEADER, BI_RGB, bottom-up rows, 96 dpi.

use image::{
    ImageError, ImageResult,
    error::{LimitError, LimitErrorKind},
};

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 32;
/// 96 dpi expressed in pixels per metre.
const PIXELS_PER_METRE: u32 = 3780;

pub const HEADER_LEN: usize = (FILE_HEADER_LEN + INFO_HEADER_LEN) as usize;

/// Encodes a top-down buffer of 4-byte pixels as a complete BMP file.
///
/// Each pixel is read as (R, G, B, A) slots and stored as B, G, R, A.
/// Fails when the file would not fit the format's 32-bit size fields.
pub fn encode_bmp32(width: u32, height: u32, pixels: &[u8]) -> ImageResult<Vec<u8>> {
    let offset = FILE_HEADER_LEN + INFO_HEADER_LEN;
    let image_len = u32::try_from(u64::from(width) * 4 * u64::from(height))
        .ok()
        .filter(|len| len.checked_add(offset).is_some())
        .ok_or_else(|| ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)))?;

    let stride = width as usize * 4;
    debug_assert_eq!(pixels.len(), image_len as usize);

    let mut bmp = Vec::with_capacity(offset as usize + image_len as usize);

    // BITMAPFILEHEADER
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&(offset + image_len).to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&offset.to_le_bytes());

    // BITMAPINFOHEADER
    bmp.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    bmp.extend_from_slice(&width.to_le_bytes());
    bmp.extend_from_slice(&height.to_le_bytes()); // positive: bottom-up
    bmp.extend_from_slice(&1u16.to_le_bytes());
    bmp.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    bmp.extend_from_slice(&image_len.to_le_bytes());
    bmp.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    bmp.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());

    // stride is a multiple of 4, rows need no padding
    if stride > 0 {
        for row in pixels.chunks_exact(stride).rev() {
            for px in row.chunks_exact(4) {
                bmp.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
            }
        }
    }

    Ok(bmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_layout() {
        let bmp = encode_bmp32(1, 1, &[0x11, 0x22, 0x33, 0x44]).unwrap();
        let expected: [u8; 58] = [
            b'B', b'M', 0x3a, 0, 0, 0, 0, 0, 0, 0, 0x36, 0, 0, 0, // file header
            0x28, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0x20, 0, // size, w, h, planes, bpp
            0, 0, 0, 0, 4, 0, 0, 0, 0xc4, 0x0e, 0, 0, 0xc4, 0x0e, 0, 0, // comp, len, ppm
            0, 0, 0, 0, 0, 0, 0, 0, // colours
            0x33, 0x22, 0x11, 0x44,
        ];
        assert_eq!(bmp, expected);
    }

    #[test]
    fn rows_are_stored_bottom_up() {
        // 1x2: top pixel red, bottom pixel blue
        let pixels = [0xff, 0, 0, 0xff, 0, 0, 0xff, 0xff];
        let bmp = encode_bmp32(1, 2, &pixels).unwrap();
        assert_eq!(bmp.len(), HEADER_LEN + 8);
        assert_eq!(&bmp[HEADER_LEN..], &[0xff, 0, 0, 0xff, 0, 0, 0xff, 0xff]);
        assert_eq!(&bmp[2..6], &62u32.to_le_bytes());
        assert_eq!(&bmp[34..38], &8u32.to_le_bytes());
    }

    #[test]
    fn empty_image_is_header_only() {
        let bmp = encode_bmp32(0, 0, &[]).unwrap();
        assert_eq!(bmp.len(), HEADER_LEN);
    }

    #[test]
    fn oversized_image_is_rejected() {
        // pixel data alone past 4 GiB
        let err = encode_bmp32(0x8000, 0x8000, &[]).unwrap_err();
        assert!(matches!(err, ImageError::Limits(_)));

        // pixel data fits, header pushes the file size past u32
        let err = encode_bmp32(0x3fff_ffff, 1, &[]).unwrap_err();
        assert!(matches!(err, ImageError::Limits(_)));
    }
}
