use crate::model::BooleanMatrix;
use image::DynamicImage;

/// True when tile selection should follow the alpha channel rather than brightness.
///
/// Decoders expand palette transparency (e.g. PNG `tRNS`) into an alpha channel,
/// so paletted images with a transparent entry are covered here too. Opaque GIFs
/// are narrowed to RGB by `load_image`.
pub fn is_alpha_bearing(image: &DynamicImage) -> bool {
    image.color().has_alpha()
}

/// Converts `image` into a tile mask of the same size.
///
/// - alpha-bearing images: a cell is set when its alpha is non-zero
/// - everything else: a cell is set when its 601 luma is `>= threshold`
pub fn to_boolean_matrix(image: &DynamicImage, threshold: u8) -> BooleanMatrix {
    if is_alpha_bearing(image) {
        alpha_matrix(image)
    } else {
        luma_matrix(image, threshold)
    }
}

fn alpha_matrix(image: &DynamicImage) -> BooleanMatrix {
    let rgba = image.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut m = BooleanMatrix::new(w, h);
    for (x, y, px) in rgba.enumerate_pixels() {
        if px[3] != 0 {
            m.set(x, y, true);
        }
    }
    m
}

fn luma_matrix(image: &DynamicImage, threshold: u8) -> BooleanMatrix {
    let rgb = image.to_rgb8();
    let (w, h) = rgb.dimensions();
    let mut m = BooleanMatrix::new(w, h);
    for (x, y, px) in rgb.enumerate_pixels() {
        if luma_601(px.0) >= threshold {
            m.set(x, y, true);
        }
    }
    m
}

/// ITU-R 601-2 luma (`0.299 R + 0.587 G + 0.114 B`) in 16.16 fixed point, rounded.
/// Grays map to themselves.
pub fn luma_601([r, g, b]: [u8; 3]) -> u8 {
    let l = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (l >> 16) as u8
}
