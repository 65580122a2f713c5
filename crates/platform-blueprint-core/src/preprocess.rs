use crate::config::ConvertConfig;
use crate::error::{BlueprintError, Result};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::path::Path;
use tracing::{debug, instrument};

/// Loads and decodes the image at `path`.
///
/// The path must name a regular file; this is checked before the file is opened.
/// The format is guessed from content, falling back to the extension.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.is_file() {
        return Err(BlueprintError::FileNotFound(path.to_path_buf()));
    }
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let mut img = reader.decode()?;
    // GIF always decodes to RGBA; only a used transparent index makes it alpha-bearing
    if format == Some(ImageFormat::Gif) && is_fully_opaque(&img) {
        img = DynamicImage::ImageRgb8(img.to_rgb8());
    }
    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        format = ?format,
        "decoded image"
    );
    Ok(img)
}

fn is_fully_opaque(image: &DynamicImage) -> bool {
    image.to_rgba8().pixels().all(|px| px[3] == 255)
}

/// Resolves the target size for a resize request against the source size `(orig_w, orig_h)`.
///
/// - neither given: `None` (no resize)
/// - both given: exactly that size, aspect ratio ignored
/// - one given: the other follows the source aspect ratio, rounded half-to-even
///
/// A zero result is rejected so the grid never collapses to nothing.
pub fn proportional_size(
    (orig_w, orig_h): (u32, u32),
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Option<(u32, u32)>> {
    let (w, h) = match (width, height) {
        (None, None) => return Ok(None),
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => (w, scale_round(w, orig_w, orig_h)),
        (None, Some(h)) => (scale_round(h, orig_h, orig_w), h),
    };
    if w == 0 || h == 0 {
        return Err(BlueprintError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    Ok(Some((w, h)))
}

/// `round(given / orig_given * orig_other)` with ties going to the even integer.
fn scale_round(given: u32, orig_given: u32, orig_other: u32) -> u32 {
    if orig_given == 0 {
        return 0;
    }
    let v = given as f64 / orig_given as f64 * orig_other as f64;
    v.round_ties_even() as u32
}

/// Inverts colour channels (`255 - v`) and keeps any alpha channel as it was.
///
/// Sources without alpha come back as 8-bit RGB, sources with alpha as 8-bit RGBA,
/// so alpha-based tile selection still sees the original transparency.
pub fn invert_colors(image: &DynamicImage) -> DynamicImage {
    if image.color().has_alpha() {
        let mut rgba = image.to_rgba8();
        for px in rgba.pixels_mut() {
            for c in &mut px.0[..3] {
                *c = 255 - *c;
            }
        }
        DynamicImage::ImageRgba8(rgba)
    } else {
        let mut rgb = image.to_rgb8();
        for px in rgb.pixels_mut() {
            for c in &mut px.0 {
                *c = 255 - *c;
            }
        }
        DynamicImage::ImageRgb8(rgb)
    }
}

/// Applies the resize and invert steps of `cfg` to `image`.
pub fn preprocess(image: DynamicImage, cfg: &ConvertConfig) -> Result<DynamicImage> {
    let mut img = image;
    if let Some((w, h)) = proportional_size(img.dimensions(), cfg.width, cfg.height)? {
        debug!(
            from_w = img.width(),
            from_h = img.height(),
            to_w = w,
            to_h = h,
            filter = ?cfg.filter,
            "resizing"
        );
        img = img.resize_exact(w, h, cfg.filter.filter_type());
    }
    if cfg.invert {
        debug!(alpha = img.color().has_alpha(), "inverting colors");
        img = invert_colors(&img);
    }
    Ok(img)
}
