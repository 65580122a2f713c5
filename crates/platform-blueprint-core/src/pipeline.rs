use crate::config::ConvertConfig;
use crate::error::Result;
use crate::export::{build_document, encode_blueprint};
use crate::matrix::to_boolean_matrix;
use crate::model::{BlueprintDocument, BlueprintStats, BooleanMatrix};
use crate::preprocess::{load_image, preprocess};
use image::DynamicImage;
use std::path::Path;
use tracing::{info, instrument};

/// Output of a conversion run: the tile mask, the document built from it and its encoded form.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub matrix: BooleanMatrix,
    pub document: BlueprintDocument,
    /// Importable blueprint string (`"0"` + base64 of zlib-compressed JSON).
    pub blueprint_string: String,
}

impl Conversion {
    /// Computes size and coverage statistics for this conversion.
    pub fn stats(&self) -> BlueprintStats {
        BlueprintStats::from_matrix(&self.matrix)
    }
}

/// Blueprint label for an input file: its name without the extension.
pub fn label_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Converts an already decoded image into a blueprint labelled `label`.
///
/// Notes:
/// - `cfg` is validated first; nothing is computed for an invalid config.
/// - Resize happens before invert, and invert before tile selection.
#[instrument(skip_all, fields(label = label))]
pub fn convert_image(image: DynamicImage, label: &str, cfg: &ConvertConfig) -> Result<Conversion> {
    cfg.validate()?;
    convert_validated(image, label, cfg)
}

/// Loads the image at `path` and converts it, labelling the blueprint with the file stem.
///
/// The configuration is validated before the filesystem is touched, so a bad threshold
/// is reported even for a path that does not exist.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn convert_file(path: &Path, cfg: &ConvertConfig) -> Result<Conversion> {
    cfg.validate()?;
    let image = load_image(path)?;
    convert_validated(image, &label_from_path(path), cfg)
}

fn convert_validated(image: DynamicImage, label: &str, cfg: &ConvertConfig) -> Result<Conversion> {
    let img = preprocess(image, cfg)?;
    let matrix = to_boolean_matrix(&img, cfg.threshold_u8());
    let document = build_document(&matrix, label);
    let blueprint_string = encode_blueprint(&document)?;

    let out = Conversion {
        matrix,
        document,
        blueprint_string,
    };
    let stats = out.stats();
    info!(
        width = stats.width,
        height = stats.height,
        tiles = stats.tiles,
        coverage = format!("{:.2}%", stats.coverage * 100.0),
        "blueprint built"
    );
    Ok(out)
}
