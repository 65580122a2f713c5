use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fixed values expected by the game's blueprint importer.
pub mod factorio {
    /// Leading character of every blueprint string (format version).
    pub const FORMAT_PREFIX: char = '0';
    /// Item tag of a single blueprint (as opposed to a book or planner).
    pub const ITEM: &str = "blueprint";
    /// Packed game version the blueprint claims to target (2.0.24).
    /// Opaque to this crate; the importer only needs it to be present.
    pub const VERSION: u64 = 562949954994181;
    /// Tile placed for every selected cell.
    pub const FOUNDATION_TILE: &str = "space-platform-foundation";
    /// Signal shown as the blueprint icon.
    pub const ICON_SIGNAL: &str = "space-platform-foundation";
    /// Icon slot (1-based).
    pub const ICON_INDEX: u32 = 1;
}

/// Resampling filters offered for resizing.
///
/// Nearest-neighbour is intentionally absent: every variant interpolates.
/// `Triangle` has the same one-pixel support as a Hamming window and is the default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResizeFilter {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "triangle" | "bilinear" => Ok(Self::Triangle),
            "catmull-rom" | "catmullrom" | "bicubic" => Ok(Self::CatmullRom),
            "gaussian" => Ok(Self::Gaussian),
            "lanczos3" | "lanczos" => Ok(Self::Lanczos3),
            _ => Err(()),
        }
    }
}

/// Conversion settings for one image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Target width in tiles. `None` keeps the source width (or follows `height`'s aspect ratio).
    #[serde(default)]
    pub width: Option<u32>,
    /// Target height in tiles. `None` keeps the source height (or follows `width`'s aspect ratio).
    #[serde(default)]
    pub height: Option<u32>,
    /// Invert colour channels before thresholding. Alpha is left untouched.
    #[serde(default)]
    pub invert: bool,
    /// Brightness cutoff for images without alpha; a cell is set when `luma >= threshold`.
    /// Kept wide so out-of-range input can be reported instead of truncated.
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    #[serde(default)]
    pub filter: ResizeFilter,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            invert: false,
            threshold: default_threshold(),
            filter: ResizeFilter::default(),
        }
    }
}

impl ConvertConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - `threshold` is outside `0..=255`
    /// - a requested width or height is zero
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::BlueprintError;

        if !(0..=255).contains(&self.threshold) {
            return Err(BlueprintError::InvalidThreshold(self.threshold));
        }

        if self.width == Some(0) || self.height == Some(0) {
            return Err(BlueprintError::InvalidDimensions {
                width: self.width.unwrap_or_default(),
                height: self.height.unwrap_or_default(),
            });
        }

        Ok(())
    }

    /// Threshold narrowed to a byte. Only meaningful after `validate` succeeded.
    pub fn threshold_u8(&self) -> u8 {
        self.threshold.clamp(0, 255) as u8
    }
}

fn default_threshold() -> i64 {
    128
}

/// Builder for `ConvertConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct ConvertConfigBuilder {
    cfg: ConvertConfig,
}

impl ConvertConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: ConvertConfig::default(),
        }
    }
    pub fn width(mut self, v: u32) -> Self {
        self.cfg.width = Some(v);
        self
    }
    pub fn height(mut self, v: u32) -> Self {
        self.cfg.height = Some(v);
        self
    }
    pub fn with_size(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = Some(w);
        self.cfg.height = Some(h);
        self
    }
    pub fn invert(mut self, v: bool) -> Self {
        self.cfg.invert = v;
        self
    }
    pub fn threshold(mut self, v: i64) -> Self {
        self.cfg.threshold = v;
        self
    }
    pub fn filter(mut self, v: ResizeFilter) -> Self {
        self.cfg.filter = v;
        self
    }
    pub fn build(self) -> ConvertConfig {
        self.cfg
    }
}

impl ConvertConfig {
    /// Create a fluent builder for `ConvertConfig`.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::new()
    }
}
