//! Core library for turning raster images into Factorio space-platform foundation blueprints.
//!
//! - Preprocess: load, optional aspect-preserving resize, optional colour invert (alpha kept)
//! - Matrix: alpha (`!= 0`) or brightness (`>= threshold`) decides which cells get a tile
//! - Export: tiles in row-major order → JSON → zlib → base64, prefixed with `"0"`
//!
//! Quick example:
//! ```ignore
//! use platform_blueprint_core::{ConvertConfig, convert_file};
//! # fn main() -> anyhow::Result<()> {
//! let cfg = ConvertConfig::builder().width(64).threshold(100).build();
//! let out = convert_file("logo.png".as_ref(), &cfg)?;
//! println!("{} tiles: {}", out.stats().tiles, out.blueprint_string);
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod matrix;
pub mod model;
pub mod pipeline;
pub mod preprocess;

pub use config::*;
pub use error::*;
pub use export::*;
pub use matrix::*;
pub use model::*;
pub use pipeline::*;
pub use preprocess::*;

/// Convenience prelude for common types and functions.
/// Importing `platform_blueprint_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{ConvertConfig, ConvertConfigBuilder, ResizeFilter, factorio};
    pub use crate::error::{BlueprintError, Result};
    pub use crate::model::{
        Blueprint, BlueprintDocument, BlueprintStats, BooleanMatrix, Icon, Position, Signal, Tile,
    };
    pub use crate::{
        Conversion, build_document, convert_file, convert_image, decode_blueprint,
        decode_blueprint_json, encode_blueprint, invert_colors, is_alpha_bearing,
        label_from_path, load_image, preprocess, proportional_size, serialize,
        luma_601, to_boolean_matrix, to_json,
    };
}
