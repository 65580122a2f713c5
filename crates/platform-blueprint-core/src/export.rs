use crate::config::factorio;
use crate::error::{BlueprintError, Result};
use crate::model::{Blueprint, BlueprintDocument, BooleanMatrix, Icon, Position, Signal, Tile};
use base64::{Engine as _, engine::general_purpose};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Read, Write};

/// Builds the blueprint document for `matrix`: one foundation tile per `true` cell,
/// emitted in row-major order (y outer, x inner).
pub fn build_document(matrix: &BooleanMatrix, label: &str) -> BlueprintDocument {
    let tiles = matrix
        .true_cells()
        .map(|(x, y)| Tile {
            position: Position { x, y },
            name: factorio::FOUNDATION_TILE.to_string(),
        })
        .collect();
    BlueprintDocument {
        blueprint: Blueprint {
            label: label.to_string(),
            icons: vec![Icon {
                signal: Signal {
                    name: factorio::ICON_SIGNAL.to_string(),
                },
                index: factorio::ICON_INDEX,
            }],
            item: factorio::ITEM.to_string(),
            version: factorio::VERSION,
            tiles,
        },
    }
}

/// Serialize the document as pure-ASCII JSON with 4-space indentation.
/// Key order follows the struct definitions and is stable across runs;
/// non-ASCII characters are written as lowercase `\uXXXX` escapes (UTF-16).
pub fn to_json(doc: &BlueprintDocument) -> Result<String> {
    let mut buf = Vec::new();
    let fmt = AsciiPretty(PrettyFormatter::with_indent(b"    "));
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    doc.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    String::from_utf8(buf).map_err(|e| BlueprintError::Decode(e.to_string()))
}

/// `"0"` + base64(zlib(json)).
pub fn encode_blueprint(doc: &BlueprintDocument) -> Result<String> {
    let json = to_json(doc)?;
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(json.as_bytes())?;
    let compressed = enc.finish()?;

    let b64 = general_purpose::STANDARD.encode(compressed);
    let mut out = String::with_capacity(b64.len() + 1);
    out.push(factorio::FORMAT_PREFIX);
    out.push_str(&b64);
    Ok(out)
}

/// Builds the document for `matrix` and encodes it into a blueprint string.
pub fn serialize(matrix: &BooleanMatrix, label: &str) -> Result<String> {
    encode_blueprint(&build_document(matrix, label))
}

/// Inflates a blueprint string back into its JSON text.
pub fn decode_blueprint_json(s: &str) -> Result<String> {
    let s = s.trim();
    let payload = s.strip_prefix(factorio::FORMAT_PREFIX).ok_or_else(|| {
        BlueprintError::Decode(format!(
            "expected version prefix '{}', got {:?}",
            factorio::FORMAT_PREFIX,
            s.chars().next()
        ))
    })?;
    let compressed = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| BlueprintError::Decode(format!("base64: {e}")))?;
    let mut json = String::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_string(&mut json)
        .map_err(|e| BlueprintError::Decode(format!("zlib: {e}")))?;
    Ok(json)
}

/// Parses a blueprint string produced by [`encode_blueprint`].
pub fn decode_blueprint(s: &str) -> Result<BlueprintDocument> {
    let json = decode_blueprint_json(s)?;
    Ok(serde_json::from_str(&json)?)
}

/// Pretty layout with every non-ASCII character escaped.
struct AsciiPretty<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPretty<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.begin_array(w)
    }
    fn end_array<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_array(w)
    }
    fn begin_array_value<W: ?Sized + Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_array_value(w, first)
    }
    fn end_array_value<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_array_value(w)
    }
    fn begin_object<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.begin_object(w)
    }
    fn end_object<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_object(w)
    }
    fn begin_object_key<W: ?Sized + Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_object_key(w, first)
    }
    fn begin_object_value<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.begin_object_value(w)
    }
    fn end_object_value<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_object_value(w)
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, w: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            w.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for u in c.encode_utf16(&mut units).iter() {
                write!(w, "\\u{:04x}", u)?;
            }
            start = i + c.len_utf8();
        }
        w.write_all(fragment[start..].as_bytes())
    }
}
