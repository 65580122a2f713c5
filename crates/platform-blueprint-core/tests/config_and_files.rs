use image::{GrayImage, Luma, Rgba, RgbaImage};
use platform_blueprint_core::error::BlueprintError;
use platform_blueprint_core::prelude::*;
use std::path::Path;

#[test]
fn default_config_is_valid() {
    let cfg = ConvertConfig::default();
    assert_eq!(cfg.threshold, 128);
    assert_eq!(cfg.width, None);
    assert_eq!(cfg.height, None);
    assert!(!cfg.invert);
    assert_eq!(cfg.filter, ResizeFilter::Triangle);
    cfg.validate().expect("valid");
}

#[test]
fn out_of_range_threshold_is_rejected() {
    for t in [300, -1, 256] {
        let cfg = ConvertConfig::builder().threshold(t).build();
        match cfg.validate() {
            Err(BlueprintError::InvalidThreshold(v)) => assert_eq!(v, t),
            other => panic!("expected InvalidThreshold for {t}, got {other:?}"),
        }
    }
    for t in [0, 255] {
        ConvertConfig::builder().threshold(t).build().validate().expect("in range");
    }
}

#[test]
fn threshold_is_checked_before_the_file() {
    // the path does not exist, so reaching the filesystem would report FileNotFound
    let missing = Path::new("definitely/not/here.png");
    let cfg = ConvertConfig::builder().threshold(300).build();
    assert!(matches!(
        convert_file(missing, &cfg),
        Err(BlueprintError::InvalidThreshold(300))
    ));
    let cfg = ConvertConfig::builder().threshold(-1).build();
    assert!(matches!(
        convert_file(missing, &cfg),
        Err(BlueprintError::InvalidThreshold(-1))
    ));
}

#[test]
fn zero_dimension_is_rejected() {
    let cfg = ConvertConfig::builder().width(0).build();
    assert!(matches!(
        cfg.validate(),
        Err(BlueprintError::InvalidDimensions { width: 0, height: 0 })
    ));
    let cfg = ConvertConfig::builder().with_size(4, 0).build();
    assert!(matches!(
        cfg.validate(),
        Err(BlueprintError::InvalidDimensions { width: 4, height: 0 })
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.png");
    match convert_file(&path, &ConvertConfig::default()) {
        Err(BlueprintError::FileNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
    // a directory is not a regular file
    assert!(matches!(
        load_image(dir.path()),
        Err(BlueprintError::FileNotFound(_))
    ));
}

#[test]
fn undecodable_file_is_an_image_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"this is not an image").expect("write");
    assert!(matches!(
        convert_file(&path, &ConvertConfig::default()),
        Err(BlueprintError::Image(_))
    ));
}

#[test]
fn png_file_converts_with_stem_label() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("my logo.v2.png");
    let mut img = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 0, 0]));
    img.put_pixel(3, 1, Rgba([255, 0, 0, 255]));
    img.save(&path).expect("save png");

    let out = convert_file(&path, &ConvertConfig::default()).expect("convert");
    assert_eq!(out.document.blueprint.label, "my logo.v2");
    assert_eq!(out.document.blueprint.tiles.len(), 1);
    assert_eq!(
        out.document.blueprint.tiles[0].position,
        Position { x: 3, y: 1 }
    );
    assert_eq!(decode_blueprint(&out.blueprint_string).expect("decode"), out.document);
}

#[test]
fn grayscale_png_uses_threshold() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gray.png");
    let mut img = GrayImage::from_pixel(3, 1, Luma([127]));
    img.put_pixel(2, 0, Luma([128]));
    img.save(&path).expect("save png");

    let out = convert_file(&path, &ConvertConfig::default()).expect("convert");
    assert_eq!(out.matrix.to_rows(), vec![vec![false, false, true]]);
}

#[test]
fn label_strips_only_the_last_extension() {
    assert_eq!(label_from_path(Path::new("art/cat.png")), "cat");
    assert_eq!(label_from_path(Path::new("a.b.jpeg")), "a.b");
    assert_eq!(label_from_path(Path::new("noext")), "noext");
}
