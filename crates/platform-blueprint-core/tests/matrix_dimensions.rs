use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
use platform_blueprint_core::prelude::*;

#[test]
fn matrix_has_height_rows_and_width_columns() {
    for (w, h) in [(1, 1), (7, 3), (3, 7), (16, 9), (33, 1)] {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(w, h, Luma([200])));
        let m = to_boolean_matrix(&img, 128);
        assert_eq!(m.width(), w);
        assert_eq!(m.height(), h);

        let rows = m.to_rows();
        assert_eq!(rows.len(), h as usize, "row count for {w}x{h}");
        assert!(rows.iter().all(|r| r.len() == w as usize), "row length for {w}x{h}");
    }
}

#[test]
fn matrix_indexes_by_column_then_row() {
    // single opaque pixel at x=4, y=1
    let mut img = RgbaImage::from_pixel(5, 3, Rgba([0, 0, 0, 0]));
    img.put_pixel(4, 1, Rgba([10, 20, 30, 255]));
    let m = to_boolean_matrix(&DynamicImage::ImageRgba8(img), 128);

    assert!(m.get(4, 1));
    assert_eq!(m.count_true(), 1);
    assert_eq!(m.true_cells().collect::<Vec<_>>(), vec![(4, 1)]);
    assert_eq!(m.to_rows()[1], vec![false, false, false, false, true]);
}

#[test]
fn from_rows_rejects_ragged_input() {
    let ragged = vec![vec![true, false], vec![true]];
    assert!(BooleanMatrix::from_rows(&ragged).is_none());

    let ok = vec![vec![true, false], vec![false, true]];
    let m = BooleanMatrix::from_rows(&ok).expect("rectangular");
    assert_eq!(m.to_rows(), ok);
}

#[test]
fn stats_report_coverage() {
    let m = BooleanMatrix::from_rows(&[vec![true, false], vec![true, true]]).expect("matrix");
    let s = BlueprintStats::from_matrix(&m);
    assert_eq!(s.width, 2);
    assert_eq!(s.height, 2);
    assert_eq!(s.tiles, 3);
    assert!((s.coverage - 0.75).abs() < 1e-9);
}

#[test]
fn zero_width_matrix_still_has_height_rows() {
    let m = BooleanMatrix::new(0, 3);
    assert_eq!(m.rows().count(), 3);
    assert!(m.rows().all(|r| r.is_empty()));
    assert_eq!(m.true_cells().count(), 0);

    let m = BooleanMatrix::from_rows(&[vec![], vec![]]).expect("rectangular");
    assert_eq!(m.height(), 2);
    assert_eq!(m.to_rows(), vec![Vec::<bool>::new(), Vec::new()]);
}
