//! End-to-end analysis of images written to a temporary directory.

use assert_approx_eq::assert_approx_eq;
use image::{GrayImage, Luma, Rgb, RgbImage};
use image_entropy_lib::{analyze, format_outcome, parse_report_line, Outcome, Report};
use tempfile::TempDir;

fn save_gray(dir: &TempDir, name: &str, image: &GrayImage) -> std::path::PathBuf {
    let path = dir.path().join(name);
    image.save(&path).unwrap();
    path
}

#[test]
fn flat_color_is_unsafe_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.png");
    RgbImage::from_pixel(40, 30, Rgb([12, 200, 90])).save(&path).unwrap();

    let outcome = analyze(&path);
    assert_eq!(outcome, Outcome::Computed(0.0));
    assert_eq!(
        format_outcome(&outcome, &path, false).as_deref(),
        Some("UNSAFE|0.00")
    );
}

#[test]
fn full_gradient_is_safe_eight() {
    let dir = tempfile::tempdir().unwrap();
    let image = GrayImage::from_fn(64, 64, |x, y| Luma([((y * 64 + x) % 256) as u8]));
    let path = save_gray(&dir, "gradient.png", &image);

    let outcome = analyze(&path);
    assert_approx_eq!(outcome.score(), 8.0);
    assert_eq!(
        format_outcome(&outcome, &path, false).as_deref(),
        Some("SAFE|8.00")
    );
}

#[test]
fn upsampled_copy_scores_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let small = GrayImage::from_fn(8, 8, |x, y| Luma([((x * 37 + y * 11) % 13 * 19) as u8]));
    let large = GrayImage::from_fn(24, 24, |x, y| *small.get_pixel(x / 3, y / 3));

    let small_path = save_gray(&dir, "small.png", &small);
    let large_path = save_gray(&dir, "large.png", &large);
    assert_approx_eq!(analyze(&small_path).score(), analyze(&large_path).score());
}

#[test]
fn missing_file_has_negative_sentinel_and_no_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.png");

    let outcome = analyze(&path);
    assert_eq!(outcome.score(), -1.0);
    assert_eq!(format_outcome(&outcome, &path, false), None);
}

#[test]
fn corrupt_file_yields_single_error_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.png");
    // PNG signature followed by junk
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nthis is not a chunk stream").unwrap();

    let outcome = analyze(&path);
    let line = format_outcome(&outcome, &path, false).unwrap();
    assert!(line.starts_with("ERROR|Image analysis failed: "), "{}", line);
    assert_eq!(line.lines().count(), 1);

    match parse_report_line(&line).unwrap() {
        Report::Error(message) => assert!(!message.is_empty()),
        other => panic!("expected an error report, got {:?}", other),
    }
}

#[test]
fn verdict_round_trips_through_caller_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let image = GrayImage::from_fn(32, 32, |x, _| Luma([(x * 8) as u8]));
    let path = save_gray(&dir, "stripes.png", &image);

    let outcome = analyze(&path);
    let line = format_outcome(&outcome, &path, false).unwrap();
    let report = parse_report_line(&line).unwrap();

    // 32 equally populated levels: 5 bits
    assert_eq!(report, Report::Safe(5.0));
    assert!(report.is_safe());
}
