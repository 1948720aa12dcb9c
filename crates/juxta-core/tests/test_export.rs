mod common;

use std::sync::Mutex;

use image::Rgba;

use juxta_core::error::JuxtaError;
use juxta_core::export::{
    compose, draw_divider, encode_png, export_file_name, ExportFrame, ExportStage, Exporter,
    NoOpReporter, ProgressReporter,
};
use juxta_core::geometry::DisplayMode;
use juxta_core::io::loader::decode;
use juxta_core::viewport::ViewportState;

use common::{pending_asset, ready_asset, solid, BLUE, RED};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Default)]
struct RecordingReporter {
    stages: Mutex<Vec<ExportStage>>,
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: ExportStage) {
        self.stages.lock().unwrap().push(stage);
    }
}

#[test]
fn test_compose_splits_at_divider() {
    let before = solid(100, 50, RED);
    let after = solid(100, 50, BLUE);
    let canvas = compose(&before, &after, &ViewportState::new(), (100, 50)).unwrap();

    assert_eq!(canvas.dimensions(), (100, 50));
    assert_eq!(canvas.get_pixel(10, 25), &RED);
    assert_eq!(canvas.get_pixel(30, 10), &RED);
    assert_eq!(canvas.get_pixel(70, 40), &BLUE);
    assert_eq!(canvas.get_pixel(95, 25), &BLUE);
    assert_eq!(canvas.get_pixel(50, 25), &WHITE);
}

#[test]
fn test_compose_divider_at_edges() {
    let before = solid(40, 20, RED);
    let after = solid(40, 20, BLUE);

    let all_after = ViewportState::new().with_divider(0.0);
    let canvas = compose(&before, &after, &all_after, (40, 20)).unwrap();
    assert_eq!(canvas.get_pixel(20, 10), &BLUE);

    let all_before = ViewportState::new().with_divider(100.0);
    let canvas = compose(&before, &after, &all_before, (40, 20)).unwrap();
    assert_eq!(canvas.get_pixel(20, 10), &RED);
}

#[test]
fn test_compose_fit_leaves_margins_transparent() {
    let before = solid(50, 25, RED);
    let after = solid(50, 25, BLUE);
    let canvas = compose(&before, &after, &ViewportState::new(), (100, 50)).unwrap();
    assert_eq!(canvas.get_pixel(2, 2)[3], 0);
    assert_eq!(canvas.get_pixel(30, 25), &RED);
    assert_eq!(canvas.get_pixel(70, 25), &BLUE);
}

#[test]
fn test_compose_large_canvas_runs_parallel_path() {
    let before = solid(64, 64, RED);
    let after = solid(64, 64, BLUE);
    let state = ViewportState::new().with_mode(DisplayMode::Fullscreen);
    let canvas = compose(&before, &after, &state, (400, 300)).unwrap();
    assert_eq!(canvas.get_pixel(100, 150), &RED);
    assert_eq!(canvas.get_pixel(300, 150), &BLUE);
    // 64x64 scaled to 400 wide overflows the 300 px frame vertically.
    assert_eq!(canvas.get_pixel(100, 0), &RED);
}

#[test]
fn test_compose_scales_scroll_to_canvas_pixels() {
    let img = solid(40, 4, RED);
    let state = ViewportState::new()
        .with_mode(DisplayMode::OneToOne)
        .with_divider(100.0)
        .with_scroll(800.0);

    // 800 points at 2 px/pt: top edge at (4000 - 4) / 2 + 1600 = 3598.
    let canvas = compose(&img, &img, &state, ExportFrame::new((40, 4000), 2.0)).unwrap();
    assert_eq!(canvas.get_pixel(5, 3599), &RED);
    assert_eq!(canvas.get_pixel(5, 2999)[3], 0);
    assert_eq!(canvas.get_pixel(5, 2799)[3], 0);

    // A plain size means the offset is already in pixels.
    let canvas = compose(&img, &img, &state, (40, 4000)).unwrap();
    assert_eq!(canvas.get_pixel(5, 2799), &RED);
    assert_eq!(canvas.get_pixel(5, 3599)[3], 0);
}

#[test]
fn test_export_frame_rejects_bad_scale() {
    assert_eq!(ExportFrame::new((10, 10), 0.0).scroll_scale, 1.0);
    assert_eq!(ExportFrame::new((10, 10), f32::NAN).scroll_scale, 1.0);
    assert_eq!(ExportFrame::from((3, 4)).size(), (3, 4));
}

#[test]
fn test_compose_rejects_empty_area() {
    let img = solid(4, 4, RED);
    let err = compose(&img, &img, &ViewportState::new(), (0, 10)).unwrap_err();
    assert!(matches!(err, JuxtaError::Export(_)));
}

#[test]
fn test_divider_shadow_is_translucent() {
    let mut canvas = solid(20, 4, RED);
    draw_divider(&mut canvas, 10.0);
    assert_eq!(canvas.get_pixel(10, 0), &WHITE);
    let shadow = canvas.get_pixel(7, 0);
    assert!(shadow[0] < 255 && shadow[0] > 0, "shadow={shadow:?}");
    assert_eq!(canvas.get_pixel(2, 0), &RED);
}

#[test]
fn test_divider_at_canvas_edge_does_not_panic() {
    let mut canvas = solid(10, 2, RED);
    draw_divider(&mut canvas, 0.0);
    draw_divider(&mut canvas, 10.0);
    assert_eq!(canvas.get_pixel(0, 0), &WHITE);
    assert_eq!(canvas.get_pixel(9, 1), &WHITE);
}

#[test]
fn test_export_file_name() {
    assert_eq!(export_file_name(1_700_000_000_123), "comparison-1700000000123.png");
}

#[test]
fn test_encode_png_round_trips_pixels() {
    let img = solid(3, 2, BLUE);
    let bytes = encode_png(&img).unwrap();
    let back = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(back, img);
}

#[test]
fn test_export_while_pending_then_ready() {
    let exporter = Exporter::new();
    let before = ready_asset("a.png", 20, 10, RED);
    let after = pending_asset("b.png", 20, 10, BLUE);
    let state = ViewportState::new();

    let err = exporter
        .export(Some(&before), Some(&after), &state, (20, 10), &NoOpReporter)
        .unwrap_err();
    assert!(matches!(err, JuxtaError::ExportNotReady));
    assert!(!exporter.is_busy());

    let after = decode(&after).unwrap();
    let reporter = RecordingReporter::default();
    let out = exporter
        .export(Some(&before), Some(&after), &state, (20, 10), &reporter)
        .unwrap();
    assert!(out.file_name.starts_with("comparison-"));
    assert!(out.file_name.ends_with(".png"));
    assert_eq!((out.width, out.height), (20, 10));
    assert_eq!(
        *reporter.stages.lock().unwrap(),
        vec![
            ExportStage::Preparing,
            ExportStage::Compositing,
            ExportStage::Encoding
        ]
    );

    let decoded = image::load_from_memory(&out.png).unwrap();
    assert_eq!(decoded.width(), 20);
}

#[test]
fn test_export_missing_slot_not_ready() {
    let exporter = Exporter::new();
    let before = ready_asset("a.png", 4, 4, RED);
    let err = exporter
        .export(Some(&before), None, &ViewportState::new(), (4, 4), &NoOpReporter)
        .unwrap_err();
    assert!(matches!(err, JuxtaError::ExportNotReady));
}

#[test]
fn test_second_export_rejected_while_in_flight() {
    let exporter = Exporter::new();
    let shared = exporter.clone();
    let guard = exporter.try_begin().unwrap();
    assert!(shared.is_busy());

    let a = ready_asset("a.png", 4, 4, RED);
    let b = ready_asset("b.png", 4, 4, BLUE);
    let err = shared
        .export(Some(&a), Some(&b), &ViewportState::new(), (4, 4), &NoOpReporter)
        .unwrap_err();
    assert!(matches!(err, JuxtaError::ExportInProgress));

    drop(guard);
    assert!(!shared.is_busy());
    assert!(shared
        .export(Some(&a), Some(&b), &ViewportState::new(), (4, 4), &NoOpReporter)
        .is_ok());
}

#[test]
fn test_save_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Exporter::new();
    let a = ready_asset("a.png", 6, 6, RED);
    let b = ready_asset("b.png", 6, 6, BLUE);
    let out = exporter
        .export(Some(&a), Some(&b), &ViewportState::new(), (6, 6), &NoOpReporter)
        .unwrap();
    let path = out.save_in(dir.path()).unwrap();
    assert!(path.exists());
    assert_eq!(std::fs::read(&path).unwrap(), out.png);
}

#[test]
fn test_export_error_user_message() {
    let err = JuxtaError::Export("disk full".into());
    assert_eq!(
        err.user_message(),
        "Failed to generate download. Please try again."
    );
}

#[test]
fn test_guard_runs_export_on_another_thread() {
    let exporter = Exporter::new();
    let guard = exporter.try_begin().unwrap();
    let a = ready_asset("a.png", 4, 4, RED);
    let b = ready_asset("b.png", 4, 4, BLUE);

    let handle = std::thread::spawn(move || {
        guard.export(Some(&a), Some(&b), &ViewportState::new(), (4, 4), &NoOpReporter)
    });
    assert!(handle.join().unwrap().is_ok());
    assert!(!exporter.is_busy());
}
