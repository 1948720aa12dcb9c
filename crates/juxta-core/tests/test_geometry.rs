use approx::assert_relative_eq;

use juxta_core::geometry::{
    clamp_scroll, contain_scale, label_visibility, layout, layout_scaled, pointer_to_percent,
    zoom_level_to_scale, DisplayMode, Size,
};

#[test]
fn test_pointer_to_percent_clamps() {
    assert_eq!(pointer_to_percent(50.0, 100.0, 400.0), Some(0.0));
    assert_eq!(pointer_to_percent(600.0, 100.0, 400.0), Some(100.0));
    assert_relative_eq!(pointer_to_percent(200.0, 100.0, 400.0).unwrap(), 25.0);
    assert_relative_eq!(pointer_to_percent(420.0, 100.0, 400.0).unwrap(), 80.0);
}

#[test]
fn test_pointer_to_percent_zero_width() {
    assert_eq!(pointer_to_percent(10.0, 0.0, 0.0), None);
    assert_eq!(pointer_to_percent(10.0, 0.0, -5.0), None);
    assert_eq!(pointer_to_percent(f32::NAN, 0.0, 100.0), None);
}

#[test]
fn test_zoom_tables() {
    let one = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
    let full = [0.4, 0.6, 0.8, 1.0, 1.3, 1.6, 2.0];
    for (i, level) in (-3..=3).enumerate() {
        assert_relative_eq!(zoom_level_to_scale(level, DisplayMode::OneToOne), one[i]);
        assert_relative_eq!(zoom_level_to_scale(level, DisplayMode::Fullscreen), full[i]);
        assert_relative_eq!(zoom_level_to_scale(level, DisplayMode::Fit), 1.0);
    }
}

#[test]
fn test_zoom_out_of_range_clamps() {
    assert_relative_eq!(zoom_level_to_scale(10, DisplayMode::OneToOne), 2.0);
    assert_relative_eq!(zoom_level_to_scale(-10, DisplayMode::Fullscreen), 0.4);
}

#[test]
fn test_clamp_scroll() {
    assert_relative_eq!(clamp_scroll(1500.0), 1000.0);
    assert_relative_eq!(clamp_scroll(-1500.0), -1000.0);
    assert_relative_eq!(clamp_scroll(f32::NAN), 0.0);
}

#[test]
fn test_contain_scale_never_enlarges() {
    let frame = Size::new(800.0, 600.0);
    assert_relative_eq!(contain_scale(Size::new(400.0, 300.0), frame), 1.0);
    assert_relative_eq!(contain_scale(Size::new(1600.0, 600.0), frame), 0.5);
    assert_relative_eq!(contain_scale(Size::new(800.0, 1200.0), frame), 0.5);
}

#[test]
fn test_fit_layout_centres_image() {
    let l = layout(
        DisplayMode::Fit,
        0,
        0.0,
        50.0,
        Size::new(1600.0, 600.0),
        Size::new(800.0, 600.0),
    );
    assert_relative_eq!(l.scale, 0.5);
    assert_relative_eq!(l.draw_rect.x, 0.0);
    assert_relative_eq!(l.draw_rect.y, 150.0);
    assert_relative_eq!(l.draw_rect.width, 800.0);
    assert_relative_eq!(l.draw_rect.height, 300.0);
    assert_relative_eq!(l.divider_x, 400.0);
    assert_relative_eq!(l.clip_rect.x, 400.0);
    assert_relative_eq!(l.clip_rect.width, 400.0);
    assert_relative_eq!(l.clip_rect.height, 600.0);
}

#[test]
fn test_fit_layout_ignores_zoom_and_scroll() {
    let image = Size::new(200.0, 100.0);
    let frame = Size::new(400.0, 400.0);
    let plain = layout(DisplayMode::Fit, 0, 0.0, 50.0, image, frame);
    let zoomed = layout(DisplayMode::Fit, 3, 500.0, 50.0, image, frame);
    assert_eq!(plain, zoomed);
}

#[test]
fn test_one_to_one_layout_scrolls() {
    let l = layout(
        DisplayMode::OneToOne,
        3,
        100.0,
        25.0,
        Size::new(100.0, 100.0),
        Size::new(400.0, 400.0),
    );
    assert_relative_eq!(l.scale, 2.0);
    assert_relative_eq!(l.draw_rect.width, 200.0);
    assert_relative_eq!(l.draw_rect.x, 100.0);
    assert_relative_eq!(l.draw_rect.y, 200.0);
    assert_relative_eq!(l.divider_x, 100.0);
}

#[test]
fn test_scaled_layout_clamps_before_scaling() {
    let image = Size::new(10.0, 10.0);
    let frame = Size::new(100.0, 100.0);
    let l = layout_scaled(DisplayMode::OneToOne, 0, 1500.0, 50.0, image, frame, 2.0);
    assert_relative_eq!(l.draw_rect.y, 45.0 + 2000.0);

    let unscaled = layout(DisplayMode::OneToOne, 0, 300.0, 50.0, image, frame);
    let scaled = layout_scaled(DisplayMode::OneToOne, 0, 300.0, 50.0, image, frame, 1.0);
    assert_eq!(unscaled, scaled);
}

#[test]
fn test_fullscreen_layout_fills_width() {
    let l = layout(
        DisplayMode::Fullscreen,
        0,
        0.0,
        50.0,
        Size::new(200.0, 100.0),
        Size::new(800.0, 600.0),
    );
    assert_relative_eq!(l.scale, 4.0);
    assert_relative_eq!(l.draw_rect.width, 800.0);
    assert_relative_eq!(l.draw_rect.height, 400.0);
    assert_relative_eq!(l.draw_rect.y, 100.0);

    let zoomed_out = layout(
        DisplayMode::Fullscreen,
        -3,
        0.0,
        50.0,
        Size::new(200.0, 100.0),
        Size::new(800.0, 600.0),
    );
    assert_relative_eq!(zoomed_out.scale, 1.6);
}

#[test]
fn test_label_visibility_thresholds() {
    let v = label_visibility(5.0, true);
    assert!(!v.before);
    assert!(v.after);

    let v = label_visibility(95.0, true);
    assert!(v.before);
    assert!(!v.after);

    let v = label_visibility(50.0, true);
    assert!(v.before && v.after);

    let v = label_visibility(0.0, false);
    assert!(v.before && v.after);
}

#[test]
fn test_display_mode_names() {
    assert_eq!(DisplayMode::Fit.to_string(), "Scale to Fit");
    assert_eq!(DisplayMode::OneToOne.to_string(), "1:1 Ratio");
    assert_eq!(DisplayMode::Fullscreen.short_name(), "fullscreen");
    assert!(!DisplayMode::Fit.is_zoomable());
    assert!(DisplayMode::OneToOne.is_zoomable());
}
