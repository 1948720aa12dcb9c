use console::Style;
use juxta_core::asset::ImageAsset;
use juxta_core::viewport::ViewportState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    mode: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

fn describe(asset: &ImageAsset) -> String {
    match asset.natural_size() {
        Some((w, h)) => format!("{} ({}x{}, {} KB)", asset.file_name, w, h, asset.size_kib()),
        None => format!("{} ({} KB)", asset.file_name, asset.size_kib()),
    }
}

pub fn print_compose_summary(
    before: &ImageAsset,
    after: &ImageAsset,
    state: &ViewportState,
    size: (u32, u32),
) {
    let s = Styles::new();
    let mode = state.display_mode();

    println!();
    println!("  {}", s.title.apply_to("Juxta Compose"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();
    println!("  {:<10}{}", s.label.apply_to("Before"), s.value.apply_to(describe(before)));
    println!("  {:<10}{}", s.label.apply_to("After"), s.value.apply_to(describe(after)));
    println!("  {:<10}{}", s.label.apply_to("Mode"), s.mode.apply_to(mode));
    println!(
        "  {:<10}{}",
        s.label.apply_to("Divider"),
        s.value.apply_to(format!("{:.1}%", state.divider_percent()))
    );
    if mode.is_zoomable() {
        println!(
            "  {:<10}{}",
            s.label.apply_to("Zoom"),
            s.value.apply_to(format!(
                "{:+} (scroll {:.0} px)",
                state.zoom_level(),
                state.scroll_offset()
            ))
        );
    } else {
        println!("  {:<10}{}", s.label.apply_to("Zoom"), s.disabled.apply_to("n/a"));
    }
    println!(
        "  {:<10}{}",
        s.label.apply_to("Area"),
        s.value.apply_to(format!("{}x{}", size.0, size.1))
    );
    println!();
}
