use juxta_core::notify::Severity;

use crate::app::JuxtaApp;

const TOAST_WIDTH: f32 = 280.0;

fn accent(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Info => egui::Color32::from_rgb(66, 133, 244),
        Severity::Success => egui::Color32::from_rgb(52, 168, 83),
        Severity::Warning => egui::Color32::from_rgb(251, 188, 5),
        Severity::Error => egui::Color32::from_rgb(234, 67, 53),
    }
}

/// Stack of active notifications in the top-right corner.
pub fn show(ctx: &egui::Context, app: &mut JuxtaApp) {
    if app.notifier.active().is_empty() {
        return;
    }

    let mut dismissed = Vec::new();
    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 40.0))
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            for note in app.notifier.active() {
                let color = accent(note.severity);
                egui::Frame::new()
                    .fill(ui.visuals().extreme_bg_color)
                    .stroke(egui::Stroke::new(1.0, color))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(TOAST_WIDTH - 16.0);
                        ui.horizontal(|ui| {
                            ui.colored_label(color, "●");
                            ui.add(egui::Label::new(&note.message).wrap());
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button("×").on_hover_text("Dismiss").clicked() {
                                    dismissed.push(note.id);
                                }
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        });

    for id in dismissed {
        app.notifier.dismiss(id);
    }
}
