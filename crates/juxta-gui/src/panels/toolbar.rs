use juxta_core::asset::Slot;
use juxta_core::geometry::DisplayMode;

use crate::app::JuxtaApp;

pub fn show(ctx: &egui::Context, app: &mut JuxtaApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            for slot in Slot::BOTH {
                let text = match app.stage.get(slot) {
                    Some(asset) => format!("{}: {}", slot.label(), asset.file_name),
                    None => format!("Load {}", slot.label()),
                };
                if ui.button(text).clicked() {
                    app.pick_file(slot, ctx);
                }
            }

            ui.separator();

            let current = app.viewport.state().display_mode();
            let mut selected = current;
            egui::ComboBox::from_id_salt("display_mode")
                .selected_text(current.to_string())
                .show_ui(ui, |ui| {
                    for mode in DisplayMode::ALL {
                        ui.selectable_value(&mut selected, mode, mode.to_string());
                    }
                });
            if selected != current {
                app.set_mode(selected);
            }

            ui.separator();

            if ui
                .add_enabled(app.stage.state().has_images(), egui::Button::new("Clear"))
                .clicked()
            {
                app.clear();
            }

            let export_label = if app.ui_state.is_exporting() {
                "Exporting..."
            } else {
                "Export PNG"
            };
            if ui
                .add_enabled(app.can_export(), egui::Button::new(export_label))
                .clicked()
            {
                app.start_export();
            }
        });
        ui.add_space(2.0);
    });
}
