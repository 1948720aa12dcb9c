use juxta_core::asset::Slot;
use juxta_core::geometry::DisplayMode;

use crate::app::JuxtaApp;

const OPEN_BEFORE: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const OPEN_AFTER: egui::KeyboardShortcut = egui::KeyboardShortcut::new(
    egui::Modifiers {
        shift: true,
        command: true,
        ..egui::Modifiers::NONE
    },
    egui::Key::O,
);
const EXPORT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E);
const QUIT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

pub fn show(ctx: &egui::Context, app: &mut JuxtaApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(egui::Button::new("Open Before...").shortcut_text(ctx.format_shortcut(&OPEN_BEFORE)))
                    .clicked()
                {
                    ui.close();
                    app.pick_file(Slot::Before, ctx);
                }
                if ui
                    .add(egui::Button::new("Open After...").shortcut_text(ctx.format_shortcut(&OPEN_AFTER)))
                    .clicked()
                {
                    ui.close();
                    app.pick_file(Slot::After, ctx);
                }

                ui.separator();

                if ui
                    .add_enabled(
                        app.can_export(),
                        egui::Button::new("Export PNG...").shortcut_text(ctx.format_shortcut(&EXPORT)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.start_export();
                }
                if ui.button("Clear").clicked() {
                    ui.close();
                    app.clear();
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&QUIT)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let current = app.viewport.state().display_mode();
                for mode in DisplayMode::ALL {
                    if ui.radio(current == mode, mode.to_string()).clicked() {
                        ui.close();
                        app.set_mode(mode);
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus). Shift+Cmd+O first so
        // Cmd+O does not swallow it.
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_AFTER)) {
            app.pick_file(Slot::After, ctx);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_BEFORE)) {
            app.pick_file(Slot::Before, ctx);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&EXPORT)) {
            app.start_export();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
