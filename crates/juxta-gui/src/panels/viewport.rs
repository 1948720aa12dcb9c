use juxta_core::asset::Slot;
use juxta_core::consts::DIVIDER_LINE_WIDTH;
use juxta_core::geometry::{self, DisplayMode, Size};
use juxta_core::stage::StageState;
use juxta_core::viewport::{Container, ViewportEvent, ViewportKey};

use crate::app::JuxtaApp;
use crate::states::SlotTexture;

const HANDLE_RADIUS: f32 = 14.0;
const LABEL_MARGIN: f32 = 12.0;
const LABEL_FADE_SECS: f32 = 0.2;

pub fn show(ctx: &egui::Context, app: &mut JuxtaApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);

            let ppp = ctx.pixels_per_point();
            app.ui_state.pixels_per_point = ppp;
            app.ui_state.frame_px = (
                (rect.width() * ppp).round() as u32,
                (rect.height() * ppp).round() as u32,
            );

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            handle_pointer(ui, &response, app, rect);
            handle_keys(ctx, app);
            handle_wheel(ui, &response, app);

            match app.viewport.stage_state() {
                StageState::Paired => draw_comparison(ui, app, rect, ppp),
                StageState::Empty => show_placeholder(ui, rect),
                StageState::SingleBefore | StageState::SingleAfter => {
                    draw_side_by_side(ui, app, rect, ppp)
                }
            }

            if app.ui_state.drop_hover {
                draw_drop_hint(ui, app, rect);
            }
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Press on the surface starts a drag. While the capture is held, moves and
/// releases anywhere in the window go to the viewport.
fn handle_pointer(ui: &egui::Ui, response: &egui::Response, app: &mut JuxtaApp, rect: egui::Rect) {
    let container = Container::new(rect.left(), rect.width());
    let (pressed, released, down, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.primary_down(),
            i.pointer.interact_pos(),
        )
    });

    if pressed && response.hovered() {
        if let Some(p) = pos {
            app.viewport.handle(ViewportEvent::Press { x: p.x, container });
        }
    }

    if app.viewport.pointer_capture().is_active() {
        if released || !down {
            app.viewport.handle(ViewportEvent::Release {
                x: pos.map(|p| p.x),
                container,
            });
        } else if let Some(p) = pos {
            app.viewport.handle(ViewportEvent::Move { x: p.x, container });
        }
    }

    if app.viewport.stage_state().is_paired() && (response.hovered() || app.viewport.is_dragging())
    {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
    }
}

fn handle_keys(ctx: &egui::Context, app: &mut JuxtaApp) {
    let mode = app.viewport.state().display_mode();
    if !mode.is_zoomable() {
        return;
    }

    let keys = ctx.input_mut(|i| {
        let mut keys = Vec::new();
        if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp) {
            keys.push(ViewportKey::ArrowUp);
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown) {
            keys.push(ViewportKey::ArrowDown);
        }
        if mode == DisplayMode::Fullscreen && i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
            keys.push(ViewportKey::Escape);
        }
        for event in &i.events {
            if let egui::Event::Text(text) = event {
                keys.extend(text.chars().filter_map(ViewportKey::from_char));
            }
        }
        keys
    });

    for key in keys {
        app.viewport.handle(ViewportEvent::Key(key));
    }
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut JuxtaApp) {
    if !response.hovered() || !app.viewport.state().display_mode().is_zoomable() {
        return;
    }
    // egui reports wheel-down as negative y.
    let dy = ui.input(|i| i.raw_scroll_delta.y);
    if dy != 0.0 {
        app.viewport.handle(ViewportEvent::Wheel { delta_y: -dy });
    }
}

fn to_screen(r: geometry::Rect, origin: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        origin.min + egui::vec2(r.x, r.y),
        egui::vec2(r.width, r.height),
    )
}

/// Texture for a slot whose asset is decoded.
fn ready_texture(app: &JuxtaApp, slot: Slot) -> Option<&SlotTexture> {
    let ready = app.stage.get(slot).is_some_and(|a| a.is_ready());
    app.textures.get(slot).filter(|_| ready)
}

/// Natural size in points, so 1:1 means one image pixel per screen pixel.
fn image_size_points(texture: &SlotTexture, ppp: f32) -> Size {
    Size::new(texture.size[0] as f32 / ppp, texture.size[1] as f32 / ppp)
}

fn uv_full() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

fn draw_comparison(ui: &egui::Ui, app: &JuxtaApp, rect: egui::Rect, ppp: f32) {
    let painter = ui.painter_at(rect);
    let frame = Size::new(rect.width(), rect.height());

    for slot in Slot::BOTH {
        let Some(texture) = ready_texture(app, slot) else {
            draw_loading(&painter, rect, slot, app);
            continue;
        };
        let layout = app
            .viewport
            .layout_for(image_size_points(texture, ppp), frame);
        let dest = to_screen(layout.draw_rect, rect);
        let layer = match slot {
            Slot::Before => painter.clone(),
            Slot::After => painter.with_clip_rect(to_screen(layout.clip_rect, rect).intersect(rect)),
        };
        layer.image(texture.id(), dest, uv_full(), egui::Color32::WHITE);
    }

    let x = rect.left() + rect.width() * app.viewport.state().divider_percent() / 100.0;
    draw_divider(&painter, rect, x, app.viewport.is_dragging());
    draw_labels(ui, &painter, app, rect);
}

fn draw_loading(painter: &egui::Painter, rect: egui::Rect, slot: Slot, app: &JuxtaApp) {
    let name = app
        .stage
        .get(slot)
        .map(|a| a.file_name.as_str())
        .unwrap_or_default();
    let anchor = match slot {
        Slot::Before => rect.left_center() + egui::vec2(rect.width() * 0.25, 0.0),
        Slot::After => rect.right_center() - egui::vec2(rect.width() * 0.25, 0.0),
    };
    painter.text(
        anchor,
        egui::Align2::CENTER_CENTER,
        format!("Loading {name}..."),
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(140),
    );
}

fn draw_divider(painter: &egui::Painter, rect: egui::Rect, x: f32, dragging: bool) {
    let line_width = DIVIDER_LINE_WIDTH as f32;
    let shadow = egui::Rect::from_min_max(
        egui::pos2(x - line_width, rect.top()),
        egui::pos2(x + line_width, rect.bottom()),
    );
    painter.rect_filled(shadow, 0.0, egui::Color32::from_black_alpha(70));
    painter.line_segment(
        [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
        egui::Stroke::new(line_width, egui::Color32::WHITE),
    );

    let center = egui::pos2(x, rect.center().y);
    let radius = if dragging {
        HANDLE_RADIUS + 2.0
    } else {
        HANDLE_RADIUS
    };
    painter.circle(
        center,
        radius,
        egui::Color32::WHITE,
        egui::Stroke::new(1.0, egui::Color32::from_black_alpha(90)),
    );

    let arrow = egui::Color32::from_gray(60);
    let (w, h) = (4.0, 5.0);
    for dir in [-1.0_f32, 1.0] {
        let tip = center + egui::vec2(dir * (w + 4.0), 0.0);
        let base = center + egui::vec2(dir * 4.0, 0.0);
        painter.add(egui::Shape::convex_polygon(
            vec![tip, base + egui::vec2(0.0, -h), base + egui::vec2(0.0, h)],
            arrow,
            egui::Stroke::NONE,
        ));
    }
}

fn draw_labels(ui: &egui::Ui, painter: &egui::Painter, app: &JuxtaApp, rect: egui::Rect) {
    let visible = app.viewport.labels();
    let ctx = ui.ctx();
    let before = ctx.animate_bool_with_time(egui::Id::new("label_before"), visible.before, LABEL_FADE_SECS);
    let after = ctx.animate_bool_with_time(egui::Id::new("label_after"), visible.after, LABEL_FADE_SECS);

    draw_label(
        painter,
        rect.left_top() + egui::vec2(LABEL_MARGIN, LABEL_MARGIN),
        egui::Align2::LEFT_TOP,
        Slot::Before.label(),
        before,
    );
    draw_label(
        painter,
        rect.right_top() + egui::vec2(-LABEL_MARGIN, LABEL_MARGIN),
        egui::Align2::RIGHT_TOP,
        Slot::After.label(),
        after,
    );
}

fn draw_label(painter: &egui::Painter, pos: egui::Pos2, align: egui::Align2, text: &str, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE.gamma_multiply(opacity),
    );
    let text_rect = align.anchor_size(pos, galley.size());
    painter.rect_filled(
        text_rect.expand(6.0),
        4.0,
        egui::Color32::from_black_alpha((160.0 * opacity) as u8),
    );
    painter.galley(text_rect.min, galley, egui::Color32::WHITE);
}

/// One slot filled: show each slot in its own half, unclipped.
fn draw_side_by_side(ui: &egui::Ui, app: &JuxtaApp, rect: egui::Rect, ppp: f32) {
    let half = rect.width() / 2.0;
    for (i, slot) in Slot::BOTH.into_iter().enumerate() {
        let cell = egui::Rect::from_min_size(
            rect.min + egui::vec2(half * i as f32, 0.0),
            egui::vec2(half, rect.height()),
        )
        .shrink(8.0);
        let painter = ui.painter_at(cell);

        match (app.stage.get(slot), ready_texture(app, slot)) {
            (Some(_), Some(texture)) => {
                let layout = geometry::layout(
                    DisplayMode::Fit,
                    0,
                    0.0,
                    100.0,
                    image_size_points(texture, ppp),
                    Size::new(cell.width(), cell.height()),
                );
                painter.image(
                    texture.id(),
                    to_screen(layout.draw_rect, cell),
                    uv_full(),
                    egui::Color32::WHITE,
                );
            }
            (Some(asset), None) => {
                painter.text(
                    cell.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("Loading {}...", asset.file_name),
                    egui::FontId::proportional(16.0),
                    egui::Color32::from_gray(140),
                );
            }
            (None, _) => {
                painter.rect_stroke(
                    cell,
                    6.0,
                    egui::Stroke::new(1.0, egui::Color32::from_gray(70)),
                    egui::StrokeKind::Inside,
                );
                painter.text(
                    cell.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("Load the {slot} image"),
                    egui::FontId::proportional(16.0),
                    egui::Color32::from_gray(100),
                );
            }
        }

        draw_label(
            &painter,
            cell.left_top() + egui::vec2(LABEL_MARGIN, LABEL_MARGIN),
            egui::Align2::LEFT_TOP,
            slot.label(),
            1.0,
        );
    }
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    let painter = ui.painter_at(rect);
    painter.text(
        rect.center() - egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        "Load a before and an after image to compare",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 14.0),
        egui::Align2::CENTER_CENTER,
        "Drop files here or use the toolbar",
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(80),
    );
}

fn draw_drop_hint(ui: &egui::Ui, app: &JuxtaApp, rect: egui::Rect) {
    let slot = if app.stage.before().is_none() {
        Slot::Before
    } else {
        Slot::After
    };
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(140));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("Drop to load the {slot} image"),
        egui::FontId::proportional(20.0),
        egui::Color32::WHITE,
    );
}
