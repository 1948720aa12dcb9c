use image::{Pixel, Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::consts::{DIVIDER_LINE_WIDTH, DIVIDER_SHADOW_SPREAD, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{JuxtaError, Result};
use crate::geometry::{layout_scaled, Rect, Size};
use crate::viewport::ViewportState;

use super::types::ExportFrame;

/// Rasterize the comparison as it appears on screen.
///
/// The canvas is `frame` pixels, transparent where no image lands.
/// `before` is drawn whole; `after` only right of the divider; the divider
/// line goes on top.
pub fn compose(
    before: &RgbaImage,
    after: &RgbaImage,
    state: &ViewportState,
    frame: impl Into<ExportFrame>,
) -> Result<RgbaImage> {
    let target = frame.into();
    let (cw, ch) = target.size();
    if cw == 0 || ch == 0 {
        return Err(JuxtaError::Export(format!(
            "export area is empty ({cw}x{ch})"
        )));
    }

    let frame = Size::from(target.size());
    let place = |img: &RgbaImage| {
        layout_scaled(
            state.display_mode(),
            state.zoom_level(),
            state.scroll_offset(),
            state.divider_percent(),
            Size::from(img.dimensions()),
            frame,
            target.scroll_scale,
        )
    };
    let before_layout = place(before);
    let after_layout = place(after);

    let mut canvas = RgbaImage::new(cw, ch);
    let full = Rect::from_size(frame);
    draw_layer(&mut canvas, before, before_layout.draw_rect, full);
    draw_layer(&mut canvas, after, after_layout.draw_rect, after_layout.clip_rect);
    draw_divider(&mut canvas, after_layout.divider_x);

    debug!(
        width = cw,
        height = ch,
        mode = %state.display_mode(),
        divider = state.divider_percent(),
        "Composite rendered"
    );
    Ok(canvas)
}

/// Draw `src` scaled into `draw`, touching only pixels inside `visible`.
fn draw_layer(canvas: &mut RgbaImage, src: &RgbaImage, draw: Rect, visible: Rect) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    if sw == 0 || sh == 0 || draw.width <= 0.0 || draw.height <= 0.0 {
        return;
    }

    let x0 = visible.x.round().max(0.0) as u32;
    let x1 = (visible.right().round().max(0.0) as u32).min(cw);
    let y0 = visible.y.round().max(0.0) as u32;
    let y1 = (visible.bottom().round().max(0.0) as u32).min(ch);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let scale_x = draw.width / sw as f32;
    let scale_y = draw.height / sh as f32;
    let stride = cw as usize * 4;

    let paint_row = |y: u32, row: &mut [u8]| {
        let cy = y as f32 + 0.5;
        if cy < draw.y || cy >= draw.bottom() {
            return;
        }
        let v = (cy - draw.y) / scale_y - 0.5;
        for x in x0..x1 {
            let cx = x as f32 + 0.5;
            if cx < draw.x || cx >= draw.right() {
                continue;
            }
            let u = (cx - draw.x) / scale_x - 0.5;
            let sample = sample_bilinear(src, u, v);
            let i = x as usize * 4;
            blend_into(Rgba::<u8>::from_slice_mut(&mut row[i..i + 4]), sample);
        }
    };

    let buf: &mut [u8] = &mut **canvas;
    let rows = &mut buf[y0 as usize * stride..y1 as usize * stride];
    let pixel_count = (x1 - x0) as usize * (y1 - y0) as usize;
    if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
        rows.par_chunks_mut(stride)
            .enumerate()
            .for_each(|(i, row)| paint_row(y0 + i as u32, row));
    } else {
        rows.chunks_mut(stride)
            .enumerate()
            .for_each(|(i, row)| paint_row(y0 + i as u32, row));
    }
}

/// Source-over blend with exact results for fully opaque or fully
/// transparent sources.
fn blend_into(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    match src.0[3] {
        0 => {}
        255 => *dst = src,
        _ => dst.blend(&src),
    }
}

fn sample_bilinear(src: &RgbaImage, u: f32, v: f32) -> Rgba<u8> {
    let (w, h) = src.dimensions();
    let u = u.clamp(0.0, (w - 1) as f32);
    let v = v.clamp(0.0, (h - 1) as f32);
    let x0 = u.floor() as u32;
    let y0 = v.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = u - x0 as f32;
    let fy = v - y0 as f32;

    let p00 = src.get_pixel(x0, y0).0;
    let p10 = src.get_pixel(x1, y0).0;
    let p01 = src.get_pixel(x0, y1).0;
    let p11 = src.get_pixel(x1, y1).0;

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
        let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
        out[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

/// Solid white divider centred on `x`, with a dark shadow fading out on
/// both sides.
pub fn draw_divider(canvas: &mut RgbaImage, x: f32) {
    let (cw, ch) = canvas.dimensions();
    if cw == 0 || ch == 0 {
        return;
    }
    let half = DIVIDER_LINE_WIDTH as f32 / 2.0;
    let line_start = (x - half).round() as i64;
    let line_end = line_start + DIVIDER_LINE_WIDTH as i64;
    let spread = DIVIDER_SHADOW_SPREAD as i64;

    let mut columns: Vec<(i64, Rgba<u8>)> = Vec::new();
    for d in 1..=spread {
        let shadow = Rgba([0, 0, 0, (110 / d) as u8]);
        columns.push((line_start - d, shadow));
        columns.push((line_end - 1 + d, shadow));
    }
    for col in line_start..line_end {
        columns.push((col, Rgba([255, 255, 255, 255])));
    }
    let columns: Vec<(u32, Rgba<u8>)> = columns
        .into_iter()
        .filter_map(|(col, color)| u32::try_from(col).ok().map(|c| (c, color)))
        .filter(|&(col, _)| col < cw)
        .collect();

    for y in 0..ch {
        for &(col, color) in &columns {
            blend_into(canvas.get_pixel_mut(col, y), color);
        }
    }
}
