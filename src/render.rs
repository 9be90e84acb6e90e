// render.rs - Fixed-timestep clock, trail surface, overlay drawing

use std::time::Duration;

use egui::{pos2, Color32, ColorImage, Painter, Rect, Stroke, TextureHandle, TextureOptions, Vec2};

use crate::grid::{Cell, Grid};
use crate::tools::{Tool, ToolState};
use crate::viewport::Viewport;

/// Longest frame delta fed into the clock; anything beyond this (a window
/// drag, a debugger pause) is dropped rather than replayed.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Upper bound on catch-up steps a single frame may run.
const MAX_CATCH_UP_TICKS: u32 = 8;

/// Fixed-timestep accumulator decoupling the simulation tick rate from the
/// display frame rate. Each frame feeds its wall-clock delta in; every full
/// interval contained in the accumulator buys one simulation step, and the
/// remainder is carried forward so the cadence does not drift.
pub struct SimClock {
    interval: Duration,
    accum: Duration,
}

impl SimClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accum: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
    }

    pub fn advance(&mut self, dt: Duration) {
        let dt = dt.min(MAX_FRAME_DELTA);
        self.accum = (self.accum + dt).min(self.interval * MAX_CATCH_UP_TICKS);
    }

    /// Consume one interval if enough time has accumulated.
    pub fn try_tick(&mut self) -> bool {
        if self.accum >= self.interval {
            self.accum -= self.interval;
            true
        } else {
            false
        }
    }

    /// Drop accumulated time debt (used when resuming from pause).
    pub fn reset(&mut self) {
        self.accum = Duration::ZERO;
    }
}

/// Stored hue (1..=360) to its display color: HSL with full saturation at
/// half lightness, so chroma is 1 and the lightness term vanishes.
pub fn hue_color(hue: Cell) -> Color32 {
    let h = f32::from(hue.saturating_sub(1)) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    Color32::from_rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn blend_toward(from: Color32, to: Color32, alpha: f32) -> Color32 {
    let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * alpha).round() as u8;
    Color32::from_rgb(
        lerp(from.r(), to.r()),
        lerp(from.g(), to.g()),
        lerp(from.b(), to.b()),
    )
}

/// Persistent world-sized trail buffer at one pixel per cell, uploaded as a
/// nearest-filtered texture and stretched over the world rect at draw time.
/// It is never fully cleared while the simulation runs: each tick blends it
/// toward the background and composites the live cells back on top, so old
/// generations dim into colored trails while new life stays vivid.
pub struct TrailSurface {
    image: ColorImage,
    texture: Option<TextureHandle>,
    background: Color32,
    dirty: bool,
}

impl TrailSurface {
    pub fn new(cols: usize, rows: usize, background: Color32) -> Self {
        Self {
            image: ColorImage::new([cols, rows], background),
            texture: None,
            background,
            dirty: true,
        }
    }

    /// Composite a translucent background rect over everything.
    /// `trail_fade` is the fraction of the previous content that survives.
    pub fn fade(&mut self, trail_fade: f32) {
        let alpha = (1.0 - trail_fade).clamp(0.0, 1.0);
        for px in &mut self.image.pixels {
            *px = blend_toward(*px, self.background, alpha);
        }
        self.dirty = true;
    }

    /// Draw every live cell at full intensity in its stored hue.
    pub fn composite_live(&mut self, grid: &Grid) {
        let width = self.image.size[0];
        for (col, row, hue) in grid.live_cells() {
            self.image.pixels[row * width + col] = hue_color(hue);
        }
        self.dirty = true;
    }

    /// One-shot rebuild: background plus the current live cells, dropping
    /// all trails. Used by clear/randomize and by edits made while paused.
    pub fn rebuild(&mut self, grid: &Grid) {
        for px in &mut self.image.pixels {
            *px = self.background;
        }
        self.composite_live(grid);
    }

    pub fn pixel(&self, col: usize, row: usize) -> Color32 {
        self.image.pixels[row * self.image.size[0] + col]
    }

    /// Upload the image if it changed and return the texture to draw.
    pub fn texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        if let Some(texture) = &mut self.texture {
            if self.dirty {
                texture.set(self.image.clone(), TextureOptions::NEAREST);
            }
            self.dirty = false;
            return texture.id();
        }
        let texture = ctx.load_texture("trail", self.image.clone(), TextureOptions::NEAREST);
        let id = texture.id();
        self.texture = Some(texture);
        self.dirty = false;
        id
    }
}

/// Screen rect the world occupies under the current view transform.
pub fn world_rect(canvas: Rect, view: &Viewport, world_size: Vec2) -> Rect {
    let min = canvas.min + view.world_to_screen(pos2(0.0, 0.0)).to_vec2();
    let max = canvas.min + view.world_to_screen(world_size.to_pos2()).to_vec2();
    Rect::from_min_max(min, max)
}

/// Grid lines and the world border. Line thickness is chosen in screen
/// space so zooming does not fatten the lines.
#[allow(clippy::too_many_arguments)]
pub fn draw_static_overlay(
    painter: &Painter,
    canvas: Rect,
    view: &Viewport,
    cols: usize,
    rows: usize,
    cell_px: f32,
    show_grid_lines: bool,
    grid_line_color: Color32,
    border_color: Color32,
) {
    let to_screen = |wx: f32, wy: f32| canvas.min + view.world_to_screen(pos2(wx, wy)).to_vec2();
    let world_w = cols as f32 * cell_px;
    let world_h = rows as f32 * cell_px;

    if show_grid_lines {
        let thickness = (view.zoom() * 0.75).clamp(0.1, 1.0);
        let stroke = Stroke::new(thickness, grid_line_color);
        for i in 0..=cols {
            let x = i as f32 * cell_px;
            painter.line_segment([to_screen(x, 0.0), to_screen(x, world_h)], stroke);
        }
        for j in 0..=rows {
            let y = j as f32 * cell_px;
            painter.line_segment([to_screen(0.0, y), to_screen(world_w, y)], stroke);
        }
    }

    painter.rect_stroke(
        Rect::from_min_max(to_screen(0.0, 0.0), to_screen(world_w, world_h)),
        0.0,
        Stroke::new(1.5, border_color),
    );
}

/// Translucent footprint of what a primary press would change, drawn at the
/// hovered cell. Not wrapped: the part of a stamp hanging past the world
/// edge is simply drawn outside the border.
pub fn draw_hover_preview(
    painter: &Painter,
    canvas: Rect,
    view: &Viewport,
    tools: &ToolState,
    (col, row): (usize, usize),
    cell_px: f32,
) {
    let fill = Color32::from_rgba_unmultiplied(255, 255, 255, 100);
    let to_screen = |wx: f32, wy: f32| canvas.min + view.world_to_screen(pos2(wx, wy)).to_vec2();
    let cell_rect = |c: i64, r: i64, w: i64, h: i64| {
        Rect::from_min_max(
            to_screen(c as f32 * cell_px, r as f32 * cell_px),
            to_screen((c + w) as f32 * cell_px, (r + h) as f32 * cell_px),
        )
    };

    match tools.tool {
        Tool::Brush | Tool::Eraser => {
            let size = tools.brush_size.max(1) as i64;
            let half_floor = (size - 1) / 2;
            painter.rect_filled(
                cell_rect(col as i64 - half_floor, row as i64 - half_floor, size, size),
                0.0,
                fill,
            );
        }
        Tool::Shape => {
            for (dx, dy) in tools.active_pattern().cells() {
                painter.rect_filled(
                    cell_rect(col as i64 + dx as i64, row as i64 + dy as i64, 1, 1),
                    0.0,
                    fill,
                );
            }
        }
    }
}
