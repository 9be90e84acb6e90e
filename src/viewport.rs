// viewport.rs - Pannable, zoomable affine view over the world

use egui::{pos2, Pos2, Vec2};

use crate::config::Config;

/// Affine map between canvas-local screen pixels and world pixels:
/// `world = offset + screen / zoom`.
///
/// Zoom is always clamped to the configured range. The offset is clamped to
/// the world bounds at construction, and on pan only when
/// `clamp_pan_to_world` is set; otherwise panning may drift past the edge.
pub struct Viewport {
    zoom: f32,
    offset: Vec2,
    min_zoom: f32,
    max_zoom: f32,
    world_size: Vec2,
    screen_size: Vec2,
    clamp_pan_to_world: bool,
}

impl Viewport {
    /// Start centered on the world at the configured zoom.
    pub fn new(config: &Config, world_size: Vec2, screen_size: Vec2) -> Self {
        let mut view = Self {
            zoom: config.initial_zoom.clamp(config.min_zoom, config.max_zoom),
            offset: Vec2::ZERO,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            world_size,
            screen_size,
            clamp_pan_to_world: config.clamp_pan_to_world,
        };
        view.offset = (world_size - screen_size / view.zoom) * 0.5;
        view.clamp_offset();
        view
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_screen_size(&mut self, size: Vec2) {
        self.screen_size = size;
    }

    pub fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        pos2(
            self.offset.x + screen.x / self.zoom,
            self.offset.y + screen.y / self.zoom,
        )
    }

    pub fn world_to_screen(&self, world: Pos2) -> Pos2 {
        pos2(
            (world.x - self.offset.x) * self.zoom,
            (world.y - self.offset.y) * self.zoom,
        )
    }

    /// Resolve a world point to a grid cell. Pointer targeting does not
    /// wrap: anything outside the world resolves to `None`.
    pub fn world_to_cell(
        &self,
        world: Pos2,
        cell_px: f32,
        cols: usize,
        rows: usize,
    ) -> Option<(usize, usize)> {
        let col = (world.x / cell_px).floor();
        let row = (world.y / cell_px).floor();
        if col < 0.0 || row < 0.0 || col >= cols as f32 || row >= rows as f32 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    /// Rescale around `screen`: the world point under the cursor before the
    /// zoom is still under it afterwards.
    pub fn zoom_at(&mut self, screen: Pos2, factor: f32) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if self.zoom != old_zoom {
            let anchor_x = self.offset.x + screen.x / old_zoom;
            let anchor_y = self.offset.y + screen.y / old_zoom;
            self.offset.x = anchor_x - screen.x / self.zoom;
            self.offset.y = anchor_y - screen.y / self.zoom;
        }
    }

    /// Shift the view by a screen-space drag delta.
    pub fn pan(&mut self, delta_screen: Vec2) {
        self.offset -= delta_screen / self.zoom;
        if self.clamp_pan_to_world {
            self.clamp_offset();
        }
    }

    /// Best-effort clamp: keep the visible window inside the world, pinning
    /// to the origin when the viewport is larger than the world.
    fn clamp_offset(&mut self) {
        let span = self.world_size - self.screen_size / self.zoom;
        self.offset.x = self.offset.x.clamp(0.0, span.x.max(0.0));
        self.offset.y = self.offset.y.clamp(0.0, span.y.max(0.0));
    }
}
