use std::time::Duration;

use egui::Color32;

/// Every tunable in one place. Constructed once in `main` and owned by the
/// app context; nothing in the crate reads configuration from anywhere else.
#[derive(Clone, Debug)]
pub struct Config {
    /// Logical grid width in cells.
    pub cols: usize,
    /// Logical grid height in cells.
    pub rows: usize,
    /// World-space pixel size of one cell at zoom 1.0.
    pub cell_px: f32,
    /// Added to the generation hue after every simulation step.
    pub hue_increment: u16,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub initial_zoom: f32,
    /// Wall-clock time between simulation steps.
    pub tick_interval: Duration,
    /// Fraction of the previous trail that survives each step (0.0 = no
    /// trails, 0.98 = near-permanent).
    pub trail_fade: f32,
    /// Per-cell live probability used by the randomize command.
    pub randomize_probability: f64,
    /// Clamp the view offset back inside the world on every pan delta.
    /// Off by default: panning is allowed to drift past the world edge,
    /// only construction re-centers within bounds.
    pub clamp_pan_to_world: bool,
    /// Upper end of the brush-size slider.
    pub brush_size_max: u32,
    pub show_grid_lines: bool,
    pub background: Color32,
    pub grid_line_color: Color32,
    pub border_color: Color32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cols: 192,
            rows: 120,
            cell_px: 10.0,
            hue_increment: 2,
            min_zoom: 0.1,
            max_zoom: 5.0,
            initial_zoom: 2.55,
            tick_interval: Duration::from_millis(200),
            trail_fade: 0.20,
            randomize_probability: 0.3,
            clamp_pan_to_world: false,
            brush_size_max: 10,
            show_grid_lines: true,
            background: Color32::from_rgb(0x11, 0x11, 0x11),
            grid_line_color: Color32::from_rgb(0x44, 0x44, 0x44),
            border_color: Color32::from_rgb(0x55, 0x55, 0x55),
        }
    }
}
