// app.rs - The simulation context: all state in one place, plus commands

use std::time::{Duration, Instant};

use egui::{vec2, Vec2};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Config;
use crate::grid::{Grid, HueCycle};
use crate::patterns::{capture_region, PatternLibrary};
use crate::render::{SimClock, TrailSurface};
use crate::tools::{Tool, ToolController, ToolState};
use crate::viewport::Viewport;

/// State for the shape-capture naming dialog.
pub struct CaptureDialog {
    pub name: String,
    pub error: Option<String>,
}

/// The whole simulation context, constructed once at startup. Everything
/// mutable lives here and is threaded through the UI by reference; there is
/// no module-level state anywhere in the crate.
pub struct LifeApp {
    pub config: Config,
    pub grid: Grid,
    pub hue: HueCycle,
    pub library: PatternLibrary,
    pub tools: ToolController,
    pub viewport: Viewport,
    pub trail: TrailSurface,
    pub clock: SimClock,
    pub rng: StdRng,
    pub running: bool,
    pub generation: u32,
    pub show_grid_lines: bool,
    pub trail_fade: f32,
    pub capture: Option<CaptureDialog>,
    pub last_frame: Instant,
    pub zoom_indicator_until: Option<Instant>,
}

impl LifeApp {
    pub fn new(config: Config) -> Self {
        let grid = Grid::new(config.cols, config.rows);
        let library = PatternLibrary::with_builtins();
        let tools = ToolController::new(ToolState::new(&library));
        let world = vec2(
            config.cols as f32 * config.cell_px,
            config.rows as f32 * config.cell_px,
        );
        // Placeholder screen size; the canvas reports its real one each frame.
        let viewport = Viewport::new(&config, world, vec2(1280.0, 720.0));
        let trail = TrailSurface::new(config.cols, config.rows, config.background);
        let clock = SimClock::new(config.tick_interval);

        log::info!(
            "starting {}x{} world, tick interval {:?}",
            config.cols,
            config.rows,
            config.tick_interval
        );

        Self {
            hue: HueCycle::new(config.hue_increment),
            show_grid_lines: config.show_grid_lines,
            trail_fade: config.trail_fade,
            config,
            grid,
            library,
            tools,
            viewport,
            trail,
            clock,
            rng: StdRng::from_os_rng(),
            running: false,
            generation: 0,
            capture: None,
            last_frame: Instant::now(),
            zoom_indicator_until: None,
        }
    }

    pub fn world_size(&self) -> Vec2 {
        vec2(
            self.config.cols as f32 * self.config.cell_px,
            self.config.rows as f32 * self.config.cell_px,
        )
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        if self.running {
            // Resume without replaying the time spent paused.
            self.clock.reset();
        }
        log::debug!("running: {}", self.running);
    }

    /// One simulation step: fade the trail, advance the grid, cycle the
    /// generation hue, composite the fresh live cells on top.
    pub fn tick(&mut self) {
        self.trail.fade(self.trail_fade);
        self.grid = self.grid.step(self.hue.current());
        self.hue.advance();
        self.trail.composite_live(&self.grid);
        self.generation += 1;
    }

    /// Feed a frame's wall-clock delta to the clock and run every tick it
    /// pays for (catch-up included). Returns whether any step ran.
    pub fn pump(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.clock.advance(dt);
        let mut ticked = false;
        while self.clock.try_tick() {
            self.tick();
            ticked = true;
        }
        ticked
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.trail.rebuild(&self.grid);
    }

    pub fn randomize(&mut self) {
        let hue = self.hue.current();
        self.grid
            .randomize(self.config.randomize_probability, hue, &mut self.rng);
        self.generation = 0;
        self.trail.rebuild(&self.grid);
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tools.state.tool = tool;
        log::debug!("tool: {}", tool.label());
    }

    pub fn select_pattern(&mut self, name: &str) {
        if self.tools.state.select_pattern(name, &self.library) {
            log::debug!("pattern: {name}");
        }
    }

    // Pointer events, already resolved to an optional grid cell by the
    // canvas. Edits made while paused rebuild the trail right away so they
    // are visible before the next tick.

    pub fn pointer_pressed(&mut self, cell: Option<(usize, usize)>) {
        let hue = self.hue.current();
        let changed = self.tools.pointer_pressed(&mut self.grid, cell, hue);
        self.after_edit(changed);
    }

    pub fn pointer_dragged(&mut self, cell: Option<(usize, usize)>) {
        let hue = self.hue.current();
        let changed = self.tools.pointer_dragged(&mut self.grid, cell, hue);
        self.after_edit(changed);
    }

    pub fn pointer_released(&mut self) {
        self.tools.pointer_released();
    }

    fn after_edit(&mut self, changed: bool) {
        if changed && !self.running {
            self.trail.rebuild(&self.grid);
        }
    }

    pub fn open_capture_dialog(&mut self) {
        self.capture = Some(CaptureDialog {
            name: String::new(),
            error: None,
        });
    }

    /// Try to capture the current live region under the name typed into the
    /// dialog. On success the new pattern becomes the active one and the
    /// dialog closes; on failure the dialog stays up showing why.
    pub fn submit_capture(&mut self) {
        let name = match &self.capture {
            Some(dialog) => dialog.name.trim().to_owned(),
            None => return,
        };
        if name.is_empty() {
            if let Some(dialog) = &mut self.capture {
                dialog.error = Some("enter a name for the shape".to_owned());
            }
            return;
        }

        let result =
            capture_region(&self.grid).and_then(|pattern| self.library.register(&name, pattern));
        match result {
            Ok(()) => {
                log::info!("captured pattern {name:?}");
                self.tools.state.select_pattern(&name, &self.library);
                self.capture = None;
            }
            Err(err) => {
                log::warn!("capture rejected: {err}");
                if let Some(dialog) = &mut self.capture {
                    dialog.error = Some(err.to_string());
                }
            }
        }
    }
}
