// tools.rs - Editing tools and the pointer gesture state machine

use crate::grid::{Cell, Grid};
use crate::patterns::{Pattern, PatternLibrary};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tool {
    Brush,
    Eraser,
    Shape,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Brush, Tool::Eraser, Tool::Shape];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Shape => "Shape",
        }
    }
}

/// Active tool plus everything needed to apply it: brush size, and the
/// selected pattern with its four precomputed orientations.
pub struct ToolState {
    pub tool: Tool,
    pub brush_size: u32,
    pattern_name: String,
    orientations: [Pattern; 4],
    orientation: usize,
}

impl ToolState {
    pub fn new(library: &PatternLibrary) -> Self {
        let (name, pattern) = library.first();
        Self {
            tool: Tool::Brush,
            brush_size: 1,
            pattern_name: name.to_owned(),
            orientations: pattern.orientations(),
            orientation: 0,
        }
    }

    pub fn pattern_name(&self) -> &str {
        &self.pattern_name
    }

    /// Switch the active pattern, recomputing its orientations and resetting
    /// the rotation. Returns false if the name is unknown.
    pub fn select_pattern(&mut self, name: &str, library: &PatternLibrary) -> bool {
        match library.get(name) {
            Some(pattern) => {
                self.orientations = pattern.orientations();
                self.orientation = 0;
                self.pattern_name = name.to_owned();
                true
            }
            None => false,
        }
    }

    /// Advance the orientation. Only meaningful while the shape tool is
    /// active; a no-op otherwise.
    pub fn rotate(&mut self) {
        if self.tool == Tool::Shape {
            self.orientation = (self.orientation + 1) % 4;
        }
    }

    pub fn orientation(&self) -> usize {
        self.orientation
    }

    pub fn active_pattern(&self) -> &Pattern {
        &self.orientations[self.orientation]
    }

    /// Apply the tool once at `(col, row)`, wrapping toroidally. Returns
    /// whether any cell changed value.
    pub fn apply(&self, grid: &mut Grid, (col, row): (usize, usize), hue: Cell) -> bool {
        let mut changed = false;
        match self.tool {
            Tool::Brush | Tool::Eraser => {
                let value = if self.tool == Tool::Brush { hue } else { 0 };
                let size = self.brush_size.max(1) as i64;
                // Center the block on the target cell; even sizes spill one
                // further right/down than left/up.
                let half_floor = (size - 1) / 2;
                let half_ceil = size - 1 - half_floor;
                for dy in -half_floor..=half_ceil {
                    for dx in -half_floor..=half_ceil {
                        let (c, r) = grid.wrap(col as i64 + dx, row as i64 + dy);
                        if grid.get(c, r) != value {
                            grid.set(c, r, value);
                            changed = true;
                        }
                    }
                }
            }
            Tool::Shape => {
                let pattern = self.active_pattern();
                for (dx, dy) in pattern.cells() {
                    let (c, r) = grid.wrap(col as i64 + dx as i64, row as i64 + dy as i64);
                    if grid.get(c, r) != hue {
                        grid.set(c, r, hue);
                        changed = true;
                    }
                }
            }
        }
        changed
    }
}

/// Pointer gesture interpreter: a press applies the tool once, dragging
/// re-applies whenever the resolved cell changes (a continuous stroke, not
/// a sparse set of clicks), release ends the stroke.
pub struct ToolController {
    pub state: ToolState,
    stroke: bool,
    last_modified: Option<(usize, usize)>,
}

impl ToolController {
    pub fn new(state: ToolState) -> Self {
        Self {
            state,
            stroke: false,
            last_modified: None,
        }
    }

    pub fn stroke_active(&self) -> bool {
        self.stroke
    }

    /// Primary button pressed. `cell` is `None` when the pointer does not
    /// resolve to a grid cell; the stroke still starts so a drag can enter
    /// the grid later.
    pub fn pointer_pressed(
        &mut self,
        grid: &mut Grid,
        cell: Option<(usize, usize)>,
        hue: Cell,
    ) -> bool {
        self.stroke = true;
        match cell {
            Some(cell) => {
                let changed = self.state.apply(grid, cell, hue);
                self.last_modified = Some(cell);
                changed
            }
            None => false,
        }
    }

    /// Pointer moved with the primary button held. Applies the tool only
    /// when the resolved cell differs from the last one modified.
    pub fn pointer_dragged(
        &mut self,
        grid: &mut Grid,
        cell: Option<(usize, usize)>,
        hue: Cell,
    ) -> bool {
        if !self.stroke {
            return false;
        }
        match cell {
            Some(cell) if self.last_modified != Some(cell) => {
                let changed = self.state.apply(grid, cell, hue);
                self.last_modified = Some(cell);
                changed
            }
            _ => false,
        }
    }

    pub fn pointer_released(&mut self) {
        self.stroke = false;
        self.last_modified = None;
    }
}
