// ui.rs - eframe::App impl: frame pacing, control panel, capture dialog,
// and the canvas with pan/zoom/tool interaction

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{pos2, Color32, PointerButton, Rect, Sense};

use crate::app::LifeApp;
use crate::render;
use crate::tools::Tool;

/// How long the zoom readout stays up after the last wheel event.
const ZOOM_INDICATOR_TTL: Duration = Duration::from_millis(1500);

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.pump(dt);

        // Keyboard shortcuts, suppressed while a text field has focus.
        if ctx.memory(|m| m.focus().is_none()) {
            if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
                self.toggle_running();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::R)) {
                self.tools.state.rotate();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.command_row(ui);
            ui.separator();
            self.settings_row(ui);
            ui.separator();
            self.canvas(ui);
        });

        self.capture_window(ctx);

        if self.running {
            ctx.request_repaint();
        } else if self.zoom_indicator_until.is_some() {
            // Keep repainting until the readout has timed out.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl LifeApp {
    fn command_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.running { "⏸ Pause" } else { "▶ Play" };
            if ui.button(button_text).clicked() {
                self.toggle_running();
            }

            if ui.button("⏹ Clear").clicked() {
                self.clear();
            }

            if ui.button("🎲 Randomize").clicked() {
                self.randomize();
            }

            if ui.button("📷 Capture shape").clicked() {
                self.open_capture_dialog();
            }

            ui.separator();

            ui.label(format!("Generation: {}", self.generation));
            ui.label(format!("Live cells: {}", self.grid.live_count()));
        });
    }

    fn settings_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut per_sec = 1000.0 / self.clock.interval().as_millis().max(1) as f32;
            if ui
                .add(egui::Slider::new(&mut per_sec, 0.5..=60.0).suffix(" steps/s"))
                .changed()
            {
                self.clock
                    .set_interval(Duration::from_millis((1000.0 / per_sec) as u64));
            }

            ui.label("Trail:");
            ui.add(egui::Slider::new(&mut self.trail_fade, 0.0..=0.98));

            ui.checkbox(&mut self.show_grid_lines, "Grid lines");

            ui.separator();

            ui.label("Tool:");
            let mut tool = self.tools.state.tool;
            egui::ComboBox::from_id_source("tool_selector")
                .selected_text(tool.label())
                .show_ui(ui, |ui| {
                    for t in Tool::ALL {
                        ui.selectable_value(&mut tool, t, t.label());
                    }
                });
            if tool != self.tools.state.tool {
                self.select_tool(tool);
            }

            match self.tools.state.tool {
                Tool::Brush | Tool::Eraser => {
                    ui.label("Size:");
                    ui.add(egui::Slider::new(
                        &mut self.tools.state.brush_size,
                        1..=self.config.brush_size_max,
                    ));
                }
                Tool::Shape => {
                    ui.label("Shape:");
                    let names: Vec<String> = self.library.names().map(str::to_owned).collect();
                    let current = self.tools.state.pattern_name().to_owned();
                    let mut selected = current.clone();
                    egui::ComboBox::from_id_source("pattern_selector")
                        .selected_text(selected.clone())
                        .show_ui(ui, |ui| {
                            for name in &names {
                                ui.selectable_value(&mut selected, name.clone(), name);
                            }
                        });
                    if selected != current {
                        self.select_pattern(&selected);
                    }

                    if ui.button("⟳ Rotate (R)").clicked() {
                        self.tools.state.rotate();
                    }
                }
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let canvas = response.rect;
        self.viewport.set_screen_size(canvas.size());

        // Wheel zoom anchored at the pointer.
        if let Some(hover) = response.hover_pos() {
            let scroll = ui.input(|i| i.scroll_delta.y);
            if scroll != 0.0 {
                let factor = if scroll > 0.0 { 1.1 } else { 0.9 };
                self.viewport.zoom_at((hover - canvas.min).to_pos2(), factor);
                self.zoom_indicator_until = Some(Instant::now() + ZOOM_INDICATOR_TTL);
            }
        }

        // Secondary-button drag pans; tools and preview are suspended.
        let panning = response.dragged_by(PointerButton::Secondary);
        if panning {
            self.viewport.pan(response.drag_delta());
        }

        let pointer = response
            .hover_pos()
            .or_else(|| response.interact_pointer_pos());
        let pointer_cell = pointer.and_then(|p| {
            let world = self.viewport.screen_to_world((p - canvas.min).to_pos2());
            self.viewport.world_to_cell(
                world,
                self.config.cell_px,
                self.config.cols,
                self.config.rows,
            )
        });

        if !panning {
            let (pressed, down, released) = ui.input(|i| {
                (
                    i.pointer.primary_pressed(),
                    i.pointer.primary_down(),
                    i.pointer.primary_released(),
                )
            });
            if pressed && response.hovered() {
                self.pointer_pressed(pointer_cell);
            } else if down && self.tools.stroke_active() {
                self.pointer_dragged(pointer_cell);
            }
            if released {
                self.pointer_released();
            }
        }

        // Compose the frame: trail, static overlay, hover preview, readout.
        let painter = painter.with_clip_rect(canvas);
        painter.rect_filled(canvas, 0.0, self.config.background);

        let world = render::world_rect(canvas, &self.viewport, self.world_size());
        let texture = self.trail.texture(ui.ctx());
        painter.image(
            texture,
            world,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        render::draw_static_overlay(
            &painter,
            canvas,
            &self.viewport,
            self.config.cols,
            self.config.rows,
            self.config.cell_px,
            self.show_grid_lines,
            self.config.grid_line_color,
            self.config.border_color,
        );

        if let Some(cell) = pointer_cell {
            if !panning {
                render::draw_hover_preview(
                    &painter,
                    canvas,
                    &self.viewport,
                    &self.tools.state,
                    cell,
                    self.config.cell_px,
                );
            }
        }

        self.zoom_indicator(&painter, canvas);
    }

    fn zoom_indicator(&mut self, painter: &egui::Painter, canvas: Rect) {
        let Some(until) = self.zoom_indicator_until else {
            return;
        };
        if Instant::now() >= until {
            self.zoom_indicator_until = None;
            return;
        }
        let percent = (self.viewport.zoom() - self.config.min_zoom)
            / (self.config.max_zoom - self.config.min_zoom)
            * 100.0;
        painter.text(
            canvas.min + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            format!("Zoom: {percent:.0}%"),
            egui::FontId::monospace(14.0),
            Color32::WHITE,
        );
    }

    fn capture_window(&mut self, ctx: &egui::Context) {
        if self.capture.is_none() {
            return;
        }
        let mut open = true;
        let mut submit = false;
        let mut cancel = false;
        if let Some(dialog) = &mut self.capture {
            egui::Window::new("Capture shape")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Name for the captured shape:");
                    let edit = ui.text_edit_singleline(&mut dialog.name);
                    if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    if let Some(error) = &dialog.error {
                        ui.colored_label(Color32::LIGHT_RED, error);
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Add").clicked() {
                            submit = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancel = true;
                        }
                    });
                });
        }
        if !open || cancel {
            self.capture = None;
        } else if submit {
            self.submit_capture();
        }
    }
}
