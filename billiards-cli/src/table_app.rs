//! Interactive table viewer
//!
//! Draws the surface 1:1 in pixels, forwards pointer presses and picker
//! changes to the simulation, and reloads the table file when it changes
//! on disk.

use billiards_core::{load_table, Color, FrameDriver, Simulation, TableConfig};
use eframe::egui;
use glam::Vec2;
use notify::{Event, RecommendedWatcher, Watcher};
use std::path::PathBuf;
use std::sync::mpsc;

const BORDER_WIDTH: f32 = 10.0;

/// Viewer state; the simulation is the only owner of the bodies
pub struct TableApp {
    table_path: Option<PathBuf>,
    table: TableConfig,
    sim: Simulation,
    driver: FrameDriver,
    last_load_error: Option<String>,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
    needs_reload: bool,
}

impl TableApp {
    pub fn new(table_path: Option<PathBuf>, table: TableConfig, _cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_table(table_path, table)
    }

    fn with_table(table_path: Option<PathBuf>, table: TableConfig) -> Self {
        let table_path = table_path.map(|p| std::fs::canonicalize(&p).unwrap_or(p));

        let (tx, rx) = mpsc::channel();
        let watcher = table_path.as_ref().and_then(|path| {
            let mut watcher = notify::recommended_watcher(move |res| {
                // The receiver is gone during shutdown
                let _ = tx.send(res);
            })
            .ok()?;
            match watcher.watch(path, notify::RecursiveMode::NonRecursive) {
                Ok(()) => Some(watcher),
                Err(e) => {
                    log::warn!("not watching {}: {}", path.display(), e);
                    None
                }
            }
        });

        let sim = Simulation::from_config(&table);
        let mut driver = FrameDriver::new();
        driver.start();

        Self {
            table_path,
            table,
            sim,
            driver,
            last_load_error: None,
            file_watcher: watcher,
            file_receiver: rx,
            needs_reload: false,
        }
    }

    fn reset(&mut self) {
        self.sim = Simulation::from_config(&self.table);
    }

    fn reload_table(&mut self) {
        let Some(path) = self.table_path.as_ref() else {
            return;
        };
        match load_table(path) {
            Ok(table) => {
                log::info!("reloaded {}", path.display());
                self.table = table;
                self.last_load_error = None;
                self.reset();
                self.driver.start();
            }
            Err(e) => {
                // Keep the last good table on screen, paused until a good reload
                self.last_load_error = Some(format!("{} (paused)", e));
                self.driver.stop();
            }
        }
    }

    fn check_file_changes(&mut self) {
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    paths,
                    ..
                }) => {
                    if self.table_path.as_ref().is_some_and(|p| paths.contains(p)) {
                        self.needs_reload = true;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("file watcher error: {}", e);
                }
            }
        }

        if self.needs_reload {
            self.reload_table();
            self.needs_reload = false;
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(if self.driver.is_running() { "⏸ Pause" } else { "▶ Play" })
                .clicked()
            {
                self.driver.toggle();
            }

            if ui.button("⏮ Reset").clicked() {
                self.reset();
            }

            if ui.button("⏭ Step").clicked() {
                self.sim.step();
            }

            ui.separator();

            ui.label("Speed:");
            let mut steps = self.driver.steps_per_frame();
            if ui.add(egui::Slider::new(&mut steps, 1..=10)).changed() {
                self.driver.set_steps_per_frame(steps);
            }

            ui.separator();

            let report = self.driver.last_report();
            ui.label(format!(
                "Frame: {}  bounces: {}  contacts: {}",
                self.sim.frame(),
                report.wall_bounces,
                report.contacts
            ));

            ui.separator();

            let params = self.sim.params();
            ui.label(format!(
                "damping: {}  impulse: {}",
                params.wall_damping, params.impulse_scale
            ));
        });
    }

    fn color_picker(&mut self, ui: &mut egui::Ui) {
        let Some(current) = self.sim.selected_body().map(|body| color32(&body.color)) else {
            return;
        };
        ui.horizontal(|ui| {
            ui.label("Change color:");
            let mut picked = current;
            let response = egui::color_picker::color_edit_button_srgba(
                ui,
                &mut picked,
                egui::color_picker::Alpha::Opaque,
            );
            if response.changed() {
                let [r, g, b, _] = picked.to_array();
                self.sim.assign_color(Color::from_rgb(r, g, b));
            }
        });
    }

    fn table_canvas(&mut self, ui: &mut egui::Ui) {
        let surface = self.sim.surface();
        let (response, painter) =
            ui.allocate_painter(egui::vec2(surface.width, surface.height), egui::Sense::click());
        let rect = response.rect;

        // Popups drawn over the table (the color picker) keep their presses
        let owns_press = ui.input(|i| i.pointer.primary_pressed()) && response.hovered();
        let pos = ui.input(|i| i.pointer.interact_pos());
        if let Some(point) = surface_press(rect, owns_press, pos) {
            self.sim.apply_pointer(point);
        }

        painter.rect_filled(rect, 0.0, egui::Color32::DARK_GREEN);
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(BORDER_WIDTH, egui::Color32::BLACK));

        for body in self.sim.body_states() {
            let center = rect.min + egui::vec2(body.pos.x, body.pos.y);
            painter.circle_filled(center, body.radius, color32(&body.color));
            if body.selected {
                painter.circle_stroke(center, body.radius + 2.0, egui::Stroke::new(2.0, egui::Color32::WHITE));
            }
        }
    }
}

/// Surface-local point of a press that landed on the table itself
fn surface_press(rect: egui::Rect, owns_press: bool, pos: Option<egui::Pos2>) -> Option<Vec2> {
    let pos = pos.filter(|pos| owns_press && rect.contains(*pos))?;
    let local = pos - rect.min;
    Some(Vec2::new(local.x, local.y))
}

/// Unknown color names are drawn gray
fn color32(color: &Color) -> egui::Color32 {
    color
        .to_rgb()
        .map(|[r, g, b]| egui::Color32::from_rgb(r, g, b))
        .unwrap_or(egui::Color32::GRAY)
}

impl eframe::App for TableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));

        if self.sim.selected().is_some() {
            egui::TopBottomPanel::bottom("picker").show(ctx, |ui| self.color_picker(ui));
        }

        if let Some(error) = self.last_load_error.clone() {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.set_max_height(100.0);
                ui.label(egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED));
            });
        }

        // Physics runs before drawing so the frame shows the new state
        self.driver.tick(&mut self.sim);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| self.table_canvas(ui));
        });

        if self.driver.is_running() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_hex_colors_convert() {
        assert_eq!(color32(&Color::new("red")), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(color32(&Color::new("#102030")), egui::Color32::from_rgb(16, 32, 48));
    }

    #[test]
    fn unknown_colors_fall_back_to_gray() {
        assert_eq!(color32(&Color::new("chartreuse-ish")), egui::Color32::GRAY);
    }

    fn table_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(20.0, 40.0), egui::vec2(400.0, 200.0))
    }

    #[test]
    fn press_on_table_maps_to_surface_coordinates() {
        let point = surface_press(table_rect(), true, Some(egui::pos2(70.0, 90.0)));
        assert_eq!(point, Some(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn press_owned_by_overlay_is_ignored() {
        // Same position as above, but a popup on top of the table took the press
        assert_eq!(surface_press(table_rect(), false, Some(egui::pos2(70.0, 90.0))), None);
    }

    #[test]
    fn press_outside_table_is_ignored() {
        assert_eq!(surface_press(table_rect(), true, Some(egui::pos2(5.0, 90.0))), None);
        assert_eq!(surface_press(table_rect(), true, None), None);
    }

    fn scratch_table(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("billiards-{}-{}.yaml", name, std::process::id()))
    }

    #[test]
    fn good_reload_resumes_after_failed_one() {
        let path = scratch_table("reload");
        std::fs::write(&path, "surface: { width: 400, height: 200 }\n").unwrap();
        let mut app = TableApp::with_table(Some(path.clone()), TableConfig::default());
        assert!(app.driver.is_running());

        std::fs::write(&path, "surface: [oops\n").unwrap();
        app.reload_table();
        assert!(!app.driver.is_running());
        assert!(app.last_load_error.as_deref().is_some_and(|e| e.contains("paused")));

        std::fs::write(
            &path,
            "surface: { width: 300, height: 150 }\nbodies:\n  - { position: [20, 30], radius: 5, color: red }\n",
        )
        .unwrap();
        app.reload_table();
        assert!(app.driver.is_running());
        assert!(app.last_load_error.is_none());
        assert_eq!(app.sim.bodies().len(), 1);
        assert_eq!(app.sim.surface().width, 300.0);

        let _ = std::fs::remove_file(&path);
    }
}
