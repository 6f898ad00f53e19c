//! Main application module for Swatchbook
//!
//! Hosts a colors panel in an eframe window and drives the import/export
//! operations from the menu bar.

use crate::color::{names, Color};
use crate::config::{save_config_silent, TransferSettings};
use crate::files::{NativeDialogs, NativePathSelector};
use crate::logging::{DiagnosticLog, UserLog};
use crate::panel::Palette;
use crate::transfer::{ColorTransfer, PylStore, TransferOutcome};
use eframe::egui;
use log::{debug, info};

/// Side length of a swatch in points.
const SWATCH_SIZE: f32 = 40.0;

/// Seconds a status message stays visible.
const TOAST_DURATION: f64 = 3.0;

/// The main application struct.
pub struct SwatchbookApp {
    /// The colors panel's working set
    palette: Palette,
    /// Import/export operations with native dialogs
    transfer: ColorTransfer,
    /// Shared with the transfer, displayed in the user log window
    user_log: UserLog,
    /// Whether the user log window is open
    show_user_log: bool,
    /// Status message and the time it expires at
    toast: Option<(String, f64)>,
}

impl SwatchbookApp {
    /// Create the application with the given settings.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: TransferSettings) -> Self {
        info!("Initializing Swatchbook");

        let user_log = UserLog::new(settings.user_log_capacity);
        let selector = NativePathSelector::new(
            settings.last_directory.clone(),
            settings.file_extensions.clone(),
        );
        let transfer = ColorTransfer::new(
            Box::new(selector),
            Box::new(PylStore),
            Box::new(NativeDialogs),
            Box::new(DiagnosticLog::default()),
            Box::new(user_log.clone()),
            settings,
        );

        Self {
            palette: Palette::default(),
            transfer,
            user_log,
            show_user_log: false,
            toast: None,
        }
    }

    fn show_toast(&mut self, message: impl Into<String>, current_time: f64) {
        self.toast = Some((message.into(), current_time + TOAST_DURATION));
    }

    /// Turn an operation outcome into status feedback.
    fn handle_outcome(&mut self, outcome: TransferOutcome, current_time: f64) {
        debug!("Transfer outcome: {:?}", outcome);
        match outcome {
            TransferOutcome::Imported { files, colors } => {
                let message = format!("Imported {} colors from {} file(s)", colors, files);
                self.user_log.info(message.clone());
                self.show_toast(message, current_time);
            }
            TransferOutcome::Exported { path, colors } => {
                let message = format!("Exported {} colors to {}", colors, path.display());
                self.user_log.info(message.clone());
                self.show_toast(message, current_time);
            }
            TransferOutcome::Failed => {
                self.show_toast("Colors were not changed", current_time);
            }
            // Cancellation and the multiple-path warning need no status
            TransferOutcome::Cancelled | TransferOutcome::Rejected => {}
        }
    }

    fn import_colors(&mut self, current_time: f64) {
        let outcome = self.transfer.import_colors(&mut self.palette);
        self.handle_outcome(outcome, current_time);
    }

    fn export_colors(&mut self, current_time: f64) {
        let outcome = self.transfer.export_colors(&self.palette);
        self.handle_outcome(outcome, current_time);
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let toggle_log =
            ctx.input(|i| i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::J));
        if toggle_log {
            self.show_user_log = !self.show_user_log;
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context, current_time: f64) {
        let mut import_clicked = false;
        let mut export_clicked = false;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Import colors…").clicked() {
                        import_clicked = true;
                        ui.close_menu();
                    }
                    if ui.button("Export colors…").clicked() {
                        export_clicked = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("Show user log").clicked() {
                        self.show_user_log = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // File dialogs block, so run them outside the panel closure
        if import_clicked {
            self.import_colors(current_time);
        }
        if export_clicked {
            self.export_colors(current_time);
        }
    }

    fn render_status_bar(&mut self, ctx: &egui::Context, current_time: f64) {
        if matches!(&self.toast, Some((_, expires_at)) if current_time >= *expires_at) {
            self.toast = None;
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} colors", self.palette.len()));
                if let Some((message, _)) = &self.toast {
                    ui.separator();
                    ui.label(egui::RichText::new(message).italics());
                }
            });
        });
    }

    fn render_palette(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.palette.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No colors. Use File > Import colors… to load a palette.");
                });
                return;
            }

            // A new revision means the colors were replaced; start back at the top
            egui::ScrollArea::vertical()
                .id_source(("palette", self.palette.revision()))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for (index, color) in self.palette.iter().enumerate() {
                            render_swatch(ui, index, *color);
                        }
                    });
                });
        });
    }

    fn render_user_log(&mut self, ctx: &egui::Context) {
        let user_log = self.user_log.clone();
        egui::Window::new("User log")
            .open(&mut self.show_user_log)
            .default_width(480.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        user_log.clear();
                    }
                    if ui.button("Copy").clicked() {
                        ui.output_mut(|o| o.copied_text = user_log.render());
                    }
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if user_log.is_empty() {
                            ui.weak("Nothing logged yet.");
                        }
                        for entry in user_log.entries() {
                            let text = format!("[{}] {}", entry.level, entry.message);
                            let label = match entry.level {
                                log::Level::Error => {
                                    egui::RichText::new(text).color(ui.visuals().error_fg_color)
                                }
                                log::Level::Warn => {
                                    egui::RichText::new(text).color(ui.visuals().warn_fg_color)
                                }
                                _ => egui::RichText::new(text),
                            };
                            ui.label(label);
                            if let Some(detail) = &entry.detail {
                                ui.label(egui::RichText::new(detail).monospace().small());
                            }
                        }
                    });
            });
    }
}

/// Draw one swatch with a tooltip describing the color.
fn render_swatch(ui: &mut egui::Ui, index: usize, color: Color) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
    let fill = egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a);
    ui.painter().rect_filled(rect, 4.0, fill);
    ui.painter()
        .rect_stroke(rect, 4.0, ui.visuals().widgets.noninteractive.bg_stroke);

    let mut tooltip = format!(
        "#{}  {}\nrgba({}, {}, {}, {})",
        index, color, color.r, color.g, color.b, color.a
    );
    if let Some(name) = names::name_of(color) {
        tooltip.push_str(&format!("\n{}", name));
    }
    response.on_hover_text(tooltip);
}

impl eframe::App for SwatchbookApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let current_time = ctx.input(|i| i.time);

        self.handle_keyboard_shortcuts(ctx);
        self.render_menu_bar(ctx, current_time);
        self.render_status_bar(ctx, current_time);
        self.render_palette(ctx);
        self.render_user_log(ctx);

        // Keep repainting while a toast is counting down
        if self.toast.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    /// Called once before the application closes.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        save_config_silent(self.transfer.settings());
    }
}
