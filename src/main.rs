#![windows_subsystem = "windows"]
//! Employee Manager - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use settings::Settings;
use tracing::{error, info};
use types::*;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "employee-manager.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,employee_manager=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Employee Manager starting");

    // Load saved window position/size
    let settings = Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1100.0, 680.0)))
        .with_min_inner_size([860.0, 520.0])
        .with_title(APP_TITLE);

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir).map_err(|e| {
                error!(error = %e, "Failed to start async runtime");
                e
            })?;
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Fetch the list on the first frame
        if !self.initial_load_started {
            self.initial_load_started = true;
            self.load_employees(ctx);
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Apply responses from background requests
        self.poll_outcomes(ctx);

        // Left panel - the form (must be added BEFORE CentralPanel)
        egui::SidePanel::left("form_panel")
            .exact_width(theme::FORM_PANEL_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                self.render_form(ui, ctx);
            });

        // Error line stays until replaced by a newer error
        if let Some(message) = self.roster.error.clone() {
            egui::TopBottomPanel::bottom("error_bar")
                .show_separator_line(false)
                .frame(
                    egui::Frame::new()
                        .fill(theme::BG_ELEVATED)
                        .inner_margin(egui::Margin::symmetric(16, 10)),
                )
                .show(ctx, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{}  {}",
                                egui_phosphor::regular::WARNING_CIRCLE,
                                message
                            ))
                            .size(theme::FONT_BODY)
                            .color(theme::STATUS_ERROR),
                        )
                        .wrap(),
                    );
                });
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                self.render_list(ui, ctx);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// VIEW RENDERING (Form, List)
// ============================================================================

/// What a click in the list asked for; applied once the table is drawn.
enum RowAction {
    Edit(Employee),
    Delete(i64),
}

impl App {
    fn render_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.add(
            egui::Label::new(
                egui::RichText::new(APP_TITLE)
                    .size(theme::FONT_TITLE)
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_LG);

        let mut submit = false;
        theme::section_frame().show(ui, |ui| {
            let heading = if self.roster.editing {
                "EDIT EMPLOYEE"
            } else {
                "NEW EMPLOYEE"
            };
            components::section_label(ui, heading);
            ui.add_space(theme::SPACING_MD);

            for field in Field::ALL {
                let label = if field.is_required() {
                    format!("{} *", field.label())
                } else {
                    field.label().to_string()
                };
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(label)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );

                let mut value = self.roster.form.get(field).to_owned();
                let invalid = self.roster.form.is_malformed(field);
                let response = components::form_input(ui, field, &mut value, invalid);
                if response.changed() {
                    self.roster.set_field(field, value);
                }
                // Enter submits, as in a web form
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if invalid {
                    if let Some(err) = self.roster.form.field_error(field) {
                        components::field_error(ui, &err.to_string());
                    }
                }
                ui.add_space(theme::SPACING_SM);
            }

            ui.add_space(theme::SPACING_MD);
            let icon = if self.roster.editing {
                egui_phosphor::regular::FLOPPY_DISK
            } else {
                egui_phosphor::regular::PLUS
            };
            let label = format!("{}  {}", icon, self.roster.submit_label());
            let width = ui.available_width();
            if ui
                .add_sized([width, theme::BUTTON_HEIGHT_LARGE], theme::button_accent(label))
                .clicked()
            {
                submit = true;
            }
        });

        if submit {
            self.submit_form(ctx);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&self.api_base_url)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                )
                .truncate(),
            );
            if self.is_busy() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Working...")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                });
            }
        });
    }

    fn render_list(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{}  Employee List", egui_phosphor::regular::USERS))
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                components::section_label(ui, &utils::format_headcount(self.roster.employees.len()));
            });
        });
        ui.add_space(theme::SPACING_MD);

        let mut action: Option<RowAction> = None;
        let employees = &self.roster.employees;

        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            if employees.is_empty() {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("No employees to show")
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                return;
            }

            TableBuilder::new(ui)
                .striped(false)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder().clip(true))
                .column(Column::exact(theme::ACTIONS_COLUMN_WIDTH))
                .header(theme::HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        components::section_label(ui, "EMPLOYEE");
                    });
                    header.col(|ui| {
                        components::section_label(ui, "ACTIONS");
                    });
                })
                .body(|body| {
                    body.rows(theme::ROW_HEIGHT, employees.len(), |mut row| {
                        let employee = &employees[row.index()];
                        row.col(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(employee.to_string())
                                        .size(theme::FONT_BODY)
                                        .color(theme::TEXT_SECONDARY),
                                )
                                .truncate(),
                            );
                        });
                        row.col(|ui| {
                            let edit = format!("{}  Edit", egui_phosphor::regular::PENCIL_SIMPLE);
                            if ui.add(theme::button(edit)).clicked() {
                                action = Some(RowAction::Edit(employee.clone()));
                            }
                            let delete = format!("{}  Delete", egui_phosphor::regular::TRASH);
                            if ui.add(theme::button_danger(delete)).clicked() {
                                action = Some(RowAction::Delete(employee.id));
                            }
                        });
                    });
                });
        });

        match action {
            Some(RowAction::Edit(employee)) => self.roster.begin_edit(&employee),
            Some(RowAction::Delete(id)) => self.delete_employee(id, ctx),
            None => {}
        }
    }
}
