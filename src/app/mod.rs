//! App module - contains the main application state and logic

pub(crate) mod form;
mod requests;
pub(crate) mod roster;

use crate::api::EmployeeClient;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use requests::Requests;
use roster::Roster;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) roster: Roster,
    pub(crate) requests: Requests,
    // Owns the worker threads behind `requests`; must outlive it
    _runtime: tokio::runtime::Runtime,
    pub(crate) api_base_url: String,
    pub(crate) initial_load_started: bool,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) saved_api_base_url: String,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for the form and row buttons
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new()?;
        let api_base_url = settings.effective_api_url();
        let client = EmployeeClient::new(&api_base_url);
        info!(url = %client.base_url(), "Employee API configured");
        let requests = Requests::new(client, runtime.handle().clone());

        Ok(Self {
            roster: Roster::default(),
            requests,
            _runtime: runtime,
            api_base_url,
            initial_load_started: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            saved_api_base_url: settings.api_base_url,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            // An environment override is per-session, keep what was on disk
            api_base_url: self.saved_api_base_url.clone(),
        };
        settings.save(&self.data_dir);
    }

    pub fn is_busy(&self) -> bool {
        self.requests.in_flight() > 0
    }
}
