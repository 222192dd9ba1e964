//! Reusable UI components
//!
//! Standalone widgets shared by the form panel and the employee list.

use crate::theme;
use crate::types::Field;
use eframe::egui;

/// Small dimmed caps label, used for section and column headings
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}

/// Framed single-line input for one form field. Returns the text edit's
/// response so callers can react to changes and Enter.
pub fn form_input(
    ui: &mut egui::Ui,
    field: Field,
    value: &mut String,
    invalid: bool,
) -> egui::Response {
    theme::input_frame(invalid)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .id_salt(field.label())
                    .hint_text(field.hint())
                    .font(egui::FontId::proportional(theme::FONT_BODY))
                    .frame(false)
                    .desired_width(ui.available_width()),
            )
        })
        .inner
}

/// Inline validation message under an input
pub fn field_error(ui: &mut egui::Ui, message: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(message)
                .size(theme::FONT_SMALL)
                .color(theme::STATUS_ERROR),
        )
        .wrap(),
    );
}
