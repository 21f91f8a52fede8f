use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        models::PresentationMode,
        AppState,
    },
    gui::theme::Theme,
    sheet::{
        SheetDocument,
        PLACEHOLDER,
    },
};

pub enum PrintAction {
    Generate,
    Print,
    SaveHtml,
    LoadHistory(usize),
    ClearHistory,
}

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &mut AppState,
    error: Option<&str>,
    generating: bool,
) -> Option<PrintAction> {
    let mut action = None;

    egui::SidePanel::right("history_panel").resizable(true).default_width(260.0).show_inside(
        ui,
        |ui| {
            if let Some(history_action) = history_panel(ui, theme, state) {
                action = Some(history_action);
            }
        },
    );

    if let Some(form_action) = form(ui, theme, state, generating) {
        action = Some(form_action);
    }
    if let Some(error) = error {
        ui.label(egui::RichText::new(error).color(theme.wrong(ui.ctx())));
    }

    ui.separator();

    match state.document() {
        Some(document) => preview(ui, theme, document),
        None => {
            ui.label(
                egui::RichText::new("Generate a sheet to preview it here.")
                    .color(theme.muted(ui.ctx())),
            );
        }
    }

    action
}

fn form(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &mut AppState,
    generating: bool,
) -> Option<PrintAction> {
    let ctx = ui.ctx().clone();
    let mut action = None;

    ui.heading(theme.heading(&ctx, "Printable Worksheet"));
    ui.add_space(6.0);

    let levels = state.levels().to_vec();
    let has_document = state.document().is_some();
    let form = state.print_form_mut();

    egui::Grid::new("print_form_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Level:");
        let selected = levels
            .iter()
            .find(|level| level.id == form.level_id)
            .map(|level| format!("{} ({} words)", level.name, level.count))
            .unwrap_or_else(|| "Choose a level".to_string());
        egui::ComboBox::from_id_salt("print_level").selected_text(selected).show_ui(ui, |ui| {
            for level in &levels {
                ui.selectable_value(
                    &mut form.level_id,
                    level.id.clone(),
                    format!("{} ({} words)", level.name, level.count),
                );
            }
        });
        ui.end_row();

        ui.label("Type:");
        ui.horizontal(|ui| {
            for mode in PresentationMode::ALL {
                ui.radio_value(&mut form.mode, mode, mode.label());
            }
        });
        ui.end_row();

        let word_label = if form.mode.is_dual_range() { "Word range:" } else { "Range:" };
        ui.label(word_label);
        range_inputs(ui, &mut form.word_start, &mut form.word_end);
        ui.end_row();

        if form.mode.is_dual_range() {
            ui.label("Meaning range:");
            range_inputs(ui, &mut form.meaning_start, &mut form.meaning_end);
            ui.end_row();
        }

        ui.label("");
        ui.checkbox(&mut form.answer_key, "Answer sheet (show every column)");
        ui.end_row();
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(!generating, egui::Button::new("Generate")).clicked() {
            action = Some(PrintAction::Generate);
        }
        if generating {
            ui.add(egui::Spinner::new());
        }
        if ui.add_enabled(has_document, egui::Button::new("🖨 Print")).clicked() {
            action = Some(PrintAction::Print);
        }
        if ui.add_enabled(has_document, egui::Button::new("Save HTML…")).clicked() {
            action = Some(PrintAction::SaveHtml);
        }
    });

    action
}

fn range_inputs(ui: &mut egui::Ui, start: &mut String, end: &mut String) {
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(start).desired_width(60.0));
        ui.label("to");
        ui.add(egui::TextEdit::singleline(end).desired_width(60.0));
    });
}

fn preview(ui: &mut egui::Ui, theme: &Theme, document: &SheetDocument) {
    let ctx = ui.ctx().clone();

    ui.label(egui::RichText::new(&document.title).size(20.0).strong());
    ui.label(egui::RichText::new(&document.subtitle).color(theme.muted(&ctx)));
    ui.add_space(6.0);

    let headers = document.headers();
    let blank_word = !document.answer_key && !document.mode.shows_word();
    let blank_meaning = !document.answer_key && !document.mode.shows_meaning();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(50.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::remainder().at_least(200.0))
        .header(24.0, |mut header| {
            for title in &headers {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(24.0, document.rows.len(), |mut row| {
                let sheet_row = &document.rows[row.index()];
                row.col(|ui| {
                    ui.label(sheet_row.number.to_string());
                });
                row.col(|ui| {
                    cell(ui, theme, sheet_row.word.as_deref(), blank_word);
                });
                row.col(|ui| {
                    cell(ui, theme, sheet_row.meaning.as_deref(), blank_meaning);
                });
            });
        });
}

fn cell(ui: &mut egui::Ui, theme: &Theme, text: Option<&str>, blank: bool) {
    match text {
        Some(PLACEHOLDER) => {
            ui.label(egui::RichText::new(PLACEHOLDER).color(theme.muted(ui.ctx())));
        }
        Some(text) => {
            ui.label(text);
        }
        None if blank => {
            ui.label(egui::RichText::new("________").color(theme.muted(ui.ctx())));
        }
        None => {}
    }
}

fn history_panel(ui: &mut egui::Ui, theme: &Theme, state: &AppState) -> Option<PrintAction> {
    let ctx = ui.ctx().clone();
    let mut action = None;
    let history = state.history();

    ui.horizontal(|ui| {
        ui.label(theme.heading(&ctx, "Recent sheets"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!history.is_empty(), egui::Button::new("Clear")).clicked() {
                action = Some(PrintAction::ClearHistory);
            }
        });
    });
    ui.separator();

    if history.is_empty() {
        ui.label(egui::RichText::new("No sheets generated yet.").color(theme.muted(&ctx)));
        return action;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for (index, entry) in history.list().iter().enumerate() {
            let response = ui
                .add(
                    egui::Button::new(format!("{}\n{}", entry.summary(), entry.format_timestamp()))
                        .wrap()
                        .min_size(egui::vec2(ui.available_width(), 0.0)),
                )
                .on_hover_text("Load these settings");
            if response.clicked() {
                action = Some(PrintAction::LoadHistory(index));
            }
        }
    });

    action
}
