use eframe::egui;

use super::data::SettingsData;
use crate::core::range::RANGE_UPPER_BOUND;

pub struct SettingsModal {
    open: bool,
    settings: SettingsData,
    original_settings: SettingsData,
    font_path_input: String,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            settings: SettingsData::default(),
            original_settings: SettingsData::default(),
            font_path_input: String::new(),
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.font_path_input = current_settings.font_path.clone().unwrap_or_default();
        self.settings = current_settings.clone();
        self.original_settings = current_settings;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.settings != self.original_settings
            || self.font_path_input != self.original_settings.font_path.clone().unwrap_or_default()
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("API URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings.api_base_url)
                        .desired_width(260.0),
                );
                ui.end_row();

                ui.label("Quiz words:");
                ui.add(
                    egui::DragValue::new(&mut self.settings.default_quiz_count)
                        .range(1..=RANGE_UPPER_BOUND),
                );
                ui.end_row();

                ui.label("Default range:");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::DragValue::new(&mut self.settings.default_range.start)
                            .range(1..=RANGE_UPPER_BOUND),
                    );
                    ui.label("to");
                    let start = self.settings.default_range.start;
                    ui.add(
                        egui::DragValue::new(&mut self.settings.default_range.end)
                            .range(start..=RANGE_UPPER_BOUND),
                    );
                });
                ui.end_row();

                ui.label("Font file:");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.font_path_input)
                            .hint_text("system default")
                            .desired_width(200.0),
                    );
                    if ui.button("…").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Fonts", &["ttf", "otf", "ttc"])
                            .pick_file()
                        {
                            self.font_path_input = path.display().to_string();
                        }
                    }
                });
                ui.end_row();
            });

            ui.add_space(6.0);
            ui.checkbox(&mut self.settings.shuffle_questions, "Shuffle quiz questions");
            ui.checkbox(&mut self.settings.offline_check, "Check answers locally (no /api/check)");
            ui.checkbox(&mut self.settings.dark_mode, "Dark mode");

            ui.add_space(5.0);
            ui.label(
                egui::RichText::new("Font changes apply after restart.")
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );

            ui.separator();

            let is_dirty = self.is_dirty();
            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    let mut settings = self.settings.clone();
                    let font_path = self.font_path_input.trim();
                    settings.font_path =
                        if font_path.is_empty() { None } else { Some(font_path.to_string()) };
                    self.original_settings = settings.clone();
                    result = Some(settings);
                    ui.close();
                } else if cancel_clicked {
                    self.settings = self.original_settings.clone();
                    ui.close();
                } else if reset_clicked {
                    self.settings = SettingsData::default();
                    self.font_path_input.clear();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
