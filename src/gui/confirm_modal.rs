use eframe::egui;

/// Yes/no prompt; `show` returns `Some(true)` once the user confirms.
pub struct ConfirmModal {
    open: bool,
    message: String,
    confirm_label: String,
}

impl ConfirmModal {
    pub fn new() -> Self {
        Self { open: false, message: String::new(), confirm_label: String::new() }
    }

    pub fn ask(&mut self, message: impl Into<String>, confirm_label: impl Into<String>) {
        self.message = message.into();
        self.confirm_label = confirm_label.into();
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<bool> {
        if !self.open {
            return None;
        }

        let mut result: Option<bool> = None;

        let modal = egui::Modal::new(egui::Id::new("confirm_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::YELLOW));
                ui.label(egui::RichText::new(&self.message).size(14.0));
            });

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.confirm_label.as_str()).clicked() {
                        result = Some(true);
                        ui.close();
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(false);
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for ConfirmModal {
    fn default() -> Self {
        Self::new()
    }
}
