use eframe::egui;

use crate::{
    core::models::Level,
    gui::theme::Theme,
};

pub enum LevelSelectAction {
    StartQuiz(String),
    Retry,
}

/// Level cards plus the quiz length input. Clicking a card starts a quiz.
pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    levels: &[Level],
    count_input: &mut String,
    error: Option<&str>,
    loading: bool,
) -> Option<LevelSelectAction> {
    let ctx = ui.ctx().clone();
    let mut action = None;

    ui.heading(theme.heading(&ctx, "Vocabulary Quiz"));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Questions:");
        ui.add(egui::TextEdit::singleline(count_input).desired_width(60.0).hint_text("10"));
    });
    if let Some(error) = error {
        ui.label(egui::RichText::new(error).color(theme.wrong(&ctx)));
    }
    ui.add_space(12.0);

    if levels.is_empty() {
        if loading {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Loading levels...");
            });
        } else {
            ui.label(egui::RichText::new("No levels available.").color(theme.muted(&ctx)));
            if ui.button("Try again").clicked() {
                action = Some(LevelSelectAction::Retry);
            }
        }
        return action;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for level in levels {
                let text = egui::RichText::new(format!("{}\n{} words", level.name, level.count))
                    .size(16.0);
                let card = egui::Button::new(text).min_size(egui::vec2(180.0, 70.0));
                if ui.add_enabled(!loading, card).clicked() {
                    action = Some(LevelSelectAction::StartQuiz(level.id.clone()));
                }
            }
        });
    });

    action
}
