use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    gui::theme::Theme,
    quiz::QuizSummary,
};

pub enum ResultAction {
    Retry,
    ChooseLevel,
}

pub fn show(ui: &mut egui::Ui, theme: &Theme, summary: &QuizSummary) -> Option<ResultAction> {
    let ctx = ui.ctx().clone();
    let mut action = None;
    let percentage = summary.percentage();

    ui.vertical_centered(|ui| {
        ui.heading(theme.heading(&ctx, "Results"));
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(format!("{} / {}", summary.score, summary.total)).size(36.0),
        );
        ui.label(
            egui::RichText::new(format!("{percentage}%"))
                .size(22.0)
                .color(theme.score(&ctx, percentage)),
        );
        ui.add_space(6.0);
        ui.label(summary.message());
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("Retry").clicked() {
                action = Some(ResultAction::Retry);
            }
            if ui.button("Choose Level").clicked() {
                action = Some(ResultAction::ChooseLevel);
            }
        });
    });

    if summary.wrong_answers.is_empty() {
        return action;
    }

    ui.add_space(16.0);
    ui.label(theme.heading(&ctx, "Words to review"));
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(120.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Word");
            });
            header.col(|ui| {
                ui.strong("Meaning");
            });
            header.col(|ui| {
                ui.strong("Your answer");
            });
        })
        .body(|body| {
            body.rows(22.0, summary.wrong_answers.len(), |mut row| {
                let wrong = &summary.wrong_answers[row.index()];
                row.col(|ui| {
                    ui.label(&wrong.word);
                });
                row.col(|ui| {
                    ui.label(&wrong.meaning);
                });
                row.col(|ui| {
                    ui.label(egui::RichText::new(&wrong.user_answer).color(theme.wrong(&ctx)));
                });
            });
        });

    action
}
