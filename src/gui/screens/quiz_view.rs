use eframe::egui;

use crate::{
    gui::theme::Theme,
    quiz::{
        QuizEngine,
        QuizPhase,
    },
};

pub enum QuizAction {
    Submit,
    Next,
    Quit,
}

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    quiz: &QuizEngine,
    answer_input: &mut String,
) -> Option<QuizAction> {
    let ctx = ui.ctx().clone();
    let mut action = None;

    let (Some((number, total)), Some(entry)) = (quiz.progress(), quiz.current_word()) else {
        return None;
    };

    ui.horizontal(|ui| {
        if let Some(session) = quiz.session() {
            ui.label(theme.heading(&ctx, &session.level.name));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Quit").clicked() {
                action = Some(QuizAction::Quit);
            }
            ui.label(format!("Score: {}", quiz.score()));
        });
    });

    ui.add(
        egui::ProgressBar::new(number as f32 / total as f32)
            .text(format!("{number} / {total}"))
            .fill(theme.accent(&ctx)),
    );
    ui.add_space(30.0);

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(&entry.word).size(40.0).strong());
        ui.add_space(20.0);

        let answered = matches!(quiz.phase(), QuizPhase::Answered(_));
        let checking = quiz.is_checking();

        let response = ui.add_enabled(
            !answered && !checking,
            egui::TextEdit::singleline(answer_input)
                .hint_text("Type the meaning")
                .desired_width(320.0)
                .font(egui::TextStyle::Heading),
        );
        if !answered && !checking && !response.has_focus() && !response.lost_focus() {
            response.request_focus();
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(12.0);

        if let Some(feedback) = quiz.feedback() {
            if feedback.is_correct {
                ui.label(
                    egui::RichText::new("✓ Correct!").size(20.0).color(theme.correct(&ctx)),
                );
            } else {
                ui.label(egui::RichText::new("✗ Wrong").size(20.0).color(theme.wrong(&ctx)));
                ui.label(format!("Answer: {}", feedback.correct_answer));
            }
            ui.add_space(10.0);

            let next_label = if number == total { "See Results" } else { "Next" };
            if ui.button(next_label).clicked() || enter {
                action = Some(QuizAction::Next);
            }
        } else if checking {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Checking...");
            });
        } else {
            let blank = answer_input.trim().is_empty();
            let submit = ui.add_enabled(!blank, egui::Button::new("Submit")).clicked();
            if (submit || (enter && response.lost_focus())) && !blank {
                action = Some(QuizAction::Submit);
            }
        }
    });

    action
}
