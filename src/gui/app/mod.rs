mod modals;

use std::time::Duration;

use eframe::egui;
use modals::Modals;

use super::{
    fonts::setup_fonts,
    message_overlay::MessageOverlay,
    screens::{
        self,
        LevelSelectAction,
        PrintAction,
        QuizAction,
        ResultAction,
        Screen,
    },
    settings::SettingsData,
    theme::{
        apply_dark_mode,
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        AppState,
        Ticket,
        WordsheetError,
    },
    history::HistoryStore,
    quiz::{
        QuizPhase,
        SubmitOutcome,
    },
    sheet::render_html,
};

const PRINT_FILE: &str = "wordsheet-print.html";

/// Requests the UI is currently waiting on, by ticket.
#[derive(Default)]
struct InFlight {
    levels: Option<Ticket>,
    quiz: Option<Ticket>,
    sheet: Option<Ticket>,
}

impl InFlight {
    fn any(&self) -> bool {
        self.levels.is_some() || self.quiz.is_some() || self.sheet.is_some()
    }

    /// Clears `slot` if it holds `ticket`, returning whether it did.
    fn settle(slot: &mut Option<Ticket>, ticket: Ticket) -> bool {
        if *slot == Some(ticket) {
            *slot = None;
            true
        } else {
            false
        }
    }
}

pub struct WordsheetApp {
    // Data
    state: AppState,

    // Configuration
    settings_data: SettingsData,

    // UI State
    screen: Screen,
    theme: Theme,
    message_overlay: MessageOverlay,
    count_input: String,
    answer_input: String,
    last_level_id: Option<String>,
    inline_error: Option<String>,

    // Modals
    modals: Modals,

    // Background work
    task_manager: TaskManager,
    in_flight: InFlight,
}

impl WordsheetApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
        history: HistoryStore,
        task_manager: TaskManager,
    ) -> Self {
        let theme = Theme::default();
        setup_fonts(&cc.egui_ctx, settings_data.font_path.as_deref());
        set_theme(&cc.egui_ctx, &theme);
        apply_dark_mode(&cc.egui_ctx, settings_data.dark_mode);

        let mut app = Self {
            state: AppState::new(history, settings_data.default_range),
            count_input: settings_data.default_quiz_count.to_string(),
            settings_data,
            screen: Screen::default(),
            theme,
            message_overlay: MessageOverlay::new(),
            answer_input: String::new(),
            last_level_id: None,
            inline_error: None,
            modals: Modals::default(),
            task_manager,
            in_flight: InFlight::default(),
        };

        app.reload_levels();
        app
    }

    fn reload_levels(&mut self) {
        let ticket = self.state.begin_levels_load();
        self.in_flight.levels = Some(ticket);
        self.task_manager.load_levels(ticket);
    }

    /// Validation problems are shown next to the form; everything else gets a modal.
    fn report(&mut self, action: &str, error: WordsheetError) {
        if error.is_validation() {
            self.inline_error = Some(error.to_string());
        } else {
            self.modals.error.show_failure(action, &error);
        }
    }

    fn start_quiz(&mut self, level_id: &str) {
        match self.state.begin_quiz_load(level_id, &self.count_input) {
            Ok((ticket, level, count)) => {
                self.inline_error = None;
                self.count_input = count.to_string();
                self.last_level_id = Some(level.id.clone());
                self.in_flight.quiz = Some(ticket);
                self.message_overlay.set_message(format!("Loading {}...", level.name));
                self.task_manager.load_quiz_words(
                    ticket,
                    level,
                    count,
                    self.settings_data.shuffle_questions,
                );
            }
            Err(e) => self.report("Starting quiz", e),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LevelsLoaded { ticket, result } => {
                let current = InFlight::settle(&mut self.in_flight.levels, ticket);
                match result {
                    Ok(levels) => {
                        self.state.finish_levels_load(ticket, levels);
                    }
                    Err(e) if current => self.modals.error.show_failure("Loading levels", &e),
                    Err(_) => {}
                }
            }
            TaskResult::QuizWordsLoaded { ticket, level, result } => {
                let current = InFlight::settle(&mut self.in_flight.quiz, ticket);
                if current {
                    self.message_overlay.clear_message();
                }
                let started =
                    result.and_then(|words| self.state.finish_quiz_load(ticket, level, words));
                match started {
                    Ok(true) => {
                        self.answer_input.clear();
                        self.screen = Screen::Quiz;
                    }
                    Ok(false) => {}
                    Err(e) if current => self.report("Starting quiz", e),
                    Err(_) => {}
                }
            }
            TaskResult::AnswerChecked { pending, result } => {
                match self.state.quiz_mut().complete_submit(&pending, result) {
                    Ok(SubmitOutcome::Answered(feedback)) => {
                        log::debug!(
                            "Answer \"{}\" graded {}",
                            feedback.user_answer,
                            if feedback.is_correct { "correct" } else { "wrong" }
                        );
                    }
                    Ok(SubmitOutcome::Stale | SubmitOutcome::Ignored) => {}
                    Err(e) => self.modals.error.show_failure("Checking answer", &e),
                }
            }
            TaskResult::SheetGenerated { ticket, request, result } => {
                let current = InFlight::settle(&mut self.in_flight.sheet, ticket);
                let finished =
                    result.and_then(|document| self.state.finish_sheet(ticket, &request, document));
                match finished {
                    Ok(_) => {}
                    Err(e) if current => self.modals.error.show_failure("Generating sheet", &e),
                    Err(_) => {}
                }
            }
        }
    }

    fn handle_top_bar(&mut self, ctx: &egui::Context, action: TopBarAction) {
        if let TopBarAction::Navigate(_) = action {
            self.inline_error = None;
        }
        match action {
            TopBarAction::Navigate(Screen::Print) => self.screen = Screen::Print,
            TopBarAction::Navigate(_) => {
                self.screen = match self.state.quiz().phase() {
                    QuizPhase::Idle => Screen::LevelSelect,
                    QuizPhase::Finished => Screen::Result,
                    _ => Screen::Quiz,
                };
            }
            TopBarAction::ReloadLevels => self.reload_levels(),
            TopBarAction::OpenSettings => {
                self.modals.settings.open_settings(self.settings_data.clone());
            }
            TopBarAction::ToggleDarkMode => {
                self.settings_data.dark_mode = !self.settings_data.dark_mode;
                apply_dark_mode(ctx, self.settings_data.dark_mode);
                self.settings_data.save();
            }
        }
    }

    fn handle_level_select(&mut self, action: LevelSelectAction) {
        match action {
            LevelSelectAction::StartQuiz(level_id) => self.start_quiz(&level_id),
            LevelSelectAction::Retry => self.reload_levels(),
        }
    }

    fn handle_quiz(&mut self, action: QuizAction) {
        match action {
            QuizAction::Submit => {
                if let Some(pending) = self.state.quiz_mut().begin_submit(&self.answer_input) {
                    self.task_manager.check_answer(pending, self.settings_data.offline_check);
                }
            }
            QuizAction::Next => {
                if self.state.quiz_mut().advance() {
                    self.answer_input.clear();
                    if self.state.quiz().phase() == QuizPhase::Finished {
                        self.screen = Screen::Result;
                    }
                }
            }
            QuizAction::Quit => {
                self.state.restart_quiz();
                self.screen = Screen::LevelSelect;
            }
        }
    }

    fn handle_result(&mut self, action: ResultAction) {
        self.state.restart_quiz();
        self.screen = Screen::LevelSelect;
        if let (ResultAction::Retry, Some(level_id)) = (action, self.last_level_id.clone()) {
            self.start_quiz(&level_id);
        }
    }

    fn handle_print(&mut self, action: PrintAction) {
        let result = match action {
            PrintAction::Generate => self.generate_sheet(),
            PrintAction::Print => self.print_sheet(),
            PrintAction::SaveHtml => self.save_sheet(),
            PrintAction::LoadHistory(index) => self.state.load_from_history(index),
            PrintAction::ClearHistory => {
                self.modals.confirm_clear.ask("Clear all recent sheets?", "Clear");
                Ok(())
            }
        };

        if let Err(e) = result {
            self.report("Worksheet", e);
        }
    }

    fn generate_sheet(&mut self) -> Result<(), WordsheetError> {
        let (ticket, request) = self.state.begin_sheet()?;
        self.inline_error = None;
        self.in_flight.sheet = Some(ticket);
        self.task_manager.generate_sheet(ticket, request);
        Ok(())
    }

    /// Writes the sheet to a temp file and hands it to the system browser for printing.
    fn print_sheet(&self) -> Result<(), WordsheetError> {
        let Some(document) = self.state.document() else {
            return Ok(());
        };
        let path = std::env::temp_dir().join(PRINT_FILE);
        std::fs::write(&path, render_html(document))?;
        open::that(&path)?;
        log::info!("Opened {} for printing", path.display());
        Ok(())
    }

    fn save_sheet(&self) -> Result<(), WordsheetError> {
        let Some(document) = self.state.document() else {
            return Ok(());
        };
        let file_name = format!("{}.html", document.title);
        let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(file_name)
            .save_file()
        else {
            return Ok(());
        };
        std::fs::write(&path, render_html(document))?;
        log::info!("Saved sheet to {}", path.display());
        Ok(())
    }

    fn apply_settings(&mut self, ctx: &egui::Context, settings: SettingsData) {
        if settings.api_base_url != self.settings_data.api_base_url {
            match self.task_manager.set_api_base_url(&settings.api_base_url) {
                Ok(()) => {
                    self.settings_data = settings;
                    self.reload_levels();
                }
                Err(e) => {
                    self.modals.error.show_failure("Saving settings", &e);
                    return;
                }
            }
        } else {
            self.settings_data = settings;
        }

        self.state.set_default_range(self.settings_data.default_range);
        self.count_input = self.settings_data.default_quiz_count.to_string();
        apply_dark_mode(ctx, self.settings_data.dark_mode);
        self.settings_data.save();
    }

    fn is_waiting(&self) -> bool {
        self.in_flight.any() || self.state.quiz().is_checking()
    }
}

impl eframe::App for WordsheetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(action) = TopBar::show(
            ctx,
            self.screen,
            self.settings_data.dark_mode,
            self.in_flight.levels.is_some(),
        ) {
            self.handle_top_bar(ctx, action);
        }

        let theme = self.theme.clone();
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::LevelSelect => {
                let loading = self.in_flight.levels.is_some() || self.in_flight.quiz.is_some();
                if let Some(action) = screens::level_select::show(
                    ui,
                    &theme,
                    self.state.levels(),
                    &mut self.count_input,
                    self.inline_error.as_deref(),
                    loading,
                ) {
                    self.handle_level_select(action);
                }
            }
            Screen::Quiz => {
                if let Some(action) =
                    screens::quiz_view::show(ui, &theme, self.state.quiz(), &mut self.answer_input)
                {
                    self.handle_quiz(action);
                }
            }
            Screen::Result => match self.state.quiz().summary() {
                Some(summary) => {
                    if let Some(action) = screens::result_view::show(ui, &theme, &summary) {
                        self.handle_result(action);
                    }
                }
                None => self.screen = Screen::LevelSelect,
            },
            Screen::Print => {
                let generating = self.in_flight.sheet.is_some();
                if let Some(action) = screens::print_view::show(
                    ui,
                    &theme,
                    &mut self.state,
                    self.inline_error.as_deref(),
                    generating,
                ) {
                    self.handle_print(action);
                }
            }
        });

        self.message_overlay.show(ctx, &self.theme);
        self.modals.error.show(ctx);

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.apply_settings(ctx, settings);
        }

        if self.modals.confirm_clear.show(ctx) == Some(true) {
            if let Err(e) = self.state.clear_history() {
                self.modals.error.show_failure("Clearing history", &e);
            }
        }

        if self.is_waiting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
