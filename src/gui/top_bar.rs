use eframe::egui::{
    self,
    containers,
};

use crate::gui::screens::Screen;

pub enum TopBarAction {
    Navigate(Screen),
    ReloadLevels,
    OpenSettings,
    ToggleDarkMode,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        current: Screen,
        dark_mode: bool,
        levels_loading: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                let theme_icon = if dark_mode { "🌙" } else { "☀" };
                if ui.button(theme_icon).on_hover_text("Toggle dark mode").clicked() {
                    action = Some(TopBarAction::ToggleDarkMode);
                }

                ui.menu_button("File", |ui| {
                    if ui.add_enabled(!levels_loading, egui::Button::new("Reload Levels")).clicked()
                    {
                        action = Some(TopBarAction::ReloadLevels);
                    }
                    if ui.button("Settings").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();

                if ui.selectable_label(current.is_quiz(), "Quiz").clicked() && !current.is_quiz() {
                    action = Some(TopBarAction::Navigate(Screen::LevelSelect));
                }
                if ui.selectable_label(current == Screen::Print, "Print").clicked() {
                    action = Some(TopBarAction::Navigate(Screen::Print));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if levels_loading {
                        ui.add(egui::Spinner::new().size(12.0));
                        ui.small("Loading levels");
                    }
                });
            });
        });

        action
    }
}
