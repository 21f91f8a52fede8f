use std::error::Error;

use eframe::egui;
use wordsheet::{
    core::tasks::TaskManager,
    gui::{
        settings::{
            data::DEFAULT_API_URL,
            SettingsData,
        },
        WordsheetApp,
    },
    history::HistoryStore,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_data = SettingsData::load();
    let history = HistoryStore::open_default();

    let task_manager = match TaskManager::connect(&settings_data.api_base_url) {
        Ok(task_manager) => task_manager,
        Err(e) => {
            log::error!("{e}; falling back to {DEFAULT_API_URL}");
            TaskManager::connect(DEFAULT_API_URL)?
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wordsheet")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wordsheet",
        options,
        Box::new(move |cc| Ok(Box::new(WordsheetApp::new(cc, settings_data, history, task_manager)))),
    )?;

    Ok(())
}
