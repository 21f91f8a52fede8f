pub mod app;
pub mod confirm_modal;
pub mod error_modal;
pub mod fonts;
pub mod message_overlay;
pub mod screens;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::WordsheetApp;
