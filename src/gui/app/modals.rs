use crate::gui::{
    confirm_modal::ConfirmModal,
    error_modal::ErrorModal,
    settings::SettingsModal,
};

pub struct Modals {
    pub error: ErrorModal,
    pub settings: SettingsModal,
    pub confirm_clear: ConfirmModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            error: ErrorModal::new(),
            settings: SettingsModal::new(),
            confirm_clear: ConfirmModal::new(),
        }
    }
}
