pub mod errors;
pub mod models;
pub mod range;
pub mod state;
pub mod tasks;

pub use errors::WordsheetError;
pub use models::{
    HistoryEntry,
    Level,
    PresentationMode,
    Range,
    SheetRow,
    WordEntry,
    WrongAnswer,
};
pub use range::RangeSelector;
pub use state::{
    AppState,
    PrintForm,
    Ticket,
};
