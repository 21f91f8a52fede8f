pub mod level_select;
pub mod print_view;
pub mod quiz_view;
pub mod result_view;

pub use level_select::LevelSelectAction;
pub use print_view::PrintAction;
pub use quiz_view::QuizAction;
pub use result_view::ResultAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    LevelSelect,
    Quiz,
    Result,
    Print,
}

impl Screen {
    pub fn is_quiz(&self) -> bool {
        matches!(self, Screen::LevelSelect | Screen::Quiz | Screen::Result)
    }
}
