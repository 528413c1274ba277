mod difficulty;
mod question;

pub use difficulty::{Difficulty, QUESTION_AMOUNTS, QuizSettings, TABLE_CHOICES};
pub use question::Question;

/// Screen the terminal host is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Settings,
    Quiz,
    Result,
}
