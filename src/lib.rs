//! # multipractice
//!
//! Multiplication table practice: a question bank, a non-repeating quiz
//! session, and a terminal front end that drives them.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use multipractice::{QuestionBank, QuizError, QuizSession};
//!
//! fn main() -> Result<(), QuizError> {
//!     let bank = Arc::new(QuestionBank::build(5)?);
//!     let mut session = QuizSession::start(bank, 5, &mut rand::thread_rng())?;
//!
//!     while let Some(question) = session.next_question() {
//!         let answer = question.answer();
//!         session.submit_answer(answer)?;
//!     }
//!
//!     assert_eq!(session.summary().score, 5);
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod error;
mod models;
mod session;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::error;

pub use app::{App, SettingsField};
pub use data::{MAX_HIGHEST_TABLE, QuestionBank};
pub use error::QuizError;
pub use models::{AppState, Difficulty, QUESTION_AMOUNTS, Question, QuizSettings, TABLE_CHOICES};
pub use session::{AnswerRecord, AnswerResult, QuizSession, SessionState, Summary};

/// A quiz that can be played in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(settings: QuizSettings) -> Self {
        Self {
            app: App::new(settings),
        }
    }

    /// A quiz whose questions are drawn in an order fixed by `seed`.
    pub fn with_seed(settings: QuizSettings, seed: u64) -> Self {
        Self {
            app: App::with_seed(settings, seed),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Settings => handle_settings_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_settings_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.focus_previous();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.focus_next();
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.adjust_setting(false);
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.adjust_setting(true);
            false
        }
        KeyCode::Enter => {
            if let Err(e) = app.start_quiz() {
                error!("could not start quiz: {}", e);
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.push_digit(c);
            false
        }
        KeyCode::Backspace => {
            app.pop_digit();
            false
        }
        KeyCode::Enter => {
            if let Err(e) = app.confirm() {
                error!("could not submit answer: {}", e);
            }
            false
        }
        KeyCode::Esc => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
