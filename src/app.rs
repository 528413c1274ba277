use std::sync::Arc;

use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::QuestionBank;
use crate::error::QuizError;
use crate::models::{AppState, Difficulty, QUESTION_AMOUNTS, QuizSettings, TABLE_CHOICES};
use crate::session::{QuizSession, SessionState};

/// Row focused on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Preset,
    HighestTable,
    QuestionAmount,
}

impl SettingsField {
    fn next(self) -> Self {
        match self {
            SettingsField::Preset => SettingsField::HighestTable,
            SettingsField::HighestTable => SettingsField::QuestionAmount,
            SettingsField::QuestionAmount => SettingsField::Preset,
        }
    }

    fn previous(self) -> Self {
        match self {
            SettingsField::Preset => SettingsField::QuestionAmount,
            SettingsField::HighestTable => SettingsField::Preset,
            SettingsField::QuestionAmount => SettingsField::HighestTable,
        }
    }
}

pub struct App {
    pub state: AppState,
    settings: QuizSettings,
    focus: SettingsField,
    bank: Option<Arc<QuestionBank>>,
    session: Option<QuizSession>,
    input: String,
    result_scroll: usize,
    rng: StdRng,
}

impl App {
    pub fn new(settings: QuizSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// An app whose draw order is fully determined by `seed`.
    pub fn with_seed(settings: QuizSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: QuizSettings, rng: StdRng) -> Self {
        Self {
            state: AppState::Settings,
            settings,
            focus: SettingsField::Preset,
            bank: None,
            session: None,
            input: String::new(),
            result_scroll: 0,
            rng,
        }
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn focus(&self) -> SettingsField {
        self.focus
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Move the focused setting one step forward (`forward`) or back.
    ///
    /// Presets cycle easy, medium, hard, custom. Touching the table or amount
    /// switches to custom settings.
    pub fn adjust_setting(&mut self, forward: bool) {
        let settings = match self.focus {
            SettingsField::Preset => self.cycle_preset(forward),
            SettingsField::HighestTable => {
                let choices: Vec<u32> = TABLE_CHOICES.collect();
                let current = nearest_choice(&choices, self.settings.highest_table());
                let table = step_value(&choices, current, forward);
                QuizSettings::custom(table, self.settings.question_amount())
            }
            SettingsField::QuestionAmount => {
                let current = nearest_choice(&QUESTION_AMOUNTS, self.settings.question_amount());
                let amount = step_value(&QUESTION_AMOUNTS, current, forward);
                QuizSettings::custom(self.settings.highest_table(), amount)
            }
        };

        match settings {
            Ok(settings) => self.settings = settings,
            Err(err) => warn!("ignoring invalid settings: {}", err),
        }
    }

    fn cycle_preset(&self, forward: bool) -> Result<QuizSettings, QuizError> {
        let mut choices: Vec<Option<Difficulty>> = Difficulty::ALL.into_iter().map(Some).collect();
        choices.push(None);

        let current = self.settings.difficulty();
        match step_value(&choices, current, forward) {
            Some(difficulty) => Ok(QuizSettings::from_difficulty(difficulty)),
            None => QuizSettings::custom(self.settings.highest_table(), self.settings.question_amount()),
        }
    }

    /// Start a new session with the current settings and draw its first question.
    ///
    /// The bank is rebuilt only when the highest table changed.
    pub fn start_quiz(&mut self) -> Result<(), QuizError> {
        let bank = match &self.bank {
            Some(bank) if bank.highest_table() == self.settings.highest_table() => Arc::clone(bank),
            _ => {
                let bank = Arc::new(self.settings.build_bank()?);
                self.bank = Some(Arc::clone(&bank));
                bank
            }
        };

        let mut session = self.settings.start_session(bank, &mut self.rng)?;
        session.next_question();

        self.session = Some(session);
        self.input.clear();
        self.result_scroll = 0;
        self.state = AppState::Quiz;
        Ok(())
    }

    pub fn push_digit(&mut self, digit: char) {
        let has_room = self.input.len() < self.max_input_digits();
        if digit.is_ascii_digit() && has_room && self.awaiting_answer() {
            self.input.push(digit);
        }
    }

    /// Digits needed for the largest answer of the current bank.
    pub fn max_input_digits(&self) -> usize {
        let max_answer = self
            .session
            .as_ref()
            .map_or(0, |session| session.bank().max_answer());
        max_answer.to_string().len()
    }

    pub fn pop_digit(&mut self) {
        self.input.pop();
    }

    /// Enter on the quiz screen: submit the typed answer, or advance once
    /// the current question shows its feedback.
    pub fn confirm(&mut self) -> Result<(), QuizError> {
        let Some(session) = self.session.as_mut() else {
            return Err(QuizError::NoActiveQuestion);
        };

        match session.state() {
            SessionState::AwaitingAnswer => {
                if let Ok(value) = self.input.parse::<u32>() {
                    session.submit_answer(value)?;
                    self.input.clear();
                }
            }
            SessionState::Answered { .. } => {
                session.next_question();
            }
            SessionState::Complete => {
                self.state = AppState::Result;
            }
            SessionState::Idle => {
                session.next_question();
            }
        }

        Ok(())
    }

    fn awaiting_answer(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.state() == SessionState::AwaitingAnswer)
    }

    pub fn scroll_results_down(&mut self) {
        let answered = self.session.as_ref().map_or(0, |session| session.history().len());
        if self.result_scroll + 1 < answered {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Back to the settings screen, dropping the current session.
    pub fn restart(&mut self) {
        self.state = AppState::Settings;
        self.session = None;
        self.input.clear();
        self.result_scroll = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(QuizSettings::default())
    }
}

/// The choice closest to `current`, for values set outside the offered choices.
fn nearest_choice<T>(choices: &[T], current: T) -> T
where
    T: Copy + Ord + std::ops::Sub<Output = T>,
{
    choices
        .iter()
        .copied()
        .min_by_key(|choice| if *choice > current { *choice - current } else { current - *choice })
        .unwrap_or(current)
}

fn step_value<T: Copy + PartialEq>(choices: &[T], current: T, forward: bool) -> T {
    let position = choices.iter().position(|choice| *choice == current);
    let index = match (position, forward) {
        (Some(index), true) => (index + 1) % choices.len(),
        (Some(index), false) => (index + choices.len() - 1) % choices.len(),
        (None, _) => 0,
    };
    choices[index]
}
