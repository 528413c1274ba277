//! Difficulty presets and custom quiz settings.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;

use crate::data::QuestionBank;
use crate::error::QuizError;
use crate::session::QuizSession;

/// Highest tables offered by the settings screen.
pub const TABLE_CHOICES: std::ops::RangeInclusive<u32> = 2..=12;

/// Question amounts offered by the settings screen.
pub const QUESTION_AMOUNTS: [usize; 3] = [5, 10, 20];

/// Preset difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn highest_table(self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard => 12,
        }
    }

    pub fn question_amount(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard => 20,
        }
    }

    pub fn mascot(self) -> &'static str {
        match self {
            Difficulty::Easy => "🐸",
            Difficulty::Medium => "🦜",
            Difficulty::Hard => "🦍",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Hop on the lilypads: 5 questions from tables 2 through 5",
            Difficulty::Medium => "Soar high in the canopy: 10 questions from tables 2 through 10",
            Difficulty::Hard => "Challenge the king: 20 questions from tables 2 through 12",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QuizError::UnknownDifficulty(s.to_string()))
    }
}

/// Resolved settings for one play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    highest_table: u32,
    question_amount: usize,
    difficulty: Option<Difficulty>,
}

impl QuizSettings {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            highest_table: difficulty.highest_table(),
            question_amount: difficulty.question_amount(),
            difficulty: Some(difficulty),
        }
    }

    /// Custom settings. The amount may exceed what the bank holds; sessions clamp it.
    pub fn custom(highest_table: u32, question_amount: usize) -> Result<Self, QuizError> {
        QuestionBank::check_bound(highest_table)?;
        if question_amount == 0 {
            return Err(QuizError::InvalidQuestionCount);
        }

        Ok(Self {
            highest_table,
            question_amount,
            difficulty: None,
        })
    }

    pub fn highest_table(&self) -> u32 {
        self.highest_table
    }

    pub fn question_amount(&self) -> usize {
        self.question_amount
    }

    /// The preset these settings came from, `None` for custom settings.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn build_bank(&self) -> Result<QuestionBank, QuizError> {
        QuestionBank::build(self.highest_table)
    }

    /// Start a session over `bank`, which must have been built for these settings.
    pub fn start_session<R: Rng + ?Sized>(
        &self,
        bank: Arc<QuestionBank>,
        rng: &mut R,
    ) -> Result<QuizSession, QuizError> {
        debug_assert_eq!(bank.highest_table(), self.highest_table);
        QuizSession::start(bank, self.question_amount, rng)
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}
