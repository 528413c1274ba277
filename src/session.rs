//! Quiz session: draws questions without repetition and keeps the score.
//!
//! The draw order is shuffled once when the session starts and truncated to
//! the target count, so every draw is a single step forward and a session
//! can never run out of unused questions before it is complete.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::QuestionBank;
use crate::error::QuizError;
use crate::models::Question;

/// Feedback for a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: u32,
}

/// Record of the first answer given to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub prompt: String,
    pub given: u32,
    pub correct_answer: u32,
    pub correct: bool,
}

/// Final score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No question drawn yet.
    Idle,
    /// A question is waiting for an answer.
    AwaitingAnswer,
    /// The current question was answered; draw the next one to continue.
    Answered { correct: bool },
    /// All questions were drawn and answered.
    Complete,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    target_count: usize,
    order: Vec<usize>,
    asked: HashSet<String>,
    score: usize,
    current: Option<usize>,
    current_answer: Option<AnswerResult>,
    question_index: usize,
    history: Vec<AnswerRecord>,
}

impl QuizSession {
    /// Start a session over `bank`. A `target_count` larger than the bank is
    /// clamped to the bank size.
    pub fn start<R: Rng + ?Sized>(
        bank: Arc<QuestionBank>,
        target_count: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if target_count == 0 {
            return Err(QuizError::InvalidQuestionCount);
        }

        let clamped = target_count.min(bank.size());
        if clamped < target_count {
            debug!(
                "requested {} questions but bank only holds {}, clamping",
                target_count,
                bank.size()
            );
        }

        let mut order: Vec<usize> = (0..bank.size()).collect();
        order.shuffle(rng);
        order.truncate(clamped);

        info!(
            "starting session with {} questions from tables 2..={}",
            clamped,
            bank.highest_table()
        );

        Ok(Self {
            bank,
            target_count: clamped,
            order,
            asked: HashSet::with_capacity(clamped),
            score: 0,
            current: None,
            current_answer: None,
            question_index: 0,
            history: Vec::with_capacity(clamped),
        })
    }

    /// Draw the next question, or `None` once the session is complete.
    pub fn next_question(&mut self) -> Option<&Question> {
        if self.is_complete() {
            self.current = None;
            self.current_answer = None;
            return None;
        }

        let mut drawn = None;
        while self.question_index < self.order.len() {
            let index = self.order[self.question_index];
            self.question_index += 1;
            if self.asked.insert(self.bank.all()[index].prompt().to_string()) {
                drawn = Some(index);
                break;
            }
        }

        self.current = drawn;
        self.current_answer = None;

        let question = &self.bank.all()[drawn?];
        debug!(
            "drew question {}/{}: {}",
            self.asked.len(),
            self.target_count,
            question.prompt()
        );
        Some(question)
    }

    /// Check `value` against the current question.
    ///
    /// Only the first answer to a question counts towards the score.
    pub fn submit_answer(&mut self, value: u32) -> Result<AnswerResult, QuizError> {
        let question = self
            .current
            .map(|index| &self.bank.all()[index])
            .ok_or(QuizError::NoActiveQuestion)?;

        let correct = question.is_correct(value);
        let result = AnswerResult {
            correct,
            correct_answer: question.answer(),
        };

        if self.current_answer.is_none() {
            if correct {
                self.score += 1;
            }
            self.history.push(AnswerRecord {
                prompt: question.prompt().to_string(),
                given: value,
                correct_answer: question.answer(),
                correct,
            });
            self.current_answer = Some(result);

            if self.is_complete() {
                info!("session complete: {}/{}", self.score, self.target_count);
            }
        }

        Ok(result)
    }

    pub fn is_complete(&self) -> bool {
        self.asked.len() >= self.target_count
    }

    pub fn summary(&self) -> Summary {
        Summary {
            score: self.score,
            total: self.target_count,
        }
    }

    pub fn state(&self) -> SessionState {
        match (self.current, self.current_answer) {
            (None, _) if self.question_index == 0 => SessionState::Idle,
            (None, _) => SessionState::Complete,
            (Some(_), None) => SessionState::AwaitingAnswer,
            (Some(_), Some(_)) if self.is_complete() => SessionState::Complete,
            (Some(_), Some(result)) => SessionState::Answered {
                correct: result.correct,
            },
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.map(|index| &self.bank.all()[index])
    }

    /// Feedback for the current question, once it has been answered.
    pub fn current_answer(&self) -> Option<AnswerResult> {
        self.current_answer
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Number of questions presented so far.
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn remaining(&self) -> usize {
        self.target_count - self.asked.len()
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(highest_table: u32, target_count: usize, seed: u64) -> QuizSession {
        let bank = Arc::new(QuestionBank::build(highest_table).unwrap());
        let mut rng = StdRng::seed_from_u64(seed);
        QuizSession::start(bank, target_count, &mut rng).unwrap()
    }

    fn draw_all(session: &mut QuizSession) -> Vec<String> {
        let mut prompts = Vec::new();
        while let Some(question) = session.next_question() {
            prompts.push(question.prompt().to_string());
        }
        prompts
    }

    #[test]
    fn test_no_repeats_within_session() {
        let mut session = session(12, 113, 1);
        let prompts = draw_all(&mut session);

        assert_eq!(prompts.len(), 113);
        let unique: HashSet<&String> = prompts.iter().collect();
        assert_eq!(unique.len(), prompts.len());
    }

    #[test]
    fn test_completion_after_target_draws() {
        let mut session = session(5, 7, 2);

        for drawn in 1..=7 {
            assert!(!session.is_complete());
            assert!(session.next_question().is_some());
            assert_eq!(session.question_index(), drawn);
        }

        assert!(session.is_complete());
        assert!(session.next_question().is_none());
        assert!(session.next_question().is_none());
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_target_count_is_clamped() {
        let mut session = session(2, 50, 3);
        assert_eq!(session.target_count(), 10);
        assert_eq!(draw_all(&mut session).len(), 10);
        assert_eq!(session.summary().total, 10);
    }

    #[test]
    fn test_zero_target_count_rejected() {
        let bank = Arc::new(QuestionBank::build(5).unwrap());
        let mut rng = StdRng::seed_from_u64(4);
        assert!(matches!(
            QuizSession::start(bank, 0, &mut rng),
            Err(QuizError::InvalidQuestionCount)
        ));
    }

    #[test]
    fn test_score_counts_correct_answers() {
        let mut session = session(9, 6, 5);

        let mut expected = 0;
        for round in 0..6 {
            let answer = session.next_question().unwrap().answer();
            let given = if round % 2 == 0 { answer } else { answer + 1 };
            let result = session.submit_answer(given).unwrap();

            assert_eq!(result.correct, round % 2 == 0);
            assert_eq!(result.correct_answer, answer);
            if result.correct {
                expected += 1;
            }
            assert_eq!(session.score(), expected);
        }

        assert_eq!(session.summary(), Summary { score: 3, total: 6 });
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn test_resubmission_does_not_inflate_score() {
        let mut session = session(5, 2, 6);
        let answer = session.next_question().unwrap().answer();

        assert!(session.submit_answer(answer).unwrap().correct);
        assert!(session.submit_answer(answer).unwrap().correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_submit_without_question() {
        let mut session = session(5, 1, 7);
        assert!(matches!(
            session.submit_answer(4),
            Err(QuizError::NoActiveQuestion)
        ));

        session.next_question();
        session.submit_answer(4).unwrap();
        assert!(session.next_question().is_none());
        assert!(matches!(
            session.submit_answer(4),
            Err(QuizError::NoActiveQuestion)
        ));
    }

    #[test]
    fn test_state_transitions() {
        let mut session = session(3, 2, 8);
        assert_eq!(session.state(), SessionState::Idle);

        let answer = session.next_question().unwrap().answer();
        assert_eq!(session.state(), SessionState::AwaitingAnswer);

        session.submit_answer(answer).unwrap();
        assert_eq!(session.state(), SessionState::Answered { correct: true });

        session.next_question();
        assert_eq!(session.state(), SessionState::AwaitingAnswer);

        session.submit_answer(0).unwrap();
        assert_eq!(session.state(), SessionState::Complete);

        assert!(session.next_question().is_none());
        assert_eq!(session.state(), SessionState::Complete);
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let first = draw_all(&mut session(12, 20, 42));
        let second = draw_all(&mut session(12, 20, 42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_bank_is_shared_between_sessions() {
        let bank = Arc::new(QuestionBank::build(6).unwrap());
        let mut rng = StdRng::seed_from_u64(9);

        let mut first = QuizSession::start(Arc::clone(&bank), 5, &mut rng).unwrap();
        let mut second = QuizSession::start(Arc::clone(&bank), 5, &mut rng).unwrap();
        assert_eq!(draw_all(&mut first).len(), 5);
        assert_eq!(draw_all(&mut second).len(), 5);
        assert_eq!(Arc::strong_count(&bank), 3);
    }
}
