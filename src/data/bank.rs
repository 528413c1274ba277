use log::debug;
use serde::Serialize;

use crate::error::QuizError;
use crate::models::Question;

const LOWEST_TABLE: u32 = 2;
const MAX_MULTIPLIER: u32 = 10;

/// Largest bound a bank can be built for. Keeps the bank around a million
/// questions and every answer well inside `u32`.
pub const MAX_HIGHEST_TABLE: u32 = 100_000;

/// Every question that can be asked for a given highest table.
///
/// Built once and never mutated, so a bank can be shared between sessions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBank {
    highest_table: u32,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Enumerate tables `2..=highest_table` times `1..=10`, plus the
    /// 11 and 12 extras when the bound reaches them.
    pub fn build(highest_table: u32) -> Result<Self, QuizError> {
        Self::check_bound(highest_table)?;

        let mut questions: Vec<Question> = (LOWEST_TABLE..=highest_table)
            .flat_map(|table| {
                (1..=MAX_MULTIPLIER).map(move |multiplier| Question::new(table, multiplier))
            })
            .collect();

        if highest_table >= 11 {
            questions.push(Question::new(11, 11));
        }
        if highest_table == 12 {
            questions.push(Question::new(12, 11));
            questions.push(Question::new(12, 12));
        }

        debug!(
            "built question bank for tables 2..={} with {} questions",
            highest_table,
            questions.len()
        );

        Ok(Self {
            highest_table,
            questions,
        })
    }

    /// Fails with `InvalidBound` unless `2 <= highest_table <= MAX_HIGHEST_TABLE`.
    pub fn check_bound(highest_table: u32) -> Result<(), QuizError> {
        if !(LOWEST_TABLE..=MAX_HIGHEST_TABLE).contains(&highest_table) {
            return Err(QuizError::InvalidBound { highest_table });
        }
        Ok(())
    }

    pub fn highest_table(&self) -> u32 {
        self.highest_table
    }

    pub fn size(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions in generation order.
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    /// The largest answer in the bank.
    pub fn max_answer(&self) -> u32 {
        self.questions.iter().map(Question::answer).max().unwrap_or(0)
    }

    pub fn get(&self, prompt: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.prompt() == prompt)
    }

    /// Serialize the bank as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, QuizError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_bank_size() {
        for highest_table in 2..=10 {
            let bank = QuestionBank::build(highest_table).unwrap();
            assert_eq!(bank.size(), (highest_table as usize - 1) * 10);
        }
        assert_eq!(QuestionBank::build(11).unwrap().size(), 101);
        assert_eq!(QuestionBank::build(12).unwrap().size(), 113);
    }

    #[test]
    fn test_prompts_are_unique() {
        for highest_table in 2..=15 {
            let bank = QuestionBank::build(highest_table).unwrap();
            let prompts: HashSet<&str> = bank.all().iter().map(Question::prompt).collect();
            assert_eq!(prompts.len(), bank.size());
        }
    }

    #[test]
    fn test_answers_match_prompts() {
        let bank = QuestionBank::build(12).unwrap();
        for question in bank.all() {
            let expected = format!("What is {} * {}?", question.table(), question.multiplier());
            assert_eq!(question.prompt(), expected);
            assert_eq!(question.answer(), question.table() * question.multiplier());
        }
    }

    #[test]
    fn test_special_cases() {
        let bank = QuestionBank::build(12).unwrap();
        assert_eq!(bank.get("What is 12 * 12?").map(Question::answer), Some(144));
        assert_eq!(bank.get("What is 12 * 11?").map(Question::answer), Some(132));
        assert_eq!(bank.get("What is 11 * 11?").map(Question::answer), Some(121));

        let bank = QuestionBank::build(11).unwrap();
        assert!(bank.get("What is 11 * 11?").is_some());
        assert!(bank.get("What is 12 * 12?").is_none());

        let bank = QuestionBank::build(10).unwrap();
        assert!(bank.get("What is 11 * 11?").is_none());
        assert!(bank.get("What is 10 * 10?").is_some());
        assert!(bank.get("What is 1 * 5?").is_none());
    }

    #[test]
    fn test_invalid_bound() {
        assert!(matches!(
            QuestionBank::build(1),
            Err(QuizError::InvalidBound { highest_table: 1 })
        ));
        assert!(QuestionBank::build(0).is_err());
        assert!(QuestionBank::build(2).is_ok());
    }

    #[test]
    fn test_oversized_bound_is_rejected() {
        assert!(matches!(
            QuestionBank::build(MAX_HIGHEST_TABLE + 1),
            Err(QuizError::InvalidBound { .. })
        ));
        assert!(matches!(
            QuestionBank::build(u32::MAX),
            Err(QuizError::InvalidBound { highest_table: u32::MAX })
        ));
    }

    #[test]
    fn test_max_answer() {
        assert_eq!(QuestionBank::build(5).unwrap().max_answer(), 50);
        assert_eq!(QuestionBank::build(12).unwrap().max_answer(), 144);
        assert_eq!(QuestionBank::build(5000).unwrap().max_answer(), 50_000);
    }

    #[test]
    fn test_bank_json() {
        let json = QuestionBank::build(2).unwrap().to_json().unwrap();
        assert!(json.contains("\"highest_table\": 2"));
        assert!(json.contains("What is 2 * 10?"));
    }
}
