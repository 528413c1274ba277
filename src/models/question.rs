use serde::Serialize;

/// A single multiplication question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    answer: u32,
    table: u32,
    multiplier: u32,
}

impl Question {
    pub fn new(table: u32, multiplier: u32) -> Self {
        Self {
            prompt: format!("What is {} * {}?", table, multiplier),
            answer: table * multiplier,
            table,
            multiplier,
        }
    }

    /// The text shown to the player, also the key that identifies the question.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer(&self) -> u32 {
        self.answer
    }

    pub fn table(&self) -> u32 {
        self.table
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn is_correct(&self, value: u32) -> bool {
        self.answer == value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_format() {
        let question = Question::new(7, 8);
        assert_eq!(question.prompt(), "What is 7 * 8?");
        assert_eq!(question.answer(), 56);
        assert!(question.is_correct(56));
        assert!(!question.is_correct(54));
    }

    #[test]
    fn test_question_serialization() {
        let json = serde_json::to_string(&Question::new(3, 4)).unwrap();
        assert!(json.contains("\"prompt\":\"What is 3 * 4?\""));
        assert!(json.contains("\"answer\":12"));
    }
}
