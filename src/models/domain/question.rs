use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const OPTIONS_PER_QUESTION: usize = 4;

// "A. Listen actively"
static OPTION_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-D])\. \S").expect("OPTION_LABEL_REGEX is a valid regex pattern")
});

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionRecord {
    pub fn new(prompt: &str, options: [&str; OPTIONS_PER_QUESTION], correct_answer: &str) -> Self {
        QuestionRecord {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn is_correct(&self, answer: Option<&str>) -> bool {
        answer.is_some_and(|a| a == self.correct_answer)
    }

    /// Checks the bank invariants: four options labelled A to D in order, and
    /// a correct answer that is one of them verbatim.
    pub fn validate(&self) -> AppResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Question prompt must not be empty".to_string(),
            ));
        }

        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has {} options, expected {}",
                self.prompt,
                self.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }

        for (position, option) in self.options.iter().enumerate() {
            let expected = char::from(b'A' + position as u8);
            let label = OPTION_LABEL_REGEX
                .captures(option)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().chars().next());
            if label != Some(expected) {
                return Err(AppError::ValidationError(format!(
                    "Option '{}' of question '{}' should be labelled '{}.'",
                    option, self.prompt, expected
                )));
            }
        }

        if !self.has_option(&self.correct_answer) {
            return Err(AppError::ValidationError(format!(
                "Correct answer '{}' is not one of the options of question '{}'",
                self.correct_answer, self.prompt
            )));
        }

        Ok(())
    }
}

pub fn validate_bank(questions: &[QuestionRecord]) -> AppResult<()> {
    if questions.is_empty() {
        return Err(AppError::ValidationError(
            "Question bank must contain at least one question".to_string(),
        ));
    }
    questions.iter().try_for_each(QuestionRecord::validate)
}
