use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{QuestionId, SlugError};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Authored question id: inline checks use strings, quiz banks use numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuestionIdDraft {
    Text(String),
    Number(u64),
}

/// Unvalidated question record as it appears in course data files.
///
/// The authored field names for the correct option diverge between the two
/// widgets (`correctIndex` for inline checks, `correctAnswer` for quizzes);
/// both map onto the single `correct` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub id: QuestionIdDraft,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correctIndex", alias = "correctAnswer")]
    pub correct: usize,
    pub explanation: String,
}

/// One multiple-choice question: prompt, ordered options, the index of the
/// correct option, and the explanation revealed after answering.
///
/// Option order is significant and is never reordered or shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionValidationError {
    #[error("invalid question id: {0}")]
    Id(#[source] SlugError),

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {len}")]
    NotEnoughOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct option index {correct} is out of range for {len} options")]
    CorrectOutOfRange { correct: usize, len: usize },

    #[error("question explanation cannot be empty")]
    EmptyExplanation,
}

//
// ─── QUESTION DRAFT IMPL ───────────────────────────────────────────────────────
//

impl QuestionIdDraft {
    fn validate(self) -> Result<QuestionId, QuestionValidationError> {
        match self {
            Self::Text(text) => QuestionId::new(text).map_err(QuestionValidationError::Id),
            Self::Number(value) => Ok(QuestionId::from_number(value)),
        }
    }
}

impl QuestionDraft {
    /// Validate an authored question record into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionValidationError` when the prompt or explanation is
    /// empty, fewer than two options are given, any option is blank, or the
    /// correct index does not point into the option list.
    pub fn validate(self) -> Result<Question, QuestionValidationError> {
        let id = self.id.validate()?;

        if self.prompt.trim().is_empty() {
            return Err(QuestionValidationError::EmptyPrompt);
        }

        if self.options.len() < 2 {
            return Err(QuestionValidationError::NotEnoughOptions {
                len: self.options.len(),
            });
        }
        for (index, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionValidationError::EmptyOption { index });
            }
        }

        if self.correct >= self.options.len() {
            return Err(QuestionValidationError::CorrectOutOfRange {
                correct: self.correct,
                len: self.options.len(),
            });
        }

        if self.explanation.trim().is_empty() {
            return Err(QuestionValidationError::EmptyExplanation);
        }

        Ok(Question {
            id,
            prompt: self.prompt,
            options: self.options,
            correct: self.correct,
            explanation: self.explanation,
        })
    }
}

//
// ─── QUESTION IMPL ─────────────────────────────────────────────────────────────
//

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in authored order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Zero-based index of the correct option.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            id: QuestionIdDraft::Text("wah-definition".to_string()),
            prompt: "What counts as working at height?".to_string(),
            options: vec![
                "Only work above 2 metres".to_string(),
                "Any place a person could fall far enough to be injured".to_string(),
                "Only work on ladders".to_string(),
            ],
            correct: 1,
            explanation: "The regulations set no minimum height threshold.".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let question = draft().validate().unwrap();
        assert_eq!(question.id().as_str(), "wah-definition");
        assert_eq!(question.correct(), 1);
        assert_eq!(question.option_count(), 3);
    }

    #[test]
    fn numeric_id_canonicalizes_to_text() {
        let mut d = draft();
        d.id = QuestionIdDraft::Number(4);
        let question = d.validate().unwrap();
        assert_eq!(question.id().as_str(), "4");
    }

    #[test]
    fn empty_prompt_fails() {
        let mut d = draft();
        d.prompt = "  ".to_string();
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionValidationError::EmptyPrompt
        );
    }

    #[test]
    fn single_option_fails() {
        let mut d = draft();
        d.options.truncate(1);
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionValidationError::NotEnoughOptions { len: 1 }
        );
    }

    #[test]
    fn blank_option_fails() {
        let mut d = draft();
        d.options[2] = String::new();
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionValidationError::EmptyOption { index: 2 }
        );
    }

    #[test]
    fn correct_out_of_range_fails() {
        let mut d = draft();
        d.correct = 3;
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionValidationError::CorrectOutOfRange { correct: 3, len: 3 }
        );
    }

    #[test]
    fn options_keep_authored_order() {
        let question = draft().validate().unwrap();
        assert_eq!(question.options()[0], "Only work above 2 metres");
        assert_eq!(question.options()[2], "Only work on ladders");
    }

    #[test]
    fn draft_accepts_both_authored_field_spellings() {
        let inline: QuestionDraft = serde_json::from_str(
            r#"{
                "id": "check-1",
                "question": "Pick one",
                "options": ["a", "b"],
                "correctIndex": 0,
                "explanation": "because"
            }"#,
        )
        .unwrap();
        let quiz: QuestionDraft = serde_json::from_str(
            r#"{
                "id": 1,
                "question": "Pick one",
                "options": ["a", "b"],
                "correctAnswer": 1,
                "explanation": "because"
            }"#,
        )
        .unwrap();

        assert_eq!(inline.correct, 0);
        assert_eq!(quiz.correct, 1);
    }
}
