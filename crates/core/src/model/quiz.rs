use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::answer::{AnswerError, AnswerSlot};
use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionValidationError};

//
// ─── QUIZ TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated end-of-section quiz as authored in course data files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

/// An end-of-section assessment: a title and an ordered question sequence.
///
/// Question order is the presentation order and is fixed. A quiz with zero
/// questions is degenerate but valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    questions: Vec<Question>,
}

//
// ─── QUIZ VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizValidationError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("invalid question {index}: {source}")]
    Question {
        index: usize,
        source: QuestionValidationError,
    },

    #[error("duplicate question id: {id}")]
    DuplicateId { id: QuestionId },
}

impl QuizDraft {
    /// Validate an authored quiz into a `Quiz`.
    ///
    /// # Errors
    ///
    /// Returns `QuizValidationError` for an empty title, any invalid
    /// question, or question ids repeated within the quiz.
    pub fn validate(self) -> Result<Quiz, QuizValidationError> {
        if self.title.trim().is_empty() {
            return Err(QuizValidationError::EmptyTitle);
        }

        let mut questions = Vec::with_capacity(self.questions.len());
        let mut seen = HashSet::new();
        for (index, draft) in self.questions.into_iter().enumerate() {
            let question = draft
                .validate()
                .map_err(|source| QuizValidationError::Question { index, source })?;
            if !seen.insert(question.id().clone()) {
                return Err(QuizValidationError::DuplicateId {
                    id: question.id().clone(),
                });
            }
            questions.push(question);
        }

        Ok(Quiz {
            title: self.title,
            questions,
        })
    }
}

impl Quiz {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Questions in authored order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

//
// ─── QUIZ SESSION STATE ────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question index {index} is out of range for {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// Ephemeral answer state for one quiz instance.
///
/// Questions may be answered in any order. Each question locks on its
/// first answer; score and completion are derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    quiz: Quiz,
    slots: Vec<AnswerSlot>,
}

impl QuizState {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        let slots = vec![AnswerSlot::default(); quiz.len()];
        Self { quiz, slots }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Record an answer for one question and return whether it was correct.
    ///
    /// Other questions are unaffected; this question transitions to its
    /// terminal answered state.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::QuestionOutOfRange` for a bad question index and
    /// `QuizError::Answer` for a bad option index or a repeat answer. State
    /// is untouched on every error path.
    pub fn answer(&mut self, question_index: usize, option_index: usize) -> Result<bool, QuizError> {
        let len = self.quiz.len();
        let Some(question) = self.quiz.questions.get(question_index) else {
            return Err(QuizError::QuestionOutOfRange {
                index: question_index,
                len,
            });
        };

        self.slots[question_index].record(option_index, question.option_count())?;
        Ok(option_index == question.correct())
    }

    #[must_use]
    pub fn selected(&self, question_index: usize) -> Option<usize> {
        self.slots.get(question_index).and_then(AnswerSlot::selected)
    }

    #[must_use]
    pub fn is_answered(&self, question_index: usize) -> bool {
        self.slots
            .get(question_index)
            .is_some_and(AnswerSlot::is_answered)
    }

    /// `None` until that question is answered.
    #[must_use]
    pub fn is_correct(&self, question_index: usize) -> Option<bool> {
        let question = self.quiz.questions.get(question_index)?;
        self.selected(question_index)
            .map(|selected| selected == question.correct())
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_answered()).count()
    }

    /// Count of answered questions where the selection matches the correct
    /// option.
    #[must_use]
    pub fn score(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .zip(&self.slots)
            .filter(|(question, slot)| slot.selected() == Some(question.correct()))
            .count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.quiz.len()
    }

    /// True once every question has a recorded selection. Vacuously true
    /// for a quiz with zero questions.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.quiz.len()
    }

    /// Explicit retry transition: every question back to unanswered.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::QuestionIdDraft;

    fn question_draft(id: u64, correct: usize) -> QuestionDraft {
        QuestionDraft {
            id: QuestionIdDraft::Number(id),
            prompt: format!("Question {id}"),
            options: vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            correct,
            explanation: "Why".to_string(),
        }
    }

    fn quiz(corrects: &[usize]) -> Quiz {
        QuizDraft {
            title: "Knowledge Check".to_string(),
            questions: corrects
                .iter()
                .enumerate()
                .map(|(index, correct)| question_draft(index as u64 + 1, *correct))
                .collect(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn duplicate_question_ids_fail_validation() {
        let draft = QuizDraft {
            title: "Knowledge Check".to_string(),
            questions: vec![question_draft(1, 0), question_draft(1, 1)],
        };

        let err = draft.validate().unwrap_err();

        assert_eq!(
            err,
            QuizValidationError::DuplicateId {
                id: QuestionId::from_number(1)
            }
        );
    }

    #[test]
    fn empty_title_fails_validation() {
        let draft = QuizDraft {
            title: " ".to_string(),
            questions: vec![],
        };
        assert_eq!(draft.validate().unwrap_err(), QuizValidationError::EmptyTitle);
    }

    #[test]
    fn score_counts_only_correct_answers() {
        // correct answers are [1, 0, 3]; the reader answers [1, 1, 3]
        let mut state = QuizState::new(quiz(&[1, 0, 3]));

        assert!(state.answer(0, 1).unwrap());
        assert!(!state.answer(1, 1).unwrap());
        assert!(state.answer(2, 3).unwrap());

        assert_eq!(state.score(), 2);
        assert_eq!(state.answered_count(), 3);
        assert!(state.is_complete());
    }

    #[test]
    fn questions_lock_independently() {
        let mut state = QuizState::new(quiz(&[0, 1, 2]));

        state.answer(1, 1).unwrap();

        assert!(!state.is_answered(0));
        assert!(state.is_answered(1));
        assert!(!state.is_answered(2));
        assert_eq!(state.is_correct(1), Some(true));
        assert_eq!(state.is_correct(0), None);

        // locking question 1 does not block the others
        state.answer(0, 3).unwrap();
        assert_eq!(state.is_correct(0), Some(false));
        assert_eq!(state.selected(1), Some(1));
    }

    #[test]
    fn answers_accepted_in_any_order() {
        let mut state = QuizState::new(quiz(&[0, 0, 0]));

        state.answer(2, 0).unwrap();
        state.answer(0, 0).unwrap();
        state.answer(1, 0).unwrap();

        assert_eq!(state.score(), 3);
        assert!(state.is_complete());
    }

    #[test]
    fn per_question_finality_is_immediate() {
        let mut state = QuizState::new(quiz(&[2, 2]));
        state.answer(0, 2).unwrap();

        let err = state.answer(0, 1).unwrap_err();

        assert_eq!(err, QuizError::Answer(AnswerError::AlreadyAnswered));
        assert_eq!(state.selected(0), Some(2));
        // overall completion is irrelevant to finality
        assert!(!state.is_complete());
    }

    #[test]
    fn bad_indices_leave_state_untouched() {
        let mut state = QuizState::new(quiz(&[0]));

        assert_eq!(
            state.answer(5, 0).unwrap_err(),
            QuizError::QuestionOutOfRange { index: 5, len: 1 }
        );
        assert_eq!(
            state.answer(0, 9).unwrap_err(),
            QuizError::Answer(AnswerError::OutOfRange { index: 9, len: 4 })
        );
        assert_eq!(state.answered_count(), 0);
    }

    #[test]
    fn empty_quiz_is_vacuously_complete() {
        let state = QuizState::new(quiz(&[]));

        assert!(state.is_complete());
        assert_eq!(state.answered_count(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.total(), 0);
    }

    #[test]
    fn incomplete_until_every_question_is_answered() {
        let mut state = QuizState::new(quiz(&[0, 1]));

        state.answer(0, 0).unwrap();
        assert!(!state.is_complete());

        state.answer(1, 0).unwrap();
        assert!(state.is_complete());
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn reset_unlocks_every_question() {
        let mut state = QuizState::new(quiz(&[0, 1]));
        state.answer(0, 0).unwrap();
        state.answer(1, 1).unwrap();

        state.reset();

        assert_eq!(state.answered_count(), 0);
        assert!(!state.is_complete());
        state.answer(0, 1).unwrap();
        assert_eq!(state.score(), 0);
    }
}
