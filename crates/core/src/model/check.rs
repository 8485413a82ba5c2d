use crate::model::answer::{AnswerError, AnswerSlot};
use crate::model::question::Question;

/// State for one inline comprehension check embedded mid-page.
///
/// Two states: unanswered, then answered with the correctness verdict and
/// explanation revealed. The first selection is final; a fresh attempt
/// requires a new instance (or the explicit [`CheckState::reset`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckState {
    question: Question,
    slot: AnswerSlot,
}

impl CheckState {
    #[must_use]
    pub fn new(question: Question) -> Self {
        Self {
            question,
            slot: AnswerSlot::default(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Record the reader's selection and return whether it was correct.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` for an out-of-range index or a repeat
    /// selection; the recorded answer is unaffected in both cases.
    pub fn select(&mut self, index: usize) -> Result<bool, AnswerError> {
        self.slot.record(index, self.question.option_count())?;
        Ok(index == self.question.correct())
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.slot.selected()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.slot.is_answered()
    }

    /// `None` until answered, then whether the recorded choice is correct.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.slot
            .selected()
            .map(|selected| selected == self.question.correct())
    }

    /// Explicit retry transition back to the unanswered state.
    pub fn reset(&mut self) {
        self.slot.clear();
    }
}
