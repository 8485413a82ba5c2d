use thiserror::Error;

/// Selection state for a single question instance.
///
/// The transition is one-directional: once a selection is recorded the slot
/// is terminal and further selections are rejected. The first choice is
/// final; re-attempting requires an explicit [`AnswerSlot::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerSlot {
    #[default]
    Unanswered,
    Answered {
        selected: usize,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("option index {index} is out of range for {len} options")]
    OutOfRange { index: usize, len: usize },

    #[error("question is already answered")]
    AlreadyAnswered,
}

impl AnswerSlot {
    /// Record a selection against a question with `len` options.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::OutOfRange` for an index past the option list
    /// and `AnswerError::AlreadyAnswered` once a selection exists. Either
    /// way the recorded state is left untouched.
    pub fn record(&mut self, index: usize, len: usize) -> Result<(), AnswerError> {
        if index >= len {
            return Err(AnswerError::OutOfRange { index, len });
        }
        if let Self::Answered { .. } = self {
            return Err(AnswerError::AlreadyAnswered);
        }
        *self = Self::Answered { selected: index };
        Ok(())
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Unanswered => None,
            Self::Answered { selected } => Some(*selected),
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered { .. })
    }

    /// Explicit retry transition back to `Unanswered`.
    pub fn clear(&mut self) {
        *self = Self::Unanswered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_transitions_to_answered() {
        let mut slot = AnswerSlot::default();
        assert!(!slot.is_answered());

        slot.record(2, 4).unwrap();

        assert!(slot.is_answered());
        assert_eq!(slot.selected(), Some(2));
    }

    #[test]
    fn second_record_is_rejected_and_keeps_first() {
        let mut slot = AnswerSlot::default();
        slot.record(1, 4).unwrap();

        let err = slot.record(3, 4).unwrap_err();

        assert_eq!(err, AnswerError::AlreadyAnswered);
        assert_eq!(slot.selected(), Some(1));
    }

    #[test]
    fn out_of_range_is_rejected_without_state_change() {
        let mut slot = AnswerSlot::default();

        let err = slot.record(4, 4).unwrap_err();

        assert_eq!(err, AnswerError::OutOfRange { index: 4, len: 4 });
        assert!(!slot.is_answered());
    }

    #[test]
    fn clear_allows_a_fresh_selection() {
        let mut slot = AnswerSlot::default();
        slot.record(0, 2).unwrap();

        slot.clear();

        assert!(!slot.is_answered());
        slot.record(1, 2).unwrap();
        assert_eq!(slot.selected(), Some(1));
    }
}
