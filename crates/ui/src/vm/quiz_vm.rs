use toolbox_core::model::QuizState;

/// Display labels for a quiz's progress footer.
///
/// `score_label` appears only once every question is answered. The
/// degenerate zero-question quiz is complete from the start and shows
/// "0 of 0"; no percentage is ever computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizProgressVm {
    pub answered_label: String,
    pub score_label: Option<String>,
}

#[must_use]
pub fn map_quiz_progress(state: &QuizState) -> QuizProgressVm {
    let answered_label = format!("{} of {} answered", state.answered_count(), state.total());
    let score_label = state
        .is_complete()
        .then(|| format!("Score: {} of {}", state.score(), state.total()));

    QuizProgressVm {
        answered_label,
        score_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use toolbox_core::model::{QuestionDraft, QuestionIdDraft, QuizDraft};

    fn state(question_count: u64) -> QuizState {
        let quiz = QuizDraft {
            title: "Knowledge Check".to_string(),
            questions: (1..=question_count)
                .map(|id| QuestionDraft {
                    id: QuestionIdDraft::Number(id),
                    prompt: format!("Question {id}"),
                    options: vec!["a".to_string(), "b".to_string()],
                    correct: 0,
                    explanation: "because".to_string(),
                })
                .collect(),
        }
        .validate()
        .unwrap();
        QuizState::new(quiz)
    }

    #[test]
    fn score_is_hidden_until_complete() {
        let mut quiz = state(2);
        quiz.answer(0, 0).unwrap();

        let vm = map_quiz_progress(&quiz);

        assert_eq!(vm.answered_label, "1 of 2 answered");
        assert!(vm.score_label.is_none());
    }

    #[test]
    fn score_appears_on_completion() {
        let mut quiz = state(2);
        quiz.answer(0, 0).unwrap();
        quiz.answer(1, 1).unwrap();

        let vm = map_quiz_progress(&quiz);

        assert_eq!(vm.score_label.as_deref(), Some("Score: 1 of 2"));
    }

    #[test]
    fn empty_quiz_reports_zero_of_zero() {
        let vm = map_quiz_progress(&state(0));

        assert_eq!(vm.answered_label, "0 of 0 answered");
        assert_eq!(vm.score_label.as_deref(), Some("Score: 0 of 0"));
    }
}
