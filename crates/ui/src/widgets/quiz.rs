use dioxus::prelude::*;

use toolbox_core::model::{self, QuizState};

use crate::vm::map_quiz_progress;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// End-of-section assessment over an ordered question sequence.
///
/// Questions can be answered in any order; each locks on its first answer
/// and reveals its own verdict and explanation without touching the others.
/// Once every question is answered the aggregate score is shown.
#[component]
pub fn Quiz(quiz: model::Quiz) -> Element {
    let state = use_signal({
        let quiz = quiz.clone();
        move || QuizState::new(quiz.clone())
    });

    let on_answer = use_callback(move |(question_index, option_index): (usize, usize)| {
        let mut state = state;
        // Bad indices and repeat answers are rejected by the state machine.
        let _ = state.write().answer(question_index, option_index);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(on_answer);
            }
        }
    }

    let state_read = state.read();
    let progress = map_quiz_progress(&state_read);
    let is_empty = state_read.quiz().is_empty();

    let questions = state_read
        .quiz()
        .questions()
        .iter()
        .enumerate()
        .map(|(question_index, question)| {
            let answered = state_read.is_answered(question_index);
            let selected = state_read.selected(question_index);
            let correct_index = question.correct();
            let number = question_index + 1;
            let result = state_read.is_correct(question_index).map(|correct| {
                if correct {
                    ("quiz-result quiz-result--correct", "Correct")
                } else {
                    ("quiz-result quiz-result--incorrect", "Not quite")
                }
            });

            let options = question.options().iter().enumerate().map(|(option_index, option)| {
                let mut class = String::from("quiz-option");
                if answered {
                    if option_index == correct_index {
                        class.push_str(" quiz-option--correct");
                    } else if selected == Some(option_index) {
                        class.push_str(" quiz-option--incorrect");
                    } else {
                        class.push_str(" quiz-option--muted");
                    }
                }
                rsx! {
                    button {
                        key: "{option_index}",
                        class: "{class}",
                        r#type: "button",
                        disabled: answered,
                        onclick: move |_| on_answer.call((question_index, option_index)),
                        "{option}"
                    }
                }
            });

            rsx! {
                div { class: "quiz-question", key: "{question.id()}",
                    p { class: "quiz-question-prompt", "{number}. {question.prompt()}" }
                    div { class: "quiz-options", {options} }
                    if let Some((result_class, label)) = result {
                        div { class: "{result_class}",
                            p { class: "quiz-verdict", "{label}" }
                            p { class: "quiz-explanation", "{question.explanation()}" }
                        }
                    }
                }
            }
        });

    rsx! {
        section { class: "quiz",
            header { class: "quiz-header",
                h2 { class: "quiz-title", "{state_read.quiz().title()}" }
                span { class: "quiz-progress", "{progress.answered_label}" }
            }
            if is_empty {
                p { class: "quiz-empty", "No questions in this check yet." }
            } else {
                div { class: "quiz-questions", {questions} }
            }
            if let Some(score) = progress.score_label {
                footer { class: "quiz-summary",
                    p { class: "quiz-score", "{score}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    answer: Rc<RefCell<Option<Callback<(usize, usize)>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, answer: Callback<(usize, usize)>) {
        *self.answer.borrow_mut() = Some(answer);
    }

    pub(crate) fn answer(&self) -> Callback<(usize, usize)> {
        (*self.answer.borrow()).expect("quiz answer registered")
    }
}
