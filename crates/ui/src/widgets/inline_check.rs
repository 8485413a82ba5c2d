use dioxus::prelude::*;

use toolbox_core::model::{CheckState, Question};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Single-question, immediate-feedback check embedded mid-page.
///
/// The first selection is final: it locks the widget, reveals whether the
/// choice was correct, and shows the explanation. State lives for the
/// lifetime of the mounted instance and is never shared between checks.
#[component]
pub fn InlineCheck(question: Question) -> Element {
    let state = use_signal({
        let question = question.clone();
        move || CheckState::new(question.clone())
    });

    let on_select = use_callback(move |index: usize| {
        let mut state = state;
        // Repeat or out-of-range selections are rejected by the state
        // machine and leave the recorded answer untouched.
        let _ = state.write().select(index);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<InlineCheckTestHandles>() {
                handles.register(on_select);
            }
        }
    }

    let state_read = state.read();
    let question = state_read.question();
    let answered = state_read.is_answered();
    let selected = state_read.selected();
    let correct_index = question.correct();
    let result = state_read.is_correct().map(|correct| {
        if correct {
            ("check-result check-result--correct", "Correct")
        } else {
            ("check-result check-result--incorrect", "Not quite")
        }
    });

    let options = question.options().iter().enumerate().map(|(index, option)| {
        let mut class = String::from("check-option");
        if answered {
            if index == correct_index {
                class.push_str(" check-option--correct");
            } else if selected == Some(index) {
                class.push_str(" check-option--incorrect");
            } else {
                class.push_str(" check-option--muted");
            }
        }
        rsx! {
            button {
                key: "{index}",
                class: "{class}",
                r#type: "button",
                disabled: answered,
                onclick: move |_| on_select.call(index),
                "{option}"
            }
        }
    });

    rsx! {
        aside { class: "check",
            p { class: "check-label", "Quick Check" }
            p { class: "check-prompt", "{question.prompt()}" }
            div { class: "check-options", {options} }
            if let Some((result_class, verdict)) = result {
                div { class: "{result_class}",
                    p { class: "check-verdict", "{verdict}" }
                    p { class: "check-explanation", "{question.explanation()}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct InlineCheckTestHandles {
    select: Rc<RefCell<Option<Callback<usize>>>>,
}

#[cfg(test)]
impl InlineCheckTestHandles {
    pub(crate) fn register(&self, select: Callback<usize>) {
        *self.select.borrow_mut() = Some(select);
    }

    pub(crate) fn select(&self) -> Callback<usize> {
        (*self.select.borrow()).expect("check select registered")
    }
}
