use dioxus::prelude::*;

use toolbox_core::model::Faq;

/// FAQ accordion with at most one item open at a time.
#[component]
pub fn FaqList(faqs: Vec<Faq>) -> Element {
    let mut open = use_signal(|| None::<usize>);

    if faqs.is_empty() {
        return rsx! {};
    }

    let items = faqs.iter().enumerate().map(|(index, faq)| {
        let is_open = open() == Some(index);
        let item_class = if is_open {
            "faq-item faq-item--open"
        } else {
            "faq-item"
        };
        let caret = if is_open { "–" } else { "+" };
        rsx! {
            div { class: "{item_class}", key: "{index}",
                button {
                    class: "faq-question",
                    r#type: "button",
                    onclick: move |_| {
                        if open() == Some(index) {
                            open.set(None);
                        } else {
                            open.set(Some(index));
                        }
                    },
                    span { "{faq.question()}" }
                    span { class: "faq-caret", aria_hidden: "true", "{caret}" }
                }
                if is_open {
                    p { class: "faq-answer", "{faq.answer()}" }
                }
            }
        }
    });

    rsx! {
        section { class: "faq",
            h2 { class: "faq-title", "Frequently Asked Questions" }
            div { class: "faq-list", {items} }
        }
    }
}
