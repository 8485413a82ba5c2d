use dioxus::prelude::*;
use dioxus_router::Link;

use toolbox_core::model::LessonSlug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BlockVm, LessonPageVm, SectionVm, map_lesson_page};
use crate::widgets::{FaqList, InlineCheck, Quiz};

#[component]
pub fn LessonView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let course_service = ctx.course_service();
    let parsed = LessonSlug::new(slug).ok();

    let resource = use_resource(move || {
        let course_service = course_service.clone();
        let parsed = parsed.clone();
        async move {
            let Some(slug) = parsed else {
                return Err(ViewError::NotFound);
            };
            let page = course_service
                .lesson_page(&slug)
                .await
                .map_err(|_| ViewError::Unknown)?
                .ok_or(ViewError::NotFound)?;
            Ok::<_, ViewError>(map_lesson_page(&page))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page lesson-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    Link { class: "btn btn-ghost", to: Route::Home {}, "Back to Study Centre" }
                },
                ViewState::Ready(page) => rsx! {
                    LessonArticle { page }
                },
            }
        }
    }
}

#[component]
fn LessonArticle(page: LessonPageVm) -> Element {
    rsx! {
        document::Title { "{page.title} | Toolbox" }
        document::Meta { name: "description", content: "{page.description}" }

        div { class: "lesson-topbar",
            Link {
                class: "btn btn-ghost lesson-back",
                to: Route::Module { slug: page.module_slug.clone() },
                "Back"
            }
        }

        article { class: "lesson",
            header { class: "lesson-header",
                span { class: "lesson-badge", "{page.badge}" }
                h2 { class: "lesson-title", "{page.title}" }
                p { class: "lesson-strapline", "{page.strapline}" }
            }

            div { class: "lesson-summaries",
                SummaryBox { label: "In 30 Seconds", items_html: page.in_thirty_seconds_html.clone() }
                SummaryBox { label: "On Site", items_html: page.on_site_html.clone() }
            }

            if !page.learning_outcomes.is_empty() {
                section { class: "lesson-outcomes",
                    h2 { class: "lesson-outcomes-title", "Learning Outcomes" }
                    ul { class: "lesson-outcomes-list",
                        for outcome in &page.learning_outcomes {
                            li { "{outcome}" }
                        }
                    }
                }
            }

            for section in &page.sections {
                LessonSection { section: section.clone() }
            }

            FaqList { faqs: page.faqs.clone() }

            Quiz { quiz: page.quiz.clone() }

            nav { class: "lesson-nav",
                if let Some(previous) = page.previous.clone() {
                    Link {
                        class: "btn btn-ghost",
                        to: Route::Lesson { slug: previous.slug().as_str().to_string() },
                        "Previous: {previous.title()}"
                    }
                } else {
                    Link {
                        class: "btn btn-ghost",
                        to: Route::Module { slug: page.module_slug.clone() },
                        "Back to {page.module_title}"
                    }
                }
                if let Some(next) = page.next.clone() {
                    Link {
                        class: "btn btn-primary",
                        to: Route::Lesson { slug: next.slug().as_str().to_string() },
                        "Next: {next.title()}"
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryBox(label: &'static str, items_html: Vec<String>) -> Element {
    if items_html.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "summary-box",
            p { class: "summary-box-label", "{label}" }
            ul { class: "summary-box-list",
                for (index, item) in items_html.iter().enumerate() {
                    li { key: "{index}", dangerous_inner_html: "{item}" }
                }
            }
        }
    }
}

#[component]
fn LessonSection(section: SectionVm) -> Element {
    rsx! {
        section { class: "lesson-section",
            h2 { class: "lesson-section-heading",
                span { class: "lesson-section-number", "{section.number_label}" }
                "{section.heading}"
            }
            div { class: "lesson-section-body",
                for (index, block) in section.blocks.iter().enumerate() {
                    LessonBlock { key: "{index}", block: block.clone() }
                }
            }
        }
        if let Some(question) = section.check.clone() {
            InlineCheck { question }
        }
    }
}

#[component]
fn LessonBlock(block: BlockVm) -> Element {
    match block {
        BlockVm::Prose { html } => rsx! {
            div { class: "lesson-prose", dangerous_inner_html: "{html}" }
        },
        BlockVm::Info { label, html } => rsx! {
            div { class: "info-box",
                p { class: "info-box-label", "{label}" }
                div { class: "info-box-body", dangerous_inner_html: "{html}" }
            }
        },
        BlockVm::KeyPoints { label, items_html } => rsx! {
            div { class: "keypoints-box",
                p { class: "keypoints-label", "{label}" }
                ul { class: "keypoints-list",
                    for (index, item) in items_html.iter().enumerate() {
                        li { key: "{index}", dangerous_inner_html: "{item}" }
                    }
                }
            }
        },
    }
}
