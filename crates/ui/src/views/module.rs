use dioxus::prelude::*;
use dioxus_router::Link;

use toolbox_core::model::ModuleSlug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ModuleVm, map_module};

#[component]
pub fn ModuleView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let course_service = ctx.course_service();
    // A route segment that fails slug validation cannot name any module.
    let parsed = ModuleSlug::new(slug).ok();

    let resource = use_resource(move || {
        let course_service = course_service.clone();
        let parsed = parsed.clone();
        async move {
            let Some(slug) = parsed else {
                return Err(ViewError::NotFound);
            };
            let module = course_service
                .get_module(&slug)
                .await
                .map_err(|_| ViewError::Unknown)?
                .ok_or(ViewError::NotFound)?;
            Ok::<_, ViewError>(map_module(&module))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page module-page",
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
                ViewState::Ready(module) => rsx! {
                    ModuleOverview { module }
                },
            }
        }
    }
}

#[component]
fn ModuleOverview(module: ModuleVm) -> Element {
    rsx! {
        document::Title { "{module.title} | Toolbox" }

        header { class: "view-header",
            h2 { class: "view-title", "{module.title}" }
            p { class: "view-subtitle", "{module.strapline}" }
        }
        div { class: "view-divider" }
        ol { class: "module-lessons",
            for lesson in module.lessons {
                li { class: "module-lesson", key: "{lesson.slug}",
                    Link {
                        class: "module-lesson-link",
                        to: Route::Lesson { slug: lesson.slug.clone() },
                        span { class: "module-lesson-number", "{lesson.number_label}" }
                        span { class: "module-lesson-title", "{lesson.title}" }
                    }
                }
            }
        }
        nav { class: "module-nav",
            Link { class: "btn btn-ghost", to: Route::Home {}, "Back to Study Centre" }
        }
    }
}
