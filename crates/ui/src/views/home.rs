use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ModuleCardVm, map_module_card};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let course_service = ctx.course_service();

    let resource = use_resource(move || {
        let course_service = course_service.clone();
        async move {
            let modules = course_service
                .list_modules()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(modules.iter().map(map_module_card).collect::<Vec<_>>())
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        document::Title { "Study Centre | Toolbox" }

        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Study Centre" }
                p { class: "view-subtitle",
                    "Short, site-focused training modules with knowledge checks."
                }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(cards) => rsx! {
                    div { class: "module-grid",
                        for card in cards {
                            ModuleCard { card }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ModuleCard(card: ModuleCardVm) -> Element {
    rsx! {
        Link {
            class: "module-card",
            to: Route::Module { slug: card.slug.clone() },
            h3 { class: "module-card-title", "{card.title}" }
            p { class: "module-card-strapline", "{card.strapline}" }
            span { class: "module-card-count", "{card.lessons_label}" }
        }
    }
}
