use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, LessonView, ModuleView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/module/:slug", ModuleView)] Module { slug: String },
        #[route("/lesson/:slug", LessonView)] Lesson { slug: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Toolbox" }
            p { class: "sidebar-tagline", "Site safety study centre" }
            ul {
                li { Link { to: Route::Home {}, "Study Centre" } }
            }
        }
    }
}
