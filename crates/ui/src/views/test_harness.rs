use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use content::InMemoryCatalog;
use services::CourseService;
use toolbox_core::model::{
    BlockDraft, FaqDraft, Lesson, LessonDraft, LessonRefDraft, Module, ModuleDraft, QuestionDraft,
    QuestionIdDraft, QuizDraft, SectionDraft,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, LessonView, ModuleView};

#[derive(Clone)]
struct TestApp {
    course_service: Arc<CourseService>,
}

impl UiApp for TestApp {
    fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Module(String),
    Lesson(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Module(slug) => rsx! { ModuleView { slug } },
        ViewKind::Lesson(slug) => rsx! { LessonView { slug } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_question(id: &str, prompt: &str, correct: usize) -> QuestionDraft {
    QuestionDraft {
        id: QuestionIdDraft::Text(id.to_string()),
        prompt: prompt.to_string(),
        options: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        correct,
        explanation: format!("Explanation for {id}"),
    }
}

pub fn sample_course() -> (Vec<Module>, Vec<Lesson>) {
    let module = ModuleDraft {
        slug: "working-at-height".to_string(),
        title: "Working at Height".to_string(),
        strapline: "Ladders, towers, and fall protection".to_string(),
        lessons: vec![
            LessonRefDraft {
                slug: "understanding-falls".to_string(),
                title: "Understanding Falls from Height".to_string(),
            },
            LessonRefDraft {
                slug: "ladders-and-steps".to_string(),
                title: "Safe Use of Ladders".to_string(),
            },
        ],
    }
    .validate()
    .unwrap();

    let falls = LessonDraft {
        slug: "understanding-falls".to_string(),
        module: "working-at-height".to_string(),
        title: "Understanding Falls from Height".to_string(),
        strapline: "What the Regulations actually require".to_string(),
        badge: "MODULE 1 · SECTION 1".to_string(),
        description: "Falls from height and the hierarchy of control".to_string(),
        in_thirty_seconds: vec!["There is **no** minimum height".to_string()],
        on_site: vec!["Ask first: can this be done from the ground?".to_string()],
        learning_outcomes: vec!["State the hierarchy of control".to_string()],
        sections: vec![SectionDraft {
            heading: "The Hierarchy of Control".to_string(),
            blocks: vec![BlockDraft::Paragraph {
                text: "Avoid, prevent, then minimise consequences.".to_string(),
            }],
            check: Some(sample_question(
                "hierarchy-check",
                "What comes first in the hierarchy?",
                1,
            )),
        }],
        faqs: vec![FaqDraft {
            question: "Does the two metre rule still exist?".to_string(),
            answer: "No, it was removed in 2005.".to_string(),
        }],
        quiz: QuizDraft {
            title: "Section 1 Knowledge Check".to_string(),
            questions: vec![
                sample_question("q1", "How many fatal falls per year?", 1),
                sample_question("q2", "Who holds duties?", 0),
            ],
        },
    }
    .validate()
    .unwrap();

    let ladders = LessonDraft {
        slug: "ladders-and-steps".to_string(),
        module: "working-at-height".to_string(),
        title: "Safe Use of Ladders".to_string(),
        strapline: "The 1-in-4 rule and three points of contact".to_string(),
        badge: "MODULE 1 · SECTION 2".to_string(),
        description: "Ladder selection, inspection, and climbing technique".to_string(),
        in_thirty_seconds: vec![],
        on_site: vec![],
        learning_outcomes: vec![],
        sections: vec![SectionDraft {
            heading: "Setting Up".to_string(),
            blocks: vec![BlockDraft::Paragraph {
                text: "One unit out for every four up.".to_string(),
            }],
            check: None,
        }],
        faqs: vec![],
        quiz: QuizDraft {
            title: "Section 2 Knowledge Check".to_string(),
            questions: vec![sample_question("q1", "What angle for a ladder?", 2)],
        },
    }
    .validate()
    .unwrap();

    (vec![module], vec![falls, ladders])
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let (modules, lessons) = sample_course();
    let catalog = InMemoryCatalog::new(modules, lessons);
    let course_service = Arc::new(CourseService::new(Arc::new(catalog)));
    let app = Arc::new(TestApp { course_service });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom }
}
