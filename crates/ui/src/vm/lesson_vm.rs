use services::LessonPage;
use toolbox_core::model::{Block, Faq, Lesson, LessonRef, Module, Question, Quiz};

use crate::vm::markdown::markdown_to_html;

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleCardVm {
    pub slug: String,
    pub title: String,
    pub strapline: String,
    pub lessons_label: String,
}

#[must_use]
pub fn map_module_card(module: &Module) -> ModuleCardVm {
    let count = module.lessons().len();
    let lessons_label = if count == 1 {
        "1 lesson".to_string()
    } else {
        format!("{count} lessons")
    };

    ModuleCardVm {
        slug: module.slug().as_str().to_string(),
        title: module.title().to_string(),
        strapline: module.strapline().to_string(),
        lessons_label,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonItemVm {
    pub number_label: String,
    pub slug: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleVm {
    pub title: String,
    pub strapline: String,
    pub lessons: Vec<LessonItemVm>,
}

#[must_use]
pub fn map_module(module: &Module) -> ModuleVm {
    let lessons = module
        .lessons()
        .iter()
        .enumerate()
        .map(|(index, lesson)| LessonItemVm {
            number_label: section_number(index),
            slug: lesson.slug().as_str().to_string(),
            title: lesson.title().to_string(),
        })
        .collect();

    ModuleVm {
        title: module.title().to_string(),
        strapline: module.strapline().to_string(),
        lessons,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BlockVm {
    Prose { html: String },
    Info { label: String, html: String },
    KeyPoints { label: String, items_html: Vec<String> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionVm {
    pub number_label: String,
    pub heading: String,
    pub blocks: Vec<BlockVm>,
    pub check: Option<Question>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonPageVm {
    pub title: String,
    pub strapline: String,
    pub badge: String,
    pub description: String,
    pub module_slug: String,
    pub module_title: String,
    pub in_thirty_seconds_html: Vec<String>,
    pub on_site_html: Vec<String>,
    pub learning_outcomes: Vec<String>,
    pub sections: Vec<SectionVm>,
    pub faqs: Vec<Faq>,
    pub quiz: Quiz,
    pub previous: Option<LessonRef>,
    pub next: Option<LessonRef>,
}

#[must_use]
pub fn map_lesson_page(page: &LessonPage) -> LessonPageVm {
    let lesson = &page.lesson;

    LessonPageVm {
        title: lesson.title().to_string(),
        strapline: lesson.strapline().to_string(),
        badge: lesson.badge().to_string(),
        description: lesson.description().to_string(),
        module_slug: lesson.module().as_str().to_string(),
        module_title: page.module_title.clone(),
        in_thirty_seconds_html: inline_items(lesson.in_thirty_seconds()),
        on_site_html: inline_items(lesson.on_site()),
        learning_outcomes: lesson.learning_outcomes().to_vec(),
        sections: map_sections(lesson),
        faqs: lesson.faqs().to_vec(),
        quiz: lesson.quiz().clone(),
        previous: page.neighbors.previous.clone(),
        next: page.neighbors.next.clone(),
    }
}

fn map_sections(lesson: &Lesson) -> Vec<SectionVm> {
    lesson
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| SectionVm {
            number_label: section_number(index),
            heading: section.heading().to_string(),
            blocks: section.blocks().iter().map(map_block).collect(),
            check: section.check().cloned(),
        })
        .collect()
}

fn map_block(block: &Block) -> BlockVm {
    match block {
        Block::Paragraph { text } => BlockVm::Prose {
            html: markdown_to_html(text),
        },
        Block::Info { label, body } => BlockVm::Info {
            label: label.clone(),
            html: markdown_to_html(body),
        },
        Block::KeyPoints { label, items } => BlockVm::KeyPoints {
            label: label.clone(),
            items_html: inline_items(items),
        },
    }
}

fn inline_items(items: &[String]) -> Vec<String> {
    items.iter().map(|item| markdown_to_html(item)).collect()
}

fn section_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use services::LessonNeighbors;
    use toolbox_core::model::{
        BlockDraft, LessonDraft, LessonRefDraft, ModuleDraft, QuestionDraft, QuestionIdDraft,
        QuizDraft, SectionDraft,
    };

    fn module() -> Module {
        ModuleDraft {
            slug: "working-at-height".to_string(),
            title: "Working at Height".to_string(),
            strapline: "Ladders, towers, and fall protection".to_string(),
            lessons: vec![LessonRefDraft {
                slug: "understanding-falls".to_string(),
                title: "Understanding Falls".to_string(),
            }],
        }
        .validate()
        .unwrap()
    }

    fn lesson() -> Lesson {
        LessonDraft {
            slug: "understanding-falls".to_string(),
            module: "working-at-height".to_string(),
            title: "Understanding Falls".to_string(),
            strapline: "Why falls keep killing people".to_string(),
            badge: "MODULE 1 · SECTION 1".to_string(),
            description: "Falls and the regulations".to_string(),
            in_thirty_seconds: vec!["**No** minimum height".to_string()],
            on_site: vec![],
            learning_outcomes: vec!["State the definition".to_string()],
            sections: vec![SectionDraft {
                heading: "What counts".to_string(),
                blocks: vec![
                    BlockDraft::Paragraph {
                        text: "Any place with an **injury** distance.".to_string(),
                    },
                    BlockDraft::KeyPoints {
                        label: "In order".to_string(),
                        items: vec!["*Avoid* first".to_string()],
                    },
                ],
                check: Some(QuestionDraft {
                    id: QuestionIdDraft::Text("check-1".to_string()),
                    prompt: "Pick one".to_string(),
                    options: vec!["a".to_string(), "b".to_string()],
                    correct: 0,
                    explanation: "because".to_string(),
                }),
            }],
            faqs: vec![],
            quiz: QuizDraft {
                title: "Knowledge Check".to_string(),
                questions: vec![],
            },
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn module_card_pluralizes_lesson_count() {
        let card = map_module_card(&module());
        assert_eq!(card.lessons_label, "1 lesson");
        assert_eq!(card.slug, "working-at-height");
    }

    #[test]
    fn module_lessons_are_numbered_from_one() {
        let vm = map_module(&module());
        assert_eq!(vm.lessons[0].number_label, "01");
        assert_eq!(vm.lessons[0].title, "Understanding Falls");
    }

    #[test]
    fn lesson_page_renders_markdown_blocks() {
        let page = LessonPage {
            lesson: lesson(),
            module_title: "Working at Height".to_string(),
            neighbors: LessonNeighbors::default(),
        };

        let vm = map_lesson_page(&page);

        assert_eq!(vm.sections[0].number_label, "01");
        let BlockVm::Prose { html } = &vm.sections[0].blocks[0] else {
            panic!("expected prose block");
        };
        assert!(html.contains("<strong>injury</strong>"));
        let BlockVm::KeyPoints { items_html, .. } = &vm.sections[0].blocks[1] else {
            panic!("expected key points block");
        };
        assert!(items_html[0].contains("<em>Avoid</em>"));
        assert!(vm.in_thirty_seconds_html[0].contains("<strong>No</strong>"));
        assert!(vm.sections[0].check.is_some());
    }
}
