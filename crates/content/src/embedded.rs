use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use toolbox_core::model::{
    Lesson, LessonDraft, LessonSlug, Module, ModuleDraft, ModuleSlug,
};

use crate::catalog::{ContentError, CourseCatalog};

/// One course file: a module's table of contents plus its lesson pages.
#[derive(Debug, Clone, Deserialize)]
struct ModuleFile {
    module: ModuleDraft,
    lessons: Vec<LessonDraft>,
}

/// Course files baked into the binary. Content is configuration, not code:
/// editing a lesson means editing JSON, not Rust.
const COURSE_FILES: &[(&str, &str)] = &[
    (
        "working-at-height.json",
        include_str!("../data/working-at-height.json"),
    ),
    ("mental-health.json", include_str!("../data/mental-health.json")),
];

/// Catalog over the embedded course files, fully validated at load.
#[derive(Debug)]
pub struct EmbeddedCatalog {
    modules: Vec<Module>,
    lessons: HashMap<LessonSlug, Lesson>,
}

impl EmbeddedCatalog {
    /// Parse and validate every embedded course file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` for malformed JSON, any invalid module or
    /// lesson, or cross-reference problems (dangling/unlisted/misplaced
    /// lessons, duplicate slugs).
    pub fn load() -> Result<Self, ContentError> {
        let mut modules = Vec::new();
        let mut lessons = Vec::new();

        for (file, raw) in COURSE_FILES {
            let parsed: ModuleFile =
                serde_json::from_str(raw).map_err(|err| ContentError::Parse {
                    file: (*file).to_string(),
                    message: err.to_string(),
                })?;

            let module = parsed
                .module
                .validate()
                .map_err(|err| ContentError::Invalid {
                    file: (*file).to_string(),
                    source: err.into(),
                })?;
            modules.push(module);

            for draft in parsed.lessons {
                let lesson = draft.validate().map_err(|err| ContentError::Invalid {
                    file: (*file).to_string(),
                    source: err.into(),
                })?;
                lessons.push(lesson);
            }
        }

        Self::from_parts(modules, lessons)
    }

    /// Assemble a catalog from already-validated modules and lessons,
    /// enforcing the cross-reference invariants.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` for duplicate slugs, a lesson filed under a
    /// module that does not list it, or a listed lesson that does not exist.
    pub fn from_parts(
        modules: Vec<Module>,
        lessons: Vec<Lesson>,
    ) -> Result<Self, ContentError> {
        let mut seen_modules: HashMap<ModuleSlug, ()> = HashMap::new();
        for module in &modules {
            if seen_modules.insert(module.slug().clone(), ()).is_some() {
                return Err(ContentError::DuplicateModule {
                    slug: module.slug().as_str().to_string(),
                });
            }
        }

        let mut by_slug: HashMap<LessonSlug, Lesson> = HashMap::new();
        for lesson in lessons {
            let slug = lesson.slug().clone();
            if by_slug.insert(slug.clone(), lesson).is_some() {
                return Err(ContentError::DuplicateLesson {
                    slug: slug.as_str().to_string(),
                });
            }
        }

        // Every listed lesson exists and is filed under the listing module.
        for module in &modules {
            for lesson_ref in module.lessons() {
                let Some(lesson) = by_slug.get(lesson_ref.slug()) else {
                    return Err(ContentError::DanglingLessonRef {
                        module: module.slug().as_str().to_string(),
                        lesson: lesson_ref.slug().as_str().to_string(),
                    });
                };
                if lesson.module() != module.slug() {
                    return Err(ContentError::MisplacedLesson {
                        lesson: lesson.slug().as_str().to_string(),
                        expected: module.slug().as_str().to_string(),
                        found: lesson.module().as_str().to_string(),
                    });
                }
            }
        }

        // Every lesson appears in some module's table of contents.
        for lesson in by_slug.values() {
            let listed = modules.iter().any(|module| {
                module
                    .lessons()
                    .iter()
                    .any(|lesson_ref| lesson_ref.slug() == lesson.slug())
            });
            if !listed {
                return Err(ContentError::UnlistedLesson {
                    lesson: lesson.slug().as_str().to_string(),
                });
            }
        }

        Ok(Self {
            modules,
            lessons: by_slug,
        })
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

#[async_trait]
impl CourseCatalog for EmbeddedCatalog {
    async fn list_modules(&self) -> Result<Vec<Module>, ContentError> {
        Ok(self.modules.clone())
    }

    async fn get_module(&self, slug: &ModuleSlug) -> Result<Option<Module>, ContentError> {
        Ok(self
            .modules
            .iter()
            .find(|module| module.slug() == slug)
            .cloned())
    }

    async fn get_lesson(&self, slug: &LessonSlug) -> Result<Option<Lesson>, ContentError> {
        Ok(self.lessons.get(slug).cloned())
    }
}

/// Unchecked catalog for tests: takes whatever modules and lessons it is
/// given, without the cross-reference pass.
pub struct InMemoryCatalog {
    modules: Vec<Module>,
    lessons: HashMap<LessonSlug, Lesson>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(modules: Vec<Module>, lessons: Vec<Lesson>) -> Self {
        let lessons = lessons
            .into_iter()
            .map(|lesson| (lesson.slug().clone(), lesson))
            .collect();
        Self { modules, lessons }
    }
}

#[async_trait]
impl CourseCatalog for InMemoryCatalog {
    async fn list_modules(&self) -> Result<Vec<Module>, ContentError> {
        Ok(self.modules.clone())
    }

    async fn get_module(&self, slug: &ModuleSlug) -> Result<Option<Module>, ContentError> {
        Ok(self
            .modules
            .iter()
            .find(|module| module.slug() == slug)
            .cloned())
    }

    async fn get_lesson(&self, slug: &LessonSlug) -> Result<Option<Lesson>, ContentError> {
        Ok(self.lessons.get(slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbox_core::model::{
        BlockDraft, LessonRefDraft, QuestionDraft, QuestionIdDraft, QuizDraft, SectionDraft,
    };
    use toolbox_core::model::{LessonDraft, ModuleDraft};

    fn module(slug: &str, lesson_slugs: &[&str]) -> Module {
        ModuleDraft {
            slug: slug.to_string(),
            title: "Module".to_string(),
            strapline: "Strapline".to_string(),
            lessons: lesson_slugs
                .iter()
                .map(|lesson| LessonRefDraft {
                    slug: (*lesson).to_string(),
                    title: "Lesson".to_string(),
                })
                .collect(),
        }
        .validate()
        .unwrap()
    }

    fn lesson(slug: &str, module: &str) -> Lesson {
        LessonDraft {
            slug: slug.to_string(),
            module: module.to_string(),
            title: "Lesson".to_string(),
            strapline: "Strapline".to_string(),
            badge: "MODULE 1".to_string(),
            description: "Description".to_string(),
            in_thirty_seconds: vec![],
            on_site: vec![],
            learning_outcomes: vec![],
            sections: vec![SectionDraft {
                heading: "Heading".to_string(),
                blocks: vec![BlockDraft::Paragraph {
                    text: "Body".to_string(),
                }],
                check: None,
            }],
            faqs: vec![],
            quiz: QuizDraft {
                title: "Check".to_string(),
                questions: vec![QuestionDraft {
                    id: QuestionIdDraft::Number(1),
                    prompt: "Pick one".to_string(),
                    options: vec!["a".to_string(), "b".to_string()],
                    correct: 0,
                    explanation: "because".to_string(),
                }],
            },
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn from_parts_accepts_consistent_content() {
        let catalog = EmbeddedCatalog::from_parts(
            vec![module("m", &["a", "b"])],
            vec![lesson("a", "m"), lesson("b", "m")],
        )
        .unwrap();

        assert_eq!(catalog.modules().len(), 1);
        assert_eq!(catalog.lesson_count(), 2);
    }

    #[test]
    fn dangling_lesson_ref_is_rejected() {
        let err = EmbeddedCatalog::from_parts(
            vec![module("m", &["a", "missing"])],
            vec![lesson("a", "m")],
        )
        .unwrap_err();

        assert!(matches!(err, ContentError::DanglingLessonRef { .. }));
    }

    #[test]
    fn unlisted_lesson_is_rejected() {
        let err = EmbeddedCatalog::from_parts(
            vec![module("m", &["a"])],
            vec![lesson("a", "m"), lesson("orphan", "m")],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ContentError::UnlistedLesson { lesson } if lesson == "orphan"
        ));
    }

    #[test]
    fn misplaced_lesson_is_rejected() {
        let err = EmbeddedCatalog::from_parts(
            vec![module("m", &["a"])],
            vec![lesson("a", "other-module")],
        )
        .unwrap_err();

        assert!(matches!(err, ContentError::MisplacedLesson { .. }));
    }

    #[test]
    fn duplicate_lessons_are_rejected() {
        let err = EmbeddedCatalog::from_parts(
            vec![module("m", &["a"])],
            vec![lesson("a", "m"), lesson("a", "m")],
        )
        .unwrap_err();

        assert!(matches!(err, ContentError::DuplicateLesson { .. }));
    }
}
