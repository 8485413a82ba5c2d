use std::sync::Arc;

use content::CourseCatalog;
use toolbox_core::model::{Lesson, LessonRef, LessonSlug, Module, ModuleSlug};

use crate::error::CourseServiceError;

/// Previous/next lesson within a module's presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LessonNeighbors {
    pub previous: Option<LessonRef>,
    pub next: Option<LessonRef>,
}

/// Everything a lesson page needs in one fetch.
///
/// This is intentionally **not** a UI view-model: no pre-formatted strings,
/// no layout assumptions. The UI maps it as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPage {
    pub lesson: Lesson,
    pub module_title: String,
    pub neighbors: LessonNeighbors,
}

/// Presentation-facing course facade that hides the catalog from the UI.
#[derive(Clone)]
pub struct CourseService {
    catalog: Arc<dyn CourseCatalog>,
}

impl CourseService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CourseCatalog>) -> Self {
        Self { catalog }
    }

    /// Modules in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Content` on catalog failures.
    pub async fn list_modules(&self) -> Result<Vec<Module>, CourseServiceError> {
        Ok(self.catalog.list_modules().await?)
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::Content` on catalog failures.
    pub async fn get_module(
        &self,
        slug: &ModuleSlug,
    ) -> Result<Option<Module>, CourseServiceError> {
        Ok(self.catalog.get_module(slug).await?)
    }

    /// Fetch a lesson together with its module title and prev/next refs.
    ///
    /// Returns `Ok(None)` when the lesson does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Content` on catalog failures.
    pub async fn lesson_page(
        &self,
        slug: &LessonSlug,
    ) -> Result<Option<LessonPage>, CourseServiceError> {
        let Some(lesson) = self.catalog.get_lesson(slug).await? else {
            return Ok(None);
        };

        let module = self.catalog.get_module(lesson.module()).await?;
        let (module_title, neighbors) = module.map_or_else(
            || (lesson.module().as_str().to_string(), LessonNeighbors::default()),
            |module| {
                let neighbors = neighbors_in(&module, slug);
                (module.title().to_string(), neighbors)
            },
        );

        Ok(Some(LessonPage {
            lesson,
            module_title,
            neighbors,
        }))
    }
}

fn neighbors_in(module: &Module, slug: &LessonSlug) -> LessonNeighbors {
    let lessons = module.lessons();
    let Some(position) = lessons.iter().position(|lesson| lesson.slug() == slug) else {
        return LessonNeighbors::default();
    };

    LessonNeighbors {
        previous: position.checked_sub(1).map(|index| lessons[index].clone()),
        next: lessons.get(position + 1).cloned(),
    }
}
