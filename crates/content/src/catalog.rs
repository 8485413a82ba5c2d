use async_trait::async_trait;
use thiserror::Error;

use toolbox_core::model::{Lesson, LessonSlug, Module, ModuleSlug};

/// Errors surfaced by course catalogs.
///
/// Every variant is a content-authoring error: the data files are part of
/// the build, so these fail loudly at startup instead of rendering a
/// broken page. Lookups for missing slugs return `None`, not an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("malformed course file {file}: {message}")]
    Parse { file: String, message: String },

    #[error("invalid content in {file}: {source}")]
    Invalid {
        file: String,
        source: toolbox_core::Error,
    },

    #[error("duplicate module slug: {slug}")]
    DuplicateModule { slug: String },

    #[error("duplicate lesson slug: {slug}")]
    DuplicateLesson { slug: String },

    #[error("lesson {lesson} is filed under module {found}, expected {expected}")]
    MisplacedLesson {
        lesson: String,
        expected: String,
        found: String,
    },

    #[error("module {module} lists lesson {lesson}, but no such lesson exists")]
    DanglingLessonRef { module: String, lesson: String },

    #[error("lesson {lesson} is not listed by its module's table of contents")]
    UnlistedLesson { lesson: String },
}

/// Read-only seam between the course data and the services layer.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    /// Modules in presentation order.
    async fn list_modules(&self) -> Result<Vec<Module>, ContentError>;

    async fn get_module(&self, slug: &ModuleSlug) -> Result<Option<Module>, ContentError>;

    async fn get_lesson(&self, slug: &LessonSlug) -> Result<Option<Lesson>, ContentError>;
}
