//! Shared error types for the services crate.

use thiserror::Error;

use content::ContentError;

/// Errors emitted by `CourseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseServiceError {
    #[error(transparent)]
    Content(#[from] ContentError),
}
