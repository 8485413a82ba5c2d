use thiserror::Error;

use crate::model::lesson::{LessonValidationError, ModuleValidationError};
use crate::model::question::QuestionValidationError;
use crate::model::quiz::QuizValidationError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionValidationError),
    #[error(transparent)]
    Quiz(#[from] QuizValidationError),
    #[error(transparent)]
    Lesson(#[from] LessonValidationError),
    #[error(transparent)]
    Module(#[from] ModuleValidationError),
}
