#![forbid(unsafe_code)]

pub mod course_service;
pub mod error;

pub use course_service::{CourseService, LessonNeighbors, LessonPage};
pub use error::CourseServiceError;
