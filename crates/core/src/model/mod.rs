pub mod answer;
pub mod check;
mod ids;
pub mod lesson;
pub mod question;
pub mod quiz;

pub use ids::{LessonSlug, ModuleSlug, QuestionId, SlugError};

pub use answer::{AnswerError, AnswerSlot};
pub use check::CheckState;
pub use lesson::{
    Block, BlockDraft, Faq, FaqDraft, Lesson, LessonDraft, LessonRef, LessonRefDraft,
    LessonValidationError, Module, ModuleDraft, ModuleValidationError, Section, SectionDraft,
    SectionValidationError,
};
pub use question::{Question, QuestionDraft, QuestionIdDraft, QuestionValidationError};
pub use quiz::{Quiz, QuizDraft, QuizError, QuizState, QuizValidationError};
