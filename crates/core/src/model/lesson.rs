use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{LessonSlug, ModuleSlug, SlugError};
use crate::model::question::{Question, QuestionDraft, QuestionValidationError};
use crate::model::quiz::{Quiz, QuizDraft, QuizValidationError};

//
// ─── CONTENT BLOCKS ────────────────────────────────────────────────────────────
//

/// One block of lesson prose.
///
/// Paragraph text is markdown; the UI renders it to sanitized HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph { text: String },
    Info { label: String, body: String },
    KeyPoints { label: String, items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockDraft {
    Paragraph { text: String },
    Info { label: String, body: String },
    KeyPoints { label: String, items: Vec<String> },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BlockValidationError {
    #[error("paragraph text cannot be empty")]
    EmptyParagraph,

    #[error("info box needs a label and a body")]
    EmptyInfo,

    #[error("key-point list needs a label and at least one item")]
    EmptyKeyPoints,
}

impl BlockDraft {
    fn validate(self) -> Result<Block, BlockValidationError> {
        match self {
            Self::Paragraph { text } => {
                if text.trim().is_empty() {
                    return Err(BlockValidationError::EmptyParagraph);
                }
                Ok(Block::Paragraph { text })
            }
            Self::Info { label, body } => {
                if label.trim().is_empty() || body.trim().is_empty() {
                    return Err(BlockValidationError::EmptyInfo);
                }
                Ok(Block::Info { label, body })
            }
            Self::KeyPoints { label, items } => {
                if label.trim().is_empty()
                    || items.is_empty()
                    || items.iter().any(|item| item.trim().is_empty())
                {
                    return Err(BlockValidationError::EmptyKeyPoints);
                }
                Ok(Block::KeyPoints { label, items })
            }
        }
    }
}

//
// ─── SECTIONS ──────────────────────────────────────────────────────────────────
//

/// A numbered lesson section: heading, prose blocks, and an optional
/// inline comprehension check rendered after the prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    heading: String,
    blocks: Vec<Block>,
    check: Option<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionDraft {
    pub heading: String,
    pub blocks: Vec<BlockDraft>,
    #[serde(default)]
    pub check: Option<QuestionDraft>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionValidationError {
    #[error("section heading cannot be empty")]
    EmptyHeading,

    #[error("a section needs at least one block")]
    NoBlocks,

    #[error("invalid block {index}: {source}")]
    Block {
        index: usize,
        source: BlockValidationError,
    },

    #[error("invalid inline check: {0}")]
    Check(#[source] QuestionValidationError),
}

impl SectionDraft {
    fn validate(self) -> Result<Section, SectionValidationError> {
        if self.heading.trim().is_empty() {
            return Err(SectionValidationError::EmptyHeading);
        }
        if self.blocks.is_empty() {
            return Err(SectionValidationError::NoBlocks);
        }

        let mut blocks = Vec::with_capacity(self.blocks.len());
        for (index, draft) in self.blocks.into_iter().enumerate() {
            let block = draft
                .validate()
                .map_err(|source| SectionValidationError::Block { index, source })?;
            blocks.push(block);
        }

        let check = self
            .check
            .map(|draft| draft.validate().map_err(SectionValidationError::Check))
            .transpose()?;

        Ok(Section {
            heading: self.heading,
            blocks,
            check,
        })
    }
}

impl Section {
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn check(&self) -> Option<&Question> {
        self.check.as_ref()
    }
}

//
// ─── FAQS ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    question: String,
    answer: String,
}

impl Faq {
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── LESSONS ───────────────────────────────────────────────────────────────────
//

/// A complete lesson page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    slug: LessonSlug,
    module: ModuleSlug,
    title: String,
    strapline: String,
    badge: String,
    description: String,
    in_thirty_seconds: Vec<String>,
    on_site: Vec<String>,
    learning_outcomes: Vec<String>,
    sections: Vec<Section>,
    faqs: Vec<Faq>,
    quiz: Quiz,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    pub slug: String,
    pub module: String,
    pub title: String,
    pub strapline: String,
    pub badge: String,
    pub description: String,
    #[serde(default)]
    pub in_thirty_seconds: Vec<String>,
    #[serde(default)]
    pub on_site: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    pub sections: Vec<SectionDraft>,
    #[serde(default)]
    pub faqs: Vec<FaqDraft>,
    pub quiz: QuizDraft,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonValidationError {
    #[error("invalid lesson slug: {0}")]
    Slug(#[source] SlugError),

    #[error("invalid module slug: {0}")]
    ModuleSlug(#[source] SlugError),

    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("a lesson needs at least one section")]
    NoSections,

    #[error("invalid section {index}: {source}")]
    Section {
        index: usize,
        source: SectionValidationError,
    },

    #[error("faq {index} needs a question and an answer")]
    EmptyFaq { index: usize },

    #[error(transparent)]
    Quiz(#[from] QuizValidationError),

    #[error("question id {id} is used more than once on this page")]
    DuplicateQuestionId { id: String },
}

impl LessonDraft {
    /// Validate an authored lesson into a `Lesson`.
    ///
    /// # Errors
    ///
    /// Returns `LessonValidationError` for bad slugs, an empty title, no
    /// sections, invalid blocks/checks/FAQs, an invalid quiz, or a question
    /// id reused anywhere on the page (inline checks and quiz combined).
    pub fn validate(self) -> Result<Lesson, LessonValidationError> {
        let slug = LessonSlug::new(self.slug).map_err(LessonValidationError::Slug)?;
        let module = ModuleSlug::new(self.module).map_err(LessonValidationError::ModuleSlug)?;

        if self.title.trim().is_empty() {
            return Err(LessonValidationError::EmptyTitle);
        }
        if self.sections.is_empty() {
            return Err(LessonValidationError::NoSections);
        }

        let mut sections = Vec::with_capacity(self.sections.len());
        for (index, draft) in self.sections.into_iter().enumerate() {
            let section = draft
                .validate()
                .map_err(|source| LessonValidationError::Section { index, source })?;
            sections.push(section);
        }

        let mut faqs = Vec::with_capacity(self.faqs.len());
        for (index, draft) in self.faqs.into_iter().enumerate() {
            if draft.question.trim().is_empty() || draft.answer.trim().is_empty() {
                return Err(LessonValidationError::EmptyFaq { index });
            }
            faqs.push(Faq {
                question: draft.question,
                answer: draft.answer,
            });
        }

        let quiz = self.quiz.validate()?;

        // Question ids must be unique across the whole page, checks and
        // quiz together.
        let mut seen = HashSet::new();
        let check_ids = sections.iter().filter_map(Section::check).map(Question::id);
        let quiz_ids = quiz.questions().iter().map(Question::id);
        for id in check_ids.chain(quiz_ids) {
            if !seen.insert(id.clone()) {
                return Err(LessonValidationError::DuplicateQuestionId {
                    id: id.as_str().to_string(),
                });
            }
        }

        Ok(Lesson {
            slug,
            module,
            title: self.title,
            strapline: self.strapline,
            badge: self.badge,
            description: self.description,
            in_thirty_seconds: self.in_thirty_seconds,
            on_site: self.on_site,
            learning_outcomes: self.learning_outcomes,
            sections,
            faqs,
            quiz,
        })
    }
}

impl Lesson {
    #[must_use]
    pub fn slug(&self) -> &LessonSlug {
        &self.slug
    }

    #[must_use]
    pub fn module(&self) -> &ModuleSlug {
        &self.module
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn strapline(&self) -> &str {
        &self.strapline
    }

    /// Short badge label, e.g. "MODULE 1 · SECTION 4".
    #[must_use]
    pub fn badge(&self) -> &str {
        &self.badge
    }

    /// Page meta description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn in_thirty_seconds(&self) -> &[String] {
        &self.in_thirty_seconds
    }

    #[must_use]
    pub fn on_site(&self) -> &[String] {
        &self.on_site
    }

    #[must_use]
    pub fn learning_outcomes(&self) -> &[String] {
        &self.learning_outcomes
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }
}

//
// ─── MODULES ───────────────────────────────────────────────────────────────────
//

/// Reference to a lesson from a module's table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRef {
    slug: LessonSlug,
    title: String,
}

impl LessonRef {
    #[must_use]
    pub fn new(slug: LessonSlug, title: impl Into<String>) -> Self {
        Self {
            slug,
            title: title.into(),
        }
    }

    #[must_use]
    pub fn slug(&self) -> &LessonSlug {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A training module: an ordered set of lesson pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    slug: ModuleSlug,
    title: String,
    strapline: String,
    lessons: Vec<LessonRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonRefDraft {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleDraft {
    pub slug: String,
    pub title: String,
    pub strapline: String,
    pub lessons: Vec<LessonRefDraft>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleValidationError {
    #[error("invalid module slug: {0}")]
    Slug(#[source] SlugError),

    #[error("module title cannot be empty")]
    EmptyTitle,

    #[error("a module needs at least one lesson")]
    NoLessons,

    #[error("invalid lesson ref {index}: {source}")]
    LessonRef { index: usize, source: SlugError },

    #[error("lesson ref {index} needs a title")]
    EmptyLessonTitle { index: usize },

    #[error("duplicate lesson slug: {slug}")]
    DuplicateLesson { slug: String },
}

impl ModuleDraft {
    /// Validate an authored module table of contents.
    ///
    /// # Errors
    ///
    /// Returns `ModuleValidationError` for a bad slug, empty title, no
    /// lessons, or repeated lesson slugs.
    pub fn validate(self) -> Result<Module, ModuleValidationError> {
        let slug = ModuleSlug::new(self.slug).map_err(ModuleValidationError::Slug)?;

        if self.title.trim().is_empty() {
            return Err(ModuleValidationError::EmptyTitle);
        }
        if self.lessons.is_empty() {
            return Err(ModuleValidationError::NoLessons);
        }

        let mut lessons = Vec::with_capacity(self.lessons.len());
        let mut seen = HashSet::new();
        for (index, draft) in self.lessons.into_iter().enumerate() {
            let lesson_slug = LessonSlug::new(draft.slug)
                .map_err(|source| ModuleValidationError::LessonRef { index, source })?;
            if draft.title.trim().is_empty() {
                return Err(ModuleValidationError::EmptyLessonTitle { index });
            }
            if !seen.insert(lesson_slug.clone()) {
                return Err(ModuleValidationError::DuplicateLesson {
                    slug: lesson_slug.as_str().to_string(),
                });
            }
            lessons.push(LessonRef {
                slug: lesson_slug,
                title: draft.title,
            });
        }

        Ok(Module {
            slug,
            title: self.title,
            strapline: self.strapline,
            lessons,
        })
    }
}

impl Module {
    #[must_use]
    pub fn slug(&self) -> &ModuleSlug {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn strapline(&self) -> &str {
        &self.strapline
    }

    /// Lessons in presentation order.
    #[must_use]
    pub fn lessons(&self) -> &[LessonRef] {
        &self.lessons
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::QuestionIdDraft;

    fn question_draft(id: &str) -> QuestionDraft {
        QuestionDraft {
            id: QuestionIdDraft::Text(id.to_string()),
            prompt: "Pick one".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct: 0,
            explanation: "because".to_string(),
        }
    }

    fn lesson_draft() -> LessonDraft {
        LessonDraft {
            slug: "falls-101".to_string(),
            module: "working-at-height".to_string(),
            title: "Understanding Falls".to_string(),
            strapline: "Why falls from height keep killing people".to_string(),
            badge: "MODULE 1 · SECTION 1".to_string(),
            description: "Falls from height and the regulations that govern them".to_string(),
            in_thirty_seconds: vec!["No minimum height threshold".to_string()],
            on_site: vec!["Check the rescue plan first".to_string()],
            learning_outcomes: vec!["State the WAH Regs definition".to_string()],
            sections: vec![SectionDraft {
                heading: "What counts as height".to_string(),
                blocks: vec![BlockDraft::Paragraph {
                    text: "Any place a person could fall far enough to be injured.".to_string(),
                }],
                check: Some(question_draft("falls-check")),
            }],
            faqs: vec![FaqDraft {
                question: "Does a stepladder count?".to_string(),
                answer: "Yes.".to_string(),
            }],
            quiz: QuizDraft {
                title: "Section 1 Knowledge Check".to_string(),
                questions: vec![question_draft("q1"), question_draft("q2")],
            },
        }
    }

    #[test]
    fn valid_lesson_passes() {
        let lesson = lesson_draft().validate().unwrap();

        assert_eq!(lesson.slug().as_str(), "falls-101");
        assert_eq!(lesson.sections().len(), 1);
        assert!(lesson.sections()[0].check().is_some());
        assert_eq!(lesson.quiz().len(), 2);
    }

    #[test]
    fn duplicate_id_across_check_and_quiz_fails() {
        let mut draft = lesson_draft();
        draft.quiz.questions[0] = question_draft("falls-check");

        let err = draft.validate().unwrap_err();

        assert_eq!(
            err,
            LessonValidationError::DuplicateQuestionId {
                id: "falls-check".to_string()
            }
        );
    }

    #[test]
    fn lesson_without_sections_fails() {
        let mut draft = lesson_draft();
        draft.sections.clear();
        assert_eq!(
            draft.validate().unwrap_err(),
            LessonValidationError::NoSections
        );
    }

    #[test]
    fn section_without_blocks_fails() {
        let mut draft = lesson_draft();
        draft.sections[0].blocks.clear();
        assert!(matches!(
            draft.validate().unwrap_err(),
            LessonValidationError::Section {
                index: 0,
                source: SectionValidationError::NoBlocks
            }
        ));
    }

    #[test]
    fn invalid_check_is_reported_with_its_section() {
        let mut draft = lesson_draft();
        draft.sections[0].check.as_mut().unwrap().correct = 9;
        assert!(matches!(
            draft.validate().unwrap_err(),
            LessonValidationError::Section {
                index: 0,
                source: SectionValidationError::Check(
                    QuestionValidationError::CorrectOutOfRange { correct: 9, len: 2 }
                )
            }
        ));
    }

    #[test]
    fn empty_faq_fails() {
        let mut draft = lesson_draft();
        draft.faqs[0].answer = String::new();
        assert_eq!(
            draft.validate().unwrap_err(),
            LessonValidationError::EmptyFaq { index: 0 }
        );
    }

    #[test]
    fn module_rejects_duplicate_lesson_slugs() {
        let draft = ModuleDraft {
            slug: "working-at-height".to_string(),
            title: "Working at Height".to_string(),
            strapline: "Ladders, towers, and fall protection".to_string(),
            lessons: vec![
                LessonRefDraft {
                    slug: "falls-101".to_string(),
                    title: "Understanding Falls".to_string(),
                },
                LessonRefDraft {
                    slug: "falls-101".to_string(),
                    title: "Understanding Falls Again".to_string(),
                },
            ],
        };

        assert_eq!(
            draft.validate().unwrap_err(),
            ModuleValidationError::DuplicateLesson {
                slug: "falls-101".to_string()
            }
        );
    }
}
