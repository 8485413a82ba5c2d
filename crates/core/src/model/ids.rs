use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlugError {
    #[error("slug cannot be empty")]
    Empty,

    #[error("slug contains invalid character {ch:?}")]
    InvalidChar { ch: char },
}

fn validate_slug(raw: &str) -> Result<String, SlugError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SlugError::Empty);
    }
    for ch in trimmed.chars() {
        if !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-') {
            return Err(SlugError::InvalidChar { ch });
        }
    }
    Ok(trimmed.to_string())
}

/// Validated route segment identifying a module (e.g. `mental-health`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleSlug(String);

impl ModuleSlug {
    /// Create a validated module slug.
    ///
    /// # Errors
    ///
    /// Returns `SlugError` when the slug is empty or contains characters
    /// outside `a-z`, `0-9`, and `-`.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        validate_slug(&value.into()).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated route segment identifying a lesson page within a module.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonSlug(String);

impl LessonSlug {
    /// Create a validated lesson slug.
    ///
    /// # Errors
    ///
    /// Returns `SlugError` when the slug is empty or contains characters
    /// outside `a-z`, `0-9`, and `-`.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        validate_slug(&value.into()).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stable identifier for a question, unique within its page.
///
/// Authored content uses both string ids (inline checks) and numeric ids
/// (quiz banks); both canonicalize to the string form here.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a question id from authored text.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::Empty` when the id is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn from_number(value: u64) -> Self {
        Self(value.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleSlug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleSlug> for String {
    fn from(slug: ModuleSlug) -> Self {
        slug.0
    }
}

impl TryFrom<String> for LessonSlug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LessonSlug> for String {
    fn from(slug: LessonSlug) -> Self {
        slug.0
    }
}

impl fmt::Debug for ModuleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleSlug({})", self.0)
    }
}

impl fmt::Debug for LessonSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonSlug({})", self.0)
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for ModuleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LessonSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

impl FromStr for ModuleSlug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for LessonSlug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_lowercase_and_dashes() {
        let slug = ModuleSlug::new("working-at-height").unwrap();
        assert_eq!(slug.as_str(), "working-at-height");
    }

    #[test]
    fn slug_trims_whitespace() {
        let slug = LessonSlug::new("  falls-101  ").unwrap();
        assert_eq!(slug.as_str(), "falls-101");
    }

    #[test]
    fn slug_rejects_empty() {
        let err = ModuleSlug::new("   ").unwrap_err();
        assert_eq!(err, SlugError::Empty);
    }

    #[test]
    fn slug_rejects_uppercase() {
        let err = LessonSlug::new("Falls").unwrap_err();
        assert_eq!(err, SlugError::InvalidChar { ch: 'F' });
    }

    #[test]
    fn slug_parses_from_route_segment() {
        let slug: ModuleSlug = "mental-health".parse().unwrap();
        assert_eq!(slug.to_string(), "mental-health");
    }

    #[test]
    fn question_id_from_number_matches_text_form() {
        assert_eq!(QuestionId::from_number(7), QuestionId::new("7").unwrap());
    }
}
