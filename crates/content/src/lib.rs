#![forbid(unsafe_code)]

pub mod catalog;
pub mod embedded;

pub use catalog::{ContentError, CourseCatalog};
pub use embedded::{EmbeddedCatalog, InMemoryCatalog};
