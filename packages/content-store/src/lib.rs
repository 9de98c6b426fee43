//! In-memory store for the content service.
//!
//! Holds courses, sections and materials behind a single reader/writer
//! lock, generates record identifiers and applies partial-update merges.

pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod store;

pub use error::StoreError;
pub use model::{Course, CourseFields, Material, MaterialFields, Section, SectionFields};
pub use store::{ContentStore, StoreCounts};
