//! Course, section and material records.
//!
//! Each record type has a matching `*Fields` input in which every field is
//! optional. The same input drives creation (after validation) and partial
//! updates, where only non-empty values overwrite what is stored.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Status assigned to courses and materials created without one.
pub const DEFAULT_STATUS: &str = "draft";

/// Visibility assigned to courses created without one.
pub const DEFAULT_VISIBILITY: &str = "private";

/// Keeps a string only when it is present and non-empty.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn require(
    value: &Option<String>,
    entity: &'static str,
    field: &'static str,
) -> Result<(), StoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(StoreError::MissingField { entity, field }),
    }
}

/// A course, the top level of the content hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub language: String,
    pub status: String,
    pub visibility: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Course input for create and partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CourseFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub status: Option<String>,
    pub visibility: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CourseFields {
    /// Convenience constructor for a course input with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Checks that the fields required for creation are present.
    pub fn validate(&self) -> Result<(), StoreError> {
        require(&self.title, Course::KIND, "title")
    }
}

impl Course {
    pub const KIND: &'static str = "course";

    /// Builds a new course from validated input, applying defaults.
    pub(crate) fn from_fields(id: String, fields: CourseFields) -> Self {
        Self {
            id,
            title: fields.title.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            language: fields.language.unwrap_or_default(),
            status: non_empty(fields.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            visibility: non_empty(fields.visibility)
                .unwrap_or_else(|| DEFAULT_VISIBILITY.to_string()),
            tags: fields.tags.unwrap_or_default(),
        }
    }

    /// Overwrites every field that is non-empty in `fields`.
    pub(crate) fn merge(&mut self, fields: CourseFields) {
        if let Some(title) = non_empty(fields.title) {
            self.title = title;
        }
        if let Some(description) = non_empty(fields.description) {
            self.description = description;
        }
        if let Some(language) = non_empty(fields.language) {
            self.language = language;
        }
        if let Some(status) = non_empty(fields.status) {
            self.status = status;
        }
        if let Some(visibility) = non_empty(fields.visibility) {
            self.visibility = visibility;
        }
        if let Some(tags) = fields.tags.filter(|t| !t.is_empty()) {
            self.tags = tags;
        }
    }
}

/// A section of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub sequence: i64,
}

/// Section input for create and partial update.
///
/// A `sequence` of zero is indistinguishable from an absent one, so an
/// update can never set the sequence back to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SectionFields {
    pub title: Option<String>,
    pub sequence: Option<i64>,
}

impl SectionFields {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        require(&self.title, Section::KIND, "title")
    }
}

impl Section {
    pub const KIND: &'static str = "section";

    pub(crate) fn from_fields(id: String, course_id: String, fields: SectionFields) -> Self {
        Self {
            id,
            course_id,
            title: fields.title.unwrap_or_default(),
            sequence: fields.sequence.unwrap_or_default(),
        }
    }

    pub(crate) fn merge(&mut self, fields: SectionFields) {
        if let Some(title) = non_empty(fields.title) {
            self.title = title;
        }
        if let Some(sequence) = fields.sequence.filter(|s| *s != 0) {
            self.sequence = sequence;
        }
    }
}

/// A material (video, document, quiz...) attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    pub id: String,
    pub section_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: String,
}

/// Material input for create and partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MaterialFields {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
}

impl MaterialFields {
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Title is checked before type.
    pub fn validate(&self) -> Result<(), StoreError> {
        require(&self.title, Material::KIND, "title")?;
        require(&self.kind, Material::KIND, "type")
    }
}

impl Material {
    pub const KIND: &'static str = "material";

    pub(crate) fn from_fields(id: String, section_id: String, fields: MaterialFields) -> Self {
        Self {
            id,
            section_id,
            kind: fields.kind.unwrap_or_default(),
            title: fields.title.unwrap_or_default(),
            status: non_empty(fields.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }

    pub(crate) fn merge(&mut self, fields: MaterialFields) {
        if let Some(kind) = non_empty(fields.kind) {
            self.kind = kind;
        }
        if let Some(title) = non_empty(fields.title) {
            self.title = title;
        }
        if let Some(status) = non_empty(fields.status) {
            self.status = status;
        }
    }
}
