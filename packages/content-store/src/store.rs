//! Lock-protected store holding all courses, sections and materials.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::id::generate_id;
use crate::model::{Course, CourseFields, Material, MaterialFields, Section, SectionFields};

/// The three collections, keyed by record identifier.
#[derive(Debug, Default)]
struct Collections {
    courses: HashMap<String, Course>,
    sections: HashMap<String, Section>,
    materials: HashMap<String, Material>,
}

/// Record counts taken under a single read lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub courses: usize,
    pub sections: usize,
    pub materials: usize,
}

/// Access to one collection for the generic store operations.
trait Record: Clone {
    const KIND: &'static str;
    type Fields;

    fn id(&self) -> &str;
    fn parent_id(&self) -> Option<&str>;
    fn merge(&mut self, fields: Self::Fields);
    fn table(collections: &Collections) -> &HashMap<String, Self>;
    fn table_mut(collections: &mut Collections) -> &mut HashMap<String, Self>;
}

impl Record for Course {
    const KIND: &'static str = Course::KIND;
    type Fields = CourseFields;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        None
    }

    fn merge(&mut self, fields: CourseFields) {
        Course::merge(self, fields)
    }

    fn table(collections: &Collections) -> &HashMap<String, Self> {
        &collections.courses
    }

    fn table_mut(collections: &mut Collections) -> &mut HashMap<String, Self> {
        &mut collections.courses
    }
}

impl Record for Section {
    const KIND: &'static str = Section::KIND;
    type Fields = SectionFields;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.course_id)
    }

    fn merge(&mut self, fields: SectionFields) {
        Section::merge(self, fields)
    }

    fn table(collections: &Collections) -> &HashMap<String, Self> {
        &collections.sections
    }

    fn table_mut(collections: &mut Collections) -> &mut HashMap<String, Self> {
        &mut collections.sections
    }
}

impl Record for Material {
    const KIND: &'static str = Material::KIND;
    type Fields = MaterialFields;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.section_id)
    }

    fn merge(&mut self, fields: MaterialFields) {
        Material::merge(self, fields)
    }

    fn table(collections: &Collections) -> &HashMap<String, Self> {
        &collections.materials
    }

    fn table_mut(collections: &mut Collections) -> &mut HashMap<String, Self> {
        &mut collections.materials
    }
}

/// In-memory content store.
///
/// One `RwLock` covers all three collections. Reads share the lock; every
/// mutation takes it exclusively, so writes to different collections are
/// serialized against each other as well. Parent identifiers are never
/// checked: sections may point at missing courses and deleting a course
/// leaves its sections in place.
#[derive(Debug)]
pub struct ContentStore {
    collections: RwLock<Collections>,
}

impl ContentStore {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Creates an empty store with collections pre-sized from `config`.
    pub fn with_config(config: &StoreConfig) -> Self {
        let capacity = config.initial_capacity;
        Self {
            collections: RwLock::new(Collections {
                courses: HashMap::with_capacity(capacity),
                sections: HashMap::with_capacity(capacity),
                materials: HashMap::with_capacity(capacity),
            }),
        }
    }

    /// Returns the number of records in each collection.
    pub fn counts(&self) -> Result<StoreCounts, StoreError> {
        let collections = self.read()?;
        Ok(StoreCounts {
            courses: collections.courses.len(),
            sections: collections.sections.len(),
            materials: collections.materials.len(),
        })
    }

    // Courses

    /// Lists all courses in unspecified order.
    pub fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        self.list::<Course>(None)
    }

    /// Creates a course, assigning a fresh identifier and defaults.
    ///
    /// # Errors
    /// `StoreError::MissingField` if `title` is absent or empty.
    pub fn create_course(&self, fields: CourseFields) -> Result<Course, StoreError> {
        fields.validate()?;
        self.insert(Course::from_fields(generate_id(), fields))
    }

    pub fn get_course(&self, id: &str) -> Result<Course, StoreError> {
        self.get::<Course>(id)
    }

    /// Merges the non-empty `fields` into an existing course.
    pub fn update_course(&self, id: &str, fields: CourseFields) -> Result<Course, StoreError> {
        self.update::<Course>(id, fields)
    }

    /// Deletes a course. Succeeds whether or not it existed.
    pub fn delete_course(&self, id: &str) -> Result<(), StoreError> {
        self.delete::<Course>(id)
    }

    // Sections

    /// Lists sections, optionally only those belonging to `course_id`.
    pub fn list_sections(&self, course_id: Option<&str>) -> Result<Vec<Section>, StoreError> {
        self.list::<Section>(course_id)
    }

    /// Creates a section under `course_id`. The course is not required to exist.
    pub fn create_section(
        &self,
        course_id: &str,
        fields: SectionFields,
    ) -> Result<Section, StoreError> {
        fields.validate()?;
        self.insert(Section::from_fields(
            generate_id(),
            course_id.to_string(),
            fields,
        ))
    }

    pub fn get_section(&self, id: &str) -> Result<Section, StoreError> {
        self.get::<Section>(id)
    }

    pub fn update_section(&self, id: &str, fields: SectionFields) -> Result<Section, StoreError> {
        self.update::<Section>(id, fields)
    }

    pub fn delete_section(&self, id: &str) -> Result<(), StoreError> {
        self.delete::<Section>(id)
    }

    // Materials

    pub fn list_materials(&self, section_id: Option<&str>) -> Result<Vec<Material>, StoreError> {
        self.list::<Material>(section_id)
    }

    /// Creates a material under `section_id`. The section is not required to exist.
    ///
    /// # Errors
    /// `StoreError::MissingField` if `title` or `type` is absent or empty.
    pub fn create_material(
        &self,
        section_id: &str,
        fields: MaterialFields,
    ) -> Result<Material, StoreError> {
        fields.validate()?;
        self.insert(Material::from_fields(
            generate_id(),
            section_id.to_string(),
            fields,
        ))
    }

    pub fn get_material(&self, id: &str) -> Result<Material, StoreError> {
        self.get::<Material>(id)
    }

    pub fn update_material(
        &self,
        id: &str,
        fields: MaterialFields,
    ) -> Result<Material, StoreError> {
        self.update::<Material>(id, fields)
    }

    pub fn delete_material(&self, id: &str) -> Result<(), StoreError> {
        self.delete::<Material>(id)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.collections.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.collections.write().map_err(|_| StoreError::LockPoisoned)
    }

    fn list<R: Record>(&self, parent_id: Option<&str>) -> Result<Vec<R>, StoreError> {
        let collections = self.read()?;
        Ok(R::table(&collections)
            .values()
            .filter(|r| parent_id.is_none() || r.parent_id() == parent_id)
            .cloned()
            .collect())
    }

    fn get<R: Record>(&self, id: &str) -> Result<R, StoreError> {
        let collections = self.read()?;
        R::table(&collections)
            .get(id)
            .cloned()
            .ok_or_else(|| not_found::<R>(id))
    }

    fn insert<R: Record>(&self, record: R) -> Result<R, StoreError> {
        let mut collections = self.write()?;
        R::table_mut(&mut collections).insert(record.id().to_string(), record.clone());
        drop(collections);

        tracing::info!(kind = R::KIND, id = record.id(), "created record");
        Ok(record)
    }

    fn update<R: Record>(&self, id: &str, fields: R::Fields) -> Result<R, StoreError> {
        let mut collections = self.write()?;
        let record = R::table_mut(&mut collections)
            .get_mut(id)
            .ok_or_else(|| not_found::<R>(id))?;
        record.merge(fields);
        let merged = record.clone();
        drop(collections);

        tracing::debug!(kind = R::KIND, id, "updated record");
        Ok(merged)
    }

    fn delete<R: Record>(&self, id: &str) -> Result<(), StoreError> {
        let removed = R::table_mut(&mut *self.write()?).remove(id).is_some();
        if removed {
            tracing::info!(kind = R::KIND, id, "deleted record");
        } else {
            tracing::debug!(kind = R::KIND, id, "delete of unknown record ignored");
        }
        Ok(())
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<R: Record>(id: &str) -> StoreError {
    StoreError::NotFound {
        entity: R::KIND,
        id: id.to_string(),
    }
}
