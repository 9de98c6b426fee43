//! Create, read, update and delete flows across all three collections.

use std::collections::HashSet;

use content_store::{ContentStore, CourseFields, MaterialFields, SectionFields, StoreError};

#[test]
fn test_full_hierarchy_lifecycle() -> anyhow::Result<()> {
    let store = ContentStore::new();

    let course = store.create_course(CourseFields {
        description: Some("Ownership and borrowing".to_string()),
        language: Some("en".to_string()),
        tags: Some(vec!["rust".to_string(), "systems".to_string()]),
        ..CourseFields::titled("Rust 101")
    })?;
    let intro = store.create_section(
        &course.id,
        SectionFields {
            sequence: Some(1),
            ..SectionFields::titled("Intro")
        },
    )?;
    let video = store.create_material(&intro.id, MaterialFields::new("video", "Welcome"))?;

    assert_eq!(store.get_section(&intro.id)?.course_id, course.id);
    assert_eq!(store.get_material(&video.id)?.section_id, intro.id);
    assert_eq!(video.status, "draft");

    let published = store.update_material(
        &video.id,
        MaterialFields {
            status: Some("published".to_string()),
            ..Default::default()
        },
    )?;
    assert_eq!(published.status, "published");
    assert_eq!(published.kind, "video");
    assert_eq!(published.title, "Welcome");

    store.delete_material(&video.id)?;
    assert!(store.list_materials(Some(&intro.id))?.is_empty());
    Ok(())
}

/// Updating only the title leaves the description as it was.
#[test]
fn test_partial_update_preserves_untouched_fields() -> anyhow::Result<()> {
    let store = ContentStore::new();
    let course = store.create_course(CourseFields {
        description: Some("D".to_string()),
        ..CourseFields::titled("A")
    })?;

    let updated = store.update_course(&course.id, CourseFields::titled("B"))?;
    assert_eq!(updated.title, "B");
    assert_eq!(updated.description, "D");
    assert_eq!(updated.status, "draft");
    assert_eq!(updated.visibility, "private");
    assert_eq!(store.get_course(&course.id)?, updated);
    Ok(())
}

/// Empty values cannot be used to clear a stored field.
#[test]
fn test_update_cannot_clear_fields() -> anyhow::Result<()> {
    let store = ContentStore::new();
    let course = store.create_course(CourseFields {
        description: Some("keep me".to_string()),
        tags: Some(vec!["t".to_string()]),
        ..CourseFields::titled("A")
    })?;

    let updated = store.update_course(
        &course.id,
        CourseFields {
            title: Some(String::new()),
            description: Some(String::new()),
            tags: Some(Vec::new()),
            ..Default::default()
        },
    )?;
    assert_eq!(updated, course);
    Ok(())
}

#[test]
fn test_section_sequence_cannot_be_reset_to_zero() -> anyhow::Result<()> {
    let store = ContentStore::new();
    let section = store.create_section(
        "c",
        SectionFields {
            sequence: Some(7),
            ..SectionFields::titled("S")
        },
    )?;
    let updated = store.update_section(
        &section.id,
        SectionFields {
            sequence: Some(0),
            ..Default::default()
        },
    )?;
    assert_eq!(updated.sequence, 7);
    Ok(())
}

#[test]
fn test_orphan_section_is_accepted() -> anyhow::Result<()> {
    let store = ContentStore::new();
    let section = store.create_section("no-such-course", SectionFields::titled("Lost"))?;
    assert_eq!(section.course_id, "no-such-course");
    assert_eq!(store.list_sections(Some("no-such-course"))?, vec![section]);
    Ok(())
}

#[test]
fn test_section_filter_for_every_course() -> anyhow::Result<()> {
    let store = ContentStore::new();
    let mut course_ids = Vec::new();
    for c in 0..5 {
        let course = store.create_course(CourseFields::titled(format!("Course {}", c)))?;
        for s in 0..=c {
            store.create_section(&course.id, SectionFields::titled(format!("Section {}", s)))?;
        }
        course_ids.push(course.id);
    }

    for (i, course_id) in course_ids.iter().enumerate() {
        let sections = store.list_sections(Some(course_id))?;
        assert_eq!(sections.len(), i + 1);
        assert!(sections.iter().all(|s| &s.course_id == course_id));
    }
    assert_eq!(store.list_sections(None)?.len(), 15);
    Ok(())
}

#[test]
fn test_identifiers_are_not_reused_after_delete() -> anyhow::Result<()> {
    let store = ContentStore::new();
    let mut seen = HashSet::new();
    for i in 0..200 {
        let course = store.create_course(CourseFields::titled(format!("c{}", i)))?;
        assert!(seen.insert(course.id.clone()));
        store.delete_course(&course.id)?;
    }
    assert!(store.list_courses()?.is_empty());
    Ok(())
}

#[test]
fn test_validation_failure_leaves_store_untouched() {
    let store = ContentStore::new();
    let err = store
        .create_material(
            "s",
            MaterialFields {
                title: Some("No type".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::MissingField {
            entity: "material",
            field: "type"
        }
    );
    assert_eq!(err.to_string(), "material field 'type' is required");
    assert!(store.list_materials(None).unwrap().is_empty());
}
