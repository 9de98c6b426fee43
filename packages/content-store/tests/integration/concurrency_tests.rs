//! Concurrent access to a shared store.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use ntest::timeout;
use rayon::prelude::*;

use content_store::{ContentStore, CourseFields, SectionFields};

/// N parallel creates yield N distinct identifiers, all listed afterwards.
#[timeout(10000)]
#[test]
fn test_concurrent_creates_are_all_kept() {
    const N: usize = 1000;
    let store = ContentStore::new();

    let ids: Vec<String> = (0..N)
        .into_par_iter()
        .map(|i| {
            store
                .create_course(CourseFields::titled(format!("Course {}", i)))
                .unwrap()
                .id
        })
        .collect();

    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), N);

    let listed: HashSet<String> = store
        .list_courses()
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(listed.len(), N);
    assert!(ids.iter().all(|id| listed.contains(id)));
}

/// Concurrent updates to one record are serialized; the final value is one
/// of the written values and no writer observes a missing record.
#[timeout(10000)]
#[test]
fn test_concurrent_updates_to_one_record() {
    let store = Arc::new(ContentStore::new());
    let section = store
        .create_section("c", SectionFields::titled("start"))
        .unwrap();

    let handles: Vec<_> = (1..=8)
        .map(|worker| {
            let store = Arc::clone(&store);
            let id = section.id.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let updated = store
                        .update_section(
                            &id,
                            SectionFields {
                                sequence: Some(worker),
                                ..Default::default()
                            },
                        )
                        .unwrap();
                    assert_eq!(updated.title, "start");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let final_sequence = store.get_section(&section.id).unwrap().sequence;
    assert!((1..=8).contains(&final_sequence));
}

/// Readers running alongside writers never see a partially written record.
#[timeout(10000)]
#[test]
fn test_readers_alongside_writers() {
    let store = Arc::new(ContentStore::new());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..500 {
                let course = store
                    .create_course(CourseFields::titled(format!("c{}", i)))
                    .unwrap();
                store
                    .create_section(&course.id, SectionFields::titled("s"))
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    for course in store.list_courses().unwrap() {
                        assert!(!course.id.is_empty());
                        assert_eq!(course.status, "draft");
                    }
                    let counts = store.counts().unwrap();
                    assert!(counts.sections <= counts.courses);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let counts = store.counts().unwrap();
    assert_eq!(counts.courses, 500);
    assert_eq!(counts.sections, 500);
}
