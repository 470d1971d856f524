//! A fresh store goes through initialization and serves the seed rows.

use anyhow::Result;
use roster::db::SEED_STUDENTS;
use roster::{Database, NoteRepository, StudentDraft, StudentRepository};
use tempfile::tempdir;

#[test]
fn initialize_seeds_students_once() -> Result<()> {
    // Arrange: empty directory, no database file yet
    let dir = tempdir()?;
    let db = Database::new(dir.path().join("fresh.db"));

    // Act: initialize twice, as two process starts would
    db.initialize()?;
    let second = db.initialize()?;

    // Assert: seed rows present exactly once, ids 1..=n
    let students = StudentRepository::new(db.clone()).list_all()?;
    assert_eq!(students.len(), SEED_STUDENTS.len());
    assert_eq!(second.students_seeded, 0);

    let mut ids: Vec<i64> = students.iter().map(|s| s.id.get()).collect();
    ids.sort_unstable();
    let expected: Vec<i64> = (1..=SEED_STUDENTS.len() as i64).collect();
    assert_eq!(ids, expected);

    Ok(())
}

#[test]
fn data_survives_reopening_the_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("persist.db");

    let created = {
        let db = Database::new(&path);
        db.initialize()?;
        StudentRepository::new(db).create(&StudentDraft {
            student_number: "2024099".to_string(),
            name: "测试".to_string(),
            gender: "男".to_string(),
            age: 20,
            major: "测试专业".to_string(),
            score: 100.0,
        })?
    };

    let reopened = Database::new(&path);
    reopened.initialize()?;
    let fetched = StudentRepository::new(reopened).get(created.id)?;

    assert_eq!(fetched, Some(created));
    Ok(())
}

#[test]
fn seeded_notes_search_finds_homework() -> Result<()> {
    let dir = tempdir()?;
    let db = Database::new(dir.path().join("notes.db"));
    db.initialize()?;
    let notes = NoteRepository::new(db);

    let hits = notes.search("作业")?;

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "待办事项");
    Ok(())
}
