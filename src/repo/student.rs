use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{now_timestamp, timestamp_at};
use crate::{Database, StoreError, Student, StudentDraft, StudentId};

const STUDENT_COLUMNS: &str =
    "id, student_id, name, gender, age, major, score, created_at, updated_at";

/// CRUD operations over the `students` table.
///
/// Holds only the store handle; cloning is cheap.
///
/// # Examples
///
/// ```no_run
/// use roster::{Database, StudentRepository};
///
/// # fn main() -> Result<(), roster::StoreError> {
/// let db = Database::new("roster.db");
/// db.initialize()?;
///
/// let students = StudentRepository::new(db);
/// for student in students.list_all()? {
///     println!("{} {}", student.id, student.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StudentRepository {
    db: Database,
}

impl StudentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All students, newest `id` first. An empty table yields an empty vec.
    pub fn list_all(&self) -> Result<Vec<Student>, StoreError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY id DESC"
        ))?;
        let students = stmt
            .query_map([], map_student)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    /// The student with the given `id`, or `None`.
    pub fn get(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        let conn = self.db.connect()?;
        Ok(fetch_student(&conn, id)?)
    }

    /// Inserts a student and returns the row as stored.
    ///
    /// The draft is assumed to be validated already.
    pub fn create(&self, draft: &StudentDraft) -> Result<Student, StoreError> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO students (student_id, name, gender, age, major, score, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![
                draft.student_number,
                draft.name,
                draft.gender,
                draft.age,
                draft.major,
                draft.score,
                now_timestamp(),
            ],
        )?;

        let id = StudentId::new(conn.last_insert_rowid());
        let student = fetch_student(&conn, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;
        tracing::debug!(%id, "student created");
        Ok(student)
    }

    /// Overwrites every editable field and refreshes `updated_at`.
    ///
    /// Returns `None` without inserting anything when `id` does not exist.
    pub fn update(
        &self,
        id: StudentId,
        draft: &StudentDraft,
    ) -> Result<Option<Student>, StoreError> {
        let conn = self.db.connect()?;
        let changed = conn.execute(
            "UPDATE students
             SET student_id = ?1, name = ?2, gender = ?3, age = ?4, major = ?5, score = ?6,
                 updated_at = ?7
             WHERE id = ?8",
            params![
                draft.student_number,
                draft.name,
                draft.gender,
                draft.age,
                draft.major,
                draft.score,
                now_timestamp(),
                id.get(),
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        Ok(fetch_student(&conn, id)?)
    }

    /// Removes the student; `false` when no row had that `id`.
    pub fn delete(&self, id: StudentId) -> Result<bool, StoreError> {
        let conn = self.db.connect()?;
        let removed = conn.execute("DELETE FROM students WHERE id = ?1", [id.get()])?;
        Ok(removed > 0)
    }

    /// Number of stored students.
    pub fn count(&self) -> Result<usize, StoreError> {
        let conn = self.db.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn fetch_student(conn: &Connection, id: StudentId) -> rusqlite::Result<Option<Student>> {
    conn.query_row(
        &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?1"),
        [id.get()],
        map_student,
    )
    .optional()
}

fn map_student(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: StudentId::new(row.get(0)?),
        student_number: row.get(1)?,
        name: row.get(2)?,
        gender: row.get(3)?,
        age: row.get(4)?,
        major: row.get(5)?,
        score: row.get(6)?,
        created_at: timestamp_at(row, 7)?,
        updated_at: timestamp_at(row, 8)?,
    })
}
