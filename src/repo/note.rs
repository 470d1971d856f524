use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{now_timestamp, timestamp_at};
use crate::{Database, Note, NoteDraft, NoteId, StoreError};

const NOTE_COLUMNS: &str = "id, title, content, color, is_pinned, created_at, updated_at";

/// Listing order shared by every multi-row note query.
const NOTE_ORDER: &str = "ORDER BY is_pinned DESC, id DESC";

/// CRUD operations over the `notes` table, plus pin toggling and search.
///
/// Every listing is pinned-first, then newest `id` first.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    db: Database,
}

impl NoteRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn list_all(&self) -> Result<Vec<Note>, StoreError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT {NOTE_COLUMNS} FROM notes {NOTE_ORDER}"))?;
        let notes = stmt
            .query_map([], map_note)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    pub fn get(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let conn = self.db.connect()?;
        Ok(fetch_note(&conn, id)?)
    }

    /// Inserts a note, filling omitted fields with their defaults, and
    /// returns the row as stored.
    pub fn create(&self, draft: &NoteDraft) -> Result<Note, StoreError> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO notes (title, content, color, is_pinned, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![
                draft.title(),
                draft.content(),
                draft.color(),
                draft.pinned(),
                now_timestamp(),
            ],
        )?;

        let id = NoteId::new(conn.last_insert_rowid());
        let note = fetch_note(&conn, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;
        tracing::debug!(%id, "note created");
        Ok(note)
    }

    /// Full-field overwrite; omitted draft fields are reset to their
    /// defaults. Returns `None` when `id` does not exist.
    pub fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Option<Note>, StoreError> {
        let conn = self.db.connect()?;
        let changed = conn.execute(
            "UPDATE notes
             SET title = ?1, content = ?2, color = ?3, is_pinned = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                draft.title(),
                draft.content(),
                draft.color(),
                draft.pinned(),
                now_timestamp(),
                id.get(),
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        Ok(fetch_note(&conn, id)?)
    }

    pub fn delete(&self, id: NoteId) -> Result<bool, StoreError> {
        let conn = self.db.connect()?;
        let removed = conn.execute("DELETE FROM notes WHERE id = ?1", [id.get()])?;
        Ok(removed > 0)
    }

    /// Flips `is_pinned` and refreshes `updated_at`.
    ///
    /// The flip happens in one statement, so two concurrent toggles on the
    /// same note always cancel out. Returns `None` when `id` does not exist.
    pub fn toggle_pin(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let conn = self.db.connect()?;
        let note = conn
            .query_row(
                &format!(
                    "UPDATE notes SET is_pinned = 1 - is_pinned, updated_at = ?1
                     WHERE id = ?2
                     RETURNING {NOTE_COLUMNS}"
                ),
                params![now_timestamp(), id.get()],
                map_note,
            )
            .optional()?;

        if let Some(note) = &note {
            tracing::debug!(%id, pinned = note.is_pinned, "note pin toggled");
        }
        Ok(note)
    }

    /// Notes whose title or content contains `keyword`, in listing order.
    ///
    /// Matching is a case-sensitive substring test; `%` and `_` have no
    /// special meaning. An empty keyword matches every note.
    pub fn search(&self, keyword: &str) -> Result<Vec<Note>, StoreError> {
        if keyword.is_empty() {
            return self.list_all();
        }

        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes
             WHERE instr(title, ?1) > 0 OR instr(content, ?1) > 0
             {NOTE_ORDER}"
        ))?;
        let notes = stmt
            .query_map([keyword], map_note)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let conn = self.db.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn fetch_note(conn: &Connection, id: NoteId) -> rusqlite::Result<Option<Note>> {
    conn.query_row(
        &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
        [id.get()],
        map_note,
    )
    .optional()
}

fn map_note(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: NoteId::new(row.get(0)?),
        title: row.get(1)?,
        content: row.get(2)?,
        color: row.get(3)?,
        is_pinned: row.get(4)?,
        created_at: timestamp_at(row, 5)?,
        updated_at: timestamp_at(row, 6)?,
    })
}
