/// Complete database schema for the roster backend.
///
/// Uses CREATE TABLE/INDEX IF NOT EXISTS for idempotent execution; existing
/// tables and rows are never dropped or altered.
pub const INITIAL_SCHEMA: &str = r#"
-- Students: caller-assigned student_id is deliberately not unique
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id TEXT NOT NULL,
    name TEXT NOT NULL,
    gender TEXT NOT NULL,
    age INTEGER NOT NULL,
    major TEXT NOT NULL,
    score REAL NOT NULL,
    created_at INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
    updated_at INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER))
);

-- Notes: is_pinned is a 0/1 flag
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL DEFAULT '',
    color TEXT NOT NULL DEFAULT 'yellow',
    is_pinned INTEGER NOT NULL DEFAULT 0 CHECK (is_pinned IN (0, 1)),
    created_at INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
    updated_at INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER))
);

-- Lookup by external student number
CREATE INDEX IF NOT EXISTS idx_students_student_id ON students(student_id);

-- Pinned-first, newest-first listing
CREATE INDEX IF NOT EXISTS idx_notes_pinned_id ON notes(is_pinned DESC, id DESC);
"#;
