//! Sample rows inserted into empty tables so a fresh deployment is usable.

use rusqlite::{Connection, params};

/// `(student_id, name, gender, age, major, score)`
pub const SEED_STUDENTS: &[(&str, &str, &str, i64, &str, f64)] = &[
    ("2024001", "张三", "男", 20, "计算机科学", 95.0),
    ("2024002", "李四", "女", 19, "软件工程", 88.0),
    ("2024003", "王五", "男", 21, "人工智能", 92.0),
];

/// `(title, content, color, is_pinned)`
pub const SEED_NOTES: &[(&str, &str, &str, bool)] = &[
    ("欢迎使用", "这是便签示例", "yellow", true),
    ("待办事项", "完成作业", "blue", false),
];

/// Inserts the student seed set if the table is empty.
///
/// Returns the number of rows inserted.
pub fn seed_students(conn: &Connection, now: i64) -> rusqlite::Result<usize> {
    if table_has_rows(conn, "students")? {
        return Ok(0);
    }

    let mut stmt = conn.prepare(
        "INSERT INTO students (student_id, name, gender, age, major, score, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
    )?;
    for (student_id, name, gender, age, major, score) in SEED_STUDENTS {
        stmt.execute(params![student_id, name, gender, age, major, score, now])?;
    }

    Ok(SEED_STUDENTS.len())
}

/// Inserts the note seed set if the table is empty.
///
/// Returns the number of rows inserted.
pub fn seed_notes(conn: &Connection, now: i64) -> rusqlite::Result<usize> {
    if table_has_rows(conn, "notes")? {
        return Ok(0);
    }

    let mut stmt = conn.prepare(
        "INSERT INTO notes (title, content, color, is_pinned, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )?;
    for (title, content, color, is_pinned) in SEED_NOTES {
        stmt.execute(params![title, content, color, is_pinned, now])?;
    }

    Ok(SEED_NOTES.len())
}

fn table_has_rows(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {table})"),
        [],
        |row| row.get(0),
    )
}
