//! Canned datasets served in degraded mode.
//!
//! When fallback is enabled, the list endpoints answer with these rows if the
//! store fails with a [`StoreError`](crate::StoreError). Nothing else falls
//! back: lookups and writes always report the failure.

use time::OffsetDateTime;
use time::macros::datetime;

use crate::{Note, NoteId, Student, StudentId};

const FALLBACK_TIMESTAMP: OffsetDateTime = datetime!(2024-09-01 00:00 UTC);

/// Students returned when the store is unreachable.
pub fn students() -> Vec<Student> {
    [
        (1, "2024001", "张三", "男", 20, "计算机科学", 95.0),
        (2, "2024002", "李四", "女", 19, "软件工程", 88.0),
    ]
    .into_iter()
    .map(|(id, number, name, gender, age, major, score)| Student {
        id: StudentId::new(id),
        student_number: number.to_string(),
        name: name.to_string(),
        gender: gender.to_string(),
        age,
        major: major.to_string(),
        score,
        created_at: FALLBACK_TIMESTAMP,
        updated_at: FALLBACK_TIMESTAMP,
    })
    .collect()
}

/// Notes returned when the store is unreachable, in listing order.
pub fn notes() -> Vec<Note> {
    [
        (1, "欢迎使用", "这是便签示例", "yellow", true),
        (2, "待办事项", "完成作业", "blue", false),
    ]
    .into_iter()
    .map(|(id, title, content, color, is_pinned)| Note {
        id: NoteId::new(id),
        title: title.to_string(),
        content: content.to_string(),
        color: color.to_string(),
        is_pinned,
        created_at: FALLBACK_TIMESTAMP,
        updated_at: FALLBACK_TIMESTAMP,
    })
    .collect()
}
