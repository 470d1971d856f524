use serde::{Deserialize, Serialize};
use std::fmt;

/// System-assigned identifier of a student row.
///
/// This is the table's primary key, not the caller-assigned student number
/// carried in [`Student::student_number`](super::Student::student_number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw rowid, as bound into SQL parameters.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary key of the `notes` table; also the `{id}` segment of
/// `/api/notes/{id}` routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
