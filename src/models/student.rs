use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::StudentId;
use super::validation::{ValidationError, require_range, require_text};

/// Inclusive age bounds accepted at the boundary.
pub const AGE_RANGE: (i64, i64) = (16, 50);

/// Inclusive score bounds accepted at the boundary.
pub const SCORE_RANGE: (f64, f64) = (0.0, 100.0);

/// A stored student record.
///
/// On the wire the caller-assigned student number keeps its historical name
/// `student_id`; `id` is the system-assigned primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(rename = "student_id")]
    pub student_number: String,
    pub name: String,
    pub gender: String,
    pub age: i64,
    pub major: String,
    pub score: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Editable fields of a student, as supplied on create and update.
///
/// Updates are full-field: every editable column is overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    #[serde(rename = "student_id")]
    pub student_number: String,
    pub name: String,
    pub gender: String,
    pub age: i64,
    pub major: String,
    pub score: f64,
}

impl StudentDraft {
    /// Checks required text fields and the age/score bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("student_id", &self.student_number)?;
        require_text("name", &self.name)?;
        require_text("gender", &self.gender)?;
        require_text("major", &self.major)?;
        require_range(
            "age",
            self.age as f64,
            AGE_RANGE.0 as f64,
            AGE_RANGE.1 as f64,
        )?;
        require_range("score", self.score, SCORE_RANGE.0, SCORE_RANGE.1)?;
        Ok(())
    }
}
