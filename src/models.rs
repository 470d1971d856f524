mod ids;
mod note;
mod student;
mod validation;

pub use ids::{NoteId, StudentId};
pub use note::{DEFAULT_NOTE_COLOR, DEFAULT_NOTE_TITLE, MAX_TITLE_CHARS, Note, NoteDraft};
pub use student::{AGE_RANGE, SCORE_RANGE, Student, StudentDraft};
pub use validation::ValidationError;
