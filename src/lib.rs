pub mod config;
pub mod db;
pub mod error;
pub mod fallback;
pub mod http;
pub mod models;
pub mod repo;
pub mod telemetry;

pub use config::Config;
pub use db::{Database, InitReport};
pub use error::StoreError;
pub use models::{
    DEFAULT_NOTE_COLOR, DEFAULT_NOTE_TITLE, Note, NoteDraft, NoteId, Student, StudentDraft,
    StudentId, ValidationError,
};
pub use repo::{NoteRepository, StudentRepository};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_accessible_from_crate_root() {
        let draft = NoteDraft::default();
        assert_eq!(draft.title(), DEFAULT_NOTE_TITLE);
        assert_eq!(draft.color(), DEFAULT_NOTE_COLOR);

        let id = StudentId::new(1);
        assert_eq!(id.to_string(), "1");
    }
}
