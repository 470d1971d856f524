use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::NoteId;
use super::validation::{ValidationError, require_max_chars};

/// Title stored when a note is created without one.
pub const DEFAULT_NOTE_TITLE: &str = "新便签";

/// Color tag stored when a note is created without one.
pub const DEFAULT_NOTE_COLOR: &str = "yellow";

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// A stored sticky note.
///
/// `is_pinned` is serialized as `0`/`1` to match the stored column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub color: String,
    #[serde(with = "pin_flag")]
    pub is_pinned: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Editable fields of a note. Omitted fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "pin_flag::deserialize_raw")]
    pub is_pinned: Option<i64>,
}

impl NoteDraft {
    /// Checks the title length and the pin flag.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            require_max_chars("title", title, MAX_TITLE_CHARS)?;
        }
        if let Some(value) = self.is_pinned
            && !matches!(value, 0 | 1)
        {
            return Err(ValidationError::InvalidFlag {
                field: "is_pinned",
                value,
            });
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_NOTE_TITLE)
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_NOTE_COLOR)
    }

    /// Pin state to store; anything but `1` is unpinned.
    pub fn pinned(&self) -> bool {
        self.is_pinned == Some(1)
    }
}

/// Serde helpers for the integer-backed pin flag.
mod pin_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Bool(bool),
    }

    impl From<Raw> for i64 {
        fn from(raw: Raw) -> Self {
            match raw {
                Raw::Int(value) => value,
                Raw::Bool(value) => i64::from(value),
            }
        }
    }

    pub fn serialize<S: Serializer>(pinned: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*pinned))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(i64::from(Raw::deserialize(deserializer)?) != 0)
    }

    /// Keeps the raw value so out-of-range integers reach validation.
    pub fn deserialize_raw<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(i64::from))
    }
}
