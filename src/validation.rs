// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Field checks for folder and note candidates.
//!
//! Every check returns `Ok(())` when the candidate is acceptable and a
//! [`ValidationError`] naming the first offending field otherwise. Note
//! fields are checked in a fixed order (`name`, `content`, `folderId`) so the
//! message is deterministic when several fields are missing at once.

use crate::models::{FolderFields, NoteFields};

pub const FOLDER_NAME_MISSING: &str = "Folder name must be provided";
pub const NOTE_NAME_MISSING: &str = "Note name must be provided";
pub const NOTE_CONTENT_MISSING: &str = "Note content must be provided";
pub const NOTE_FOLDER_MISSING: &str = "Note must be assigned to an existing folder";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn fail(message: &str) -> Result<(), ValidationError> {
    tracing::error!("{message}");
    Err(ValidationError::new(message))
}

fn text_missing(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Full check for a folder about to be created.
pub fn validate_folder(folder: &FolderFields) -> Result<(), ValidationError> {
    if text_missing(folder.name.as_deref()) {
        return fail(FOLDER_NAME_MISSING);
    }
    Ok(())
}

/// Full check for a note about to be created.
pub fn validate_note(note: &NoteFields) -> Result<(), ValidationError> {
    if text_missing(note.name.as_deref()) {
        return fail(NOTE_NAME_MISSING);
    }
    if text_missing(note.content.as_deref()) {
        return fail(NOTE_CONTENT_MISSING);
    }
    if note.folder_id.unwrap_or(0) == 0 {
        return fail(NOTE_FOLDER_MISSING);
    }
    Ok(())
}

/// Checks only the folder fields present in a patch.
pub fn validate_folder_patch(patch: &FolderFields) -> Result<(), ValidationError> {
    if patch.name.as_deref() == Some("") {
        return fail(FOLDER_NAME_MISSING);
    }
    Ok(())
}

/// Checks only the note fields present in a patch, in the same order as
/// [`validate_note`].
pub fn validate_note_patch(patch: &NoteFields) -> Result<(), ValidationError> {
    if patch.name.as_deref() == Some("") {
        return fail(NOTE_NAME_MISSING);
    }
    if patch.content.as_deref() == Some("") {
        return fail(NOTE_CONTENT_MISSING);
    }
    if patch.folder_id == Some(0) {
        return fail(NOTE_FOLDER_MISSING);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(name: Option<&str>, content: Option<&str>, folder_id: Option<i64>) -> NoteFields {
        NoteFields {
            name: name.map(Into::into),
            content: content.map(Into::into),
            folder_id,
        }
    }

    #[test]
    fn folder_requires_non_empty_name() {
        assert!(validate_folder(&FolderFields {
            name: Some("Work".into())
        })
        .is_ok());

        let err = validate_folder(&FolderFields { name: None }).unwrap_err();
        assert_eq!(err.message(), FOLDER_NAME_MISSING);

        let err = validate_folder(&FolderFields {
            name: Some(String::new()),
        })
        .unwrap_err();
        assert_eq!(err.message(), FOLDER_NAME_MISSING);
    }

    #[test]
    fn note_reports_first_missing_field_in_order() {
        let err = validate_note(&note(None, None, None)).unwrap_err();
        assert_eq!(err.message(), NOTE_NAME_MISSING);

        let err = validate_note(&note(Some("n"), Some(""), None)).unwrap_err();
        assert_eq!(err.message(), NOTE_CONTENT_MISSING);

        let err = validate_note(&note(Some("n"), Some("c"), Some(0))).unwrap_err();
        assert_eq!(err.message(), NOTE_FOLDER_MISSING);

        assert!(validate_note(&note(Some("n"), Some("c"), Some(1))).is_ok());
    }

    #[test]
    fn patches_only_check_present_fields() {
        assert!(validate_note_patch(&note(None, Some("c2"), None)).is_ok());
        assert!(validate_folder_patch(&FolderFields::default()).is_ok());

        let err = validate_note_patch(&note(None, Some(""), None)).unwrap_err();
        assert_eq!(err.message(), NOTE_CONTENT_MISSING);

        let err = validate_note_patch(&note(Some("n"), None, Some(0))).unwrap_err();
        assert_eq!(err.message(), NOTE_FOLDER_MISSING);

        let err = validate_folder_patch(&FolderFields {
            name: Some(String::new()),
        })
        .unwrap_err();
        assert_eq!(err.message(), FOLDER_NAME_MISSING);
    }
}
