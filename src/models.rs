// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the stored records and the request bodies used by
//! the REST API. Stored records derive `sqlx::FromRow` so repositories can
//! map rows directly, and every type derives `ToSchema` for the OpenAPI
//! document.
//!
//! ## Field Naming
//!
//! The note's folder reference lives in the `folder_id` column and travels
//! over the wire as `folderId`. No other spelling is accepted.
//!
//! ## Model Categories
//!
//! - **Folders**: named containers referenced by notes
//! - **Notes**: text entries belonging to exactly one folder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// =============================================================================
// Folder Models
// =============================================================================

/// A folder row as stored in the `folders` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, PartialEq, Eq)]
pub struct Folder {
    /// Store-generated identifier.
    pub id: i64,
    /// Display name of the folder.
    pub name: String,
}

/// Folder fields accepted in a request body.
///
/// Used both for creation (every field required) and for partial updates
/// (only the fields present are written). A key that is missing or `null`
/// in the JSON body deserializes to `None`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FolderFields {
    #[serde(default)]
    pub name: Option<String>,
}

impl FolderFields {
    /// `true` when the body carried no updatable key at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// A validated folder ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub name: String,
}

// =============================================================================
// Note Models
// =============================================================================

/// A note row as stored in the `notes` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, PartialEq, Eq)]
pub struct Note {
    /// Store-generated identifier.
    pub id: i64,
    /// Title of the note.
    pub name: String,
    /// Body text of the note.
    pub content: String,
    /// Folder this note belongs to.
    #[serde(rename = "folderId")]
    pub folder_id: i64,
    /// Last time the note was created or updated.
    pub modified: DateTime<Utc>,
}

/// Note fields accepted in a request body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, PartialEq, Eq)]
pub struct NoteFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "folderId")]
    pub folder_id: Option<i64>,
}

impl NoteFields {
    /// `true` when the body carried no updatable key at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none() && self.folder_id.is_none()
    }
}

/// A validated note ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub content: String,
    pub folder_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn note_serializes_folder_reference_as_camel_case() {
        let note = Note {
            id: 7,
            name: "n".into(),
            content: "c".into(),
            folder_id: 3,
            modified: DateTime::parse_from_rfc3339("2019-01-03T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["folderId"], 3);
        assert!(value.get("folder_id").is_none());
        assert_eq!(value["modified"], "2019-01-03T00:00:00Z");
    }

    #[test]
    fn note_fields_treat_null_and_missing_as_absent() {
        let fields: NoteFields =
            serde_json::from_value(json!({ "name": null, "unknown": "x" })).unwrap();
        assert!(fields.is_empty());

        let fields: NoteFields = serde_json::from_value(json!({ "folderId": 0 })).unwrap();
        assert!(!fields.is_empty());
        assert_eq!(fields.folder_id, Some(0));
    }

    #[test]
    fn lowercase_folder_reference_is_ignored() {
        let fields: NoteFields = serde_json::from_value(json!({ "folderid": 2 })).unwrap();
        assert_eq!(fields.folder_id, None);
    }

    #[test]
    fn empty_string_counts_as_present() {
        let fields: FolderFields = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(!fields.is_empty());
    }
}
