// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Note repository for the `notes` table.
//!
//! `modified` is stamped here on insert and on every update, so callers
//! never supply it.

use chrono::Utc;
use sqlx::SqlitePool;

use super::super::StoreResult;
use crate::models::{NewNote, Note, NoteFields};

const NOTE_COLUMNS: &str = "id, name, content, folder_id, modified";

/// Repository for note operations on the relational store.
pub struct NoteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> NoteRepository<'a> {
    /// Create a new NoteRepository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every note in id order.
    pub async fn list_all(&self) -> StoreResult<Vec<Note>> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY id");
        let notes = sqlx::query_as::<_, Note>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(notes)
    }

    /// Get a note by ID, `None` if it does not exist.
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<Note>> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?");
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(note)
    }

    /// Insert a note and return the stored row.
    ///
    /// Fails with `StoreError::ForeignKeyViolation` when `folder_id` names
    /// no folder.
    pub async fn insert(&self, note: &NewNote) -> StoreResult<Note> {
        let sql = format!(
            "INSERT INTO notes (name, content, folder_id, modified) VALUES (?, ?, ?, ?) RETURNING {NOTE_COLUMNS}"
        );
        let stored = sqlx::query_as::<_, Note>(&sql)
            .bind(&note.name)
            .bind(&note.content)
            .bind(note.folder_id)
            .bind(Utc::now())
            .fetch_one(self.pool)
            .await?;
        Ok(stored)
    }

    /// Write the fields present in `patch` and refresh `modified`.
    pub async fn update_by_id(&self, id: i64, patch: &NoteFields) -> StoreResult<Option<Note>> {
        let sql = format!(
            "UPDATE notes SET \
                name = COALESCE(?, name), \
                content = COALESCE(?, content), \
                folder_id = COALESCE(?, folder_id), \
                modified = ? \
             WHERE id = ? RETURNING {NOTE_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Note>(&sql)
            .bind(patch.name.as_deref())
            .bind(patch.content.as_deref())
            .bind(patch.folder_id)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(updated)
    }

    /// Delete a note, returning the number of rows removed.
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewFolder;
    use crate::storage::{connect_in_memory, FolderRepository, StoreError};

    async fn seeded_pool() -> SqlitePool {
        let pool = connect_in_memory().await.unwrap();
        let folders = FolderRepository::new(&pool);
        for name in ["Important", "Super"] {
            folders
                .insert(&NewFolder { name: name.into() })
                .await
                .unwrap();
        }
        pool
    }

    fn new_note(name: &str, folder_id: i64) -> NewNote {
        NewNote {
            name: name.to_string(),
            content: "lorem ipsum".to_string(),
            folder_id,
        }
    }

    #[tokio::test]
    async fn insert_and_get_note() {
        let pool = seeded_pool().await;
        let repo = NoteRepository::new(&pool);

        let stored = repo.insert(&new_note("First note", 1)).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.name, "First note");
        assert_eq!(stored.folder_id, 1);

        let loaded = repo.get_by_id(stored.id).await.unwrap();
        assert_eq!(loaded, Some(stored));
    }

    #[tokio::test]
    async fn insert_rejects_unknown_folder() {
        let pool = seeded_pool().await;
        let repo = NoteRepository::new(&pool);

        let err = repo.insert(&new_note("Orphan", 77)).await.unwrap_err();
        assert!(matches!(err, StoreError::ForeignKeyViolation));
    }

    #[tokio::test]
    async fn update_keeps_absent_fields_and_refreshes_modified() {
        let pool = seeded_pool().await;
        let repo = NoteRepository::new(&pool);
        let stored = repo.insert(&new_note("First note", 1)).await.unwrap();

        let patch = NoteFields {
            content: Some("c2".into()),
            ..NoteFields::default()
        };
        let updated = repo.update_by_id(stored.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.name, stored.name);
        assert_eq!(updated.folder_id, stored.folder_id);
        assert_eq!(updated.content, "c2");
        assert!(updated.modified >= stored.modified);
    }

    #[tokio::test]
    async fn update_to_unknown_folder_is_rejected() {
        let pool = seeded_pool().await;
        let repo = NoteRepository::new(&pool);
        let stored = repo.insert(&new_note("First note", 1)).await.unwrap();

        let patch = NoteFields {
            folder_id: Some(500),
            ..NoteFields::default()
        };
        let err = repo.update_by_id(stored.id, &patch).await.unwrap_err();
        assert!(matches!(err, StoreError::ForeignKeyViolation));
    }

    #[tokio::test]
    async fn deleting_folder_cascades_to_notes() {
        let pool = seeded_pool().await;
        let repo = NoteRepository::new(&pool);
        repo.insert(&new_note("First note", 1)).await.unwrap();
        repo.insert(&new_note("Second note", 2)).await.unwrap();

        FolderRepository::new(&pool).delete_by_id(1).await.unwrap();

        let remaining = repo.list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].folder_id, 2);
        assert_eq!(repo.delete_by_id(1).await.unwrap(), 0);
    }
}
