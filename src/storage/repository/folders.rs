// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Folder repository for the `folders` table.

use sqlx::SqlitePool;

use super::super::StoreResult;
use crate::models::{Folder, FolderFields, NewFolder};

/// Repository for folder operations on the relational store.
pub struct FolderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FolderRepository<'a> {
    /// Create a new FolderRepository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every folder in id order.
    pub async fn list_all(&self) -> StoreResult<Vec<Folder>> {
        let folders = sqlx::query_as::<_, Folder>("SELECT id, name FROM folders ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(folders)
    }

    /// Get a folder by ID, `None` if it does not exist.
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<Folder>> {
        let folder = sqlx::query_as::<_, Folder>("SELECT id, name FROM folders WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(folder)
    }

    /// Insert a folder and return the stored row with its generated ID.
    pub async fn insert(&self, folder: &NewFolder) -> StoreResult<Folder> {
        let stored = sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name) VALUES (?) RETURNING id, name",
        )
        .bind(&folder.name)
        .fetch_one(self.pool)
        .await?;
        Ok(stored)
    }

    /// Write the fields present in `patch`; `None` if the folder is gone.
    pub async fn update_by_id(&self, id: i64, patch: &FolderFields) -> StoreResult<Option<Folder>> {
        let updated = sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = COALESCE(?, name) WHERE id = ? RETURNING id, name",
        )
        .bind(patch.name.as_deref())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(updated)
    }

    /// Delete a folder (and, through the foreign key, its notes).
    ///
    /// Returns the number of folder rows removed.
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::connect_in_memory;

    fn new_folder(name: &str) -> NewFolder {
        NewFolder {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_get_folder() {
        let pool = connect_in_memory().await.unwrap();
        let repo = FolderRepository::new(&pool);

        let stored = repo.insert(&new_folder("Work")).await.unwrap();
        assert_eq!(stored, Folder { id: 1, name: "Work".into() });

        let loaded = repo.get_by_id(stored.id).await.unwrap();
        assert_eq!(loaded, Some(stored));
        assert_eq!(repo.get_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_all_returns_folders_in_id_order() {
        let pool = connect_in_memory().await.unwrap();
        let repo = FolderRepository::new(&pool);

        for name in ["Important", "Super", "Spangley"] {
            repo.insert(&new_folder(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Important", "Super", "Spangley"]);
    }

    #[tokio::test]
    async fn update_writes_only_present_fields() {
        let pool = connect_in_memory().await.unwrap();
        let repo = FolderRepository::new(&pool);
        let stored = repo.insert(&new_folder("Work")).await.unwrap();

        let untouched = repo
            .update_by_id(stored.id, &FolderFields::default())
            .await
            .unwrap();
        assert_eq!(untouched, Some(stored.clone()));

        let renamed = repo
            .update_by_id(stored.id, &FolderFields { name: Some("Home".into()) })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "Home");

        let missing = repo
            .update_by_id(99, &FolderFields { name: Some("x".into()) })
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn delete_reports_rows_affected() {
        let pool = connect_in_memory().await.unwrap();
        let repo = FolderRepository::new(&pool);
        let stored = repo.insert(&new_folder("Work")).await.unwrap();

        assert_eq!(repo.delete_by_id(stored.id).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(stored.id).await.unwrap(), 0);
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
