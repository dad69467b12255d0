// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Repository layer providing typed access to the relational store.
//!
//! Each repository borrows the shared connection pool and exposes the same
//! five operations for its table: list, get, insert, update and delete.

pub mod folders;
pub mod notes;

pub use folders::FolderRepository;
pub use notes::NoteRepository;
