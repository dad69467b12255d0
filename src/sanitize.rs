// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Output escaping for free-text fields.
//!
//! The store keeps the raw text a client sent. Escaping happens only on the
//! way out, on every list and single-record payload.

use crate::models::{Folder, Note};

/// Replaces the characters that can open a tag or break out of an attribute.
///
/// `&` is left alone, so applying the escape twice yields the same string.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// A record that can be turned into its transport-safe form.
pub trait Sanitize {
    fn sanitize(self) -> Self;
}

impl Sanitize for Folder {
    fn sanitize(self) -> Self {
        Folder {
            name: escape_html(&self.name),
            ..self
        }
    }
}

impl Sanitize for Note {
    fn sanitize(self) -> Self {
        Note {
            name: escape_html(&self.name),
            content: escape_html(&self.content),
            ..self
        }
    }
}

impl<T: Sanitize> Sanitize for Vec<T> {
    fn sanitize(self) -> Self {
        self.into_iter().map(Sanitize::sanitize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"Naughty <script>alert("xss");</script>"#),
            "Naughty &lt;script&gt;alert(&quot;xss&quot;);&lt;/script&gt;"
        );
        assert_eq!(escape_html("it's"), "it&#x27;s");
        assert_eq!(escape_html("plain & simple"), "plain & simple");
    }

    #[test]
    fn escaping_is_idempotent() {
        let once = escape_html(r#"<img src="x" onerror='alert(1)'>"#);
        assert_eq!(escape_html(&once), once);
    }

    #[test]
    fn note_sanitize_leaves_non_text_fields() {
        let modified = Utc::now();
        let note = Note {
            id: 911,
            name: "<b>".into(),
            content: "<i>".into(),
            folder_id: 4,
            modified,
        }
        .sanitize();

        assert_eq!(note.id, 911);
        assert_eq!(note.folder_id, 4);
        assert_eq!(note.modified, modified);
        assert_eq!(note.name, "&lt;b&gt;");
        assert_eq!(note.content, "&lt;i&gt;");
    }

    #[test]
    fn folder_lists_are_sanitized_element_wise() {
        let folders = vec![
            Folder {
                id: 1,
                name: "<a>".into(),
            },
            Folder {
                id: 2,
                name: "ok".into(),
            },
        ]
        .sanitize();

        assert_eq!(folders[0].name, "&lt;a&gt;");
        assert_eq!(folders[1].name, "ok");
    }
}
