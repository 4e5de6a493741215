//! Free-text search over users and projects.
//!
//! Matching is a case-insensitive substring test against one searchable
//! string per entity. There is no tokenizing or ranking; results keep their
//! input order.

use crate::types::{ProjectRow, UserRecord};

/// An entity that can be narrowed by the dashboard search box.
pub trait Searchable {
    /// The fields the search box matches against, joined by spaces.
    fn search_text(&self) -> String;
}

impl Searchable for UserRecord {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.status)
    }
}

impl Searchable for ProjectRow {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.meta, self.status)
    }
}

/// Normalize a raw query. Returns `None` when the query is blank.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Return the entities whose searchable text contains `query`.
///
/// A blank query returns every entity.
pub fn filter_entities<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let Some(needle) = normalize_query(query) else {
        return items.into_iter().collect();
    };

    items
        .into_iter()
        .filter(|item| item.search_text().to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
