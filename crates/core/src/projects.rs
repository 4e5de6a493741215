//! Local project list.
//!
//! The list is seeded once from the snapshot's products and afterwards only
//! grows through user-created rows, which go to the front. Rows are never
//! edited or removed here.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::format::format_price;
use crate::search::filter_entities;
use crate::types::{Date, ProductRecord, ProjectRow, ProjectStatus};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Products selling more than this many units are shown as completed.
pub const COMPLETED_SALES_THRESHOLD: u64 = 400;

pub const UNTITLED_PROJECT: &str = "Untitled Project";

pub const MANUAL_ENTRY_META: &str = "Manual entry";

/// Placeholder due date for seeded rows and new-project drafts.
pub fn default_due_date() -> Date {
    Date::from_ymd_opt(2024, 6, 20).unwrap_or_default()
}

/// A fresh, unique id for a user-created row.
pub fn generate_project_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Map a product onto the project list row shown for it.
pub fn project_from_product(product: &ProductRecord) -> ProjectRow {
    let status = if product.sales > COMPLETED_SALES_THRESHOLD {
        ProjectStatus::Completed
    } else {
        ProjectStatus::InProgress
    };

    ProjectRow {
        id: format!("p-{}", product.id),
        title: product.name.clone(),
        meta: format!(
            "Category: {} · Sales: {} · Price: {}",
            product.category,
            product.sales,
            format_price(product.price)
        ),
        due: default_due_date(),
        status,
    }
}

/// Contents of the "Add Project" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub meta: String,
    pub due: Date,
    pub status: ProjectStatus,
}

impl Default for NewProject {
    fn default() -> Self {
        Self {
            title: String::new(),
            meta: String::new(),
            due: default_due_date(),
            status: ProjectStatus::InProgress,
        }
    }
}

impl NewProject {
    /// Turn the draft into a row with the caller-supplied id.
    pub fn into_row(self, id: String) -> ProjectRow {
        ProjectRow {
            id,
            title: self.title,
            meta: self.meta,
            due: self.due,
            status: self.status,
        }
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ProjectCollection {
    rows: VecDeque<ProjectRow>,
}

impl ProjectCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the list from `products` unless it already has rows.
    ///
    /// Returns `true` when the list was seeded by this call.
    pub fn seed_once(&mut self, products: &[ProductRecord]) -> bool {
        if !self.rows.is_empty() {
            return false;
        }
        self.rows.extend(products.iter().map(project_from_product));
        true
    }

    /// Put a user-created row at the front of the list.
    ///
    /// An empty title or meta is replaced with its placeholder text.
    /// Returns the row as stored.
    pub fn add_row(&mut self, mut row: ProjectRow) -> &ProjectRow {
        if row.title.is_empty() {
            row.title = UNTITLED_PROJECT.to_string();
        }
        if row.meta.is_empty() {
            row.meta = MANUAL_ENTRY_META.to_string();
        }
        self.rows.push_front(row);
        &self.rows[0]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRow> {
        self.rows.iter()
    }

    /// Rows matching the search box, in list order.
    pub fn filtered(&self, query: &str) -> Vec<&ProjectRow> {
        filter_entities(&self.rows, query)
    }

    pub fn to_vec(&self) -> Vec<ProjectRow> {
        self.rows.iter().cloned().collect()
    }
}
