//! Wire and domain types shared by every Donezo crate.
//!
//! Snapshot types mirror the JSON the dashboard backend returns. Missing
//! fields fall back to their defaults so a partially populated payload still
//! renders.

use serde::{Deserialize, Serialize};

/// Backend record identifiers are integers.
pub type DbId = i64;

/// Calendar dates (project due dates) carry no time zone.
pub type Date = chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The authenticated user, as persisted in session storage under `"user"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: DbId,
    pub email: String,
}

/// Body returned by `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub id: DbId,
    pub email: String,
    pub token: String,
}

impl LoginResponse {
    /// Split the response into the identity and its credential token.
    pub fn into_parts(self) -> (Identity, String) {
        (
            Identity {
                id: self.id,
                email: self.email,
            },
            self.token,
        )
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Headline figures shown on the stat cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    pub total_users: u64,
    pub active_users: u64,
    pub revenue: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: DbId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: String,
}

impl UserRecord {
    /// Only `"active"` is distinguished; every other status is inactive.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: DbId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub price: f64,
}

/// One day of traffic. Position in the snapshot sequence is the day index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsRecord {
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
}

/// One complete `GET /api/dashboard` result. Replaced wholesale on refetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub overview: Overview,
    pub users: Vec<UserRecord>,
    pub products: Vec<ProductRecord>,
    pub analytics: Vec<AnalyticsRecord>,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Pending,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in progress" | "in_progress" | "in-progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "pending" => Ok(ProjectStatus::Pending),
            other => Err(crate::error::CoreError::Validation(format!(
                "Unknown project status: {other}"
            ))),
        }
    }
}

/// A row in the local project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub meta: String,
    pub due: Date,
    pub status: ProjectStatus,
}
