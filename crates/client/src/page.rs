//! One dashboard page session.
//!
//! Owns the snapshot fetcher and the local project list for as long as the
//! page is open. The project list is seeded from the first snapshot that
//! arrives and is never re-seeded by later refreshes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use donezo_core::progress::ProgressConfig;
use donezo_core::projects::{generate_project_id, NewProject, ProjectCollection};
use donezo_core::types::ProjectRow;
use donezo_core::view::DashboardView;

use crate::fetcher::{FetchError, FetchOutcome, FetchState, SnapshotFetcher, SnapshotSource};
use crate::session::SessionStore;

pub struct DashboardPage<S> {
    session: Arc<SessionStore>,
    fetcher: SnapshotFetcher<S>,
    projects: Mutex<ProjectCollection>,
    progress: ProgressConfig,
}

impl<S: SnapshotSource> DashboardPage<S> {
    pub fn new(session: Arc<SessionStore>, source: S, progress: ProgressConfig) -> Self {
        Self {
            session,
            fetcher: SnapshotFetcher::new(source),
            projects: Mutex::new(ProjectCollection::new()),
            progress,
        }
    }

    /// Load (or reload) the snapshot with the current session's token.
    ///
    /// Signed-out callers get [`FetchError::Unauthenticated`] without a
    /// request being made.
    pub async fn refresh(&self) -> FetchOutcome {
        let Some(token) = self.session.token().await else {
            return FetchOutcome::Failed(FetchError::Unauthenticated);
        };

        let outcome = self.fetcher.fetch(Some(&token)).await;
        if let FetchOutcome::Loaded(snapshot) = &outcome {
            let mut projects = self.projects();
            if projects.seed_once(&snapshot.products) {
                tracing::info!(rows = projects.len(), "Seeded project list");
            }
        }
        outcome
    }

    /// Add a project from the creation form and return the stored row.
    pub fn add_project(&self, draft: NewProject) -> ProjectRow {
        let row = self
            .projects()
            .add_row(draft.into_row(generate_project_id()))
            .clone();
        tracing::debug!(id = %row.id, "Added project");
        row
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetcher.state()
    }

    pub fn projects_snapshot(&self) -> Vec<ProjectRow> {
        self.projects().to_vec()
    }

    /// Everything the page renders, narrowed by the search box `query`.
    ///
    /// `None` until a snapshot has loaded.
    pub fn view(&self, query: &str) -> Option<DashboardView> {
        let snapshot = self.fetcher.snapshot()?;
        let projects = self.projects();
        Some(DashboardView::build(
            &snapshot,
            &projects,
            query,
            &self.progress,
        ))
    }

    fn projects(&self) -> MutexGuard<'_, ProjectCollection> {
        self.projects.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
