//! Every projection the dashboard renders, computed in one call.

use serde::Serialize;

use crate::analytics::{overview_totals, OverviewTotals};
use crate::progress::{progress_gauge, ProgressConfig, ProgressGauge};
use crate::projects::ProjectCollection;
use crate::search::filter_entities;
use crate::team::{team_roster, TeamMember};
use crate::types::{DashboardSnapshot, Overview, ProjectRow, UserRecord};
use crate::weekly::{weekly_chart, WeeklyChart};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub overview: Overview,
    pub totals: OverviewTotals,
    pub weekly: WeeklyChart,
    pub progress: ProgressGauge,
    pub users: Vec<UserRecord>,
    pub team: Vec<TeamMember>,
    pub projects: Vec<ProjectRow>,
}

impl DashboardView {
    /// Project `snapshot` and the local project list through the search box
    /// `query`. Only the user and project lists are narrowed by the query.
    pub fn build(
        snapshot: &DashboardSnapshot,
        projects: &ProjectCollection,
        query: &str,
        progress: &ProgressConfig,
    ) -> Self {
        let users = filter_entities(&snapshot.users, query);
        let team = team_roster(users.iter().copied());

        Self {
            overview: snapshot.overview.clone(),
            totals: overview_totals(&snapshot.analytics),
            weekly: weekly_chart(&snapshot.analytics),
            progress: progress_gauge(snapshot.overview.revenue, progress),
            users: users.into_iter().cloned().collect(),
            team,
            projects: projects.filtered(query).into_iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalyticsRecord, ProductRecord};

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            overview: Overview {
                total_users: 3,
                active_users: 2,
                revenue: 300_000.0,
                growth: 4.2,
            },
            users: vec![
                UserRecord {
                    id: 1,
                    name: "Ann".to_string(),
                    email: "ann@example.com".to_string(),
                    status: "active".to_string(),
                },
                UserRecord {
                    id: 2,
                    name: "Bob".to_string(),
                    email: "bob@example.com".to_string(),
                    status: "inactive".to_string(),
                },
            ],
            products: vec![ProductRecord {
                id: 9,
                name: "Annual plan".to_string(),
                category: "Billing".to_string(),
                sales: 50,
                price: 99.0,
            }],
            analytics: vec![
                AnalyticsRecord {
                    views: 10,
                    clicks: 4,
                    conversions: 1,
                },
                AnalyticsRecord {
                    views: 30,
                    clicks: 6,
                    conversions: 1,
                },
            ],
        }
    }

    #[test]
    fn build_combines_every_projection() {
        let snapshot = snapshot();
        let mut projects = ProjectCollection::new();
        projects.seed_once(&snapshot.products);

        let view = DashboardView::build(&snapshot, &projects, "", &ProgressConfig::default());

        assert_eq!(view.totals.views, 40);
        assert_eq!(view.totals.ctr, 20.0);
        assert_eq!(view.weekly.peak_index(), Some(2));
        assert_eq!(view.progress.percent, 50);
        assert_eq!(view.users.len(), 2);
        assert_eq!(view.team.len(), 2);
        assert_eq!(view.projects.len(), 1);
    }

    #[test]
    fn query_narrows_users_and_projects_only() {
        let snapshot = snapshot();
        let mut projects = ProjectCollection::new();
        projects.seed_once(&snapshot.products);

        let view = DashboardView::build(&snapshot, &projects, "ann", &ProgressConfig::default());

        assert_eq!(view.users.len(), 1);
        assert_eq!(view.team[0].name, "Ann");
        assert_eq!(view.projects[0].title, "Annual plan");
        assert_eq!(view.totals.views, 40);
    }
}
