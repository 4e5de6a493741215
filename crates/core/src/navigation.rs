//! Dashboard routes, page titles and the login guard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Dashboard,
    Tasks,
    Calendar,
    Analytics,
    Team,
}

impl Route {
    /// Resolve a location path. Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        const PREFIXES: &[(&str, Route)] = &[
            ("/login", Route::Login),
            ("/tasks", Route::Tasks),
            ("/calendar", Route::Calendar),
            ("/analytics", Route::Analytics),
            ("/team", Route::Team),
        ];

        PREFIXES
            .iter()
            .find(|(prefix, _)| path.starts_with(*prefix))
            .map(|&(_, route)| route)
            .unwrap_or(Route::Dashboard)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Tasks => "/tasks",
            Route::Calendar => "/calendar",
            Route::Analytics => "/analytics",
            Route::Team => "/team",
        }
    }

    /// Heading shown in the top bar.
    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Dashboard => "Dashboard",
            Route::Tasks => "Tasks",
            Route::Calendar => "Calendar",
            Route::Analytics => "Analytics",
            Route::Team => "Team",
        }
    }

    pub fn requires_auth(self) -> bool {
        self != Route::Login
    }

    /// The route actually shown: protected routes fall back to the login
    /// page when nobody is signed in.
    pub fn guard(self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            Route::Login
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_by_prefix() {
        assert_eq!(Route::from_path("/tasks"), Route::Tasks);
        assert_eq!(Route::from_path("/analytics/weekly"), Route::Analytics);
        assert_eq!(Route::from_path("/team"), Route::Team);
        assert_eq!(Route::from_path("/login"), Route::Login);
    }

    #[test]
    fn unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
    }

    #[test]
    fn titles() {
        assert_eq!(Route::from_path("/calendar").title(), "Calendar");
        assert_eq!(Route::Dashboard.title(), "Dashboard");
    }

    #[test]
    fn guard_redirects_when_signed_out() {
        assert_eq!(Route::Team.guard(false), Route::Login);
        assert_eq!(Route::Team.guard(true), Route::Team);
        assert_eq!(Route::Login.guard(false), Route::Login);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Dashboard, Route::Tasks, Route::Team, Route::Login] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
