//! Team collaboration roster.

use serde::Serialize;

use crate::format::initials;
use crate::types::{ProjectStatus, UserRecord};

/// The roster shows at most this many members.
pub const ROSTER_SIZE: usize = 4;

/// Assignment line shown under each member, by roster position.
const ROLES: [&str; ROSTER_SIZE] = [
    "Working on REST API Integration",
    "Working on Dashboard UI Components",
    "Working on Search & Filters",
    "Working on Responsive Layout",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub initials: String,
    pub role: &'static str,
    /// Active users are in progress; everyone else is pending.
    pub chip: ProjectStatus,
}

/// Build the roster from already-filtered users.
pub fn team_roster<'a, I>(users: I) -> Vec<TeamMember>
where
    I: IntoIterator<Item = &'a UserRecord>,
{
    users
        .into_iter()
        .take(ROSTER_SIZE)
        .zip(ROLES)
        .map(|(user, role)| TeamMember {
            id: user.id,
            name: user.name.clone(),
            initials: initials(&user.name),
            role,
            chip: if user.is_active() {
                ProjectStatus::InProgress
            } else {
                ProjectStatus::Pending
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, status: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            email: format!("u{id}@example.com"),
            status: status.to_string(),
        }
    }

    #[test]
    fn roster_is_capped_and_roles_follow_position() {
        let users: Vec<UserRecord> = (1..=6).map(|i| user(i, "Ann Lee", "active")).collect();
        let roster = team_roster(&users);

        assert_eq!(roster.len(), ROSTER_SIZE);
        assert_eq!(roster[0].role, "Working on REST API Integration");
        assert_eq!(roster[3].role, "Working on Responsive Layout");
        assert_eq!(roster[0].initials, "AL");
    }

    #[test]
    fn chip_depends_on_active_status() {
        let users = vec![user(1, "A", "active"), user(2, "B", "suspended")];
        let roster = team_roster(&users);

        assert_eq!(roster[0].chip, ProjectStatus::InProgress);
        assert_eq!(roster[1].chip, ProjectStatus::Pending);
    }

    #[test]
    fn empty_users_give_empty_roster() {
        assert!(team_roster(&Vec::new()).is_empty());
    }
}
