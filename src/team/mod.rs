//! Read-only lookup tables derived from the team roster.
//!
//! The roster is owned by configuration and loaded once per run; this
//! module derives the handle-to-email mapping and the primary team's
//! member lists consumed by report-side query construction.

use std::collections::HashMap;

use crate::config::Team;

/// Lookup tables built once from the loaded roster.
///
/// # Example
///
/// ```
/// use standup::config::{Member, Team};
/// use standup::team::TeamIndex;
///
/// let teams = vec![Team {
///     name: "Infra".to_owned(),
///     members: vec![Member {
///         name: "Jane Doe".to_owned(),
///         github: "janedoe".to_owned(),
///         email: "jane@example.com".to_owned(),
///     }],
/// }];
/// let index = TeamIndex::from_roster(&teams, "Infra");
/// assert_eq!(index.email_for("janedoe"), Some("jane@example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamIndex {
    handle_to_email: HashMap<String, String>,
    primary_handles: Vec<String>,
    primary_quoted_emails: Vec<String>,
}

impl TeamIndex {
    /// Builds the index in a single pass over all teams and members.
    ///
    /// A handle appearing in several teams keeps the email of its last
    /// occurrence; no error is raised on collision. Members of the team
    /// named `primary_team` are additionally collected, in roster order,
    /// as plain handles and as double-quoted email addresses for
    /// downstream team-wide filters.
    #[must_use]
    pub fn from_roster(teams: &[Team], primary_team: &str) -> Self {
        let mut handle_to_email = HashMap::new();
        let mut primary_handles = Vec::new();
        let mut primary_quoted_emails = Vec::new();

        for team in teams {
            for member in &team.members {
                if team.name == primary_team {
                    primary_handles.push(member.github.clone());
                    primary_quoted_emails.push(format!("{email:?}", email = member.email));
                }
                handle_to_email.insert(member.github.clone(), member.email.clone());
            }
        }

        Self {
            handle_to_email,
            primary_handles,
            primary_quoted_emails,
        }
    }

    /// Looks up the contact address for a tracker handle.
    #[must_use]
    pub fn email_for(&self, handle: &str) -> Option<&str> {
        self.handle_to_email.get(handle).map(String::as_str)
    }

    /// Handles of the primary team's members, in roster order.
    #[must_use]
    pub fn primary_handles(&self) -> &[String] {
        &self.primary_handles
    }

    /// Double-quoted email addresses of the primary team's members, in
    /// roster order.
    #[must_use]
    pub fn primary_quoted_emails(&self) -> &[String] {
        &self.primary_quoted_emails
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::TeamIndex;
    use crate::config::{Member, Team};

    fn member(name: &str, github: &str, email: &str) -> Member {
        Member {
            name: name.to_owned(),
            github: github.to_owned(),
            email: email.to_owned(),
        }
    }

    #[fixture]
    fn roster() -> Vec<Team> {
        vec![
            Team {
                name: "Infra".to_owned(),
                members: vec![
                    member("Jane Doe", "janedoe", "jane@example.com"),
                    member("Sam Lee", "samlee", "sam@example.com"),
                ],
            },
            Team {
                name: "QA".to_owned(),
                members: vec![member("Ana Pérez", "anaperez", "ana@example.com")],
            },
        ]
    }

    #[rstest]
    fn maps_every_handle_across_teams(roster: Vec<Team>) {
        let index = TeamIndex::from_roster(&roster, "Infra");
        assert_eq!(index.email_for("janedoe"), Some("jane@example.com"));
        assert_eq!(index.email_for("anaperez"), Some("ana@example.com"));
        assert_eq!(index.email_for("ghost"), None);
    }

    #[rstest]
    fn primary_team_lists_preserve_roster_order(roster: Vec<Team>) {
        let index = TeamIndex::from_roster(&roster, "Infra");
        assert_eq!(index.primary_handles(), ["janedoe", "samlee"]);
        assert_eq!(
            index.primary_quoted_emails(),
            ["\"jane@example.com\"", "\"sam@example.com\""]
        );
    }

    #[rstest]
    fn unknown_primary_team_yields_empty_lists(roster: Vec<Team>) {
        let index = TeamIndex::from_roster(&roster, "Design");
        assert!(index.primary_handles().is_empty());
        assert!(index.primary_quoted_emails().is_empty());
    }

    #[test]
    fn duplicate_handles_keep_the_last_email() {
        let teams = vec![
            Team {
                name: "Infra".to_owned(),
                members: vec![member("Jane Doe", "janedoe", "jane@old.example.com")],
            },
            Team {
                name: "QA".to_owned(),
                members: vec![member("Jane Doe", "janedoe", "jane@new.example.com")],
            },
        ];
        let index = TeamIndex::from_roster(&teams, "Infra");
        assert_eq!(index.email_for("janedoe"), Some("jane@new.example.com"));
    }
}
