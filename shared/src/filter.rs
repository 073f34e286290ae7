//! Free-text search over contests and their nested teams.

use crate::models::contest::Contest;
use crate::models::team::Team;
use std::sync::Arc;

/// A normalized search needle: trimmed and lowercased once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// An empty query matches every contest.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    fn hit(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }

    pub fn matches(&self, contest: &Contest) -> bool {
        if self.is_empty() {
            return true;
        }
        self.hit(&contest.contest_name)
            || contest.contest_type.as_deref().is_some_and(|t| self.hit(t))
            || contest
                .year
                .is_some_and(|year| year.to_string().contains(&self.needle))
            || contest.teams.iter().any(|team| self.team_matches(team))
    }

    /// A team without a name never matches, whatever its coach or members.
    pub fn team_matches(&self, team: &Team) -> bool {
        let Some(name) = team.team_name.as_deref() else {
            return false;
        };
        self.hit(name)
            || team.team_coach.as_deref().is_some_and(|coach| self.hit(coach))
            || team.team_members.iter().any(|member| self.hit(member))
    }
}

/// Returns the contests matching `raw_query`, in their original order.
/// The result shares the input's `Arc`s.
pub fn filter_contests(contests: &[Arc<Contest>], raw_query: &str) -> Vec<Arc<Contest>> {
    let query = SearchQuery::new(raw_query);
    if query.is_empty() {
        return contests.to_vec();
    }
    contests
        .iter()
        .filter(|contest| query.matches(contest))
        .cloned()
        .collect()
}
