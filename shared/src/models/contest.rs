use crate::models::lenient;
use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Label shown when a record carries no `contestType`.
pub const DEFAULT_CONTEST_TYPE: &str = "Contest";

/// One archived programming contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    /// Contest name. Records without one are rejected at decode time.
    #[serde(deserialize_with = "lenient::required_text")]
    pub contest_name: String,

    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub contest_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_integer", skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,

    /// Free text of the form `"<MonthName> <Day>"`, e.g. `"February 18"`.
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_integer", skip_serializing_if = "Option::is_none")]
    pub total_teams: Option<i64>,

    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub contest_link: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub ranking_link: Option<String>,

    #[serde(default, deserialize_with = "lenient::object_list", skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<Team>,
}

impl Contest {
    pub fn new(contest_name: impl Into<String>) -> Self {
        Self {
            contest_name: contest_name.into(),
            contest_type: None,
            year: None,
            date: None,
            total_teams: None,
            contest_link: None,
            ranking_link: None,
            teams: Vec::new(),
        }
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_type(mut self, contest_type: impl Into<String>) -> Self {
        self.contest_type = Some(contest_type.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    pub fn type_label(&self) -> &str {
        self.contest_type.as_deref().unwrap_or(DEFAULT_CONTEST_TYPE)
    }

    /// Year used for ordering; a missing year counts as 0.
    pub fn sort_year(&self) -> i64 {
        self.year.unwrap_or(0)
    }

    /// Team count for the card header, when the record states a non-zero one.
    pub fn team_count(&self) -> Option<i64> {
        self.total_teams.filter(|count| *count != 0)
    }

    /// Teams worth rendering, in roster order.
    pub fn displayable_teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter().filter(|team| team.is_displayable())
    }
}
