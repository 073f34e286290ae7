use crate::models::lenient;
use serde::{Deserialize, Serialize};

/// A participating team within a contest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team name. A team without one is ignored by search and rendering.
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub team_coach: Option<String>,

    /// Member names in roster order. Entries may be blank.
    #[serde(default, deserialize_with = "lenient::string_list", skip_serializing_if = "Vec::is_empty")]
    pub team_members: Vec<String>,

    /// Rank label, e.g. `"3"` or `"Champion"`.
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub team_picture: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub team_info_link: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Team {
    /// True when the team has a name with visible characters.
    pub fn is_displayable(&self) -> bool {
        self.team_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Trimmed member names, skipping blank entries.
    pub fn display_members(&self) -> impl Iterator<Item = &str> {
        self.team_members
            .iter()
            .map(|member| member.trim())
            .filter(|member| !member.is_empty())
    }
}
