use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for ideas; scores are keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdeaId(pub String);

impl std::fmt::Display for IdeaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub String);

/// Workspace member as supplied by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl Member {
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.profile
            .iter()
            .flat_map(|profile| profile.skills.iter().map(String::as_str))
    }

    pub fn network_entries(&self) -> &[NetworkEntry] {
        self.profile
            .as_ref()
            .map(|profile| profile.network_entries.as_slice())
            .unwrap_or_default()
    }
}

/// Cofounder profile: free-text background, taxonomy skills and network segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub network_entries: Vec<NetworkEntry>,
}

/// A self-reported slice of a member's professional network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntry {
    pub industry: String,
    pub estimated_contacts: u32,
    #[serde(default)]
    pub notable_roles: Vec<String>,
    pub connection_strength: ConnectionStrength,
}

/// Ordinal reachability of a network segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStrength {
    Warm,
    Moderate,
    Cold,
    #[serde(other)]
    Unrecognized,
}

impl ConnectionStrength {
    pub const fn label(self) -> &'static str {
        match self {
            ConnectionStrength::Warm => "WARM",
            ConnectionStrength::Moderate => "MODERATE",
            ConnectionStrength::Cold => "COLD",
            ConnectionStrength::Unrecognized => "UNRECOGNIZED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Private,
    Workspace,
    Shared,
}

/// Startup idea under evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub problem_statement: String,
    pub target_customer: String,
    pub industry: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Every network entry across the roster, in roster order.
pub fn roster_network(roster: &[Member]) -> Vec<&NetworkEntry> {
    roster
        .iter()
        .flat_map(|member| member.network_entries().iter())
        .collect()
}
