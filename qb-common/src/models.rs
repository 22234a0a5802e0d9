//! Quest and family member wire types
//!
//! Shared between the ingestion service and its callers. The family
//! membership subsystem owns member records; these are read-only views.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only view of a family member at resolution time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Unique member identifier
    pub id: String,
    /// Display name (required)
    pub display_name: String,
    /// Optional nickname; absent means no nickname comparison at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl MemberDescriptor {
    /// Create a member without a nickname
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            nickname: None,
        }
    }

    /// Attach a nickname
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }
}

/// Match strictness level used by the assignee resolver, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Lower-cased candidate equals the lower-cased name
    Exact,
    /// Lower-cased candidate starts with the lower-cased name
    Prefix,
    /// Lower-cased candidate contains the lower-cased name
    Substring,
}

impl MatchTier {
    /// All tiers, highest priority first
    pub const ALL: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Prefix, MatchTier::Substring];

    /// Tier name as used on the wire and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the day a quest is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Anytime,
}

/// How often a quest repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    Once,
    Daily,
    Weekly,
}

/// Quest candidate as produced by the upstream AI extraction step
///
/// `points` is kept as a raw JSON value: extractors emit numbers, numeric
/// strings ("15", "15 points") or nothing at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedQuest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points: Option<Value>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
}

/// How the normalizer arrived at the points and assignee fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Candidate number read from the extracted points, if any
    pub points_candidate: Option<f64>,
    /// True when no usable candidate existed and the default was applied
    pub points_defaulted: bool,
    /// Tier that matched the assignee, `None` when unassigned
    pub assignee_tier: Option<MatchTier>,
}

/// Quest record ready for the quest creation flow to persist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuest {
    pub title: String,
    pub description: Option<String>,
    /// Always a member of the allowed point set
    pub points: u32,
    /// Member id, `None` when no member matched
    pub assigned_to: Option<String>,
    pub time_of_day: TimeOfDay,
    pub recurrence: Recurrence,
    pub resolution: ResolutionReport,
}
