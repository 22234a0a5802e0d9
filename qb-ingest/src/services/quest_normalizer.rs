//! Quest Normalizer
//!
//! Turns an [`ExtractedQuest`] from the AI extraction step into a
//! [`NormalizedQuest`] the quest creation flow can persist: points snapped
//! onto the allowed set, assignee resolved against the family roster,
//! optional fields defaulted.

use qb_common::models::ResolutionReport;
use qb_common::points::is_allowed;
use qb_common::{Error, ExtractedQuest, MemberDescriptor, NormalizedQuest, Result};
use serde_json::Value;

use super::assignee_resolver::resolve_with_tier;
use super::point_snapper::snap_points;

/// Quest Normalizer
pub struct QuestNormalizer {
    default_points: u32,
}

impl QuestNormalizer {
    /// Create a normalizer applying `default_points` when extraction gives no
    /// usable point value
    ///
    /// # Errors
    /// Returns `InvalidInput` if `default_points` is not an allowed value
    pub fn new(default_points: u32) -> Result<Self> {
        if !is_allowed(default_points) {
            return Err(Error::InvalidInput(format!(
                "Default points {} is not an allowed point value",
                default_points
            )));
        }
        Ok(Self { default_points })
    }

    /// Points used when extraction yields nothing usable
    pub fn default_points(&self) -> u32 {
        self.default_points
    }

    /// Normalize one extracted quest against the family roster
    ///
    /// # Errors
    /// Returns `InvalidInput` if the title is empty after trimming. Points and
    /// assignee never cause errors.
    pub fn normalize(
        &self,
        quest: ExtractedQuest,
        members: &[MemberDescriptor],
    ) -> Result<NormalizedQuest> {
        let title = quest.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("Quest title cannot be empty".to_string()));
        }

        let points_candidate = quest.points.as_ref().and_then(point_candidate);
        let points = match points_candidate {
            Some(value) => snap_points(value),
            None => self.default_points,
        };

        let resolved = resolve_with_tier(quest.assignee.as_deref(), members);

        tracing::debug!(
            title = %title,
            points,
            defaulted = points_candidate.is_none(),
            assignee = ?quest.assignee,
            assigned_to = ?resolved.map(|(id, _)| id),
            "Normalized quest"
        );

        let description = quest
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(NormalizedQuest {
            title: title.to_string(),
            description,
            points,
            assigned_to: resolved.map(|(id, _)| id.to_string()),
            time_of_day: quest.time_of_day.unwrap_or_default(),
            recurrence: quest.recurrence.unwrap_or_default(),
            resolution: ResolutionReport {
                points_candidate,
                points_defaulted: points_candidate.is_none(),
                assignee_tier: resolved.map(|(_, tier)| tier),
            },
        })
    }
}

/// Read a candidate number from a loosely-typed extracted point value
///
/// Accepts JSON numbers and strings holding a number somewhere ("15",
/// "15 points", "about 20pts"). The first number in a string wins. Anything
/// else, including non-finite results, yields `None`.
pub fn point_candidate(value: &Value) -> Option<f64> {
    let candidate = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => first_number(s),
        _ => None,
    };
    candidate.filter(|v| v.is_finite())
}

fn first_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = (0..bytes.len()).find(|&i| {
        let next_is_digit = |j: usize| bytes.get(j).is_some_and(u8::is_ascii_digit);
        match bytes[i] {
            b'0'..=b'9' => true,
            b'.' => next_is_digit(i + 1),
            b'-' => {
                next_is_digit(i + 1) || (bytes.get(i + 1) == Some(&b'.') && next_is_digit(i + 2))
            }
            _ => false,
        }
    })?;

    let mut end = start + 1;
    let mut seen_dot = bytes[start] == b'.';
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    text[start..end].parse().ok()
}
