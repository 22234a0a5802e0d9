//! Assignee Resolver
//!
//! Maps a free-text assignee name, as extracted by the AI step, onto a
//! family member id.
//!
//! **Matching:** three tiers evaluated in strict priority order (exact,
//! prefix, substring). Within a tier, members are visited in roster order
//! and the display name is tried before the nickname. The first hit of the
//! highest tier with any hit wins. There is no scoring and no ambiguity
//! detection.

use qb_common::{MatchTier, MemberDescriptor};

/// Resolve `name` to a member id
///
/// Returns `None` when `name` is absent or empty, when `members` is empty,
/// or when no member matches in any tier.
pub fn resolve<'a>(name: Option<&str>, members: &'a [MemberDescriptor]) -> Option<&'a str> {
    resolve_with_tier(name, members).map(|(id, _)| id)
}

/// Resolve `name` to a member id, also reporting the tier that matched
pub fn resolve_with_tier<'a>(
    name: Option<&str>,
    members: &'a [MemberDescriptor],
) -> Option<(&'a str, MatchTier)> {
    let name = name.filter(|n| !n.is_empty())?;
    if members.is_empty() {
        return None;
    }

    let needle = name.to_lowercase();
    let lowered: Vec<(String, Option<String>)> = members
        .iter()
        .map(|m| {
            (
                m.display_name.to_lowercase(),
                m.nickname.as_deref().map(str::to_lowercase),
            )
        })
        .collect();

    for tier in MatchTier::ALL {
        for (member, (display_name, nickname)) in members.iter().zip(&lowered) {
            // Absent nickname: skip the comparison entirely
            let hit = tier_matches(tier, display_name, &needle)
                || nickname
                    .as_deref()
                    .is_some_and(|nick| tier_matches(tier, nick, &needle));

            if hit {
                tracing::debug!(
                    name = %name,
                    member_id = %member.id,
                    tier = %tier,
                    "Resolved assignee"
                );
                return Some((member.id.as_str(), tier));
            }
        }
    }

    tracing::debug!(name = %name, roster_size = members.len(), "No member matched assignee");
    None
}

/// Both arguments must already be lower-cased
fn tier_matches(tier: MatchTier, candidate: &str, needle: &str) -> bool {
    match tier {
        MatchTier::Exact => candidate == needle,
        MatchTier::Prefix => candidate.starts_with(needle),
        MatchTier::Substring => candidate.contains(needle),
    }
}
