//! Quest ingestion services
//!
//! Pure normalization of AI-extracted quest fields. No I/O, no shared state.

pub mod assignee_resolver;
pub mod point_snapper;
pub mod quest_normalizer;

pub use assignee_resolver::{resolve, resolve_with_tier};
pub use point_snapper::{snap, snap_points};
pub use quest_normalizer::{point_candidate, QuestNormalizer};
