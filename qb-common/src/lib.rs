//! # QuestBoard Common Library
//!
//! Shared code for the QuestBoard quest services including:
//! - Error types
//! - Configuration loading (TOML + environment + compiled defaults)
//! - Quest and family member wire types
//! - The allowed point denominations

pub mod config;
pub mod error;
pub mod models;
pub mod points;

pub use error::{Error, Result};
pub use models::{ExtractedQuest, MatchTier, MemberDescriptor, NormalizedQuest};
pub use points::ALLOWED_POINTS;
