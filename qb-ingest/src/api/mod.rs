//! HTTP API handlers for qb-ingest

pub mod assignees;
pub mod health;
pub mod points;
pub mod quests;

pub use assignees::assignee_routes;
pub use health::health_routes;
pub use points::point_routes;
pub use quests::quest_routes;
