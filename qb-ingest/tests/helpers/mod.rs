//! Shared helpers for qb-ingest integration tests

pub mod log_capture;
