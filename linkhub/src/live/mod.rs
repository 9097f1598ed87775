//! Live-status service behind `GET /api/twitch/live`.

pub mod service;

pub use service::{LiveStatus, LiveStatusOutcome, LiveStatusService, StreamData};
