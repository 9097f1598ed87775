//! Follower-count refresh job.
//!
//! Each platform is a [`StatsSource`]. A run fetches all of them concurrently,
//! keeps the successes in source order and republishes the stats and
//! media-kit documents. A run with no successes writes nothing.

pub mod models;
pub mod refresh;
pub mod source;
pub mod store;

pub use models::{PlatformStat, StatsDocument};
pub use refresh::{RefreshReport, StatsRefresher};
pub use source::{FetchOutcome, StatsSource, TwitchSource, YouTubeSource, collect_stats, fetch_outcome};
