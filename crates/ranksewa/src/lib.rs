//! Scoring core for the RankSewa doctor directory.
//!
//! Ranking, review moderation and review credibility are independent, side-effect free
//! components. Callers own the data they score and persist whatever they keep.

pub mod config;
pub mod credibility;
pub mod directory;
pub mod error;
pub mod moderation;
pub mod ranking;
pub mod telemetry;
