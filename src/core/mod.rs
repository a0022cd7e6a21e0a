//! Core utilities for the SPL leaderboard CLI
//!
//! - `cache`: two-tier snapshot cache (memory + file system)
//! - `http`: default request headers for the live feed

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{default_cache_dir, try_read_to_string, write_string, SnapshotKey, UnifiedCache};
pub use http::default_header_map;
