//! Command implementations for the SPL leaderboard CLI

pub mod common;
pub mod data;
pub mod leaders;
pub mod players;
pub mod rankings;
pub mod scorecard;
pub mod tournament;

use crate::spl::DEFAULT_DATA_URL;
use crate::DATA_URL_ENV_VAR;


/// Feed URL: the `--url` flag, then `SPL_DATA_URL`, then the published feed.
pub fn resolve_data_url(url: Option<String>) -> String {
    pick_data_url(url, std::env::var(DATA_URL_ENV_VAR).ok())
}

fn pick_data_url(flag: Option<String>, env: Option<String>) -> String {
    let clean = |u: Option<String>| u.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
    clean(flag)
        .or_else(|| clean(env))
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}
