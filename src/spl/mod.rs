//! The SPL season feed: data model, live fetch and snapshot fallback.

pub mod http;
pub mod ids;
pub mod snapshot;
pub mod types;

pub use http::{
    fetch_season_data, fetch_season_data_with_timeout, DEFAULT_DATA_URL, FETCH_TIMEOUT,
};
pub use ids::{PlayerId, RankKey};
pub use snapshot::{load_season_data, DataOrigin, DataSource, LoadedSeason, SeasonLoader};
pub use types::{Match, PlayerStatRecord, SeasonData, StatValue, Tournament};
