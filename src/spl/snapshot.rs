//! Season data loading with fallback.
//!
//! The live feed is tried first. On any failure the last good snapshot from
//! the local cache is used, and failing that the snapshot compiled into the
//! binary. A successful live fetch refreshes the cached snapshot. There are
//! no retries.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::core::{default_cache_dir, SnapshotKey, UnifiedCache};
use crate::spl::http::{build_client, fetch_season_data, DEFAULT_DATA_URL};
use crate::spl::types::SeasonData;
use crate::Result;

/// Snapshot shipped with the binary, used when nothing better is available.
pub const BUNDLED_SNAPSHOT: &str = include_str!("../../data/spl_data.json");

/// A loader only ever caches the snapshot for its own URL.
const SNAPSHOT_MEMORY_CAPACITY: usize = 1;

/// Where a loaded season came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataOrigin {
    Live,
    Cache,
    Bundled,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataOrigin::Live => "live feed",
            DataOrigin::Cache => "cached snapshot",
            DataOrigin::Bundled => "bundled snapshot",
        };
        write!(f, "{}", s)
    }
}

/// Where to look for season data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub url: String,
    /// Skip the network and go straight to the snapshots.
    pub offline: bool,
    pub cache_dir: PathBuf,
}

impl DataSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            offline: false,
            cache_dir: default_cache_dir(),
        }
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_URL)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSeason {
    pub data: SeasonData,
    pub origin: DataOrigin,
}

/// Parse the snapshot compiled into the binary.
pub fn bundled_season_data() -> Result<SeasonData> {
    Ok(serde_json::from_str(BUNDLED_SNAPSHOT)?)
}

/// Loads seasons from one [`DataSource`].
///
/// The snapshot cache is opened once per loader, so repeat loads within a
/// process hit its memory tier before the disk.
pub struct SeasonLoader {
    source: DataSource,
    cache: Option<UnifiedCache<SnapshotKey, SeasonData>>,
}

impl SeasonLoader {
    pub fn new(source: DataSource) -> Self {
        let cache = match UnifiedCache::new(&source.cache_dir, SNAPSHOT_MEMORY_CAPACITY) {
            Ok(cache) => Some(cache),
            Err(e) => {
                warn!(error = %e, "snapshot cache unavailable");
                None
            }
        };
        Self { source, cache }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Load the season, falling back from live feed to cache to bundled copy.
    ///
    /// Only a broken bundled snapshot is an error; live and cache failures
    /// are logged and skipped.
    pub async fn load(&self) -> Result<LoadedSeason> {
        let source = &self.source;
        let key = SnapshotKey::new(source.url.as_str());

        if !source.offline {
            match fetch_live(&source.url).await {
                Ok(data) => {
                    info!(url = %source.url, players = data.players.len(), "loaded live season data");
                    if let Some(cache) = &self.cache {
                        if let Err(e) = cache.put(key, data.clone()) {
                            warn!(error = %e, "could not write season snapshot");
                        }
                    }
                    return Ok(LoadedSeason {
                        data,
                        origin: DataOrigin::Live,
                    });
                }
                Err(e) => warn!(url = %source.url, error = %e, "live fetch failed, using snapshot"),
            }
        }

        if let Some(data) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            info!(dir = %source.cache_dir.display(), "loaded cached season snapshot");
            return Ok(LoadedSeason {
                data,
                origin: DataOrigin::Cache,
            });
        }

        warn!("no cached snapshot, using bundled season data");
        Ok(LoadedSeason {
            data: bundled_season_data()?,
            origin: DataOrigin::Bundled,
        })
    }
}

/// One-shot load through a fresh [`SeasonLoader`].
///
/// Only the disk snapshot carries over between calls; hold a loader to
/// reuse the memory tier as well.
pub async fn load_season_data(source: &DataSource) -> Result<LoadedSeason> {
    SeasonLoader::new(source.clone()).load().await
}

async fn fetch_live(url: &str) -> Result<SeasonData> {
    let client = build_client()?;
    fetch_season_data(&client, url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cache::CacheKey;
    use serde_json::json;
    use tempfile::tempdir;
    use std::fs;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    fn live_feed() -> serde_json::Value {
        json!({
            "players": [{"player_id": 900, "name": "Live Player", "total_runs": 12}],
            "tournaments": []
        })
    }

    async fn server_returning(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_bundled_snapshot_parses() {
        let data = bundled_season_data().unwrap();
        assert!(!data.players.is_empty());
        assert!(!data.tournaments.is_empty());
    }

    #[test]
    fn test_data_source_builders() {
        let source = DataSource::new("https://example.org/feed.json")
            .offline(true)
            .with_cache_dir("/tmp/spl");

        assert!(source.offline);
        assert_eq!(source.cache_dir, PathBuf::from("/tmp/spl"));
        assert_eq!(DataSource::default().url, DEFAULT_DATA_URL);
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(DataOrigin::Live.to_string(), "live feed");
        assert_eq!(DataOrigin::Bundled.to_string(), "bundled snapshot");
    }

    #[tokio::test]
    async fn test_live_success_writes_cache() {
        let server = server_returning(ResponseTemplate::new(200).set_body_json(live_feed())).await;
        let dir = tempdir().unwrap();
        let source = DataSource::new(server.uri()).with_cache_dir(dir.path());

        let loaded = load_season_data(&source).await.unwrap();
        assert_eq!(loaded.origin, DataOrigin::Live);
        assert_eq!(loaded.data.players[0].name, "Live Player");

        // Offline now reads back what the live fetch stored.
        let offline = load_season_data(&source.clone().offline(true)).await.unwrap();
        assert_eq!(offline.origin, DataOrigin::Cache);
        assert_eq!(offline.data, loaded.data);
    }

    #[tokio::test]
    async fn test_loader_reuses_memory_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(live_feed()))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let dir = tempdir().unwrap();
        let loader = SeasonLoader::new(DataSource::new(server.uri()).with_cache_dir(dir.path()));

        let first = loader.load().await.unwrap();
        assert_eq!(first.origin, DataOrigin::Live);

        // With the disk copy gone the second load is served from memory.
        fs::remove_file(SnapshotKey::new(server.uri()).to_file_path(dir.path())).unwrap();
        let second = loader.load().await.unwrap();
        assert_eq!(second.origin, DataOrigin::Cache);
        assert_eq!(second.data, first.data);
    }

    #[tokio::test]
    async fn test_live_failure_falls_back_to_cache() {
        let server = server_returning(ResponseTemplate::new(500)).await;
        let dir = tempdir().unwrap();
        let cache: UnifiedCache<SnapshotKey, SeasonData> =
            UnifiedCache::new(dir.path(), 1).unwrap();
        cache
            .put(
                SnapshotKey::new(server.uri()),
                serde_json::from_value(live_feed()).unwrap(),
            )
            .unwrap();

        let source = DataSource::new(server.uri()).with_cache_dir(dir.path());
        let loaded = load_season_data(&source).await.unwrap();

        assert_eq!(loaded.origin, DataOrigin::Cache);
        assert_eq!(loaded.data.players[0].name, "Live Player");
    }

    #[tokio::test]
    async fn test_live_failure_without_cache_uses_bundled() {
        let server = server_returning(ResponseTemplate::new(503)).await;
        let dir = tempdir().unwrap();
        let source = DataSource::new(server.uri()).with_cache_dir(dir.path());

        let loaded = load_season_data(&source).await.unwrap();
        assert_eq!(loaded.origin, DataOrigin::Bundled);
        assert_eq!(loaded.data, bundled_season_data().unwrap());
    }

    #[tokio::test]
    async fn test_offline_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(live_feed()))
            .expect(0)
            .mount(&server)
            .await;
        let dir = tempdir().unwrap();
        let source = DataSource::new(server.uri())
            .with_cache_dir(dir.path())
            .offline(true);

        let loaded = load_season_data(&source).await.unwrap();
        assert_eq!(loaded.origin, DataOrigin::Bundled);
    }

    #[tokio::test]
    async fn test_empty_live_feed_does_not_replace_cache() {
        let server = server_returning(
            ResponseTemplate::new(200).set_body_json(json!({"players": [], "tournaments": []})),
        )
        .await;
        let dir = tempdir().unwrap();
        let source = DataSource::new(server.uri()).with_cache_dir(dir.path());

        let loaded = load_season_data(&source).await.unwrap();
        assert_eq!(loaded.origin, DataOrigin::Bundled);
        assert!(!SnapshotKey::new(server.uri())
            .to_file_path(dir.path())
            .exists());
    }
}
