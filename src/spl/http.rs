use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::core::default_header_map;
use crate::error::SplError;
use crate::spl::types::SeasonData;
use crate::Result;

#[cfg(test)]
mod tests;

/// Published season feed.
pub const DEFAULT_DATA_URL: &str =
    "https://ajithmogaveerasooral.github.io/spl-sooral-cricket-board/data/spl_data.json";

/// Live requests are abandoned after this long.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Client with the feed's default headers. Timeouts are set per request.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .default_headers(default_header_map()?)
        .build()?;
    Ok(client)
}

fn map_request_error(e: reqwest::Error, timeout: Duration) -> SplError {
    if e.is_timeout() {
        SplError::Timeout {
            seconds: timeout.as_secs(),
        }
    } else {
        SplError::Http(e)
    }
}

/// GET the season feed and parse it, giving up after [`FETCH_TIMEOUT`].
///
/// Non-2xx responses are errors. A feed that parses but lists no players
/// is rejected with [`SplError::NoData`] so it never replaces a good
/// snapshot.
pub async fn fetch_season_data(client: &Client, url: &str) -> Result<SeasonData> {
    fetch_season_data_with_timeout(client, url, FETCH_TIMEOUT).await
}

pub async fn fetch_season_data_with_timeout(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<SeasonData> {
    debug!(url, ?timeout, "fetching live season data");

    let body = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| map_request_error(e, timeout))?
        .error_for_status()?
        .text()
        .await
        .map_err(|e| map_request_error(e, timeout))?;

    let data: SeasonData = serde_json::from_str(&body)?;
    if data.players.is_empty() {
        return Err(SplError::NoData);
    }

    debug!(
        players = data.players.len(),
        tournaments = data.tournaments.len(),
        "parsed live season data"
    );
    Ok(data)
}
