//! HTTP utilities for the season data feed

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, USER_AGENT};

/// Headers sent with every live request.
///
/// `Cache-Control: no-cache` asks intermediaries for a fresh copy; the
/// feed is a static file that changes whenever results are published.
pub fn default_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    let agent = format!("spl-board/{}", env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_map() {
        let headers = default_header_map().unwrap();

        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CACHE_CONTROL], "no-cache");
        assert!(headers[USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("spl-board/"));
    }
}
