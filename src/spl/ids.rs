//! Identifier types for SPL players.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Type-safe wrapper for player identifiers.
///
/// The season feed has carried identifiers both as JSON numbers and as
/// strings, so both are accepted and normalised to their string form.
///
/// # Examples
///
/// ```rust
/// use spl_board::PlayerId;
///
/// let id = PlayerId::new("17");
/// assert_eq!(id.as_str(), "17");
/// assert_eq!(id.to_string(), "17");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlayerId {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPlayerId::deserialize(deserializer)? {
            RawPlayerId::Unsigned(n) => Self(n.to_string()),
            RawPlayerId::Signed(n) => Self(n.to_string()),
            RawPlayerId::Float(n) => Self(n.to_string()),
            RawPlayerId::Text(s) => Self(s),
        })
    }
}

/// Key used to re-attach ranks to players.
///
/// Players without an identifier are keyed by name so that a rank lookup
/// never silently drops them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RankKey {
    Id(PlayerId),
    Name(String),
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankKey::Id(id) => write!(f, "{}", id),
            RankKey::Name(name) => write!(f, "name:{}", name),
        }
    }
}
