use super::ids::{PlayerId, RankKey};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;


/// Base for relative profile image paths in the feed.
pub const IMAGE_RAW_BASE: &str =
    "https://raw.githubusercontent.com/AjithMogaveeraSooral/spl-sooral-cricket-board/main/";

/// Image shown when a player has no profile picture.
pub const DEFAULT_IMAGE_PATH: &str = "images/default_player.jpg";

/// Treat an explicit JSON `null` like a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A loosely-typed scalar from the feed.
///
/// Statistic fields arrive as numbers, numeric strings, or occasionally
/// something else entirely. Nothing is rejected at parse time; numeric
/// coercion happens later through [`crate::ranking::primitives::safe_number`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    Flag(bool),
    Other(Value),
}

impl StatValue {
    /// Finite numeric value, if this converts to one.
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            StatValue::Number(n) => *n,
            StatValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse::<f64>().ok()?
                }
            }
            StatValue::Flag(b) => f64::from(u8::from(*b)),
            StatValue::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        StatValue::Number(n)
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}

/// One player's cumulative season statistics, as published in the feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerStatRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innings: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_outs: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balls_faced: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_runs: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_score: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fours: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sixes: Option<StatValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wickets: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_balls_bowled: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_runs_conceded: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maidens: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_wicket_hauls: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_wicket_hauls: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_wicket_hauls: Option<StatValue>,
    /// Encoded as `"wickets-runs"`; `"0-0"` means no data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_spell: Option<StatValue>,

    /// Fields the engine does not interpret, carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PlayerStatRecord {
    /// Key used by the ranking pass. Falls back to the name when the feed
    /// omits an identifier.
    pub fn rank_key(&self) -> RankKey {
        match &self.player_id {
            Some(id) => RankKey::Id(id.clone()),
            None => RankKey::Name(self.name.clone()),
        }
    }

    pub fn best_spell_text(&self) -> Option<&str> {
        self.best_spell.as_ref().and_then(StatValue::as_str)
    }

    /// Absolute URL of the player's picture.
    pub fn image_url(&self) -> String {
        match self.profile_image_url.as_deref().map(str::trim) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.to_string()
            }
            Some(path) if !path.is_empty() => {
                format!("{IMAGE_RAW_BASE}{}", path.replace('\\', "/"))
            }
            _ => format!("{IMAGE_RAW_BASE}{DEFAULT_IMAGE_PATH}"),
        }
    }
}

impl AsRef<PlayerStatRecord> for PlayerStatRecord {
    fn as_ref(&self) -> &PlayerStatRecord {
        self
    }
}

/// A single batter's line in one innings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BattingEntry {
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub runs: Option<StatValue>,
    #[serde(default)]
    pub balls: Option<StatValue>,
    #[serde(default)]
    pub fours: Option<StatValue>,
    #[serde(default)]
    pub sixes: Option<StatValue>,
}

impl BattingEntry {
    pub fn is_not_out(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains("not out"))
    }
}

/// A single bowler's figures in one innings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BowlingEntry {
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default)]
    pub overs: Option<StatValue>,
    #[serde(default)]
    pub maidens: Option<StatValue>,
    #[serde(default)]
    pub runs: Option<StatValue>,
    #[serde(default)]
    pub wickets: Option<StatValue>,
    #[serde(default)]
    pub economy: Option<StatValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Innings {
    #[serde(default)]
    pub batting_team: Option<String>,
    #[serde(default)]
    pub score: Option<StatValue>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub batting_stats: Vec<BattingEntry>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub bowling_stats: Vec<BowlingEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Scorecard {
    #[serde(default)]
    pub innings1: Option<Innings>,
    #[serde(default)]
    pub innings2: Option<Innings>,
}

impl Scorecard {
    /// The innings that were actually recorded, in playing order.
    pub fn innings(&self) -> impl Iterator<Item = &Innings> {
        self.innings1.iter().chain(self.innings2.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Match {
    #[serde(default)]
    pub match_id: Option<StatValue>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub teams: Vec<String>,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub man_of_the_match: Option<String>,
    #[serde(default)]
    pub scorecard_summary: Option<String>,
    #[serde(default)]
    pub detailed_scorecard: Option<Scorecard>,
}

impl Match {
    /// `"Team A vs Team B"`, or empty when the teams are unknown.
    pub fn label(&self) -> String {
        self.teams.join(" vs ")
    }

    /// Match identifier as text; numeric ids print without a fraction.
    pub fn id_text(&self) -> Option<String> {
        match self.match_id.as_ref()? {
            StatValue::Text(s) => Some(s.clone()),
            StatValue::Number(n) if n.fract() == 0.0 => Some(format!("{}", *n as i64)),
            StatValue::Number(n) => Some(n.to_string()),
            StatValue::Flag(b) => Some(b.to_string()),
            StatValue::Other(v) => Some(v.to_string()),
        }
    }

    /// The summary line shown under a result.
    pub fn result_line(&self) -> String {
        match (&self.scorecard_summary, &self.winner) {
            (Some(summary), _) if !summary.trim().is_empty() => summary.clone(),
            (_, Some(winner)) => format!("{} won the match!", winner),
            _ => "TBD won the match!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tournament {
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub matches: Vec<Match>,
}

/// The full season feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SeasonData {
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<PlayerStatRecord>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub tournaments: Vec<Tournament>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub announcements: Vec<Value>,
}

/// Headline counts for the season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeasonCounts {
    pub total_tournaments: usize,
    pub total_matches: usize,
    pub total_players: usize,
}

impl SeasonData {
    pub fn counts(&self) -> SeasonCounts {
        SeasonCounts {
            total_tournaments: self.tournaments.len(),
            total_matches: self.tournaments.iter().map(|t| t.matches.len()).sum(),
            total_players: self.players.len(),
        }
    }

    /// Tournament names, most recent first.
    pub fn tournament_names(&self) -> Vec<&str> {
        self.tournaments.iter().rev().map(|t| t.name.as_str()).collect()
    }

    pub fn find_tournament(&self, name: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.name == name)
    }

    /// The most recently added tournament.
    pub fn latest_tournament(&self) -> Option<&Tournament> {
        self.tournaments.last()
    }
}
