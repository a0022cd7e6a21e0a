//! Sort orders for the player list.

use crate::error::SplError;
use std::fmt;
use std::str::FromStr;

/// Field the player list is ordered by.
///
/// `Name` sorts ascending; every other field sorts descending so the best
/// player comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerSort {
    Name,
    #[default]
    Batting,
    Bowling,
    Allrounder,
    Runs,
    Wickets,
    Sixes,
    Fours,
    HighestScore,
    Matches,
    Average,
    StrikeRate,
    Economy,
}

impl fmt::Display for PlayerSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerSort::Name => "name",
            PlayerSort::Batting => "batting",
            PlayerSort::Bowling => "bowling",
            PlayerSort::Allrounder => "allrounder",
            PlayerSort::Runs => "runs",
            PlayerSort::Wickets => "wickets",
            PlayerSort::Sixes => "sixes",
            PlayerSort::Fours => "fours",
            PlayerSort::HighestScore => "highest-score",
            PlayerSort::Matches => "matches",
            PlayerSort::Average => "average",
            PlayerSort::StrikeRate => "strike-rate",
            PlayerSort::Economy => "economy",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlayerSort {
    type Err = SplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "name" => Ok(PlayerSort::Name),
            "batting" | "batting-rank" => Ok(PlayerSort::Batting),
            "bowling" | "bowling-rank" => Ok(PlayerSort::Bowling),
            "allrounder" | "allrounder-rank" => Ok(PlayerSort::Allrounder),
            "runs" | "total-runs" => Ok(PlayerSort::Runs),
            "wickets" => Ok(PlayerSort::Wickets),
            "sixes" => Ok(PlayerSort::Sixes),
            "fours" => Ok(PlayerSort::Fours),
            "highest-score" | "hs" => Ok(PlayerSort::HighestScore),
            "matches" => Ok(PlayerSort::Matches),
            "average" | "avg" => Ok(PlayerSort::Average),
            "strike-rate" | "sr" => Ok(PlayerSort::StrikeRate),
            "economy" | "econ" => Ok(PlayerSort::Economy),
            _ => Err(SplError::InvalidSort {
                sort: s.to_string(),
            }),
        }
    }
}
