//! Typed values accepted on the command line.
//!
//! The types live with the data model and ranking engine; they are
//! re-exported here so the CLI can name them in one place.

pub use crate::ranking::category::{LeaderboardCategory, RankingKind};
pub use crate::ranking::sort::PlayerSort;
pub use crate::spl::ids::{PlayerId, RankKey};
