//! Common utilities and helper functions shared across commands.

use serde::Serialize;
use tracing::info;

use super::resolve_data_url;
use crate::{
    cli::DataSourceArgs,
    error::SplError,
    ranking::{compute_league_rankings, primitives::MISSING_DISPLAY, LeagueRankings},
    spl::{load_season_data, DataOrigin, DataSource, SeasonData, Tournament},
    Result,
};

/// Season data plus the league ranking pass, loaded once per command.
pub struct CommandContext {
    pub season: SeasonData,
    pub origin: DataOrigin,
    pub source: DataSource,
    pub rankings: LeagueRankings,
}

impl CommandContext {
    pub async fn load(args: &DataSourceArgs) -> Result<Self> {
        Self::load_from(data_source(args)).await
    }

    pub async fn load_from(source: DataSource) -> Result<Self> {
        let loaded = load_season_data(&source).await?;
        let rankings = compute_league_rankings(&loaded.data.players);

        info!(
            origin = %loaded.origin,
            players = loaded.data.players.len(),
            tournaments = loaded.data.tournaments.len(),
            "season ready"
        );

        Ok(Self {
            season: loaded.data,
            origin: loaded.origin,
            source,
            rankings,
        })
    }

    /// Named tournament, or the most recent one when `name` is `None`.
    pub fn tournament(&self, name: Option<&str>) -> Result<&Tournament> {
        select_tournament(&self.season, name)
    }
}

pub fn data_source(args: &DataSourceArgs) -> DataSource {
    DataSource::new(resolve_data_url(args.url.clone())).offline(args.offline)
}

pub fn select_tournament<'a>(season: &'a SeasonData, name: Option<&str>) -> Result<&'a Tournament> {
    match name {
        Some(name) => season
            .find_tournament(name)
            .ok_or_else(|| SplError::TournamentNotFound {
                name: name.to_string(),
            }),
        None => season
            .latest_tournament()
            .ok_or_else(|| SplError::TournamentNotFound {
                name: "(latest)".to_string(),
            }),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

/// Rank for display, or the placeholder for unranked players.
pub fn rank_label(rank: Option<u32>) -> String {
    rank.map_or_else(|| MISSING_DISPLAY.to_string(), |r| format!("#{}", r))
}
