//! Players command implementation

use serde::Serialize;

use super::common::{print_json, rank_label, CommandContext};
use crate::{
    cli::{types::PlayerSort, DataSourceArgs},
    ranking::{
        primitives::{display_string, MISSING_DISPLAY},
        search_players, sort_players, sort_players_by_name, RankedPlayer,
    },
    Result,
};

#[derive(Debug, Serialize)]
struct PlayerRow<'a> {
    #[serde(flatten)]
    player: &'a RankedPlayer,
    image_url: String,
}

/// Searched and ordered view of the roster.
///
/// The list starts in name order, so players tied under `sort` stay
/// alphabetical.
pub fn player_list<'a>(
    players: &'a [RankedPlayer],
    search: Option<&str>,
    sort: PlayerSort,
) -> Vec<&'a RankedPlayer> {
    let mut list = sort_players_by_name(&search_players(players, search.unwrap_or("")));
    sort_players(&mut list, sort);
    list
}

/// One text line for the player list.
pub fn format_player_line(player: &RankedPlayer) -> String {
    let record = player.record();
    format!(
        "{:<24} bat {:>4} bowl {:>4} ar {:>4} | M {} R {} HS {} W {} Best {}",
        player.name(),
        rank_label(player.batting_rank),
        rank_label(player.bowling_rank),
        rank_label(player.allrounder_rank),
        display_string(record.matches.as_ref(), "0"),
        display_string(record.total_runs.as_ref(), "0"),
        display_string(record.highest_score.as_ref(), "0"),
        display_string(record.wickets.as_ref(), "0"),
        record.best_spell_text().unwrap_or(MISSING_DISPLAY),
    )
}

/// Handle the players command
pub async fn handle_players(
    args: &DataSourceArgs,
    search: Option<String>,
    sort: PlayerSort,
) -> Result<()> {
    let ctx = CommandContext::load(args).await?;
    let list = player_list(&ctx.rankings.ranked_players, search.as_deref(), sort);

    if args.json {
        let rows: Vec<PlayerRow<'_>> = list
            .iter()
            .map(|&player| PlayerRow {
                player,
                image_url: player.record().image_url(),
            })
            .collect();
        return print_json(&rows);
    }

    if list.is_empty() {
        println!("No players match."); // tarpaulin::skip
        return Ok(());
    }

    println!("{} players, sorted by {}", list.len(), sort); // tarpaulin::skip
    for player in &list {
        println!("  {}", format_player_line(player)); // tarpaulin::skip
    }

    Ok(())
}
