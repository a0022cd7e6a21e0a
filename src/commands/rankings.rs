//! Rankings command implementation

use serde::Serialize;

use super::common::{print_json, rank_label, CommandContext};
use crate::{
    cli::{types::RankingKind, DataSourceArgs},
    ranking::{primitives::display_number, LeagueRankings, RankedPlayer},
    PlayerId, Result,
};

/// One row of a ranking board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub rank: Option<u32>,
    pub player_id: Option<PlayerId>,
    pub name: String,
    pub points: f64,
    pub detail: String,
}

impl RankingRow {
    fn new(player: &RankedPlayer, kind: RankingKind) -> Self {
        Self {
            rank: player.rank(kind),
            player_id: player.record().player_id.clone(),
            name: player.name().to_string(),
            points: player.points(kind),
            detail: ranking_detail(player, kind),
        }
    }
}

#[derive(Debug, Serialize)]
struct RankingBoard {
    kind: RankingKind,
    rows: Vec<RankingRow>,
}

/// The secondary figures printed next to a player's points.
pub fn ranking_detail(player: &RankedPlayer, kind: RankingKind) -> String {
    let rated = &player.rated;
    match kind {
        RankingKind::Batting => format!(
            "avg {} | sr {}",
            display_number(rated.batting_average),
            display_number(rated.batting_strike_rate)
        ),
        RankingKind::Bowling => format!(
            "econ {} | overs {} | best {}",
            display_number(rated.bowling_economy),
            display_number(rated.bowling_overs),
            player.record().best_spell_text().unwrap_or("0-0")
        ),
        RankingKind::Allrounder => format!(
            "bat {} | bowl {}",
            display_number(rated.batting_points),
            display_number(rated.bowling_points)
        ),
    }
}

/// Top `limit` rows of the `kind` board. Players without a positive score
/// are left off.
pub fn ranking_rows(
    rankings: &LeagueRankings,
    kind: RankingKind,
    limit: usize,
) -> Vec<RankingRow> {
    rankings
        .leaderboard(kind)
        .into_iter()
        .take(limit)
        .map(|p| RankingRow::new(p, kind))
        .collect()
}

/// Handle the rankings command
pub async fn handle_rankings(
    args: &DataSourceArgs,
    kind: Option<RankingKind>,
    limit: usize,
) -> Result<()> {
    let ctx = CommandContext::load(args).await?;

    let kinds: Vec<RankingKind> = match kind {
        Some(kind) => vec![kind],
        None => RankingKind::ALL.to_vec(),
    };

    let boards: Vec<RankingBoard> = kinds
        .into_iter()
        .map(|kind| RankingBoard {
            kind,
            rows: ranking_rows(&ctx.rankings, kind, limit),
        })
        .collect();

    if args.json {
        return print_json(&boards);
    }

    // tarpaulin::skip - console output
    for board in &boards {
        println!("{} rankings", board.kind.label());
        if board.rows.is_empty() {
            println!("  No ranked players yet.");
        }
        for row in &board.rows {
            println!(
                "  {:>4}  {:<24} {:>9}  {}",
                rank_label(row.rank),
                row.name,
                display_number(row.points),
                row.detail
            );
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::compute_league_rankings;
    use crate::spl::PlayerStatRecord;
    use serde_json::json;

    fn roster() -> Vec<PlayerStatRecord> {
        serde_json::from_value(json!([
            {"player_id": 1, "name": "Opener", "innings": 5, "not_outs": 1,
             "balls_faced": 200, "total_runs": 250},
            {"player_id": 2, "name": "Spinner", "total_balls_bowled": 120,
             "total_runs_conceded": 100, "wickets": 8, "best_spell": "3-12"},
            {"player_id": 3, "name": "Benchwarmer"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_rows_skip_zero_scores() {
        let rankings = compute_league_rankings(&roster());
        let rows = ranking_rows(&rankings, RankingKind::Batting, 10);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Opener");
        assert_eq!(rows[0].rank, Some(1));
        assert_eq!(rows[0].player_id, Some(PlayerId::new("1")));
    }

    #[test]
    fn test_rows_respect_limit() {
        let rankings = compute_league_rankings(&roster());
        assert!(ranking_rows(&rankings, RankingKind::Bowling, 0).is_empty());
    }

    #[test]
    fn test_bowling_detail_includes_best_spell() {
        let rankings = compute_league_rankings(&roster());
        let spinner = rankings
            .ranked_players
            .iter()
            .find(|p| p.name() == "Spinner")
            .unwrap();

        let detail = ranking_detail(spinner, RankingKind::Bowling);
        assert!(detail.contains("econ 5"));
        assert!(detail.contains("overs 20"));
        assert!(detail.ends_with("best 3-12"));
    }

    #[test]
    fn test_batting_detail() {
        let rankings = compute_league_rankings(&roster());
        let opener = &rankings.ranked_players[0];
        assert_eq!(
            ranking_detail(opener, RankingKind::Batting),
            "avg 62.50 | sr 125"
        );
    }
}
