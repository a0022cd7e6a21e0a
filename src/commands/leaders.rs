//! Leaders command implementation

use serde::Serialize;

use super::common::{print_json, CommandContext};
use crate::{
    cli::{types::RankingKind, DataSourceArgs},
    ranking::{
        league_totals, primitives::display_string, select_leaders, LeagueTotals, RankedPlayer,
    },
    spl::{types::SeasonCounts, PlayerStatRecord, StatValue},
    Result,
};

/// A leader card: who leads and by how much.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderCard {
    pub title: &'static str,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
struct LeadersReport {
    counts: SeasonCounts,
    totals: LeagueTotals,
    leaders: Vec<LeaderCard>,
    top_ranked: Vec<LeaderCard>,
}

fn card(
    title: &'static str,
    player: Option<&RankedPlayer>,
    stat: impl Fn(&PlayerStatRecord) -> Option<&StatValue>,
) -> Option<LeaderCard> {
    player.map(|p| LeaderCard {
        title,
        name: p.name().to_string(),
        value: display_string(stat(p.record()), "0"),
    })
}

/// Raw-total leader cards, in display order.
pub fn leader_cards(players: &[RankedPlayer]) -> Vec<LeaderCard> {
    let leaders = select_leaders(players);
    [
        card("Most runs", leaders.top_batter, |p| p.total_runs.as_ref()),
        card("Most wickets", leaders.top_bowler, |p| p.wickets.as_ref()),
        card("Most sixes", leaders.top_six_hitter, |p| p.sixes.as_ref()),
        card("Most fours", leaders.top_four_hitter, |p| p.fours.as_ref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// The #1 player of each points ranking.
pub fn top_ranked_cards(ctx: &CommandContext) -> Vec<LeaderCard> {
    RankingKind::ALL
        .iter()
        .filter_map(|&kind| {
            ctx.rankings.top(kind).map(|p| LeaderCard {
                title: kind.label(),
                name: p.name().to_string(),
                value: format!("{:.2} pts", p.points(kind)),
            })
        })
        .collect()
}

/// Handle the leaders command
pub async fn handle_leaders(args: &DataSourceArgs) -> Result<()> {
    let ctx = CommandContext::load(args).await?;
    let players = &ctx.rankings.ranked_players;

    let report = LeadersReport {
        counts: ctx.season.counts(),
        totals: league_totals(players),
        leaders: leader_cards(players),
        top_ranked: top_ranked_cards(&ctx),
    };

    if args.json {
        return print_json(&report);
    }

    // tarpaulin::skip - console output
    println!(
        "{} tournaments | {} matches | {} players",
        report.counts.total_tournaments, report.counts.total_matches, report.counts.total_players
    );
    println!(
        "Season totals: {} runs | {} wickets | {} sixes | {} fours",
        report.totals.total_runs,
        report.totals.total_wickets,
        report.totals.total_sixes,
        report.totals.total_fours
    );
    println!();
    for leader in report.leaders.iter().chain(&report.top_ranked) {
        println!("  {:<14} {:<24} {}", leader.title, leader.name, leader.value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::compute_league_rankings;
    use serde_json::json;

    #[test]
    fn test_leader_cards_pick_raw_totals() {
        let roster: Vec<PlayerStatRecord> = serde_json::from_value(json!([
            {"player_id": 1, "name": "Slugger", "total_runs": 300, "sixes": 2, "fours": "30"},
            {"player_id": 2, "name": "Basher", "total_runs": 120, "sixes": 14, "wickets": 3},
            {"player_id": 3, "name": "Quick", "wickets": 11}
        ]))
        .unwrap();
        let rankings = compute_league_rankings(&roster);

        let cards = leader_cards(&rankings.ranked_players);
        let names: Vec<(&str, &str)> = cards
            .iter()
            .map(|c| (c.title, c.name.as_str()))
            .collect();

        assert_eq!(
            names,
            vec![
                ("Most runs", "Slugger"),
                ("Most wickets", "Quick"),
                ("Most sixes", "Basher"),
                ("Most fours", "Slugger"),
            ]
        );
        assert_eq!(cards[0].value, "300");
        assert_eq!(cards[3].value, "30");
    }

    #[test]
    fn test_no_cards_for_empty_roster() {
        assert!(leader_cards(&[]).is_empty());
    }
}
