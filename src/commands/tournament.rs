//! Tournament command implementation

use serde::Serialize;

use super::common::{print_json, CommandContext};
use crate::{
    cli::{types::LeaderboardCategory, DataSourceArgs},
    ranking::{
        aggregate_tournament, primitives::display_number, summarize_tournament,
        TournamentLeaderboardEntry, TournamentSummary,
    },
    spl::SeasonData,
    Result,
};

#[derive(Debug, Serialize)]
struct TournamentListing<'a> {
    name: &'a str,
    matches: usize,
}

#[derive(Debug, Serialize)]
struct CategoryBoard<'a> {
    category: LeaderboardCategory,
    entries: Vec<&'a TournamentLeaderboardEntry>,
}

#[derive(Debug, Serialize)]
struct TournamentReport<'a> {
    name: &'a str,
    summary: Option<TournamentSummary>,
    leaderboards: Vec<CategoryBoard<'a>>,
}

/// Headline value of a leaderboard row.
pub fn format_category_value(
    entry: &TournamentLeaderboardEntry,
    category: LeaderboardCategory,
) -> String {
    match category {
        LeaderboardCategory::Runs => format!("{} runs", display_number(entry.runs)),
        LeaderboardCategory::Wickets => format!("{} wkts", display_number(entry.wickets)),
        LeaderboardCategory::Sixes => format!("{} sixes", display_number(entry.sixes)),
        LeaderboardCategory::Fours => format!("{} fours", display_number(entry.fours)),
        LeaderboardCategory::HighestScore => display_number(entry.highest_score),
        LeaderboardCategory::BestBowling => entry
            .best_bowling
            .map(|b| format!("{}/{}", display_number(b.wickets), display_number(b.runs)))
            .unwrap_or_default(),
    }
}

/// Supporting figure printed after the headline value.
pub fn format_category_detail(
    entry: &TournamentLeaderboardEntry,
    category: LeaderboardCategory,
) -> String {
    match category {
        LeaderboardCategory::Wickets | LeaderboardCategory::BestBowling => {
            format!("{} inns", entry.bowling_innings)
        }
        LeaderboardCategory::HighestScore => format!("{} runs", display_number(entry.runs)),
        _ => format!("{} inns", entry.innings),
    }
}

/// Tournament names (most recent first) with their match counts.
fn listings(season: &SeasonData) -> Vec<TournamentListing<'_>> {
    season
        .tournaments
        .iter()
        .rev()
        .map(|t| TournamentListing {
            name: &t.name,
            matches: t.matches.len(),
        })
        .collect()
}

fn print_summary(summary: &TournamentSummary) {
    // tarpaulin::skip - console output
    println!(
        "  {} runs | {} wickets | {} sixes | {} fours",
        display_number(summary.total_runs),
        display_number(summary.total_wickets),
        display_number(summary.total_sixes),
        display_number(summary.total_fours)
    );
    if let Some(hs) = &summary.highest_score {
        println!(
            "  Highest score: {} by {} ({})",
            display_number(hs.runs),
            hs.player,
            hs.match_label
        );
    }
    if let Some(bb) = &summary.best_bowling {
        println!(
            "  Best bowling: {}/{} by {} ({})",
            display_number(bb.figures.wickets),
            display_number(bb.figures.runs),
            bb.player,
            bb.match_label
        );
    }
    if let Some(top) = &summary.top_scorer {
        println!("  Top scorer: {} ({} runs)", top.name, display_number(top.value));
    }
    if let Some(top) = &summary.top_wicket_taker {
        println!(
            "  Top wicket-taker: {} ({} wkts)",
            top.name,
            display_number(top.value)
        );
    }
}

/// Handle the tournament command
pub async fn handle_tournament(
    args: &DataSourceArgs,
    name: Option<String>,
    category: Option<LeaderboardCategory>,
    limit: usize,
    list: bool,
) -> Result<()> {
    let ctx = CommandContext::load(args).await?;

    if list {
        let listings = listings(&ctx.season);
        if args.json {
            return print_json(&listings);
        }
        for t in &listings {
            println!("{} ({} matches)", t.name, t.matches); // tarpaulin::skip
        }
        return Ok(());
    }

    let tournament = ctx.tournament(name.as_deref())?;
    let aggregate = aggregate_tournament(&tournament.matches);

    let categories: Vec<LeaderboardCategory> = match category {
        Some(category) => vec![category],
        None => LeaderboardCategory::ALL.to_vec(),
    };

    let report = TournamentReport {
        name: &tournament.name,
        summary: summarize_tournament(&tournament.matches),
        leaderboards: categories
            .into_iter()
            .map(|category| CategoryBoard {
                category,
                entries: aggregate.leaderboard(category, limit),
            })
            .collect(),
    };

    if args.json {
        return print_json(&report);
    }

    // tarpaulin::skip - console output
    println!("{}", report.name);
    match &report.summary {
        Some(summary) => print_summary(summary),
        None => println!("  No matches played yet."),
    }

    for board in &report.leaderboards {
        println!();
        println!("{}", board.category.label());
        if board.entries.is_empty() {
            println!("  No data yet.");
        }
        for (idx, entry) in board.entries.iter().enumerate() {
            println!(
                "  {:>2}. {:<24} {:>10}  {}",
                idx + 1,
                entry.name,
                format_category_value(entry, board.category),
                format_category_detail(entry, board.category)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::BowlingFigures;
    use serde_json::json;

    fn entry() -> TournamentLeaderboardEntry {
        TournamentLeaderboardEntry {
            name: "Kiran".into(),
            runs: 94.0,
            innings: 3,
            sixes: 5.0,
            fours: 8.0,
            highest_score: 52.0,
            wickets: 4.0,
            bowling_innings: 2,
            best_bowling: Some(BowlingFigures {
                wickets: 3.0,
                runs: 15.0,
            }),
        }
    }

    #[test]
    fn test_category_values() {
        let e = entry();
        assert_eq!(format_category_value(&e, LeaderboardCategory::Runs), "94 runs");
        assert_eq!(format_category_value(&e, LeaderboardCategory::Wickets), "4 wkts");
        assert_eq!(format_category_value(&e, LeaderboardCategory::Sixes), "5 sixes");
        assert_eq!(format_category_value(&e, LeaderboardCategory::Fours), "8 fours");
        assert_eq!(format_category_value(&e, LeaderboardCategory::HighestScore), "52");
        assert_eq!(format_category_value(&e, LeaderboardCategory::BestBowling), "3/15");
    }

    #[test]
    fn test_category_details() {
        let e = entry();
        assert_eq!(format_category_detail(&e, LeaderboardCategory::Runs), "3 inns");
        assert_eq!(format_category_detail(&e, LeaderboardCategory::BestBowling), "2 inns");
        assert_eq!(
            format_category_detail(&e, LeaderboardCategory::HighestScore),
            "94 runs"
        );
    }

    #[test]
    fn test_listings_most_recent_first() {
        let season: SeasonData = serde_json::from_value(json!({
            "tournaments": [
                {"name": "Spring Cup", "matches": [{"match_id": 1}]},
                {"name": "Summer Cup", "matches": []}
            ]
        }))
        .unwrap();

        let names: Vec<(&str, usize)> = listings(&season)
            .iter()
            .map(|t| (t.name, t.matches))
            .collect();
        assert_eq!(names, vec![("Summer Cup", 0), ("Spring Cup", 1)]);
    }
}
