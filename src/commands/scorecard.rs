//! Scorecard command implementation

use serde::Serialize;

use super::common::{print_json, CommandContext};
use crate::{
    cli::DataSourceArgs,
    error::SplError,
    ranking::primitives::{display_string, MISSING_DISPLAY},
    spl::{
        types::{BattingEntry, BowlingEntry, Innings},
        Match, Tournament,
    },
    Result,
};

#[derive(Debug, Serialize)]
struct MatchListing {
    match_id: Option<String>,
    label: String,
    result: String,
}

/// Look a match up by its identifier as printed in the match list.
pub fn find_match<'a>(tournament: &'a Tournament, match_id: &str) -> Result<&'a Match> {
    let wanted = match_id.trim();
    tournament
        .matches
        .iter()
        .find(|m| m.id_text().as_deref() == Some(wanted))
        .ok_or_else(|| SplError::MatchNotFound {
            id: wanted.to_string(),
        })
}

pub fn format_batting_line(batter: &BattingEntry) -> String {
    let runs = display_string(batter.runs.as_ref(), "0");
    format!(
        "{:<22} {:<20} {:>4}{} ({}b) 4s {} 6s {}",
        batter.name,
        batter.status.as_deref().unwrap_or(""),
        runs,
        if batter.is_not_out() { "*" } else { "" },
        display_string(batter.balls.as_ref(), "0"),
        display_string(batter.fours.as_ref(), "0"),
        display_string(batter.sixes.as_ref(), "0"),
    )
}

pub fn format_bowling_line(bowler: &BowlingEntry) -> String {
    format!(
        "{:<22} {}-{}-{}-{}  econ {}",
        bowler.name,
        display_string(bowler.overs.as_ref(), "0"),
        display_string(bowler.maidens.as_ref(), "0"),
        display_string(bowler.runs.as_ref(), "0"),
        display_string(bowler.wickets.as_ref(), "0"),
        display_string(bowler.economy.as_ref(), MISSING_DISPLAY),
    )
}

fn print_innings(innings: &Innings) {
    // tarpaulin::skip - console output
    println!(
        "{}  {}",
        innings.batting_team.as_deref().unwrap_or("Innings"),
        display_string(innings.score.as_ref(), MISSING_DISPLAY)
    );
    for batter in &innings.batting_stats {
        println!("  {}", format_batting_line(batter));
    }
    if !innings.bowling_stats.is_empty() {
        println!("  Bowling");
        for bowler in &innings.bowling_stats {
            println!("  {}", format_bowling_line(bowler));
        }
    }
    println!();
}

/// Handle the scorecard command
pub async fn handle_scorecard(
    args: &DataSourceArgs,
    tournament: Option<String>,
    match_id: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::load(args).await?;
    let tournament = ctx.tournament(tournament.as_deref())?;

    let Some(match_id) = match_id else {
        let listings: Vec<MatchListing> = tournament
            .matches
            .iter()
            .map(|m| MatchListing {
                match_id: m.id_text(),
                label: m.label(),
                result: m.result_line(),
            })
            .collect();

        if args.json {
            return print_json(&listings);
        }

        println!("{}", tournament.name); // tarpaulin::skip
        for m in &listings {
            println!(
                "  [{}] {} - {}",
                m.match_id.as_deref().unwrap_or(MISSING_DISPLAY),
                m.label,
                m.result
            ); // tarpaulin::skip
        }
        return Ok(());
    };

    let found = find_match(tournament, &match_id)?;

    if args.json {
        return print_json(found);
    }

    // tarpaulin::skip - console output
    println!("{}", found.label());
    println!();
    match &found.detailed_scorecard {
        Some(scorecard) => scorecard.innings().for_each(print_innings),
        None => println!("Detailed scorecard not available.\n"),
    }
    if let Some(motm) = &found.man_of_the_match {
        println!("Player of the match: {}", motm);
    }
    println!("{}", found.result_line());

    Ok(())
}
