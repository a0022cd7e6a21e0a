//! Data source inspection command

use serde::Serialize;
use std::path::PathBuf;

use super::common::{print_json, CommandContext};
use crate::{
    cli::DataSourceArgs,
    spl::{types::SeasonCounts, DataOrigin},
    Result,
};

#[derive(Debug, Serialize)]
struct DataReport<'a> {
    origin: String,
    live: bool,
    url: &'a str,
    offline: bool,
    cache_dir: &'a PathBuf,
    #[serde(flatten)]
    counts: SeasonCounts,
    announcements: usize,
    tournaments: Vec<&'a str>,
}

/// Handle the data command
pub async fn handle_data(args: &DataSourceArgs) -> Result<()> {
    let ctx = CommandContext::load(args).await?;

    let report = DataReport {
        origin: ctx.origin.to_string(),
        live: ctx.origin == DataOrigin::Live,
        url: &ctx.source.url,
        offline: ctx.source.offline,
        cache_dir: &ctx.source.cache_dir,
        counts: ctx.season.counts(),
        announcements: ctx.season.announcements.len(),
        tournaments: ctx.season.tournament_names(),
    };

    if args.json {
        return print_json(&report);
    }

    // tarpaulin::skip - console output
    println!("Source: {}", report.origin);
    println!("Feed URL: {}", report.url);
    if report.offline {
        println!("Offline mode: live feed skipped");
    }
    println!("Cache directory: {}", report.cache_dir.display());
    println!(
        "{} tournaments | {} matches | {} players | {} announcements",
        report.counts.total_tournaments,
        report.counts.total_matches,
        report.counts.total_players,
        report.announcements
    );
    for name in &report.tournaments {
        println!("  {}", name);
    }

    Ok(())
}
