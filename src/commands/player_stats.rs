//! `get player-stats` command: fetch, flatten, export.

use std::path::PathBuf;

use crate::{
    cli::{types::Week, CommonFilters},
    error::Result,
    export::{write_csv, PlayerStatRecord},
    yahoo::{flatten::flatten_player_stats_page, http::PLAYERS_PAGE_SIZE},
};

use super::common::{default_output_path, CommandContext};

/// Parameters for the player stats command
#[derive(Debug)]
pub struct PlayerStatsParams {
    pub filters: CommonFilters,
    pub week: Option<Week>,
    pub output: Option<PathBuf>,
    pub refresh: bool,
    pub json: bool,
}

/// Handle the player stats command
pub async fn handle_player_stats(params: PlayerStatsParams) -> Result<()> {
    let ctx = CommandContext::new(&params.filters, params.refresh).await?;

    let records = fetch_all_player_stats(&ctx, &params.filters, params.week).await?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let path = params.output.unwrap_or_else(|| {
        default_output_path(&format!("player_stats_{}.csv", params.filters.season))
    });
    write_csv(&records, &path)?;

    println!(
        "✓ {} stat rows for {} written to {}",
        records.len(),
        ctx.meta.name,
        path.display()
    );
    Ok(())
}

/// Page through the league's player collection until a short page.
pub(crate) async fn fetch_all_player_stats(
    ctx: &CommandContext,
    filters: &CommonFilters,
    week: Option<Week>,
) -> Result<Vec<PlayerStatRecord>> {
    let mut records = Vec::new();
    let mut start = 0;

    loop {
        if filters.verbose {
            println!("Fetching players {}..{}...", start, start + PLAYERS_PAGE_SIZE);
        }

        let page = ctx
            .client
            .get_league_player_stats_page(
                filters.debug,
                &filters.game,
                ctx.league_id,
                filters.season,
                week,
                start,
            )
            .await?;

        let (page_records, page_len) = flatten_player_stats_page(&page, filters.season)?;
        records.extend(page_records);

        if page_len < PLAYERS_PAGE_SIZE {
            break;
        }
        start += PLAYERS_PAGE_SIZE;
    }

    Ok(records)
}
