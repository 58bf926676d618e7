//! `get rank` command: fetch season totals and rank the pool.

use std::path::PathBuf;

use crate::{
    analysis::rank_players,
    cli::CommonFilters,
    error::Result,
    export::write_ranking_csv,
};

use super::{
    common::{default_output_path, CommandContext},
    player_stats::fetch_all_player_stats,
};

/// Parameters for the ranking command
#[derive(Debug)]
pub struct RankParams {
    pub filters: CommonFilters,
    pub top: usize,
    pub output: Option<PathBuf>,
    pub refresh: bool,
    pub json: bool,
}

/// Handle the ranking command
pub async fn handle_rank(params: RankParams) -> Result<()> {
    let ctx = CommandContext::new(&params.filters, params.refresh).await?;

    // Rankings always work off season totals
    let records = fetch_all_player_stats(&ctx, &params.filters, None).await?;
    let ranked = rank_players(&records, params.top);

    if params.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    let path = params
        .output
        .unwrap_or_else(|| default_output_path(&format!("fantasy_ranking_top{}.csv", params.top)));
    write_ranking_csv(&ranked, &path)?;

    println!(
        "✓ Top {} ranking for {} written to {}",
        ranked.len(),
        ctx.meta.name,
        path.display()
    );
    Ok(())
}
