//! CSV export of flattened player-stat records.

use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::analysis::{RankedPlayer, RANKING_CATEGORIES};
use crate::cli::types::{PlayerId, Season, StatCategory, Week};
use crate::error::Result;

#[cfg(test)]
mod tests;

/// Fixed column order for the player-stats export.
pub const CSV_COLUMNS: [&str; 8] = [
    "player_id",
    "player_name",
    "team",
    "position",
    "stat_category",
    "stat_value",
    "season",
    "week",
];

/// One flattened (player, stat-category, value) tuple, the unit written to
/// CSV. Values stay as the API returned them; `FGM/A`-style fractions are
/// parsed downstream where a number is needed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStatRecord {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team: String,
    pub position: String,
    pub stat_category: StatCategory,
    pub stat_value: String,
    pub season: Season,
    /// Absent for season-coverage stats; written as an empty cell.
    pub week: Option<Week>,
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write one CSV row per record to `path`, creating parent directories.
///
/// The header row is always written, so an empty record set still produces a
/// header-only file.
pub fn write_csv(records: &[PlayerStatRecord], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(CSV_COLUMNS)?;

    for r in records {
        wtr.write_record(&[
            r.player_id.to_string(),
            r.player_name.clone(),
            r.team.clone(),
            r.position.clone(),
            r.stat_category.to_string(),
            r.stat_value.clone(),
            r.season.to_string(),
            r.week.map(|w| w.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a ranking CSV: `rank, player_name, team, position, fantasy_score`,
/// then the nine category values in their fixed order.
pub fn write_ranking_csv(ranked: &[RankedPlayer], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut wtr = Writer::from_path(path)?;

    let mut header = vec![
        "rank".to_string(),
        "player_name".to_string(),
        "team".to_string(),
        "position".to_string(),
        "fantasy_score".to_string(),
    ];
    header.extend(RANKING_CATEGORIES.iter().map(|c| c.to_string()));
    wtr.write_record(&header)?;

    for player in ranked {
        let mut row = vec![
            player.rank.to_string(),
            player.player_name.clone(),
            player.team.clone(),
            player.position.clone(),
            format!("{:.4}", player.fantasy_score),
        ];
        for cat in RANKING_CATEGORIES {
            let value = player.categories.get(&cat).copied().unwrap_or(0.0);
            row.push(format_category_value(cat, value));
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Percentages keep three decimals; counting stats are whole numbers.
fn format_category_value(category: StatCategory, value: f64) -> String {
    match category {
        StatCategory::FgPct | StatCategory::FtPct => format!("{:.3}", value),
        _ => format!("{}", value.round() as i64),
    }
}
