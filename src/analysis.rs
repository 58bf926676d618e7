//! 9-category fantasy ranking.
//!
//! Each ranking category is z-scored across the player pool, turnovers are
//! inverted (a turnover hurts), and the per-category scores sum into a single
//! fantasy score used to rank the pool.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cli::types::StatCategory;
use crate::export::PlayerStatRecord;


/// The standard Yahoo 9-cat set, in output column order.
pub const RANKING_CATEGORIES: [StatCategory; 9] = [
    StatCategory::Pts,
    StatCategory::Reb,
    StatCategory::Ast,
    StatCategory::St,
    StatCategory::Blk,
    StatCategory::ThreePm,
    StatCategory::FgPct,
    StatCategory::FtPct,
    StatCategory::To,
];

/// Per-player category values assembled from flattened records.
#[derive(Debug, Clone)]
pub struct PlayerLine {
    pub player_name: String,
    pub team: String,
    pub position: String,
    pub values: BTreeMap<StatCategory, f64>,
}

/// One row of the final ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    pub player_name: String,
    pub team: String,
    pub position: String,
    pub fantasy_score: f64,
    pub categories: BTreeMap<StatCategory, f64>,
}

/// Parse an `X/Y` made/attempted fraction.
pub fn parse_fraction(s: &str) -> Option<(f64, f64)> {
    let (num, den) = s.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    Some((num, den))
}

/// Parse a plain numeric stat value.
pub fn parse_stat_value(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}

/// Group flattened records into one category line per player.
///
/// Percentage categories missing from the feed are derived from the
/// made/attempted fractions when those are present.
pub fn build_player_lines(records: &[PlayerStatRecord]) -> Vec<PlayerLine> {
    let mut lines: BTreeMap<u64, PlayerLine> = BTreeMap::new();

    for r in records {
        let line = lines
            .entry(r.player_id.as_u64())
            .or_insert_with(|| PlayerLine {
                player_name: r.player_name.clone(),
                team: r.team.clone(),
                position: r.position.clone(),
                values: BTreeMap::new(),
            });

        match r.stat_category {
            StatCategory::FgMadeAttempts => {
                if let Some((made, attempts)) = parse_fraction(&r.stat_value) {
                    if attempts > 0.0 {
                        line.values
                            .entry(StatCategory::FgPct)
                            .or_insert(made / attempts);
                    }
                }
            }
            StatCategory::FtMadeAttempts => {
                if let Some((made, attempts)) = parse_fraction(&r.stat_value) {
                    if attempts > 0.0 {
                        line.values
                            .entry(StatCategory::FtPct)
                            .or_insert(made / attempts);
                    }
                }
            }
            category => {
                if let Some(value) = parse_stat_value(&r.stat_value) {
                    line.values.insert(category, value);
                }
            }
        }
    }

    lines.into_values().collect()
}

/// Sample-standard-deviation z-scores for one category across the pool.
/// Missing values count as 0; zero variance contributes 0 for everyone.
fn z_scores(lines: &[PlayerLine], category: StatCategory) -> Vec<f64> {
    let values: Vec<f64> = lines
        .iter()
        .map(|l| l.values.get(&category).copied().unwrap_or(0.0))
        .collect();

    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return vec![0.0; n];
    }

    values.iter().map(|v| (v - mean) / std_dev).collect()
}

/// Rank the pool by summed z-scores and keep the top `top` players.
pub fn rank_players(records: &[PlayerStatRecord], top: usize) -> Vec<RankedPlayer> {
    let lines = build_player_lines(records);

    let mut scores = vec![0.0; lines.len()];
    for category in RANKING_CATEGORIES {
        let z = z_scores(&lines, category);
        for (score, zv) in scores.iter_mut().zip(&z) {
            // Turnovers count against a player
            *score += if category == StatCategory::To { -zv } else { *zv };
        }
    }

    let mut indexed: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    indexed
        .into_iter()
        .take(top)
        .enumerate()
        .map(|(rank_idx, (line_idx, fantasy_score))| {
            let line = &lines[line_idx];
            let categories = RANKING_CATEGORIES
                .iter()
                .filter_map(|c| line.values.get(c).map(|v| (*c, *v)))
                .collect();
            RankedPlayer {
                rank: rank_idx + 1,
                player_name: line.player_name.clone(),
                team: line.team.clone(),
                position: line.position.clone(),
                fantasy_score,
                categories,
            }
        })
        .collect()
}
