//! Unit tests for CSV export

use super::*;
use crate::analysis::rank_players;
use std::collections::BTreeMap;
use tempfile::tempdir;

fn record(
    id: u64,
    name: &str,
    category: StatCategory,
    value: &str,
    week: Option<u16>,
) -> PlayerStatRecord {
    PlayerStatRecord {
        player_id: PlayerId::new(id),
        player_name: name.to_string(),
        team: "DEN".to_string(),
        position: "C".to_string(),
        stat_category: category,
        stat_value: value.to_string(),
        season: Season::new(2025),
        week: week.map(Week::new),
    }
}

#[test]
fn test_write_csv_empty_records_header_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.csv");

    write_csv(&[], &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        "player_id,player_name,team,position,stat_category,stat_value,season,week"
    );
}

#[test]
fn test_write_csv_row_count_and_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.csv");

    let records = vec![
        record(1, "Player A", StatCategory::Pts, "2085", None),
        record(1, "Player A", StatCategory::Reb, "976", None),
        record(2, "Player B", StatCategory::Ast, "589", None),
    ];

    write_csv(&records, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4); // header + 3 rows

    assert_eq!(lines[1], "1,Player A,DEN,C,PTS,2085,2025,");
    assert_eq!(lines[2], "1,Player A,DEN,C,REB,976,2025,");
    assert_eq!(lines[3], "2,Player B,DEN,C,AST,589,2025,");
}

#[test]
fn test_write_csv_week_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.csv");

    let records = vec![record(1, "Player A", StatCategory::Pts, "31", Some(7))];
    write_csv(&records, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[1].ends_with(",2025,7"));
}

#[test]
fn test_write_csv_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("nested").join("stats.csv");

    write_csv(&[], &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_write_csv_unwritable_path_is_io_error() {
    let dir = tempdir().unwrap();
    // A directory at the target path makes it unwritable as a file
    let path = dir.path().join("stats.csv");
    std::fs::create_dir(&path).unwrap();

    let result = write_csv(&[], &path);
    assert!(result.is_err());
}

#[test]
fn test_format_category_value() {
    assert_eq!(format_category_value(StatCategory::FgPct, 0.4567), "0.457");
    assert_eq!(format_category_value(StatCategory::FtPct, 0.9), "0.900");
    assert_eq!(format_category_value(StatCategory::Pts, 2085.0), "2085");
    assert_eq!(format_category_value(StatCategory::To, 211.0), "211");
}

#[test]
fn test_write_ranking_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ranking.csv");

    let mut categories = BTreeMap::new();
    categories.insert(StatCategory::Pts, 2085.0);
    categories.insert(StatCategory::FgPct, 0.583);

    let ranked = vec![RankedPlayer {
        rank: 1,
        player_name: "Top Player".to_string(),
        team: "DEN".to_string(),
        position: "C".to_string(),
        fantasy_score: 12.3456,
        categories,
    }];

    write_ranking_csv(&ranked, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "rank,player_name,team,position,fantasy_score,PTS,REB,AST,ST,BLK,3PTM,FG%,FT%,TO"
    );
    assert!(lines[1].starts_with("1,Top Player,DEN,C,12.3456,2085,"));
    assert!(lines[1].contains("0.583"));
}

#[test]
fn test_write_ranking_csv_from_rank_players() {
    // Ranking output stays aligned with the exporter's column order
    let dir = tempdir().unwrap();
    let path = dir.path().join("ranking.csv");

    let records = vec![
        record(1, "Better Player", StatCategory::Pts, "2000", None),
        record(2, "Lesser Player", StatCategory::Pts, "1000", None),
    ];

    let ranked = rank_players(&records, 150);
    write_ranking_csv(&ranked, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,Better Player,"));
    assert!(lines[2].starts_with("2,Lesser Player,"));
}
