//! Type-safe wrappers and enums for Yahoo Fantasy Basketball data.

use crate::error::{Result, YahooError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Yahoo Fantasy league IDs.
///
/// Yahoo addresses leagues by key (`nba.l.12345`); the numeric tail is the
/// league ID users actually know.
///
/// # Examples
///
/// ```rust
/// use yahoo_fbb::LeagueId;
///
/// let league_id = LeagueId::new(12345);
/// assert_eq!(league_id.as_u32(), 12345);
/// assert_eq!(league_id.to_string(), "12345");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Fantasy basketball stat categories.
///
/// Yahoo identifies categories by numeric stat id in its API responses; this
/// enum covers the standard 9-cat set plus the made/attempted fractions that
/// back the two percentage categories.
///
/// # Examples
///
/// ```rust
/// use yahoo_fbb::StatCategory;
///
/// assert_eq!(StatCategory::from_stat_id(12), Some(StatCategory::Pts));
/// assert_eq!(StatCategory::Pts.stat_id(), 12);
/// assert_eq!(StatCategory::ThreePm.to_string(), "3PTM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatCategory {
    /// Points scored
    #[serde(rename = "PTS")]
    Pts,
    /// Total rebounds
    #[serde(rename = "REB")]
    Reb,
    /// Assists
    #[serde(rename = "AST")]
    Ast,
    /// Steals
    #[serde(rename = "ST")]
    St,
    /// Blocks
    #[serde(rename = "BLK")]
    Blk,
    /// Three-pointers made
    #[serde(rename = "3PTM")]
    ThreePm,
    /// Field goal percentage
    #[serde(rename = "FG%")]
    FgPct,
    /// Free throw percentage
    #[serde(rename = "FT%")]
    FtPct,
    /// Turnovers (negative category)
    #[serde(rename = "TO")]
    To,
    /// Field goals made / attempted, as an `X/Y` fraction
    #[serde(rename = "FGM/A")]
    FgMadeAttempts,
    /// Free throws made / attempted, as an `X/Y` fraction
    #[serde(rename = "FTM/A")]
    FtMadeAttempts,
}

impl StatCategory {
    /// Map a Yahoo NBA stat id to a category. Unknown ids return `None` and
    /// are skipped during flattening.
    pub fn from_stat_id(stat_id: u32) -> Option<Self> {
        match stat_id {
            5 => Some(StatCategory::FgPct),
            8 => Some(StatCategory::FtPct),
            10 => Some(StatCategory::ThreePm),
            12 => Some(StatCategory::Pts),
            15 => Some(StatCategory::Reb),
            16 => Some(StatCategory::Ast),
            17 => Some(StatCategory::St),
            18 => Some(StatCategory::Blk),
            19 => Some(StatCategory::To),
            9004003 => Some(StatCategory::FgMadeAttempts),
            9007006 => Some(StatCategory::FtMadeAttempts),
            _ => None,
        }
    }

    /// Yahoo's numeric id for this category.
    pub fn stat_id(&self) -> u32 {
        match self {
            StatCategory::FgPct => 5,
            StatCategory::FtPct => 8,
            StatCategory::ThreePm => 10,
            StatCategory::Pts => 12,
            StatCategory::Reb => 15,
            StatCategory::Ast => 16,
            StatCategory::St => 17,
            StatCategory::Blk => 18,
            StatCategory::To => 19,
            StatCategory::FgMadeAttempts => 9004003,
            StatCategory::FtMadeAttempts => 9007006,
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatCategory::Pts => write!(f, "PTS"),
            StatCategory::Reb => write!(f, "REB"),
            StatCategory::Ast => write!(f, "AST"),
            StatCategory::St => write!(f, "ST"),
            StatCategory::Blk => write!(f, "BLK"),
            StatCategory::ThreePm => write!(f, "3PTM"),
            StatCategory::FgPct => write!(f, "FG%"),
            StatCategory::FtPct => write!(f, "FT%"),
            StatCategory::To => write!(f, "TO"),
            StatCategory::FgMadeAttempts => write!(f, "FGM/A"),
            StatCategory::FtMadeAttempts => write!(f, "FTM/A"),
        }
    }
}

impl FromStr for StatCategory {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PTS" => Ok(StatCategory::Pts),
            "REB" => Ok(StatCategory::Reb),
            "AST" => Ok(StatCategory::Ast),
            "ST" | "STL" => Ok(StatCategory::St),
            "BLK" => Ok(StatCategory::Blk),
            "3PTM" | "3PM" => Ok(StatCategory::ThreePm),
            "FG%" => Ok(StatCategory::FgPct),
            "FT%" => Ok(StatCategory::FtPct),
            "TO" | "TOV" => Ok(StatCategory::To),
            "FGM/A" => Ok(StatCategory::FgMadeAttempts),
            "FTM/A" => Ok(StatCategory::FtMadeAttempts),
            _ => Err(YahooError::InvalidStatCategory {
                category: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_new() {
        let id = LeagueId::new(12345);
        assert_eq!(id.as_u32(), 12345);
    }

    #[test]
    fn test_league_id_display() {
        let id = LeagueId::new(12345);
        assert_eq!(format!("{}", id), "12345");
    }

    #[test]
    fn test_league_id_from_str_valid() {
        let id: LeagueId = "12345".parse().unwrap();
        assert_eq!(id.as_u32(), 12345);
    }

    #[test]
    fn test_league_id_from_str_invalid() {
        let result: Result<LeagueId> = "invalid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_league_id_from_str_negative() {
        let result: Result<LeagueId> = "-1".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_league_id_serde() {
        let id = LeagueId::new(12345);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: LeagueId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_player_id_new() {
        let id = PlayerId::new(5583);
        assert_eq!(id.as_u64(), 5583);
    }

    #[test]
    fn test_player_id_from_str() {
        let id: PlayerId = "5583".parse().unwrap();
        assert_eq!(id.as_u64(), 5583);
    }

    #[test]
    fn test_player_id_serde() {
        let id = PlayerId::new(5583);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_season_default() {
        let season = Season::default();
        assert_eq!(season.as_u16(), 2025);
    }

    #[test]
    fn test_season_display() {
        let season = Season::new(2023);
        assert_eq!(format!("{}", season), "2023");
    }

    #[test]
    fn test_season_from_str_valid() {
        let season: Season = "2023".parse().unwrap();
        assert_eq!(season.as_u16(), 2023);
    }

    #[test]
    fn test_season_from_str_invalid() {
        let result: Result<Season> = "invalid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_week_new() {
        let week = Week::new(5);
        assert_eq!(week.as_u16(), 5);
    }

    #[test]
    fn test_week_display() {
        let week = Week::new(5);
        assert_eq!(format!("{}", week), "5");
    }

    #[test]
    fn test_week_from_str_valid() {
        let week: Week = "5".parse().unwrap();
        assert_eq!(week.as_u16(), 5);
    }

    #[test]
    fn test_week_from_str_invalid() {
        let result: Result<Week> = "invalid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_stat_category_display() {
        assert_eq!(StatCategory::Pts.to_string(), "PTS");
        assert_eq!(StatCategory::Reb.to_string(), "REB");
        assert_eq!(StatCategory::Ast.to_string(), "AST");
        assert_eq!(StatCategory::St.to_string(), "ST");
        assert_eq!(StatCategory::Blk.to_string(), "BLK");
        assert_eq!(StatCategory::ThreePm.to_string(), "3PTM");
        assert_eq!(StatCategory::FgPct.to_string(), "FG%");
        assert_eq!(StatCategory::FtPct.to_string(), "FT%");
        assert_eq!(StatCategory::To.to_string(), "TO");
        assert_eq!(StatCategory::FgMadeAttempts.to_string(), "FGM/A");
        assert_eq!(StatCategory::FtMadeAttempts.to_string(), "FTM/A");
    }

    #[test]
    fn test_stat_category_from_stat_id() {
        assert_eq!(StatCategory::from_stat_id(5), Some(StatCategory::FgPct));
        assert_eq!(StatCategory::from_stat_id(8), Some(StatCategory::FtPct));
        assert_eq!(StatCategory::from_stat_id(10), Some(StatCategory::ThreePm));
        assert_eq!(StatCategory::from_stat_id(12), Some(StatCategory::Pts));
        assert_eq!(StatCategory::from_stat_id(15), Some(StatCategory::Reb));
        assert_eq!(StatCategory::from_stat_id(16), Some(StatCategory::Ast));
        assert_eq!(StatCategory::from_stat_id(17), Some(StatCategory::St));
        assert_eq!(StatCategory::from_stat_id(18), Some(StatCategory::Blk));
        assert_eq!(StatCategory::from_stat_id(19), Some(StatCategory::To));
        assert_eq!(
            StatCategory::from_stat_id(9004003),
            Some(StatCategory::FgMadeAttempts)
        );
        assert_eq!(
            StatCategory::from_stat_id(9007006),
            Some(StatCategory::FtMadeAttempts)
        );
    }

    #[test]
    fn test_stat_category_unknown_id() {
        assert_eq!(StatCategory::from_stat_id(9999), None);
        assert_eq!(StatCategory::from_stat_id(0), None);
    }

    #[test]
    fn test_stat_category_id_roundtrip() {
        let categories = [
            StatCategory::Pts,
            StatCategory::Reb,
            StatCategory::Ast,
            StatCategory::St,
            StatCategory::Blk,
            StatCategory::ThreePm,
            StatCategory::FgPct,
            StatCategory::FtPct,
            StatCategory::To,
            StatCategory::FgMadeAttempts,
            StatCategory::FtMadeAttempts,
        ];

        for cat in categories {
            assert_eq!(StatCategory::from_stat_id(cat.stat_id()), Some(cat));
        }
    }

    #[test]
    fn test_stat_category_from_str() {
        assert_eq!("PTS".parse::<StatCategory>().unwrap(), StatCategory::Pts);
        assert_eq!("pts".parse::<StatCategory>().unwrap(), StatCategory::Pts);
        assert_eq!("STL".parse::<StatCategory>().unwrap(), StatCategory::St);
        assert_eq!(
            "3PTM".parse::<StatCategory>().unwrap(),
            StatCategory::ThreePm
        );
        assert_eq!("FG%".parse::<StatCategory>().unwrap(), StatCategory::FgPct);
        assert!("XYZ".parse::<StatCategory>().is_err());
    }

    #[test]
    fn test_stat_category_serde_rename() {
        let json = serde_json::to_string(&StatCategory::ThreePm).unwrap();
        assert_eq!(json, "\"3PTM\"");
        let cat: StatCategory = serde_json::from_str("\"FG%\"").unwrap();
        assert_eq!(cat, StatCategory::FgPct);
    }
}
