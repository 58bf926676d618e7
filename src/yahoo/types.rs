//! Typed views of Yahoo Fantasy resources.
//!
//! Yahoo serializes most scalar fields as strings, numeric or not; the structs
//! here keep them that way and let callers parse where it matters.

use serde::{Deserialize, Serialize};

/// League metadata from `league/{league_key}` (and the per-league entries of
/// the user's leagues listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueMeta {
    pub league_key: String,
    pub league_id: String,
    pub name: String,
    pub season: String,
    #[serde(default)]
    pub num_teams: Option<u32>,
    #[serde(default)]
    pub scoring_type: Option<String>,
}
