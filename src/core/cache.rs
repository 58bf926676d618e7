//! File-backed persistence under the platform cache directory.
//!
//! Two things live here between runs: the OAuth token (so re-authorization is
//! a one-time step) and cached league metadata (so repeat runs skip an API
//! call unless `--refresh` is passed).

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

fn cache_base() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("yahoo-fbb")
}

/// Path: ~/.cache/yahoo-fbb/token.json
pub fn token_path() -> PathBuf {
    cache_base().join("token.json")
}

/// Path: ~/.cache/yahoo-fbb/league-meta_{game}_{league_id}.json
pub fn league_meta_path(game: &str, league_id: u32) -> PathBuf {
    cache_base().join(format!("league-meta_{}_{}.json", game, league_id))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
