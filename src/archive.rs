use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;

use crate::sport::Sport;

const CACHE_DIR: &str = "linesheet";

/// Per-user cache directory for downloaded season archives.
pub fn app_cache_dir() -> Option<PathBuf> {
    // Prefer XDG cache.
    if let Ok(base) = std::env::var("XDG_CACHE_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(CACHE_DIR));
        }
    }
    // Fallback to ~/.cache on linux-like systems.
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".cache").join(CACHE_DIR))
}

pub fn archive_path(sport: Sport, season: u16) -> Option<PathBuf> {
    let ext = match sport {
        Sport::Mlb => "xlsx",
        _ => "html",
    };
    let name = format!("{}-odds-{}.{}", sport.key(), sport.season_label(season), ext);
    app_cache_dir().map(|dir| dir.join(name))
}

/// Location where an externally decoded cell dump of a spreadsheet archive
/// is expected, next to the cached workbook.
pub fn decoded_sheet_path(sport: Sport, season: u16) -> Option<PathBuf> {
    let name = format!("{}-odds-{}.tsv", sport.key(), sport.season_label(season));
    app_cache_dir().map(|dir| dir.join(name))
}

/// Fetch one season's archive document, reading the on-disk copy when one
/// exists and downloading (then storing) it otherwise. Season archives are
/// historical and never change, so a present file is always trusted.
pub fn fetch_archive(client: &Client, sport: Sport, season: u16) -> Result<Vec<u8>> {
    let path = archive_path(sport, season);
    if let Some(path) = path.as_ref()
        && path.is_file()
    {
        return fs::read(path).with_context(|| format!("read cached {}", path.display()));
    }

    let url = sport.archive_url(season);
    let resp = client
        .get(&url)
        .send()
        .with_context(|| format!("request {url}"))?;
    let status = resp.status();
    let body = resp
        .bytes()
        .with_context(|| format!("read archive body from {url}"))?;
    if !status.is_success() {
        return Err(anyhow!("http {status} fetching {url}"));
    }

    if let Some(path) = path.as_ref() {
        store_atomic(path, &body);
    }
    Ok(body.to_vec())
}

// Cache writes are best-effort; a failed store only costs a re-download.
fn store_atomic(path: &std::path::Path, bytes: &[u8]) {
    let Some(dir) = path.parent() else {
        return;
    };
    let _ = fs::create_dir_all(dir);
    let tmp = path.with_extension("tmp");
    if fs::write(&tmp, bytes).is_ok() {
        let _ = fs::rename(&tmp, path);
    }
}
