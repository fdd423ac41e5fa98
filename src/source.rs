use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::archive::{decoded_sheet_path, fetch_archive};
use crate::htmltab::extract_table_rows;
use crate::http_client::http_client;
use crate::sport::Sport;

/// Where one season's sheet of cell rows comes from. The engine only ever
/// sees cell rows; the transport behind them is interchangeable.
pub trait SheetSource {
    fn season_cells(&self, sport: Sport, season: u16) -> Result<Vec<Vec<String>>>;
}

/// The live archive: download (or reuse the cached copy of) a season page
/// and extract its line-sheet table.
///
/// Spreadsheet-based archives (baseball) are downloaded and cached as-is,
/// but their binary decoding is someone else's job: cells are read from an
/// externally decoded `.tsv` dump next to the cached workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebArchive;

impl SheetSource for WebArchive {
    fn season_cells(&self, sport: Sport, season: u16) -> Result<Vec<Vec<String>>> {
        let client = http_client()?;
        let body = fetch_archive(client, sport, season)?;

        if sport == Sport::Mlb {
            let path = decoded_sheet_path(sport, season)
                .ok_or_else(|| anyhow!("no cache directory available for decoded sheets"))?;
            if !path.is_file() {
                return Err(anyhow!(
                    "workbook for {} season {season} is cached, but no decoded cell dump at {}; \
                     extract the sheet to tab-separated rows first",
                    sport.key(),
                    path.display()
                ));
            }
            return read_tsv(&path);
        }

        let html = String::from_utf8_lossy(&body);
        let rows = extract_table_rows(&html);
        if rows.is_empty() {
            return Err(anyhow!(
                "no line-sheet table found in archive page for {} season {season}",
                sport.key()
            ));
        }
        Ok(rows)
    }
}

/// File-backed source reading pre-extracted `<sport>-odds-<label>.tsv` cell
/// dumps from a directory. Used for offline runs and tests.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SheetSource for DirSource {
    fn season_cells(&self, sport: Sport, season: u16) -> Result<Vec<Vec<String>>> {
        let name = format!("{}-odds-{}.tsv", sport.key(), sport.season_label(season));
        read_tsv(&self.dir.join(name))
    }
}

fn read_tsv(path: &Path) -> Result<Vec<Vec<String>>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read sheet cells from {}", path.display()))?;
    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(|cell| cell.trim().to_string()).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_source_reads_tsv_cells() {
        let dir = std::env::temp_dir().join("linesheet-dirsource-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("nfl-odds-2015-16.tsv"),
            "Date\tRot\n1011\t451\n\n1011\t452\n",
        )
        .unwrap();

        let cells = DirSource::new(&dir)
            .season_cells(Sport::Nfl, 2015)
            .unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[1], vec!["1011", "451"]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = DirSource::new("/nonexistent-dir")
            .season_cells(Sport::Nhl, 2015)
            .unwrap_err();
        assert!(err.to_string().contains("nhl-odds-2015-16.tsv"));
    }
}
