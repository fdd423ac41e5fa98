use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use linesheet::driver::run_seasons;
use linesheet::engine::EngineConfig;
use linesheet::export::{export_json, export_xlsx};
use linesheet::sentinel::SentinelSet;
use linesheet::source::{DirSource, SheetSource, WebArchive};
use linesheet::sport::Sport;
use linesheet::translate::Translator;

const MAX_PRINTED_WARNINGS: usize = 12;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let sport = parse_sport_arg()?;
    let seasons = parse_seasons_arg()?;
    if seasons.is_empty() {
        return Err(anyhow!("no seasons requested, pass --seasons=2015-2019"));
    }

    let translator = match flag_value("--translate") {
        Some(path) => Translator::load(&PathBuf::from(path))?,
        None => Translator::empty(),
    };
    let cfg = EngineConfig {
        sentinels: SentinelSet::default(),
        translator,
    };

    let source: Box<dyn SheetSource + Sync> = match flag_value("--source-dir") {
        Some(dir) => Box::new(DirSource::new(dir)),
        None => Box::new(WebArchive),
    };

    let summary = run_seasons(&cfg, source.as_ref(), sport, &seasons);

    println!("Line sheet ingest complete");
    println!("Sport: {}", sport.key());
    println!(
        "Seasons: {}/{}",
        summary.seasons_succeeded, summary.seasons_total
    );
    println!("Rows: {}", summary.rows_seen);
    println!("Games: {}", summary.games);

    if !summary.warnings.is_empty() {
        println!("Warnings: {}", summary.warnings.len());
        for warning in summary.warnings.iter().take(MAX_PRINTED_WARNINGS) {
            println!(" - {warning}");
        }
        if summary.warnings.len() > MAX_PRINTED_WARNINGS {
            println!(
                " - ... and {} more",
                summary.warnings.len() - MAX_PRINTED_WARNINGS
            );
        }
    }
    if !summary.errors.is_empty() {
        println!("Errors: {}", summary.errors.len());
        for err in &summary.errors {
            println!(" - {err}");
        }
    }

    if let Some(out) = flag_value("--out") {
        let path = PathBuf::from(&out);
        match path.extension().and_then(|e| e.to_str()) {
            Some("xlsx") => export_xlsx(&path, sport.key(), &summary.table)?,
            Some("json") => export_json(&path, &summary.table)?,
            _ => return Err(anyhow!("--out expects an .xlsx or .json path, got {out}")),
        }
        println!("Wrote {}", path.display());
    }

    if summary.seasons_succeeded == 0 {
        return Err(anyhow!("every requested season failed"));
    }
    Ok(())
}

fn parse_sport_arg() -> Result<Sport> {
    let raw = flag_value("--sport").context("missing --sport=nfl|nba|nhl|mlb")?;
    Sport::from_key(&raw).ok_or_else(|| anyhow!("unknown sport {raw:?}"))
}

/// Accepts `--seasons=2015-2019`, `--seasons=2015,2017`, or a mix.
fn parse_seasons_arg() -> Result<Vec<u16>> {
    let raw = flag_value("--seasons").context("missing --seasons=<years>")?;
    let mut seasons = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some((from, to)) = part.split_once('-') {
            let from = parse_year(from)?;
            let to = parse_year(to)?;
            if from > to {
                return Err(anyhow!("season range {part:?} runs backwards"));
            }
            seasons.extend(from..=to);
        } else {
            seasons.push(parse_year(part)?);
        }
    }

    let mut seen = HashSet::new();
    seasons.retain(|season| seen.insert(*season));
    Ok(seasons)
}

fn parse_year(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("invalid season year {raw:?}"))
}

fn flag_value(name: &str) -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&format!("{name}=")) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == name
            && let Some(next) = args.get(idx + 1)
        {
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}
