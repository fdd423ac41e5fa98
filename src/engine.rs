use crate::derive::{check_totals_pair, derive_spread_lines};
use crate::fault::Fault;
use crate::pairing::{RowPair, pair_rows};
use crate::rows::{RawRow, SpreadQuotes, TotalsQuotes, reformat_rows};
use crate::schema::{GameTable, project_baseball, project_football, project_hockey};
use crate::sentinel::SentinelSet;
use crate::sport::{SheetFamily, Sport};
use crate::translate::Translator;

/// Immutable per-run configuration, built once and passed in explicitly.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub sentinels: SentinelSet,
    pub translator: Translator,
}

/// The normalized table for one season plus everything worth reporting
/// about how it was produced.
#[derive(Debug, Clone)]
pub struct SeasonOutcome {
    pub sport: Sport,
    pub season: u16,
    pub rows_seen: usize,
    pub games: usize,
    pub table: GameTable,
    pub warnings: Vec<String>,
}

/// Normalize one season's sheet: strip the header artifact rows, type the
/// remainder, pair adjacent rows into games, derive lines, and project into
/// the sport's fixed schema.
///
/// Hard data-integrity faults abort the season; soft data-quality findings
/// accumulate on the outcome's warning list while the run completes.
pub fn normalize_season(
    cfg: &EngineConfig,
    sport: Sport,
    season: u16,
    cells: &[Vec<String>],
) -> Result<SeasonOutcome, Fault> {
    let mut warnings = Vec::new();

    let data = cells.get(sport.header_rows()..).unwrap_or(&[]);
    let rows = reformat_rows(sport, season, data, &cfg.sentinels, &mut warnings)?;
    let rows_seen = rows.len();
    let pairs = pair_rows(season, rows, &mut warnings)?;

    let table = match sport.family() {
        SheetFamily::Spread => GameTable::Football(
            pairs
                .iter()
                .map(|pair| {
                    let lines = derive_spread_lines(
                        spread_quotes(&pair.away),
                        spread_quotes(&pair.home),
                    );
                    project_football(sport, pair, &lines, &cfg.translator)
                })
                .collect(),
        ),
        SheetFamily::Totals if sport == Sport::Mlb => GameTable::Baseball(
            pairs
                .iter()
                .map(|pair| {
                    let (away, home) = totals_quotes(pair);
                    check_totals_pair(away, home, &pair_context(pair), true, &mut warnings);
                    project_baseball(sport, pair, away, home, &cfg.translator)
                })
                .collect(),
        ),
        SheetFamily::Totals => GameTable::Hockey(
            pairs
                .iter()
                .map(|pair| {
                    let (away, home) = totals_quotes(pair);
                    check_totals_pair(away, home, &pair_context(pair), false, &mut warnings);
                    project_hockey(sport, pair, away, home, &cfg.translator)
                })
                .collect(),
        ),
    };

    Ok(SeasonOutcome {
        sport,
        season,
        rows_seen,
        games: table.len(),
        table,
        warnings,
    })
}

fn pair_context(pair: &RowPair) -> String {
    format!(
        "{} @ {} on {}",
        pair.away.team, pair.home.team, pair.away.date
    )
}

// Reformatting builds quote variants from the same sport descriptor, so the
// family always matches here.
fn spread_quotes(row: &RawRow) -> &SpreadQuotes {
    row.quotes
        .spread()
        .expect("spread sheet row carries spread quotes")
}

fn totals_quotes(pair: &RowPair) -> (&TotalsQuotes, &TotalsQuotes) {
    (
        pair.away
            .quotes
            .totals()
            .expect("totals sheet row carries totals quotes"),
        pair.home
            .quotes
            .totals()
            .expect("totals sheet row carries totals quotes"),
    )
}
