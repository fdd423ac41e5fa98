use chrono::NaiveDate;

use crate::dates::resolve_date;
use crate::fault::Fault;
use crate::sentinel::SentinelSet;
use crate::sport::{SheetFamily, Sport};

// Shared sheet geometry: date in the first column, team label in the fourth,
// then per-segment scores, the final score, and the quote columns.
const COL_DATE: usize = 0;
const COL_TEAM: usize = 3;
const MIN_CELLS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn code(self) -> &'static str {
        match self {
            Hand::Left => "L",
            Hand::Right => "R",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pitcher {
    pub name: String,
    pub throws: Option<Hand>,
}

/// Quote columns of a football/basketball sheet row. The open/close/2H cells
/// hold one of the two outcomes of the spread/total market; which one is
/// settled later by the derivation step.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadQuotes {
    pub open: f64,
    pub close: f64,
    pub close_ml: f64,
    pub second_half: f64,
}

/// Quote columns of a hockey/baseball sheet row: explicit moneylines plus
/// source-signed closing spread and total lines with their odds.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsQuotes {
    pub open_ml: f64,
    pub close_ml: f64,
    pub spread_close: f64,
    pub spread_close_odds: f64,
    pub total_open: f64,
    pub total_open_odds: f64,
    pub total_close: f64,
    pub total_close_odds: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Quotes {
    Spread(SpreadQuotes),
    Totals(TotalsQuotes),
}

impl Quotes {
    pub fn spread(&self) -> Option<&SpreadQuotes> {
        match self {
            Quotes::Spread(q) => Some(q),
            Quotes::Totals(_) => None,
        }
    }

    pub fn totals(&self) -> Option<&TotalsQuotes> {
        match self {
            Quotes::Totals(q) => Some(q),
            Quotes::Spread(_) => None,
        }
    }
}

/// One scraped sheet line for one team in one game, dates resolved and quote
/// cells coerced. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub season: u16,
    pub date: NaiveDate,
    pub team: String,
    pub segments: Vec<String>,
    pub final_score: String,
    pub pitcher: Option<Pitcher>,
    pub quotes: Quotes,
}

/// Convert header-stripped cell rows into typed rows. Date problems are hard
/// faults; quote-cell problems downgrade to warnings with the cell zeroed.
pub fn reformat_rows(
    sport: Sport,
    season: u16,
    cells: &[Vec<String>],
    sentinels: &SentinelSet,
    warnings: &mut Vec<String>,
) -> Result<Vec<RawRow>, Fault> {
    let mut out = Vec::with_capacity(cells.len());
    for (i, row) in cells.iter().enumerate() {
        let index = i + sport.header_rows();
        if row.len() < MIN_CELLS {
            return Err(Fault::ShortRow {
                season,
                index,
                got: row.len(),
                want: MIN_CELLS,
            });
        }
        out.push(reformat_row(sport, season, row, sentinels, warnings)?);
    }
    Ok(out)
}

fn reformat_row(
    sport: Sport,
    season: u16,
    row: &[String],
    sentinels: &SentinelSet,
    warnings: &mut Vec<String>,
) -> Result<RawRow, Fault> {
    let date = resolve_date(cell(row, COL_DATE), season, sport.month_window(season))?;
    let team = cell(row, COL_TEAM).to_string();
    let context = format!("{team} on {date} (season {season})");

    let pitcher = if sport.has_pitchers() {
        parse_pitcher(cell(row, COL_TEAM + 1))
    } else {
        None
    };

    let seg_start = COL_TEAM + 1 + usize::from(sport.has_pitchers());
    let segments = (seg_start..seg_start + sport.segment_count())
        .map(|idx| score(row, idx))
        .collect::<Vec<_>>();
    let col_final = seg_start + sport.segment_count();
    let final_score = score(row, col_final);

    let mut line = |idx: usize, field: &str| -> f64 {
        sentinels.line_or_zero(cell(row, idx), field, &context, warnings)
    };

    let quotes = match sport.family() {
        SheetFamily::Spread => Quotes::Spread(SpreadQuotes {
            open: line(col_final + 1, "opening line"),
            close: line(col_final + 2, "closing line"),
            close_ml: line(col_final + 3, "closing moneyline"),
            second_half: line(col_final + 4, "second-half line"),
        }),
        SheetFamily::Totals => {
            let open_ml = line(col_final + 1, "opening moneyline");
            let close_ml = line(col_final + 2, "closing moneyline");
            // Early seasons have no spread columns; the total columns sit two
            // to the left.
            let spread_era = sport
                .first_spread_column_season()
                .is_some_and(|first| season >= first);
            let (spread_close, spread_close_odds) = if spread_era {
                (
                    line(col_final + 3, "closing spread line"),
                    line(col_final + 4, "closing spread odds"),
                )
            } else {
                (0.0, 0.0)
            };
            let total_base = if spread_era { col_final + 5 } else { col_final + 3 };
            Quotes::Totals(TotalsQuotes {
                open_ml,
                close_ml,
                spread_close,
                spread_close_odds,
                total_open: line(total_base, "opening total line"),
                total_open_odds: line(total_base + 1, "opening total odds"),
                total_close: line(total_base + 2, "closing total line"),
                total_close_odds: line(total_base + 3, "closing total odds"),
            })
        }
    };

    Ok(RawRow {
        season,
        date,
        team,
        segments,
        final_score,
        pitcher,
        quotes,
    })
}

/// Split a `NAME-L` / `NAME-R` pitcher cell into name and throwing hand.
/// Cells without a recognized suffix keep the full name with no hand.
pub fn parse_pitcher(raw: &str) -> Option<Pitcher> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(name) = raw.strip_suffix("-L") {
        return Some(Pitcher {
            name: name.to_string(),
            throws: Some(Hand::Left),
        });
    }
    if let Some(name) = raw.strip_suffix("-R") {
        return Some(Pitcher {
            name: name.to_string(),
            throws: Some(Hand::Right),
        });
    }
    Some(Pitcher {
        name: raw.to_string(),
        throws: None,
    })
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.trim()).unwrap_or("")
}

fn score(row: &[String], idx: usize) -> String {
    let v = cell(row, idx);
    if v.is_empty() { "0".to_string() } else { v.to_string() }
}
