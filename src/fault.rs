use chrono::NaiveDate;
use thiserror::Error;

/// Hard data-integrity faults. Any of these aborts the season being
/// processed; soft data-quality findings go to the warning list instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Fault {
    #[error("season {season}: date code {code:?} is not a 3- or 4-digit MMDD value")]
    DateCode { season: u16, code: String },

    #[error(
        "season {season}: date code {code:?} resolves to impossible calendar date {year}-{month:02}-{day:02}"
    )]
    DateImpossible {
        season: u16,
        code: String,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("season {season}: row {index} has only {got} cells, expected at least {want}")]
    ShortRow {
        season: u16,
        index: usize,
        got: usize,
        want: usize,
    },

    #[error(
        "season {season}: date mismatch in pair: {away} ({away_date}) vs {home} ({home_date})"
    )]
    DateMismatch {
        season: u16,
        away: String,
        away_date: NaiveDate,
        home: String,
        home_date: NaiveDate,
    },
}
