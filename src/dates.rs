use chrono::NaiveDate;

use crate::fault::Fault;

/// Inclusive month range that binds a truncated date code to the season
/// anchor year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: u32,
    pub end: u32,
}

impl MonthWindow {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(self, month: u32) -> bool {
        month >= self.start && month <= self.end
    }
}

/// Resolve a truncated `MMDD` date code against a season anchor year.
///
/// Codes are 3 or 4 digits; 3-digit codes are left-zero-padded (`101` reads
/// as January 1st). Months inside the window land in the anchor year,
/// everything else in the following year. Impossible calendar dates are a
/// hard fault, never coerced.
pub fn resolve_date(raw: &str, season: u16, window: MonthWindow) -> Result<NaiveDate, Fault> {
    let code = raw.trim();
    if !(code.len() == 3 || code.len() == 4) || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Fault::DateCode {
            season,
            code: raw.to_string(),
        });
    }

    let padded = if code.len() == 3 {
        format!("0{code}")
    } else {
        code.to_string()
    };
    let month = padded[..2].parse::<u32>().map_err(|_| Fault::DateCode {
        season,
        code: raw.to_string(),
    })?;
    let day = padded[2..].parse::<u32>().map_err(|_| Fault::DateCode {
        season,
        code: raw.to_string(),
    })?;

    let year = if window.contains(month) {
        i32::from(season)
    } else {
        i32::from(season) + 1
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or(Fault::DateImpossible {
        season,
        code: raw.to_string(),
        year,
        month,
        day,
    })
}
