use crate::dates::MonthWindow;

const ARCHIVE_ROOT: &str = "https://www.sportsbookreviewsonline.com";

/// The NHL season shortened to a January start; its archive also drops the
/// usual cross-year naming and is filed under the plain end year.
const NHL_SHORT_SEASON: u16 = 2020;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Nfl,
    Nba,
    Nhl,
    Mlb,
}

/// Which of the two archive sheet shapes a sport uses. Football and
/// basketball sheets quote one spread/total market column set per row;
/// hockey and baseball sheets carry explicit moneyline, spread and total
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFamily {
    Spread,
    Totals,
}

impl Sport {
    pub const ALL: [Sport; 4] = [Sport::Nfl, Sport::Nba, Sport::Nhl, Sport::Mlb];

    pub fn key(self) -> &'static str {
        match self {
            Sport::Nfl => "nfl",
            Sport::Nba => "nba",
            Sport::Nhl => "nhl",
            Sport::Mlb => "mlb",
        }
    }

    pub fn from_key(key: &str) -> Option<Sport> {
        match key.trim().to_ascii_lowercase().as_str() {
            "nfl" => Some(Sport::Nfl),
            "nba" => Some(Sport::Nba),
            "nhl" => Some(Sport::Nhl),
            "mlb" => Some(Sport::Mlb),
            _ => None,
        }
    }

    pub fn family(self) -> SheetFamily {
        match self {
            Sport::Nfl | Sport::Nba => SheetFamily::Spread,
            Sport::Nhl | Sport::Mlb => SheetFamily::Totals,
        }
    }

    /// Per-segment score columns on the sheet: quarters, periods or innings.
    pub fn segment_count(self) -> usize {
        match self {
            Sport::Nfl | Sport::Nba => 4,
            Sport::Nhl => 3,
            Sport::Mlb => 9,
        }
    }

    /// Leading artifact rows on a season sheet. The HTML archive pages repeat
    /// their column header as the first data row; the spreadsheet archives
    /// carry a single header row.
    pub fn header_rows(self) -> usize {
        match self {
            Sport::Nfl | Sport::Nba | Sport::Nhl => 2,
            Sport::Mlb => 1,
        }
    }

    pub fn has_pitchers(self) -> bool {
        matches!(self, Sport::Mlb)
    }

    /// Months whose truncated date codes belong to the season anchor year;
    /// anything outside rolls over to the following calendar year.
    pub fn month_window(self, season: u16) -> MonthWindow {
        match self {
            Sport::Nfl | Sport::Nba => MonthWindow::new(8, 12),
            Sport::Nhl if season == NHL_SHORT_SEASON => MonthWindow::new(1, 3),
            Sport::Nhl => MonthWindow::new(8, 12),
            Sport::Mlb => MonthWindow::new(3, 11),
        }
    }

    /// Season component of the archive file name, e.g. "2015-16" for the
    /// cross-year sports and the plain year for baseball.
    pub fn season_label(self, season: u16) -> String {
        match self {
            Sport::Nfl | Sport::Nba => cross_year_label(season),
            Sport::Nhl if season == NHL_SHORT_SEASON => "2021".to_string(),
            Sport::Nhl => cross_year_label(season),
            Sport::Mlb => season.to_string(),
        }
    }

    pub fn archive_url(self, season: u16) -> String {
        match self {
            Sport::Nfl | Sport::Nba | Sport::Nhl => format!(
                "{ARCHIVE_ROOT}/scoresoddsarchives/{}-odds-{}",
                self.key(),
                self.season_label(season)
            ),
            Sport::Mlb => format!(
                "{ARCHIVE_ROOT}/wp-content/uploads/sportsbookreviewsonline_com_737/mlb-odds-{season}.xlsx"
            ),
        }
    }

    /// Seasons before this one lack the spread columns on totals sheets and
    /// have their total columns shifted left by two.
    pub fn first_spread_column_season(self) -> Option<u16> {
        match self {
            Sport::Nhl | Sport::Mlb => Some(2014),
            Sport::Nfl | Sport::Nba => None,
        }
    }
}

fn cross_year_label(season: u16) -> String {
    format!("{}-{:02}", season, (season + 1) % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_labels() {
        assert_eq!(Sport::Nfl.season_label(2015), "2015-16");
        assert_eq!(Sport::Nba.season_label(1999), "1999-00");
        assert_eq!(Sport::Nhl.season_label(2019), "2019-20");
        assert_eq!(Sport::Nhl.season_label(2020), "2021");
        assert_eq!(Sport::Mlb.season_label(2015), "2015");
    }

    #[test]
    fn month_windows() {
        assert!(Sport::Nfl.month_window(2015).contains(8));
        assert!(!Sport::Nfl.month_window(2015).contains(1));
        assert!(Sport::Nhl.month_window(2020).contains(1));
        assert!(!Sport::Nhl.month_window(2020).contains(8));
        assert!(Sport::Mlb.month_window(2015).contains(3));
        assert!(!Sport::Mlb.month_window(2015).contains(12));
    }

    #[test]
    fn archive_urls() {
        assert_eq!(
            Sport::Nhl.archive_url(2020),
            "https://www.sportsbookreviewsonline.com/scoresoddsarchives/nhl-odds-2021"
        );
        assert!(Sport::Mlb.archive_url(2015).ends_with("mlb-odds-2015.xlsx"));
    }
}
