use crate::rows::{SpreadQuotes, TotalsQuotes};

/// Signed lines derived from a spread-sheet pair. The favorite carries the
/// negative spread; the two sides' signed spreads are exact negations by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadLines {
    pub home_close_ml: i32,
    pub away_close_ml: i32,
    pub home_is_favorite: bool,
    pub home_open_spread: f64,
    pub away_open_spread: f64,
    pub home_close_spread: f64,
    pub away_close_spread: f64,
    pub home_second_half_spread: f64,
    pub away_second_half_spread: f64,
    pub second_half_total: f64,
    pub total_open: f64,
    pub total_close: f64,
}

/// Split the paired spread-sheet quotes into spread and total and assign
/// signs.
///
/// The market prints spread and total without labels; the smaller of the two
/// raw opening values is the point spread, the larger the total, which holds
/// because totals dwarf spreads in these sports. The row that carries the
/// spread at open also carries it at close and in the second half. The
/// favorite is the side with the lower closing moneyline and takes the
/// negative spread.
pub fn derive_spread_lines(away: &SpreadQuotes, home: &SpreadQuotes) -> SpreadLines {
    let (spread_row, total_row) = if away.open < home.open {
        (away, home)
    } else {
        (home, away)
    };

    let home_is_favorite = home.close_ml < away.close_ml;
    let home_open_spread = oriented(spread_row.open, home_is_favorite);
    let home_close_spread = oriented(spread_row.close, home_is_favorite);
    let home_second_half_spread = oriented(spread_row.second_half, home_is_favorite);

    SpreadLines {
        home_close_ml: home.close_ml as i32,
        away_close_ml: away.close_ml as i32,
        home_is_favorite,
        home_open_spread,
        away_open_spread: negated(home_open_spread),
        home_close_spread,
        away_close_spread: negated(home_close_spread),
        home_second_half_spread,
        away_second_half_spread: negated(home_second_half_spread),
        second_half_total: total_row.second_half,
        total_open: total_row.open,
        total_close: total_row.close,
    }
}

/// Consistency checks over a totals-sheet pair. The sheet carries both
/// sides' closing spread lines already signed, so they must be exact
/// negations; the archive is known to hold occasional transcription slips,
/// so a violation is reported for manual review rather than aborting the
/// run. Total-line agreement is only checked where both rows quote the line
/// (baseball).
pub fn check_totals_pair(
    away: &TotalsQuotes,
    home: &TotalsQuotes,
    context: &str,
    check_total_lines: bool,
    warnings: &mut Vec<String>,
) {
    if away.spread_close != negated(home.spread_close) {
        warnings.push(format!(
            "{context}: closing spread lines should be exact negations, got {} and {}",
            away.spread_close, home.spread_close
        ));
    }
    if check_total_lines {
        if away.total_open != home.total_open {
            warnings.push(format!(
                "{context}: opening total line mismatch, O={} vs U={}",
                away.total_open, home.total_open
            ));
        }
        if away.total_close != home.total_close {
            warnings.push(format!(
                "{context}: closing total line mismatch, O={} vs U={}",
                away.total_close, home.total_close
            ));
        }
    }
}

fn oriented(line: f64, favorite: bool) -> f64 {
    if favorite { negated(line) } else { line }
}

// Negate without manufacturing -0.0 for zeroed sentinel lines.
fn negated(line: f64) -> f64 {
    if line == 0.0 { 0.0 } else { -line }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread(open: f64, close: f64, close_ml: f64, second_half: f64) -> SpreadQuotes {
        SpreadQuotes {
            open,
            close,
            close_ml,
            second_half,
        }
    }

    #[test]
    fn away_favorite_takes_negative_spread() {
        // Away quotes the spread side (3 < 44) and is favored (-150 < +130).
        let away = spread(3.0, 3.5, -150.0, 1.5);
        let home = spread(44.0, 44.5, 130.0, 22.0);
        let lines = derive_spread_lines(&away, &home);
        assert!(!lines.home_is_favorite);
        assert_eq!(lines.away_open_spread, -3.0);
        assert_eq!(lines.home_open_spread, 3.0);
        assert_eq!(lines.total_open, 44.0);
        assert_eq!(lines.total_close, 44.5);
        assert_eq!(lines.away_close_spread, -3.5);
        assert_eq!(lines.away_second_half_spread, -1.5);
        assert_eq!(lines.second_half_total, 22.0);
        assert_eq!(lines.away_close_ml, -150);
        assert_eq!(lines.home_close_ml, 130);
    }

    #[test]
    fn home_favorite_flips_signs() {
        // Home row carries the spread side this time.
        let away = spread(41.0, 41.5, 180.0, 21.0);
        let home = spread(6.5, 7.0, -220.0, 3.5);
        let lines = derive_spread_lines(&away, &home);
        assert!(lines.home_is_favorite);
        assert_eq!(lines.home_open_spread, -6.5);
        assert_eq!(lines.away_open_spread, 6.5);
        assert_eq!(lines.home_close_spread, -7.0);
        assert_eq!(lines.total_open, 41.0);
        assert_eq!(lines.second_half_total, 21.0);
    }

    #[test]
    fn spreads_are_exact_negations() {
        let away = spread(2.5, 3.0, -140.0, 1.0);
        let home = spread(47.0, 46.5, 120.0, 24.0);
        let lines = derive_spread_lines(&away, &home);
        assert_eq!(lines.home_open_spread, -lines.away_open_spread);
        assert_eq!(lines.home_close_spread, -lines.away_close_spread);
        assert_eq!(
            lines.home_second_half_spread,
            -lines.away_second_half_spread
        );
    }

    #[test]
    fn zeroed_lines_stay_positive_zero() {
        let away = spread(0.0, 0.0, -140.0, 0.0);
        let home = spread(44.0, 44.0, 120.0, 22.0);
        let lines = derive_spread_lines(&away, &home);
        assert_eq!(lines.away_open_spread.to_bits(), 0.0f64.to_bits());
        assert_eq!(lines.home_open_spread.to_bits(), 0.0f64.to_bits());
    }

    fn totals(spread_close: f64, total_open: f64, total_close: f64) -> TotalsQuotes {
        TotalsQuotes {
            open_ml: -110.0,
            close_ml: -115.0,
            spread_close,
            spread_close_odds: 100.0,
            total_open,
            total_open_odds: -110.0,
            total_close,
            total_close_odds: -110.0,
        }
    }

    #[test]
    fn negation_slip_warns() {
        let mut warnings = Vec::new();
        check_totals_pair(
            &totals(1.5, 8.5, 8.5),
            &totals(1.5, 8.5, 8.5),
            "NYY @ BOS on 2015-06-01",
            true,
            &mut warnings,
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("exact negations"));
    }

    #[test]
    fn clean_pair_is_quiet() {
        let mut warnings = Vec::new();
        check_totals_pair(
            &totals(1.5, 8.5, 9.0),
            &totals(-1.5, 8.5, 9.0),
            "ctx",
            true,
            &mut warnings,
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn total_line_mismatch_warns_only_when_checked() {
        let mut warnings = Vec::new();
        check_totals_pair(
            &totals(1.5, 8.5, 9.0),
            &totals(-1.5, 9.0, 9.0),
            "ctx",
            false,
            &mut warnings,
        );
        assert!(warnings.is_empty());
        check_totals_pair(
            &totals(1.5, 8.5, 9.0),
            &totals(-1.5, 9.0, 9.0),
            "ctx",
            true,
            &mut warnings,
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("opening total line mismatch"));
    }
}
