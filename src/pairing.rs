use crate::fault::Fault;
use crate::rows::RawRow;

/// Two adjacent sheet rows making up one game. The archive lists the away
/// side first and the home side second for every sport; favorite/underdog
/// is a separate question answered by the derivation step from the closing
/// moneylines.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPair {
    pub away: RawRow,
    pub home: RawRow,
}

/// Consume header-stripped rows two at a time, in order.
///
/// An odd row count leaves a dangling row that is discarded with a visible
/// warning. Both rows of a pair must carry the same resolved calendar date;
/// a mismatch is a hard fault with both rows' identifying context.
pub fn pair_rows(
    season: u16,
    mut rows: Vec<RawRow>,
    warnings: &mut Vec<String>,
) -> Result<Vec<RowPair>, Fault> {
    if rows.len() % 2 != 0
        && let Some(dangling) = rows.pop()
    {
        warnings.push(format!(
            "season {season}: odd row count, discarding dangling row for {} on {}",
            dangling.team, dangling.date
        ));
    }

    let mut out = Vec::with_capacity(rows.len() / 2);
    let mut iter = rows.into_iter();
    while let (Some(away), Some(home)) = (iter.next(), iter.next()) {
        if away.date != home.date {
            return Err(Fault::DateMismatch {
                season,
                away: away.team,
                away_date: away.date,
                home: home.team,
                home_date: home.date,
            });
        }
        out.push(RowPair { away, home });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::rows::{Quotes, SpreadQuotes};

    fn row(team: &str, date: NaiveDate) -> RawRow {
        RawRow {
            season: 2015,
            date,
            team: team.to_string(),
            segments: vec!["0".to_string(); 4],
            final_score: "0".to_string(),
            pitcher: None,
            quotes: Quotes::Spread(SpreadQuotes {
                open: 0.0,
                close: 0.0,
                close_ml: 0.0,
                second_half: 0.0,
            }),
        }
    }

    #[test]
    fn pairs_adjacent_rows_in_order() {
        let d = NaiveDate::from_ymd_opt(2015, 10, 1).unwrap();
        let rows = vec![row("A", d), row("B", d), row("C", d), row("D", d)];
        let mut warnings = Vec::new();
        let pairs = pair_rows(2015, rows.clone(), &mut warnings).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].away.team, "A");
        assert_eq!(pairs[0].home.team, "B");
        assert_eq!(pairs[1].away.team, "C");
        assert_eq!(pairs[1].home.team, "D");
        assert!(warnings.is_empty());

        // Idempotent on identical input.
        let again = pair_rows(2015, rows, &mut warnings).unwrap();
        assert_eq!(again, pairs);
    }

    #[test]
    fn dangling_row_warns_and_is_discarded() {
        let d = NaiveDate::from_ymd_opt(2015, 10, 1).unwrap();
        let rows = vec![row("A", d), row("B", d), row("C", d)];
        let mut warnings = Vec::new();
        let pairs = pair_rows(2015, rows, &mut warnings).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("dangling row for C"));
    }

    #[test]
    fn date_mismatch_is_a_hard_fault() {
        let d1 = NaiveDate::from_ymd_opt(2015, 10, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2015, 10, 2).unwrap();
        let mut warnings = Vec::new();
        let err = pair_rows(2015, vec![row("A", d1), row("B", d2)], &mut warnings).unwrap_err();
        match err {
            Fault::DateMismatch {
                away,
                home,
                away_date,
                home_date,
                season,
            } => {
                assert_eq!(away, "A");
                assert_eq!(home, "B");
                assert_eq!(away_date, d1);
                assert_eq!(home_date, d2);
                assert_eq!(season, 2015);
            }
            other => panic!("unexpected fault {other:?}"),
        }
    }

    #[test]
    fn empty_input_pairs_to_nothing() {
        let mut warnings = Vec::new();
        assert!(pair_rows(2015, Vec::new(), &mut warnings).unwrap().is_empty());
        assert!(warnings.is_empty());
    }
}
