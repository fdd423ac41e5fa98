use std::env;

use rayon::prelude::*;

use crate::engine::{EngineConfig, SeasonOutcome, normalize_season};
use crate::schema::GameTable;
use crate::source::SheetSource;
use crate::sport::Sport;

/// Outcome of a multi-season run. Seasons are independent, so one season's
/// hard fault lands in `errors` without touching the others; warnings from
/// every season accumulate in sheet order.
#[derive(Debug)]
pub struct RunSummary {
    pub sport: Sport,
    pub seasons_total: usize,
    pub seasons_succeeded: usize,
    pub rows_seen: usize,
    pub games: usize,
    pub table: GameTable,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Normalize a set of seasons for one sport and merge the results in the
/// order the seasons were requested.
///
/// Each season's row sequence is strictly order-dependent inside the engine,
/// but seasons share nothing, so they fan out over an optional fetch pool.
pub fn run_seasons(
    cfg: &EngineConfig,
    source: &(dyn SheetSource + Sync),
    sport: Sport,
    seasons: &[u16],
) -> RunSummary {
    let pool = build_fetch_pool();
    let outcomes: Vec<(u16, anyhow::Result<SeasonOutcome>)> = with_fetch_pool(&pool, || {
        seasons
            .par_iter()
            .map(|&season| (season, process_season(cfg, source, sport, season)))
            .collect()
    });

    let mut summary = RunSummary {
        sport,
        seasons_total: seasons.len(),
        seasons_succeeded: 0,
        rows_seen: 0,
        games: 0,
        table: GameTable::for_sport(sport),
        warnings: Vec::new(),
        errors: Vec::new(),
    };

    for (season, outcome) in outcomes {
        match outcome {
            Ok(outcome) => {
                summary.seasons_succeeded += 1;
                summary.rows_seen += outcome.rows_seen;
                summary.games += outcome.games;
                summary.warnings.extend(outcome.warnings);
                summary.table.append(outcome.table);
            }
            Err(err) => summary.errors.push(format!("season {season}: {err:#}")),
        }
    }
    summary
}

fn process_season(
    cfg: &EngineConfig,
    source: &(dyn SheetSource + Sync),
    sport: Sport,
    season: u16,
) -> anyhow::Result<SeasonOutcome> {
    let cells = source.season_cells(sport, season)?;
    Ok(normalize_season(cfg, sport, season, &cells)?)
}

fn build_fetch_pool() -> Option<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(fetch_parallelism())
        .build()
        .ok()
}

fn with_fetch_pool<T>(pool: &Option<rayon::ThreadPool>, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    if let Some(pool) = pool.as_ref() {
        pool.install(action)
    } else {
        action()
    }
}

fn fetch_parallelism() -> usize {
    env::var("FETCH_PARALLELISM")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(4)
        .clamp(1, 16)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use anyhow::anyhow;

    use super::*;

    struct MapSource {
        seasons: HashMap<u16, Vec<Vec<String>>>,
    }

    impl SheetSource for MapSource {
        fn season_cells(&self, _sport: Sport, season: u16) -> anyhow::Result<Vec<Vec<String>>> {
            self.seasons
                .get(&season)
                .cloned()
                .ok_or_else(|| anyhow!("season {season} not available"))
        }
    }

    fn game_cells(date: &str, away_ml: &str, home_ml: &str) -> Vec<Vec<String>> {
        let row = |team: &str, open: &str, ml: &str| -> Vec<String> {
            vec![
                date.to_string(),
                "7:00".to_string(),
                "451".to_string(),
                team.to_string(),
                "7".to_string(),
                "10".to_string(),
                "3".to_string(),
                "14".to_string(),
                "34".to_string(),
                open.to_string(),
                open.to_string(),
                ml.to_string(),
                "0".to_string(),
            ]
        };
        vec![
            row("Away", "3", away_ml),
            row("Home", "44", home_ml),
        ]
    }

    fn header_rows() -> Vec<Vec<String>> {
        vec![
            vec!["Date".to_string(), "Time".to_string()],
            vec!["Date".to_string(), "Time".to_string()],
        ]
    }

    #[test]
    fn failed_season_does_not_poison_the_run() {
        let mut sheet = header_rows();
        sheet.extend(game_cells("1011", "-150", "130"));

        let mut seasons = HashMap::new();
        seasons.insert(2015u16, sheet);
        let source = MapSource { seasons };

        let cfg = EngineConfig::default();
        let summary = run_seasons(&cfg, &source, Sport::Nfl, &[2015, 2016]);
        assert_eq!(summary.seasons_total, 2);
        assert_eq!(summary.seasons_succeeded, 1);
        assert_eq!(summary.games, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("season 2016"));
    }

    #[test]
    fn seasons_merge_in_request_order() {
        let mut early = header_rows();
        early.extend(game_cells("1011", "-150", "130"));
        let mut late = header_rows();
        late.extend(game_cells("1012", "-120", "110"));

        let mut seasons = HashMap::new();
        seasons.insert(2014u16, early);
        seasons.insert(2015u16, late);
        let source = MapSource { seasons };

        let cfg = EngineConfig::default();
        let summary = run_seasons(&cfg, &source, Sport::Nfl, &[2014, 2015]);
        assert_eq!(summary.seasons_succeeded, 2);
        let rows = summary.table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "2014");
        assert_eq!(rows[1][0], "2015");
    }
}
