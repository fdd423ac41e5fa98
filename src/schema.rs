use serde::Serialize;

use crate::derive::SpreadLines;
use crate::pairing::RowPair;
use crate::rows::{Hand, RawRow, TotalsQuotes};
use crate::sport::{SheetFamily, Sport};
use crate::translate::Translator;

// Basketball shares the football sheet shape, so both project into the
// football record.

pub const FOOTBALL_COLUMNS: &[&str] = &[
    "season",
    "date",
    "home_team",
    "away_team",
    "home_1stQtr",
    "away_1stQtr",
    "home_2ndQtr",
    "away_2ndQtr",
    "home_3rdQtr",
    "away_3rdQtr",
    "home_4thQtr",
    "away_4thQtr",
    "home_final",
    "away_final",
    "ML_H_cl_odds",
    "ML_A_cl_odds",
    "home_open_spread",
    "away_open_spread",
    "S_H_cl_line",
    "S_A_cl_line",
    "home_2H_spread",
    "away_2H_spread",
    "2H_total",
    "OU_op_line",
    "OU_cl_line",
];

pub const HOCKEY_COLUMNS: &[&str] = &[
    "season",
    "date",
    "home_team",
    "away_team",
    "home_1stPeriod",
    "away_1stPeriod",
    "home_2ndPeriod",
    "away_2ndPeriod",
    "home_3rdPeriod",
    "away_3rdPeriod",
    "home_final",
    "away_final",
    "ML_H_op_odds",
    "ML_A_op_odds",
    "ML_H_cl_odds",
    "ML_A_cl_odds",
    "S_H_cl_line",
    "S_A_cl_line",
    "S_H_cl_odds",
    "S_A_cl_odds",
    "OU_op_line",
    "OU_op_odds",
    "OU_cl_line",
    "OU_cl_odds",
];

pub const BASEBALL_COLUMNS: &[&str] = &[
    "season", "date", "a_name", "h_name", "a_final", "h_final", "a_SP", "a_thr", "h_SP", "h_thr",
    "a_i1", "a_i2", "a_i3", "a_i4", "a_i5", "a_i6", "a_i7", "a_i8", "a_i9", "h_i1", "h_i2",
    "h_i3", "h_i4", "h_i5", "h_i6", "h_i7", "h_i8", "h_i9", "a_ML_op", "h_ML_op", "a_ML_cl",
    "h_ML_cl", "a_S_cl_line", "a_S_cl_odds", "h_S_cl_line", "h_S_cl_odds", "OU_op_line",
    "O_op_odds", "U_op_odds", "OU_cl_line", "O_cl_odds", "U_cl_odds",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootballGame {
    pub season: u16,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(rename = "home_1stQtr")]
    pub home_q1: String,
    #[serde(rename = "away_1stQtr")]
    pub away_q1: String,
    #[serde(rename = "home_2ndQtr")]
    pub home_q2: String,
    #[serde(rename = "away_2ndQtr")]
    pub away_q2: String,
    #[serde(rename = "home_3rdQtr")]
    pub home_q3: String,
    #[serde(rename = "away_3rdQtr")]
    pub away_q3: String,
    #[serde(rename = "home_4thQtr")]
    pub home_q4: String,
    #[serde(rename = "away_4thQtr")]
    pub away_q4: String,
    pub home_final: String,
    pub away_final: String,
    #[serde(rename = "ML_H_cl_odds")]
    pub home_close_ml: i32,
    #[serde(rename = "ML_A_cl_odds")]
    pub away_close_ml: i32,
    pub home_open_spread: f64,
    pub away_open_spread: f64,
    #[serde(rename = "S_H_cl_line")]
    pub home_close_spread: f64,
    #[serde(rename = "S_A_cl_line")]
    pub away_close_spread: f64,
    #[serde(rename = "home_2H_spread")]
    pub home_second_half_spread: f64,
    #[serde(rename = "away_2H_spread")]
    pub away_second_half_spread: f64,
    #[serde(rename = "2H_total")]
    pub second_half_total: f64,
    #[serde(rename = "OU_op_line")]
    pub total_open: f64,
    #[serde(rename = "OU_cl_line")]
    pub total_close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HockeyGame {
    pub season: u16,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(rename = "home_1stPeriod")]
    pub home_p1: String,
    #[serde(rename = "away_1stPeriod")]
    pub away_p1: String,
    #[serde(rename = "home_2ndPeriod")]
    pub home_p2: String,
    #[serde(rename = "away_2ndPeriod")]
    pub away_p2: String,
    #[serde(rename = "home_3rdPeriod")]
    pub home_p3: String,
    #[serde(rename = "away_3rdPeriod")]
    pub away_p3: String,
    pub home_final: String,
    pub away_final: String,
    #[serde(rename = "ML_H_op_odds")]
    pub home_open_ml: i32,
    #[serde(rename = "ML_A_op_odds")]
    pub away_open_ml: i32,
    #[serde(rename = "ML_H_cl_odds")]
    pub home_close_ml: i32,
    #[serde(rename = "ML_A_cl_odds")]
    pub away_close_ml: i32,
    #[serde(rename = "S_H_cl_line")]
    pub home_close_spread: f64,
    #[serde(rename = "S_A_cl_line")]
    pub away_close_spread: f64,
    #[serde(rename = "S_H_cl_odds")]
    pub home_close_spread_odds: f64,
    #[serde(rename = "S_A_cl_odds")]
    pub away_close_spread_odds: f64,
    #[serde(rename = "OU_op_line")]
    pub total_open: f64,
    #[serde(rename = "OU_op_odds")]
    pub total_open_odds: f64,
    #[serde(rename = "OU_cl_line")]
    pub total_close: f64,
    #[serde(rename = "OU_cl_odds")]
    pub total_close_odds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseballGame {
    pub season: u16,
    pub date: String,
    #[serde(rename = "a_name")]
    pub away_team: String,
    #[serde(rename = "h_name")]
    pub home_team: String,
    #[serde(rename = "a_final")]
    pub away_final: String,
    #[serde(rename = "h_final")]
    pub home_final: String,
    #[serde(rename = "a_SP")]
    pub away_pitcher: String,
    #[serde(rename = "a_thr")]
    pub away_throws: String,
    #[serde(rename = "h_SP")]
    pub home_pitcher: String,
    #[serde(rename = "h_thr")]
    pub home_throws: String,
    #[serde(rename = "a_i1")]
    pub away_i1: String,
    #[serde(rename = "a_i2")]
    pub away_i2: String,
    #[serde(rename = "a_i3")]
    pub away_i3: String,
    #[serde(rename = "a_i4")]
    pub away_i4: String,
    #[serde(rename = "a_i5")]
    pub away_i5: String,
    #[serde(rename = "a_i6")]
    pub away_i6: String,
    #[serde(rename = "a_i7")]
    pub away_i7: String,
    #[serde(rename = "a_i8")]
    pub away_i8: String,
    #[serde(rename = "a_i9")]
    pub away_i9: String,
    #[serde(rename = "h_i1")]
    pub home_i1: String,
    #[serde(rename = "h_i2")]
    pub home_i2: String,
    #[serde(rename = "h_i3")]
    pub home_i3: String,
    #[serde(rename = "h_i4")]
    pub home_i4: String,
    #[serde(rename = "h_i5")]
    pub home_i5: String,
    #[serde(rename = "h_i6")]
    pub home_i6: String,
    #[serde(rename = "h_i7")]
    pub home_i7: String,
    #[serde(rename = "h_i8")]
    pub home_i8: String,
    #[serde(rename = "h_i9")]
    pub home_i9: String,
    #[serde(rename = "a_ML_op")]
    pub away_open_ml: i32,
    #[serde(rename = "h_ML_op")]
    pub home_open_ml: i32,
    #[serde(rename = "a_ML_cl")]
    pub away_close_ml: i32,
    #[serde(rename = "h_ML_cl")]
    pub home_close_ml: i32,
    #[serde(rename = "a_S_cl_line")]
    pub away_close_spread: f64,
    #[serde(rename = "a_S_cl_odds")]
    pub away_close_spread_odds: f64,
    #[serde(rename = "h_S_cl_line")]
    pub home_close_spread: f64,
    #[serde(rename = "h_S_cl_odds")]
    pub home_close_spread_odds: f64,
    #[serde(rename = "OU_op_line")]
    pub total_open: f64,
    #[serde(rename = "O_op_odds")]
    pub over_open_odds: f64,
    #[serde(rename = "U_op_odds")]
    pub under_open_odds: f64,
    #[serde(rename = "OU_cl_line")]
    pub total_close: f64,
    #[serde(rename = "O_cl_odds")]
    pub over_close_odds: f64,
    #[serde(rename = "U_cl_odds")]
    pub under_close_odds: f64,
}

/// One normalized output table, rows in sheet order.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GameTable {
    Football(Vec<FootballGame>),
    Hockey(Vec<HockeyGame>),
    Baseball(Vec<BaseballGame>),
}

impl GameTable {
    pub fn for_sport(sport: Sport) -> Self {
        match (sport.family(), sport) {
            (SheetFamily::Spread, _) => GameTable::Football(Vec::new()),
            (SheetFamily::Totals, Sport::Mlb) => GameTable::Baseball(Vec::new()),
            (SheetFamily::Totals, _) => GameTable::Hockey(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            GameTable::Football(games) => games.len(),
            GameTable::Hockey(games) => games.len(),
            GameTable::Baseball(games) => games.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            GameTable::Football(_) => FOOTBALL_COLUMNS,
            GameTable::Hockey(_) => HOCKEY_COLUMNS,
            GameTable::Baseball(_) => BASEBALL_COLUMNS,
        }
    }

    /// Cell values in column order, one vector per game.
    pub fn rows(&self) -> Vec<Vec<String>> {
        match self {
            GameTable::Football(games) => games.iter().map(FootballGame::row).collect(),
            GameTable::Hockey(games) => games.iter().map(HockeyGame::row).collect(),
            GameTable::Baseball(games) => games.iter().map(BaseballGame::row).collect(),
        }
    }

    /// Append another season's table of the same family. Tables of different
    /// families never meet outside a programming error.
    pub fn append(&mut self, other: GameTable) {
        match (self, other) {
            (GameTable::Football(into), GameTable::Football(mut from)) => into.append(&mut from),
            (GameTable::Hockey(into), GameTable::Hockey(mut from)) => into.append(&mut from),
            (GameTable::Baseball(into), GameTable::Baseball(mut from)) => into.append(&mut from),
            _ => unreachable!("appending tables of different sheet families"),
        }
    }
}

pub fn project_football(
    sport: Sport,
    pair: &RowPair,
    lines: &SpreadLines,
    tr: &Translator,
) -> FootballGame {
    let away = &pair.away;
    let home = &pair.home;
    FootballGame {
        season: away.season,
        date: away.date.format("%Y-%m-%d").to_string(),
        home_team: tr.canonical(sport, &home.team),
        away_team: tr.canonical(sport, &away.team),
        home_q1: home.segments[0].clone(),
        away_q1: away.segments[0].clone(),
        home_q2: home.segments[1].clone(),
        away_q2: away.segments[1].clone(),
        home_q3: home.segments[2].clone(),
        away_q3: away.segments[2].clone(),
        home_q4: home.segments[3].clone(),
        away_q4: away.segments[3].clone(),
        home_final: home.final_score.clone(),
        away_final: away.final_score.clone(),
        home_close_ml: lines.home_close_ml,
        away_close_ml: lines.away_close_ml,
        home_open_spread: lines.home_open_spread,
        away_open_spread: lines.away_open_spread,
        home_close_spread: lines.home_close_spread,
        away_close_spread: lines.away_close_spread,
        home_second_half_spread: lines.home_second_half_spread,
        away_second_half_spread: lines.away_second_half_spread,
        second_half_total: lines.second_half_total,
        total_open: lines.total_open,
        total_close: lines.total_close,
    }
}

pub fn project_hockey(
    sport: Sport,
    pair: &RowPair,
    away: &TotalsQuotes,
    home: &TotalsQuotes,
    tr: &Translator,
) -> HockeyGame {
    HockeyGame {
        season: pair.away.season,
        date: pair.away.date.format("%Y-%m-%d").to_string(),
        home_team: tr.canonical(sport, &pair.home.team),
        away_team: tr.canonical(sport, &pair.away.team),
        home_p1: pair.home.segments[0].clone(),
        away_p1: pair.away.segments[0].clone(),
        home_p2: pair.home.segments[1].clone(),
        away_p2: pair.away.segments[1].clone(),
        home_p3: pair.home.segments[2].clone(),
        away_p3: pair.away.segments[2].clone(),
        home_final: pair.home.final_score.clone(),
        away_final: pair.away.final_score.clone(),
        home_open_ml: home.open_ml as i32,
        away_open_ml: away.open_ml as i32,
        home_close_ml: home.close_ml as i32,
        away_close_ml: away.close_ml as i32,
        home_close_spread: home.spread_close,
        away_close_spread: away.spread_close,
        home_close_spread_odds: home.spread_close_odds,
        away_close_spread_odds: away.spread_close_odds,
        // The archive quotes the game total on the home line.
        total_open: home.total_open,
        total_open_odds: home.total_open_odds,
        total_close: home.total_close,
        total_close_odds: home.total_close_odds,
    }
}

pub fn project_baseball(
    sport: Sport,
    pair: &RowPair,
    away: &TotalsQuotes,
    home: &TotalsQuotes,
    tr: &Translator,
) -> BaseballGame {
    let (away_pitcher, away_throws) = pitcher_fields(&pair.away);
    let (home_pitcher, home_throws) = pitcher_fields(&pair.home);
    let a = &pair.away.segments;
    let h = &pair.home.segments;
    BaseballGame {
        season: pair.away.season,
        date: pair.away.date.format("%Y-%m-%d").to_string(),
        away_team: tr.canonical(sport, &pair.away.team),
        home_team: tr.canonical(sport, &pair.home.team),
        away_final: pair.away.final_score.clone(),
        home_final: pair.home.final_score.clone(),
        away_pitcher,
        away_throws,
        home_pitcher,
        home_throws,
        away_i1: a[0].clone(),
        away_i2: a[1].clone(),
        away_i3: a[2].clone(),
        away_i4: a[3].clone(),
        away_i5: a[4].clone(),
        away_i6: a[5].clone(),
        away_i7: a[6].clone(),
        away_i8: a[7].clone(),
        away_i9: a[8].clone(),
        home_i1: h[0].clone(),
        home_i2: h[1].clone(),
        home_i3: h[2].clone(),
        home_i4: h[3].clone(),
        home_i5: h[4].clone(),
        home_i6: h[5].clone(),
        home_i7: h[6].clone(),
        home_i8: h[7].clone(),
        home_i9: h[8].clone(),
        away_open_ml: away.open_ml as i32,
        home_open_ml: home.open_ml as i32,
        away_close_ml: away.close_ml as i32,
        home_close_ml: home.close_ml as i32,
        away_close_spread: away.spread_close,
        away_close_spread_odds: away.spread_close_odds,
        home_close_spread: home.spread_close,
        home_close_spread_odds: home.spread_close_odds,
        // Over odds ride the away line, under odds the home line.
        total_open: away.total_open,
        over_open_odds: away.total_open_odds,
        under_open_odds: home.total_open_odds,
        total_close: away.total_close,
        over_close_odds: away.total_close_odds,
        under_close_odds: home.total_close_odds,
    }
}

fn pitcher_fields(row: &RawRow) -> (String, String) {
    match &row.pitcher {
        Some(p) => (
            p.name.clone(),
            p.throws.map(Hand::code).unwrap_or("").to_string(),
        ),
        None => (String::new(), String::new()),
    }
}

impl FootballGame {
    pub fn row(&self) -> Vec<String> {
        vec![
            self.season.to_string(),
            self.date.clone(),
            self.home_team.clone(),
            self.away_team.clone(),
            self.home_q1.clone(),
            self.away_q1.clone(),
            self.home_q2.clone(),
            self.away_q2.clone(),
            self.home_q3.clone(),
            self.away_q3.clone(),
            self.home_q4.clone(),
            self.away_q4.clone(),
            self.home_final.clone(),
            self.away_final.clone(),
            self.home_close_ml.to_string(),
            self.away_close_ml.to_string(),
            self.home_open_spread.to_string(),
            self.away_open_spread.to_string(),
            self.home_close_spread.to_string(),
            self.away_close_spread.to_string(),
            self.home_second_half_spread.to_string(),
            self.away_second_half_spread.to_string(),
            self.second_half_total.to_string(),
            self.total_open.to_string(),
            self.total_close.to_string(),
        ]
    }
}

impl HockeyGame {
    pub fn row(&self) -> Vec<String> {
        vec![
            self.season.to_string(),
            self.date.clone(),
            self.home_team.clone(),
            self.away_team.clone(),
            self.home_p1.clone(),
            self.away_p1.clone(),
            self.home_p2.clone(),
            self.away_p2.clone(),
            self.home_p3.clone(),
            self.away_p3.clone(),
            self.home_final.clone(),
            self.away_final.clone(),
            self.home_open_ml.to_string(),
            self.away_open_ml.to_string(),
            self.home_close_ml.to_string(),
            self.away_close_ml.to_string(),
            self.home_close_spread.to_string(),
            self.away_close_spread.to_string(),
            self.home_close_spread_odds.to_string(),
            self.away_close_spread_odds.to_string(),
            self.total_open.to_string(),
            self.total_open_odds.to_string(),
            self.total_close.to_string(),
            self.total_close_odds.to_string(),
        ]
    }
}

impl BaseballGame {
    pub fn row(&self) -> Vec<String> {
        vec![
            self.season.to_string(),
            self.date.clone(),
            self.away_team.clone(),
            self.home_team.clone(),
            self.away_final.clone(),
            self.home_final.clone(),
            self.away_pitcher.clone(),
            self.away_throws.clone(),
            self.home_pitcher.clone(),
            self.home_throws.clone(),
            self.away_i1.clone(),
            self.away_i2.clone(),
            self.away_i3.clone(),
            self.away_i4.clone(),
            self.away_i5.clone(),
            self.away_i6.clone(),
            self.away_i7.clone(),
            self.away_i8.clone(),
            self.away_i9.clone(),
            self.home_i1.clone(),
            self.home_i2.clone(),
            self.home_i3.clone(),
            self.home_i4.clone(),
            self.home_i5.clone(),
            self.home_i6.clone(),
            self.home_i7.clone(),
            self.home_i8.clone(),
            self.home_i9.clone(),
            self.away_open_ml.to_string(),
            self.home_open_ml.to_string(),
            self.away_close_ml.to_string(),
            self.home_close_ml.to_string(),
            self.away_close_spread.to_string(),
            self.away_close_spread_odds.to_string(),
            self.home_close_spread.to_string(),
            self.home_close_spread_odds.to_string(),
            self.total_open.to_string(),
            self.over_open_odds.to_string(),
            self.under_open_odds.to_string(),
            self.total_close.to_string(),
            self.over_close_odds.to_string(),
            self.under_close_odds.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names_match_columns() {
        let game = FootballGame {
            season: 2015,
            date: "2015-10-11".to_string(),
            home_team: "B".to_string(),
            away_team: "A".to_string(),
            home_q1: "0".to_string(),
            away_q1: "0".to_string(),
            home_q2: "0".to_string(),
            away_q2: "0".to_string(),
            home_q3: "0".to_string(),
            away_q3: "0".to_string(),
            home_q4: "0".to_string(),
            away_q4: "0".to_string(),
            home_final: "0".to_string(),
            away_final: "0".to_string(),
            home_close_ml: 0,
            away_close_ml: 0,
            home_open_spread: 0.0,
            away_open_spread: 0.0,
            home_close_spread: 0.0,
            away_close_spread: 0.0,
            home_second_half_spread: 0.0,
            away_second_half_spread: 0.0,
            second_half_total: 0.0,
            total_open: 0.0,
            total_close: 0.0,
        };
        assert_eq!(game.row().len(), FOOTBALL_COLUMNS.len());

        let json = serde_json::to_value(&game).unwrap();
        let object = json.as_object().unwrap();
        for column in FOOTBALL_COLUMNS {
            assert!(object.contains_key(*column), "missing {column}");
        }
        assert_eq!(object.len(), FOOTBALL_COLUMNS.len());
    }

    #[test]
    fn table_shapes_line_up() {
        for sport in Sport::ALL {
            let table = GameTable::for_sport(sport);
            assert!(table.is_empty());
            assert!(!table.columns().is_empty());
        }
        assert_eq!(
            GameTable::for_sport(Sport::Nba).columns(),
            FOOTBALL_COLUMNS
        );
        assert_eq!(GameTable::for_sport(Sport::Nhl).columns(), HOCKEY_COLUMNS);
        assert_eq!(GameTable::for_sport(Sport::Mlb).columns(), BASEBALL_COLUMNS);
    }
}
