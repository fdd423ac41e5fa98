use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::schema::GameTable;

/// Write a normalized table to a spreadsheet: one worksheet, header row
/// first, games in sheet order.
pub fn export_xlsx(path: &Path, sheet_name: &str, table: &GameTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .with_context(|| format!("set worksheet name {sheet_name:?}"))?;

    let mut rows = vec![
        table
            .columns()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>(),
    ];
    rows.extend(table.rows());
    write_rows(worksheet, &rows)?;

    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;
    Ok(())
}

/// Dump a normalized table as a JSON array of per-game objects keyed by the
/// schema column names.
pub fn export_json(path: &Path, table: &GameTable) -> Result<()> {
    let json = serde_json::to_string_pretty(table).context("serialize table")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
