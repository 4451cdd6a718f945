use crate::domain::constants::SPREADSHEET_EXTENSIONS;
use crate::domain::models::RawRow;
use crate::error::DefectError;
use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use chrono::Timelike;
use std::path::Path;

pub fn is_spreadsheet_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Date-formatted cells render as `YYYY-MM-DD`, with the time appended only
/// when it is not midnight. Durations and out-of-range serials keep the raw number.
fn date_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return dt.as_f64().to_string();
    }
    match dt.as_datetime() {
        Some(d) if d.time().num_seconds_from_midnight() == 0 => d.date().to_string(),
        Some(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.as_f64().to_string(),
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::DateTime(dt) => date_text(dt),
        Data::DateTimeIso(iso) => iso.replacen('T', " ", 1),
        other => other.to_string(),
    }
}

/// Pairs the header row with the first data row. Data cells missing from a
/// short row read as empty; rows past the first record are never consulted.
pub fn pair_rows(header: &[Data], record: Option<&[Data]>) -> RawRow {
    let cells = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let value = record
                .and_then(|r| r.get(i))
                .map(cell_text)
                .unwrap_or_default();
            (cell_text(h), value)
        })
        .collect();
    RawRow::new(cells)
}

/// Reads the header row and first record of the first sheet.
pub fn read_first_record(path: &Path) -> anyhow::Result<RawRow> {
    let decode_err = |reason: String| DefectError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| decode_err(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| decode_err("workbook has no sheets".to_string()))?
        .map_err(|e| decode_err(e.to_string()))?;

    let mut rows = range.rows();
    let row = match rows.next() {
        Some(header) => pair_rows(header, rows.next()),
        None => RawRow::default(),
    };
    tracing::info!(
        path = %path.display(),
        columns = row.cells.len(),
        "decoded spreadsheet"
    );
    Ok(row)
}
