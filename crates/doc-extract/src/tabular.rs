//! CSV and spreadsheet parsing
//!
//! The first row is the header. Spreadsheets contribute their first
//! worksheet only.

use std::io::{Cursor, Read, Seek};

use calamine::{Data, DataType, Reader};
use shared_types::{CellValue, Dataset};
use tracing::debug;

use crate::error::ExtractError;
use crate::TableDocument;

/// Parse a delimited-text upload
pub fn extract_csv(filename: &str, bytes: &[u8]) -> Result<TableDocument, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(bytes));

    let headers = reader
        .headers()
        .map_err(|e| ExtractError::corrupted(filename, e))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect::<Vec<_>>();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ExtractError::EmptyTable(filename.to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::corrupted(filename, e))?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(CellValue::from_field).collect());
    }

    let dataset = Dataset::new(filename, name_columns(headers), rows);
    debug!(
        "Parsed {}: {} rows x {} columns",
        filename,
        dataset.row_count(),
        dataset.column_count()
    );

    Ok(TableDocument {
        filename: filename.to_string(),
        dataset,
    })
}

/// Parse the first worksheet of an XLS, XLSX or ODS upload
pub fn extract_spreadsheet(filename: &str, bytes: &[u8]) -> Result<TableDocument, ExtractError> {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cursor = Cursor::new(bytes);
    let dataset = match ext.as_str() {
        "xlsx" => first_sheet(
            calamine::Xlsx::new(cursor).map_err(|e| ExtractError::corrupted(filename, e))?,
            filename,
        )?,
        "xls" => first_sheet(
            calamine::Xls::new(cursor).map_err(|e| ExtractError::corrupted(filename, e))?,
            filename,
        )?,
        "ods" => first_sheet(
            calamine::Ods::new(cursor).map_err(|e| ExtractError::corrupted(filename, e))?,
            filename,
        )?,
        _ => return Err(ExtractError::UnsupportedFormat(filename.to_string())),
    };

    debug!(
        "Parsed {}: {} rows x {} columns",
        filename,
        dataset.row_count(),
        dataset.column_count()
    );

    Ok(TableDocument {
        filename: filename.to_string(),
        dataset,
    })
}

fn first_sheet<RS, R>(mut workbook: R, filename: &str) -> Result<Dataset, ExtractError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ExtractError::EmptyTable(filename.to_string()))?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| ExtractError::corrupted(filename, e))?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .ok_or_else(|| ExtractError::EmptyTable(filename.to_string()))?
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>();

    let data = rows
        .filter(|row| row.iter().any(|c| !c.is_empty()))
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(Dataset::new(filename, name_columns(headers), data))
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) if f.is_finite() => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::from_field(s),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(cell.to_string())),
        other => CellValue::Text(other.to_string()),
    }
}

/// Fill in blank header names the way pandas does
fn name_columns(headers: Vec<String>) -> Vec<String> {
    headers
        .into_iter()
        .enumerate()
        .map(|(idx, h)| {
            let h = h.trim().to_string();
            if h.is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                h
            }
        })
        .collect()
}
