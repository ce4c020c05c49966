//! Column kind inference for tabular uploads

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared_types::{CellValue, Dataset};

/// Inferred kind of a dataset column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Date,
    Text,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Date => "date",
            ColumnKind::Text => "text",
        }
    }
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Parse a date or timestamp written in one of the common spreadsheet forms
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Date value of a cell, parsing text cells when needed
pub fn cell_date(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => parse_date(s),
        _ => None,
    }
}

/// Infer one kind per column
///
/// A column is numeric when every non-empty cell is a number, and a date
/// column when every non-empty cell is a date. Columns with no non-empty
/// cells are text.
pub fn infer_column_kinds(dataset: &Dataset) -> Vec<ColumnKind> {
    (0..dataset.column_count())
        .map(|idx| infer_kind(dataset.column(idx)))
        .collect()
}

fn infer_kind<'a>(cells: impl Iterator<Item = &'a CellValue>) -> ColumnKind {
    let mut seen = false;
    let mut numeric = true;
    let mut date = true;

    for cell in cells.filter(|c| !c.is_empty()) {
        seen = true;
        numeric &= cell.as_number().is_some();
        date &= cell_date(cell).is_some();
        if !numeric && !date {
            return ColumnKind::Text;
        }
    }

    match (seen, numeric, date) {
        (false, _, _) => ColumnKind::Text,
        (true, true, _) => ColumnKind::Numeric,
        (true, false, true) => ColumnKind::Date,
        _ => ColumnKind::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dataset(columns: &[&str], rows: Vec<Vec<CellValue>>) -> Dataset {
        Dataset::new(
            "test",
            columns.iter().map(|c| c.to_string()).collect(),
            rows,
        )
    }

    #[test]
    fn kinds_per_column() {
        let ds = dataset(
            &["when", "amount", "region", "blank"],
            vec![
                vec![
                    CellValue::Text("2024-01-01".into()),
                    CellValue::Number(10.0),
                    CellValue::Text("north".into()),
                    CellValue::Empty,
                ],
                vec![
                    CellValue::Date(parse_date("2024-02-01").unwrap()),
                    CellValue::Empty,
                    CellValue::Text("south".into()),
                    CellValue::Empty,
                ],
            ],
        );
        assert_eq!(
            infer_column_kinds(&ds),
            vec![
                ColumnKind::Date,
                ColumnKind::Numeric,
                ColumnKind::Text,
                ColumnKind::Text
            ]
        );
    }

    #[test]
    fn mixed_numbers_and_text_is_text() {
        let ds = dataset(
            &["x"],
            vec![
                vec![CellValue::Number(1.0)],
                vec![CellValue::Text("n/a".into())],
            ],
        );
        assert_eq!(infer_column_kinds(&ds), vec![ColumnKind::Text]);
    }

    #[test]
    fn date_formats() {
        assert!(parse_date("2024-03-05").is_some());
        assert!(parse_date("2024/03/05").is_some());
        assert!(parse_date("03/05/2024").is_some());
        assert!(parse_date("2024-03-05 10:30:00").is_some());
        assert!(parse_date("2024-03-05T10:30:00").is_some());
        assert!(parse_date("March").is_none());
        assert!(parse_date("2024").is_none());
    }
}
