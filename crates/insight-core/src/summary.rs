//! Numeric summary statistics
//!
//! Produces the per-column count / mean / std / quartile table shown in
//! reports and fed to the model as part of the prompt.

use serde::{Deserialize, Serialize};
use shared_types::Dataset;

use crate::columns::{infer_column_kinds, ColumnKind};
use crate::error::DatasetError;

/// Statistics for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Statistics for every numeric column of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub row_count: usize,
    pub columns: Vec<ColumnSummary>,
}

/// Summarise the numeric columns of a dataset
///
/// Fails when the dataset has no rows or no numeric column; that is the
/// validation gate in front of report generation.
pub fn describe(dataset: &Dataset) -> Result<NumericSummary, DatasetError> {
    if dataset.row_count() == 0 {
        return Err(DatasetError::Empty(dataset.name.clone()));
    }

    let columns: Vec<ColumnSummary> = infer_column_kinds(dataset)
        .into_iter()
        .enumerate()
        .filter(|(_, kind)| *kind == ColumnKind::Numeric)
        .filter_map(|(idx, _)| {
            let values: Vec<f64> = dataset.column(idx).filter_map(|c| c.as_number()).collect();
            summarize_column(&dataset.columns[idx], values)
        })
        .collect();

    if columns.is_empty() {
        return Err(DatasetError::NoNumericColumns(dataset.name.clone()));
    }

    Ok(NumericSummary {
        row_count: dataset.row_count(),
        columns,
    })
}

fn summarize_column(name: &str, mut values: Vec<f64>) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    });

    Some(ColumnSummary {
        name: name.to_string(),
        count,
        mean,
        std,
        min: values[0],
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values[count - 1],
    })
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl NumericSummary {
    /// Plain-text table, one line per column
    pub fn to_text_table(&self) -> String {
        let mut out = String::from("column | count | mean | std | min | 25% | 50% | 75% | max\n");
        for c in &self.columns {
            let std = c.std.map(fmt_num).unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "{} | {} | {} | {} | {} | {} | {} | {} | {}\n",
                c.name,
                c.count,
                fmt_num(c.mean),
                std,
                fmt_num(c.min),
                fmt_num(c.q25),
                fmt_num(c.median),
                fmt_num(c.q75),
                fmt_num(c.max),
            ));
        }
        out
    }
}

/// Format a statistic with at most two decimals
pub fn fmt_num(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
