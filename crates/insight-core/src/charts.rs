//! Chart selection for reports
//!
//! Simple conditional glue: a dataset with a date column gets line charts
//! over time, anything else gets histograms.

use serde::{Deserialize, Serialize};
use shared_types::Dataset;

use crate::columns::{infer_column_kinds, ColumnKind};

/// Upper bound on charts embedded in one report
pub const MAX_CHARTS: usize = 3;

/// One chart to draw, by column index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartPlan {
    /// `y_column` plotted against the date column `x_column`
    Line { x_column: usize, y_column: usize },
    /// Distribution of one numeric column
    Histogram { column: usize },
}

impl ChartPlan {
    pub fn title(&self, dataset: &Dataset) -> String {
        match self {
            ChartPlan::Line { x_column, y_column } => format!(
                "{} over {}",
                dataset.columns[*y_column], dataset.columns[*x_column]
            ),
            ChartPlan::Histogram { column } => {
                format!("Distribution of {}", dataset.columns[*column])
            }
        }
    }
}

/// Choose up to [`MAX_CHARTS`] charts for a dataset
pub fn plan_charts(dataset: &Dataset) -> Vec<ChartPlan> {
    let kinds = infer_column_kinds(dataset);
    let date_column = kinds.iter().position(|k| *k == ColumnKind::Date);
    let numeric = kinds
        .iter()
        .enumerate()
        .filter(|(_, k)| **k == ColumnKind::Numeric)
        .map(|(idx, _)| idx)
        .take(MAX_CHARTS);

    match date_column {
        Some(x_column) => numeric
            .map(|y_column| ChartPlan::Line { x_column, y_column })
            .collect(),
        None => numeric.map(|column| ChartPlan::Histogram { column }).collect(),
    }
}
