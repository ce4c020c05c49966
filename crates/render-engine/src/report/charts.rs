//! Plotly figures for report charts

use insight_core::columns::cell_date;
use insight_core::ChartPlan;
use plotly::common::{Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Histogram, Plot, Scatter};
use shared_types::Dataset;

use crate::errors::RenderError;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the figure for one planned chart
pub fn build_plot(plan: &ChartPlan, dataset: &Dataset) -> Result<Plot, RenderError> {
    let mut plot = Plot::new();

    match plan {
        ChartPlan::Line { x_column, y_column } => {
            let x_name = column_name(dataset, *x_column)?;
            let y_name = column_name(dataset, *y_column)?;

            let mut points: Vec<_> = dataset
                .rows
                .iter()
                .filter_map(|row| {
                    let x = cell_date(&row[*x_column])?;
                    let y = row[*y_column].as_number()?;
                    Some((x, y))
                })
                .collect();
            points.sort_by_key(|(x, _)| *x);

            let (xs, ys): (Vec<String>, Vec<f64>) = points
                .into_iter()
                .map(|(x, y)| (x.format(DATE_FORMAT).to_string(), y))
                .unzip();

            plot.add_trace(Scatter::new(xs, ys).mode(Mode::LinesMarkers).name(y_name));
            plot.set_layout(
                Layout::new()
                    .title(Title::with_text(&plan.title(dataset)))
                    .x_axis(Axis::new().title(Title::with_text(x_name)))
                    .y_axis(Axis::new().title(Title::with_text(y_name))),
            );
        }
        ChartPlan::Histogram { column } => {
            let name = column_name(dataset, *column)?;
            let values: Vec<f64> = dataset.column(*column).filter_map(|c| c.as_number()).collect();

            plot.add_trace(Histogram::new(values).name(name));
            plot.set_layout(
                Layout::new()
                    .title(Title::with_text(&plan.title(dataset)))
                    .x_axis(Axis::new().title(Title::with_text(name)))
                    .y_axis(Axis::new().title(Title::with_text("count"))),
            );
        }
    }

    Ok(plot)
}

fn column_name(dataset: &Dataset, idx: usize) -> Result<&str, RenderError> {
    dataset
        .columns
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| {
            RenderError::Chart(format!(
                "column {} out of range for '{}' ({} columns)",
                idx,
                dataset.name,
                dataset.column_count()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::CellValue;

    fn dataset() -> Dataset {
        Dataset::new(
            "sales.csv",
            vec!["day".into(), "units".into()],
            vec![
                vec![CellValue::Text("2024-01-02".into()), CellValue::Number(5.0)],
                vec![CellValue::Text("2024-01-01".into()), CellValue::Number(3.0)],
                vec![CellValue::Empty, CellValue::Number(9.0)],
            ],
        )
    }

    #[test]
    fn line_chart_is_sorted_by_date() {
        let plot = build_plot(
            &ChartPlan::Line {
                x_column: 0,
                y_column: 1,
            },
            &dataset(),
        )
        .unwrap();
        let json = plot.to_json();
        let first = json.find("2024-01-01").unwrap();
        let second = json.find("2024-01-02").unwrap();
        assert!(first < second);
        assert!(json.contains("units over day"));
    }

    #[test]
    fn histogram_uses_every_number() {
        let plot = build_plot(&ChartPlan::Histogram { column: 1 }, &dataset()).unwrap();
        let json = plot.to_json();
        assert!(json.contains("histogram"));
        assert!(json.contains("Distribution of units"));
    }

    #[test]
    fn out_of_range_column_is_a_chart_error() {
        match build_plot(&ChartPlan::Histogram { column: 7 }, &dataset()) {
            Err(RenderError::Chart(message)) => assert!(message.contains("column 7")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("out-of-range column produced a plot"),
        }
    }
}
