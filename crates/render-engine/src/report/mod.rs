//! HTML report rendering
//!
//! A report is a standalone page: header, generation timestamp, the model's
//! insights, any planned charts and the numeric summary table. Charts are
//! plotly figures loaded from the CDN.

mod charts;

use chrono::{DateTime, Utc};
use insight_core::summary::fmt_num;
use insight_core::{ChartPlan, NumericSummary};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use shared_types::{Dataset, InsightText, SectionSequence};
use tracing::debug;

use crate::errors::RenderError;

pub use charts::build_plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

const STYLE: &str = "
body { font-family: Helvetica, Arial, sans-serif; margin: 0 auto; max-width: 1100px; padding: 24px; color: #051c2c; }
header { border-bottom: 3px solid #2251ff; margin-bottom: 24px; }
header h1 { margin: 0 0 8px 0; }
.timestamp { color: #555; margin: 0 0 12px 0; }
.insights { background: #f4f6fb; border-radius: 8px; padding: 16px 20px; }
.insights pre { white-space: pre-wrap; font-family: inherit; margin: 0; }
.insights .section-body { white-space: pre-wrap; }
.chart { margin: 24px 0; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #d0d5e0; padding: 6px 10px; text-align: right; }
th:first-child, td:first-child { text-align: left; }
thead { background: #e7e6e6; }
";

/// Everything a report page shows
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub title: String,
    pub dataset: &'a Dataset,
    pub summary: &'a NumericSummary,
    pub insights: &'a InsightText,
    /// Rendered instead of the raw text when present
    pub sections: Option<&'a SectionSequence>,
    pub charts: &'a [ChartPlan],
    pub generated_at: DateTime<Utc>,
}

/// Render a report to a complete HTML document
pub fn render_report(report: &ReportInput<'_>) -> Result<String, RenderError> {
    let mut chart_fragments = Vec::with_capacity(report.charts.len());
    for (idx, plan) in report.charts.iter().enumerate() {
        let plot = build_plot(plan, report.dataset)?;
        let div_id = format!("chart-{}", idx + 1);
        chart_fragments.push(plot.to_inline_html(Some(div_id.as_str())));
    }

    let page = page(report, &chart_fragments);
    let html = page.into_string();
    debug!(
        "Rendered report '{}': {} chart(s), {} bytes",
        report.dataset.name,
        chart_fragments.len(),
        html.len()
    );
    Ok(html)
}

fn page(report: &ReportInput<'_>, chart_fragments: &[String]) -> Markup {
    let generated = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (report.title) }
                script src=(PLOTLY_CDN) {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { (report.title) }
                    p class="timestamp" { "Generated on: " (generated) }
                    p { "Source: " (report.dataset.name) " (" (report.dataset.row_count()) " rows, "
                        (report.dataset.column_count()) " columns)" }
                }

                h2 { "AI Insights" }
                div class="insights" {
                    (insights(report.insights, report.sections))
                }

                @if !chart_fragments.is_empty() {
                    h2 { "Charts" }
                    @for fragment in chart_fragments {
                        div class="chart" { (PreEscaped(fragment)) }
                    }
                }

                h2 { "Summary Statistics" }
                (summary_table(report.summary))
            }
        }
    }
}

fn insights(text: &InsightText, sections: Option<&SectionSequence>) -> Markup {
    match sections {
        Some(sections) => html! {
            @for section in sections {
                h3 { (section.title()) }
                @if !section.body().is_empty() {
                    div class="section-body" { (section.body()) }
                }
            }
        },
        None => html! {
            pre { (text.as_str()) }
        },
    }
}

fn summary_table(summary: &NumericSummary) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "column" }
                    th { "count" }
                    th { "mean" }
                    th { "std" }
                    th { "min" }
                    th { "25%" }
                    th { "50%" }
                    th { "75%" }
                    th { "max" }
                }
            }
            tbody {
                @for c in &summary.columns {
                    tr {
                        td { (c.name) }
                        td { (c.count) }
                        td { (fmt_num(c.mean)) }
                        td { (c.std.map(fmt_num).unwrap_or_else(|| "-".to_string())) }
                        td { (fmt_num(c.min)) }
                        td { (fmt_num(c.q25)) }
                        td { (fmt_num(c.median)) }
                        td { (fmt_num(c.q75)) }
                        td { (fmt_num(c.max)) }
                    }
                }
            }
        }
    }
}
