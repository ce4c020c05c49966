//! Generation pipeline
//!
//! document -> prompt -> completion -> sections -> deck or report.
//! All dataset validation happens before the completion call, so a table
//! that cannot be summarised never costs a model request.

use chrono::Utc;
use completion_client::CompletionService;
use doc_extract::{ExtractedDocument, SourceFormat, TableDocument};
use insight_core::{dataset_digest, describe, plan_charts, split_sections, PromptTemplate};
use render_engine::{build_deck, render_report, DeckOptions, RenderedDeck, ReportInput};
use serde::Serialize;
use shared_types::{InsightText, PromptRequest, SectionSequence};
use tracing::{debug, info};

use crate::error::ServerError;

/// Which (input, output) combination a request runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    PdfDeck,
    CsvDeck,
    SheetDeck,
    CsvReport,
    SheetReport,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::PdfDeck => "pdf-deck",
            Variant::CsvDeck => "csv-deck",
            Variant::SheetDeck => "sheet-deck",
            Variant::CsvReport => "csv-report",
            Variant::SheetReport => "sheet-report",
        }
    }
}

fn is_csv(table: &TableDocument) -> bool {
    matches!(
        SourceFormat::from_filename(&table.filename),
        Ok(SourceFormat::Csv)
    )
}

#[derive(Debug)]
pub struct DeckOutcome {
    pub variant: Variant,
    pub insights: InsightText,
    pub sections: SectionSequence,
    pub deck: RenderedDeck,
}

#[derive(Debug)]
pub struct ReportOutcome {
    pub variant: Variant,
    pub insights: InsightText,
    pub sections: Option<SectionSequence>,
    pub html: String,
    pub chart_count: usize,
}

/// Build the deck prompt for a document, validating tables first
fn deck_prompt(document: &ExtractedDocument) -> Result<(Variant, PromptRequest), ServerError> {
    match document {
        ExtractedDocument::Text(text) => Ok((
            Variant::PdfDeck,
            PromptTemplate::PresentationFromText.build(&text.text),
        )),
        ExtractedDocument::Table(table) => {
            let summary = describe(&table.dataset)?;
            let variant = if is_csv(table) {
                Variant::CsvDeck
            } else {
                Variant::SheetDeck
            };
            let digest = dataset_digest(&table.dataset, &summary);
            Ok((variant, PromptTemplate::PresentationFromData.build(&digest)))
        }
    }
}

pub async fn generate_deck(
    service: &dyn CompletionService,
    document: &ExtractedDocument,
    options: &DeckOptions,
) -> Result<DeckOutcome, ServerError> {
    let (variant, request) = deck_prompt(document)?;
    info!(
        "Generating {} with {} ({} prompt chars)",
        variant.as_str(),
        service.model(),
        request.prompt.len()
    );

    let insights = service.complete(&request).await?;
    let sections = split_sections(insights.as_str());
    debug!(
        "Split {} chars of insights into {} section(s)",
        insights.len(),
        sections.len()
    );

    let deck = build_deck(sections.clone(), options)?;
    info!("{} finished: {} slides", variant.as_str(), deck.slide_count);

    Ok(DeckOutcome {
        variant,
        insights,
        sections,
        deck,
    })
}

pub async fn generate_report(
    service: &dyn CompletionService,
    document: &ExtractedDocument,
    sectioned: bool,
) -> Result<ReportOutcome, ServerError> {
    let table = match document {
        ExtractedDocument::Table(table) => table,
        ExtractedDocument::Text(_) => {
            return Err(ServerError::InvalidRequest(
                "HTML reports need a CSV or spreadsheet upload".to_string(),
            ))
        }
    };

    let summary = describe(&table.dataset)?;
    let variant = if is_csv(table) {
        Variant::CsvReport
    } else {
        Variant::SheetReport
    };
    let request = PromptTemplate::ReportFromData.build(&dataset_digest(&table.dataset, &summary));
    info!(
        "Generating {} with {} ({} prompt chars)",
        variant.as_str(),
        service.model(),
        request.prompt.len()
    );

    let insights = service.complete(&request).await?;
    let sections = sectioned.then(|| split_sections(insights.as_str()));
    let charts = plan_charts(&table.dataset);

    let html = render_report(&ReportInput {
        title: "Data Analysis Report".to_string(),
        dataset: &table.dataset,
        summary: &summary,
        insights: &insights,
        sections: sections.as_ref(),
        charts: &charts,
        generated_at: Utc::now(),
    })?;
    info!(
        "{} finished: {} chart(s), {} bytes",
        variant.as_str(),
        charts.len(),
        html.len()
    );

    Ok(ReportOutcome {
        variant,
        insights,
        sections,
        html,
        chart_count: charts.len(),
    })
}
