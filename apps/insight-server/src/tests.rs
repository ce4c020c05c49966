//! Tests for the insight server
//!
//! Test categories:
//! - Pipeline behaviour against a scripted completion service
//! - HTTP endpoints through axum-test
//! - Property tests tying the splitter to the rendered deck

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use completion_client::{CompletionError, CompletionService};
use shared_types::{InsightText, PromptRequest};

/// Completion backend that answers every prompt with a fixed reply
struct ScriptedCompletion {
    reply: Result<String, u16>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<PromptRequest>>,
}

impl ScriptedCompletion {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_prompt(&self) -> Option<PromptRequest> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(&self, request: &PromptRequest) -> Result<InsightText, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(InsightText::new(text.clone())),
            Err(401) => Err(CompletionError::Authentication("invalid x-api-key".into())),
            Err(status) => Err(CompletionError::Api {
                status: *status,
                message: "upstream failure".into(),
            }),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

const FOUR_SECTIONS: &str = "1. Executive Summary\n- Revenue grew 12%\n- Costs flat\n\n\
2. Main Findings\n- North region leads\n\n\
3. Recommendations\n- Expand north\n\n\
4. Next Steps\n- Hire two reps";

/// Build a PDF with one text line per page
fn create_text_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::{content::Content, content::Operation, dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for line in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Build a one-sheet workbook with a date column, a number column and a
/// text column
fn create_test_xlsx() -> Vec<u8> {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    const NS: &str = "http://schemas.openxmlformats.org";
    let workbook = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="{NS}/spreadsheetml/2006/main" xmlns:r="{NS}/officeDocument/2006/relationships"><sheets><sheet name="Q1" sheetId="1" r:id="rId1"/></sheets></workbook>"#
    );
    let rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{NS}/package/2006/relationships"><Relationship Id="rId1" Type="{NS}/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#
    );
    let styles = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><styleSheet xmlns="{NS}/spreadsheetml/2006/main"><cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="14"/></cellXfs></styleSheet>"#
    );

    let mut rows = String::from(
        r#"<row r="1"><c r="A1" t="inlineStr"><is><t>month</t></is></c><c r="B1" t="inlineStr"><is><t>revenue</t></is></c><c r="C1" t="inlineStr"><is><t>region</t></is></c></row>"#,
    );
    for (i, (serial, revenue, region)) in [(45292, 120.0, "north"), (45323, 135.5, "south"), (45352, 150.0, "north")]
        .iter()
        .enumerate()
    {
        let r = i + 2;
        rows.push_str(&format!(
            r#"<row r="{r}"><c r="A{r}" s="1"><v>{serial}</v></c><c r="B{r}"><v>{revenue}</v></c><c r="C{r}" t="inlineStr"><is><t>{region}</t></is></c></row>"#
        ));
    }
    let sheet = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="{NS}/spreadsheetml/2006/main"><sheetData>{rows}</sheetData></worksheet>"#
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, xml) in [
        ("xl/workbook.xml", workbook),
        ("xl/_rels/workbook.xml.rels", rels),
        ("xl/styles.xml", styles),
        ("xl/worksheets/sheet1.xml", sheet),
    ] {
        writer.start_file(name, SimpleFileOptions::default()).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use doc_extract::{extract_upload, ExtractedDocument, TableDocument};
    use pretty_assertions::assert_eq;
    use render_engine::DeckOptions;
    use shared_types::{CellValue, Dataset};

    use crate::error::ServerError;
    use crate::pipeline::{generate_deck, generate_report, Variant};

    fn table(name: &str, columns: &[&str], rows: Vec<Vec<CellValue>>) -> ExtractedDocument {
        ExtractedDocument::Table(TableDocument {
            filename: name.to_string(),
            dataset: Dataset::new(name, columns.iter().map(|c| c.to_string()).collect(), rows),
        })
    }

    fn sales() -> ExtractedDocument {
        table(
            "sales.csv",
            &["day", "region", "units"],
            vec![
                vec![
                    CellValue::Text("2024-01-01".into()),
                    CellValue::Text("north".into()),
                    CellValue::Number(3.0),
                ],
                vec![
                    CellValue::Text("2024-01-02".into()),
                    CellValue::Text("south".into()),
                    CellValue::Number(5.0),
                ],
            ],
        )
    }

    #[tokio::test]
    async fn two_page_pdf_yields_title_plus_four_slides() {
        let pdf = create_text_pdf(&["Revenue grew in every region", "Costs stayed flat"]);
        let document = extract_upload(&[("q3.pdf".to_string(), pdf)]).unwrap();
        let service = ScriptedCompletion::replying(FOUR_SECTIONS);

        let outcome = generate_deck(service.as_ref(), &document, &DeckOptions::default())
            .await
            .unwrap();

        assert_eq!(outcome.variant, Variant::PdfDeck);
        assert_eq!(outcome.deck.slide_count, 5);
        let titles: Vec<&str> = outcome.sections.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "1. Executive Summary",
                "2. Main Findings",
                "3. Recommendations",
                "4. Next Steps"
            ]
        );
        assert_eq!(outcome.sections.as_slice()[0].body(), "- Revenue grew 12%\n- Costs flat");

        let prompt = service.last_prompt().unwrap();
        assert_eq!(prompt.max_tokens, 1500);
        assert!(prompt.prompt.contains("Revenue grew in every region"));
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn zero_numeric_table_never_calls_the_model() {
        let names = table(
            "people.xlsx",
            &["name", "city"],
            vec![vec![
                CellValue::Text("Ada".into()),
                CellValue::Text("London".into()),
            ]],
        );
        let service = ScriptedCompletion::replying(FOUR_SECTIONS);

        let report = generate_report(service.as_ref(), &names, false).await;
        assert!(matches!(report, Err(ServerError::Dataset(_))));
        let deck = generate_deck(service.as_ref(), &names, &DeckOptions::default()).await;
        assert!(matches!(deck, Err(ServerError::Dataset(_))));
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn csv_deck_prompt_carries_the_digest() {
        let service = ScriptedCompletion::replying("Only a title");
        let outcome = generate_deck(service.as_ref(), &sales(), &DeckOptions::default())
            .await
            .unwrap();

        assert_eq!(outcome.variant, Variant::CsvDeck);
        assert_eq!(outcome.deck.slide_count, 2);
        let prompt = service.last_prompt().unwrap().prompt;
        assert!(prompt.contains("Dataset 'sales.csv': 2 rows x 3 columns"));
        assert!(prompt.contains("units (numeric)"));
    }

    #[tokio::test]
    async fn report_uses_report_template_and_charts() {
        let service = ScriptedCompletion::replying("1. Key Trends\nUnits up\n\n2. Anomalies\nNone");
        let outcome = generate_report(service.as_ref(), &sales(), true).await.unwrap();

        assert_eq!(outcome.variant, Variant::CsvReport);
        assert_eq!(service.last_prompt().unwrap().max_tokens, 1000);
        assert_eq!(outcome.sections.as_ref().map(|s| s.len()), Some(2));
        assert_eq!(outcome.chart_count, 1);
        assert!(outcome.html.contains("<h3>1. Key Trends</h3>"));
    }

    #[tokio::test]
    async fn report_on_pdf_is_invalid() {
        let pdf = create_text_pdf(&["Some text"]);
        let document = extract_upload(&[("a.pdf".to_string(), pdf)]).unwrap();
        let service = ScriptedCompletion::replying("x");
        assert!(matches!(
            generate_report(service.as_ref(), &document, false).await,
            Err(ServerError::InvalidRequest(_))
        ));
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn whitespace_reply_gives_title_only_deck() {
        let service = ScriptedCompletion::replying("  \n\n \n");
        let outcome = generate_deck(service.as_ref(), &sales(), &DeckOptions::default())
            .await
            .unwrap();
        assert!(outcome.sections.is_empty());
        assert_eq!(outcome.deck.slide_count, 1);
    }
}

#[cfg(test)]
mod http_endpoint_tests {
    //! HTTP endpoint integration tests using axum-test

    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde_json::{json, Value};

    use crate::session::SessionStore;
    use crate::{app, AppState};

    /// Create a test server with the full router
    fn create_test_server(service: Arc<ScriptedCompletion>) -> TestServer {
        let state = AppState {
            completion: service,
            sessions: SessionStore::new(),
        };
        TestServer::new(app(state)).unwrap()
    }

    async fn new_session(server: &TestServer) -> String {
        let response = server.post("/api/sessions").await;
        response.assert_status_ok();
        response.json::<Value>()["session_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    fn upload_body(filename: &str, bytes: &[u8]) -> Value {
        json!({
            "files": [{"filename": filename, "data_base64": STANDARD.encode(bytes)}]
        })
    }

    #[tokio::test]
    async fn test_health_returns_200() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let response = server.get("/health").await;
        response.assert_status_ok();

        let json = response.json::<Value>();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "insight-server");
    }

    #[tokio::test]
    async fn test_index_serves_upload_page() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains("Insight Deck"));
    }

    #[tokio::test]
    async fn test_pdf_upload_then_deck() {
        let service = ScriptedCompletion::replying(FOUR_SECTIONS);
        let server = create_test_server(service.clone());
        let id = new_session(&server).await;

        let pdf = create_text_pdf(&["Page one text", "Page two text"]);
        let response = server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&upload_body("report.pdf", &pdf))
            .await;
        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["document"]["kind"], "text");
        assert_eq!(json["document"]["page_count"], 2);

        let response = server.post(&format!("/api/sessions/{}/deck", id)).await;
        response.assert_status_ok();
        let json = response.json::<Value>();
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["variant"], "pdf-deck");
        assert_eq!(json["slide_count"], 5);
        assert_eq!(json["sections"].as_array().unwrap().len(), 4);
        assert_eq!(json["sections"][3]["title"], "4. Next Steps");
        assert_eq!(json["filename"], "strategic_analysis.pptx");

        let pptx = STANDARD.decode(json["data"].as_str().unwrap()).unwrap();
        assert_eq!(&pptx[..2], b"PK");
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_csv_report_sectioned() {
        let service = ScriptedCompletion::replying("1. Key Trends\nUp\n\n2. Patterns\nNone");
        let server = create_test_server(service);
        let id = new_session(&server).await;

        let csv = b"day,units\n2024-01-01,3\n2024-01-02,5\n";
        server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&upload_body("sales.csv", csv))
            .await
            .assert_status_ok();

        let response = server
            .post(&format!("/api/sessions/{}/report", id))
            .add_query_param("sectioned", "true")
            .await;
        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["variant"], "csv-report");
        assert_eq!(json["sections"].as_array().unwrap().len(), 2);
        assert_eq!(json["mime_type"], "text/html");
        assert!(json["html"].as_str().unwrap().contains("AI Insights"));
    }

    #[tokio::test]
    async fn test_zero_numeric_csv_is_invalid_dataset() {
        let service = ScriptedCompletion::replying(FOUR_SECTIONS);
        let server = create_test_server(service.clone());
        let id = new_session(&server).await;

        server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&upload_body("names.csv", b"name,city\nAda,London\n"))
            .await
            .assert_status_ok();

        let response = server.post(&format!("/api/sessions/{}/report", id)).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let json = response.json::<Value>();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INVALID_DATASET");
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn test_xlsx_upload_then_report() {
        let service = ScriptedCompletion::replying("1. Revenue Trend\nRising");
        let server = create_test_server(service.clone());
        let id = new_session(&server).await;

        let response = server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&upload_body("q1.xlsx", &create_test_xlsx()))
            .await;
        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["document"]["kind"], "table");
        assert_eq!(json["document"]["rows"], 3);
        assert_eq!(
            json["document"]["columns"],
            json!(["month", "revenue", "region"])
        );

        let response = server.post(&format!("/api/sessions/{}/report", id)).await;
        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["variant"], "sheet-report");
        assert!(json["chart_count"].as_u64().unwrap() >= 1);
        assert!(json["html"].as_str().unwrap().contains("revenue"));
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_session_id_is_invalid_request() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let response = server.get("/api/sessions/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<Value>();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INVALID_REQUEST");
        assert!(json["error"].as_str().unwrap().contains("UUID"));
    }

    #[tokio::test]
    async fn test_malformed_upload_body_is_invalid_request() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let id = new_session(&server).await;
        let response = server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&json!({"files": "report.pdf"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<Value>();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_malformed_report_query_is_invalid_request() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let id = new_session(&server).await;
        let response = server
            .post(&format!("/api/sessions/{}/report", id))
            .add_query_param("sectioned", "maybe")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<Value>();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_idle_session_expires() {
        let state = AppState {
            completion: ScriptedCompletion::replying(""),
            sessions: SessionStore::with_ttl(chrono::Duration::zero()),
        };
        let server = TestServer::new(app(state)).unwrap();
        let id = new_session(&server).await;

        let response = server.get(&format!("/api/sessions/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["code"], "SESSION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_failed_upload_keeps_previous_document() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let id = new_session(&server).await;

        server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&upload_body("sales.csv", b"units\n1\n2\n"))
            .await
            .assert_status_ok();

        let response = server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&upload_body("broken.pdf", b"not a pdf"))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["code"], "EXTRACTION_FAILED");

        let session = server.get(&format!("/api/sessions/{}", id)).await;
        session.assert_status_ok();
        let json = session.json::<Value>();
        assert_eq!(json["document"]["filenames"][0], "sales.csv");
        assert_eq!(json["document"]["rows"], 2);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let id = new_session(&server).await;
        let response = server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&upload_body("notes.docx", b"PK"))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.json::<Value>()["error"]
            .as_str()
            .unwrap()
            .contains("notes.docx"));
    }

    #[tokio::test]
    async fn test_bad_base64_is_invalid_request() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let id = new_session(&server).await;
        let response = server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&json!({"files": [{"filename": "a.csv", "data_base64": "***"}]}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_deck_without_upload_is_conflict() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let id = new_session(&server).await;
        let response = server.post(&format!("/api/sessions/{}/deck", id)).await;
        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["code"], "NO_DOCUMENT");
    }

    #[tokio::test]
    async fn test_completion_failure_is_bad_gateway() {
        let server = create_test_server(ScriptedCompletion::failing(401));
        let id = new_session(&server).await;
        server
            .post(&format!("/api/sessions/{}/upload", id))
            .json(&upload_body("sales.csv", b"units\n1\n2\n"))
            .await
            .assert_status_ok();

        let response = server.post(&format!("/api/sessions/{}/deck", id)).await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        let json = response.json::<Value>();
        assert_eq!(json["code"], "COMPLETION_FAILED");
        assert!(json["error"].as_str().unwrap().contains("Authentication failed"));

        // Document survives the failed generation
        let session = server.get(&format!("/api/sessions/{}", id)).await;
        assert_eq!(session.json::<Value>()["document"]["kind"], "table");
    }

    #[tokio::test]
    async fn test_unknown_and_deleted_sessions() {
        let server = create_test_server(ScriptedCompletion::replying(""));
        let missing = uuid::Uuid::new_v4();
        let response = server.get(&format!("/api/sessions/{}", missing)).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["code"], "SESSION_NOT_FOUND");

        let id = new_session(&server).await;
        server
            .delete(&format!("/api/sessions/{}", id))
            .await
            .assert_status_ok();
        server
            .post(&format!("/api/sessions/{}/deck", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use insight_core::split_sections;
    use render_engine::{build_deck, DeckOptions};

    use crate::api::DocumentSummary;
    use doc_extract::{extract_upload, ExtractError, ExtractedDocument, TextDocument};

    fn paragraph() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 .,&<>-]{0,30}(\n[A-Za-z0-9 .,-]{0,30}){0,3}"
    }

    proptest! {
        /// Property: a deck has exactly one slide per split section plus the title
        #[test]
        fn deck_slide_count_follows_split(paragraphs in prop::collection::vec(paragraph(), 0..8)) {
            let text = paragraphs.join("\n\n");
            let sections = split_sections(&text);
            let expected = sections.len() + 1;
            let deck = build_deck(sections, &DeckOptions::default()).unwrap();
            prop_assert_eq!(deck.slide_count, expected);
        }

        /// Property: unknown extensions are rejected before any parsing
        #[test]
        fn unknown_extensions_are_rejected(stem in "[a-z]{1,10}", ext in "(docx|txt|png|json)") {
            let name = format!("{}.{}", stem, ext);
            let result = extract_upload(&[(name.clone(), vec![1, 2, 3])]);
            prop_assert_eq!(result, Err(ExtractError::UnsupportedFormat(name)));
        }

        /// Property: document summaries never include the text itself
        #[test]
        fn summaries_omit_content(text in "[a-z]{20,60}") {
            let doc = ExtractedDocument::Text(TextDocument {
                filenames: vec!["a.pdf".into()],
                page_count: 1,
                text: text.clone(),
            });
            let json = serde_json::to_string(&DocumentSummary::from(&doc)).unwrap();
            prop_assert!(!json.contains(&text));
        }
    }
}
