//! Single-page upload UI

use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = "
body { font-family: Helvetica, Arial, sans-serif; max-width: 820px; margin: 40px auto; padding: 0 20px; color: #051c2c; }
h1 { margin-bottom: 4px; }
.hint { color: #555; margin-top: 0; }
.card { border: 1px solid #d0d5e0; border-radius: 8px; padding: 20px; margin: 20px 0; }
button { background: #2251ff; color: #fff; border: 0; border-radius: 4px; padding: 10px 18px; font-size: 15px; cursor: pointer; margin-right: 8px; }
button:disabled { background: #9aa6c8; cursor: default; }
#status { min-height: 1.4em; }
#status.error { color: #b00020; }
#insights { white-space: pre-wrap; background: #f4f6fb; border-radius: 8px; padding: 16px; }
#report { width: 100%; height: 900px; border: 1px solid #d0d5e0; border-radius: 8px; }
";

const SCRIPT: &str = r#"
let sessionId = null;

async function api(path, options) {
  const response = await fetch(path, options);
  const body = await response.json().catch(() => ({ success: false, error: response.statusText }));
  if (!response.ok || body.success === false) {
    throw new Error(body.error || ('Request failed: ' + response.status));
  }
  return body;
}

async function ensureSession() {
  if (!sessionId) {
    const session = await api('/api/sessions', { method: 'POST' });
    sessionId = session.session_id;
  }
  return sessionId;
}

function readBase64(file) {
  return new Promise((resolve, reject) => {
    const reader = new FileReader();
    reader.onload = () => resolve(String(reader.result).split(',')[1] || '');
    reader.onerror = () => reject(reader.error);
    reader.readAsDataURL(file);
  });
}

function setStatus(text, isError) {
  const status = document.getElementById('status');
  status.textContent = text;
  status.className = isError ? 'error' : '';
}

function setBusy(busy) {
  document.querySelectorAll('button').forEach(b => b.disabled = busy);
}

async function upload() {
  const files = Array.from(document.getElementById('files').files);
  if (files.length === 0) { setStatus('Choose a file first.', true); return; }
  setBusy(true);
  setStatus('Reading ' + files.length + ' file(s)...');
  try {
    const id = await ensureSession();
    const payload = { files: await Promise.all(files.map(async f => ({ filename: f.name, data_base64: await readBase64(f) }))) };
    const result = await api('/api/sessions/' + id + '/upload', {
      method: 'POST', headers: { 'Content-Type': 'application/json' }, body: JSON.stringify(payload)
    });
    const doc = result.document;
    const detail = doc.kind === 'text' ? doc.page_count + ' page(s)' : doc.rows + ' rows, ' + doc.columns.length + ' columns';
    setStatus('Loaded ' + doc.filenames.join(', ') + ' (' + detail + ').');
    document.getElementById('report-button').disabled = doc.kind !== 'table';
    document.getElementById('deck-button').disabled = false;
  } catch (e) {
    setStatus(e.message, true);
  } finally {
    setBusy(false);
  }
}

function download(filename, mime, base64) {
  const bytes = Uint8Array.from(atob(base64), c => c.charCodeAt(0));
  const link = document.createElement('a');
  link.href = URL.createObjectURL(new Blob([bytes], { type: mime }));
  link.download = filename;
  link.click();
}

async function generateDeck() {
  setBusy(true);
  setStatus('Generating insights...');
  try {
    const id = await ensureSession();
    const result = await api('/api/sessions/' + id + '/deck', { method: 'POST' });
    document.getElementById('insights').textContent = result.insights;
    download(result.filename, result.mime_type, result.data);
    setStatus('Deck ready: ' + result.slide_count + ' slides.');
  } catch (e) {
    setStatus(e.message, true);
  } finally {
    setBusy(false);
  }
}

async function generateReport() {
  setBusy(true);
  setStatus('Generating report...');
  try {
    const id = await ensureSession();
    const sectioned = document.getElementById('sectioned').checked;
    const result = await api('/api/sessions/' + id + '/report?sectioned=' + sectioned, { method: 'POST' });
    document.getElementById('insights').textContent = result.insights;
    document.getElementById('report').srcdoc = result.html;
    setStatus('Report ready with ' + result.chart_count + ' chart(s).');
  } catch (e) {
    setStatus(e.message, true);
  } finally {
    setBusy(false);
  }
}
"#;

/// Handler: GET /
pub async fn handle_index() -> Markup {
    index()
}

fn index() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Insight Deck" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "Insight Deck" }
                p class="hint" {
                    "Upload PDFs for a strategy deck, or a CSV / Excel file for a deck or a data report."
                }

                div class="card" {
                    input type="file" id="files" multiple accept=".pdf,.csv,.xls,.xlsx,.ods";
                    button onclick="upload()" { "Upload" }
                }

                div class="card" {
                    button id="deck-button" onclick="generateDeck()" { "Generate presentation" }
                    button id="report-button" onclick="generateReport()" { "Generate report" }
                    label {
                        input type="checkbox" id="sectioned";
                        " Split report insights into sections"
                    }
                }

                p id="status" {}
                h2 { "Insights" }
                div id="insights" {}
                iframe id="report" title="Report preview" {}

                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}
