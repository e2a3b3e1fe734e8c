//! Self-contained HTML snapshot: the rendered preview markup plus the full
//! record embedded as `<script type="application/json" id="resume-data">`,
//! which is what `import::read` looks for.

use crate::export::{ExportError, ExportFormat, ExportedFile};
use crate::models::resume::{has_text, ResumeRecord};
use crate::preview::html::escape;

pub const DATA_BLOCK_ID: &str = "resume-data";

const STYLE: &str = r#"    body { font-family: Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.6; }
    h1 { text-align: center; margin-bottom: 10px; }
    h2 { border-bottom: 2px solid #333; padding-bottom: 5px; margin-top: 30px; }
    h3 { margin-bottom: 0; }
    .muted { color: #666; font-style: italic; }
    .placeholder { color: #aaa; }
    .tags { margin: 5px 0; }
    .tag { display: inline-block; padding: 2px 8px; margin: 2px; border-radius: 4px; background: #eee; }
    .empty-state { text-align: center; color: #888; }
    ul { margin: 5px 0; }"#;

pub fn encode(record: &ResumeRecord, preview_html: &str) -> Result<ExportedFile, ExportError> {
    let html = render_snapshot(record, preview_html)?;
    Ok(ExportedFile::new(
        ExportFormat::Html,
        &record.personal_info.name,
        html.into_bytes(),
    ))
}

pub fn render_snapshot(record: &ResumeRecord, preview_html: &str) -> Result<String, ExportError> {
    // `</` inside the JSON would close the script element early.
    let data = serde_json::to_string_pretty(record)?.replace("</", "<\\/");
    let title = if has_text(&record.personal_info.name) {
        format!("{} - Resume", record.personal_info.name.trim())
    } else {
        "Resume".to_string()
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{STYLE}
  </style>
</head>
<body>
  <div id="resume-root">
{preview_html}  </div>
  <script type="application/json" id="{DATA_BLOCK_ID}">
{data}
  </script>
</body>
</html>
"#,
        title = escape(&title),
    ))
}
