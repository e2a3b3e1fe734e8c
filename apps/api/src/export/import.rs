//! Import: JSON export or HTML snapshot → `ResumeRecord`.
//!
//! Input starting with `{` (after trimming) is read as JSON. Anything else is
//! searched for a `<script … id="resume-data" …>` element whose trimmed body
//! is parsed as JSON. Nothing here touches the stored record; the caller
//! replaces it only on `Ok`.

use thiserror::Error;

use crate::export::html::DATA_BLOCK_ID;
use crate::export::json;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not valid UTF-8")]
    Encoding,

    #[error("no embedded resume data found")]
    MissingData,

    #[error("invalid resume JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub fn read(bytes: &[u8]) -> Result<ResumeRecord, ImportError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ImportError::Encoding)?;
    let text = text.trim_start_matches('\u{feff}').trim();

    if text.starts_with('{') {
        return Ok(json::decode(text)?);
    }

    let body = embedded_data(text).ok_or(ImportError::MissingData)?;
    Ok(json::decode(body.trim())?)
}

/// Body of the first `<script>` element carrying the data-block id.
fn embedded_data(html: &str) -> Option<&str> {
    let mut rest = html;
    while let Some(start) = rest.find("<script") {
        let after_open = &rest[start..];
        let tag_end = after_open.find('>')?;
        let tag = &after_open[..tag_end];
        let body_and_rest = &after_open[tag_end + 1..];

        if has_data_id(tag) {
            let close = body_and_rest.find("</script>")?;
            return Some(&body_and_rest[..close]);
        }
        rest = body_and_rest;
    }
    None
}

fn has_data_id(tag: &str) -> bool {
    tag.contains(&format!("id=\"{DATA_BLOCK_ID}\""))
        || tag.contains(&format!("id='{DATA_BLOCK_ID}'"))
}
