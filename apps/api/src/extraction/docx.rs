use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

static XML_ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(lt|gt|quot|apos|amp|#[0-9]+|#[xX][0-9a-fA-F]+);").expect("valid regex")
});

/// One XML tag (group 1: closing slash, 2: name, 3: self-closing slash) or a text run (group 4).
static XML_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z0-9_:]+)[^>]*?(/?)>|([^<]+)").expect("valid regex")
});

/// Reads the main document part of a .docx package and returns its paragraph
/// text, one paragraph per line.
pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    Ok(document_xml_to_text(&xml))
}

/// Collects `<w:t>` runs; `</w:p>` ends a line, and inside a run `<w:tab/>`
/// is a tab and `<w:br/>`/`<w:cr/>` a line break. Other markup is dropped.
pub(crate) fn document_xml_to_text(xml: &str) -> String {
    let mut text = String::new();
    let mut in_run = false;
    let mut in_run_text = false;

    for caps in XML_TOKEN_RE.captures_iter(xml) {
        if let Some(chars) = caps.get(4) {
            if in_run_text {
                text.push_str(&unescape_xml(chars.as_str()));
            }
            continue;
        }

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let self_closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());
        let name = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        match (name, closing) {
            ("w:r", false) => in_run = !self_closing,
            ("w:r", true) => in_run = false,
            ("w:t", false) => in_run_text = !self_closing,
            ("w:t", true) => in_run_text = false,
            ("w:p", true) => text.push('\n'),
            ("w:p", false) if self_closing => text.push('\n'),
            ("w:tab", false) if in_run => text.push('\t'),
            ("w:br" | "w:cr", false) if in_run => text.push('\n'),
            _ => {}
        }
    }

    text
}

/// Decodes the predefined XML entities and numeric character references.
/// References that do not name a valid code point are left as written.
fn unescape_xml(s: &str) -> String {
    XML_ENTITY_RE
        .replace_all(s, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "amp" => Some('&'),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .unwrap_or_else(|| entity[1..].parse::<u32>())
                    .ok()
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
