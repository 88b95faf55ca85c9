//! Document information dictionary.

use std::ops::Range;

use chrono::{DateTime, FixedOffset, NaiveDate};
use lopdf::{Dictionary, Document as LopdfDocument, Object};
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::backend::LopdfBackend;

/// Descriptive metadata of a PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Total number of pages
    pub page_count: u32,

    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date, in the offset the document states
    pub created: Option<DateTime<FixedOffset>>,

    /// Last modification date, in the offset the document states
    pub modified: Option<DateTime<FixedOffset>>,
}

/// Read the information dictionary of a PDF held in memory.
pub fn read_info(data: &[u8]) -> Result<DocumentInfo> {
    Ok(LopdfBackend::load_bytes(data)?.info())
}

pub(crate) fn info_from_document(doc: &LopdfDocument, page_count: u32) -> DocumentInfo {
    let mut info = DocumentInfo {
        page_count,
        pdf_version: doc.version.to_string(),
        ..Default::default()
    };

    let dict = match doc.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => doc.get_dictionary(*id).ok(),
        Ok(Object::Dictionary(dict)) => Some(dict),
        _ => None,
    };

    if let Some(dict) = dict {
        info.title = dict_text(dict, b"Title");
        info.author = dict_text(dict, b"Author");
        info.subject = dict_text(dict, b"Subject");
        info.keywords = dict_text(dict, b"Keywords");
        info.creator = dict_text(dict, b"Creator");
        info.producer = dict_text(dict, b"Producer");
        info.created = dict_text(dict, b"CreationDate").and_then(|s| parse_pdf_date(&s));
        info.modified = dict_text(dict, b"ModDate").and_then(|s| parse_pdf_date(&s));
    }

    info
}

/// Trimmed text value of `key`, or `None` when absent or blank.
fn dict_text(dict: &Dictionary, key: &[u8]) -> Option<String> {
    let text = match dict.get(key).ok()? {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Decode a PDF text string.
///
/// A UTF-16BE byte order mark selects UTF-16; otherwise the bytes are read
/// as UTF-8 (with or without its BOM) and, failing that, as Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(units) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units = units
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
        return char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
    }
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().copied().map(char::from).collect(),
    }
}

/// Parse a PDF date (`D:YYYYMMDDHHmmSSOHH'mm'`) keeping its UTC offset.
///
/// Only the year is mandatory. A missing or unreadable offset is UTC.
fn parse_pdf_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    let raw = raw.strip_prefix("D:").unwrap_or(raw);
    let digits = raw.bytes().take_while(u8::is_ascii_digit).count();
    if digits < 4 {
        return None;
    }
    let (stamp, zone) = raw.split_at(digits);
    let field = |range: Range<usize>, default: u32| -> u32 {
        stamp
            .get(range)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    };

    let date = NaiveDate::from_ymd_opt(stamp[..4].parse().ok()?, field(4..6, 1), field(6..8, 1))?;
    let local = date.and_hms_opt(field(8..10, 0), field(10..12, 0), field(12..14, 0))?;
    let offset = utc_offset(zone).or_else(|| FixedOffset::east_opt(0))?;
    local.and_local_timezone(offset).single()
}

/// `Z`, `+HH'mm'` or `-HH'mm'`; the minutes may be omitted.
fn utc_offset(zone: &str) -> Option<FixedOffset> {
    let sign = match zone.chars().next()? {
        'Z' => return FixedOffset::east_opt(0),
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let mut parts = zone[1..].split('\'').filter(|part| !part.is_empty());
    let hours: i32 = parts.next()?.parse().ok()?;
    let minutes: i32 = match parts.next() {
        Some(minutes) => minutes.parse().ok()?,
        None => 0,
    };
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
