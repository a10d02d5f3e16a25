#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use investigation_pdf::{DocumentConfig, DocumentSession, DrawOp, Labels, Page, PageGeometry};

/// Initialized session on the built-in Helvetica family, so layout does not
/// depend on which fonts the machine has installed.
pub fn standard_session() -> DocumentSession {
    init_logging();
    let mut session = DocumentSession::new(DocumentConfig::standard());
    session.initialize();
    session
}

/// Route `log` output through the test harness; `RUST_LOG` filters it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 14)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid timestamp")
}

/// Roughly `len` characters of space-separated words.
pub fn paragraph(len: usize) -> String {
    const WORDS: [&str; 8] = [
        "pemeriksaan", "saksi", "menyatakan", "bahwa", "kejadian", "berlangsung", "di", "kampus",
    ];
    let mut out = String::new();
    for word in WORDS.iter().cycle() {
        if out.len() >= len {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

pub fn all_texts(session: &DocumentSession) -> Vec<String> {
    session
        .pages()
        .iter()
        .flat_map(|p| p.texts().map(str::to_string))
        .collect()
}

/// The number stamped in the page footer, if the page has one.
pub fn footer_number(page: &Page) -> Option<u32> {
    let prefix = format!("{} ", Labels::default().page);
    page.texts()
        .find_map(|t| t.strip_prefix(prefix.as_str())?.parse().ok())
}

pub fn has_header(page: &Page) -> bool {
    let header = Labels::default().header;
    page.texts().any(|t| t == header)
}

/// Text baselines inside the content area, in drawing order.
pub fn body_baselines(page: &Page, geometry: &PageGeometry) -> Vec<f32> {
    page.ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text(t) => Some(t.y),
            DrawOp::Line(_) => None,
        })
        .filter(|&y| y <= geometry.content_top() && y >= geometry.margin_bottom)
        .collect()
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
