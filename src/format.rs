//! Raw case-record fields to short display strings.
//!
//! Scalar formatters never fail. The list formatters come in two flavours:
//! `try_format_*` reports a [`FormattingError`], `format_*` turns it into a
//! single diagnostic line so one malformed field cannot stop a document.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error::FormattingError;
use crate::model::PLACEHOLDER;

const NOT_AVAILABLE: &str = "N/A";

const ACTION_TEXT_CAP: usize = 200;
const EVIDENCE_DESCRIPTION_CAP: usize = 100;
const PARTY_NOTES_CAP: usize = 100;

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Accepts RFC 3339, `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` and `YYYY-MM-DD`.
/// An explicit offset is kept as written, not converted.
fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn long_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// `"14 Oktober 2026"`, or `"-"` for missing or unparseable input.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date_time)
        .map(|dt| long_date(dt.date()))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `"14 Oktober 2026 09:30"`, or `"-"` for missing or unparseable input.
pub fn format_date_time(raw: Option<&str>) -> String {
    raw.and_then(parse_date_time)
        .map(format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_timestamp(dt: NaiveDateTime) -> String {
    format!("{} {}", long_date(dt.date()), dt.format("%H:%M"))
}

/// Report status label. Unknown codes are returned unchanged.
pub fn format_status(code: Option<&str>) -> String {
    let code = code.unwrap_or_default();
    let label = match code.trim() {
        "" => PLACEHOLDER,
        "DRAFT" => "Draf",
        "SUBMITTED" => "Diajukan",
        "PENDING" => "Menunggu",
        "UNDER_REVIEW" => "Dalam Peninjauan",
        "IN_PROGRESS" => "Dalam Proses",
        "INVESTIGATING" => "Dalam Investigasi",
        "COMPLETED" => "Selesai",
        "RESOLVED" => "Terselesaikan",
        "CLOSED" => "Ditutup",
        "REJECTED" => "Ditolak",
        _ => code,
    };
    label.to_string()
}

/// Priority label. Unknown codes are returned unchanged.
pub fn format_priority(code: Option<&str>) -> String {
    let code = code.unwrap_or_default();
    let label = match code.trim() {
        "" => PLACEHOLDER,
        "LOW" => "Rendah",
        "MEDIUM" => "Sedang",
        "HIGH" => "Tinggi",
        "URGENT" => "Mendesak",
        "CRITICAL" => "Kritis",
        _ => code,
    };
    label.to_string()
}

fn party_role_label(code: &str) -> &str {
    match code {
        "REPORTER" => "Pelapor",
        "REPORTED" => "Terlapor",
        "VICTIM" => "Korban",
        "WITNESS" => "Saksi",
        "COMPANION" => "Pendamping",
        _ => code,
    }
}

fn attendance_label(code: &str) -> &str {
    match code {
        "PRESENT" => "Hadir",
        "ABSENT" => "Tidak Hadir",
        "EXCUSED" => "Izin",
        "REPRESENTED" => "Diwakilkan",
        _ => code,
    }
}

fn member_role_label(code: &str) -> &str {
    match code {
        "CHAIRPERSON" => "Ketua",
        "VICE_CHAIRPERSON" => "Wakil Ketua",
        "SECRETARY" => "Sekretaris",
        "MEMBER" => "Anggota",
        _ => code,
    }
}

fn truncate(text: &str, cap: usize) -> String {
    if text.chars().count() <= cap {
        return text.to_string();
    }
    let mut out: String = text.chars().take(cap).collect();
    out.push_str("...");
    out
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First non-empty scalar among `keys`.
fn text_field(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| record.get(*k).and_then(scalar_text))
}

/// Person name, also looked up in a nested `user` object.
fn person_name(record: &Map<String, Value>) -> Option<String> {
    const KEYS: &[&str] = &["name", "fullName"];
    text_field(record, KEYS).or_else(|| {
        record
            .get("user")
            .and_then(Value::as_object)
            .and_then(|user| text_field(user, KEYS))
    })
}

fn as_record(value: &Value, index: usize) -> Result<&Map<String, Value>, FormattingError> {
    value.as_object().ok_or(FormattingError::InvalidRecord {
        index,
        kind: kind_of(value),
    })
}

/// Number each record's line; null or an empty list yields the placeholder.
fn numbered(
    value: &Value,
    line: impl Fn(&Value, usize) -> Result<String, FormattingError>,
) -> Result<Vec<String>, FormattingError> {
    let records = match value {
        Value::Null => return Ok(vec![PLACEHOLDER.to_string()]),
        Value::Array(records) if records.is_empty() => return Ok(vec![PLACEHOLDER.to_string()]),
        Value::Array(records) => records,
        other => return Err(FormattingError::NotAList(kind_of(other))),
    };
    records
        .iter()
        .enumerate()
        .map(|(i, record)| line(record, i).map(|text| format!("{}. {}", i + 1, text)))
        .collect()
}

fn or_fallback(result: Result<Vec<String>, FormattingError>, what: &str) -> Vec<String> {
    result.unwrap_or_else(|e| {
        log::warn!("Error formatting {what}: {e}");
        vec![format!("Error formatting {what}")]
    })
}

pub fn try_format_recommended_actions(actions: &Value) -> Result<Vec<String>, FormattingError> {
    numbered(actions, |value, index| {
        if let Value::String(text) = value {
            return Ok(truncate(text.trim(), ACTION_TEXT_CAP));
        }
        let record = as_record(value, index)?;
        let action = text_field(record, &["action", "description", "recommendation", "title"])
            .map(|t| truncate(&t, ACTION_TEXT_CAP))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let mut line = action;
        if let Some(pic) = text_field(record, &["responsible", "assignee", "pic"]) {
            line.push_str(&format!(" (PIC: {pic})"));
        }
        if let Some(deadline) = text_field(record, &["deadline", "dueDate"]) {
            line.push_str(&format!(" - Tenggat: {}", format_date(Some(&deadline))));
        }
        Ok(line)
    })
}

pub fn format_recommended_actions(actions: &Value) -> Vec<String> {
    or_fallback(try_format_recommended_actions(actions), "recommended actions")
}

pub fn try_format_parties_present(parties: &Value) -> Result<Vec<String>, FormattingError> {
    numbered(parties, |value, index| {
        let record = as_record(value, index)?;
        let name = person_name(record).unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let role = text_field(record, &["role", "position"]);
        let status = text_field(record, &["status", "attendance"]);
        let mut line = format!(
            "{} ({}) - {}",
            name,
            role.as_deref().map_or(NOT_AVAILABLE, party_role_label),
            status.as_deref().map_or(NOT_AVAILABLE, attendance_label),
        );
        if let Some(notes) = text_field(record, &["notes", "note"]) {
            line.push_str(&format!(": {}", truncate(&notes, PARTY_NOTES_CAP)));
        }
        Ok(line)
    })
}

pub fn format_parties_present(parties: &Value) -> Vec<String> {
    or_fallback(try_format_parties_present(parties), "parties present")
}

pub fn try_format_satgas_members(members: &Value) -> Result<Vec<String>, FormattingError> {
    numbered(members, |value, index| {
        let record = as_record(value, index)?;
        let name = person_name(record).unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let role = text_field(record, &["role", "position"]);
        Ok(format!(
            "{} - {}",
            name,
            role.as_deref().map_or(NOT_AVAILABLE, member_role_label)
        ))
    })
}

pub fn format_satgas_members(members: &Value) -> Vec<String> {
    or_fallback(try_format_satgas_members(members), "satgas members")
}

pub fn try_format_evidence_files(files: &Value) -> Result<Vec<String>, FormattingError> {
    numbered(files, |value, index| {
        let record = as_record(value, index)?;
        let name = text_field(record, &["fileName", "filename", "originalName", "name"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let kind = text_field(record, &["fileType", "mimeType", "type"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let mut line = format!("{name} ({kind})");
        if let Some(description) = text_field(record, &["description", "caption"]) {
            line.push_str(&format!(
                " - {}",
                truncate(&description, EVIDENCE_DESCRIPTION_CAP)
            ));
        }
        Ok(line)
    })
}

pub fn format_evidence_files(files: &Value) -> Vec<String> {
    or_fallback(try_format_evidence_files(files), "evidence files")
}
