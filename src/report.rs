//! The standard investigation report ("berita acara pemeriksaan") layout.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::config::DocumentConfig;
use crate::error::Error;
use crate::format;
use crate::model::{
    PLACEHOLDER, Section, SectionContent, SignatureBlock, SignatureRole, Signatures,
};
use crate::pdf::DocumentSession;

const DOCUMENT_TITLE: &str = "BERITA ACARA PEMERIKSAAN";

/// A case record as delivered by the reporting backend. List-valued fields are
/// loosely typed and validated only while formatting.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestigationReport {
    #[serde(alias = "reportCode")]
    pub report_number: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub incident_date: Option<String>,
    #[serde(alias = "investigationDate")]
    pub examination_date: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "description")]
    pub chronology: Option<String>,
    pub parties_present: Value,
    pub satgas_members: Value,
    pub evidence_files: Value,
    pub recommended_actions: Value,
    #[serde(alias = "findings")]
    pub conclusion: Option<String>,
    pub creator: Option<Signatory>,
    pub chairperson: Option<Signatory>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Signatory {
    #[serde(alias = "fullName")]
    pub name: Option<String>,
    #[serde(alias = "signedAt")]
    pub date: Option<String>,
    pub signed: bool,
}

impl Signatory {
    fn block(&self, role: SignatureRole) -> SignatureBlock {
        SignatureBlock {
            name: self.name.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            date: format::format_date_time(self.date.as_deref()),
            signed: self.signed,
            role,
        }
    }
}

impl InvestigationReport {
    pub fn signatures(&self) -> Signatures {
        Signatures {
            creator: self.creator.as_ref().map(|s| s.block(SignatureRole::Creator)),
            chairperson: self
                .chairperson
                .as_ref()
                .map(|s| s.block(SignatureRole::Chairperson)),
        }
    }

    fn info_lines(&self) -> Vec<String> {
        let text = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(PLACEHOLDER)
                .to_string()
        };
        vec![
            format!("Judul: {}", text(&self.title)),
            format!("Status: {}", format::format_status(self.status.as_deref())),
            format!("Prioritas: {}", format::format_priority(self.priority.as_deref())),
            format!(
                "Tanggal Kejadian: {}",
                format::format_date(self.incident_date.as_deref())
            ),
            format!(
                "Tanggal Pemeriksaan: {}",
                format::format_date_time(self.examination_date.as_deref())
            ),
            format!("Lokasi: {}", text(&self.location)),
        ]
    }
}

fn free_text(value: &Option<String>) -> SectionContent {
    match value {
        Some(text) => SectionContent::Text(text.clone()),
        None => SectionContent::Missing,
    }
}

/// Draw `report` into an initialized session, stamping the footer with `generated_at`.
pub fn compose_report(
    session: &mut DocumentSession,
    report: &InvestigationReport,
    generated_at: NaiveDateTime,
) -> Result<(), Error> {
    let number = report
        .report_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(PLACEHOLDER);
    session.add_title(DOCUMENT_TITLE, Some(format!("Nomor: {number}").as_str()))?;

    let priority = format::format_priority(report.priority.as_deref());
    let sections = [
        Section::new("Informasi Laporan", report.info_lines()).with_priority(priority),
        Section::new("Kronologi Kejadian", free_text(&report.chronology)),
        Section::new(
            "Pihak yang Hadir",
            format::format_parties_present(&report.parties_present),
        ),
        Section::new(
            "Anggota Satgas",
            format::format_satgas_members(&report.satgas_members),
        ),
        Section::new(
            "Barang Bukti",
            format::format_evidence_files(&report.evidence_files),
        ),
        Section::new(
            "Tindak Lanjut yang Direkomendasikan",
            format::format_recommended_actions(&report.recommended_actions),
        ),
        Section::new("Kesimpulan", free_text(&report.conclusion)),
    ];
    for section in &sections {
        session.add_section(section)?;
    }

    session.add_signature_section(&report.signatures())?;
    session.add_footer_info_at(generated_at)?;
    Ok(())
}

/// Lay out and serialize `report` in a fresh session.
pub fn render_report_at(
    report: &InvestigationReport,
    config: &DocumentConfig,
    generated_at: NaiveDateTime,
) -> Result<Vec<u8>, Error> {
    let mut session = DocumentSession::new(config.clone());
    session.initialize();
    compose_report(&mut session, report, generated_at)?;
    session.save()
}

pub fn render_report(report: &InvestigationReport, config: &DocumentConfig) -> Result<Vec<u8>, Error> {
    render_report_at(report, config, chrono::Local::now().naive_local())
}
