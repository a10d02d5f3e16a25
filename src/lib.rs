mod config;
mod error;
mod fonts;
pub mod format;
mod model;
mod pdf;
mod report;

pub use config::{DocumentConfig, FontConfig, Labels, Style};
pub use error::{Error, FormattingError, RenderError};
pub use fonts::{FontEntry, FontSet};
pub use model::{
    Color, DrawOp, FontVariant, LineOp, PLACEHOLDER, Page, PageGeometry, Section, SectionContent,
    SignatureBlock, SignatureRole, Signatures, TextOp,
};
pub use pdf::DocumentSession;
pub use pdf::layout::{TextMeasure, wrap_text};
pub use report::{InvestigationReport, Signatory, compose_report, render_report, render_report_at};

use std::time::Instant;

/// Parse a JSON case record and render it with `config`.
pub fn render_report_json(input: &[u8], config: &DocumentConfig) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let report: InvestigationReport = serde_json::from_slice(input)?;
    let t_parse = t0.elapsed();

    let bytes = render_report(&report, config)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_total - t_parse).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(bytes)
}
