use crate::config::{Labels, Style};
use crate::fonts::FontSet;
use crate::model::{
    Color, DrawOp, FontVariant, LineOp, PLACEHOLDER, Page, Section, SectionContent, SignatureBlock,
    SignatureRole, Signatures, TextOp,
};

use super::flow::PageFlow;
use super::layout::{TextMeasure, wrap_text};

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
}

/// Translates content units into draw operations on the current page,
/// checking for overflow before every line.
pub(crate) struct Composer<'a> {
    pub(crate) fonts: &'a FontSet,
    pub(crate) pages: &'a mut Vec<Page>,
    pub(crate) flow: &'a mut PageFlow,
    pub(crate) style: &'a Style,
    pub(crate) labels: &'a Labels,
}

impl Composer<'_> {
    pub(crate) fn title(&mut self, title: &str, subtitle: Option<&str>) {
        let s = self.style;
        self.block(title, FontVariant::Bold, s.title_size, Color::DARK, Align::Center);
        if let Some(subtitle) = subtitle.filter(|t| !t.trim().is_empty()) {
            self.block(subtitle, FontVariant::Regular, s.subtitle_size, Color::MUTED, Align::Center);
        }
        self.separator();
        self.gap(s.title_gap);
    }

    pub(crate) fn section(&mut self, section: &Section) {
        let s = self.style;
        if let Some(title) = section.title.as_deref().filter(|t| !t.trim().is_empty()) {
            self.block(title, FontVariant::Bold, s.section_title_size, Color::DARK, Align::Left);
            self.separator();
        }
        match &section.content {
            SectionContent::Text(text) => self.body(text),
            SectionContent::List(items) if !items.is_empty() => {
                for item in items {
                    let item = if item.trim().is_empty() {
                        PLACEHOLDER
                    } else {
                        item.as_str()
                    };
                    self.body(&format!("• {item}"));
                }
            }
            SectionContent::List(_) | SectionContent::Missing => self.body(PLACEHOLDER),
        }
        self.gap(s.section_gap);
    }

    pub(crate) fn separator(&mut self) {
        let height = self.style.separator_height;
        if height.is_nan() || height <= 0.0 {
            log::debug!("separator skipped: height {height} is not positive");
            return;
        }
        self.ensure_space(height);
        let g = *self.flow.geometry();
        let y = self.flow.cursor() - height / 2.0;
        self.push(DrawOp::Line(LineOp {
            x1: g.margin_left,
            y1: y,
            x2: g.page_width - g.margin_right,
            y2: y,
            thickness: self.style.separator_thickness,
            color: Color::LIGHT,
        }));
        self.flow.advance(height);
    }

    pub(crate) fn signatures(&mut self, signatures: &Signatures) {
        let s = self.style;
        let heading = self.labels.signature_heading.clone();
        self.block(&heading, FontVariant::Bold, s.section_title_size, Color::DARK, Align::Left);
        self.separator();

        let blocks: Vec<&SignatureBlock> = [&signatures.creator, &signatures.chairperson]
            .into_iter()
            .flatten()
            .collect();
        if blocks.is_empty() {
            self.body(PLACEHOLDER);
        }
        for block in blocks {
            self.signature(block);
        }
        self.gap(s.section_gap);
    }

    fn signature(&mut self, sig: &SignatureBlock) {
        let s = self.style;
        let l = self.labels;
        let label = match sig.role {
            SignatureRole::Creator => &l.creator,
            SignatureRole::Chairperson => &l.chairperson,
        };
        self.block(label, FontVariant::Bold, s.body_size, Color::DARK, Align::Left);
        self.body(&format!("{}: {}", l.name, or_placeholder(&sig.name)));
        self.body(&format!("{}: {}", l.date, or_placeholder(&sig.date)));
        let status = if sig.signed { &l.signed } else { &l.unsigned };
        self.body(&format!("{}: {}", l.status, status));
        self.gap(s.signature_gap);
    }

    pub(crate) fn footer_info(&mut self, generated_at: &str) {
        let s = self.style;
        let l = self.labels;
        self.separator();
        for text in [
            l.authenticity.clone(),
            format!("{}: {}", l.generated_at, generated_at),
            l.system.clone(),
        ] {
            self.block(&text, FontVariant::Italic, s.small_size, Color::MUTED, Align::Left);
        }
        self.gap(s.footer_info_gap);
    }

    fn body(&mut self, text: &str) {
        self.block(text, FontVariant::Regular, self.style.body_size, Color::BLACK, Align::Left);
    }

    /// Wrap `text` to the content width and draw it line by line.
    fn block(&mut self, text: &str, variant: FontVariant, size: f32, color: Color, align: Align) {
        let text = or_placeholder(text);
        let fonts = self.fonts;
        let width = self.flow.geometry().content_width();
        for line in wrap_text(text, width, fonts.get(variant), size) {
            self.line(&line, variant, size, color, align);
        }
    }

    /// One line of text. A line the font cannot encode is skipped; its space is
    /// still consumed so following content keeps its position.
    fn line(&mut self, text: &str, variant: FontVariant, size: f32, color: Color, align: Align) {
        let advance = size + self.style.line_gap;
        if size.is_nan() || advance.is_nan() || size <= 0.0 || advance <= 0.0 {
            log::warn!(
                "Skipping line {text:?}: size {size} with line gap {} takes no space",
                self.style.line_gap
            );
            return;
        }
        self.ensure_space(advance);

        let fonts = self.fonts;
        let font = fonts.get(variant);
        match font.check_encodable(text) {
            Ok(()) => {
                let g = self.flow.geometry();
                let x = match align {
                    Align::Left => g.margin_left,
                    Align::Center => {
                        let w = font.text_width(text, size);
                        g.margin_left + ((g.content_width() - w) / 2.0).max(0.0)
                    }
                };
                let y = self.flow.cursor() - size;
                self.push(DrawOp::Text(TextOp {
                    text: text.to_string(),
                    x,
                    y,
                    size,
                    font: variant,
                    color,
                }));
            }
            Err(e) => log::warn!("Skipping line {text:?}: {e}"),
        }
        self.flow.advance(advance);
    }

    fn gap(&mut self, dy: f32) {
        self.flow.advance(dy);
    }

    fn ensure_space(&mut self, height: f32) {
        self.flow
            .ensure_space(height, self.pages, self.fonts, self.style, self.labels);
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.push(op);
        }
    }
}

fn or_placeholder(text: &str) -> &str {
    if text.trim().is_empty() {
        PLACEHOLDER
    } else {
        text
    }
}
