use crate::config::{Labels, Style};
use crate::fonts::FontSet;
use crate::model::{Color, DrawOp, FontVariant, LineOp, Page, PageGeometry, TextOp};

use super::layout::TextMeasure;

/// Distance of the header baseline above the top of the content area.
const HEADER_TEXT_RISE: f32 = 22.0;
const HEADER_RULE_RISE: f32 = 14.0;
/// Distance of the footer rule and baseline below the bottom of the content area.
const FOOTER_RULE_DROP: f32 = 12.0;
const FOOTER_TEXT_DROP: f32 = 28.0;

/// Vertical cursor and footer counter for a document's append-only page list.
pub(crate) struct PageFlow {
    geometry: PageGeometry,
    cursor: f32,
    /// Number stamped on the next footer. Page one never gets a footer, so
    /// the first stamp is 2.
    footer_number: u32,
}

impl PageFlow {
    /// Allocate the first page. It carries no header or footer.
    pub(crate) fn start(geometry: PageGeometry, pages: &mut Vec<Page>) -> Self {
        pages.push(Page::new(&geometry));
        Self {
            geometry,
            cursor: geometry.content_top(),
            footer_number: 2,
        }
    }

    pub(crate) fn cursor(&self) -> f32 {
        self.cursor
    }

    pub(crate) fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Move the cursor down by `dy`. Non-positive or NaN distances are ignored.
    pub(crate) fn advance(&mut self, dy: f32) {
        if dy > 0.0 {
            self.cursor -= dy;
        }
    }

    pub(crate) fn would_overflow(&self, height: f32) -> bool {
        self.cursor - height < self.geometry.margin_bottom
    }

    /// Start a new page when the next `height` units would cross the bottom
    /// margin. Returns true when a page was added.
    pub(crate) fn ensure_space(
        &mut self,
        height: f32,
        pages: &mut Vec<Page>,
        fonts: &FontSet,
        style: &Style,
        labels: &Labels,
    ) -> bool {
        if !self.would_overflow(height) {
            return false;
        }
        let mut page = Page::new(&self.geometry);
        self.draw_header(&mut page, style, labels);
        self.draw_footer(&mut page, fonts, style, labels);
        pages.push(page);
        self.footer_number += 1;
        self.cursor = self.geometry.content_top();
        log::debug!("page overflow → page {}", pages.len());
        true
    }

    fn draw_header(&self, page: &mut Page, style: &Style, labels: &Labels) {
        let g = &self.geometry;
        let top = g.content_top();
        page.push(DrawOp::Text(TextOp {
            text: labels.header.clone(),
            x: g.margin_left,
            y: top + HEADER_TEXT_RISE,
            size: style.chrome_size,
            font: FontVariant::Regular,
            color: Color::MUTED,
        }));
        page.push(rule(g, top + HEADER_RULE_RISE, style.separator_thickness));
    }

    fn draw_footer(&self, page: &mut Page, fonts: &FontSet, style: &Style, labels: &Labels) {
        let g = &self.geometry;
        page.push(rule(g, g.margin_bottom - FOOTER_RULE_DROP, style.separator_thickness));
        let text = format!("{} {}", labels.page, self.footer_number);
        let width = fonts.regular.text_width(&text, style.chrome_size);
        page.push(DrawOp::Text(TextOp {
            x: g.margin_left + (g.content_width() - width).max(0.0) / 2.0,
            y: g.margin_bottom - FOOTER_TEXT_DROP,
            size: style.chrome_size,
            font: FontVariant::Regular,
            color: Color::MUTED,
            text,
        }));
    }
}

fn rule(g: &PageGeometry, y: f32, thickness: f32) -> DrawOp {
    DrawOp::Line(LineOp {
        x1: g.margin_left,
        y1: y,
        x2: g.page_width - g.margin_right,
        y2: y,
        thickness,
        color: Color::LIGHT,
    })
}
