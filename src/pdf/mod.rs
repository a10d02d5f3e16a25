mod compose;
mod flow;
pub(crate) mod layout;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::config::DocumentConfig;
use crate::error::Error;
use crate::fonts::{EmbeddedFont, FontSet, embed_font};
use crate::format::format_timestamp;
use crate::model::{DrawOp, FontVariant, Page, Section, Signatures};

use compose::Composer;
use flow::PageFlow;

const PRODUCER: &str = concat!("investigation-pdf ", env!("CARGO_PKG_VERSION"));

struct SessionState {
    fonts: FontSet,
    pages: Vec<Page>,
    flow: PageFlow,
    title: Option<String>,
}

/// One document generation: fonts, the append-only page list and the layout
/// cursor. Drawing calls fail with [`Error::Initialization`] until
/// [`initialize`](Self::initialize) has run.
pub struct DocumentSession {
    config: DocumentConfig,
    state: Option<SessionState>,
}

impl DocumentSession {
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Resolve fonts (falling back to Helvetica) and allocate the first page.
    pub fn initialize(&mut self) {
        if self.state.is_some() {
            log::debug!("initialize: session already initialized");
            return;
        }
        let fonts = FontSet::load(&self.config.fonts);
        self.initialize_with_fonts(fonts);
    }

    /// Like [`initialize`](Self::initialize) with a caller-provided font set.
    pub fn initialize_with_fonts(&mut self, fonts: FontSet) {
        if self.state.is_some() {
            log::debug!("initialize: session already initialized");
            return;
        }
        let mut pages = Vec::new();
        let flow = PageFlow::start(self.config.geometry, &mut pages);
        self.state = Some(SessionState {
            fonts,
            pages,
            flow,
            title: None,
        });
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    fn composer(&mut self) -> Result<Composer<'_>, Error> {
        let state = self.state.as_mut().ok_or(Error::Initialization)?;
        Ok(Composer {
            fonts: &state.fonts,
            pages: &mut state.pages,
            flow: &mut state.flow,
            style: &self.config.style,
            labels: &self.config.labels,
        })
    }

    pub fn add_title(&mut self, title: &str, subtitle: Option<&str>) -> Result<(), Error> {
        self.composer()?.title(title, subtitle);
        if let Some(state) = self.state.as_mut()
            && state.title.is_none()
            && !title.trim().is_empty()
        {
            state.title = Some(title.trim().to_string());
        }
        Ok(())
    }

    pub fn add_section(&mut self, section: &Section) -> Result<(), Error> {
        self.composer()?.section(section);
        Ok(())
    }

    pub fn add_separator(&mut self) -> Result<(), Error> {
        self.composer()?.separator();
        Ok(())
    }

    pub fn add_signature_section(&mut self, signatures: &Signatures) -> Result<(), Error> {
        self.composer()?.signatures(signatures);
        Ok(())
    }

    /// Closing boilerplate stamped with the current local time.
    pub fn add_footer_info(&mut self) -> Result<(), Error> {
        self.add_footer_info_at(chrono::Local::now().naive_local())
    }

    pub fn add_footer_info_at(&mut self, generated_at: NaiveDateTime) -> Result<(), Error> {
        self.composer()?.footer_info(&format_timestamp(generated_at));
        Ok(())
    }

    /// Pages drawn so far; empty before initialization.
    pub fn pages(&self) -> &[Page] {
        match &self.state {
            Some(state) => &state.pages,
            None => &[],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages().len()
    }

    pub fn fonts(&self) -> Option<&FontSet> {
        self.state.as_ref().map(|s| &s.fonts)
    }

    pub fn cursor(&self) -> Option<f32> {
        self.state.as_ref().map(|s| s.flow.cursor())
    }

    /// Serialize every page into a PDF. Does not modify the session.
    pub fn save(&self) -> Result<Vec<u8>, Error> {
        let t0 = std::time::Instant::now();
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| Error::Serialization("document was never initialized".into()))?;

        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();

        // Phase 1: embed the fonts that are actually drawn, subset to used chars
        let mut used_chars: BTreeMap<FontVariant, BTreeSet<char>> = BTreeMap::new();
        for op in state.pages.iter().flat_map(|p| p.text_ops()) {
            used_chars.entry(op.font).or_default().extend(op.text.chars());
        }
        let mut embedded: BTreeMap<FontVariant, EmbeddedFont> = BTreeMap::new();
        for entry in state.fonts.iter() {
            if let Some(chars) = used_chars.get(&entry.variant()) {
                let font = embed_font(&mut pdf, entry, chars, &mut alloc);
                embedded.insert(entry.variant(), font);
            }
        }
        let t_fonts = t0.elapsed();

        // Phase 2: content streams
        let n = state.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        for (page, &content_id) in state.pages.iter().zip(&content_ids) {
            let raw = render_page_content(page, &embedded).finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            pdf.stream(content_id, &compressed).filter(Filter::FlateDecode);
        }

        // Phase 3: page tree
        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        for (i, page) in state.pages.iter().enumerate() {
            let mut page_obj = pdf.page(page_ids[i]);
            page_obj
                .media_box(Rect::new(0.0, 0.0, page.width, page.height))
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page_obj.resources();
            let mut fonts = resources.fonts();
            for font in embedded.values() {
                fonts.pair(Name(font.pdf_name.as_bytes()), font.font_ref);
            }
        }

        {
            let mut info = pdf.document_info(info_id);
            if let Some(title) = &state.title {
                info.title(TextStr(title.as_str()));
            }
            info.producer(TextStr(PRODUCER));
        }

        let bytes = pdf.finish();
        if bytes.is_empty() {
            return Err(Error::Serialization("serializer produced no output".into()));
        }

        log::info!(
            "Saved {} pages, {} bytes: font_embed={:.1}ms, total={:.1}ms",
            n,
            bytes.len(),
            t_fonts.as_secs_f64() * 1000.0,
            t0.elapsed().as_secs_f64() * 1000.0,
        );
        Ok(bytes)
    }
}

fn render_page_content(page: &Page, embedded: &BTreeMap<FontVariant, EmbeddedFont>) -> Content {
    let mut content = Content::new();
    for op in page.ops() {
        match op {
            DrawOp::Text(t) => {
                let Some(font) = embedded.get(&t.font) else {
                    continue;
                };
                content.set_fill_rgb(t.color.r, t.color.g, t.color.b);
                content.begin_text();
                content.set_font(Name(font.pdf_name.as_bytes()), t.size);
                content.next_line(t.x, t.y);
                content.show(Str(&font.encode(&t.text)));
                content.end_text();
            }
            DrawOp::Line(l) => {
                content.save_state();
                content.set_stroke_rgb(l.color.r, l.color.g, l.color.b);
                content.set_line_width(l.thickness);
                content.move_to(l.x1, l.y1);
                content.line_to(l.x2, l.y2);
                content.stroke();
                content.restore_state();
            }
        }
    }
    content
}
