use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::OnceLock;

use memmap2::Mmap;
use pdf_writer::{Name, Pdf, Rect, Ref};
use ttf_parser::Face;

use crate::config::FontConfig;
use crate::error::RenderError;
use crate::model::FontVariant;
use crate::pdf::layout::TextMeasure;

#[derive(Clone, Copy, Debug)]
struct Glyph {
    gid: u16,
    width_1000: f32,
}

struct TrueTypeFont {
    data: Vec<u8>,
    face_index: u32,
    ascent: f32,
    descent: f32,
    cap_height: f32,
    italic_angle: f32,
    bbox: Rect,
    glyphs: BTreeMap<char, Glyph>,
}

enum FontSource {
    Standard {
        base_font: &'static str,
        widths_1000: Vec<f32>,
    },
    TrueType(TrueTypeFont),
}

/// A resolved face: metrics for measuring now, data for embedding at save time.
pub struct FontEntry {
    pub(crate) pdf_name: String,
    family: String,
    variant: FontVariant,
    source: FontSource,
}

impl FontEntry {
    fn standard(variant: FontVariant) -> Self {
        let base_font = match variant {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
            FontVariant::Italic => "Helvetica-Oblique",
        };
        Self {
            pdf_name: pdf_name_for(variant),
            family: base_font.to_string(),
            variant,
            source: FontSource::Standard {
                base_font,
                widths_1000: helvetica_widths(variant),
            },
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn variant(&self) -> FontVariant {
        self.variant
    }

    /// True for the built-in Helvetica fallback, which is referenced, not embedded.
    pub fn is_standard(&self) -> bool {
        matches!(self.source, FontSource::Standard { .. })
    }

    /// Width of a single character in 1000-units; 0 for characters the font cannot show.
    pub(crate) fn char_width_1000(&self, ch: char) -> f32 {
        match &self.source {
            FontSource::Standard { widths_1000, .. } => match char_to_winansi(ch) {
                Some(byte) if byte >= 32 => widths_1000[(byte - 32) as usize],
                _ => 0.0,
            },
            FontSource::TrueType(tt) => tt.glyphs.get(&ch).map_or(0.0, |g| g.width_1000),
        }
    }

    pub fn supports(&self, ch: char) -> bool {
        match &self.source {
            FontSource::Standard { .. } => char_to_winansi(ch).is_some_and(|b| b >= 32),
            FontSource::TrueType(tt) => tt.glyphs.contains_key(&ch),
        }
    }

    /// Fails on the first character this face cannot draw.
    pub(crate) fn check_encodable(&self, text: &str) -> Result<(), RenderError> {
        match text.chars().find(|&ch| !self.supports(ch)) {
            Some(ch) => Err(RenderError::UnsupportedGlyph {
                font: self.family.clone(),
                ch,
            }),
            None => Ok(()),
        }
    }
}

impl TextMeasure for FontEntry {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width_1000(ch) * font_size / 1000.0)
            .sum()
    }
}

fn pdf_name_for(variant: FontVariant) -> String {
    match variant {
        FontVariant::Regular => "F1",
        FontVariant::Bold => "F2",
        FontVariant::Italic => "F3",
    }
    .to_string()
}

/// The three faces every document uses, chosen once per session.
pub struct FontSet {
    pub regular: FontEntry,
    pub bold: FontEntry,
    pub italic: FontEntry,
}

impl FontSet {
    /// Built-in Helvetica family only; no font lookup.
    pub fn standard() -> Self {
        Self {
            regular: FontEntry::standard(FontVariant::Regular),
            bold: FontEntry::standard(FontVariant::Bold),
            italic: FontEntry::standard(FontVariant::Italic),
        }
    }

    /// Resolve each variant against the configured candidates. Never fails: a
    /// variant with no usable candidate falls back to Helvetica.
    pub fn load(config: &FontConfig) -> Self {
        Self {
            regular: register_font(config, FontVariant::Regular),
            bold: register_font(config, FontVariant::Bold),
            italic: register_font(config, FontVariant::Italic),
        }
    }

    pub fn get(&self, variant: FontVariant) -> &FontEntry {
        match variant {
            FontVariant::Regular => &self.regular,
            FontVariant::Bold => &self.bold,
            FontVariant::Italic => &self.italic,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontEntry> {
        [&self.regular, &self.bold, &self.italic].into_iter()
    }
}

fn register_font(config: &FontConfig, variant: FontVariant) -> FontEntry {
    let t0 = std::time::Instant::now();
    let (bold, italic) = (variant.is_bold(), variant.is_italic());

    let mut attempted = false;
    for candidate in config.candidates() {
        attempted = true;
        let Some((path, face_index)) = find_font_file(candidate, bold, italic) else {
            log::debug!("Font family {candidate} bold={bold} italic={italic} not installed");
            continue;
        };
        let Ok(data) = std::fs::read(&path) else {
            log::debug!("Could not read font file {}", path.display());
            continue;
        };
        if let Some(tt) = load_truetype(data, face_index) {
            log::debug!(
                "register_font: {candidate} {variant:?} from {} → {:.1}ms",
                path.display(),
                t0.elapsed().as_secs_f64() * 1000.0,
            );
            return FontEntry {
                pdf_name: pdf_name_for(variant),
                family: candidate.to_string(),
                variant,
                source: FontSource::TrueType(tt),
            };
        }
    }

    if attempted {
        log::warn!(
            "Font not found: {} bold={bold} italic={italic}, using Helvetica",
            config.families
        );
    }
    FontEntry::standard(variant)
}

fn load_truetype(data: Vec<u8>, face_index: u32) -> Option<TrueTypeFont> {
    let face = Face::parse(&data, face_index).ok()?;
    let units = face.units_per_em() as f32;

    let mut glyphs = BTreeMap::new();
    if let Some(cmap) = face.tables().cmap {
        for subtable in cmap.subtables {
            if !subtable.is_unicode() {
                continue;
            }
            subtable.codepoints(|cp| {
                let Some(ch) = char::from_u32(cp) else {
                    return;
                };
                let Some(gid) = subtable.glyph_index(cp) else {
                    return;
                };
                if gid.0 == 0 {
                    return;
                }
                let width_1000 = face
                    .glyph_hor_advance(gid)
                    .map(|adv| adv as f32 / units * 1000.0)
                    .unwrap_or(0.0);
                glyphs.entry(ch).or_insert(Glyph {
                    gid: gid.0,
                    width_1000,
                });
            });
        }
    }
    if glyphs.is_empty() {
        return None;
    }

    let bb = face.global_bounding_box();
    let (ascent, descent) = (
        face.ascender() as f32 / units * 1000.0,
        face.descender() as f32 / units * 1000.0,
    );
    let cap_height = face
        .capital_height()
        .map(|h| h as f32 / units * 1000.0)
        .unwrap_or(700.0);
    let italic_angle = face.italic_angle();
    let bbox = Rect::new(
        bb.x_min as f32 / units * 1000.0,
        bb.y_min as f32 / units * 1000.0,
        bb.x_max as f32 / units * 1000.0,
        bb.y_max as f32 / units * 1000.0,
    );

    Some(TrueTypeFont {
        data,
        face_index,
        ascent,
        descent,
        cap_height,
        italic_angle,
        bbox,
        glyphs,
    })
}

/// (lowercase family name, bold, italic) -> (file path, face index within TTC)
type FontLookup = HashMap<(String, bool, bool), (PathBuf, u32)>;

static FONT_INDEX: OnceLock<FontLookup> = OnceLock::new();

fn font_family_name(face: &Face) -> Option<String> {
    for name in face.names() {
        if name.name_id == ttf_parser::name_id::FAMILY
            && name.is_unicode()
            && let Some(s) = name.to_string()
        {
            return Some(s);
        }
    }
    None
}

fn read_font_style(data: &[u8], face_index: u32) -> Option<(String, bool, bool)> {
    let face = Face::parse(data, face_index).ok()?;
    let family = font_family_name(&face)?;
    Some((family, face.is_bold(), face.is_italic()))
}

fn font_directories() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();

    if let Ok(val) = std::env::var("INVESTIGATION_PDF_FONTS") {
        let sep = if cfg!(windows) { ';' } else { ':' };
        for part in val.split(sep) {
            let trimmed = part.trim();
            if !trimmed.is_empty() {
                dirs.push(PathBuf::from(trimmed));
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        dirs.extend([
            "/Library/Fonts".into(),
            "/System/Library/Fonts".into(),
            "/System/Library/Fonts/Supplemental".into(),
        ]);
        if let Ok(home) = std::env::var("HOME") {
            dirs.push(PathBuf::from(&home).join("Library/Fonts"));
        }
    }

    #[cfg(target_os = "linux")]
    {
        dirs.extend(["/usr/share/fonts".into(), "/usr/local/share/fonts".into()]);
        if let Ok(home) = std::env::var("HOME") {
            dirs.push(PathBuf::from(home).join(".local/share/fonts"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(windir) = std::env::var("WINDIR") {
            dirs.push(PathBuf::from(windir).join("Fonts"));
        } else {
            dirs.push("C:\\Windows\\Fonts".into());
        }
    }

    dirs
}

fn is_font_file(path: &std::path::Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("ttf" | "otf" | "ttc")
    )
}

fn is_font_collection(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ttc"))
}

fn scan_font_dirs() -> FontLookup {
    let t0 = std::time::Instant::now();
    let mut index = FontLookup::new();
    let mut files_scanned = 0u32;
    let mut visited_dirs: std::collections::HashSet<PathBuf> = std::collections::HashSet::new();

    let mut stack: Vec<PathBuf> = font_directories();
    // Popping reverses order; keep user-configured directories first.
    stack.reverse();
    while let Some(dir) = stack.pop() {
        if !visited_dirs.insert(dir.clone()) {
            continue;
        }
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };

        let mut subdirs = Vec::new();
        let mut font_files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                subdirs.push(path);
            } else if is_font_file(&path) {
                font_files.push(path);
            }
        }
        subdirs.sort();
        subdirs.reverse();
        stack.extend(subdirs);
        font_files.sort();

        for file_path in font_files {
            files_scanned += 1;
            let Ok(file) = std::fs::File::open(&file_path) else {
                continue;
            };
            let Ok(data) = (unsafe { Mmap::map(&file) }) else {
                continue;
            };
            let face_count = if is_font_collection(&file_path) {
                ttf_parser::fonts_in_collection(&data).unwrap_or(1)
            } else {
                1
            };
            for face_idx in 0..face_count {
                if let Some((family, bold, italic)) = read_font_style(&data, face_idx) {
                    index
                        .entry((family.to_lowercase(), bold, italic))
                        .or_insert((file_path.clone(), face_idx));
                }
            }
        }
    }

    log::info!(
        "Font scan: {:.1}ms, {} files parsed → {} entries",
        t0.elapsed().as_secs_f64() * 1000.0,
        files_scanned,
        index.len(),
    );
    index
}

fn get_font_index() -> &'static FontLookup {
    FONT_INDEX.get_or_init(scan_font_dirs)
}

/// Look up a font file by family name and style.
/// Falls back to the regular face of the family if the requested style is missing.
fn find_font_file(font_name: &str, bold: bool, italic: bool) -> Option<(PathBuf, u32)> {
    let index = get_font_index();
    let key = font_name.to_lowercase();
    index
        .get(&(key.clone(), bold, italic))
        .or_else(|| {
            if bold || italic {
                index.get(&(key, false, false))
            } else {
                None
            }
        })
        .cloned()
}

/// Map a Unicode char to its WinAnsi (Windows-1252) byte, if it has one.
fn char_to_winansi(c: char) -> Option<u8> {
    match c as u32 {
        0x0000..=0x007F => Some(c as u8),
        0x00A0..=0x00FF => Some(c as u8),
        0x20AC => Some(0x80),
        0x201A => Some(0x82),
        0x0192 => Some(0x83),
        0x201E => Some(0x84),
        0x2026 => Some(0x85),
        0x2020 => Some(0x86),
        0x2021 => Some(0x87),
        0x02C6 => Some(0x88),
        0x2030 => Some(0x89),
        0x0160 => Some(0x8A),
        0x2039 => Some(0x8B),
        0x0152 => Some(0x8C),
        0x017D => Some(0x8E),
        0x2018 => Some(0x91),
        0x2019 => Some(0x92),
        0x201C => Some(0x93),
        0x201D => Some(0x94),
        0x2022 => Some(0x95), // bullet
        0x2013 => Some(0x96),
        0x2014 => Some(0x97),
        0x02DC => Some(0x98),
        0x2122 => Some(0x99),
        0x0161 => Some(0x9A),
        0x203A => Some(0x9B),
        0x0153 => Some(0x9C),
        0x017E => Some(0x9E),
        0x0178 => Some(0x9F),
        _ => None,
    }
}

pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars().filter_map(char_to_winansi).collect()
}

/// Encode text as big-endian 2-byte glyph IDs for CIDFont content streams.
pub(crate) fn encode_as_gids(text: &str, char_to_gid: &BTreeMap<char, u16>) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for ch in text.chars() {
        let gid = char_to_gid.get(&ch).copied().unwrap_or(0);
        out.extend_from_slice(&gid.to_be_bytes());
    }
    out
}

/// Helvetica advance widths from the standard AFM metrics, ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn ascii_width(byte: u8, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD_ASCII } else { &HELVETICA_ASCII };
    table[(byte - 32) as usize]
}

/// WinAnsi 0x80..=0xFF. Accented letters share their base letter's advance.
fn winansi_high_width(byte: u8, bold: bool) -> u16 {
    let pick = |regular: u16, heavy: u16| if bold { heavy } else { regular };
    let base = |letter: u8| ascii_width(letter, bold);
    match byte {
        0x82 | 0x91 | 0x92 => pick(222, 278),
        0x84 | 0x93 | 0x94 => pick(333, 500),
        0x85 | 0x89 | 0x8C | 0x97 | 0x99 | 0xC6 => 1000,
        0x88 | 0x8B | 0x98 | 0x9B => 333,
        0x8A => base(b'S'),
        0x8E => base(b'Z'),
        0x95 => 350, // bullet
        0x9A => base(b's'),
        0x9C => 944,
        0x9E => base(b'z'),
        0x9F | 0xDD => base(b'Y'),
        0xA0 => 278,
        0xA1 => 333,
        0xA6 => pick(260, 280),
        0xA8 | 0xAD | 0xAF | 0xB2 | 0xB3 | 0xB4 | 0xB8 | 0xB9 => 333,
        0xA9 | 0xAE => 737,
        0xAA => 370,
        0xAC | 0xB1 | 0xD7 | 0xF7 => 584,
        0xB0 => 400,
        0xB5 => pick(556, 611),
        0xB6 => pick(537, 556),
        0xB7 => 278,
        0xBA => 365,
        0xBC..=0xBE => 834,
        0xBF | 0xDF | 0xF8 => 611,
        0xC0..=0xC5 => base(b'A'),
        0xC7 => base(b'C'),
        0xC8..=0xCB => base(b'E'),
        0xCC..=0xCF | 0xEC..=0xEF => 278,
        0xD0 => 722,
        0xD1 => base(b'N'),
        0xD2..=0xD6 | 0xD8 => base(b'O'),
        0xD9..=0xDC => base(b'U'),
        0xDE => 667,
        0xE0..=0xE5 => base(b'a'),
        0xE6 => 889,
        0xE7 => base(b'c'),
        0xE8..=0xEB => base(b'e'),
        0xF0 | 0xFE => base(b'p'),
        0xF1 => base(b'n'),
        0xF2..=0xF6 => base(b'o'),
        0xF9..=0xFC => base(b'u'),
        0xFD | 0xFF => base(b'y'),
        _ => 556,
    }
}

/// Widths at 1000 units/em for WinAnsi bytes 32..=255. Oblique shares the
/// regular metrics.
fn helvetica_widths(variant: FontVariant) -> Vec<f32> {
    let bold = variant.is_bold();
    (32u8..=255u8)
        .map(|b| {
            f32::from(match b {
                32..=126 => ascii_width(b, bold),
                127 => 0,
                _ => winansi_high_width(b, bold),
            })
        })
        .collect()
}

/// A font as written into the PDF, with the glyph mapping text must be encoded with.
pub(crate) struct EmbeddedFont {
    pub(crate) pdf_name: String,
    pub(crate) font_ref: Ref,
    char_to_gid: Option<BTreeMap<char, u16>>,
}

impl EmbeddedFont {
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match &self.char_to_gid {
            Some(map) => encode_as_gids(text, map),
            None => to_winansi_bytes(text),
        }
    }
}

/// Write a font into the PDF. TrueType faces are subset to `used_chars` and
/// embedded as a CIDFont (Type0, Identity-H); Helvetica is referenced by name.
pub(crate) fn embed_font(
    pdf: &mut Pdf,
    entry: &FontEntry,
    used_chars: &BTreeSet<char>,
    alloc: &mut impl FnMut() -> Ref,
) -> EmbeddedFont {
    let font_ref = alloc();
    let char_to_gid = match &entry.source {
        FontSource::Standard { base_font, .. } => {
            pdf.type1_font(font_ref)
                .base_font(Name(base_font.as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            None
        }
        FontSource::TrueType(tt) => Some(embed_truetype(
            pdf,
            font_ref,
            &entry.family,
            entry.variant,
            tt,
            used_chars,
            alloc,
        )),
    };
    EmbeddedFont {
        pdf_name: entry.pdf_name.clone(),
        font_ref,
        char_to_gid,
    }
}

fn embed_truetype(
    pdf: &mut Pdf,
    font_ref: Ref,
    family: &str,
    variant: FontVariant,
    tt: &TrueTypeFont,
    used_chars: &BTreeSet<char>,
    alloc: &mut impl FnMut() -> Ref,
) -> BTreeMap<char, u16> {
    let descriptor_ref = alloc();
    let data_ref = alloc();

    let mut remapper = subsetter::GlyphRemapper::new();
    let mut remapped = BTreeMap::new();
    let mut original = BTreeMap::new();
    for &ch in used_chars {
        if let Some(glyph) = tt.glyphs.get(&ch) {
            remapped.insert(ch, remapper.remap(glyph.gid));
            original.insert(ch, glyph.gid);
        }
    }

    let (font_data, char_to_gid) = match subsetter::subset(&tt.data, tt.face_index, &remapper) {
        Ok(data) => (data, remapped),
        Err(e) => {
            log::warn!("Font subsetting failed for {family}: {e:?}, embedding full font");
            (tt.data.clone(), original)
        }
    };

    let data_len = i32::try_from(font_data.len()).unwrap_or(i32::MAX);
    pdf.stream(data_ref, &font_data)
        .pair(Name(b"Length1"), data_len);

    let ps_name = match variant {
        FontVariant::Regular => family.replace(' ', ""),
        FontVariant::Bold => format!("{}-Bold", family.replace(' ', "")),
        FontVariant::Italic => format!("{}-Italic", family.replace(' ', "")),
    };

    let mut flags = pdf_writer::types::FontFlags::NON_SYMBOLIC;
    if variant.is_italic() {
        flags |= pdf_writer::types::FontFlags::ITALIC;
    }
    pdf.font_descriptor(descriptor_ref)
        .name(Name(ps_name.as_bytes()))
        .flags(flags)
        .bbox(tt.bbox)
        .italic_angle(tt.italic_angle)
        .ascent(tt.ascent)
        .descent(tt.descent)
        .cap_height(tt.cap_height)
        .stem_v(80.0)
        .font_file2(data_ref);

    let cid_font_ref = alloc();
    {
        let mut cid = pdf.cid_font(cid_font_ref);
        cid.subtype(pdf_writer::types::CidFontType::Type2);
        cid.base_font(Name(ps_name.as_bytes()));
        cid.system_info(pdf_writer::types::SystemInfo {
            registry: pdf_writer::Str(b"Adobe"),
            ordering: pdf_writer::Str(b"Identity"),
            supplement: 0,
        });
        cid.font_descriptor(descriptor_ref);
        cid.default_width(0.0);
        cid.cid_to_gid_map_predefined(Name(b"Identity"));
        let mut gid_widths: Vec<(u16, f32)> = char_to_gid
            .iter()
            .filter_map(|(ch, &gid)| tt.glyphs.get(ch).map(|g| (gid, g.width_1000)))
            .collect();
        gid_widths.sort_by_key(|&(gid, _)| gid);
        gid_widths.dedup_by_key(|&mut (gid, _)| gid);
        if !gid_widths.is_empty() {
            let mut w = cid.widths();
            for &(gid, width) in &gid_widths {
                w.consecutive(gid, [width]);
            }
        }
    }

    let tounicode_ref = alloc();
    let cmap_name = format!("{}-UTF16", ps_name);
    let mut cmap = pdf_writer::types::UnicodeCmap::new(
        Name(cmap_name.as_bytes()),
        pdf_writer::types::SystemInfo {
            registry: pdf_writer::Str(b"Adobe"),
            ordering: pdf_writer::Str(b"Identity"),
            supplement: 0,
        },
    );
    for (&ch, &gid) in &char_to_gid {
        cmap.pair(gid, ch);
    }
    let cmap_data = cmap.finish();
    pdf.stream(tounicode_ref, cmap_data.as_slice());

    pdf.type0_font(font_ref)
        .base_font(Name(ps_name.as_bytes()))
        .encoding_predefined(Name(b"Identity-H"))
        .descendant_font(cid_font_ref)
        .to_unicode(tounicode_ref);

    char_to_gid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_covers_winansi_only() {
        let font = FontEntry::standard(FontVariant::Regular);
        assert!(font.supports('é'));
        assert!(font.supports('•'));
        assert!(!font.supports('漢'));
        assert!(!font.supports('\n'));
        assert_eq!(
            font.check_encodable("ok 漢"),
            Err(RenderError::UnsupportedGlyph {
                font: "Helvetica".into(),
                ch: '漢'
            })
        );
    }

    #[test]
    fn bold_measures_wider_than_regular() {
        let regular = FontEntry::standard(FontVariant::Regular);
        let bold = FontEntry::standard(FontVariant::Bold);
        let text = "Berita Acara";
        assert!(bold.text_width(text, 12.0) > regular.text_width(text, 12.0));
        assert_eq!(regular.text_width("", 12.0), 0.0);
    }

    #[test]
    fn helvetica_uses_real_capital_widths() {
        let regular = FontEntry::standard(FontVariant::Regular);
        let bold = FontEntry::standard(FontVariant::Bold);
        let italic = FontEntry::standard(FontVariant::Italic);
        for (ch, width) in [('W', 944.0), ('O', 778.0), ('H', 722.0), ('I', 278.0), ('i', 222.0)] {
            assert_eq!(regular.char_width_1000(ch), width, "{ch}");
            assert_eq!(italic.char_width_1000(ch), width, "{ch}");
        }
        assert_eq!(bold.char_width_1000('A'), 722.0);
        assert_eq!(bold.char_width_1000('m'), 889.0);
        assert_eq!(regular.char_width_1000('É'), 667.0);
        assert_eq!(regular.char_width_1000('ö'), 556.0);
        // 944 + 778 + 944 at 10pt
        assert!((regular.text_width("WOW", 10.0) - 26.66).abs() < 1e-3);
    }

    #[test]
    fn winansi_encoding_maps_bullet() {
        assert_eq!(to_winansi_bytes("• a"), vec![0x95, b' ', b'a']);
    }

    #[test]
    fn gids_are_two_bytes_big_endian() {
        let map = BTreeMap::from([('a', 0x0102u16), ('b', 7)]);
        assert_eq!(encode_as_gids("ab?", &map), vec![1, 2, 0, 7, 0, 0]);
    }
}
