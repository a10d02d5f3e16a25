use crate::model::PageGeometry;

#[derive(Clone, Debug, Default)]
pub struct DocumentConfig {
    pub geometry: PageGeometry,
    pub fonts: FontConfig,
    pub style: Style,
    pub labels: Labels,
}

impl DocumentConfig {
    /// Default layout with the built-in Helvetica family only. Output does not
    /// depend on which fonts are installed.
    pub fn standard() -> Self {
        Self {
            fonts: FontConfig::standard(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    /// Family candidates tried in order, `;`-separated (e.g. "Arial; Liberation Sans").
    /// Helvetica is used when none of them resolves.
    pub families: String,
}

impl FontConfig {
    pub fn standard() -> Self {
        Self {
            families: String::new(),
        }
    }

    pub fn families(families: impl Into<String>) -> Self {
        Self {
            families: families.into(),
        }
    }

    pub(crate) fn candidates(&self) -> impl Iterator<Item = &str> {
        self.families
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::families("Arial; Liberation Sans; DejaVu Sans")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub title_size: f32,
    pub subtitle_size: f32,
    pub section_title_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub chrome_size: f32, // header and footer text
    /// Added to the font size to get the vertical advance of one line.
    pub line_gap: f32,
    pub title_gap: f32,
    pub section_gap: f32,
    pub signature_gap: f32,
    pub footer_info_gap: f32,
    pub separator_height: f32,
    pub separator_thickness: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            title_size: 16.0,
            subtitle_size: 11.0,
            section_title_size: 12.0,
            body_size: 11.0,
            small_size: 9.0,
            chrome_size: 9.0,
            line_gap: 8.0,
            title_gap: 15.0,
            section_gap: 10.0,
            signature_gap: 5.0,
            footer_info_gap: 5.0,
            separator_height: 10.0,
            separator_thickness: 0.75,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub header: String,
    pub page: String,
    pub signature_heading: String,
    pub creator: String,
    pub chairperson: String,
    pub name: String,
    pub date: String,
    pub status: String,
    pub signed: String,
    pub unsigned: String,
    pub authenticity: String,
    pub generated_at: String,
    pub system: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            header: "Berita Acara Pemeriksaan - Satuan Tugas".into(),
            page: "Halaman".into(),
            signature_heading: "PENGESAHAN".into(),
            creator: "Dibuat oleh".into(),
            chairperson: "Disetujui oleh Ketua Satgas".into(),
            name: "Nama".into(),
            date: "Tanggal".into(),
            status: "Status".into(),
            signed: "Sudah ditandatangani".into(),
            unsigned: "Belum ditandatangani".into(),
            authenticity: "Dokumen ini dihasilkan secara elektronik dan sah tanpa tanda tangan basah."
                .into(),
            generated_at: "Dibuat pada".into(),
            system: "Sistem Informasi Pelaporan Satgas".into(),
        }
    }
}
