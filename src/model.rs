use serde::Deserialize;
use serde_json::Value;

/// Placeholder drawn wherever content is missing or unusable.
pub const PLACEHOLDER: &str = "-";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::gray(0.0);
    pub const DARK: Color = Color::gray(0.1);
    pub const MUTED: Color = Color::gray(0.4);
    pub const LIGHT: Color = Color::gray(0.75);

    pub const fn gray(level: f32) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
}

impl FontVariant {
    pub(crate) fn is_bold(self) -> bool {
        self == FontVariant::Bold
    }

    pub(crate) fn is_italic(self) -> bool {
        self == FontVariant::Italic
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    pub const A4_WIDTH: f32 = 595.28;
    pub const A4_HEIGHT: f32 = 841.89;

    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Cursor position at the top of a fresh page.
    pub fn content_top(&self) -> f32 {
        self.page_height - self.margin_top
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: Self::A4_WIDTH,
            page_height: Self::A4_HEIGHT,
            margin_top: 60.0,
            margin_bottom: 60.0,
            margin_left: 50.0,
            margin_right: 50.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextOp {
    pub text: String,
    pub x: f32,
    pub y: f32, // baseline
    pub size: f32,
    pub font: FontVariant,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineOp {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub thickness: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text(TextOp),
    Line(LineOp),
}

pub struct Page {
    pub width: f32,
    pub height: f32,
    ops: Vec<DrawOp>,
}

impl Page {
    pub(crate) fn new(geometry: &PageGeometry) -> Self {
        Self {
            width: geometry.page_width,
            height: geometry.page_height,
            ops: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn text_ops(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            DrawOp::Line(_) => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.text_ops().map(|t| t.text.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionContent {
    Text(String),
    List(Vec<String>),
    Missing,
}

impl SectionContent {
    /// Any non-string scalar becomes `Missing`; non-string list items become the placeholder.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => SectionContent::Text(s.clone()),
            Value::Array(items) => SectionContent::List(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        _ => PLACEHOLDER.to_string(),
                    })
                    .collect(),
            ),
            _ => SectionContent::Missing,
        }
    }
}

impl From<&str> for SectionContent {
    fn from(text: &str) -> Self {
        SectionContent::Text(text.to_string())
    }
}

impl From<String> for SectionContent {
    fn from(text: String) -> Self {
        SectionContent::Text(text)
    }
}

impl From<Vec<String>> for SectionContent {
    fn from(items: Vec<String>) -> Self {
        SectionContent::List(items)
    }
}

#[derive(Deserialize)]
struct RawSection {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    priority: Value,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawSection")]
pub struct Section {
    pub title: Option<String>,
    pub content: SectionContent,
    /// Carried along with the content; layout does not consult it.
    pub priority: Option<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<SectionContent>) -> Self {
        Self {
            title: Some(title.into()),
            content: content.into(),
            priority: None,
        }
    }

    pub fn untitled(content: impl Into<SectionContent>) -> Self {
        Self {
            title: None,
            content: content.into(),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        let text = |v: Value| match v {
            Value::String(s) => Some(s),
            _ => None,
        };
        Self {
            title: text(raw.title),
            content: SectionContent::from_value(&raw.content),
            priority: text(raw.priority),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignatureRole {
    Creator,
    Chairperson,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignatureBlock {
    pub name: String,
    pub date: String,
    pub signed: bool,
    pub role: SignatureRole,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signatures {
    pub creator: Option<SignatureBlock>,
    pub chairperson: Option<SignatureBlock>,
}
