/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Underline(Vec<Span>),
    /// Smaller text; the only span that may itself contain styled children.
    Shrink(Vec<Span>),
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    /// The text a reader sees, with all markers removed.
    pub fn visible_text(&self) -> String {
        match self {
            Span::Plain(text) => text.clone(),
            Span::Bold(inner) | Span::Italic(inner) | Span::Underline(inner) | Span::Shrink(inner) => {
                inner.iter().map(Span::visible_text).collect()
            }
        }
    }
}

/// What a physical line holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Chord,
    Lyrics,
    Empty,
}

/// A single classified line of a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
    /// Set when the line came from the trailing content of a `[label]` header.
    pub inline_after_label: bool,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            inline_after_label: false,
        }
    }
}

/// A labeled or unlabeled run of lines, optionally boxed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub label: Option<String>,
    pub has_border: bool,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.lines.is_empty()
    }
}

/// The parse result for one block of chart text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    /// All lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(|section| section.lines.iter())
    }
}
