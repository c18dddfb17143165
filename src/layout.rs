//! Render tree.
//!
//! [`render`] turns a [`Document`] into drawing instructions: every line becomes a row of
//! segments that a backend draws left to right. A [`Segment::Chord`] must occupy exactly
//! [`ChordToken::width`] columns however its suffix is drawn.

use crate::chord::ChordToken;
use crate::document::{Document, Line, LineKind, Section, Span};
use crate::meter::{self, TimeSignatureToken};

/// One drawing instruction within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Formatted text, drawn as is.
    Text(Vec<Span>),
    /// Reserve the chord's full width, draw the root at normal size and the suffix smaller and
    /// raised, both from the reserved box's left edge.
    Chord(ChordToken),
    /// Two digits stacked in a single column.
    TimeSignature(TimeSignatureToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: LineKind,
    pub inline_after_label: bool,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub label: Option<String>,
    pub has_border: bool,
    pub lines: Vec<RenderedLine>,
}

/// A whole chart ready to draw
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedChart {
    pub sections: Vec<RenderedSection>,
}

/// Compute drawing instructions for every line of a document.
pub fn render(document: &Document) -> RenderedChart {
    let sections: Vec<RenderedSection> = document.sections.iter().map(render_section).collect();
    log::debug!(
        "rendered {} sections, {} lines",
        sections.len(),
        sections.iter().map(|s| s.lines.len()).sum::<usize>()
    );
    RenderedChart { sections }
}

fn render_section(section: &Section) -> RenderedSection {
    RenderedSection {
        label: section.label.clone(),
        has_border: section.has_border,
        lines: section.lines.iter().map(render_line).collect(),
    }
}

/// Drawing instructions for a single line.
pub fn render_line(line: &Line) -> RenderedLine {
    let segments = match line.kind {
        LineKind::Empty => Vec::new(),
        kind => meter::compose(&line.text, kind),
    };
    RenderedLine {
        kind: line.kind,
        inline_after_label: line.inline_after_label,
        segments,
    }
}

impl RenderedLine {
    /// Columns the line occupies in a monospace grid, counting each time signature
    /// by its `N/M` source text.
    pub fn width(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(spans) => spans
                    .iter()
                    .map(|span| span.visible_text().chars().count())
                    .sum(),
                Segment::Chord(token) => token.width(),
                Segment::TimeSignature(token) => {
                    token.top.chars().count() + 1 + token.bottom.chars().count()
                }
            })
            .sum()
    }
}
