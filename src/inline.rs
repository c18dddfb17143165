//! Inline emphasis.
//!
//! Two passes over a line's text. The outer pass cuts out `~smaller~` blocks; everything inside
//! and outside those blocks then goes through the inner pass, which resolves `**bold**`,
//! `*italic*` and `_underline_`. Shrink is therefore always the outermost wrapper: underline can
//! sit inside a shrink, never the other way round. Markers without a partner are plain text.

use crate::document::Span;

/// A paired marker and the span it produces.
#[derive(Clone, Copy)]
struct Marker {
    delim: &'static str,
    wrap: fn(Vec<Span>) -> Span,
}

const SHRINK: Marker = Marker {
    delim: "~",
    wrap: Span::Shrink,
};

/// Inner markers, in priority order for matches starting at the same position.
const EMPHASIS: [Marker; 3] = [
    Marker {
        delim: "**",
        wrap: Span::Bold,
    },
    Marker {
        delim: "*",
        wrap: Span::Italic,
    },
    Marker {
        delim: "_",
        wrap: Span::Underline,
    },
];

/// Resolve emphasis markers in `text` into spans.
pub fn format(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some((start, inner, end)) = find_pair(rest, SHRINK) {
        spans.extend(format_emphasis(&rest[..start]));
        spans.push((SHRINK.wrap)(format_emphasis(inner)));
        rest = &rest[end..];
    }
    spans.extend(format_emphasis(rest));

    spans
}

/// The inner pass: bold, italic and underline, contents kept as plain text.
fn format_emphasis(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some((marker, start, inner, end)) = earliest_emphasis(rest) {
        if start > 0 {
            spans.push(Span::plain(&rest[..start]));
        }
        spans.push((marker.wrap)(vec![Span::plain(inner)]));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        spans.push(Span::plain(rest));
    }

    spans
}

/// Leftmost emphasis match; at equal starts the earlier marker in [`EMPHASIS`] wins.
fn earliest_emphasis(text: &str) -> Option<(Marker, usize, &str, usize)> {
    EMPHASIS
        .iter()
        .filter_map(|&marker| {
            find_pair(text, marker).map(|(start, inner, end)| (marker, start, inner, end))
        })
        .min_by_key(|(_, start, _, _)| *start)
}

/// Leftmost `delim content delim` with the shortest non-empty content.
///
/// Returns the byte offset of the opening delimiter, the content, and the byte offset just past
/// the closing delimiter.
fn find_pair(text: &str, marker: Marker) -> Option<(usize, &str, usize)> {
    let delim = marker.delim;
    let mut search_from = 0;

    while let Some(found) = text[search_from..].find(delim) {
        let open = search_from + found;
        let content_start = open + delim.len();
        // content must hold at least one character
        if let Some(first) = text[content_start..].chars().next() {
            let close_search = content_start + first.len_utf8();
            if let Some(close) = text[close_search..].find(delim) {
                let close = close_search + close;
                return Some((open, &text[content_start..close], close + delim.len()));
            }
        }
        search_from = open + 1;
    }

    None
}
