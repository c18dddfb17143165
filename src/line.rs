//! Line classification.
//!
//! Each physical line is run through an ordered list of checks and the first one that
//! recognises the line wins. The order is the grammar: a `[/]` line is never a header, a header
//! is never a chord line, and any line starting with `|` is a chord line regardless of what
//! follows. Classification never looks at neighbouring lines.

use crate::document::LineKind;

/// Word that may pad a chord sequence without ending it.
const FILLER: &str = "break";

/// Quality words accepted after a chord root, longest first.
const QUALITY_WORDS: [&str; 8] = ["maj", "min", "dim", "aug", "sus", "add", "m", "M"];

const DELTA: [char; 2] = ['Δ', '∆'];

/// Result of classifying one physical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    /// `[/]`: closes the current section.
    Close,
    /// `[label]`, `[label]*`, optionally followed by content on the same line.
    Header {
        label: &'a str,
        border: bool,
        inline: Option<&'a str>,
    },
    Line(LineKind),
}

type Check = for<'a> fn(&'a str) -> Option<Classified<'a>>;

/// Applied in order; the first `Some` decides.
const CHECKS: [Check; 5] = [close_marker, header, empty, chord, lyrics];

/// Classify one physical line.
pub fn classify(line: &str) -> Classified<'_> {
    CHECKS
        .iter()
        .find_map(|check| check(line))
        .unwrap_or(Classified::Line(LineKind::Lyrics))
}

/// Classify text already known to be content (never a header or empty), such as the
/// trailing content of a header line.
pub fn classify_content(text: &str) -> LineKind {
    if chord(text).is_some() {
        LineKind::Chord
    } else {
        LineKind::Lyrics
    }
}

fn close_marker(line: &str) -> Option<Classified<'_>> {
    (line.trim() == "[/]").then_some(Classified::Close)
}

fn header(line: &str) -> Option<Classified<'_>> {
    let rest = line.trim().strip_prefix('[')?;
    let close = rest.find(']')?;
    let label = rest[..close].trim();
    if label.is_empty() || label == "/" {
        return None;
    }

    let after = &rest[close + 1..];
    let (border, after) = match after.strip_prefix('*') {
        Some(after) => (true, after),
        None => (false, after),
    };
    let inline = after.trim();

    Some(Classified::Header {
        label,
        border,
        inline: (!inline.is_empty()).then_some(inline),
    })
}

fn empty(line: &str) -> Option<Classified<'_>> {
    line.trim()
        .is_empty()
        .then_some(Classified::Line(LineKind::Empty))
}

fn chord(line: &str) -> Option<Classified<'_>> {
    (line.trim_start().starts_with('|') || is_chord_sequence(line))
        .then_some(Classified::Line(LineKind::Chord))
}

fn lyrics(_line: &str) -> Option<Classified<'_>> {
    Some(Classified::Line(LineKind::Lyrics))
}

/// True when the first word that isn't filler looks like a chord symbol.
///
/// Only the leading word is inspected, so a lyric starting with a bare note letter
/// ("A journey in G minor") reads as a chord line. Existing charts depend on this.
fn is_chord_sequence(line: &str) -> bool {
    line.split(|c: char| c.is_whitespace() || c == '|')
        .filter(|word| !word.is_empty())
        .find(|word| *word != FILLER)
        .is_some_and(is_chord_like)
}

/// `C`, `F#m7`, `Bbmaj7`, `Gsus4`, `Dm/F#`, ...
pub fn is_chord_like(word: &str) -> bool {
    let Some(mut rest) = strip_root(word) else {
        return false;
    };
    while let Some(after) = strip_quality_part(rest) {
        rest = after;
    }
    if let Some(bass) = rest.strip_prefix('/') {
        match strip_root(bass) {
            Some(after) => rest = after,
            None => return false,
        }
    }
    rest.is_empty()
}

/// Strip a note letter and optional accidental.
fn strip_root(s: &str) -> Option<&str> {
    let rest = s.strip_prefix(|c: char| matches!(c, 'A'..='G'))?;
    Some(rest.strip_prefix(['#', 'b']).unwrap_or(rest))
}

fn strip_quality_part(s: &str) -> Option<&str> {
    if let Some(rest) = QUALITY_WORDS.iter().find_map(|word| s.strip_prefix(word)) {
        return Some(rest);
    }
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        return Some(&s[digits..]);
    }
    s.strip_prefix(DELTA)
}
