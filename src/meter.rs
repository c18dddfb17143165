//! Time signatures.
//!
//! A bare `3/4` or `12/8` in a line becomes a stacked two-digit glyph. Digits directly after a
//! note letter or accidental are left alone so slash chords and extensions (`C7/9`, `Bb/D`) keep
//! their meaning. Outside chord lines a note letter directly after the bottom number also rules
//! the match out.

use crate::chord;
use crate::document::LineKind;
use crate::inline;
use crate::layout::Segment;

/// Numerator over denominator, each one or two ASCII digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSignatureToken {
    pub top: String,
    pub bottom: String,
}

/// Split a line into time signatures and everything else.
///
/// Text between time signatures goes through the chord transform on chord lines and through
/// the inline formatter on all other lines.
pub fn compose(text: &str, kind: LineKind) -> Vec<Segment> {
    let on_chord_line = kind == LineKind::Chord;
    let route = |segments: &mut Vec<Segment>, text: &str| {
        if text.is_empty() {
            return;
        }
        if on_chord_line {
            segments.extend(chord::split_chords(text));
        } else {
            segments.push(Segment::Text(inline::format(text)));
        }
    };

    let mut segments = Vec::new();
    let mut rest_start = 0;
    for (start, end, token) in find_time_signatures(text, !on_chord_line) {
        route(&mut segments, &text[rest_start..start]);
        segments.push(Segment::TimeSignature(token));
        rest_start = end;
    }
    route(&mut segments, &text[rest_start..]);

    segments
}

/// All non-overlapping time signatures, left to right, with their byte ranges.
///
/// `guard_following` additionally rejects a match followed by a note letter.
pub fn find_time_signatures(
    text: &str,
    guard_following: bool,
) -> Vec<(usize, usize, TimeSignatureToken)> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        match match_at(text, pos, guard_following) {
            Some((end, token)) => {
                found.push((pos, end, token));
                pos = end;
            }
            None => pos += text[pos..].chars().next().map_or(1, char::len_utf8),
        }
    }

    found
}

fn is_note_letter(c: char) -> bool {
    matches!(c, 'A'..='G')
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn match_at(text: &str, pos: usize, guard_following: bool) -> Option<(usize, TimeSignatureToken)> {
    let preceded_by_chord = text[..pos]
        .chars()
        .next_back()
        .is_some_and(|c| is_note_letter(c) || c == '#' || c == 'b');
    if preceded_by_chord {
        return None;
    }

    let top_len = digit_run(&text[pos..]);
    if !(1..=2).contains(&top_len) {
        return None;
    }
    let slash = pos + top_len;
    if !text[slash..].starts_with('/') {
        return None;
    }

    let bottom_start = slash + 1;
    let available = digit_run(&text[bottom_start..]).min(2);
    // shorter bottom first retried only when the longer one is followed by a note letter
    let bottom_len = (1..=available).rev().find(|&len| {
        !guard_following
            || !text[bottom_start + len..]
                .chars()
                .next()
                .is_some_and(is_note_letter)
    })?;
    let end = bottom_start + bottom_len;

    Some((
        end,
        TimeSignatureToken {
            top: text[pos..slash].to_string(),
            bottom: text[bottom_start..end].to_string(),
        },
    ))
}
