//! Chord superscripts.
//!
//! On a chord line every chord with a quality suffix (`Asus4`, `Cmaj7`, `F#m7`) is split into a
//! root drawn at full size and a suffix drawn smaller and raised. The renderer reserves the
//! width of the whole original token first, so the chord still occupies exactly as many columns
//! as it did in the source and stays over the right lyric syllable.

use crate::inline;
use crate::layout::Segment;

/// A chord split into full-size root and superscript suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    /// Note letter, accidental and a bare minor `m`.
    pub root: String,
    pub suffix: String,
    /// Always `root + suffix`.
    pub original_text: String,
}

impl ChordToken {
    fn new(root: &str, suffix: &str) -> Self {
        Self {
            root: root.to_string(),
            suffix: suffix.to_string(),
            original_text: format!("{root}{suffix}"),
        }
    }

    /// Columns the chord occupies in the source line.
    pub fn width(&self) -> usize {
        self.original_text.chars().count()
    }
}

/// Split chord-line text into chords and formatted text between them.
pub fn split_chords(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some((root_len, suffix_len)) = match_chord(&text[pos..]) {
            push_text(&mut segments, &text[plain_start..pos]);
            let root_end = pos + root_len;
            let end = root_end + suffix_len;
            segments.push(Segment::Chord(ChordToken::new(
                &text[pos..root_end],
                &text[root_end..end],
            )));
            pos = end;
            plain_start = end;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }
    push_text(&mut segments, &text[plain_start..]);

    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Text(inline::format(text)));
    }
}

/// Byte lengths of root and suffix for a chord starting at the beginning of `s`.
fn match_chord(s: &str) -> Option<(usize, usize)> {
    let after_letter = s.strip_prefix(|c: char| matches!(c, 'A'..='G'))?;
    let after_accidental = after_letter
        .strip_prefix(['#', 'b'])
        .unwrap_or(after_letter);
    let letter_len = s.len() - after_accidental.len();

    // A bare minor `m` belongs to the root, unless it starts `maj`. If no suffix follows the
    // `m`, retry with the `m` read as part of the suffix (`Cmin7`).
    if let Some(after_minor) = after_accidental.strip_prefix('m') {
        if !after_minor.starts_with("aj") {
            if let Some(suffix_len) = match_suffix(after_minor) {
                return Some((letter_len + 1, suffix_len));
            }
        }
    }
    match_suffix(after_accidental).map(|suffix_len| (letter_len, suffix_len))
}

/// One alternative of the quality suffix.
enum Quality {
    /// A word, optionally followed by one of the given characters (`sus` + `2`/`4`).
    Word(&'static str, &'static [char]),
    /// A word followed by at least one digit (`add9`).
    Numbered(&'static str),
    /// The delta major-seventh symbol, optionally followed by `7`.
    Delta,
}

/// Tried in order; the first alternative that matches is the suffix.
const QUALITIES: [Quality; 13] = [
    Quality::Word("sus", &['2', '4']),
    Quality::Word("maj", &['7']),
    Quality::Word("min", &['7']),
    Quality::Word("dim", &['7']),
    Quality::Word("aug", &[]),
    Quality::Numbered("add"),
    Quality::Word("7", &[]),
    Quality::Word("9", &[]),
    Quality::Word("11", &[]),
    Quality::Word("13", &[]),
    Quality::Word("6", &[]),
    Quality::Word("M7", &[]),
    Quality::Delta,
];

/// Byte length of the quality suffix at the start of `s`.
fn match_suffix(s: &str) -> Option<usize> {
    QUALITIES.iter().find_map(|quality| quality.match_len(s))
}

impl Quality {
    fn match_len(&self, s: &str) -> Option<usize> {
        const NONE: &[char] = &[];
        const SEVEN: &[char] = &['7'];

        let (rest, optional) = match *self {
            Quality::Word(word, optional) => (s.strip_prefix(word)?, optional),
            Quality::Numbered(word) => {
                let rest = s.strip_prefix(word)?;
                let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                if digits == 0 {
                    return None;
                }
                (&rest[digits..], NONE)
            }
            Quality::Delta => (s.strip_prefix(['Δ', '∆'])?, SEVEN),
        };
        let extra = rest
            .chars()
            .next()
            .filter(|c| optional.contains(c))
            .map_or(0, char::len_utf8);
        Some(s.len() - rest.len() + extra)
    }
}
