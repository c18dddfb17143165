//! Property-based tests for the chart pipeline
//!
//! Uses proptest to check the parser and transforms keep their invariants on arbitrary charts.

use chordsheet::{chord, inline, parse, render, LineKind, Segment, Span};
use proptest::prelude::*;

/// Lines a chart author might write, plus noise
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        // Chord rows
        "\\|( *[A-G][#b]?(m|maj7|sus4|7|add9|dim)? *\\|){1,6}",
        // Lyrics with emphasis markers
        "[a-zA-Z ,'*_~]{0,40}",
        // Headers and close markers
        "\\[[a-z]{1,8}\\]\\*?( [a-zA-Z|]{0,12})?",
        Just("[/]".to_string()),
        // Meters and slash chords
        "[0-9]{1,3}/[0-9]{1,3}( [A-G]b?/[A-G])?",
        Just(String::new()),
    ]
}

fn arb_chart() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_line(), 0..30)
}

fn is_structural(line: &str) -> bool {
    matches!(
        chordsheet::line::classify(line),
        chordsheet::line::Classified::Close | chordsheet::line::Classified::Header { .. }
    )
}

proptest! {
    /// Parsing is a pure function of the text
    #[test]
    fn parsing_is_deterministic(lines in arb_chart()) {
        let text = lines.join("\n");
        prop_assert_eq!(parse(&text), parse(&text));
        prop_assert_eq!(render(&text), render(&text));
    }

    /// Every non-header line comes back exactly once, in order
    #[test]
    fn content_lines_are_preserved(lines in arb_chart()) {
        let text = lines.join("\n");
        let doc = parse(&text);

        let parsed: Vec<&str> = doc
            .lines()
            .filter(|line| !line.inline_after_label)
            .map(|line| line.text.as_str())
            .collect();
        let expected: Vec<&str> = text
            .lines()
            .filter(|line| !is_structural(line))
            .collect();
        prop_assert_eq!(parsed, expected);
    }

    /// No emitted section is empty
    #[test]
    fn sections_are_never_empty(lines in arb_chart()) {
        let doc = parse(&lines.join("\n"));
        for section in &doc.sections {
            prop_assert!(section.label.is_some() || !section.lines.is_empty());
        }
    }

    /// Splitting a chord never changes its length
    #[test]
    fn chord_tokens_keep_their_length(text in "[A-Gb#msuajdi0-9|Δ ]{0,40}") {
        for segment in chord::split_chords(&text) {
            if let Segment::Chord(token) = segment {
                prop_assert_eq!(
                    token.root.chars().count() + token.suffix.chars().count(),
                    token.original_text.chars().count()
                );
                prop_assert_eq!(format!("{}{}", token.root, token.suffix), token.original_text);
            }
        }
    }

    /// Chord lines keep their column count after superscripting
    #[test]
    fn chord_lines_keep_their_width(row in "\\|( *[A-G][#b]?(m7|maj7|sus4|add9|13|6) *\\|){1,6}") {
        let rendered = render(&row);
        let line = &rendered.sections[0].lines[0];
        prop_assert_eq!(line.kind, LineKind::Chord);
        prop_assert_eq!(line.width(), row.chars().count());
    }

    /// Formatting only ever removes marker characters
    #[test]
    fn formatting_keeps_visible_text(text in "[a-z *_~]{0,40}") {
        let visible: String = inline::format(&text).iter().map(Span::visible_text).collect();
        let strip = |s: &str| s.chars().filter(|c| !matches!(c, '*' | '_' | '~')).collect::<String>();
        prop_assert_eq!(strip(&visible), strip(&text));
    }
}
