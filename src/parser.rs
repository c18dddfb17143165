use crate::document::{Document, Line, Section};
use crate::line::{self, Classified};

/// Parse chart text into sections of classified lines
pub fn parse(text: &str) -> Document {
    let mut state = ParseState::default();
    let mut sections = Vec::new();

    // `lines` drops the `\r` of CRLF input and the empty tail after a final newline
    for raw in text.lines() {
        let signal = line::classify(raw);
        log::trace!("{signal:?} <- {raw:?}");
        process_signal(signal, raw, &mut state, &mut sections);
    }
    state.flush(&mut sections);

    log::debug!("parsed {} sections", sections.len());
    Document { sections }
}

#[derive(Default)]
struct ParseState {
    // Section currently being filled
    current: Section,
}

impl ParseState {
    /// Emit the current section if it holds anything and start an empty one.
    fn flush(&mut self, sections: &mut Vec<Section>) {
        let section = std::mem::take(&mut self.current);
        if !section.is_empty() {
            sections.push(section);
        }
    }
}

fn process_signal(
    signal: Classified<'_>,
    raw: &str,
    state: &mut ParseState,
    sections: &mut Vec<Section>,
) {
    match signal {
        Classified::Header {
            label,
            border,
            inline,
        } => {
            state.flush(sections);
            state.current.label = Some(label.to_string());
            state.current.has_border = border;

            if let Some(content) = inline {
                let mut line = Line::new(line::classify_content(content), content);
                line.inline_after_label = true;
                state.current.lines.push(line);
            }
        }

        Classified::Close => {
            state.flush(sections);
        }

        Classified::Line(kind) => {
            state.current.lines.push(Line::new(kind, raw));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LineKind;

    fn kinds(section: &Section) -> Vec<LineKind> {
        section.lines.iter().map(|line| line.kind).collect()
    }

    #[test]
    fn unlabeled_chart() {
        let doc = parse("|C      |G   F   |C      |\nI see a bad moon arising");
        assert_eq!(doc.sections.len(), 1);
        let section = &doc.sections[0];
        assert_eq!(section.label, None);
        assert!(!section.has_border);
        assert_eq!(kinds(section), vec![LineKind::Chord, LineKind::Lyrics]);
    }

    #[test]
    fn bordered_section() {
        let doc = parse("[chorus]*\n|Am|Dm|G|C|\nHello");
        assert_eq!(doc.sections.len(), 1);
        let section = &doc.sections[0];
        assert_eq!(section.label.as_deref(), Some("chorus"));
        assert!(section.has_border);
        assert_eq!(kinds(section), vec![LineKind::Chord, LineKind::Lyrics]);
    }

    #[test]
    fn close_marker_starts_fresh_section() {
        let doc = parse("[/]\nPlain text");
        assert_eq!(doc.sections.len(), 1);
        let section = &doc.sections[0];
        assert_eq!(section.label, None);
        assert!(!section.has_border);
        assert_eq!(kinds(section), vec![LineKind::Lyrics]);
    }

    #[test]
    fn header_starts_new_section() {
        let doc = parse("intro words\n[verse]\nline one\n[chorus]*\nline two\n[/]\noutro");
        let labels: Vec<Option<&str>> = doc
            .sections
            .iter()
            .map(|section| section.label.as_deref())
            .collect();
        assert_eq!(labels, vec![None, Some("verse"), Some("chorus"), None]);
        assert_eq!(
            doc.sections.iter().map(|s| s.has_border).collect::<Vec<_>>(),
            vec![false, false, true, false]
        );
    }

    #[test]
    fn label_without_lines_is_kept() {
        let doc = parse("[bridge]\n[outro]");
        assert_eq!(doc.sections.len(), 2);
        assert!(doc.sections.iter().all(|section| section.lines.is_empty()));
    }

    #[test]
    fn inline_content_after_label() {
        let doc = parse("[intro]* |G |D |\n[verse] Walking down the road");
        let intro = &doc.sections[0].lines[0];
        assert_eq!(intro.kind, LineKind::Chord);
        assert_eq!(intro.text, "|G |D |");
        assert!(intro.inline_after_label);

        let verse = &doc.sections[1].lines[0];
        assert_eq!(verse.kind, LineKind::Lyrics);
        assert_eq!(verse.text, "Walking down the road");
    }

    #[test]
    fn repeated_close_markers_emit_nothing() {
        let doc = parse("[/]\n[/]\n");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn lines_keep_their_indentation() {
        let doc = parse("    |C   |G   |\r\n      Oh my\r\n");
        let texts: Vec<&str> = doc.lines().map(|line| line.text.as_str()).collect();
        assert_eq!(texts, vec!["    |C   |G   |", "      Oh my"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        let doc = parse("Hello\n");
        let kinds: Vec<LineKind> = doc.lines().map(|line| line.kind).collect();
        assert_eq!(kinds, vec![LineKind::Lyrics]);
    }

    #[test]
    fn empty_input() {
        assert!(parse("").sections.is_empty());
    }
}
