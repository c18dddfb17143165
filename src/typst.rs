use crate::config::Config;
use crate::document::{LineKind, Span};
use crate::layout::{RenderedChart, RenderedLine, RenderedSection, Segment};

/// Convert a rendered chart to Typst markup
pub fn rendered_to_typst(chart: &RenderedChart, config: &Config) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "#set text(font: \"{}\", size: {})\n",
        config.font.family, config.font.size
    ));
    out.push_str("#set par(leading: 0.55em)\n\n");

    for section in &chart.sections {
        emit_section(section, config, &mut out);
    }

    log::debug!("emitted {} bytes of typst", out.len());
    out
}

fn emit_section(section: &RenderedSection, config: &Config, out: &mut String) {
    // Keep a section on one page; bordered sections get their box
    if section.has_border {
        out.push_str(&format!(
            "#block(stroke: {}, inset: {}, breakable: false)[\n",
            config.sections.border_stroke, config.sections.border_inset
        ));
    } else {
        out.push_str("#block(breakable: false)[\n");
    }

    let mut rows: Vec<String> = Vec::with_capacity(section.lines.len() + 1);
    let mut lines = section.lines.iter().peekable();

    if let Some(label) = &section.label {
        let mut row = format!(
            "#text(weight: \"bold\", fill: rgb(\"{}\"))[",
            config.sections.label_color
        );
        LineWriter::new(&mut row, config).push_text(label);
        row.push(']');

        if let Some(line) = lines.next_if(|line| line.inline_after_label) {
            row.push(' ');
            emit_line(line, config, &mut row);
        }
        rows.push(row);
    }

    for line in lines {
        let mut row = String::new();
        emit_line(line, config, &mut row);
        rows.push(row);
    }

    out.push_str(&rows.join(" \\\n"));
    out.push_str("\n]\n\n");
}

fn emit_line(line: &RenderedLine, config: &Config, out: &mut String) {
    match line.kind {
        LineKind::Empty => out.push('~'),
        LineKind::Chord => {
            out.push_str(&format!("#text(fill: rgb(\"{}\")", config.chords.color));
            if config.chords.bold {
                out.push_str(", weight: \"bold\"");
            }
            out.push_str(")[");
            emit_segments(&line.segments, config, out);
            out.push(']');
        }
        LineKind::Lyrics => emit_segments(&line.segments, config, out),
    }
}

fn emit_segments(segments: &[Segment], config: &Config, out: &mut String) {
    let mut writer = LineWriter::new(out, config);
    for segment in segments {
        writer.segment(segment);
    }
}

/// Writes one line of markup, tracking the source column so tabs land on tab stops.
struct LineWriter<'a> {
    out: &'a mut String,
    config: &'a Config,
    column: usize,
}

impl<'a> LineWriter<'a> {
    fn new(out: &'a mut String, config: &'a Config) -> Self {
        Self {
            out,
            config,
            column: 0,
        }
    }

    fn segment(&mut self, segment: &Segment) {
        match segment {
            Segment::Text(spans) => {
                for span in spans {
                    self.span(span);
                }
            }
            Segment::Chord(token) => {
                // Invisible full chord holds the width; root and raised suffix overlay it
                self.out.push_str("#box[#hide[");
                self.push_text(&token.original_text);
                self.out.push_str("]#place(top + left)[");
                self.push_escaped(&token.root);
                self.out.push_str(&format!(
                    "#text(size: {}em, baseline: -{})[",
                    self.config.chords.suffix_scale, self.config.chords.suffix_raise
                ));
                self.push_escaped(&token.suffix);
                self.out.push_str("]]]");
            }
            Segment::TimeSignature(token) => {
                // Same reservation as chords: the hidden `N/M` keeps the source columns
                self.out.push_str("#box[#hide[");
                self.push_text(&format!("{}/{}", token.top, token.bottom));
                let scale = self.config.time_signature.digit_scale;
                self.out.push_str(&format!(
                    "]#place(top + left)[#box(baseline: {})[#stack(dir: ttb, text(size: {scale}em)[{}], text(size: {scale}em)[{}])]]]",
                    self.config.time_signature.baseline, token.top, token.bottom
                ));
            }
        }
    }

    fn span(&mut self, span: &Span) {
        let (open, inner) = match span {
            Span::Plain(text) => {
                self.push_text(text);
                return;
            }
            Span::Bold(inner) => ("#strong[".to_string(), inner),
            Span::Italic(inner) => ("#emph[".to_string(), inner),
            Span::Underline(inner) => ("#underline[".to_string(), inner),
            Span::Shrink(inner) => (format!("#text(size: {}em)[", self.config.shrink.scale), inner),
        };
        self.out.push_str(&open);
        for child in inner {
            self.span(child);
        }
        self.out.push(']');
    }

    /// Escaped text that advances the column; spaces become non-breaking so runs of them
    /// keep their width.
    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                ' ' => {
                    self.out.push('~');
                    self.column += 1;
                }
                '\t' => {
                    let tab_width = self.config.font.tab_width.max(1);
                    let fill = tab_width - self.column % tab_width;
                    for _ in 0..fill {
                        self.out.push('~');
                    }
                    self.column += fill;
                }
                _ => {
                    push_escaped_char(ch, self.out);
                    self.column += 1;
                }
            }
        }
    }

    /// Escaped text drawn over space that is already reserved.
    fn push_escaped(&mut self, text: &str) {
        for ch in text.chars() {
            push_escaped_char(ch, self.out);
        }
    }
}

fn push_escaped_char(ch: char, out: &mut String) {
    // Escape markup characters, including shorthand starters like `--` and `...`.
    // `(` right after a `]` would otherwise call the preceding content.
    match ch {
        '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '~' | '/' | '='
        | '-' | '+' | '.' | '(' => {
            out.push('\\');
            out.push(ch);
        }
        _ => out.push(ch),
    }
}
