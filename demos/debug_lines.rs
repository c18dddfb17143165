fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "demos/sample_chart.txt".to_string());
    let chart = std::fs::read_to_string(&path).unwrap();
    let rendered = chordsheet::render(&chart);

    for section in &rendered.sections {
        let label = section.label.as_deref().unwrap_or("-");
        println!(
            "{:30} border={} -> {} lines",
            label.chars().take(30).collect::<String>(),
            section.has_border,
            section.lines.len()
        );

        for line in &section.lines {
            let chords = line
                .segments
                .iter()
                .filter(|segment| matches!(segment, chordsheet::Segment::Chord(_)))
                .count();
            println!(
                "    {:?} width={} superscripts={} text={:?}",
                line.kind,
                line.width(),
                chords,
                line_text(line)
            );
        }
    }
}

fn line_text(line: &chordsheet::RenderedLine) -> String {
    line.segments.iter().map(segment_text).collect()
}

fn segment_text(segment: &chordsheet::Segment) -> String {
    match segment {
        chordsheet::Segment::Text(spans) => spans.iter().map(chordsheet::Span::visible_text).collect(),
        chordsheet::Segment::Chord(token) => token.original_text.clone(),
        chordsheet::Segment::TimeSignature(sig) => format!("{}/{}", sig.top, sig.bottom),
    }
}
