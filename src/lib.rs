//! Plain-text chord charts to aligned chord/lyrics sheets.
//!
//! ```
//! let doc = chordsheet::parse("[chorus]*\n|Am   |Dsus4 |\nHello again");
//! assert_eq!(doc.sections[0].label.as_deref(), Some("chorus"));
//!
//! let markup = chordsheet::chart_to_typst("|Asus4 |G |\nRing out the bells");
//! assert!(markup.contains("#hide[Asus4]"));
//! ```

pub mod chord;
mod config;
mod document;
pub mod editor;
mod error;
pub mod inline;
pub mod layout;
pub mod line;
pub mod meter;
mod parser;
pub mod song;
mod typst;

pub use chord::ChordToken;
pub use config::{
    ChordConfig, Config, EditorConfig, FontConfig, SectionConfig, ShrinkConfig,
    TimeSignatureConfig,
};
pub use document::{Document, Line, LineKind, Section, Span};
pub use editor::{Editor, ScrollMetrics, ViewMode};
pub use error::ChartError;
pub use layout::{RenderedChart, RenderedLine, RenderedSection, Segment};
pub use meter::TimeSignatureToken;
pub use song::{tempo_bpm, SongRecord};

/// Parse chart text into sections of classified lines.
pub fn parse(text: &str) -> Document {
    parser::parse(text)
}

/// Parse chart text and compute its drawing instructions.
pub fn render(text: &str) -> RenderedChart {
    layout::render(&parse(text))
}

/// Convert chart text to Typst markup using default config.
pub fn chart_to_typst(text: &str) -> String {
    chart_to_typst_with_config(text, &Config::compiled_default())
}

/// Convert chart text to Typst markup with custom config.
pub fn chart_to_typst_with_config(text: &str, config: &Config) -> String {
    typst::rendered_to_typst(&render(text), config)
}
