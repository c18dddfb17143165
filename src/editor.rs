//! Editor state for authoring a chart with a live preview.
//!
//! The source text is the only real state. The parsed document and its render tree are
//! recomputed synchronously on every change; parsing is linear in the text, so there is no
//! debounce and no background work.

use serde::Deserialize;

use crate::config::Config;
use crate::document::Document;
use crate::layout::{self, RenderedChart};
use crate::parser;
use crate::song::SongRecord;

/// Which panes are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    EditOnly,
    #[default]
    Split,
    PreviewOnly,
}

impl ViewMode {
    pub fn shows_source(self) -> bool {
        self != ViewMode::PreviewOnly
    }

    pub fn shows_preview(self) -> bool {
        self != ViewMode::EditOnly
    }

    /// Edit → split → preview → edit.
    pub fn next(self) -> Self {
        match self {
            ViewMode::EditOnly => ViewMode::Split,
            ViewMode::Split => ViewMode::PreviewOnly,
            ViewMode::PreviewOnly => ViewMode::EditOnly,
        }
    }
}

/// Scroll position of a pane, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// How far down the pane is scrolled, from 0.0 to 1.0.
    pub fn ratio(&self) -> f64 {
        let range = self.max_scroll();
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }

    /// The `scroll_top` that puts this pane at `ratio`.
    pub fn top_for_ratio(&self, ratio: f64) -> f64 {
        ratio * self.max_scroll()
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    source: String,
    view_mode: ViewMode,
    fullscreen: bool,
    document: Document,
    rendered: RenderedChart,
}

impl Editor {
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_view_mode(source, ViewMode::default())
    }

    /// Start in the view mode the config asks for.
    pub fn with_config(source: impl Into<String>, config: &Config) -> Self {
        Self::with_view_mode(source, config.editor.view_mode)
    }

    /// Open a stored song for editing.
    pub fn from_song(song: &impl SongRecord, config: &Config) -> Self {
        Self::with_config(song.music_text(), config)
    }

    fn with_view_mode(source: impl Into<String>, view_mode: ViewMode) -> Self {
        let mut editor = Self {
            source: source.into(),
            view_mode,
            fullscreen: false,
            document: Document::default(),
            rendered: RenderedChart::default(),
        };
        editor.refresh();
        editor
    }

    /// The text exactly as typed; this is what gets stored.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn rendered(&self) -> &RenderedChart {
        &self.rendered
    }

    /// Replace the whole source text.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.refresh();
    }

    /// Insert `text` at byte offset `cursor` and return the cursor after the insertion.
    ///
    /// A cursor past the end or inside a character is moved back to the nearest boundary.
    pub fn insert(&mut self, cursor: usize, text: &str) -> usize {
        let at = self.char_boundary_at_or_before(cursor);
        self.source.insert_str(at, text);
        self.refresh();
        at + text.len()
    }

    /// The tab key: a literal tab at the cursor instead of a focus change.
    pub fn insert_tab(&mut self, cursor: usize) -> usize {
        self.insert(cursor, "\t")
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn cycle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.next();
        self.view_mode
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// New `scroll_top` for the preview after the source pane scrolled.
    ///
    /// Only the split view syncs, and only from source to preview.
    pub fn sync_preview_scroll(
        &self,
        source: ScrollMetrics,
        preview: ScrollMetrics,
    ) -> Option<f64> {
        (self.view_mode == ViewMode::Split).then(|| preview.top_for_ratio(source.ratio()))
    }

    /// The preview as Typst markup.
    pub fn to_typst(&self, config: &Config) -> String {
        crate::typst::rendered_to_typst(&self.rendered, config)
    }

    fn char_boundary_at_or_before(&self, cursor: usize) -> usize {
        let mut at = cursor.min(self.source.len());
        while !self.source.is_char_boundary(at) {
            at -= 1;
        }
        at
    }

    fn refresh(&mut self) {
        self.document = parser::parse(&self.source);
        self.rendered = layout::render(&self.document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LineKind;

    #[test]
    fn every_edit_reparses() {
        let mut editor = Editor::new("Hello");
        assert_eq!(editor.document().sections[0].lines[0].kind, LineKind::Lyrics);

        let cursor = editor.insert(0, "|C |\n");
        assert_eq!(cursor, 5);
        assert_eq!(editor.source(), "|C |\nHello");
        assert_eq!(editor.document().sections[0].lines[0].kind, LineKind::Chord);
        assert_eq!(editor.rendered().sections[0].lines.len(), 2);
    }

    #[test]
    fn tab_is_inserted_literally() {
        let mut editor = Editor::new("ab");
        let cursor = editor.insert_tab(1);
        assert_eq!(editor.source(), "a\tb");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn cursor_snaps_to_char_boundary() {
        let mut editor = Editor::new("é");
        // byte 1 is inside the two-byte é
        editor.insert_tab(1);
        assert_eq!(editor.source(), "\té");
        editor.insert_tab(99);
        assert_eq!(editor.source(), "\té\t");
    }

    #[test]
    fn source_is_never_normalized() {
        let text = "[verse]  \r\n  |C  |\t\n\n";
        let editor = Editor::new(text);
        assert_eq!(editor.source(), text);
        assert_eq!(editor.into_source(), text);
    }

    #[test]
    fn scroll_ratio_carries_to_preview() {
        let editor = Editor::new("");
        let source = ScrollMetrics::new(150.0, 1000.0, 400.0);
        let preview = ScrollMetrics::new(0.0, 2400.0, 400.0);
        assert_eq!(editor.sync_preview_scroll(source, preview), Some(500.0));
    }

    #[test]
    fn unscrollable_source_maps_to_top() {
        let editor = Editor::new("");
        let source = ScrollMetrics::new(0.0, 300.0, 400.0);
        let preview = ScrollMetrics::new(80.0, 2400.0, 400.0);
        assert_eq!(editor.sync_preview_scroll(source, preview), Some(0.0));
    }

    #[test]
    fn scroll_sync_only_in_split_view() {
        let mut editor = Editor::new("");
        let source = ScrollMetrics::new(100.0, 1000.0, 400.0);
        let preview = ScrollMetrics::new(0.0, 1000.0, 400.0);
        editor.set_view_mode(ViewMode::PreviewOnly);
        assert_eq!(editor.sync_preview_scroll(source, preview), None);
    }

    #[test]
    fn view_modes_cycle() {
        let mut editor = Editor::new("");
        assert_eq!(editor.view_mode(), ViewMode::Split);
        assert_eq!(editor.cycle_view_mode(), ViewMode::PreviewOnly);
        assert!(!editor.view_mode().shows_source());
        assert_eq!(editor.cycle_view_mode(), ViewMode::EditOnly);
        assert!(!editor.view_mode().shows_preview());
        assert_eq!(editor.cycle_view_mode(), ViewMode::Split);
    }

    #[test]
    fn fullscreen_toggles() {
        let mut editor = Editor::new("");
        assert!(!editor.is_fullscreen());
        assert!(editor.toggle_fullscreen());
        assert!(!editor.toggle_fullscreen());
    }

    #[test]
    fn config_picks_initial_view() {
        let mut config = Config::default();
        config.editor.view_mode = ViewMode::EditOnly;
        assert_eq!(Editor::with_config("", &config).view_mode(), ViewMode::EditOnly);
    }
}
