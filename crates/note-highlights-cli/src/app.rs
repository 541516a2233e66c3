use note_highlights_config::{Config, DEFAULT_MAX_PREVIEW_CHARS, DEFAULT_SCROLL_CONTEXT};
use note_highlights_engine::{
    HighlightEntry, PanelState, PositionRange,
    io::{self, IoError, NoteStamp},
    normalize_range,
    panel::PanelItem,
};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use xi_rope::Rope;

/// Display settings taken from the config file, or defaults without one.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub max_preview_chars: usize,
    pub scroll_context: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_preview_chars: DEFAULT_MAX_PREVIEW_CHARS,
            scroll_context: DEFAULT_SCROLL_CONTEXT,
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            max_preview_chars: config.max_preview_chars,
            scroll_context: config.scroll_context,
        }
    }
}

pub struct App {
    note_path: PathBuf,
    settings: Settings,
    /// Stamp of the note as of the last reload.
    stamp: Option<NoteStamp>,
    pub panel: PanelState,
    pub document: Rope,
    pub list_state: ListState,
    /// Range selected in the document pane by the last jump.
    pub selection: Option<PositionRange>,
    /// First document line shown in the document pane.
    pub scroll: usize,
    pub error: Option<String>,
}

impl App {
    pub fn new(note_path: PathBuf, settings: Settings) -> Self {
        let mut app = Self {
            note_path,
            settings,
            stamp: None,
            panel: PanelState::no_note(),
            document: Rope::from(""),
            list_state: ListState::default(),
            selection: None,
            scroll: 0,
            error: None,
        };
        app.reload();
        app
    }

    /// Re-reads the note from disk and rebuilds the panel from scratch.
    ///
    /// Entries from the previous pass are discarded; the list selection keeps
    /// its index when the new pass is long enough. A note that no longer
    /// exists leaves the panel in its no-note state.
    pub fn reload(&mut self) {
        self.stamp = io::note_stamp(&self.note_path);
        match io::read_note(&self.note_path) {
            Ok(content) => {
                let name = io::note_name(&self.note_path)
                    .unwrap_or_else(|| self.note_path.display().to_string());
                self.panel = PanelState::for_note(name, &content);
                self.document = Rope::from(content.as_str());
                self.error = None;
                log::info!(
                    "Loaded {} highlights from {}",
                    self.panel.highlights.len(),
                    self.note_path.display()
                );
            }
            Err(IoError::NotFound(path)) => {
                log::info!("{} is gone, clearing highlights", path.display());
                self.panel = PanelState::no_note();
                self.document = Rope::from("");
                self.error = None;
            }
            Err(e) => {
                log::warn!("Failed to read {}: {e}", self.note_path.display());
                self.panel = PanelState::no_note();
                self.document = Rope::from("");
                self.error = Some(format!("Error reading note: {e}"));
            }
        }

        self.selection = None;
        let count = self.panel.highlights.len();
        let selected = match self.list_state.selected() {
            _ if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Reloads if the note changed on disk since the last reload.
    ///
    /// Returns whether a reload happened.
    pub fn refresh_if_changed(&mut self) -> bool {
        let current = io::note_stamp(&self.note_path);
        if current == self.stamp {
            return false;
        }
        log::debug!("{} changed on disk", self.note_path.display());
        self.reload();
        true
    }

    pub fn next_highlight(&mut self) {
        let count = self.panel.highlights.len();
        if count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_highlight(&mut self) {
        let count = self.panel.highlights.len();
        if count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected_entry(&self) -> Option<&HighlightEntry> {
        self.list_state
            .selected()
            .and_then(|i| self.panel.highlights.get(i))
    }

    /// Selects the current highlight's range in the document pane and scrolls to it.
    pub fn navigate(&mut self) -> Option<PositionRange> {
        let entry = self.selected_entry()?;
        let range = normalize_range(&self.document, entry.start_position, entry.end_position);
        log::debug!("Navigating to highlight {} at {range}", entry.id);

        self.selection = Some(range);
        self.scroll = range.start.line.saturating_sub(self.settings.scroll_context);
        Some(range)
    }

    pub fn panel_items(&self) -> Vec<PanelItem> {
        self.panel.items(self.settings.max_preview_chars)
    }

    pub fn document_lines(&self) -> Vec<String> {
        self.document.lines(..).map(|l| l.into_owned()).collect()
    }
}
