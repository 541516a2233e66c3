//! Change notifications for the open note.
//!
//! The note's parent directory is watched rather than the file itself, so
//! editors that save by writing a temporary file and renaming it over the note
//! are still seen, and so is a note that is deleted and recreated.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

/// Watches the directory holding one note and reports events touching it.
pub struct NoteWatcher {
    /// Kept alive for as long as events are wanted.
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    file_name: OsString,
}

impl NoteWatcher {
    pub fn new(note_path: &Path) -> notify::Result<Self> {
        let canonical = note_path
            .canonicalize()
            .unwrap_or_else(|_| note_path.to_path_buf());
        let file_name = canonical.file_name().map(OsString::from).unwrap_or_default();
        let dir = canonical
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| canonical.clone());

        let (tx, events) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        log::debug!("Watching {} for changes to {file_name:?}", dir.display());

        Ok(Self {
            _watcher: watcher,
            events,
            file_name,
        })
    }

    /// Drains queued events and reports whether any of them touched the note.
    pub fn note_touched(&self) -> bool {
        let mut touched = false;
        for res in self.events.try_iter() {
            match res {
                Ok(event) => touched |= touches(&event, &self.file_name),
                Err(e) => log::warn!("File watcher error: {e}"),
            }
        }
        touched
    }
}

/// True for events that may have changed the contents or existence of `file_name`.
fn touches(event: &Event, file_name: &OsStr) -> bool {
    !matches!(event.kind, EventKind::Access(_))
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(file_name))
}

/// Coalesces a burst of change events into a single refresh.
///
/// Every event restarts the window; the refresh fires once the window has
/// passed without new events.
pub struct Debouncer {
    window: Duration,
    last_event: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_event: None,
        }
    }

    pub fn register(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    /// True once the window has passed since the last event. Clears the pending event.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_event {
            Some(at) if now.duration_since(at) >= self.window => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }
}
