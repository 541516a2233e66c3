use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Resolve a note path given on the command line.
///
/// Absolute paths are used as-is. A relative path is looked up under
/// `notes_root` first (when one is configured) and falls back to the working
/// directory if no such note exists there.
pub fn resolve_note_path(note: &Path, notes_root: Option<&Path>) -> PathBuf {
    if note.is_absolute() {
        return note.to_path_buf();
    }

    if let Some(root) = notes_root
        && let Some(relative) = note.to_str().map(RelativePath::new)
    {
        let candidate = relative.to_path(root);
        if candidate.exists() {
            return candidate;
        }
    }

    note.to_path_buf()
}

/// Read a note and return its content
pub fn read_note(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// What a note looked like on disk the last time it was checked.
///
/// Length is kept next to the modification time because some filesystems
/// report mtimes too coarsely to tell two quick writes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteStamp {
    pub modified: Option<SystemTime>,
    pub len: u64,
}

/// Stamp of the note at `path`, or `None` if it no longer exists
pub fn note_stamp(path: &Path) -> Option<NoteStamp> {
    let meta = fs::metadata(path).ok()?;
    Some(NoteStamp {
        modified: meta.modified().ok(),
        len: meta.len(),
    })
}

/// Display name of a note: the file name without its extension
pub fn note_name(path: &Path) -> Option<String> {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_read_note_success() {
        let notes_dir = create_test_notes_dir();
        let path = create_test_file(&notes_dir, "test.md", "# Test\n\n==marked==");

        let content = read_note(&path).unwrap();
        assert_eq!(content, "# Test\n\n==marked==");
    }

    #[test]
    fn test_read_note_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_note(&notes_dir.path().join("nonexistent.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_note_stamp_tracks_edits_and_removal() {
        let notes_dir = create_test_notes_dir();
        let path = create_test_file(&notes_dir, "stamped.md", "==one==");

        let first = note_stamp(&path).unwrap();
        assert_eq!(first.len, 7);
        assert_eq!(note_stamp(&path), Some(first));

        std::fs::write(&path, "==one== ==two==").unwrap();
        let second = note_stamp(&path).unwrap();
        assert_ne!(second, first);

        std::fs::remove_file(&path).unwrap();
        assert_eq!(note_stamp(&path), None);
    }

    #[test]
    fn test_read_note_rejects_invalid_utf8() {
        let notes_dir = create_test_notes_dir();
        let path = notes_dir.path().join("binary.md");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let result = read_note(&path);
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn test_resolve_relative_note_under_root() {
        let notes_dir = create_test_notes_dir();
        std::fs::create_dir(notes_dir.path().join("daily")).unwrap();
        let expected = create_test_file(&notes_dir, "daily/today.md", "hi");

        let resolved = resolve_note_path(Path::new("daily/today.md"), Some(notes_dir.path()));
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_resolve_missing_note_falls_back_to_given_path() {
        let notes_dir = create_test_notes_dir();
        let resolved = resolve_note_path(Path::new("elsewhere.md"), Some(notes_dir.path()));
        assert_eq!(resolved, PathBuf::from("elsewhere.md"));
    }

    #[test]
    fn test_resolve_absolute_path_untouched() {
        let notes_dir = create_test_notes_dir();
        let absolute = notes_dir.path().join("abs.md");
        let resolved = resolve_note_path(&absolute, Some(Path::new("/ignored")));
        assert_eq!(resolved, absolute);
    }

    #[test]
    fn test_note_name_strips_extension() {
        assert_eq!(
            note_name(Path::new("/notes/Reading List.md")),
            Some("Reading List".to_string())
        );
        assert_eq!(note_name(Path::new("/")), None);
    }

    #[test]
    fn test_validate_notes_dir_exists() {
        let notes_dir = create_test_notes_dir();
        assert!(validate_notes_dir(notes_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_notes_dir_not_exists() {
        let result = validate_notes_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }
}
