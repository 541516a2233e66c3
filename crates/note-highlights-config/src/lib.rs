use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default width, in chars, of highlight text in the panel before truncation.
pub const DEFAULT_MAX_PREVIEW_CHARS: usize = 80;
/// Default number of lines kept visible above a highlight after jumping to it.
pub const DEFAULT_SCROLL_CONTEXT: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root that relative note paths are resolved against.
    pub notes_path: PathBuf,
    #[serde(default = "default_max_preview_chars")]
    pub max_preview_chars: usize,
    #[serde(default = "default_scroll_context")]
    pub scroll_context: usize,
}

fn default_max_preview_chars() -> usize {
    DEFAULT_MAX_PREVIEW_CHARS
}

fn default_scroll_context() -> usize {
    DEFAULT_SCROLL_CONTEXT
}

impl Config {
    pub fn new(notes_path: impl Into<PathBuf>) -> Self {
        Self {
            notes_path: notes_path.into(),
            max_preview_chars: DEFAULT_MAX_PREVIEW_CHARS,
            scroll_context: DEFAULT_SCROLL_CONTEXT,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config = Self::from_toml(&content).map_err(|source| {
            ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;
        config.notes_path = Self::expand_path(&config.notes_path).unwrap_or(config.notes_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/note-highlights");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Expands `~` and `$VARS` in a configured path; `None` if a variable is unset.
    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn config_path_lives_under_dot_config() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/note-highlights/config.toml"));
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let config = Config::from_toml(r#"notes_path = "/notes""#).unwrap();

        assert_eq!(config, Config::new("/notes"));
    }

    #[test]
    fn optional_fields_are_read_when_present() {
        let config = Config::from_toml(
            r#"
notes_path = "/notes"
max_preview_chars = 24
scroll_context = 0
"#,
        )
        .unwrap();

        assert_eq!(config.max_preview_chars, 24);
        assert_eq!(config.scroll_context, 0);
    }

    #[test]
    fn notes_path_is_required() {
        assert!(Config::from_toml("max_preview_chars = 10").is_err());
    }

    #[test]
    fn expands_tilde() {
        let expanded = Config::expand_path(Path::new("~/vault")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("vault"));
    }

    #[test]
    fn expands_env_vars() {
        unsafe {
            env::set_var("NOTE_HIGHLIGHTS_TEST_ROOT", "/srv/notes");
        }

        let expanded = Config::expand_path(Path::new("$NOTE_HIGHLIGHTS_TEST_ROOT/inbox"));
        assert_eq!(expanded, Some(PathBuf::from("/srv/notes/inbox")));

        unsafe {
            env::remove_var("NOTE_HIGHLIGHTS_TEST_ROOT");
        }
    }

    #[test]
    fn unset_env_var_does_not_expand() {
        let expanded = Config::expand_path(Path::new("$NOTE_HIGHLIGHTS_SURELY_UNSET/x"));
        assert_eq!(expanded, None);
    }

    #[test]
    fn plain_paths_pass_through() {
        for raw in ["/absolute/path", "relative/path"] {
            assert_eq!(Config::expand_path(Path::new(raw)), Some(PathBuf::from(raw)));
        }
    }

    #[test]
    fn load_returns_none_without_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = Config::load_from_path(temp_dir.path().join("absent.toml")).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let mut config = Config::new("/tmp/test-notes");
        config.max_preview_chars = 32;

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_expands_notes_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "notes_path = \"~/notes\"\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert!(!loaded.notes_path.to_string_lossy().starts_with('~'));
        assert!(loaded.notes_path.ends_with("notes"));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "notes_path = [not toml").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
