//! Configuration for the notes search field.
//!
//! ```toml
//! [search]
//! focus-editor-on-note-selection = true
//! debounce-ms = 0
//! navigation-row = 1
//! ```

mod paths;

use std::{
  fs,
  io::Error as IOError,
  path::Path,
  time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use toml::{
  Value,
  de::Error as TomlError,
};

pub use crate::paths::{
  config_dir,
  config_file,
  merge_toml_values,
  workspace_config_file,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
  /// Keep "search in progress" raised for a settle period after each query
  /// so a note selected from the results pulls focus into the editor.
  pub focus_editor_on_note_selection: bool,
  /// Delay between the last keystroke of a burst and the query it issues.
  pub debounce_ms: u64,
  /// Outline row selected when Left leaves an empty field.
  pub navigation_row: usize,
}

impl SearchConfig {
  pub fn debounce(&self) -> Duration {
    Duration::from_millis(self.debounce_ms)
  }
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      focus_editor_on_note_selection: true,
      debounce_ms:                    0,
      navigation_row:                 1,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigRaw {
  search: Option<Value>,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
  #[error("bad config: {0}")]
  BadConfig(#[from] TomlError),
  #[error("failed to read config: {0}")]
  Error(#[from] IOError),
}

impl Config {
  /// Build a config from a global and a local document. Values from `local`
  /// win. A document that failed to read is skipped; one that failed to parse
  /// is an error.
  pub fn load(
    global: Result<String, ConfigLoadError>,
    local: Result<String, ConfigLoadError>,
  ) -> Result<Config, ConfigLoadError> {
    let global_config: Result<ConfigRaw, ConfigLoadError> =
      global.and_then(|file| toml::from_str(&file).map_err(ConfigLoadError::BadConfig));
    let local_config: Result<ConfigRaw, ConfigLoadError> =
      local.and_then(|file| toml::from_str(&file).map_err(ConfigLoadError::BadConfig));

    let search = match (global_config, local_config) {
      (Ok(global), Ok(local)) => {
        match (global.search, local.search) {
          (None, None) => SearchConfig::default(),
          (None, Some(val)) | (Some(val), None) => val.try_into()?,
          (Some(global), Some(local)) => merge_toml_values(global, local, 3).try_into()?,
        }
      },
      (_, Err(ConfigLoadError::BadConfig(err))) | (Err(ConfigLoadError::BadConfig(err)), _) => {
        return Err(ConfigLoadError::BadConfig(err));
      },
      (Ok(config), Err(_)) | (Err(_), Ok(config)) => {
        config
          .search
          .map_or_else(|| Ok(SearchConfig::default()), Value::try_into)?
      },
      (Err(err), Err(_)) => return Err(err),
    };

    Ok(Config { search })
  }

  /// Load the global config file and the one local to `workspace`.
  pub fn load_user(workspace: impl AsRef<Path>) -> Result<Config, ConfigLoadError> {
    let global = match config_file() {
      Some(path) => read(&path),
      None => Err(ConfigLoadError::Error(IOError::other(
        "no config directory available",
      ))),
    };
    let local = read(&workspace_config_file(workspace));
    Self::load(global, local)
  }

  /// Like [`Config::load_user`], falling back to defaults when no file could
  /// be read or parsed.
  pub fn load_user_or_default(workspace: impl AsRef<Path>) -> Config {
    match Self::load_user(workspace) {
      Ok(config) => config,
      Err(ConfigLoadError::Error(err)) => {
        log::debug!("no search config loaded ({err}), using defaults");
        Config::default()
      },
      Err(err) => {
        log::warn!("{err}; using default search config");
        Config::default()
      },
    }
  }
}

fn read(path: &Path) -> Result<String, ConfigLoadError> {
  fs::read_to_string(path).map_err(ConfigLoadError::Error)
}
