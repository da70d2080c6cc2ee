use std::path::{
  Path,
  PathBuf,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};

const APP_DIR: &str = "notes-search";
const CONFIG_DIR_ENV: &str = "NOTES_SEARCH_CONFIG_DIR";
const WORKSPACE_DIR: &str = ".notes-search";

/// Directory holding the global `config.toml`.
///
/// `NOTES_SEARCH_CONFIG_DIR` wins over the platform config directory. `None`
/// when neither is available (no home directory).
pub fn config_dir() -> Option<PathBuf> {
  if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
    && !dir.trim().is_empty()
  {
    return Some(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().ok()?;
  let mut path = strategy.config_dir();
  path.push(APP_DIR);
  Some(path)
}

pub fn config_file() -> Option<PathBuf> {
  config_dir().map(|dir| dir.join("config.toml"))
}

/// Config file local to `dir`, e.g. a notes library root.
pub fn workspace_config_file(dir: impl AsRef<Path>) -> PathBuf {
  dir.as_ref().join(WORKSPACE_DIR).join("config.toml")
}

/// Merge `right` onto `left`. Tables are merged key by key up to
/// `merge_depth` levels deep; below that, and for every other value type,
/// `right` replaces `left`.
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) if merge_depth > 0 => {
      for (name, rvalue) in right_map {
        let merged = match left_map.remove(&name) {
          Some(lvalue) => merge_toml_values(lvalue, rvalue, merge_depth - 1),
          None => rvalue,
        };
        left_map.insert(name, merged);
      }
      Value::Table(left_map)
    },
    (_, value) => value,
  }
}
