use the_search_config::SearchConfig;

/// State shared between the search field and the rest of the window.
///
/// `search_in_progress` lets other components tell "the user is searching"
/// from "idle", e.g. to avoid stealing focus while results still change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchContext {
  pub search_in_progress: bool,
  pub config:             SearchConfig,
}

impl SearchContext {
  pub fn new(config: SearchConfig) -> Self {
    Self {
      search_in_progress: false,
      config,
    }
  }
}
