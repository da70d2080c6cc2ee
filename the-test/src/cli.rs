use std::path::PathBuf;

use clap::{
  ArgAction,
  Parser,
};

/// Replay a scripted typing session against the notes search field.
#[derive(Parser, Debug)]
#[command(name = "the-search-replay", about, long_about = None)]
pub struct Cli {
  /// File with one note title per line
  #[arg(short = 'n', long = "notes", value_name = "FILE")]
  pub notes: PathBuf,

  /// Script to replay; reads stdin when omitted
  #[arg(value_name = "SCRIPT")]
  pub script: Option<PathBuf>,

  /// Load configuration from a specific file instead of the user config
  #[arg(short = 'c', long = "config", value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  pub verbosity: u8,
}
