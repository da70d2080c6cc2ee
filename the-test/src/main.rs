mod cli;
mod script;
mod session;

use std::{
  fs,
  io::{
    self,
    Read,
  },
};

use anyhow::{
  Context,
  Result,
};
use clap::Parser;
use the_search_config::{
  Config,
  ConfigLoadError,
};

use crate::{
  cli::Cli,
  script::parse_script,
  session::Session,
};

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbosity);

  let config = match &cli.config {
    Some(path) => {
      let file = fs::read_to_string(path).map_err(ConfigLoadError::Error);
      let local = Err(ConfigLoadError::Error(io::ErrorKind::NotFound.into()));
      Config::load(file, local).with_context(|| format!("loading {}", path.display()))?
    },
    None => Config::load_user_or_default(std::env::current_dir()?),
  };

  let notes = fs::read_to_string(&cli.notes)
    .with_context(|| format!("reading notes from {}", cli.notes.display()))?;
  let titles = notes
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(str::to_string)
    .collect();

  let source = match &cli.script {
    Some(path) => {
      fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?
    },
    None => {
      let mut source = String::new();
      io::stdin().read_to_string(&mut source)?;
      source
    },
  };
  let steps = parse_script(&source)?;

  let mut session = Session::new(config.search, titles);
  session.run(&steps);

  for effect in &session.nav.effects {
    println!("> {effect}");
  }
  println!("{}", session.summary());
  Ok(())
}

fn init_logging(verbosity: u8) {
  let level = match verbosity {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };
  env_logger::Builder::from_default_env()
    .filter_level(level)
    .format_timestamp_millis()
    .init();
}
