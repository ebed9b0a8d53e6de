//! Lists the albums and photos in an iPhoto library, as text or JSON.
//!
//! Copyright 2023-5 Seth Pendergrass. See LICENSE.

use std::{
  io::{self, Write},
  path::PathBuf,
  process,
};

use clap::{ArgAction, Parser, Subcommand};
use iphoto_db::{
  Config, Library,
  commands::{self, Format},
  config::DEFAULT_ALBUM_DATA,
};

mod setup;

#[derive(Parser)]
struct Args {
  /// Directory of iPhoto library. Updates default in XDG_CONFIG_HOME.
  #[arg(short, long, global = true)]
  library: Option<PathBuf>,

  /// Name of the album data file within the library.
  #[arg(long, global = true, default_value = DEFAULT_ALBUM_DATA)]
  album_data: String,

  /// Output format.
  #[arg(short, long, global = true, value_enum, default_value_t)]
  format: Format,

  /// Verbosity level. Max: 2.
  #[arg(short, action = ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List album names.
  Albums,
  /// Show album details.
  Info {
    #[arg(required = true)]
    albums: Vec<String>,
  },
  /// Show photos in album(s).
  Photos {
    /// Include photos with a RAW original.
    #[arg(long)]
    include_raw: bool,
    #[arg(required = true)]
    albums: Vec<String>,
  },
}

fn main() {
  let args = Args::parse();
  setup::configure_logging(args.verbose);

  let home = dirs::home_dir();
  let library = match setup::get_or_update_library(args.library, home.as_deref()) {
    Ok(path) => path,
    Err(e) => {
      log::error!("{e}");
      process::exit(1);
    }
  };

  let config = Config::new(library)
    .with_album_data(args.album_data)
    .with_home(home);
  let library = match Library::open(&config) {
    Ok(library) => library,
    Err(e) => {
      log::error!("{e}");
      process::exit(1);
    }
  };

  let mut out = io::stdout().lock();
  let result = match args.command {
    Commands::Albums => commands::albums(&library, args.format, &mut out).map(|()| true),
    Commands::Info { albums } => commands::info(&library, &albums, args.format, &mut out),
    Commands::Photos {
      include_raw,
      albums,
    } => commands::photos(&library, &albums, include_raw, args.format, &mut out),
  }
  .and_then(|all_found| out.flush().map(|()| all_found));

  match result {
    Ok(true) => {}
    Ok(false) => process::exit(1),
    Err(e) => {
      log::error!("Failed to write output ({e}).");
      process::exit(1);
    }
  }
}
