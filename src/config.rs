use std::path::PathBuf;

use clap::Parser;

use crate::classify::Lexicon;
use crate::{Result, CACHE_FILE, OUTPUT_DIR, SOURCE_URL};

#[derive(Parser, Debug)]
#[command(name = "deathtable")]
#[command(
    author,
    version,
    about = "Counts angels, demons and humans killed per episode of Supernatural"
)]
pub struct Cli {
    /// Download the table again and overwrite the cached copy
    #[clap(short = 'r', long = "refresh")]
    pub refresh: bool,

    /// Page to download the table from
    #[clap(long, default_value = SOURCE_URL)]
    pub url: String,

    /// Cached copy of the page
    #[clap(long, default_value = CACHE_FILE)]
    pub cache: PathBuf,

    /// Directory the JSON export is written to
    #[clap(short = 'o', long = "output-dir", default_value = OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// JSON file replacing the built-in keyword lists
    #[clap(long)]
    pub lexicon: Option<PathBuf>,

    /// Skip writing the JSON export
    #[clap(long = "no-export")]
    pub no_export: bool,

    /// Don't print the per-episode listing
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub refresh: bool,
    pub url: String,
    pub cache: PathBuf,
    pub output_dir: PathBuf,
    pub lexicon: Lexicon,
    pub export: bool,
    pub listing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh: false,
            url: SOURCE_URL.into(),
            cache: CACHE_FILE.into(),
            output_dir: OUTPUT_DIR.into(),
            lexicon: Lexicon::default(),
            export: true,
            listing: true,
        }
    }
}

impl Config {
    /// Resolves the command line, reading the lexicon file if one was given.
    pub async fn from_cli(cli: Cli) -> Result<Self> {
        let lexicon = match cli.lexicon {
            Some(path) => Lexicon::from_json_file(path).await?,
            None => Lexicon::default(),
        };
        Ok(Self {
            refresh: cli.refresh,
            url: cli.url,
            cache: cli.cache,
            output_dir: cli.output_dir,
            lexicon,
            export: !cli.no_export,
            listing: !cli.quiet,
        })
    }
}
