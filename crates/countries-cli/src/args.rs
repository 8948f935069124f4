use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for countries-build
#[derive(Debug, Parser)]
#[command(
    name = "countries-build",
    version,
    about = "Build countries.json and areas.json from a Wikidata country dump"
)]
pub struct CliArgs {
    /// Path to the input JSON dump (a `.json.gz` file is also accepted)
    pub input: PathBuf,

    /// Directory the two artifacts are written to
    #[arg(short = 'o', long = "out-dir", default_value = countries_core::config::DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
