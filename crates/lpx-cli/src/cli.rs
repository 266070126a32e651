use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lpx",
    about = "Longest Path Explorer — longest simple path over a weighted edge list",
    version,
)]
pub struct Cli {
    /// Edge-list file; standard input when omitted
    pub input: Option<PathBuf>,

    /// Fail on the first malformed record instead of dropping it
    #[arg(long)]
    pub strict: bool,

    /// Also accept paths that close back to their start vertex
    #[arg(long)]
    pub closed_tour: bool,

    /// Disable upper-bound pruning (full enumeration, for cross-checking)
    #[arg(long)]
    pub no_prune: bool,

    /// Print search statistics to stderr
    #[arg(long)]
    pub stats: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
