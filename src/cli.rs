use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecoscan",
    version,
    about = "Quick eco-score estimates for product descriptions"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file merged over ecoscan.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a product and reveal accuracy/explanation in one go
    Score(ScoreCommand),
    /// Print the explanation for a product's score
    Explain(ExplainCommand),
    /// List the active keyword tables
    Keywords(KeywordsCommand),
    /// Interactive form on stdin/stdout
    Session(SessionCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ViewFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Your own estimate; enables the accuracy block
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub guess: Option<u8>,
    /// Also reveal the explanation (requires --guess)
    #[arg(long, requires = "guess")]
    pub explain: bool,
    #[arg(short, long, value_enum)]
    pub format: Option<ViewFormat>,
}

#[derive(Args)]
pub struct ExplainCommand {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct KeywordsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ViewFormat>,
}

#[derive(Args)]
pub struct SessionCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ViewFormat>,
}
