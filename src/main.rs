mod analyze;
mod cli;
mod config;
mod error;
mod render;
mod session;
mod types;

use crate::analyze::Scorer;
use crate::error::EcoError;
use crate::render::{OutputFormat, View};
use crate::session::{Action, Session};
use crate::types::config::{EcoConfig, OutputFormatSetting};
use crate::types::input::{Guess, ProductInput};
use crate::types::keywords::KeywordTable;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 1;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_format(flag: Option<cli::ViewFormat>, cfg: &EcoConfig) -> OutputFormat {
    match flag {
        Some(cli::ViewFormat::Json) => OutputFormat::Json,
        Some(cli::ViewFormat::Text) => OutputFormat::Text,
        None => match cfg.output_format() {
            Some(OutputFormatSetting::Json) => OutputFormat::Json,
            Some(OutputFormatSetting::Text) | None => OutputFormat::Text,
        },
    }
}

fn keyword_listing(title: &str, sign: char, table: &KeywordTable) -> String {
    let mut output = format!("{title} ({}):\n", table.len());
    if table.is_empty() {
        output.push_str("  none\n");
    }
    for keyword in table.entries() {
        output.push_str(&format!("  {sign}{:<3} {}\n", keyword.weight, keyword.phrase));
    }
    output
}

fn run() -> Result<i32, EcoError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd, cli.config.as_deref())?.unwrap_or_default();
    let scorer = Scorer::new(cfg.keyword_tables());

    match cli.command {
        cli::Commands::Score(cmd) => {
            let guess = cmd
                .guess
                .map(Guess::new)
                .transpose()?
                .unwrap_or_else(|| cfg.default_guess());
            let mut actions = vec![
                Action::Save(ProductInput::new(cmd.name, cmd.description, guess)),
                Action::Analyze,
            ];
            if cmd.guess.is_some() {
                actions.push(Action::ShowAccuracy);
            }
            if cmd.explain {
                actions.push(Action::ShowExplanation);
            }

            let session = actions.into_iter().try_fold(
                Session::with_default_guess(cfg.default_guess()),
                |session, action| session.apply(action, &scorer),
            )?;
            let rendered = render::render(
                &View::of(&session, &scorer),
                resolve_format(cmd.format, &cfg),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Explain(cmd) => {
            let score = scorer.score(&cmd.name, &cmd.description);
            println!("{}", scorer.explain(&cmd.name, &cmd.description, score));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Keywords(cmd) => {
            let tables = scorer.tables();
            match resolve_format(cmd.format, &cfg) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(tables)?),
                OutputFormat::Text => {
                    print!("{}", keyword_listing("positive", '+', &tables.positive));
                    print!("{}", keyword_listing("negative", '-', &tables.negative));
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Session(cmd) => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session::repl::run(
                stdin.lock(),
                &mut stdout,
                &scorer,
                cfg.default_guess(),
                resolve_format(cmd.format, &cfg),
            )?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
