//! adprep command-line tool.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use adprep_cli::logging::{LogConfig, LogFormat, init_logging};
use adprep_cli::settings::load_settings;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{Session, run_all, run_columns, run_export, run_rename};
use crate::summary::{print_json_summary, print_summary};
use crate::types::CommandOutcome;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let outcome = match &cli.command {
        Command::Columns => {
            run_columns();
            std::process::exit(0);
        }
        Command::Rename(args) => session(&cli).and_then(|s| run_rename(args, &s)),
        Command::Export(args) => session(&cli).and_then(|s| run_export(args, &s)),
        Command::Run(args) => session(&cli).and_then(|s| run_all(args, &s)),
    };
    std::process::exit(report(outcome, cli.json));
}

fn session(cli: &Cli) -> anyhow::Result<Session> {
    let settings = load_settings(cli.config.as_deref())?;
    Ok(Session {
        settings,
        progress: cli.progress.into(),
    })
}

/// Prints the outcome and returns the exit code. Row failures do not fail the run.
fn report(outcome: anyhow::Result<CommandOutcome>, json: bool) -> i32 {
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    if json {
        if let Err(error) = print_json_summary(&outcome) {
            eprintln!("error: {error:#}");
            return 1;
        }
    } else {
        print_summary(&outcome);
    }
    0
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
