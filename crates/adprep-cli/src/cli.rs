//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use adprep_cli::progress::ProgressMode;
use adprep_model::OverrideSet;

#[derive(Parser)]
#[command(
    name = "adprep",
    version,
    about = "Rename ad video assets to their spreadsheet keys and prepare metadata exports",
    long_about = "Rename ad video assets to their spreadsheet keys and prepare metadata exports.\n\n\
                  Files whose name matches a row's Description are renamed to\n\
                  \"Description-AD ID\" with their extension kept. The export step writes\n\
                  one semicolon-delimited metadata row per renamed asset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: settings.toml in the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// How to show per-row progress.
    #[arg(long = "progress", value_enum, default_value = "bar", global = true)]
    pub progress: ProgressArg,

    /// Print a JSON summary on stdout instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rename assets in a folder to "Description-AD ID".
    Rename(RenameArgs),

    /// Write the metadata export for already renamed assets.
    Export(ExportArgs),

    /// Rename assets, then write the metadata export.
    Run(ExportArgs),

    /// List the export columns in output order.
    Columns,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Spreadsheet (.csv, .xlsx, .xlsm, .xlsb, .xls, .ods) describing the assets.
    #[arg(value_name = "SPREADSHEET")]
    pub spreadsheet: PathBuf,

    /// Folder containing the asset files.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,
}

#[derive(Args)]
pub struct RenameArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Export file path (default: timestamped file in the output directory).
    #[arg(long = "output", short = 'o', value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for the timestamped export file (default: Downloads).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Values applied to every asset in the batch.
#[derive(Args, Default)]
pub struct OverrideArgs {
    /// Link to Wrike Project.
    #[arg(long = "wrike-link", value_name = "URL")]
    pub wrike_link: Option<String>,

    /// Year, e.g. 2025.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<String>,

    #[arg(long = "sub-initiative", value_name = "TEXT")]
    pub sub_initiative: Option<String>,

    #[arg(long = "location-type", value_name = "TEXT")]
    pub location_type: Option<String>,
}

impl OverrideArgs {
    pub fn to_override_set(&self) -> OverrideSet {
        let mut overrides = OverrideSet::default();
        if let Some(value) = &self.wrike_link {
            overrides = overrides.with_wrike_link(value.as_str());
        }
        if let Some(value) = &self.year {
            overrides = overrides.with_year(value.as_str());
        }
        if let Some(value) = &self.sub_initiative {
            overrides = overrides.with_sub_initiative(value.as_str());
        }
        if let Some(value) = &self.location_type {
            overrides = overrides.with_location_type(value.as_str());
        }
        overrides
    }
}

/// CLI progress display choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ProgressArg {
    Bar,
    Lines,
    #[value(name = "none")]
    Off,
}

impl From<ProgressArg> for ProgressMode {
    fn from(arg: ProgressArg) -> Self {
        match arg {
            ProgressArg::Bar => ProgressMode::Bar,
            ProgressArg::Lines => ProgressMode::Lines,
            ProgressArg::Off => ProgressMode::Off,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_overrides() {
        let cli = Cli::try_parse_from([
            "adprep",
            "export",
            "plan.csv",
            "renders",
            "--year",
            "2025",
            "--location-type",
            " ",
        ])
        .unwrap();
        let Command::Export(args) = cli.command else {
            panic!("expected export command");
        };
        let overrides = args.overrides.to_override_set();
        assert_eq!(overrides.year(), Some("2025"));
        assert_eq!(overrides.location_type(), None);
    }

    #[test]
    fn test_output_conflicts_with_output_dir() {
        let result = Cli::try_parse_from([
            "adprep", "run", "plan.csv", "renders", "--output", "a.csv", "--output-dir", "out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "adprep", "rename", "plan.csv", "renders", "--progress", "lines", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.progress, ProgressArg::Lines));
    }
}
