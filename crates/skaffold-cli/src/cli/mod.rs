use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `skaffold` binary.
#[derive(Debug, Parser)]
#[command(name = "skaffold", version, about = "Skaffold - survey and global config")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the global config file (defaults to ~/.skaffold/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

/// Accept the single-dash `-id` spelling printed by survey prompts.
///
/// Only arguments after the `survey` subcommand and before `--` are
/// rewritten.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut in_survey = false;
    let mut passthrough = false;
    let mut normalized = Vec::new();
    for arg in args {
        if arg == "--" {
            in_survey = false;
            passthrough = true;
        }
        let rewritten = match arg.to_str() {
            Some("-id") if in_survey => OsString::from("--id"),
            Some(other) if in_survey && other.starts_with("-id=") => {
                OsString::from(format!("-{other}"))
            }
            Some("survey") if !passthrough => {
                in_survey = true;
                arg
            }
            _ => arg,
        };
        normalized.push(rewritten);
    }
    normalized
}
