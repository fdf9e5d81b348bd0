use civic_core::DEFAULT_SECRETS_FILE;
use models::TaskMode;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "civiclens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Echo log lines to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding civiclens.toml
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// TOML file with a top-level GEMINI_API_KEY
    #[arg(long, global = true, default_value = DEFAULT_SECRETS_FILE)]
    pub secrets_file: PathBuf,

    /// Directory for civiclens.log
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Never draw the busy spinner
    #[arg(long, global = true)]
    pub no_spinner: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Explain a government scheme and exit
    Scheme {
        text: String,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draft a civic complaint and exit
    Complaint {
        text: String,

        #[arg(long)]
        json: bool,
    },
}

impl Command {
    pub fn mode(&self) -> TaskMode {
        match self {
            Command::Scheme { .. } => TaskMode::ExplainScheme,
            Command::Complaint { .. } => TaskMode::DraftComplaint,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Command::Scheme { text, .. } | Command::Complaint { text, .. } => text,
        }
    }

    pub fn json(&self) -> bool {
        match self {
            Command::Scheme { json, .. } | Command::Complaint { json, .. } => *json,
        }
    }
}
