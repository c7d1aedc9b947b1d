pub mod handler;

use clap::{Parser, Subcommand};
use dpapi_config::OutputFormat;
use std::path::PathBuf;

pub use handler::{handle_diff, handle_show, handle_validate};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[arg(long, global = true)]
    #[arg(help = "Path to the runtime settings file example: /etc/dpapi/settings.yaml")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "validate")]
    #[command(about = "Load a configuration document or directory and validate every section")]
    Validate {
        #[arg(help = "Document or directory of documents")]
        path: PathBuf,
    },

    #[command(name = "diff")]
    #[command(about = "Print the sections added, removed or changed between two configurations")]
    Diff {
        old: PathBuf,
        new: PathBuf,

        #[arg(long, help = "Report absent and empty sub-blocks as different")]
        strict: bool,

        #[arg(long, short = 'f', help = "Output format: json or yaml")]
        format: Option<OutputFormat>,
    },

    #[command(name = "show")]
    #[command(about = "Print the normalized configuration")]
    Show {
        path: PathBuf,

        #[arg(long, short = 'f', help = "Output format: json or yaml")]
        format: Option<OutputFormat>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
