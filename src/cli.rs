use crate::demos::Demo;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seqflow")]
#[command(about = "Lazy sequence pipelines and worked demonstrations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .seqflow.toml)
    #[arg(long, global = true, env = "SEQFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show demo progress
    /// -vv: Show pipeline plans and evaluation results
    /// -vvv: Trace individual elements when enabled in config
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored headings
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one demonstration, or all of them in order
    Run {
        /// Demonstration to run
        #[arg(value_enum)]
        demo: Option<Demo>,
    },

    /// List available demonstrations
    List,

    /// Write a default .seqflow.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}
