//! CLI argument definitions for pycompat.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pycompat",
    version,
    about = "Find Python versions and torch wheels that work together",
    long_about = "pycompat cross-references PyPI Requires-Python metadata, the PyTorch wheel \
                  index and the torchvision compatibility table so you don't have to."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of ~/.pycompat/config.toml
    #[arg(long, global = true, env = "PYCOMPAT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Determine compatible Python versions from a requirements file
    Python {
        /// Path to the requirements file
        #[arg(default_value = "requirements.txt")]
        requirements_file: PathBuf,
    },

    /// Find torch, torchaudio and torchvision wheels for a Python version
    Wheels {
        /// Prompt for Python version, CUDA version and build variant
        #[arg(short, long)]
        interactive: bool,
        /// Python version (e.g. 3.10)
        #[arg(short, long)]
        python: Option<String>,
        /// CUDA version substring (e.g. 121 for CUDA 12.1)
        #[arg(short, long)]
        cuda: Option<String>,
        /// Exact build variant (e.g. cpu, cu121)
        #[arg(short, long)]
        build: Option<String>,
        /// List every matching wheel instead of resolved torch sets
        #[arg(long)]
        list: bool,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Print the help text of a subcommand to stdout.
pub fn print_subcommand_help(name: &str) -> std::io::Result<()> {
    let mut cmd = Cli::command();
    if let Some(sub) = cmd.find_subcommand_mut(name) {
        return sub.print_help();
    }
    cmd.print_help()
}
