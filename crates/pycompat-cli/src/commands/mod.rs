//! Command dispatch and handler modules.

mod python;
mod wheels;

use miette::Result;

use pycompat_core::config::GlobalConfig;
use pycompat_ops::source::HttpFetcher;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load()?,
    };

    match cli.command {
        Command::Python { requirements_file } => python::exec(&config, &requirements_file),
        Command::Wheels {
            interactive,
            python,
            cuda,
            build,
            list,
        } => wheels::exec(
            &config,
            wheels::WheelArgs {
                interactive,
                python,
                cuda,
                build,
                list,
            },
        ),
    }
}

fn fetcher(config: &GlobalConfig) -> Result<HttpFetcher> {
    HttpFetcher::from_config(&config.network)
}
