//! Handler for `pycompat wheels`.

use dialoguer::Input;
use miette::Result;

use pycompat_core::config::GlobalConfig;
use pycompat_ops::ops_wheels::{self, WheelOptions};
use pycompat_util::errors::PycompatError;
use pycompat_wheel::matcher::MatchCriteria;

#[derive(Debug)]
pub struct WheelArgs {
    pub interactive: bool,
    pub python: Option<String>,
    pub cuda: Option<String>,
    pub build: Option<String>,
    pub list: bool,
}

pub fn exec(config: &GlobalConfig, args: WheelArgs) -> Result<()> {
    let criteria = if args.interactive {
        prompt_criteria()?
    } else if let Some(python) = args.python {
        MatchCriteria::new(python)
            .with_variant_substring(args.cuda)
            .with_exact_variant(args.build)
    } else {
        crate::cli::print_subcommand_help("wheels").map_err(PycompatError::Io)?;
        return Ok(());
    };

    let fetch = super::fetcher(config)?;
    let opts = WheelOptions {
        criteria,
        list_all: args.list,
    };
    let report = ops_wheels::wheels(&fetch, config, &opts)?;
    print!("{report}");
    Ok(())
}

fn prompt_criteria() -> Result<MatchCriteria> {
    if !atty::is(atty::Stream::Stdin) {
        return Err(PycompatError::Generic {
            message: "Interactive mode needs a terminal; pass --python instead".to_string(),
        }
        .into());
    }

    let python = prompt("Enter your Python version (e.g., 3.10)", false)?;
    let cuda = prompt(
        "Enter your CUDA version (e.g., 121 for CUDA 12.1) or leave blank for any",
        true,
    )?;
    let build = prompt(
        "Enter build variant (e.g., cpu, cu121) or leave blank for any",
        true,
    )?;

    Ok(MatchCriteria::new(python.trim())
        .with_variant_substring(Some(cuda.trim().to_string()))
        .with_exact_variant(Some(build.trim().to_string())))
}

fn prompt(text: &str, allow_empty: bool) -> Result<String> {
    Input::<String>::new()
        .with_prompt(text)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| {
            PycompatError::Generic {
                message: format!("Prompt error: {e}"),
            }
            .into()
        })
}
