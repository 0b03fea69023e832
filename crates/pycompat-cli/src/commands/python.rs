//! Handler for `pycompat python`.

use std::path::Path;

use miette::Result;

use pycompat_core::config::GlobalConfig;
use pycompat_ops::ops_python;

pub fn exec(config: &GlobalConfig, requirements_file: &Path) -> Result<()> {
    let fetch = super::fetcher(config)?;
    let report = ops_python::python(&fetch, config, requirements_file)?;
    print!("{report}");
    Ok(())
}
