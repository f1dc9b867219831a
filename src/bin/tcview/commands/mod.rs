//! Command implementations

use anyhow::{Context, Result};

use tcview::ops::InspectOptions;
use tcview::script::ScriptError;
use tcview::util::diagnostic::{self, Diagnostic};

use crate::cli::ToolchainSource;

pub mod completions;
pub mod fields;
pub mod get;
pub mod show;

/// Build inspection options from the shared CLI flags.
pub fn inspect_options(source: ToolchainSource) -> Result<InspectOptions> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let mut opts = InspectOptions::new(cwd);
    opts.toolchain_path = source.toolchain;
    opts.default_version = source.default_version;
    if let Some(label) = source.label {
        opts.label = label;
    }
    Ok(opts)
}

/// Print a script error as a diagnostic and turn it into a command failure.
pub fn report_script_error(err: ScriptError, color: bool) -> anyhow::Error {
    let diag = match &err {
        ScriptError::Query(view_err) => view_err.to_diagnostic(),
        ScriptError::NoSuchAttr { .. } | ScriptError::NoSuchField { .. } => {
            Diagnostic::error(err.to_string())
                .with_suggestion("Run `tcview fields` to see the available fields")
        }
    };
    diagnostic::emit(&diag, color);
    anyhow::anyhow!("aborting due to previous error")
}
