//! `tcview show` command

use anyhow::Result;

use tcview::ops::{inspect, rule_context};

use crate::cli::ShowArgs;
use crate::commands::{inspect_options, report_script_error};

pub fn execute(args: ShowArgs, color: bool) -> Result<()> {
    let opts = inspect_options(args.source)?;
    let ctx = rule_context(&opts)?;

    let report = inspect(&ctx).map_err(|e| report_script_error(e, color))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json()?)?);
    } else {
        print!("{}", report.format());
    }

    Ok(())
}
