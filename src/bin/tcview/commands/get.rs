//! `tcview get` command

use anyhow::Result;

use tcview::ops::{get_attr, rule_context};
use tcview::script::Value;

use crate::cli::GetArgs;
use crate::commands::{inspect_options, report_script_error};

pub fn execute(args: GetArgs, color: bool) -> Result<()> {
    let opts = inspect_options(args.source)?;
    let ctx = rule_context(&opts)?;

    let value = get_attr(&ctx, &args.attr).map_err(|e| report_script_error(e, color))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    // One item per line so the output pipes cleanly
    match value {
        Value::String(s) => println!("{}", s),
        Value::Artifact(a) => println!("{}", a),
        Value::Depset(set) => {
            for artifact in &set {
                println!("{}", artifact);
            }
        }
        Value::List(list) => {
            for item in &list {
                println!("{}", item);
            }
        }
    }

    Ok(())
}
