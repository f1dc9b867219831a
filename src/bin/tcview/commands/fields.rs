//! `tcview fields` command

use anyhow::Result;

use tcview::script::JAVA_TOOLCHAIN_ATTRS;
use tcview::view::NAME;

pub fn execute() -> Result<()> {
    for attr in JAVA_TOOLCHAIN_ATTRS {
        println!("{}.{}", NAME, attr);
    }
    Ok(())
}
