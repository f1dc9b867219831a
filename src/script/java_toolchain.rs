//! `ctx.java_toolchain` attribute table.

use crate::script::{ScriptError, ScriptObject, Value};
use crate::view::{JavaToolchainApi, JavaToolchainView};

/// Attribute names, in the order extension docs list them.
pub const ATTR_NAMES: &[&str] = &[
    "source_version",
    "target_version",
    "javac_jar",
    "single_jar",
    "bootclasspath",
    "jvm_opt",
    "tools",
];

impl ScriptObject for JavaToolchainView {
    fn type_name(&self) -> &'static str {
        "JavaToolchain"
    }

    fn attr_names(&self) -> &'static [&'static str] {
        ATTR_NAMES
    }

    fn get_attr(&self, name: &str) -> Result<Value, ScriptError> {
        let value = match name {
            "source_version" => Value::String(self.source_version()?),
            "target_version" => Value::String(self.target_version()?),
            "javac_jar" => Value::Artifact(self.javac_jar()?),
            "single_jar" => Value::Artifact(self.single_jar()?),
            "bootclasspath" => Value::Depset(self.bootclasspath()?),
            "jvm_opt" => Value::List(self.jvm_options()?),
            "tools" => Value::Depset(self.tools()?),
            other => {
                return Err(ScriptError::NoSuchAttr {
                    type_name: self.type_name(),
                    name: other.to_string(),
                    available: ATTR_NAMES.to_vec(),
                })
            }
        };
        Ok(value)
    }
}
