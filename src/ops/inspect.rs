//! Toolchain inspection.
//!
//! Builds a rule context from toolchain description files, binds the Java
//! toolchain view under its fixed name, and reads fields through it the same
//! way extension code does.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::core::context::AnalysisContext;
use crate::core::provider::JavaToolchainProvider;
use crate::script::{RuleContext, ScriptError, Value, JAVA_TOOLCHAIN_ATTRS};
use crate::util::config::{
    global_config_path, global_toolchain_config_path, load_config, load_toolchain_config,
    project_config_path, project_toolchain_config_path, ToolchainConfig,
};
use crate::util::host::java_specification_version;
use crate::view::{JavaToolchainView, NAME};

/// Label used for the analysis context when none is given.
pub const DEFAULT_LABEL: &str = "//:tcview";

/// Options for building an inspection context.
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// Project root searched for `.tcview/`
    pub cwd: PathBuf,

    /// Explicit toolchain description, bypassing the config search
    pub toolchain_path: Option<PathBuf>,

    /// Override for the fallback language level
    pub default_version: Option<String>,

    /// Label of the analysis context
    pub label: String,
}

impl InspectOptions {
    /// Options rooted at `cwd` with everything else defaulted.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        InspectOptions {
            cwd: cwd.into(),
            toolchain_path: None,
            default_version: None,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

/// Load the Java toolchain described by the options, if any.
///
/// An explicit `toolchain_path` must exist and parse; the implicit
/// global/project search falls back to "no toolchain" instead.
pub fn load_provider(opts: &InspectOptions) -> Result<Option<JavaToolchainProvider>> {
    let config = match opts.toolchain_path {
        Some(ref path) => ToolchainConfig::load(path)?,
        None => {
            let project = project_toolchain_config_path(&opts.cwd);
            let global = global_toolchain_config_path().unwrap_or_default();
            load_toolchain_config(&global, &project)
        }
    };

    let provider = config.java_provider();
    if provider.is_none() {
        tracing::debug!("no [java_toolchain] table found");
    }
    Ok(provider)
}

/// Pick the version reported when javacopts carry no language level.
///
/// Order: explicit option, `view.default_version` from config, host JDK.
pub fn resolve_default_version(opts: &InspectOptions) -> String {
    if let Some(ref version) = opts.default_version {
        return version.clone();
    }

    let project = project_config_path(&opts.cwd);
    let global = global_config_path().unwrap_or_default();
    let config = load_config(&global, &project);

    config
        .view
        .default_version
        .unwrap_or_else(java_specification_version)
}

/// Build a rule context with the Java toolchain view registered.
///
/// A missing toolchain is not an error here: the view is still registered,
/// and reads from it fail with a provider-unavailable error.
pub fn rule_context(opts: &InspectOptions) -> Result<RuleContext> {
    let mut analysis = AnalysisContext::new(&opts.label);
    if let Some(provider) = load_provider(opts)? {
        analysis.bind_java_toolchain(provider);
    }

    let default_version = resolve_default_version(opts);
    tracing::debug!("default Java version: {}", default_version);

    let mut ctx = RuleContext::new();
    ctx.register(NAME, JavaToolchainView::new(analysis, default_version));
    Ok(ctx)
}

/// Every `java_toolchain` attribute, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct ToolchainReport {
    pub fields: Vec<(&'static str, Value)>,
}

impl ToolchainReport {
    /// Look up one field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Render as aligned `name: value` lines.
    pub fn format(&self) -> String {
        let width = self
            .fields
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for (name, value) in &self.fields {
            output.push_str(&format!("{:width$}  {}\n", name, value, width = width));
        }
        output
    }

    /// Render as a JSON object keyed by attribute name.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let mut map = serde_json::Map::new();
        for (name, value) in &self.fields {
            map.insert(name.to_string(), serde_json::to_value(value)?);
        }
        Ok(serde_json::Value::Object(map))
    }
}

/// Read every attribute of `ctx.java_toolchain`.
pub fn inspect(ctx: &RuleContext) -> Result<ToolchainReport, ScriptError> {
    let toolchain = ctx.field(NAME)?;
    let mut fields = Vec::with_capacity(JAVA_TOOLCHAIN_ATTRS.len());
    for name in JAVA_TOOLCHAIN_ATTRS {
        fields.push((*name, toolchain.get_attr(name)?));
    }
    Ok(ToolchainReport { fields })
}

/// Read one attribute of `ctx.java_toolchain`.
pub fn get_attr(ctx: &RuleContext, attr: &str) -> Result<Value, ScriptError> {
    ctx.get(NAME, attr)
}
