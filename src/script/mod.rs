//! Extension-facing object binding.
//!
//! Extension code never calls Rust methods directly. It reaches an object by
//! a fixed name from the rule context and reads attributes from it by name.
//! Everything it gets back is a [`Value`], and every collection inside a
//! value is an immutable snapshot.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::core::artifact::Artifact;
use crate::core::artifact_set::ArtifactSet;
use crate::core::list::ImmutableList;
use crate::view::ViewError;

mod java_toolchain;

pub use java_toolchain::ATTR_NAMES as JAVA_TOOLCHAIN_ATTRS;

/// A value handed to extension code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Artifact(Artifact),
    Depset(ArtifactSet),
    List(ImmutableList<String>),
}

impl Value {
    /// The extension-visible type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Artifact(_) => "File",
            Value::Depset(_) => "depset",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            Value::Artifact(a) => write!(f, "{:?}", a),
            Value::Depset(set) => write!(f, "{:?}", set),
            Value::List(list) => write!(f, "{:?}", list),
        }
    }
}

/// Error raised while reading from a bound object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("'ctx' has no field `{name}` (available: {})", .available.join(", "))]
    NoSuchField {
        name: String,
        available: Vec<String>,
    },

    #[error("'{type_name}' value has no field or method `{name}` (available: {})", .available.join(", "))]
    NoSuchAttr {
        type_name: &'static str,
        name: String,
        available: Vec<&'static str>,
    },

    #[error(transparent)]
    Query(#[from] ViewError),
}

/// An object extension code can read attributes from.
pub trait ScriptObject: Send + Sync {
    /// The extension-visible type name.
    fn type_name(&self) -> &'static str;

    /// Names of the readable attributes, in declaration order.
    fn attr_names(&self) -> &'static [&'static str];

    /// Read one attribute.
    fn get_attr(&self, name: &str) -> Result<Value, ScriptError>;

    /// Whether `name` is a readable attribute.
    fn has_attr(&self, name: &str) -> bool {
        self.attr_names().iter().any(|attr| *attr == name)
    }
}

/// The fields of a rule context that extension code can address by name.
#[derive(Default, Clone)]
pub struct RuleContext {
    fields: BTreeMap<String, Arc<dyn ScriptObject>>,
}

impl RuleContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, object: impl ScriptObject + 'static) {
        self.fields.insert(name.into(), Arc::new(object));
    }

    /// Look up a registered object.
    pub fn field(&self, name: &str) -> Result<Arc<dyn ScriptObject>, ScriptError> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| ScriptError::NoSuchField {
                name: name.to_string(),
                available: self.field_names().map(str::to_string).collect(),
            })
    }

    /// Read `object.attr` in one step.
    pub fn get(&self, object: &str, attr: &str) -> Result<Value, ScriptError> {
        self.field(object)?.get_attr(attr)
    }

    /// Names of the registered objects, sorted.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Debug for RuleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleContext")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
