//! Analysis context - the per-target scope a view resolves its provider in.

use std::fmt;
use std::sync::Arc;

use crate::core::provider::JavaToolchainProvider;
use crate::view::{ProviderLookup, ViewError};

/// The analysis scope of one target.
///
/// Holds the Java toolchain provider that configuration resolution bound to
/// the target, if any. Views built on a context look the provider up on every
/// read.
#[derive(Clone)]
pub struct AnalysisContext {
    /// Label of the target being analyzed
    label: String,

    /// Bound Java toolchain, if resolution produced one
    java_toolchain: Option<Arc<JavaToolchainProvider>>,
}

impl AnalysisContext {
    /// Create a context with no toolchain bound.
    pub fn new(label: impl Into<String>) -> Self {
        AnalysisContext {
            label: label.into(),
            java_toolchain: None,
        }
    }

    /// Bind the Java toolchain for this context, replacing any previous one.
    pub fn bind_java_toolchain(&mut self, provider: impl Into<Arc<JavaToolchainProvider>>) {
        self.java_toolchain = Some(provider.into());
    }

    /// Builder-style variant of [`bind_java_toolchain`](Self::bind_java_toolchain).
    pub fn with_java_toolchain(mut self, provider: impl Into<Arc<JavaToolchainProvider>>) -> Self {
        self.bind_java_toolchain(provider);
        self
    }

    /// Get the target label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the bound Java toolchain.
    pub fn java_toolchain(&self) -> Option<&Arc<JavaToolchainProvider>> {
        self.java_toolchain.as_ref()
    }
}

impl ProviderLookup for AnalysisContext {
    fn resolve_provider(&self) -> Result<Arc<JavaToolchainProvider>, ViewError> {
        self.java_toolchain
            .clone()
            .ok_or_else(|| ViewError::provider_unavailable(&self.label))
    }
}

impl fmt::Debug for AnalysisContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisContext")
            .field("label", &self.label)
            .field("java_toolchain", &self.java_toolchain.is_some())
            .finish()
    }
}
