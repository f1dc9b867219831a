//! View error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error raised by a toolchain view query.
///
/// A missing `-source`/`-target` flag is not an error: the view answers with
/// its default version instead. The only failure is a context that has no
/// toolchain bound, and every accessor reports it the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum ViewError {
    #[error("no java toolchain is bound in `{context}`")]
    #[diagnostic(
        code(tcview::view::provider_unavailable),
        help("Declare a java toolchain for this context or pass `--toolchain <FILE>`")
    )]
    ProviderUnavailable { context: String },
}

impl ViewError {
    /// Create a provider-unavailable error for the named context.
    pub fn provider_unavailable(context: impl Into<String>) -> Self {
        ViewError::ProviderUnavailable {
            context: context.into(),
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ViewError::ProviderUnavailable { context } => {
                Diagnostic::error(format!("no java toolchain is bound in `{}`", context))
                    .with_context("every `java_toolchain` field needs a resolved toolchain")
                    .with_suggestion("Add a `[java_toolchain]` table to `.tcview/toolchain.toml`")
                    .with_suggestion("Pass an explicit description with `--toolchain <FILE>`")
            }
        }
    }
}
