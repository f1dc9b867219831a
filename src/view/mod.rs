//! Read-only view of a Java toolchain for build extensions.
//!
//! Extension code addresses the view by [`NAME`] and reads seven fields from
//! it. Each read resolves the provider again through the view's lookup and
//! computes the answer on the spot; the view stores nothing else.
//!
//! The source and target language levels are not stored on the provider.
//! They are recovered from the raw javac flags (see [`flags`]), and when the
//! flags don't say, the view answers with the default version it was
//! constructed with.

use std::fmt;
use std::sync::Arc;

use crate::core::artifact::Artifact;
use crate::core::artifact_set::ArtifactSet;
use crate::core::list::ImmutableList;
use crate::core::provider::JavaToolchainProvider;

pub mod errors;
pub mod flags;

pub use errors::ViewError;

/// The name extension code uses to reach the view.
pub const NAME: &str = "java_toolchain";

/// Resolves the toolchain provider bound to an analysis context.
pub trait ProviderLookup: Send + Sync {
    /// Get the bound provider, or [`ViewError::ProviderUnavailable`].
    fn resolve_provider(&self) -> Result<Arc<JavaToolchainProvider>, ViewError>;
}

impl<T: ProviderLookup + ?Sized> ProviderLookup for Arc<T> {
    fn resolve_provider(&self) -> Result<Arc<JavaToolchainProvider>, ViewError> {
        (**self).resolve_provider()
    }
}

/// Adapts a plain function into a [`ProviderLookup`].
///
/// `None` from the function means nothing is bound; the error names
/// `context`.
pub struct LookupFn<F> {
    context: String,
    lookup: F,
}

impl<F> LookupFn<F>
where
    F: Fn() -> Option<Arc<JavaToolchainProvider>> + Send + Sync,
{
    pub fn new(context: impl Into<String>, lookup: F) -> Self {
        LookupFn {
            context: context.into(),
            lookup,
        }
    }
}

impl<F> ProviderLookup for LookupFn<F>
where
    F: Fn() -> Option<Arc<JavaToolchainProvider>> + Send + Sync,
{
    fn resolve_provider(&self) -> Result<Arc<JavaToolchainProvider>, ViewError> {
        (self.lookup)().ok_or_else(|| ViewError::provider_unavailable(&self.context))
    }
}

/// The fields a Java toolchain exposes to extension code.
pub trait JavaToolchainApi {
    /// Input Java language level.
    fn source_version(&self) -> Result<String, ViewError>;

    /// Target Java language level.
    fn target_version(&self) -> Result<String, ViewError>;

    /// The javac jar.
    fn javac_jar(&self) -> Result<Artifact, ViewError>;

    /// The SingleJar deploy jar.
    fn single_jar(&self) -> Result<Artifact, ViewError>;

    /// Bootclasspath entries.
    fn bootclasspath(&self) -> Result<ArtifactSet, ViewError>;

    /// JVM options, in order.
    fn jvm_options(&self) -> Result<ImmutableList<String>, ViewError>;

    /// Compilation tools.
    fn tools(&self) -> Result<ArtifactSet, ViewError>;
}

/// Stateless adapter from a provider lookup to [`JavaToolchainApi`].
#[derive(Clone)]
pub struct JavaToolchainView {
    lookup: Arc<dyn ProviderLookup>,
    default_version: String,
}

impl JavaToolchainView {
    /// Create a view.
    ///
    /// `default_version` answers `source_version`/`target_version` when the
    /// javac flags carry no `-source`/`-target` pair.
    pub fn new(lookup: impl ProviderLookup + 'static, default_version: impl Into<String>) -> Self {
        JavaToolchainView {
            lookup: Arc::new(lookup),
            default_version: default_version.into(),
        }
    }

    /// The version reported when a language level flag is absent.
    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    fn provider(&self) -> Result<Arc<JavaToolchainProvider>, ViewError> {
        self.lookup.resolve_provider()
    }

    fn language_level(&self, marker: &str) -> Result<String, ViewError> {
        let provider = self.provider()?;
        let value = flags::find_flag_value(provider.javac_options().as_slice(), marker)
            .unwrap_or(self.default_version.as_str());
        Ok(value.to_string())
    }
}

impl JavaToolchainApi for JavaToolchainView {
    // TODO: drop source_version/target_version once rules read the level from javacopts
    fn source_version(&self) -> Result<String, ViewError> {
        self.language_level(flags::SOURCE_FLAG)
    }

    fn target_version(&self) -> Result<String, ViewError> {
        self.language_level(flags::TARGET_FLAG)
    }

    fn javac_jar(&self) -> Result<Artifact, ViewError> {
        Ok(self.provider()?.javac().clone())
    }

    fn single_jar(&self) -> Result<Artifact, ViewError> {
        Ok(self.provider()?.single_jar().clone())
    }

    fn bootclasspath(&self) -> Result<ArtifactSet, ViewError> {
        Ok(self.provider()?.bootclasspath().clone())
    }

    fn jvm_options(&self) -> Result<ImmutableList<String>, ViewError> {
        Ok(self.provider()?.jvm_options().clone())
    }

    fn tools(&self) -> Result<ArtifactSet, ViewError> {
        Ok(self.provider()?.tools().clone())
    }
}

impl fmt::Debug for JavaToolchainView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JavaToolchainView")
            .field("default_version", &self.default_version)
            .finish_non_exhaustive()
    }
}
