//! tcview - a read-only view of Java toolchain metadata for build extensions
//!
//! This crate exposes an already-resolved Java toolchain to extension code
//! through a fixed set of named, read-only fields.

pub mod core;
pub mod ops;
pub mod script;
pub mod util;
pub mod view;

/// Test fixtures for tcview unit tests.
///
/// This module is only available when compiling with `--cfg test`.
#[cfg(test)]
pub mod test_support;

pub use core::{
    artifact::Artifact, artifact_set::ArtifactSet, context::AnalysisContext, list::ImmutableList,
    provider::JavaToolchainProvider,
};

pub use view::{JavaToolchainApi, JavaToolchainView, ProviderLookup, ViewError};
