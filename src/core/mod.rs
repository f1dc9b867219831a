//! Core data types.
//!
//! Artifacts, the immutable collections handed to extension code, the Java
//! toolchain provider, and the analysis context it is bound in.

pub mod artifact;
pub mod artifact_set;
pub mod context;
pub mod list;
pub mod provider;

pub use artifact::{Artifact, ArtifactRoot};
pub use artifact_set::ArtifactSet;
pub use context::AnalysisContext;
pub use list::ImmutableList;
pub use provider::{JavaToolchainProvider, JavaToolchainProviderBuilder};
