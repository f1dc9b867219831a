//! Java toolchain provider.
//!
//! A [`JavaToolchainProvider`] is the already-resolved description of a Java
//! toolchain for one build configuration. It is constructed once and never
//! modified afterwards; consumers share it through an `Arc`.

use crate::core::artifact::Artifact;
use crate::core::artifact_set::ArtifactSet;
use crate::core::list::ImmutableList;

/// Immutable description of a Java toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaToolchainProvider {
    /// The javac jar
    javac: Artifact,
    /// The SingleJar deploy jar used for packaging
    single_jar: Artifact,
    /// Bootclasspath entries
    bootclasspath: ArtifactSet,
    /// JVM options, in command-line order
    jvm_options: ImmutableList<String>,
    /// Auxiliary compilation tools
    tools: ArtifactSet,
    /// Raw javac flags, name and value as adjacent elements
    javac_options: ImmutableList<String>,
}

impl JavaToolchainProvider {
    /// Start building a provider from its two required artifacts.
    pub fn builder(javac: Artifact, single_jar: Artifact) -> JavaToolchainProviderBuilder {
        JavaToolchainProviderBuilder {
            javac,
            single_jar,
            bootclasspath: Vec::new(),
            jvm_options: Vec::new(),
            tools: Vec::new(),
            javac_options: Vec::new(),
        }
    }

    pub fn javac(&self) -> &Artifact {
        &self.javac
    }

    pub fn single_jar(&self) -> &Artifact {
        &self.single_jar
    }

    pub fn bootclasspath(&self) -> &ArtifactSet {
        &self.bootclasspath
    }

    pub fn jvm_options(&self) -> &ImmutableList<String> {
        &self.jvm_options
    }

    pub fn tools(&self) -> &ArtifactSet {
        &self.tools
    }

    pub fn javac_options(&self) -> &ImmutableList<String> {
        &self.javac_options
    }
}

/// Builder for [`JavaToolchainProvider`].
///
/// Collections are accumulated here and frozen by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct JavaToolchainProviderBuilder {
    javac: Artifact,
    single_jar: Artifact,
    bootclasspath: Vec<Artifact>,
    jvm_options: Vec<String>,
    tools: Vec<Artifact>,
    javac_options: Vec<String>,
}

impl JavaToolchainProviderBuilder {
    /// Add bootclasspath entries.
    pub fn bootclasspath(mut self, entries: impl IntoIterator<Item = Artifact>) -> Self {
        self.bootclasspath.extend(entries);
        self
    }

    /// Add a JVM option.
    pub fn jvm_option(mut self, option: impl Into<String>) -> Self {
        self.jvm_options.push(option.into());
        self
    }

    /// Add multiple JVM options.
    pub fn jvm_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.jvm_options.extend(options.into_iter().map(Into::into));
        self
    }

    /// Add a compilation tool.
    pub fn tool(mut self, tool: Artifact) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add multiple compilation tools.
    pub fn tools(mut self, tools: impl IntoIterator<Item = Artifact>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Add a raw javac flag.
    pub fn javac_option(mut self, option: impl Into<String>) -> Self {
        self.javac_options.push(option.into());
        self
    }

    /// Add multiple raw javac flags.
    pub fn javac_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.javac_options
            .extend(options.into_iter().map(Into::into));
        self
    }

    /// Freeze the collected fields into a provider.
    pub fn build(self) -> JavaToolchainProvider {
        JavaToolchainProvider {
            javac: self.javac,
            single_jar: self.single_jar,
            bootclasspath: self.bootclasspath.into(),
            jvm_options: self.jvm_options.into(),
            tools: self.tools.into(),
            javac_options: self.javac_options.into(),
        }
    }
}
