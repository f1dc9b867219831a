//! Artifact handles.
//!
//! An [`Artifact`] identifies a build input or output by its root and exec
//! path. It does not own the file and never touches the filesystem; the
//! surrounding build system resolves and materializes it elsewhere.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Where an artifact lives relative to the execution root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactRoot {
    /// Checked-in source file
    Source,
    /// Produced by an action (the common case for toolchain jars)
    #[default]
    Derived,
}

impl ArtifactRoot {
    /// Get the root name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactRoot::Source => "source",
            ArtifactRoot::Derived => "derived",
        }
    }
}

impl fmt::Display for ArtifactRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-owning handle to a build file.
///
/// Cloning is cheap: the exec path is shared. Two artifacts are the same
/// artifact when both root and exec path match.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Artifact {
    root: ArtifactRoot,
    #[serde(rename = "path", serialize_with = "serialize_path")]
    exec_path: Arc<str>,
}

fn serialize_path<S>(path: &Arc<str>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(path)
}

impl Artifact {
    /// Create an artifact handle.
    pub fn new(root: ArtifactRoot, exec_path: impl AsRef<str>) -> Self {
        Artifact {
            root,
            exec_path: Arc::from(exec_path.as_ref()),
        }
    }

    /// Handle to a checked-in source file.
    pub fn source(exec_path: impl AsRef<str>) -> Self {
        Self::new(ArtifactRoot::Source, exec_path)
    }

    /// Handle to a file produced by the build.
    pub fn derived(exec_path: impl AsRef<str>) -> Self {
        Self::new(ArtifactRoot::Derived, exec_path)
    }

    /// The artifact's root.
    pub fn root(&self) -> ArtifactRoot {
        self.root
    }

    /// Path relative to the execution root.
    pub fn exec_path(&self) -> &str {
        &self.exec_path
    }

    /// Last path component.
    pub fn basename(&self) -> &str {
        self.exec_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.exec_path)
    }

}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} file {}>", self.root, self.exec_path)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.exec_path)
    }
}
