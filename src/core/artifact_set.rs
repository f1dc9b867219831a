//! Immutable artifact sets.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::core::artifact::Artifact;

/// An immutable, deduplicated set of artifacts.
///
/// Duplicates are dropped at construction (by artifact identity). Iteration
/// follows first-insertion order, but that order carries no meaning.
/// Clones share the backing storage, so handing a set to a consumer never
/// copies and never exposes anything mutable.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    items: Arc<[Artifact]>,
}

impl ArtifactSet {
    /// Number of distinct artifacts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the set holds the given artifact.
    pub fn contains(&self, artifact: &Artifact) -> bool {
        self.items.contains(artifact)
    }

    /// Iterate over the artifacts.
    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.items.iter()
    }

    /// Whether both sets hold the same artifacts, ignoring order.
    pub fn same_elements(&self, other: &ArtifactSet) -> bool {
        self.len() == other.len() && self.iter().all(|a| other.contains(a))
    }
}

impl FromIterator<Artifact> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let items: Vec<Artifact> = iter
            .into_iter()
            .filter(|a| seen.insert(a.clone()))
            .collect();
        ArtifactSet {
            items: items.into(),
        }
    }
}

impl From<Vec<Artifact>> for ArtifactSet {
    fn from(artifacts: Vec<Artifact>) -> Self {
        artifacts.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ArtifactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depset(")?;
        f.debug_list().entries(self.items.iter()).finish()?;
        write!(f, ")")
    }
}

impl Serialize for ArtifactSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.items.iter())
    }
}
