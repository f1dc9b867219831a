//! Immutable ordered sequences.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// An ordered, read-only sequence.
///
/// There is no way to get mutable access to the elements: the backing
/// storage is an `Arc<[T]>`, and clones share it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImmutableList<T> {
    items: Arc<[T]>,
}

impl<T> ImmutableList<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> ImmutableList<T> {
    /// Copy the elements into a new, caller-owned vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        ImmutableList {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(items: Vec<T>) -> Self {
        ImmutableList {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T> Index<usize> for ImmutableList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Serialize> Serialize for ImmutableList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.items.iter())
    }
}
