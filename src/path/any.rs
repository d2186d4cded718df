//! Runtime-selected path backing

use std::sync::Arc;

use super::{fmt_steps, steps_eq, ImmutablePath, Labels, MutablePath, Path};
use crate::config::Backing;
use crate::error::Result;

/// A path whose backing is chosen at runtime, usually from [`crate::config::PathConfig`]
pub enum TraversalPath<T> {
    Mutable(MutablePath<T>),
    Immutable(ImmutablePath<T>),
}

macro_rules! delegate {
    ($self:expr, $path:ident => $body:expr) => {
        match $self {
            TraversalPath::Mutable($path) => $body,
            TraversalPath::Immutable($path) => $body,
        }
    };
}

impl<T> TraversalPath<T> {
    /// Empty path using the given backing
    pub fn new(backing: Backing) -> Self {
        match backing {
            Backing::Mutable => TraversalPath::Mutable(MutablePath::new()),
            Backing::Immutable => TraversalPath::Immutable(ImmutablePath::new()),
        }
    }

    pub fn backing(&self) -> Backing {
        match self {
            TraversalPath::Mutable(_) => Backing::Mutable,
            TraversalPath::Immutable(_) => Backing::Immutable,
        }
    }
}

impl<T> Default for TraversalPath<T> {
    fn default() -> Self {
        Self::new(Backing::default())
    }
}

impl<T> Clone for TraversalPath<T> {
    fn clone(&self) -> Self {
        match self {
            TraversalPath::Mutable(path) => TraversalPath::Mutable(path.clone()),
            TraversalPath::Immutable(path) => TraversalPath::Immutable(path.clone()),
        }
    }
}

impl<T> From<MutablePath<T>> for TraversalPath<T> {
    fn from(path: MutablePath<T>) -> Self {
        TraversalPath::Mutable(path)
    }
}

impl<T> From<ImmutablePath<T>> for TraversalPath<T> {
    fn from(path: ImmutablePath<T>) -> Self {
        TraversalPath::Immutable(path)
    }
}

impl<T> Path<T> for TraversalPath<T> {
    fn size(&self) -> usize {
        delegate!(self, path => path.size())
    }

    fn extend_shared(self, labels: Labels, object: Arc<T>) -> Self {
        match self {
            TraversalPath::Mutable(path) => {
                TraversalPath::Mutable(path.extend_shared(labels, object))
            }
            TraversalPath::Immutable(path) => {
                TraversalPath::Immutable(path.extend_shared(labels, object))
            }
        }
    }

    fn add_label(&mut self, label: impl Into<String>) -> Result<()> {
        delegate!(self, path => path.add_label(label))
    }

    fn get(&self, index: usize) -> Result<&T> {
        delegate!(self, path => path.get(index))
    }

    fn has_label(&self, label: &str) -> bool {
        delegate!(self, path => path.has_label(label))
    }

    fn objects(&self) -> Vec<&T> {
        delegate!(self, path => path.objects())
    }

    fn labels(&self) -> Vec<&Labels> {
        delegate!(self, path => path.labels())
    }

    fn head(&self) -> Option<&T> {
        delegate!(self, path => path.head())
    }

    fn get_by_label(&self, label: &str) -> Result<&T> {
        delegate!(self, path => path.get_by_label(label))
    }
}

impl<T: PartialEq> PartialEq for TraversalPath<T> {
    fn eq(&self, other: &Self) -> bool {
        steps_eq::<T, _, _>(self, other)
    }
}

impl<T: Eq> Eq for TraversalPath<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for TraversalPath<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_steps::<T, _>(self, f)
    }
}
