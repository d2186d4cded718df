//! Persistent path with a shared prefix
//!
//! Steps form a singly linked list from the newest step back to the first.
//! Forking clones one `Arc`, and extending a fork allocates only the new
//! segment, so siblings in a search tree share their common history.
//! Labelling the head step copies that one segment if it is shared.

use std::sync::Arc;

use super::{fmt_steps, steps_eq, Labels, MutablePath, Path, Step};
use crate::error::{PathError, Result};

struct Segment<T> {
    parent: Option<Arc<Segment<T>>>,
    step: Step<T>,
    /// Number of steps up to and including this one
    len: usize,
}

impl<T> Clone for Segment<T> {
    fn clone(&self) -> Self {
        Segment {
            parent: self.parent.clone(),
            step: self.step.clone(),
            len: self.len,
        }
    }
}

pub struct ImmutablePath<T> {
    head: Option<Arc<Segment<T>>>,
}

impl<T> ImmutablePath<T> {
    pub fn new() -> Self {
        ImmutablePath { head: None }
    }

    /// Segments from the newest step back to the first
    fn segments(&self) -> impl Iterator<Item = &Segment<T>> {
        std::iter::successors(self.head.as_deref(), |segment| segment.parent.as_deref())
    }

    /// Copy the steps into a vector-backed path
    pub fn to_mutable(&self) -> MutablePath<T> {
        let mut steps: Vec<&Step<T>> = self.segments().map(|segment| &segment.step).collect();
        steps.reverse();
        steps.into_iter().fold(
            MutablePath::with_capacity(self.size()),
            |path, step| path.extend_shared(step.labels().clone(), Arc::clone(step.shared_object())),
        )
    }
}

impl<T> Default for ImmutablePath<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ImmutablePath<T> {
    fn clone(&self) -> Self {
        tracing::trace!(size = self.size(), "forking immutable path");
        ImmutablePath {
            head: self.head.clone(),
        }
    }
}

// A long uniquely owned chain would otherwise drop recursively.
impl<T> Drop for ImmutablePath<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(segment) = next {
            match Arc::try_unwrap(segment) {
                Ok(mut segment) => next = segment.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Path<T> for ImmutablePath<T> {
    fn size(&self) -> usize {
        self.head.as_ref().map_or(0, |segment| segment.len)
    }

    fn extend_shared(mut self, labels: Labels, object: Arc<T>) -> Self {
        let parent = self.head.take();
        let len = parent.as_ref().map_or(0, |segment| segment.len) + 1;
        self.head = Some(Arc::new(Segment {
            parent,
            step: Step::new(labels, object),
            len,
        }));
        self
    }

    fn add_label(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        match self.head.as_mut() {
            Some(head) => {
                Arc::make_mut(head).step.insert_label(label);
                Ok(())
            }
            None => {
                tracing::debug!(label = %label, "add_label on empty path");
                Err(PathError::EmptyPath { label })
            }
        }
    }

    fn get(&self, index: usize) -> Result<&T> {
        let size = self.size();
        if index >= size {
            tracing::debug!(index, size, "index lookup failed");
            return Err(PathError::index_out_of_range(index, size));
        }
        self.segments()
            .nth(size - 1 - index)
            .map(|segment| segment.step.object())
            .ok_or_else(|| PathError::index_out_of_range(index, size))
    }

    fn has_label(&self, label: &str) -> bool {
        self.segments()
            .any(|segment| segment.step.labels().contains(label))
    }

    fn objects(&self) -> Vec<&T> {
        let mut objects: Vec<&T> = self
            .segments()
            .map(|segment| segment.step.object())
            .collect();
        objects.reverse();
        objects
    }

    fn labels(&self) -> Vec<&Labels> {
        let mut labels: Vec<&Labels> = self
            .segments()
            .map(|segment| segment.step.labels())
            .collect();
        labels.reverse();
        labels
    }

    fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|segment| segment.step.object())
    }

    fn get_by_label(&self, label: &str) -> Result<&T> {
        // Newest first, so the first hit is the last match.
        self.segments()
            .find(|segment| segment.step.labels().contains(label))
            .map(|segment| segment.step.object())
            .ok_or_else(|| {
                tracing::debug!(label, size = self.size(), "label lookup failed");
                PathError::label_not_found(label)
            })
    }
}

impl<T: PartialEq> PartialEq for ImmutablePath<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_head = match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_head || steps_eq::<T, _, _>(self, other)
    }
}

impl<T: Eq> Eq for ImmutablePath<T> {}

impl<T: PartialEq> PartialEq<MutablePath<T>> for ImmutablePath<T> {
    fn eq(&self, other: &MutablePath<T>) -> bool {
        steps_eq::<T, _, _>(self, other)
    }
}

impl<T: PartialEq> PartialEq<ImmutablePath<T>> for MutablePath<T> {
    fn eq(&self, other: &ImmutablePath<T>) -> bool {
        steps_eq::<T, _, _>(self, other)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ImmutablePath<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_steps::<T, _>(self, f)
    }
}

impl<T> FromIterator<(Labels, T)> for ImmutablePath<T> {
    fn from_iter<I: IntoIterator<Item = (Labels, T)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ImmutablePath::new(), |path, (labels, object)| {
                path.extend_with_labels(labels, object)
            })
    }
}

impl<T> From<&MutablePath<T>> for ImmutablePath<T> {
    fn from(path: &MutablePath<T>) -> Self {
        path.as_steps()
            .iter()
            .fold(ImmutablePath::new(), |acc, step| {
                acc.extend_shared(step.labels().clone(), Arc::clone(step.shared_object()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_of<T>(path: &ImmutablePath<T>) -> Option<&Arc<Segment<T>>> {
        path.head.as_ref().and_then(|head| head.parent.as_ref())
    }

    #[test]
    fn test_fork_shares_prefix() {
        let base = ImmutablePath::new().extend("a", 1).extend("b", 2);
        let left = base.clone().extend("c", 3);
        let right = base.clone().extend("d", 4);

        let base_head = base.head.as_ref().unwrap();
        assert!(Arc::ptr_eq(parent_of(&left).unwrap(), base_head));
        assert!(Arc::ptr_eq(parent_of(&right).unwrap(), base_head));
    }

    #[test]
    fn test_add_label_after_fork_copies_head_only() {
        let base = ImmutablePath::new().extend("a", 1).extend("b", 2);
        let mut fork = base.clone();
        fork.add_label("x").unwrap();

        assert!(!Arc::ptr_eq(
            fork.head.as_ref().unwrap(),
            base.head.as_ref().unwrap()
        ));
        assert!(Arc::ptr_eq(
            parent_of(&fork).unwrap(),
            parent_of(&base).unwrap()
        ));
        assert!(fork.has_label("x"));
        assert!(!base.has_label("x"));
    }

    #[test]
    fn test_add_label_unshared_mutates_in_place() {
        let mut path = ImmutablePath::new().extend("a", 1);
        let before = Arc::as_ptr(path.head.as_ref().unwrap());
        path.add_label("x").unwrap();
        assert_eq!(Arc::as_ptr(path.head.as_ref().unwrap()), before);
    }

    #[test]
    fn test_get_by_label_prefers_latest() {
        let path = ImmutablePath::new()
            .extend("a", 1)
            .extend("b", 2)
            .extend("a", 3);
        assert_eq!(path.get_by_label("a").unwrap(), &3);
    }

    #[test]
    fn test_drop_long_chain() {
        let mut path = ImmutablePath::new();
        for i in 0..200_000u32 {
            path = path.extend_with_labels(Labels::new(), i);
        }
        assert_eq!(path.size(), 200_000);
        drop(path);
    }

    #[test]
    fn test_drop_keeps_shared_prefix_alive() {
        let base = ImmutablePath::new().extend("a", 1).extend("b", 2);
        let fork = base.clone().extend("c", 3);
        drop(base);
        assert_eq!(fork.objects(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_conversions_preserve_steps() {
        let mutable = MutablePath::new().extend("a", 1).extend("b", 2);
        let immutable = ImmutablePath::from(&mutable);
        assert_eq!(immutable, mutable);
        assert_eq!(immutable.to_mutable(), mutable);
    }
}
