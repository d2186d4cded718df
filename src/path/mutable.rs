//! Vector-backed path
//!
//! Steps are stored contiguously and extended in place. A fork copies the
//! step vector, which costs one pointer copy per step; payloads stay shared.

use std::sync::Arc;

use super::{fmt_steps, steps_eq, Labels, Path, Step};
use crate::error::{PathError, Result};

pub struct MutablePath<T> {
    steps: Vec<Step<T>>,
}

impl<T> MutablePath<T> {
    pub fn new() -> Self {
        MutablePath { steps: Vec::new() }
    }

    /// Empty path with room for `capacity` steps before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        MutablePath {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// The raw steps in traversal order
    pub fn as_steps(&self) -> &[Step<T>] {
        &self.steps
    }
}

impl<T> Default for MutablePath<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MutablePath<T> {
    fn clone(&self) -> Self {
        tracing::trace!(size = self.steps.len(), "forking mutable path");
        MutablePath {
            steps: self.steps.clone(),
        }
    }
}

impl<T> Path<T> for MutablePath<T> {
    fn size(&self) -> usize {
        self.steps.len()
    }

    fn extend_shared(mut self, labels: Labels, object: Arc<T>) -> Self {
        self.steps.push(Step::new(labels, object));
        self
    }

    fn add_label(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        match self.steps.last_mut() {
            Some(step) => {
                step.insert_label(label);
                Ok(())
            }
            None => {
                tracing::debug!(label = %label, "add_label on empty path");
                Err(PathError::EmptyPath { label })
            }
        }
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.steps.get(index).map(Step::object).ok_or_else(|| {
            tracing::debug!(index, size = self.steps.len(), "index lookup failed");
            PathError::index_out_of_range(index, self.steps.len())
        })
    }

    fn has_label(&self, label: &str) -> bool {
        self.steps.iter().any(|step| step.labels.contains(label))
    }

    fn objects(&self) -> Vec<&T> {
        self.steps.iter().map(Step::object).collect()
    }

    fn labels(&self) -> Vec<&Labels> {
        self.steps.iter().map(Step::labels).collect()
    }

    fn head(&self) -> Option<&T> {
        self.steps.last().map(Step::object)
    }
}

impl<T: PartialEq> PartialEq for MutablePath<T> {
    fn eq(&self, other: &Self) -> bool {
        steps_eq::<T, _, _>(self, other)
    }
}

impl<T: Eq> Eq for MutablePath<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for MutablePath<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_steps::<T, _>(self, f)
    }
}

impl<T> FromIterator<(Labels, T)> for MutablePath<T> {
    fn from_iter<I: IntoIterator<Item = (Labels, T)>>(iter: I) -> Self {
        MutablePath {
            steps: iter
                .into_iter()
                .map(|(labels, object)| Step::new(labels, Arc::new(object)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_reuses_allocation() {
        let path = MutablePath::with_capacity(4).extend("a", 1);
        let before = path.as_steps().as_ptr();
        let path = path.extend("b", 2);
        assert_eq!(path.as_steps().as_ptr(), before);
        assert_eq!(path.size(), 2);
    }

    #[test]
    fn test_fork_shares_payloads() {
        let path = MutablePath::new().extend("a", String::from("v1"));
        let fork = path.clone();
        assert!(Arc::ptr_eq(
            path.as_steps()[0].shared_object(),
            fork.as_steps()[0].shared_object()
        ));
    }

    #[test]
    fn test_head() {
        let path: MutablePath<u32> = MutablePath::new();
        assert_eq!(path.head(), None);
        let path = path.extend("a", 1).extend("b", 2);
        assert_eq!(path.head(), Some(&2));
    }

    #[test]
    fn test_debug_lists_steps() {
        let path = MutablePath::new().extend("a", 7);
        assert_eq!(format!("{:?}", path), r#"[({"a"}, 7)]"#);
    }
}
