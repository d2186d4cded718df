//! Traversal paths
//!
//! A path records the walk a traverser took through a graph: one step per
//! executed traversal step, each holding the object that step produced and
//! the set of labels the step was given. Two views are exposed, `objects()`
//! and `labels()`, always index-aligned and of length `size()`.
//!
//! Backings:
//! - [`MutablePath`]: contiguous vector, extended in place
//! - [`ImmutablePath`]: persistent list whose prefix is shared between forks
//! - [`TraversalPath`]: either of the above, chosen at runtime from config

pub mod any;
pub mod immutable;
pub mod mutable;
pub mod view;


use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::{PathError, Result};

pub use any::TraversalPath;
pub use immutable::ImmutablePath;
pub use mutable::MutablePath;
pub use view::{LabeledStep, PathView};

/// The label set of a single step
pub type Labels = BTreeSet<String>;

/// Which step wins when several steps carry the same label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pop {
    /// The earliest step in traversal order
    First,
    /// The most recently appended step
    #[default]
    Last,
}

/// One position in a path: a label set and the object produced there.
///
/// The object is reference counted so forked paths share payloads instead of
/// copying them.
pub struct Step<T> {
    labels: Labels,
    object: Arc<T>,
}

impl<T> Step<T> {
    pub fn new(labels: Labels, object: Arc<T>) -> Self {
        Step { labels, object }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn object(&self) -> &T {
        &self.object
    }

    /// The shared handle to the object, for callers that keep it past the path
    pub fn shared_object(&self) -> &Arc<T> {
        &self.object
    }

    pub(crate) fn insert_label(&mut self, label: String) {
        self.labels.insert(label);
    }
}

// Derive would demand `T: Clone`; only the `Arc` is cloned.
impl<T> Clone for Step<T> {
    fn clone(&self) -> Self {
        Step {
            labels: self.labels.clone(),
            object: Arc::clone(&self.object),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Step<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("labels", &self.labels)
            .field("object", &self.object)
            .finish()
    }
}

/// Build a label set holding a single label
pub fn single_label(label: impl Into<String>) -> Labels {
    let mut labels = Labels::new();
    labels.insert(label.into());
    labels
}

/// The history of a traversal branch.
///
/// Implementors supply the primitive accessors and mutators; iteration,
/// streaming, simple-path detection and label tie-breaking are provided here
/// so every backing behaves the same.
///
/// Forking is `Clone`: after `let fork = path.clone()`, extending or labelling
/// either one never shows up in the other.
pub trait Path<T>: Clone {
    /// Number of steps in the path
    fn size(&self) -> usize;

    /// Append a step whose object is already shared with other owners.
    ///
    /// The returned path is the authoritative extended path.
    fn extend_shared(self, labels: Labels, object: Arc<T>) -> Self;

    /// Add a label to the most recently appended step.
    ///
    /// Fails with [`PathError::EmptyPath`] when there is no step to label.
    fn add_label(&mut self, label: impl Into<String>) -> Result<()>;

    /// Object at `index` in traversal order
    fn get(&self, index: usize) -> Result<&T>;

    /// True if any step carries `label`
    fn has_label(&self, label: &str) -> bool;

    /// Objects in traversal order
    fn objects(&self) -> Vec<&T>;

    /// Label sets in traversal order, index-aligned with [`Path::objects`]
    fn labels(&self) -> Vec<&Labels>;

    /// Append a step labelled with a single label
    fn extend(self, label: impl Into<String>, object: T) -> Self {
        self.extend_with_labels(single_label(label), object)
    }

    /// Append a step carrying an arbitrary, possibly empty, label set
    fn extend_with_labels(self, labels: Labels, object: T) -> Self {
        self.extend_shared(labels, Arc::new(object))
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Object of the most recently appended step
    fn head(&self) -> Option<&T> {
        self.size().checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Object of the most recent step carrying `label`
    fn get_by_label(&self, label: &str) -> Result<&T> {
        self.get_popped(Pop::Last, label)
    }

    /// Object of the first or last step carrying `label`
    fn get_popped(&self, pop: Pop, label: &str) -> Result<&T> {
        let mut matches = self
            .steps()
            .filter(|(labels, _)| labels.contains(label))
            .map(|(_, object)| object);
        let found = match pop {
            Pop::First => matches.next(),
            Pop::Last => matches.next_back(),
        };
        found.ok_or_else(|| {
            tracing::debug!(label, size = self.size(), "label lookup failed");
            PathError::label_not_found(label)
        })
    }

    /// Every object whose step carries `label`, in traversal order
    fn get_all(&self, label: &str) -> Vec<&T> {
        self.steps()
            .filter(|(labels, _)| labels.contains(label))
            .map(|(_, object)| object)
            .collect()
    }

    /// A simple path revisits no object.
    ///
    /// Compares every pair with the object's own equality, so objects need
    /// neither `Hash` nor `Ord`. Path length is bounded by traversal depth.
    fn is_simple(&self) -> bool
    where
        T: PartialEq,
    {
        let objects = self.objects();
        for (i, object) in objects.iter().enumerate() {
            if objects[i + 1..].iter().any(|other| object == other) {
                return false;
            }
        }
        true
    }

    fn for_each_object<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.objects().into_iter().for_each(consumer);
    }

    fn for_each_step<F>(&self, mut consumer: F)
    where
        F: FnMut(&Labels, &T),
    {
        for (labels, object) in self.steps() {
            consumer(labels, object);
        }
    }

    /// `(labels, object)` pairs in traversal order.
    ///
    /// Each call starts a fresh iterator; the path is not consumed.
    fn steps(&self) -> Steps<'_, T> {
        Steps {
            inner: self.labels().into_iter().zip(self.objects()),
        }
    }

    /// Borrowed labeled view for result emission
    fn view(&self) -> PathView<'_, T> {
        PathView::new(self.steps())
    }
}

/// Iterator over the steps of a path, see [`Path::steps`]
pub struct Steps<'a, T> {
    inner: std::iter::Zip<std::vec::IntoIter<&'a Labels>, std::vec::IntoIter<&'a T>>,
}

impl<'a, T> Iterator for Steps<'a, T> {
    type Item = (&'a Labels, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Steps<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Steps<'_, T> {}

/// Step-wise equality shared by every backing
pub(crate) fn steps_eq<T, A, B>(a: &A, b: &B) -> bool
where
    T: PartialEq,
    A: Path<T>,
    B: Path<T>,
{
    a.size() == b.size() && a.steps().eq(b.steps())
}

/// Debug output shared by every backing
pub(crate) fn fmt_steps<T, P>(path: &P, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
where
    T: std::fmt::Debug,
    P: Path<T>,
{
    f.debug_list().entries(path.steps()).finish()
}
