//! Borrowed labeled view of a path for result emission
//!
//! The view serializes as an array of `{"labels": [...], "object": ...}` in
//! traversal order. Objects are encoded by their own `Serialize` impl.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Labels, Steps};

/// One step of a [`PathView`]
#[derive(Debug, Serialize)]
pub struct LabeledStep<'a, T> {
    pub labels: &'a Labels,
    pub object: &'a T,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PathView<'a, T> {
    steps: Vec<LabeledStep<'a, T>>,
}

impl<'a, T> PathView<'a, T> {
    pub fn new(steps: Steps<'a, T>) -> Self {
        PathView {
            steps: steps
                .map(|(labels, object)| LabeledStep { labels, object })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledStep<'a, T>> {
        self.steps.iter()
    }

    /// Label to object, the latest step winning when a label repeats
    pub fn by_label(&self) -> BTreeMap<&'a str, &'a T> {
        let mut bindings = BTreeMap::new();
        for step in &self.steps {
            for label in step.labels {
                bindings.insert(label.as_str(), step.object);
            }
        }
        bindings
    }
}

impl<'a, T> IntoIterator for PathView<'a, T> {
    type Item = LabeledStep<'a, T>;
    type IntoIter = std::vec::IntoIter<LabeledStep<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
