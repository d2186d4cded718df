//! Trail
//!
//! Path histories for graph traversals: the steps a traverser took, the
//! object each step produced, and the labels attached along the way.
//! Forking a path for parallel exploration is a `clone()`; the persistent
//! backing makes that O(1) and keeps sibling branches independent.

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

pub use config::{Backing, PathConfig};
pub use error::{PathError, Result};
pub use path::{
    ImmutablePath, LabeledStep, Labels, MutablePath, Path, PathView, Pop, Step, Steps,
    TraversalPath,
};
