//! Traversal context threaded through the recursive serializers.
//!
//! The context is a value: every descent into a child type builds a new
//! context whose ancestor path is the parent's path plus the type being
//! expanded. The parent's context is never touched, so sibling branches
//! (two properties of the same object type, two members of one union) are
//! evaluated independently and only a true ancestor chain suppresses
//! re-expansion.

use smallvec::SmallVec;

use crate::options::DocGenOptions;

/// Ancestor path inline capacity. Default depth limits keep real paths
/// below this, so descending normally copies without allocating.
const INLINE_PATH: usize = 8;

/// Immutable recursion state for one top-level class visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalContext<T: Copy + Eq> {
    path: SmallVec<[T; INLINE_PATH]>,
    max_depth: usize,
    max_props: usize,
}

impl<T: Copy + Eq> TraversalContext<T> {
    /// Fresh context with an empty ancestor path.
    pub fn new(options: DocGenOptions) -> Self {
        let options = options.clamped();
        TraversalContext {
            path: SmallVec::new(),
            max_depth: options.max_depth,
            max_props: options.max_props,
        }
    }

    /// Types expanded on the way from the root to the current call.
    pub fn path(&self) -> &[T] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_props(&self) -> usize {
        self.max_props
    }

    /// Whether `ty` is already being expanded further up the path.
    pub fn is_ancestor(&self, ty: T) -> bool {
        self.path.contains(&ty)
    }

    /// Whether the children of `ty` must be suppressed at this point.
    ///
    /// The depth cutoff counts `ty` itself, so `max_depth == 0` suppresses
    /// children of the root type.
    pub fn should_stop(&self, ty: T) -> bool {
        self.is_ancestor(ty) || self.path.len() + 1 > self.max_depth
    }

    /// Whether a shape with `count` declared properties is too wide to expand.
    pub fn exceeds_props(&self, count: usize) -> bool {
        count > self.max_props
    }

    /// Context for the children of `ty`: the path extended by one.
    #[must_use]
    pub fn descend(&self, ty: T) -> Self {
        let mut path = SmallVec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(ty);
        TraversalContext {
            path,
            max_depth: self.max_depth,
            max_props: self.max_props,
        }
    }
}

#[cfg(test)]
#[path = "../tests/context_tests.rs"]
mod tests;
