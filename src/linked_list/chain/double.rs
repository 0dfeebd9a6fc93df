//! The link stored in every chain node.

use super::{
    pool::NodeRef,
    traits::{Link, LinkWithPrev},
};

/// A link in a doubly linked chain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoubleLink {
    next: Option<NodeRef>,
    prev: Option<NodeRef>,
}

impl DoubleLink {
    /// Creates a link between `prev` and `next`.
    pub const fn new(prev: Option<NodeRef>, next: Option<NodeRef>) -> Self {
        DoubleLink { next, prev }
    }

    /// Returns `true` if the link has no neighbor on either side.
    pub const fn is_detached(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}

impl Link for DoubleLink {
    #[inline]
    fn next(&self) -> Option<NodeRef> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeRef>) {
        self.next = next;
    }
}

impl LinkWithPrev for DoubleLink {
    #[inline]
    fn prev(&self) -> Option<NodeRef> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NodeRef>) {
        self.prev = prev;
    }
}
