//! Chain nodes.

use super::{
    double::DoubleLink,
    pool::NodeRef,
    traits::{Link, LinkWithPrev, NodeWithData},
};

/// A node of a chain: a [`DoubleLink`] and the caller's payload.
///
/// The chain never looks at the payload. To keep the payload owned by the
/// caller, store a borrow or a handle as `T`.
#[derive(Debug)]
pub struct ChainNode<T> {
    link: DoubleLink,
    data: T,
}

impl<T> ChainNode<T> {
    pub(crate) const fn new(data: T, link: DoubleLink) -> Self {
        ChainNode { link, data }
    }

    /// Returns a copy of the node's link.
    pub const fn link(&self) -> DoubleLink {
        self.link
    }
}

impl<T> Link for ChainNode<T> {
    #[inline]
    fn next(&self) -> Option<NodeRef> {
        self.link.next()
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeRef>) {
        self.link.set_next(next);
    }
}

impl<T> LinkWithPrev for ChainNode<T> {
    #[inline]
    fn prev(&self) -> Option<NodeRef> {
        self.link.prev()
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NodeRef>) {
        self.link.set_prev(prev);
    }
}

impl<T> NodeWithData for ChainNode<T> {
    type Data = T;

    #[inline]
    fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    #[inline]
    fn into_data(self) -> T {
        self.data
    }
}
