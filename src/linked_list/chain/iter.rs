//! Iterators over the nodes reachable from a starting node.

use core::iter::FusedIterator;

use super::{
    list::Chain,
    node::ChainNode,
    pool::{NodeAlloc, NodeRef},
    traits::{Link, LinkWithPrev, NodeWithData},
};

/// The direction a [`ChainIter`] walks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Follow `next` links.
    Forward,
    /// Follow `prev` links.
    Backward,
}

/// An iterator over the nodes reachable from a starting node.
pub struct ChainIter<'a, T, A> {
    chain: &'a Chain<T, A>,
    current: Option<NodeRef>,
    direction: Direction,
}

impl<'a, T, A> ChainIter<'a, T, A>
where
    A: NodeAlloc<ChainNode<T>>,
{
    /// Creates an iterator starting at `start`, inclusive.
    pub(crate) fn new(chain: &'a Chain<T, A>, start: Option<NodeRef>, direction: Direction) -> Self {
        Self {
            chain,
            current: start,
            direction,
        }
    }
}

impl<'a, T, A> Iterator for ChainIter<'a, T, A>
where
    A: NodeAlloc<ChainNode<T>>,
{
    type Item = (NodeRef, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let node = self.chain.node(current);
        self.current = match self.direction {
            Direction::Forward => node.next(),
            Direction::Backward => node.prev(),
        };
        Some((current, node.data()))
    }
}

impl<T, A> FusedIterator for ChainIter<'_, T, A> where A: NodeAlloc<ChainNode<T>> {}
