//! The chain session handle.

use core::marker::PhantomData;

use super::{
    double::DoubleLink,
    iter::{ChainIter, Direction},
    node::ChainNode,
    pool::{AllocError, HeapPool, NodeAlloc, NodeRef},
    registry::{Registry, RegistryNode},
    traits::{Link, LinkWithPrev, NodeWithData},
};

/// A set of doubly linked chains sharing one node allocator.
///
/// `Chain` is the session handle: it owns every node it allocates and frees
/// them all when dropped. A single handle may hold any number of disjoint
/// chains; every operation takes one node as entry point and works on the chain
/// reachable from it.
///
/// Operations that accept `Option<NodeRef>` treat `None` as the empty chain.
///
/// # Panics
///
/// Every operation that receives a node handle panics if the handle is dead
/// (its node was removed) or was not issued by this chain's allocator.
pub struct Chain<T, A = HeapPool<ChainNode<T>>> {
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T> Chain<T> {
    /// Creates an empty chain on the global heap.
    pub const fn new() -> Self {
        Chain {
            alloc: HeapPool::new(),
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> Chain<T, A>
where
    A: NodeAlloc<ChainNode<T>>,
{
    /// Creates an empty chain that takes its nodes from `alloc`.
    pub fn with_alloc(alloc: A) -> Self {
        Chain {
            alloc,
            _marker: PhantomData,
        }
    }

    /// Returns the node allocator.
    pub fn alloc(&self) -> &A {
        &self.alloc
    }

    /// Consumes the chain and returns its allocator, live nodes included.
    pub fn into_alloc(self) -> A {
        self.alloc
    }

    /// Returns the number of live nodes across all chains of this handle.
    pub fn len(&self) -> usize {
        self.alloc.len()
    }

    /// Returns `true` if no node is live.
    pub fn is_empty(&self) -> bool {
        self.alloc.is_empty()
    }

    /// Returns `true` if `node` is a live node of this chain.
    pub fn contains(&self, node: NodeRef) -> bool {
        self.alloc.get(node).is_some()
    }

    /// Returns the payload of `node`, or `None` if the handle is dead.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.alloc.get(node).map(NodeWithData::data)
    }

    /// Returns the payload of `node` mutably, or `None` if the handle is dead.
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.alloc.get_mut(node).map(NodeWithData::data_mut)
    }

    #[track_caller]
    pub(crate) fn node(&self, node: NodeRef) -> &ChainNode<T> {
        match self.alloc.get(node) {
            Some(entry) => entry,
            None => dead_handle(node),
        }
    }

    #[track_caller]
    fn node_mut(&mut self, node: NodeRef) -> &mut ChainNode<T> {
        match self.alloc.get_mut(node) {
            Some(entry) => entry,
            None => dead_handle(node),
        }
    }

    fn allocate(&mut self, data: T, link: DoubleLink) -> Result<NodeRef, AllocError<T>> {
        self.alloc
            .allocate(ChainNode::new(data, link))
            .map_err(|AllocError(node)| {
                log::trace!("node allocation refused with {} live nodes", self.alloc.len());
                AllocError(node.into_data())
            })
    }

    /// Creates a standalone node and records it in `registry`.
    ///
    /// If the registry cannot record the node, the node is freed again and the
    /// payload is returned in the error.
    pub fn create_node<R>(
        &mut self,
        registry: &mut Registry<R>,
        data: T,
    ) -> Result<NodeRef, AllocError<T>>
    where
        R: NodeAlloc<RegistryNode>,
    {
        let node = self.allocate(data, DoubleLink::default())?;
        if registry.track(node).is_err() {
            let (data, _) = self.take(node);
            return Err(AllocError(data));
        }
        Ok(node)
    }

    /// Inserts `data` at the end of the chain reachable from `node`.
    ///
    /// With `None`, a standalone node is created. Returns the new node.
    ///
    /// # Errors
    ///
    /// On allocation failure the payload is returned and no link is touched.
    pub fn append_after(
        &mut self,
        node: Option<NodeRef>,
        data: T,
    ) -> Result<NodeRef, AllocError<T>> {
        let tail = node.map(|node| self.tail_of(node));
        self.insert_after(tail, data)
    }

    /// Inserts `data` directly after `node`, before its current successor.
    ///
    /// With `None`, a standalone node is created. Returns the new node.
    ///
    /// # Errors
    ///
    /// On allocation failure the payload is returned and no link is touched.
    pub fn insert_after(
        &mut self,
        node: Option<NodeRef>,
        data: T,
    ) -> Result<NodeRef, AllocError<T>> {
        let Some(anchor) = node else {
            return self.allocate(data, DoubleLink::default());
        };

        // Resolve the anchor first so a dead handle panics before allocating.
        let successor = self.node(anchor).next();
        let new = self.allocate(data, DoubleLink::new(Some(anchor), successor))?;

        if let Some(successor) = successor {
            self.node_mut(successor).set_prev(Some(new));
        }
        self.node_mut(anchor).set_next(Some(new));
        Ok(new)
    }

    /// Inserts `data` at the end of the chain reachable from `node`.
    ///
    /// Same as [`append_after`](Self::append_after).
    pub fn push_tail(
        &mut self,
        node: Option<NodeRef>,
        data: T,
    ) -> Result<NodeRef, AllocError<T>> {
        self.append_after(node, data)
    }

    /// Removes the tail of the chain reachable from `node` and returns its payload.
    ///
    /// Returns `None` for `None`. When `node` is itself the tail, `node` is removed.
    pub fn pop_tail(&mut self, node: Option<NodeRef>) -> Option<T> {
        let tail = self.tail_of(node?);
        let (data, _) = self.take(tail);
        Some(data)
    }

    /// Unlinks and frees `node`, returning its former successor.
    ///
    /// The neighbors are joined to each other. The payload is dropped; use
    /// [`take`](Self::take) to get it back.
    pub fn remove(&mut self, node: NodeRef) -> Option<NodeRef> {
        let (_, next) = self.take(node);
        next
    }

    /// Unlinks and frees `node`, returning its payload and former successor.
    pub fn take(&mut self, node: NodeRef) -> (T, Option<NodeRef>) {
        let link = self.node(node).link();

        if let Some(prev) = link.prev() {
            self.node_mut(prev).set_next(link.next());
        }
        if let Some(next) = link.next() {
            self.node_mut(next).set_prev(link.prev());
        }

        match self.alloc.free(node) {
            Some(entry) => (entry.into_data(), link.next()),
            None => dead_handle(node),
        }
    }

    /// Returns the successor of `node`.
    pub fn next(&self, node: Option<NodeRef>) -> Option<NodeRef> {
        node.and_then(|node| self.node(node).next())
    }

    /// Returns the predecessor of `node`.
    pub fn prev(&self, node: Option<NodeRef>) -> Option<NodeRef> {
        node.and_then(|node| self.node(node).prev())
    }

    /// Returns the first node of the chain containing `node`.
    pub fn head_of(&self, node: NodeRef) -> NodeRef {
        let mut head = node;
        while let Some(prev) = self.node(head).prev() {
            head = prev;
        }
        head
    }

    /// Returns the last node of the chain containing `node`.
    pub fn tail_of(&self, node: NodeRef) -> NodeRef {
        let mut tail = node;
        while let Some(next) = self.node(tail).next() {
            tail = next;
        }
        tail
    }

    /// Counts `node` and every node after it.
    pub fn count_forward(&self, node: Option<NodeRef>) -> usize {
        self.iter_forward(node).count()
    }

    /// Counts `node` and every node before it.
    pub fn count_backward(&self, node: Option<NodeRef>) -> usize {
        self.iter_backward(node).count()
    }

    /// Counts every node of the chain containing `node`.
    ///
    /// Both walks start at `node`, which is counted once, so the result is
    /// `count_forward + count_backward - 1`.
    pub fn count_total(&self, node: Option<NodeRef>) -> usize {
        match node {
            Some(_) => self.count_forward(node) + self.count_backward(node) - 1,
            None => 0,
        }
    }

    /// Iterates from `node` to the tail, yielding handles and payloads.
    pub fn iter_forward(&self, node: Option<NodeRef>) -> ChainIter<'_, T, A> {
        ChainIter::new(self, node, Direction::Forward)
    }

    /// Iterates from `node` to the head, yielding handles and payloads.
    pub fn iter_backward(&self, node: Option<NodeRef>) -> ChainIter<'_, T, A> {
        ChainIter::new(self, node, Direction::Backward)
    }
}

#[cold]
#[track_caller]
fn dead_handle(node: NodeRef) -> ! {
    panic!(
        "dead node handle: slot {} generation {}",
        node.index(),
        node.generation()
    )
}
