//! An explicit registry of created nodes.
//!
//! The registry is itself a chain. Its root node carries no handle and every
//! following node carries the handle of one node created through
//! [`Chain::create_node`]. Entries are weak: removing a node from its chain
//! leaves the entry in place until [`Registry::prune`] drops it.

use super::{
    list::Chain,
    node::ChainNode,
    pool::{AllocError, HeapPool, NodeAlloc, NodeRef},
};

/// The node type stored by a registry's allocator.
pub type RegistryNode = ChainNode<Option<NodeRef>>;

/// A bookkeeping chain recording node handles.
pub struct Registry<A = HeapPool<RegistryNode>> {
    entries: Chain<Option<NodeRef>, A>,
    root: NodeRef,
    tail: NodeRef,
}

impl Registry {
    /// Creates a registry on the global heap.
    ///
    /// # Errors
    ///
    /// Fails if the root node cannot be allocated.
    pub fn new() -> Result<Self, AllocError<()>> {
        Self::with_alloc(HeapPool::new()).map_err(|_| AllocError(()))
    }
}

impl<A> Registry<A>
where
    A: NodeAlloc<RegistryNode>,
{
    /// Creates a registry whose nodes come from `alloc`.
    ///
    /// # Errors
    ///
    /// Fails if the root node cannot be allocated; the allocator is handed back.
    pub fn with_alloc(alloc: A) -> Result<Self, AllocError<A>> {
        let mut entries = Chain::with_alloc(alloc);
        match entries.append_after(None, None) {
            Ok(root) => Ok(Registry {
                entries,
                root,
                tail: root,
            }),
            Err(_) => Err(AllocError(entries.into_alloc())),
        }
    }

    /// Returns the root node of the registry chain.
    pub fn root(&self) -> NodeRef {
        self.root
    }

    /// Returns the number of recorded handles, live or not.
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns `true` if no handle is recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records `node` at the end of the registry and returns the entry.
    ///
    /// # Errors
    ///
    /// Returns `node` if the entry cannot be allocated.
    pub fn track(&mut self, node: NodeRef) -> Result<NodeRef, AllocError<NodeRef>> {
        let entry = self
            .entries
            .insert_after(Some(self.tail), Some(node))
            .map_err(|AllocError(_)| AllocError(node))?;
        self.tail = entry;
        Ok(entry)
    }

    /// Iterates over the recorded handles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef> + '_ {
        self.entries
            .iter_forward(self.entries.next(Some(self.root)))
            .filter_map(|(_, node)| *node)
    }

    /// Drops every entry whose node is no longer live in `chain`.
    ///
    /// Returns the number of entries dropped.
    pub fn prune<T, B>(&mut self, chain: &Chain<T, B>) -> usize
    where
        B: NodeAlloc<ChainNode<T>>,
    {
        let mut pruned = 0;
        let mut cursor = self.entries.next(Some(self.root));
        while let Some(entry) = cursor {
            let live = self
                .entries
                .get(entry)
                .copied()
                .flatten()
                .is_some_and(|node| chain.contains(node));
            cursor = if live {
                self.entries.next(Some(entry))
            } else {
                pruned += 1;
                self.entries.remove(entry)
            };
        }
        self.tail = self.entries.tail_of(self.root);
        pruned
    }
}
