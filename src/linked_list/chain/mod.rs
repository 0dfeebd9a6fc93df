//! # Pool-backed Doubly Linked Chain
//!
//! This module provides a doubly linked chain whose nodes are stored in an
//! injectable pool instead of behind raw pointers.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the link traits, `Link`, `LinkWithPrev` and `NodeWithData`.
//! - [`pool::NodeAlloc`]: The allocator capability. [`pool::HeapPool`] uses the heap,
//!   [`pool::FixedPool`] a const-sized array, [`pool::Limited`] caps another pool.
//! - [`double::DoubleLink`]: The previous/next pair stored in every node.
//! - [`node::ChainNode`]: A link plus the caller's payload.
//! - [`list::Chain`]: The session handle that owns the nodes and performs every operation.
//! - [`registry::Registry`]: An optional chain that records every node created through
//!   [`list::Chain::create_node`].
//!
//! ## Contracts
//!
//! The chain never hands out references into its pool that outlive a borrow, so
//! memory safety does not depend on the caller. The remaining rules are:
//!
//! - A [`pool::NodeRef`] is only meaningful for the chain that issued it.
//! - A handle is dead once its node is removed. Passing a dead handle to any
//!   node-taking operation panics; it never reaches another node that reused the slot.
//! - No internal locking is done. Sharing a chain between threads needs an
//!   external lock around the whole chain.

pub mod traits;
pub mod pool;
pub mod double;
pub mod node;
pub mod list;
pub mod iter;
pub mod registry;

#[cfg(test)]
mod tests;
