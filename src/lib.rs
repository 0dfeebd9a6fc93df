//! Doubly linked chains for memory-constrained targets.
//!
//! See [`linked_list`] for an overview and examples.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod linked_list;

pub use linked_list::chain::{
    double::DoubleLink,
    list::Chain,
    node::ChainNode,
    pool::{AllocError, FixedPool, HeapPool, Limited, NodeAlloc, NodeRef},
    registry::Registry,
};
