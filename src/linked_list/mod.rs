//! A doubly linked chain built on an injectable node allocator.
//!
//! Nodes live in a pool owned by a [`Chain`](chain::list::Chain) handle and are
//! addressed through copyable [`NodeRef`](chain::pool::NodeRef) handles. Any node
//! of a chain can be used as the entry point for walking, counting or growing
//! the chain it belongs to.
//!
//! # Examples
//!
//! ```
//! use mola_dlist::linked_list::chain::list::Chain;
//!
//! let mut chain = Chain::new();
//! let head = chain.append_after(None, "1").unwrap();
//! let two = chain.append_after(Some(head), "2").unwrap();
//! chain.append_after(Some(head), "3").unwrap();
//!
//! assert_eq!(chain.count_forward(Some(head)), 3);
//! assert_eq!(chain.count_total(Some(two)), 3);
//!
//! let values: Vec<_> = chain.iter_forward(Some(head)).map(|(_, v)| *v).collect();
//! assert_eq!(values, vec!["1", "2", "3"]);
//!
//! assert_eq!(chain.pop_tail(Some(head)), Some("3"));
//! assert_eq!(chain.count_forward(Some(head)), 2);
//! ```
pub mod chain;
