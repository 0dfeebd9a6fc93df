extern crate std;

use hashbrown::HashSet;
use std::vec::Vec;

use super::{
    list::Chain,
    node::ChainNode,
    pool::{NodeAlloc, NodeRef},
};

mod properties;
mod registry;
mod shared;

/// Walks the chain containing `node` and checks every link pair.
///
/// Returns the handles from head to tail.
fn assert_consistent<T, A>(chain: &Chain<T, A>, node: NodeRef) -> Vec<NodeRef>
where
    A: NodeAlloc<ChainNode<T>>,
{
    let head = chain.head_of(node);
    assert_eq!(chain.prev(Some(head)), None, "head has a predecessor");

    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut current = Some(head);
    while let Some(node) = current {
        assert!(seen.insert(node), "cycle through {node:?}");
        let next = chain.next(Some(node));
        if let Some(next) = next {
            assert_eq!(chain.prev(Some(next)), Some(node), "broken back link");
        }
        order.push(node);
        current = next;
    }

    let mut backward: Vec<_> = chain
        .iter_backward(order.last().copied())
        .map(|(node, _)| node)
        .collect();
    backward.reverse();
    assert_eq!(backward, order, "forward and backward walks differ");
    order
}

fn payloads<T: Copy, A>(chain: &Chain<T, A>, node: NodeRef) -> Vec<T>
where
    A: NodeAlloc<ChainNode<T>>,
{
    chain
        .iter_forward(Some(chain.head_of(node)))
        .map(|(_, data)| *data)
        .collect()
}
