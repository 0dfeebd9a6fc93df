extern crate std;

use std::vec::Vec;

use crate::linked_list::chain::{
    list::Chain,
    node::ChainNode,
    pool::{AllocError, FixedPool, HeapPool, Limited},
    registry::{Registry, RegistryNode},
};

#[test]
fn test_registry_starts_with_root() {
    let registry = Registry::new().unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.iter().count(), 0);
    let _root = registry.root();
}

#[test]
fn test_create_node_is_tracked() {
    let mut registry = Registry::new().unwrap();
    let mut chain = Chain::new();

    let a = chain.create_node(&mut registry, "a").unwrap();
    let b = chain.create_node(&mut registry, "b").unwrap();

    // created nodes are standalone
    assert_eq!(chain.count_total(Some(a)), 1);
    assert_eq!(chain.count_total(Some(b)), 1);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.iter().collect::<Vec<_>>(), [a, b]);
}

#[test]
fn test_create_node_rolls_back_when_registry_is_full() {
    // root plus one entry
    let mut registry = Registry::with_alloc(FixedPool::<RegistryNode, 2>::new())
        .ok()
        .unwrap();
    let mut chain = Chain::new();

    let a = chain.create_node(&mut registry, 1).unwrap();
    assert_eq!(chain.create_node(&mut registry, 2), Err(AllocError(2)));

    assert_eq!(chain.len(), 1);
    assert!(chain.contains(a));
    assert_eq!(registry.iter().collect::<Vec<_>>(), [a]);
}

#[test]
fn test_create_node_fails_when_chain_is_full() {
    let mut registry = Registry::new().unwrap();
    let mut chain: Chain<char, Limited<HeapPool<ChainNode<char>>>> =
        Chain::with_alloc(Limited::new(HeapPool::new(), 0));

    assert_eq!(chain.create_node(&mut registry, 'x'), Err(AllocError('x')));
    assert!(registry.is_empty());
}

#[test]
fn test_registry_root_allocation_failure() {
    let err = Registry::with_alloc(FixedPool::<RegistryNode, 0>::new());
    assert!(err.is_err());
}

#[test]
fn test_prune_drops_dead_entries() {
    let mut registry = Registry::new().unwrap();
    let mut chain = Chain::new();

    let a = chain.create_node(&mut registry, 1).unwrap();
    let b = chain.create_node(&mut registry, 2).unwrap();
    let c = chain.create_node(&mut registry, 3).unwrap();

    chain.remove(a);
    chain.remove(c);
    assert_eq!(registry.len(), 3);

    assert_eq!(registry.prune(&chain), 2);
    assert_eq!(registry.iter().collect::<Vec<_>>(), [b]);

    // tracking keeps working after the old tail was pruned
    let d = chain.create_node(&mut registry, 4).unwrap();
    assert_eq!(registry.iter().collect::<Vec<_>>(), [b, d]);
    assert_eq!(registry.prune(&chain), 0);
}
