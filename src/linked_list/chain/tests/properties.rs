extern crate std;

use std::vec::Vec;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::chain::{list::Chain, pool::NodeRef};

use super::{assert_consistent, payloads};

fn check_model(chain: &Chain<u32>, model: &[NodeRef], values: &[u32]) {
    assert_eq!(chain.len(), model.len());
    let Some(&any) = model.first() else {
        return;
    };
    assert_eq!(assert_consistent(chain, any), model);
    assert_eq!(payloads(chain, any), values);

    for &node in model {
        assert_eq!(chain.count_total(Some(node)), model.len());
        let expected = match chain.next(Some(node)) {
            Some(next) => 1 + chain.count_forward(Some(next)),
            None => 1,
        };
        assert_eq!(chain.count_forward(Some(node)), expected);
    }
}

#[test]
fn test_random_operations_keep_chain_consistent() {
    let mut rng = StdRng::seed_from_u64(0x6d6f6c61);
    let mut chain = Chain::new();
    let mut model: Vec<NodeRef> = Vec::new();
    let mut values: Vec<u32> = Vec::new();
    let mut counter = 0u32;

    for _ in 0..2_000 {
        counter += 1;
        match rng.random_range(0..4) {
            0 => {
                let at = (!model.is_empty()).then(|| rng.random_range(0..model.len()));
                let node = chain.insert_after(at.map(|i| model[i]), counter).unwrap();
                let pos = at.map_or(0, |i| i + 1);
                model.insert(pos, node);
                values.insert(pos, counter);
            }
            1 => {
                let from = (!model.is_empty()).then(|| model[rng.random_range(0..model.len())]);
                let node = chain.append_after(from, counter).unwrap();
                model.push(node);
                values.push(counter);
            }
            2 if !model.is_empty() => {
                let i = rng.random_range(0..model.len());
                let before = model.len();
                let next = chain.remove(model[i]);
                assert_eq!(next, model.get(i + 1).copied());

                model.remove(i);
                values.remove(i);
                if let Some(&survivor) = model.first() {
                    assert_eq!(chain.count_total(Some(survivor)), before - 1);
                }
            }
            3 if !model.is_empty() => {
                let from = model[rng.random_range(0..model.len())];
                assert_eq!(chain.pop_tail(Some(from)), values.pop());
                model.pop();
            }
            _ => {}
        }
        check_model(&chain, &model, &values);
    }
}

#[test]
fn test_walk_forward_then_backward_returns_to_origin() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut chain = Chain::new();
    let head = chain.append_after(None, 0).unwrap();
    let mut nodes = Vec::from([head]);
    for i in 1..64 {
        let at = nodes[rng.random_range(0..nodes.len())];
        nodes.push(chain.insert_after(Some(at), i).unwrap());
    }

    for &origin in &nodes {
        let steps = rng.random_range(0..chain.count_forward(Some(origin)));
        let mut node = Some(origin);
        for _ in 0..steps {
            node = chain.next(node);
        }
        for _ in 0..steps {
            node = chain.prev(node);
        }
        assert_eq!(node, Some(origin));
    }
}
