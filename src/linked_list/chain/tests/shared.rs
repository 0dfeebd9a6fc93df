extern crate std;

use std::{sync::Arc, thread, vec::Vec};

use spin::Mutex;

use crate::linked_list::chain::list::Chain;

#[test]
fn test_chain_behind_external_lock() {
    let mut chain = Chain::new();
    let head = chain.append_after(None, 0usize).unwrap();
    let shared = Arc::new(Mutex::new(chain));

    let workers: Vec<_> = (1..=4)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..100 {
                    shared.lock().push_tail(Some(head), worker * 1000 + i).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let chain = shared.lock();
    assert_eq!(chain.count_total(Some(head)), 401);
    super::assert_consistent(&*chain, head);
}
