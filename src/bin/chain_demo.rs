//! Builds a few chains and prints them, logging each step.
//!
//! Run with `RUST_LOG=debug cargo run --features demo --bin chain_demo`.

use log::{debug, info};
use mola_dlist::{Chain, Registry};

fn main() {
    env_logger::init();

    let mut registry = match Registry::new() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("registry: {err}");
            std::process::exit(1);
        }
    };
    let mut chain = Chain::new();

    let built = (|| {
        let head = chain.append_after(None, "1")?;
        let two = chain.append_after(Some(head), "2")?;
        chain.append_after(Some(head), "3")?;
        let four = chain.append_after(Some(two), "4")?;
        chain.append_after(Some(head), "5")?;
        debug!("appended five nodes, {} live", chain.len());

        let next = chain.remove(two);
        debug!("removed node 2, successor {next:?}");
        chain.insert_after(Some(head), "2")?;

        let loose = chain.create_node(&mut registry, "loose")?;
        debug!("created standalone node {loose:?}");
        Ok::<_, mola_dlist::AllocError<&str>>((head, four))
    })();

    let (head, four) = match built {
        Ok(nodes) => nodes,
        Err(err) => {
            eprintln!("chain: {err}");
            std::process::exit(1);
        }
    };

    println!("Count: {}", chain.count_total(Some(four)));
    for (_, value) in chain.iter_forward(Some(head)) {
        println!("{value}");
    }

    info!(
        "popped {:?}, registry holds {} node(s)",
        chain.pop_tail(Some(head)),
        registry.iter().count()
    );
}
