//! These tests run against an in-process mock runtime (`mock`) rather than
//! a real OpenCL implementation, so they exercise argument marshalling,
//! status handling and reference counting without any device present.

mod handles;
mod forwarding;
mod context_props;
mod functions;

use rand::{self, Rng};

/// Returns `count` distinct, non-zero, pointer-aligned addresses in random
/// order.
fn random_addrs(count: usize) -> Vec<usize> {
    let mut rng = rand::thread_rng();
    let mut addrs: Vec<usize> = Vec::with_capacity(count);

    while addrs.len() < count {
        let addr = rng.gen_range(1..(usize::MAX >> 4)) << 3;
        if !addrs.contains(&addr) {
            addrs.push(addr);
        }
    }
    addrs
}
