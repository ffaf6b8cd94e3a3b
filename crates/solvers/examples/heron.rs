//! Computes √2 with Heron's method.
//!
//! ```text
//! cargo run --example heron
//! ```

use fixpoint_solvers::heron_sqrt;

const X: f64 = 2.0;

fn main() {
    let root = heron_sqrt(X);
    println!("sqrt({X:.1}) = {root:.16}");
}
