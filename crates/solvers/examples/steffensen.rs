//! Computes √2 as the positive root of `2 - x²` with Steffensen's method.
//!
//! ```text
//! cargo run --example steffensen
//! ```

use fixpoint_solvers::steffensen_root;

const X: f64 = 2.0;

fn main() {
    let root = steffensen_root(|x: f64| X - x * x, X);
    println!("sqrt({X:.1}) = {root:.16}");
}
