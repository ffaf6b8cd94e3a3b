//! Approximates π as the root of `sin` between 3 and 4.
//!
//! ```text
//! cargo run --example bisection
//! ```

use fixpoint_solvers::bisect;

fn main() {
    let pi = bisect(f64::sin, 3.0, 4.0);
    println!("pi = {pi:.16}");
}
