//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `labkit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use labkit_core::{CalcState, Key, Operator};

fn main() {
    println!("labkit_core ping={}", labkit_core::ping());
    println!("labkit_core version={}", labkit_core::core_version());

    // Tiny end-to-end probe through the calculator reducer.
    let state = CalcState::new()
        .press(Key::Digit(2))
        .press(Key::Op(Operator::Add))
        .press(Key::Digit(2))
        .press(Key::Equals);
    println!("labkit_core calc 2+2={}", state.display());
}
