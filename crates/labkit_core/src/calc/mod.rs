//! Calculator engine.
//!
//! # Responsibility
//! - Map keypad events to display, pending operation, memory and history.
//! - Keep all arithmetic faults in-band as sentinel display values.
//!
//! # Invariants
//! - Every keypress flows through one pure reducer (`CalcState::press`).
//! - The display never holds more than one decimal point.
//! - History never exceeds the last 10 entries.

pub mod engine;
