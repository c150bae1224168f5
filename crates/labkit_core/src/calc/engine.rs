//! Immediate-execution calculator state machine.
//!
//! # Responsibility
//! - Define the keypad event vocabulary (`Key`, `Operator`).
//! - Reduce keypresses into a fresh `CalcState` value per transition.
//!
//! # Invariants
//! - `press` never mutates the receiver; each transition returns a new state.
//! - Chained operators resolve left-to-right with no precedence.
//! - Division by zero and negative square root are the only fault kinds and
//!   both are represented as sentinel display strings, never panics.

use serde::{Deserialize, Serialize};

/// Sentinel shown for division by zero, matching the original app verbatim.
pub const ERROR_DIV_ZERO: &str = "Ошибка: деление на 0";
/// Error detail recorded for a negative square root.
pub const ERROR_NEGATIVE_SQRT: &str = "Ошибка: отрицательное число";
/// Short sentinel shown on the display for a negative square root, and the
/// marker a failed history line ends with.
pub const ERROR_SHORT: &str = "Ошибка";

const HISTORY_LIMIT: usize = 10;

/// Binary arithmetic operations available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Display symbol used on the keypad and in history lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operation; `None` signals division by zero.
    fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    None
                } else {
                    Some(lhs / rhs)
                }
            }
        }
    }
}

/// One keypad action. Every button on the pad maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Digit 0..=9. Out-of-range values are ignored.
    Digit(u8),
    Decimal,
    ToggleSign,
    Op(Operator),
    Equals,
    Clear,
    ClearEntry,
    Backspace,
    Reciprocal,
    SquareRoot,
    MemoryClear,
    MemoryRecall,
    MemoryStore,
    MemoryAdd,
    MemorySubtract,
}

/// Coarse state-machine phase derived from the full state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Digits accumulate into the display.
    Entering,
    /// An operator or `=` was pressed; the next digit replaces the display.
    OperatorPending,
    /// A fault sentinel is shown until a digit or decimal keypress.
    Error,
}

/// Complete calculator state. Replaced wholesale by each `press`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcState {
    display: String,
    pending_operand: f64,
    pending_operator: Option<Operator>,
    awaiting_new_entry: bool,
    memory: f64,
    memory_set: bool,
    history: Vec<String>,
    error: Option<String>,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: 0.0,
            pending_operator: None,
            awaiting_new_entry: false,
            memory: 0.0,
            memory_set: false,
            history: Vec::new(),
            error: None,
        }
    }
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently shown value, in-progress entry, or an error sentinel.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Recorded `lhs op rhs = result` lines, oldest first, capped at 10.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Error detail when the machine is in the `Error` phase.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the memory indicator should be shown.
    pub fn memory_set(&self) -> bool {
        self.memory_set
    }

    /// Current memory register value.
    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.awaiting_new_entry {
            Phase::OperatorPending
        } else {
            Phase::Entering
        }
    }

    /// Applies one keypad event and returns the resulting state.
    pub fn press(&self, key: Key) -> CalcState {
        let mut next = self.clone();
        match key {
            Key::Digit(digit) => next.press_digit(digit),
            Key::Decimal => next.press_decimal(),
            Key::ToggleSign => next.press_toggle_sign(),
            Key::Op(op) => next.press_operator(op),
            Key::Equals => next.press_equals(),
            Key::Clear => next.press_clear(),
            Key::ClearEntry => next.press_clear_entry(),
            Key::Backspace => next.press_backspace(),
            Key::Reciprocal => next.press_reciprocal(),
            Key::SquareRoot => next.press_square_root(),
            Key::MemoryClear => {
                next.memory = 0.0;
                next.memory_set = false;
            }
            Key::MemoryRecall => {
                if next.error.is_none() {
                    next.display = format_result(next.memory);
                    next.awaiting_new_entry = true;
                }
            }
            Key::MemoryStore => {
                if next.error.is_none() {
                    next.memory = next.current_value();
                    next.memory_set = true;
                }
            }
            Key::MemoryAdd => {
                if next.error.is_none() {
                    next.memory += next.current_value();
                    next.memory_set = true;
                }
            }
            Key::MemorySubtract => {
                if next.error.is_none() {
                    next.memory -= next.current_value();
                    next.memory_set = true;
                }
            }
        }
        next
    }

    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    fn press_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let digit = char::from(b'0' + digit);
        if self.error.take().is_some() || self.awaiting_new_entry {
            self.display = digit.to_string();
            self.awaiting_new_entry = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    fn press_decimal(&mut self) {
        if self.error.take().is_some() || self.awaiting_new_entry {
            self.display = "0.".to_string();
            self.awaiting_new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn press_toggle_sign(&mut self) {
        if self.error.is_some() {
            return;
        }
        let Ok(value) = self.display.parse::<f64>() else {
            return;
        };
        if value == 0.0 {
            self.display = "0".to_string();
        } else if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    fn press_operator(&mut self, op: Operator) {
        if self.error.is_some() {
            return;
        }
        let current = self.current_value();

        if let Some(pending) = self.pending_operator {
            if !self.awaiting_new_entry {
                match pending.apply(self.pending_operand, current) {
                    Some(result) => {
                        self.display = format_result(result);
                        self.pending_operand = result;
                    }
                    None => {
                        self.enter_division_error();
                        return;
                    }
                }
            }
        } else {
            self.pending_operand = current;
        }

        self.pending_operator = Some(op);
        self.awaiting_new_entry = true;
    }

    fn press_equals(&mut self) {
        if self.error.is_some() {
            return;
        }
        let Some(op) = self.pending_operator else {
            return;
        };
        let current = self.current_value();
        let lhs = format_result(self.pending_operand);
        let rhs = format_result(current);
        let symbol = op.symbol();

        match op.apply(self.pending_operand, current) {
            Some(result) => {
                let formatted = format_result(result);
                self.display = formatted.clone();
                self.record_history(format!("{lhs} {symbol} {rhs} = {formatted}"));
            }
            None => {
                self.display = ERROR_DIV_ZERO.to_string();
                self.error = Some(ERROR_DIV_ZERO.to_string());
                self.record_history(format!("{lhs} {symbol} {rhs} = {ERROR_SHORT}"));
            }
        }

        self.pending_operand = 0.0;
        self.pending_operator = None;
        self.awaiting_new_entry = true;
    }

    fn press_clear(&mut self) {
        self.display = "0".to_string();
        self.pending_operand = 0.0;
        self.pending_operator = None;
        self.awaiting_new_entry = false;
        self.error = None;
    }

    fn press_clear_entry(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.display = "0".to_string();
        self.awaiting_new_entry = false;
    }

    fn press_backspace(&mut self) {
        if self.error.is_some() {
            return;
        }
        if self.display.len() > 1 && self.display != "0" {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }

    fn press_reciprocal(&mut self) {
        if self.error.is_some() {
            return;
        }
        let current = self.current_value();
        if current == 0.0 {
            self.enter_division_error();
        } else {
            self.display = format_result(1.0 / current);
            self.awaiting_new_entry = true;
        }
    }

    fn press_square_root(&mut self) {
        if self.error.is_some() {
            return;
        }
        let current = self.current_value();
        if current < 0.0 {
            self.display = ERROR_SHORT.to_string();
            self.error = Some(ERROR_NEGATIVE_SQRT.to_string());
            self.awaiting_new_entry = true;
        } else {
            self.display = format_result(current.sqrt());
            self.awaiting_new_entry = true;
        }
    }

    fn enter_division_error(&mut self) {
        self.display = ERROR_DIV_ZERO.to_string();
        self.error = Some(ERROR_DIV_ZERO.to_string());
        self.pending_operand = 0.0;
        self.pending_operator = None;
        self.awaiting_new_entry = true;
    }

    fn record_history(&mut self, line: String) {
        self.history.push(line);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }
}

/// Formats a computation result for the display and for history lines.
///
/// Integral values render with no decimal point; fractional values keep at
/// most 10 fractional digits with trailing zeros and point stripped.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let text = format!("{value:.10}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
