//! Counter Display Derivations
//!
//! Stateless functions of the current counter value. The panels call these
//! on every render; nothing here holds state.

use crate::config::Config;

/// Largest input the panels feed to `fibonacci`
pub const FIBONACCI_DISPLAY_LIMIT: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Negative => "negative",
            Sign::Zero => "zero",
            Sign::Positive => "positive",
        }
    }
}

/// Everything a counter panel shows for one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterDescriptor {
    pub value: i64,
    pub message: Option<&'static str>,
    pub parity: Parity,
    pub sign: Sign,
    pub prime: bool,
    /// `None` when the value is negative or past `FIBONACCI_DISPLAY_LIMIT`
    pub fibonacci: Option<u64>,
    pub emoji: &'static str,
}

pub fn counter_message(value: i64, big_threshold: i64) -> Option<&'static str> {
    if value > big_threshold {
        Some("Count is getting big")
    } else if value < 0 {
        Some("Count is negative")
    } else {
        None
    }
}

pub fn parity(value: i64) -> Parity {
    if value % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

pub fn sign(value: i64) -> Sign {
    match value {
        v if v < 0 => Sign::Negative,
        0 => Sign::Zero,
        _ => Sign::Positive,
    }
}

/// Trial division up to the square root
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3i64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Largest `n` whose Fibonacci number fits a `u64`
pub const FIBONACCI_MAX_INPUT: u32 = 93;

/// Naive recursive Fibonacci, exponential in `n`
///
/// `None` past `FIBONACCI_MAX_INPUT`. Callers keep `n` far smaller; see
/// `FIBONACCI_DISPLAY_LIMIT`.
pub fn fibonacci(n: u32) -> Option<u64> {
    if n > FIBONACCI_MAX_INPUT {
        return None;
    }
    Some(fib(n))
}

fn fib(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fib(n - 1) + fib(n - 2),
    }
}

pub fn emoji_for(value: i64) -> &'static str {
    match value {
        v if v < 0 => "😢",
        0 => "😐",
        1..=5 => "🙂",
        6..=10 => "😄",
        _ => "🚀",
    }
}

pub fn describe(value: i64, config: &Config) -> CounterDescriptor {
    let fibonacci = u32::try_from(value)
        .ok()
        .filter(|n| *n <= FIBONACCI_DISPLAY_LIMIT)
        .and_then(fibonacci);

    CounterDescriptor {
        value,
        message: counter_message(value, config.big_threshold),
        parity: parity(value),
        sign: sign(value),
        prime: is_prime(value),
        fibonacci,
        emoji: emoji_for(value),
    }
}
