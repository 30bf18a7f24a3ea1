//! Greeting and numbered-repetition messages

use crate::utils::PositiveInt;

/// Greeting line for `name`
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Numbered notification lines `1..=count`
pub fn notifications(count: PositiveInt) -> impl Iterator<Item = String> {
    (1..=count.get()).map(|i| format!("{i}: This is notification #{i}"))
}

/// Numbered hello lines `1..=count`
pub fn hellos(count: PositiveInt) -> impl Iterator<Item = String> {
    (1..=count.get()).map(|i| format!("Hello! This is hello number: #{i}"))
}
