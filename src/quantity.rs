#[macro_use]
mod macros;

pub mod cost;
pub mod energy;
pub mod power;

/// Sum two optional quantities, keeping the result absent only when both sides are.
pub fn sum_present<T: std::ops::Add<Output = T>>(lhs: Option<T>, rhs: Option<T>) -> Option<T> {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => Some(lhs + rhs),
        (lhs, rhs) => lhs.or(rhs),
    }
}
