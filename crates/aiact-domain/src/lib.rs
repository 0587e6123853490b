//! Pure rule evaluation (no IO).
//!
//! Input: one catalog module and the answers collected for it.
//! Output: a determination (outcome + triggering criteria + obligations).

#![forbid(unsafe_code)]

mod answers;
mod engine;
mod rules;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
