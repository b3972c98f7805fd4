#![warn(missing_docs)]

#[cfg(test)]
pub mod count;
pub mod error;
pub mod panic;
pub mod result;
