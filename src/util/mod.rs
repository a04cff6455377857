#![warn(missing_docs)]

#[cfg(test)]
pub mod clone;
pub mod error;
pub mod panic;
pub mod result;
mod tests;
