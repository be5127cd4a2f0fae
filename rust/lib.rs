//! This is the documentation for offsetlib
//!
//! Business day calendars and custom business day and month offsets. See [`scheduling`].

#[cfg(test)]
mod tests;

pub mod errors;
pub mod json;
pub mod scheduling;
