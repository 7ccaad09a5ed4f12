//! Shared contracts between the SmartShop console and the remote API.
//!
//! Everything in this crate is pure: wire types, the order pricing
//! calculator, money rounding and field validation. No I/O lives here,
//! which keeps the whole crate unit-testable on any target.

pub mod domain;
pub mod pricing;
pub mod shared;
pub mod system;
