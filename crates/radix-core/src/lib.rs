//! radix-core
//!
//! Shared vocabulary for the Radix node client: protocol constants, the
//! error type, action descriptors for `buildTransaction`, and paging types.

pub mod action;
pub mod constants;
pub mod error;
pub mod types;

pub use action::Action;
pub use constants::*;
pub use error::{RadixError, Result};
pub use types::*;
