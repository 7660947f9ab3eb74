//! Shared utilities for the compiler.

mod deferred;
pub use deferred::*;

mod json;
pub use json::*;
