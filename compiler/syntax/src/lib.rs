//! The in-memory syntax tree consumed by later compiler stages.
//!
//! Every node is built once by the decoder and never mutated afterwards.
//! Unions are native enums carrying only the fields of the active case, and
//! fields that may be absent are [`Option`]s. Fields the decoder does not
//! support yet are [`Deferred`].

mod declarations;
mod expressions;
mod types;

pub use declarations::*;
pub use expressions::*;
pub use types::*;

pub use num_bigint::BigInt;
pub use quill_util::Deferred;
