//! The wire representation of a compiled program.
//!
//! The schema language the wire format is written in has no sum types, so
//! every union is encoded as a record holding a `kind` [`Discriminator`] and
//! one optional payload slot per variant. For a well-formed record, the slot
//! named by the discriminator is present; the other slots are ignored.
//!
//! These types mirror the schema one-to-one and are only ever deserialized.
//! Converting them into the in-memory tree is the job of `quill-decode`.

mod declarations;
mod discriminator;
mod expressions;
mod types;

pub use declarations::*;
pub use discriminator::*;
pub use expressions::*;
pub use types::*;
