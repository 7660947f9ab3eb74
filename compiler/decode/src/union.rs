use crate::{DecodeError, Result};
use quill_wire::{Discriminator, Union};
use std::marker::PhantomData;

/// The active case of a wire union, handed to the closure passed to
/// [`decode_union`].
pub struct Variant<U: Union> {
    /// The discriminator that was read.
    pub kind: U::Kind,
    _union: PhantomData<fn() -> U>,
}

impl<U: Union> Variant<U> {
    /// Require the payload slot named `field` to be present.
    pub fn payload<'a, T: ?Sized>(
        &self,
        slot: Option<&'a T>,
        field: &'static str,
    ) -> Result<&'a T> {
        slot.ok_or_else(|| DecodeError::InconsistentDiscriminator {
            union: U::NAME,
            field,
            kind: self.kind.to_string(),
        })
    }

    /// The error for a case the wire schema knows about but this decoder
    /// doesn't handle.
    pub fn unsupported(&self) -> DecodeError {
        DecodeError::UnsupportedDiscriminator {
            union: U::NAME,
            kind: self.kind.to_string(),
        }
    }
}

/// Read the discriminator of `wire` and pass the active case to `f`, which
/// pulls the matching payload out with [`Variant::payload`] and decodes it.
///
/// Discriminators unknown to the wire schema fail with
/// [`DecodeError::UnsupportedDiscriminator`] before `f` is called.
pub fn decode_union<U: Union, T>(
    wire: &U,
    f: impl FnOnce(Variant<U>) -> Result<T>,
) -> Result<T> {
    match wire.kind() {
        Discriminator::Known(kind) => f(Variant {
            kind: *kind,
            _union: PhantomData,
        }),
        Discriminator::Unrecognized(raw) => Err(DecodeError::UnsupportedDiscriminator {
            union: U::NAME,
            kind: raw.to_string(),
        }),
    }
}

/// Decode a field that may be absent. Absent stays absent; a present value
/// is decoded with `f` and any error is passed through.
pub fn decode_nullable<W, T>(
    slot: &Option<W>,
    f: impl FnOnce(&W) -> Result<T>,
) -> Result<Option<T>> {
    slot.as_ref().map(f).transpose()
}
