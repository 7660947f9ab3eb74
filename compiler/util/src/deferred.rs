use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// A field whose decoding is not implemented yet.
///
/// Decoders fill these fields with [`Deferred::Pending`] instead of failing,
/// so a tree can be produced while parts of the target model are still
/// missing. A pending field is never equal to a decoded one, even if the
/// decoded value is empty, so later stages can tell "supported and empty"
/// apart from "not yet supported".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Derivative)]
#[derivative(Default(bound = ""))]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum Deferred<T> {
    /// The field was not decoded.
    #[derivative(Default)]
    Pending,

    /// The field was decoded.
    Decoded(T),
}

impl<T> Deferred<T> {
    /// Returns `true` if the field has not been decoded.
    pub fn is_pending(&self) -> bool {
        matches!(self, Deferred::Pending)
    }

    /// Obtain a reference to the decoded value, or `None` if the field is
    /// still pending.
    pub fn decoded(&self) -> Option<&T> {
        match self {
            Deferred::Pending => None,
            Deferred::Decoded(value) => Some(value),
        }
    }

    /// Convert the decoded value, leaving a pending field untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Deferred<U> {
        match self {
            Deferred::Pending => Deferred::Pending,
            Deferred::Decoded(value) => Deferred::Decoded(f(value)),
        }
    }
}

impl<T> From<T> for Deferred<T> {
    fn from(value: T) -> Self {
        Deferred::Decoded(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_distinct_from_empty() {
        let pending = Deferred::<Vec<String>>::default();
        let empty = Deferred::from(Vec::<String>::new());

        assert!(pending.is_pending());
        assert!(!empty.is_pending());
        assert_ne!(pending, empty);
        assert_eq!(empty.decoded().map(Vec::len), Some(0));
    }

    #[test]
    fn map_keeps_pending() {
        let pending = Deferred::<u32>::Pending;
        assert_eq!(pending.map(|n| n + 1), Deferred::Pending);
        assert_eq!(Deferred::Decoded(1).map(|n| n + 1), Deferred::Decoded(2));
    }
}
