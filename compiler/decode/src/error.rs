use thiserror::Error;

/// An error produced while decoding a wire graph.
///
/// Decoding stops at the first error; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload slot selected by a discriminator was absent.
    #[error("{union} has kind `{kind}` but its `{field}` payload is missing")]
    InconsistentDiscriminator {
        /// The union being decoded.
        union: &'static str,

        /// The payload slot that was expected.
        field: &'static str,

        /// The discriminator that was read.
        kind: String,
    },

    /// The discriminator is not one this decoder supports.
    #[error("unsupported {union} kind `{kind}`")]
    UnsupportedDiscriminator {
        /// The union being decoded.
        union: &'static str,

        /// The discriminator that was read.
        kind: String,
    },

    /// A scalar payload could not be interpreted.
    #[error("malformed {scalar}: {reason}")]
    MalformedScalar {
        /// The kind of scalar.
        scalar: &'static str,

        /// What was wrong with it.
        reason: String,
    },
}

#[allow(missing_docs)]
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
