//! Translators for positions, names, scalars and payload-free enumerations.

#![allow(missing_docs)]

use crate::{DecodeError, Result};
use num_bigint::BigInt;
use quill_syntax as syntax;
use quill_wire as wire;

/// Copy a line and column.
pub fn decode_position(position: &wire::Position) -> syntax::Position {
    syntax::Position {
        line: position.line,
        column: position.column,
    }
}

/// Translate both endpoints of a range.
pub fn decode_range(range: &wire::Range) -> syntax::Range {
    syntax::Range {
        start: decode_position(&range.start),
        end: decode_position(&range.end),
    }
}

/// Translate the offset and range of a location.
pub fn decode_location(location: &wire::Location) -> syntax::Location {
    syntax::Location {
        offset: decode_position(&location.offset),
        range: decode_range(&location.range),
    }
}

/// Decode an arbitrary-precision integer from its little-endian two's
/// complement bytes.
pub fn decode_big_int(bytes: &[u8]) -> Result<BigInt> {
    if bytes.is_empty() {
        return Err(DecodeError::MalformedScalar {
            scalar: "big integer",
            reason: String::from("no bytes"),
        });
    }

    Ok(BigInt::from_signed_bytes_le(bytes))
}

pub fn decode_qualified_name(name: &wire::QualifiedName) -> syntax::QualifiedName {
    syntax::QualifiedName::new(name.namespace.as_str(), name.name.as_str())
}

pub fn decode_comments(comments: &wire::Comments) -> syntax::Comments {
    syntax::Comments {
        opening_comments: comments.opening_comments.clone(),
        closing_comments: comments.closing_comments.clone(),
    }
}

pub fn decode_modifiers(modifiers: &wire::Modifiers) -> syntax::Modifiers {
    syntax::Modifiers {
        access: match modifiers.access {
            wire::AccessModifier::DefaultAccess => syntax::AccessModifier::DefaultAccess,
            wire::AccessModifier::Internal => syntax::AccessModifier::Internal,
        },
    }
}

pub fn decode_source(source: &wire::Source) -> syntax::Source {
    syntax::Source {
        code_file: source.code_file.clone(),
        assembly_file: source.assembly_file.clone(),
    }
}

pub fn decode_callable_kind(kind: wire::CallableKind) -> syntax::CallableKind {
    match kind {
        wire::CallableKind::Operation => syntax::CallableKind::Operation,
        wire::CallableKind::Function => syntax::CallableKind::Function,
        wire::CallableKind::TypeConstructor => syntax::CallableKind::TypeConstructor,
    }
}

pub fn decode_specialization_kind(kind: wire::SpecializationKind) -> syntax::SpecializationKind {
    match kind {
        wire::SpecializationKind::Body => syntax::SpecializationKind::Body,
        wire::SpecializationKind::Adjoint => syntax::SpecializationKind::Adjoint,
        wire::SpecializationKind::Controlled => syntax::SpecializationKind::Controlled,
        wire::SpecializationKind::ControlledAdjoint => {
            syntax::SpecializationKind::ControlledAdjoint
        }
    }
}

pub fn decode_op_property(property: wire::OpProperty) -> syntax::OpProperty {
    match property {
        wire::OpProperty::Adjointable => syntax::OpProperty::Adjointable,
        wire::OpProperty::Controllable => syntax::OpProperty::Controllable,
    }
}

pub fn decode_result_value(value: wire::ResultValue) -> syntax::ResultValue {
    match value {
        wire::ResultValue::Zero => syntax::ResultValue::Zero,
        wire::ResultValue::One => syntax::ResultValue::One,
    }
}

pub fn decode_pauli(pauli: wire::Pauli) -> syntax::Pauli {
    match pauli {
        wire::Pauli::PauliI => syntax::Pauli::PauliI,
        wire::Pauli::PauliX => syntax::Pauli::PauliX,
        wire::Pauli::PauliY => syntax::Pauli::PauliY,
        wire::Pauli::PauliZ => syntax::Pauli::PauliZ,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(&[0x00], 0)]
    #[case::one_byte(&[0x7F], 127)]
    #[case::needs_sign_byte(&[0xFF, 0x00], 255)]
    #[case::minus_one(&[0xFF], -1)]
    #[case::minus_256(&[0x00, 0xFF], -256)]
    fn big_int_from_bytes(#[case] bytes: &[u8], #[case] expected: i64) {
        assert_eq!(decode_big_int(bytes), Ok(BigInt::from(expected)));
    }

    #[test]
    fn big_int_wider_than_a_word() {
        let expected: BigInt = "123456789012345678901234567890".parse().unwrap();
        let bytes = expected.to_signed_bytes_le();
        assert_eq!(bytes, [210, 10, 63, 78, 238, 224, 115, 195, 246, 15, 233, 142, 1]);
        assert_eq!(decode_big_int(&bytes), Ok(expected.clone()));

        let negated = -expected;
        assert_eq!(decode_big_int(&negated.to_signed_bytes_le()), Ok(negated));
    }

    #[test]
    fn big_int_without_bytes_is_malformed() {
        assert!(matches!(
            decode_big_int(&[]),
            Err(DecodeError::MalformedScalar { scalar: "big integer", .. })
        ));
    }

    #[rstest]
    #[case(wire::CallableKind::Operation, syntax::CallableKind::Operation)]
    #[case(wire::CallableKind::Function, syntax::CallableKind::Function)]
    #[case(wire::CallableKind::TypeConstructor, syntax::CallableKind::TypeConstructor)]
    fn callable_kinds(#[case] kind: wire::CallableKind, #[case] expected: syntax::CallableKind) {
        assert_eq!(decode_callable_kind(kind), expected);
    }

    #[test]
    fn location_copies_every_coordinate() {
        let location = wire::Location {
            offset: wire::Position { line: 3, column: 4 },
            range: wire::Range {
                start: wire::Position { line: 0, column: 10 },
                end: wire::Position { line: 0, column: 13 },
            },
        };

        assert_eq!(
            decode_location(&location),
            syntax::Location {
                offset: syntax::Position { line: 3, column: 4 },
                range: syntax::Range {
                    start: syntax::Position { line: 0, column: 10 },
                    end: syntax::Position { line: 0, column: 13 },
                },
            }
        );
    }

    #[test]
    fn qualified_name_keeps_both_parts() {
        let name = wire::QualifiedName {
            namespace: String::from("Microsoft.Quantum.Intrinsic"),
            name: String::from("H"),
        };

        let decoded = decode_qualified_name(&name);
        assert_eq!(decoded.namespace, "Microsoft.Quantum.Intrinsic");
        assert_eq!(decoded.name, "H");
        assert_eq!(decoded.to_string(), "Microsoft.Quantum.Intrinsic.H");
    }
}
