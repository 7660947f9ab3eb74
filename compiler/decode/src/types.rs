use crate::{
    decode_nullable, decode_op_property, decode_qualified_name, decode_range, decode_union, Result,
};
use quill_syntax as syntax;
use quill_wire as wire;

/// Decode a type kind, using the provided functions to decode nested types,
/// user-defined type references, type parameters and operation
/// characteristics.
pub fn decode_type_kind<WT, WU, WP, WC, T, U, P, C>(
    wire: &wire::TypeKindComposition<WT, WU, WP, WC>,
    decode_type: impl Fn(&WT) -> Result<T>,
    decode_user_defined_type: impl Fn(&WU) -> Result<U>,
    decode_type_parameter: impl Fn(&WP) -> Result<P>,
    decode_characteristics: impl Fn(&WC) -> Result<C>,
) -> Result<syntax::TypeKind<T, U, P, C>> {
    decode_union(wire, |variant| {
        Ok(match variant.kind {
            wire::TypeKind::UnitType => syntax::TypeKind::UnitType,
            wire::TypeKind::Int => syntax::TypeKind::Int,
            wire::TypeKind::BigInt => syntax::TypeKind::BigInt,
            wire::TypeKind::Double => syntax::TypeKind::Double,
            wire::TypeKind::Bool => syntax::TypeKind::Bool,
            wire::TypeKind::String => syntax::TypeKind::String,
            wire::TypeKind::Qubit => syntax::TypeKind::Qubit,
            wire::TypeKind::Result => syntax::TypeKind::Result,
            wire::TypeKind::Pauli => syntax::TypeKind::Pauli,
            wire::TypeKind::Range => syntax::TypeKind::Range,
            wire::TypeKind::ArrayType => syntax::TypeKind::ArrayType(decode_type(
                variant.payload(wire.array_type.as_deref(), "arrayType")?,
            )?),
            wire::TypeKind::TupleType => syntax::TypeKind::TupleType(
                variant
                    .payload(wire.tuple_type.as_ref(), "tupleType")?
                    .iter()
                    .map(&decode_type)
                    .collect::<Result<_>>()?,
            ),
            wire::TypeKind::UserDefinedType => {
                syntax::TypeKind::UserDefinedType(decode_user_defined_type(
                    variant.payload(wire.user_defined_type.as_ref(), "userDefinedType")?,
                )?)
            }
            wire::TypeKind::TypeParameter => syntax::TypeKind::TypeParameter(
                decode_type_parameter(
                    variant.payload(wire.type_parameter.as_ref(), "typeParameter")?,
                )?,
            ),
            wire::TypeKind::Operation => {
                let operation = variant.payload(wire.operation.as_deref(), "operation")?;

                syntax::TypeKind::Operation(
                    (
                        decode_type(&operation.domain)?,
                        decode_type(&operation.codomain)?,
                    ),
                    decode_characteristics(&operation.characteristics)?,
                )
            }
            wire::TypeKind::Function => {
                let function = variant.payload(wire.function.as_deref(), "function")?;

                syntax::TypeKind::Function(
                    decode_type(&function.domain)?,
                    decode_type(&function.codomain)?,
                )
            }
            wire::TypeKind::MissingType => syntax::TypeKind::MissingType,
            wire::TypeKind::InvalidType => syntax::TypeKind::InvalidType,
        })
    })
}

/// Decode a characteristics expression, using `decode_characteristics` for
/// the operands of set operations.
pub fn decode_characteristics_kind<WC, C>(
    wire: &wire::CharacteristicsKindComposition<WC>,
    decode_characteristics: impl Fn(&WC) -> Result<C>,
) -> Result<syntax::CharacteristicsKind<C>> {
    decode_union(wire, |variant| {
        Ok(match variant.kind {
            wire::CharacteristicsKind::EmptySet => syntax::CharacteristicsKind::EmptySet,
            wire::CharacteristicsKind::SimpleSet => syntax::CharacteristicsKind::SimpleSet(
                decode_op_property(*variant.payload(wire.simple_set.as_ref(), "simpleSet")?),
            ),
            wire::CharacteristicsKind::Union => {
                let operation = variant.payload(wire.set_operation.as_deref(), "setOperation")?;

                syntax::CharacteristicsKind::Union(
                    decode_characteristics(&operation.left)?,
                    decode_characteristics(&operation.right)?,
                )
            }
            wire::CharacteristicsKind::Intersection => {
                let operation = variant.payload(wire.set_operation.as_deref(), "setOperation")?;

                syntax::CharacteristicsKind::Intersection(
                    decode_characteristics(&operation.left)?,
                    decode_characteristics(&operation.right)?,
                )
            }
            wire::CharacteristicsKind::InvalidSetExpr => {
                syntax::CharacteristicsKind::InvalidSetExpr
            }
        })
    })
}

#[allow(missing_docs)]
pub fn decode_resolved_type(resolved_type: &wire::ResolvedType) -> Result<syntax::ResolvedType> {
    decode_type_kind(
        &resolved_type.type_kind,
        decode_resolved_type,
        decode_user_defined_type,
        decode_type_parameter,
        decode_callable_information,
    )
    .map(syntax::ResolvedType::new)
}

#[allow(missing_docs)]
pub fn decode_resolved_characteristics(
    characteristics: &wire::ResolvedCharacteristics,
) -> Result<syntax::ResolvedCharacteristics> {
    decode_characteristics_kind(
        &characteristics.expression,
        decode_resolved_characteristics,
    )
    .map(syntax::ResolvedCharacteristics::new)
}

#[allow(missing_docs)]
pub fn decode_user_defined_type(
    user_defined_type: &wire::UserDefinedType,
) -> Result<syntax::UserDefinedType> {
    Ok(syntax::UserDefinedType {
        namespace: user_defined_type.namespace.clone(),
        name: user_defined_type.name.clone(),
        range: decode_nullable(&user_defined_type.range, |range| Ok(decode_range(range)))?,
    })
}

#[allow(missing_docs)]
pub fn decode_type_parameter(
    type_parameter: &wire::TypeParameter,
) -> Result<syntax::TypeParameter> {
    Ok(syntax::TypeParameter {
        origin: decode_qualified_name(&type_parameter.origin),
        type_name: type_parameter.type_name.clone(),
        range: decode_nullable(&type_parameter.range, |range| Ok(decode_range(range)))?,
    })
}

#[allow(missing_docs)]
pub fn decode_callable_information(
    information: &wire::CallableInformation,
) -> Result<syntax::CallableInformation> {
    Ok(syntax::CallableInformation {
        characteristics: decode_resolved_characteristics(&information.characteristics)?,
        inferred_information: syntax::InferredCallableInformation {
            is_self_adjoint: information.inferred_information.is_self_adjoint,
            is_intrinsic: information.inferred_information.is_intrinsic,
        },
    })
}
