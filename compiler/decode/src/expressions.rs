use crate::{
    decode_big_int, decode_nullable, decode_pauli, decode_qualified_name, decode_range,
    decode_resolved_type, decode_result_value, decode_union, Result,
};
use quill_syntax as syntax;
use quill_wire as wire;

/// Decode an expression kind, using the provided functions to decode nested
/// expressions, symbols and types.
///
/// Expressions the wire schema knows about but this decoder doesn't support
/// (sized arrays and lambdas) fail with
/// [`DecodeError::UnsupportedDiscriminator`](crate::DecodeError::UnsupportedDiscriminator).
pub fn decode_expression_kind<WE, WS, WT, E, S, T>(
    wire: &wire::ExpressionKindComposition<WE, WS, WT>,
    decode_expression: impl Fn(&WE) -> Result<E>,
    decode_symbol: impl Fn(&WS) -> Result<S>,
    decode_type: impl Fn(&WT) -> Result<T>,
) -> Result<syntax::ExpressionKind<E, S, T>> {
    decode_union(wire, |variant| {
        let single = || -> Result<E> {
            decode_expression(
                variant.payload(wire.expression_single.as_deref(), "expressionSingle")?,
            )
        };

        let double = || -> Result<(E, E)> {
            let operands = variant.payload(wire.expression_double.as_deref(), "expressionDouble")?;

            Ok((
                decode_expression(&operands.expression1)?,
                decode_expression(&operands.expression2)?,
            ))
        };

        let triple = || -> Result<(E, E, E)> {
            let operands = variant.payload(wire.expression_triple.as_deref(), "expressionTriple")?;

            Ok((
                decode_expression(&operands.expression1)?,
                decode_expression(&operands.expression2)?,
                decode_expression(&operands.expression3)?,
            ))
        };

        let array = || -> Result<Vec<E>> {
            variant
                .payload(wire.expression_array.as_ref(), "expressionArray")?
                .iter()
                .map(&decode_expression)
                .collect()
        };

        let unary = |operator| -> Result<syntax::ExpressionKind<E, S, T>> {
            Ok(syntax::ExpressionKind::UnaryOperation(operator, single()?))
        };

        let binary = |operator| -> Result<syntax::ExpressionKind<E, S, T>> {
            let (left, right) = double()?;
            Ok(syntax::ExpressionKind::BinaryOperation(operator, left, right))
        };

        Ok(match variant.kind {
            wire::ExpressionKind::UnitValue => syntax::ExpressionKind::UnitValue,
            wire::ExpressionKind::Identifier => {
                let identifier = variant.payload(wire.identifier.as_ref(), "identifier")?;

                syntax::ExpressionKind::Identifier(
                    decode_symbol(&identifier.symbol)?,
                    decode_nullable(&identifier.types, |types| {
                        types.iter().map(&decode_type).collect()
                    })?,
                )
            }
            wire::ExpressionKind::ValueTuple => syntax::ExpressionKind::ValueTuple(array()?),
            wire::ExpressionKind::IntLiteral => {
                syntax::ExpressionKind::IntLiteral(wire.int_literal)
            }
            wire::ExpressionKind::BigIntLiteral => syntax::ExpressionKind::BigIntLiteral(
                decode_big_int(variant.payload(wire.big_int_literal.as_deref(), "bigIntLiteral")?)?,
            ),
            wire::ExpressionKind::DoubleLiteral => {
                syntax::ExpressionKind::DoubleLiteral(syntax::Double(wire.double_literal))
            }
            wire::ExpressionKind::BoolLiteral => {
                syntax::ExpressionKind::BoolLiteral(wire.bool_literal)
            }
            wire::ExpressionKind::StringLiteral => {
                let string = variant.payload(wire.string_literal.as_ref(), "stringLiteral")?;

                syntax::ExpressionKind::StringLiteral(
                    string.text.clone(),
                    string
                        .expressions
                        .iter()
                        .map(&decode_expression)
                        .collect::<Result<_>>()?,
                )
            }
            wire::ExpressionKind::ResultLiteral => {
                let result = variant.payload(wire.result_literal.as_ref(), "resultLiteral")?;
                syntax::ExpressionKind::ResultLiteral(decode_result_value(*result))
            }
            wire::ExpressionKind::PauliLiteral => syntax::ExpressionKind::PauliLiteral(
                decode_pauli(*variant.payload(wire.pauli_literal.as_ref(), "pauliLiteral")?),
            ),
            wire::ExpressionKind::RangeLiteral => {
                let (start, end) = double()?;
                syntax::ExpressionKind::RangeLiteral(start, end)
            }
            wire::ExpressionKind::NewArray => {
                let new_array = variant.payload(wire.new_array.as_deref(), "newArray")?;

                syntax::ExpressionKind::NewArray(
                    decode_type(&new_array.r#type)?,
                    decode_expression(&new_array.expression)?,
                )
            }
            wire::ExpressionKind::ValueArray => syntax::ExpressionKind::ValueArray(array()?),
            wire::ExpressionKind::ArrayItem => {
                let (array, index) = double()?;
                syntax::ExpressionKind::ArrayItem(array, index)
            }
            wire::ExpressionKind::NamedItem => {
                let named_item = variant.payload(wire.named_item.as_deref(), "namedItem")?;

                syntax::ExpressionKind::NamedItem(
                    decode_expression(&named_item.expression)?,
                    decode_symbol(&named_item.symbol)?,
                )
            }
            wire::ExpressionKind::Neg => unary(syntax::UnaryOperator::Neg)?,
            wire::ExpressionKind::Not => unary(syntax::UnaryOperator::Not)?,
            wire::ExpressionKind::BNot => unary(syntax::UnaryOperator::BNot)?,
            wire::ExpressionKind::Add => binary(syntax::BinaryOperator::Add)?,
            wire::ExpressionKind::Sub => binary(syntax::BinaryOperator::Sub)?,
            wire::ExpressionKind::Mul => binary(syntax::BinaryOperator::Mul)?,
            wire::ExpressionKind::Div => binary(syntax::BinaryOperator::Div)?,
            wire::ExpressionKind::Pow => binary(syntax::BinaryOperator::Pow)?,
            wire::ExpressionKind::Mod => binary(syntax::BinaryOperator::Mod)?,
            wire::ExpressionKind::LShift => binary(syntax::BinaryOperator::LShift)?,
            wire::ExpressionKind::RShift => binary(syntax::BinaryOperator::RShift)?,
            wire::ExpressionKind::BOr => binary(syntax::BinaryOperator::BOr)?,
            wire::ExpressionKind::BXor => binary(syntax::BinaryOperator::BXor)?,
            wire::ExpressionKind::BAnd => binary(syntax::BinaryOperator::BAnd)?,
            wire::ExpressionKind::Lt => binary(syntax::BinaryOperator::Lt)?,
            wire::ExpressionKind::Lte => binary(syntax::BinaryOperator::Lte)?,
            wire::ExpressionKind::Gt => binary(syntax::BinaryOperator::Gt)?,
            wire::ExpressionKind::Gte => binary(syntax::BinaryOperator::Gte)?,
            wire::ExpressionKind::Eq => binary(syntax::BinaryOperator::Eq)?,
            wire::ExpressionKind::Neq => binary(syntax::BinaryOperator::Neq)?,
            wire::ExpressionKind::And => binary(syntax::BinaryOperator::And)?,
            wire::ExpressionKind::Or => binary(syntax::BinaryOperator::Or)?,
            wire::ExpressionKind::Conditional => {
                let (condition, then, otherwise) = triple()?;
                syntax::ExpressionKind::Conditional(condition, then, otherwise)
            }
            wire::ExpressionKind::CopyAndUpdate => {
                let (original, item, value) = triple()?;
                syntax::ExpressionKind::CopyAndUpdate(original, item, value)
            }
            wire::ExpressionKind::UnwrapApplication => {
                syntax::ExpressionKind::UnwrapApplication(single()?)
            }
            wire::ExpressionKind::AdjointApplication => {
                syntax::ExpressionKind::AdjointApplication(single()?)
            }
            wire::ExpressionKind::ControlledApplication => {
                syntax::ExpressionKind::ControlledApplication(single()?)
            }
            wire::ExpressionKind::CallLikeExpression => {
                let (callee, argument) = double()?;
                syntax::ExpressionKind::CallLikeExpression(callee, argument)
            }
            wire::ExpressionKind::MissingExpr => syntax::ExpressionKind::MissingExpr,
            wire::ExpressionKind::InvalidExpr => syntax::ExpressionKind::InvalidExpr,
            wire::ExpressionKind::SizedArray | wire::ExpressionKind::Lambda => {
                return Err(variant.unsupported());
            }
        })
    })
}

#[allow(missing_docs)]
pub fn decode_identifier(identifier: &wire::Identifier) -> Result<syntax::Identifier> {
    decode_union(identifier, |variant| {
        Ok(match variant.kind {
            wire::IdentifierKind::LocalVariable => syntax::Identifier::LocalVariable(
                variant
                    .payload(identifier.local_variable.as_ref(), "localVariable")?
                    .clone(),
            ),
            wire::IdentifierKind::GlobalCallable => {
                syntax::Identifier::GlobalCallable(decode_qualified_name(
                    variant.payload(identifier.global_callable.as_ref(), "globalCallable")?,
                ))
            }
            wire::IdentifierKind::InvalidIdentifier => syntax::Identifier::InvalidIdentifier,
        })
    })
}

/// Decode an expression and everything nested inside it.
pub fn decode_typed_expression(
    expression: &wire::TypedExpression,
) -> Result<syntax::TypedExpression> {
    Ok(syntax::TypedExpression {
        expression: Box::new(decode_expression_kind(
            &expression.expression,
            decode_typed_expression,
            decode_identifier,
            decode_resolved_type,
        )?),
        type_arguments: expression
            .type_arguments
            .iter()
            .map(decode_type_argument)
            .collect::<Result<_>>()?,
        resolved_type: decode_resolved_type(&expression.resolved_type)?,
        inferred_information: decode_inferred_expression_information(
            &expression.inferred_information,
        ),
        range: decode_nullable(&expression.range, |range| Ok(decode_range(range)))?,
    })
}

fn decode_type_argument(type_argument: &wire::TypeArgument) -> Result<syntax::TypeArgument> {
    Ok(syntax::TypeArgument {
        callable: decode_qualified_name(&type_argument.callable),
        name: type_argument.name.clone(),
        r#type: decode_resolved_type(&type_argument.r#type)?,
    })
}

#[allow(missing_docs)]
pub fn decode_inferred_expression_information(
    information: &wire::InferredExpressionInformation,
) -> syntax::InferredExpressionInformation {
    syntax::InferredExpressionInformation {
        is_mutable: information.is_mutable,
        has_local_quantum_dependency: information.has_local_quantum_dependency,
    }
}
