use crate::{Discriminator, QualifiedName, Range, ResolvedType, Union};
use serde::Deserialize;

/// The discriminator of an [`ExpressionKindComposition`].
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum ExpressionKind {
    UnitValue,
    Identifier,
    ValueTuple,
    IntLiteral,
    BigIntLiteral,
    DoubleLiteral,
    BoolLiteral,
    StringLiteral,
    ResultLiteral,
    PauliLiteral,
    RangeLiteral,
    NewArray,
    SizedArray,
    ValueArray,
    ArrayItem,
    NamedItem,
    Neg,
    Not,
    BNot,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    LShift,
    RShift,
    BOr,
    BXor,
    BAnd,
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
    And,
    Or,
    Conditional,
    CopyAndUpdate,
    UnwrapApplication,
    AdjointApplication,
    ControlledApplication,
    CallLikeExpression,
    Lambda,
    MissingExpr,
    InvalidExpr,
}

/// An expression kind, generic over the representation of nested
/// expressions (`E`), symbols (`S`) and types (`T`).
///
/// Operators share payload slots by arity: unary operators and functor
/// applications use `expressionSingle`, binary operators, ranges, array
/// items and calls use `expressionDouble`, conditionals and copy-and-update
/// expressions use `expressionTriple`, and tuples and arrays use
/// `expressionArray`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionKindComposition<E, S, T> {
    /// Selects the active payload slot.
    pub kind: Discriminator<ExpressionKind>,

    /// The payload of [`ExpressionKind::Identifier`].
    pub identifier: Option<IdentifierComposition<S, T>>,

    /// The payload of [`ExpressionKind::IntLiteral`].
    #[serde(default)]
    pub int_literal: i64,

    /// The payload of [`ExpressionKind::BigIntLiteral`], as little-endian
    /// two's complement bytes.
    pub big_int_literal: Option<Vec<u8>>,

    /// The payload of [`ExpressionKind::DoubleLiteral`].
    #[serde(default)]
    pub double_literal: f64,

    /// The payload of [`ExpressionKind::BoolLiteral`].
    #[serde(default)]
    pub bool_literal: bool,

    /// The payload of [`ExpressionKind::StringLiteral`].
    pub string_literal: Option<StringLiteralComposition<E>>,

    /// The payload of [`ExpressionKind::ResultLiteral`].
    pub result_literal: Option<ResultValue>,

    /// The payload of [`ExpressionKind::PauliLiteral`].
    pub pauli_literal: Option<Pauli>,

    /// The payload of [`ExpressionKind::NewArray`].
    pub new_array: Option<Box<NewArrayComposition<E, T>>>,

    /// The payload of [`ExpressionKind::NamedItem`].
    pub named_item: Option<Box<NamedItemComposition<E, S>>>,

    /// The payload of expressions with one operand.
    pub expression_single: Option<Box<E>>,

    /// The payload of expressions with two operands.
    pub expression_double: Option<Box<ExpressionDouble<E>>>,

    /// The payload of expressions with three operands.
    pub expression_triple: Option<Box<ExpressionTriple<E>>>,

    /// The payload of expressions with any number of operands.
    pub expression_array: Option<Vec<E>>,
}

impl<E, S, T> Union for ExpressionKindComposition<E, S, T> {
    type Kind = ExpressionKind;

    const NAME: &'static str = "ExpressionKind";

    fn kind(&self) -> &Discriminator<Self::Kind> {
        &self.kind
    }
}

/// The payload of an identifier expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierComposition<S, T> {
    /// The symbol being referenced.
    pub symbol: S,

    /// Explicit type arguments, if any were given.
    pub types: Option<Vec<T>>,
}

/// The payload of a string literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringLiteralComposition<E> {
    /// The literal text.
    pub text: String,

    /// Interpolated expressions, in order.
    #[serde(default = "Vec::new")]
    pub expressions: Vec<E>,
}

/// The payload of a new-array expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArrayComposition<E, T> {
    /// The type of the elements.
    pub r#type: T,

    /// The length of the array.
    pub expression: E,
}

/// The payload of a named-item access.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedItemComposition<E, S> {
    /// The value being accessed.
    pub expression: E,

    /// The name of the item.
    pub symbol: S,
}

/// Two operands.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionDouble<E> {
    pub expression1: E,
    pub expression2: E,
}

/// Three operands.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionTriple<E> {
    pub expression1: E,
    pub expression2: E,
    pub expression3: E,
}

/// A measurement result.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ResultValue {
    Zero,
    One,
}

/// A single-qubit Pauli matrix.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Pauli {
    PauliI,
    PauliX,
    PauliY,
    PauliZ,
}

/// The discriminator of an [`Identifier`].
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum IdentifierKind {
    LocalVariable,
    GlobalCallable,
    InvalidIdentifier,
}

/// A reference to a local variable or a global callable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Selects the active payload slot.
    pub kind: Discriminator<IdentifierKind>,

    /// The payload of [`IdentifierKind::LocalVariable`].
    pub local_variable: Option<String>,

    /// The payload of [`IdentifierKind::GlobalCallable`].
    pub global_callable: Option<QualifiedName>,
}

impl Union for Identifier {
    type Kind = IdentifierKind;

    const NAME: &'static str = "Identifier";

    fn kind(&self) -> &Discriminator<Self::Kind> {
        &self.kind
    }
}

/// An expression annotated with the results of type checking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedExpression {
    /// The kind of expression.
    pub expression: ExpressionKindComposition<TypedExpression, Identifier, ResolvedType>,

    /// The type arguments the expression was resolved with.
    #[serde(default)]
    pub type_arguments: Vec<TypeArgument>,

    /// The type of the expression.
    pub resolved_type: ResolvedType,

    /// Information inferred by the compiler.
    #[serde(default)]
    pub inferred_information: InferredExpressionInformation,

    /// The expression's range, relative to the enclosing statement.
    pub range: Option<Range>,
}

/// A type argument of a [`TypedExpression`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeArgument {
    /// The callable declaring the type parameter.
    pub callable: QualifiedName,

    /// The name of the type parameter.
    pub name: String,

    /// The type the parameter was resolved to.
    pub r#type: ResolvedType,
}

/// Properties of an expression inferred by the compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredExpressionInformation {
    /// Whether the expression may be mutated.
    #[serde(default)]
    pub is_mutable: bool,

    /// Whether the expression depends on a quantum value in local scope.
    #[serde(default)]
    pub has_local_quantum_dependency: bool,
}
