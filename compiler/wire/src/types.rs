use crate::{Discriminator, QualifiedName, Range, Union};
use serde::Deserialize;

/// The discriminator of a [`TypeKindComposition`].
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum TypeKind {
    UnitType,
    Int,
    BigInt,
    Double,
    Bool,
    String,
    Qubit,
    Result,
    Pauli,
    Range,
    ArrayType,
    TupleType,
    UserDefinedType,
    TypeParameter,
    Operation,
    Function,
    MissingType,
    InvalidType,
}

/// A type kind, generic over the representation of nested types (`T`),
/// user-defined type references (`U`), type parameters (`P`) and the
/// characteristics of operations (`C`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeKindComposition<T, U, P, C> {
    /// Selects the active payload slot.
    pub kind: Discriminator<TypeKind>,

    /// The payload of [`TypeKind::ArrayType`].
    pub array_type: Option<Box<T>>,

    /// The payload of [`TypeKind::TupleType`].
    pub tuple_type: Option<Vec<T>>,

    /// The payload of [`TypeKind::UserDefinedType`].
    pub user_defined_type: Option<U>,

    /// The payload of [`TypeKind::TypeParameter`].
    pub type_parameter: Option<P>,

    /// The payload of [`TypeKind::Operation`].
    pub operation: Option<Box<TypeKindOperation<T, C>>>,

    /// The payload of [`TypeKind::Function`].
    pub function: Option<Box<TypeKindFunction<T>>>,
}

impl<T, U, P, C> Union for TypeKindComposition<T, U, P, C> {
    type Kind = TypeKind;

    const NAME: &'static str = "TypeKind";

    fn kind(&self) -> &Discriminator<Self::Kind> {
        &self.kind
    }
}

/// The payload of a function type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeKindFunction<T> {
    /// The argument type.
    pub domain: T,

    /// The return type.
    pub codomain: T,
}

/// The payload of an operation type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeKindOperation<T, C> {
    /// The argument type.
    pub domain: T,

    /// The return type.
    pub codomain: T,

    /// The characteristics of the operation.
    pub characteristics: C,
}

/// A fully resolved type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedType {
    /// The kind of type.
    pub type_kind:
        TypeKindComposition<ResolvedType, UserDefinedType, TypeParameter, CallableInformation>,
}

/// A reference to a user-defined type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedType {
    /// The namespace the type is declared in.
    pub namespace: String,

    /// The name of the type.
    pub name: String,

    /// Where the type was referenced, if known.
    pub range: Option<Range>,
}

/// A type parameter of a callable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    /// The callable declaring the parameter.
    pub origin: QualifiedName,

    /// The name of the parameter.
    pub type_name: String,

    /// Where the parameter was referenced, if known.
    pub range: Option<Range>,
}

/// Information about a callable attached to its signature and to operation
/// types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallableInformation {
    /// The functors the callable supports.
    pub characteristics: ResolvedCharacteristics,

    /// Information inferred by the compiler.
    #[serde(default)]
    pub inferred_information: InferredCallableInformation,
}

/// Properties of a callable inferred by the compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredCallableInformation {
    /// Whether the adjoint of the callable is the callable itself.
    #[serde(default)]
    pub is_self_adjoint: bool,

    /// Whether the callable is intrinsic.
    #[serde(default)]
    pub is_intrinsic: bool,
}

/// A property an operation can support.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum OpProperty {
    Adjointable,
    Controllable,
}

/// The discriminator of a [`CharacteristicsKindComposition`].
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum CharacteristicsKind {
    EmptySet,
    SimpleSet,
    Union,
    Intersection,
    InvalidSetExpr,
}

/// A characteristics expression, generic over the representation of nested
/// expressions (`C`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicsKindComposition<C> {
    /// Selects the active payload slot.
    pub kind: Discriminator<CharacteristicsKind>,

    /// The payload of [`CharacteristicsKind::SimpleSet`].
    pub simple_set: Option<OpProperty>,

    /// The payload of [`CharacteristicsKind::Union`] and
    /// [`CharacteristicsKind::Intersection`].
    pub set_operation: Option<Box<SetOperation<C>>>,
}

impl<C> Union for CharacteristicsKindComposition<C> {
    type Kind = CharacteristicsKind;

    const NAME: &'static str = "CharacteristicsKind";

    fn kind(&self) -> &Discriminator<Self::Kind> {
        &self.kind
    }
}

/// The operands of a set operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOperation<C> {
    /// The left operand.
    pub left: C,

    /// The right operand.
    pub right: C,
}

/// A resolved characteristics expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCharacteristics {
    /// The expression.
    pub expression: CharacteristicsKindComposition<ResolvedCharacteristics>,
}
