use crate::{QualifiedName, Range};
use serde::{Deserialize, Serialize};

/// A type kind, generic over the representation of nested types (`T`),
/// user-defined type references (`U`), type parameters (`P`) and the
/// characteristics of operations (`C`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum TypeKind<T, U, P, C> {
    /// The empty tuple.
    UnitType,

    /// A 64-bit signed integer.
    Int,

    /// An arbitrary-precision integer.
    BigInt,

    /// A 64-bit floating-point number.
    Double,

    /// A boolean.
    Bool,

    /// A string.
    String,

    /// A reference to a qubit.
    Qubit,

    /// The result of a measurement.
    Result,

    /// A single-qubit Pauli matrix.
    Pauli,

    /// A range of integers.
    Range,

    /// An array of elements of the given type.
    ArrayType(T),

    /// A tuple of the given types.
    TupleType(Vec<T>),

    /// A user-defined type.
    UserDefinedType(U),

    /// A type parameter.
    TypeParameter(P),

    /// An operation from the first type to the second.
    Operation((T, T), C),

    /// A function from the first type to the second.
    Function(T, T),

    /// A type that was not written.
    MissingType,

    /// A type that could not be resolved.
    InvalidType,
}

/// The kind of a [`ResolvedType`].
pub type ResolvedTypeKind =
    TypeKind<ResolvedType, UserDefinedType, TypeParameter, CallableInformation>;

/// A fully resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedType(Box<ResolvedTypeKind>);

impl ResolvedType {
    /// Wrap a type kind.
    pub fn new(kind: ResolvedTypeKind) -> Self {
        ResolvedType(Box::new(kind))
    }

    /// The kind of type.
    pub fn kind(&self) -> &ResolvedTypeKind {
        &self.0
    }

    /// Unwrap the kind of type.
    pub fn into_kind(self) -> ResolvedTypeKind {
        *self.0
    }
}

/// A reference to a user-defined type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedType {
    /// The namespace the type is declared in.
    pub namespace: String,

    /// The name of the type.
    pub name: String,

    /// Where the type was referenced, if known.
    pub range: Option<Range>,
}

impl UserDefinedType {
    /// The fully qualified name of the referenced type.
    pub fn full_name(&self) -> QualifiedName {
        QualifiedName::new(self.namespace.clone(), self.name.clone())
    }
}

/// A type parameter of a callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    /// The callable declaring the parameter.
    pub origin: QualifiedName,

    /// The name of the parameter.
    pub type_name: String,

    /// Where the parameter was referenced, if known.
    pub range: Option<Range>,
}

/// Information about a callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallableInformation {
    /// The functors the callable supports.
    pub characteristics: ResolvedCharacteristics,

    /// Information inferred by the compiler.
    pub inferred_information: InferredCallableInformation,
}

/// Properties of a callable inferred by the compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredCallableInformation {
    /// Whether the adjoint of the callable is the callable itself.
    pub is_self_adjoint: bool,

    /// Whether the callable is intrinsic.
    pub is_intrinsic: bool,
}

/// A functor an operation can support.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpProperty {
    Adjointable,
    Controllable,
}

/// A characteristics expression, generic over the representation of nested
/// expressions (`C`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum CharacteristicsKind<C> {
    /// No functors are supported.
    EmptySet,

    /// A single functor.
    SimpleSet(OpProperty),

    /// The functors supported by either operand.
    Union(C, C),

    /// The functors supported by both operands.
    Intersection(C, C),

    /// An expression that could not be resolved.
    InvalidSetExpr,
}

/// A resolved characteristics expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedCharacteristics(Box<CharacteristicsKind<ResolvedCharacteristics>>);

impl ResolvedCharacteristics {
    /// Wrap a characteristics expression.
    pub fn new(kind: CharacteristicsKind<ResolvedCharacteristics>) -> Self {
        ResolvedCharacteristics(Box::new(kind))
    }

    /// The characteristics expression.
    pub fn kind(&self) -> &CharacteristicsKind<ResolvedCharacteristics> {
        &self.0
    }
}
