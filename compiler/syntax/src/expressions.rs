use crate::{QualifiedName, Range, ResolvedType};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// An expression kind, generic over the representation of nested
/// expressions (`E`), symbols (`S`) and types (`T`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum ExpressionKind<E, S, T> {
    /// The empty tuple.
    UnitValue,

    /// A reference to a symbol, with explicit type arguments if any were
    /// given.
    Identifier(S, Option<Vec<T>>),

    /// A tuple.
    ValueTuple(Vec<E>),

    /// An integer literal.
    IntLiteral(i64),

    /// An arbitrary-precision integer literal.
    BigIntLiteral(BigInt),

    /// A floating-point literal.
    DoubleLiteral(Double),

    /// A boolean literal.
    BoolLiteral(bool),

    /// A string literal and its interpolated expressions.
    StringLiteral(String, Vec<E>),

    /// A measurement result literal.
    ResultLiteral(ResultValue),

    /// A Pauli literal.
    PauliLiteral(Pauli),

    /// A range from the first expression to the second.
    RangeLiteral(E, E),

    /// A new array of the given element type and length.
    NewArray(T, E),

    /// An array literal.
    ValueArray(Vec<E>),

    /// Accessing an array at an index.
    ArrayItem(E, E),

    /// Accessing a named item of a user-defined type.
    NamedItem(E, S),

    /// A unary operator.
    UnaryOperation(UnaryOperator, E),

    /// A binary operator.
    BinaryOperation(BinaryOperator, E, E),

    /// `condition ? then | else`.
    Conditional(E, E, E),

    /// Copy the first expression, replacing the item at the second with the
    /// third.
    CopyAndUpdate(E, E, E),

    /// Unwrapping a user-defined type.
    UnwrapApplication(E),

    /// The adjoint of a callable.
    AdjointApplication(E),

    /// The controlled version of a callable.
    ControlledApplication(E),

    /// Calling the first expression with the second.
    CallLikeExpression(E, E),

    /// An expression that was not written.
    MissingExpr,

    /// An expression that could not be resolved.
    InvalidExpr,
}

/// A floating-point value compared by its bits, so a NaN literal equals
/// itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Double(pub f64);

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Double {}

impl std::hash::Hash for Double {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Double(value)
    }
}

/// A unary operator.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum UnaryOperator {
    #[strum(serialize = "-")]
    Neg,
    #[strum(serialize = "not")]
    Not,
    #[strum(serialize = "~~~")]
    BNot,
}

/// A binary operator.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum BinaryOperator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "^")]
    Pow,
    #[strum(serialize = "%")]
    Mod,
    #[strum(serialize = "<<<")]
    LShift,
    #[strum(serialize = ">>>")]
    RShift,
    #[strum(serialize = "|||")]
    BOr,
    #[strum(serialize = "^^^")]
    BXor,
    #[strum(serialize = "&&&")]
    BAnd,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "<=")]
    Lte,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = ">=")]
    Gte,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Neq,
    #[strum(serialize = "and")]
    And,
    #[strum(serialize = "or")]
    Or,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultValue {
    Zero,
    One,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pauli {
    PauliI,
    PauliX,
    PauliY,
    PauliZ,
}

/// A reference to a local variable or a global callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum Identifier {
    /// A variable in local scope.
    LocalVariable(String),

    /// A callable declared in a namespace.
    GlobalCallable(QualifiedName),

    /// An identifier that could not be resolved.
    InvalidIdentifier,
}

/// An expression annotated with the results of type checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedExpression {
    /// The kind of expression.
    pub expression: Box<ExpressionKind<TypedExpression, Identifier, ResolvedType>>,

    /// The type arguments the expression was resolved with.
    pub type_arguments: Vec<TypeArgument>,

    /// The type of the expression.
    pub resolved_type: ResolvedType,

    /// Information inferred by the compiler.
    pub inferred_information: InferredExpressionInformation,

    /// The expression's range, relative to the enclosing statement.
    pub range: Option<Range>,
}

/// A type argument of a [`TypedExpression`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredExpressionInformation {
    /// Whether the expression may be mutated.
    pub is_mutable: bool,

    /// Whether the expression depends on a quantum value in local scope.
    pub has_local_quantum_dependency: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_compare_by_bits() {
        assert_eq!(Double(f64::NAN), Double(f64::NAN));
        assert_eq!(Double::from(0.5), Double(0.5));
        assert_ne!(Double(0.0), Double(-0.0));

        let literal = ExpressionKind::<(), (), ()>::DoubleLiteral(Double(f64::NAN));
        assert_eq!(literal.clone(), literal);
    }
}
