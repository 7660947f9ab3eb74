use crate::{
    CallableInformation, InferredExpressionInformation, ResolvedType, TypedExpression,
    UserDefinedType,
};
use quill_util::Deferred;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// A line and column in a source file, both zero-based.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// A range between two [`Position`]s.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// The location of a declaration: the position of the declaration in its
/// file, and the range of its name relative to that position.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub offset: Position,
    pub range: Range,
}

/// A fully qualified name.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
}

impl QualifiedName {
    /// Create a new qualified name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        QualifiedName {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Comments attached to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comments {
    /// Comments before the declaration.
    pub opening_comments: Vec<String>,

    /// Comments after the declaration.
    pub closing_comments: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessModifier {
    #[default]
    DefaultAccess,
    Internal,
}

/// The modifiers of a declaration.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifiers {
    pub access: AccessModifier,
}

/// The file a declaration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// The source file.
    pub code_file: String,

    /// The compiled assembly the declaration was loaded from, if any.
    pub assembly_file: Option<String>,
}

/// A name declared in local scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum LocalSymbol {
    /// A valid name.
    ValidName(String),

    /// A name that could not be parsed.
    InvalidName,
}

/// A possibly nested tuple of items.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum Tuple<T> {
    Item(T),
    Tuple(Vec<Tuple<T>>),
}

/// A variable declared in local scope, named by `N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalVariableDeclaration<N> {
    /// The name of the variable.
    pub variable_name: N,

    /// The type of the variable.
    pub r#type: ResolvedType,

    /// Information inferred by the compiler.
    pub inferred_information: InferredExpressionInformation,

    /// The position of the declaring statement, if any.
    pub position: Option<Position>,

    /// The range of the name, relative to `position`.
    pub range: Range,
}

/// The argument tuple of a callable.
pub type ArgumentTuple = Tuple<LocalVariableDeclaration<LocalSymbol>>;

/// An item of a user-defined type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum TypeItem {
    /// An item that can be accessed by name.
    Named(LocalVariableDeclaration<String>),

    /// An item that can only be accessed by unwrapping.
    Anonymous(ResolvedType),
}

/// An attribute attached to a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationAttribute {
    /// The user-defined type the attribute refers to, if it was resolved.
    pub type_id: Option<UserDefinedType>,

    /// Where the attribute's type was written, if known.
    pub type_id_range: Option<Range>,

    /// The attribute's argument.
    pub argument: TypedExpression,

    /// The position of the attribute in its file.
    pub offset: Position,

    /// Comments attached to the attribute.
    pub comments: Comments,
}

/// The signature of a callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSignature {
    /// The callable's type parameters.
    pub type_parameters: Vec<LocalSymbol>,

    /// The type of the callable's argument tuple.
    pub argument_type: ResolvedType,

    /// The callable's return type.
    pub return_type: ResolvedType,

    /// Information about the callable.
    pub information: CallableInformation,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallableKind {
    Operation,
    Function,
    TypeConstructor,
}

/// A callable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callable {
    /// Whether the callable is an operation, function or type constructor.
    pub kind: CallableKind,

    /// The fully qualified name.
    pub full_name: QualifiedName,

    /// Attributes attached to the declaration.
    pub attributes: Vec<DeclarationAttribute>,

    /// Access modifiers.
    pub modifiers: Modifiers,

    /// The file the callable was declared in.
    pub source: Source,

    /// Where the callable was declared, if known.
    pub location: Option<Location>,

    /// The resolved signature.
    pub signature: ResolvedSignature,

    /// The callable's parameters.
    pub argument_tuple: Deferred<ArgumentTuple>,

    /// The specializations, in order.
    pub specializations: Vec<Specialization>,

    /// Documentation comments, one line per entry.
    pub documentation: Vec<String>,

    /// Other comments around the declaration.
    pub comments: Comments,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecializationKind {
    Body,
    Adjoint,
    Controlled,
    ControlledAdjoint,
}

/// How a specialization is generated from the body.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeneratorDirective {
    SelfInverse,
    Distribute,
    Invert,
    InvalidGenerator,
}

/// The implementation of a specialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum SpecializationImplementation {
    /// Provided by the target machine.
    Intrinsic,

    /// Provided by an external library.
    External,

    /// Generated by the compiler from another specialization.
    Generated(GeneratorDirective),

    /// Written in source, taking the given arguments. Statement bodies are
    /// not part of this tree.
    Provided(ArgumentTuple),
}

/// A specialization of a callable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialization {
    /// Which functor this specialization implements.
    pub kind: SpecializationKind,

    /// The callable this specialization belongs to. Look it up by name; the
    /// specialization does not own it.
    pub parent: QualifiedName,

    /// Attributes attached to the specialization.
    pub attributes: Vec<DeclarationAttribute>,

    /// The file the specialization was declared in.
    pub source: Source,

    /// Where the specialization was declared, if known.
    pub location: Option<Location>,

    /// Explicit type arguments, if the specialization is type-specialized.
    pub type_arguments: Option<Vec<ResolvedType>>,

    /// The resolved signature.
    pub signature: Deferred<ResolvedSignature>,

    /// How the specialization is implemented.
    pub implementation: Deferred<SpecializationImplementation>,

    /// Documentation comments.
    pub documentation: Deferred<Vec<String>>,

    /// Other comments.
    pub comments: Deferred<Comments>,
}

/// A user-defined type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomType {
    /// The fully qualified name.
    pub full_name: QualifiedName,

    /// Attributes attached to the declaration.
    pub attributes: Vec<DeclarationAttribute>,

    /// Access modifiers.
    pub modifiers: Modifiers,

    /// The file the type was declared in.
    pub source: Source,

    /// Where the type was declared, if known.
    pub location: Option<Location>,

    /// The underlying type.
    pub r#type: ResolvedType,

    /// The named and anonymous items of the type.
    pub type_items: Deferred<Tuple<TypeItem>>,

    /// Documentation comments, one line per entry.
    pub documentation: Vec<String>,

    /// Other comments around the declaration.
    pub comments: Comments,
}

/// A declaration inside a namespace.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum NamespaceElement {
    Callable(Callable),
    CustomType(CustomType),
}

impl NamespaceElement {
    /// The fully qualified name of the declaration.
    pub fn full_name(&self) -> &QualifiedName {
        match self {
            NamespaceElement::Callable(callable) => &callable.full_name,
            NamespaceElement::CustomType(custom_type) => &custom_type.full_name,
        }
    }
}

/// A namespace and its declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    /// The fully qualified namespace name.
    pub name: String,

    /// The declarations, in source order.
    pub elements: Vec<NamespaceElement>,

    /// The documentation blocks for the namespace, grouped by the source file
    /// they were written in.
    pub documentation: BTreeMap<String, Vec<Vec<String>>>,
}

/// A compiled program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compilation {
    /// The namespaces, in order.
    pub namespaces: Vec<Namespace>,

    /// The callables to run when the program starts.
    pub entry_points: Vec<QualifiedName>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeKind;

    #[test]
    fn qualified_name_display() {
        assert_eq!(QualifiedName::new("Foo", "Bar").to_string(), "Foo.Bar");
    }

    #[test]
    fn namespace_element_full_name() {
        let custom_type = CustomType {
            full_name: QualifiedName::new("Foo", "Pair"),
            attributes: Vec::new(),
            modifiers: Modifiers::default(),
            source: Source::default(),
            location: None,
            r#type: ResolvedType::new(TypeKind::Int),
            type_items: Deferred::Pending,
            documentation: Vec::new(),
            comments: Comments::default(),
        };

        assert_eq!(
            NamespaceElement::CustomType(custom_type).full_name(),
            &QualifiedName::new("Foo", "Pair")
        );
    }
}
