use crate::{
    CallableInformation, Discriminator, ResolvedType, TypedExpression, Union, UserDefinedType,
};
use serde::Deserialize;

/// A line and column in a source file, both zero-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// The zero-based line.
    pub line: u32,

    /// The zero-based column.
    pub column: u32,
}

/// A range between two [`Position`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// The first position.
    pub start: Position,

    /// The position after the last.
    pub end: Position,
}

/// The location of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The position of the declaration in its file.
    pub offset: Position,

    /// The range of the declaration's name, relative to `offset`.
    pub range: Range,
}

/// A fully qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifiedName {
    /// The namespace containing the item.
    pub namespace: String,

    /// The unqualified name.
    pub name: String,
}

/// Comments attached to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comments {
    /// Comments before the declaration.
    #[serde(default)]
    pub opening_comments: Vec<String>,

    /// Comments after the declaration.
    #[serde(default)]
    pub closing_comments: Vec<String>,
}

/// Who may access a declaration.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum AccessModifier {
    #[default]
    DefaultAccess,
    Internal,
}

/// The modifiers of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifiers {
    /// The access modifier.
    #[serde(default)]
    pub access: AccessModifier,
}

/// The file a declaration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// The source file.
    #[serde(default)]
    pub code_file: String,

    /// The compiled assembly the declaration was loaded from, if any.
    pub assembly_file: Option<String>,
}

/// The discriminator of a [`LocalSymbol`].
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum LocalSymbolKind {
    ValidName,
    InvalidName,
}

/// A name declared in local scope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSymbol {
    /// Selects the active payload slot.
    pub kind: Discriminator<LocalSymbolKind>,

    /// The payload of [`LocalSymbolKind::ValidName`].
    pub name: Option<String>,
}

impl Union for LocalSymbol {
    type Kind = LocalSymbolKind;

    const NAME: &'static str = "LocalSymbol";

    fn kind(&self) -> &Discriminator<Self::Kind> {
        &self.kind
    }
}

/// An attribute attached to a declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
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
    #[serde(default)]
    pub comments: Comments,
}

/// The signature of a callable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSignature {
    /// The callable's type parameters.
    #[serde(default)]
    pub type_parameters: Vec<LocalSymbol>,

    /// The type of the callable's argument tuple.
    pub argument_type: ResolvedType,

    /// The callable's return type.
    pub return_type: ResolvedType,

    /// Information about the callable.
    pub information: CallableInformation,
}

/// The kind of a [`Callable`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CallableKind {
    Operation,
    Function,
    TypeConstructor,
}

/// A callable declaration.
///
/// The argument tuple is part of the schema but not read by this version of
/// the decoder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callable {
    /// The kind of declaration.
    pub kind: CallableKind,

    /// The fully qualified name.
    pub full_name: QualifiedName,

    /// The attributes attached to the declaration.
    #[serde(default)]
    pub attributes: Vec<DeclarationAttribute>,

    /// The declaration's modifiers.
    #[serde(default)]
    pub modifiers: Modifiers,

    /// The file the declaration came from.
    #[serde(default)]
    pub source: Source,

    /// Where the declaration was made, if known.
    pub location: Option<Location>,

    /// The resolved signature.
    pub signature: ResolvedSignature,

    /// The specializations, in order.
    #[serde(default)]
    pub specializations: Vec<Specialization>,

    /// Documentation lines.
    #[serde(default)]
    pub documentation: Vec<String>,

    /// Comments attached to the declaration.
    #[serde(default)]
    pub comments: Comments,
}

/// The kind of a [`Specialization`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SpecializationKind {
    Body,
    Adjoint,
    Controlled,
    ControlledAdjoint,
}

/// A specialization of a callable.
///
/// The signature, implementation, documentation and comments are part of
/// the schema but not read by this version of the decoder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialization {
    /// The kind of declaration.
    pub kind: SpecializationKind,

    /// The callable this specialization belongs to.
    pub parent: QualifiedName,

    /// The attributes attached to the declaration.
    #[serde(default)]
    pub attributes: Vec<DeclarationAttribute>,

    /// The file the declaration came from.
    #[serde(default)]
    pub source: Source,

    /// Where the declaration was made, if known.
    pub location: Option<Location>,

    /// Explicit type arguments, if the specialization is type-specialized.
    pub type_arguments: Option<Vec<ResolvedType>>,
}

/// A user-defined type declaration.
///
/// The named and anonymous items of the type are part of the schema but not
/// read by this version of the decoder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomType {
    /// The fully qualified name.
    pub full_name: QualifiedName,

    /// The attributes attached to the declaration.
    #[serde(default)]
    pub attributes: Vec<DeclarationAttribute>,

    /// The declaration's modifiers.
    #[serde(default)]
    pub modifiers: Modifiers,

    /// The file the declaration came from.
    #[serde(default)]
    pub source: Source,

    /// Where the declaration was made, if known.
    pub location: Option<Location>,

    /// The underlying type.
    pub r#type: ResolvedType,

    /// Documentation lines.
    #[serde(default)]
    pub documentation: Vec<String>,

    /// Comments attached to the declaration.
    #[serde(default)]
    pub comments: Comments,
}

/// The discriminator of a [`NamespaceElement`].
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum NamespaceElementKind {
    Callable,
    CustomType,
}

/// A declaration inside a namespace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceElement {
    /// Selects the active payload slot.
    pub kind: Discriminator<NamespaceElementKind>,

    /// The payload of [`NamespaceElementKind::Callable`].
    pub callable: Option<Callable>,

    /// The payload of [`NamespaceElementKind::CustomType`].
    pub custom_type: Option<CustomType>,
}

impl Union for NamespaceElement {
    type Kind = NamespaceElementKind;

    const NAME: &'static str = "NamespaceElement";

    fn kind(&self) -> &Discriminator<Self::Kind> {
        &self.kind
    }
}

/// Documentation for a namespace coming from a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFileDocumentation {
    /// The name of the source file.
    pub file_name: String,

    /// The lines of documentation.
    #[serde(default)]
    pub documentation_items: Vec<String>,
}

/// A namespace and its declarations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    /// The unqualified name.
    pub name: String,

    /// The declarations, in source order.
    #[serde(default)]
    pub elements: Vec<NamespaceElement>,

    /// Documentation blocks, one per (file, block) pair.
    #[serde(default)]
    pub documentation: Vec<SourceFileDocumentation>,
}

/// A compiled program.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compilation {
    /// The namespaces, in order.
    #[serde(default)]
    pub namespaces: Vec<Namespace>,

    /// The callables marked as entry points.
    #[serde(default)]
    pub entry_points: Vec<QualifiedName>,
}
