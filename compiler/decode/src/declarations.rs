use crate::{
    decode_callable_information, decode_callable_kind, decode_comments, decode_location,
    decode_modifiers, decode_nullable, decode_position, decode_qualified_name, decode_range,
    decode_resolved_type, decode_source, decode_specialization_kind, decode_typed_expression,
    decode_union, decode_user_defined_type, Result,
};
use itertools::Itertools;
use quill_syntax as syntax;
use quill_wire as wire;
use std::collections::BTreeMap;

#[allow(missing_docs)]
pub fn decode_local_symbol(symbol: &wire::LocalSymbol) -> Result<syntax::LocalSymbol> {
    decode_union(symbol, |variant| {
        Ok(match variant.kind {
            wire::LocalSymbolKind::ValidName => syntax::LocalSymbol::ValidName(
                variant.payload(symbol.name.as_ref(), "name")?.clone(),
            ),
            wire::LocalSymbolKind::InvalidName => syntax::LocalSymbol::InvalidName,
        })
    })
}

#[allow(missing_docs)]
pub fn decode_declaration_attribute(
    attribute: &wire::DeclarationAttribute,
) -> Result<syntax::DeclarationAttribute> {
    Ok(syntax::DeclarationAttribute {
        type_id: decode_nullable(&attribute.type_id, decode_user_defined_type)?,
        type_id_range: decode_nullable(&attribute.type_id_range, |range| Ok(decode_range(range)))?,
        argument: decode_typed_expression(&attribute.argument)?,
        offset: decode_position(&attribute.offset),
        comments: decode_comments(&attribute.comments),
    })
}

fn decode_attributes(
    attributes: &[wire::DeclarationAttribute],
) -> Result<Vec<syntax::DeclarationAttribute>> {
    attributes.iter().map(decode_declaration_attribute).collect()
}

#[allow(missing_docs)]
pub fn decode_resolved_signature(
    signature: &wire::ResolvedSignature,
) -> Result<syntax::ResolvedSignature> {
    Ok(syntax::ResolvedSignature {
        type_parameters: signature
            .type_parameters
            .iter()
            .map(decode_local_symbol)
            .collect::<Result<_>>()?,
        argument_type: decode_resolved_type(&signature.argument_type)?,
        return_type: decode_resolved_type(&signature.return_type)?,
        information: decode_callable_information(&signature.information)?,
    })
}

/// Decode a specialization. Its signature, implementation, documentation
/// and comments are left pending.
pub fn decode_specialization(
    specialization: &wire::Specialization,
) -> Result<syntax::Specialization> {
    Ok(syntax::Specialization {
        kind: decode_specialization_kind(specialization.kind),
        parent: decode_qualified_name(&specialization.parent),
        attributes: decode_attributes(&specialization.attributes)?,
        source: decode_source(&specialization.source),
        location: decode_nullable(&specialization.location, |location| {
            Ok(decode_location(location))
        })?,
        type_arguments: decode_nullable(&specialization.type_arguments, |types| {
            types.iter().map(decode_resolved_type).collect()
        })?,
        signature: syntax::Deferred::Pending,
        implementation: syntax::Deferred::Pending,
        documentation: syntax::Deferred::Pending,
        comments: syntax::Deferred::Pending,
    })
}

/// Decode a callable and its specializations, in order. The argument tuple
/// is left pending.
pub fn decode_callable(callable: &wire::Callable) -> Result<syntax::Callable> {
    Ok(syntax::Callable {
        kind: decode_callable_kind(callable.kind),
        full_name: decode_qualified_name(&callable.full_name),
        attributes: decode_attributes(&callable.attributes)?,
        modifiers: decode_modifiers(&callable.modifiers),
        source: decode_source(&callable.source),
        location: decode_nullable(&callable.location, |location| Ok(decode_location(location)))?,
        signature: decode_resolved_signature(&callable.signature)?,
        argument_tuple: syntax::Deferred::Pending,
        specializations: callable
            .specializations
            .iter()
            .map(decode_specialization)
            .collect::<Result<_>>()?,
        documentation: callable.documentation.clone(),
        comments: decode_comments(&callable.comments),
    })
}

/// Decode a user-defined type declaration. Its items are left pending.
pub fn decode_custom_type(custom_type: &wire::CustomType) -> Result<syntax::CustomType> {
    Ok(syntax::CustomType {
        full_name: decode_qualified_name(&custom_type.full_name),
        attributes: decode_attributes(&custom_type.attributes)?,
        modifiers: decode_modifiers(&custom_type.modifiers),
        source: decode_source(&custom_type.source),
        location: decode_nullable(&custom_type.location, |location| {
            Ok(decode_location(location))
        })?,
        r#type: decode_resolved_type(&custom_type.r#type)?,
        type_items: syntax::Deferred::Pending,
        documentation: custom_type.documentation.clone(),
        comments: decode_comments(&custom_type.comments),
    })
}

#[allow(missing_docs)]
pub fn decode_namespace_element(
    element: &wire::NamespaceElement,
) -> Result<syntax::NamespaceElement> {
    decode_union(element, |variant| {
        Ok(match variant.kind {
            wire::NamespaceElementKind::Callable => syntax::NamespaceElement::Callable(
                decode_callable(variant.payload(element.callable.as_ref(), "callable")?)?,
            ),
            wire::NamespaceElementKind::CustomType => syntax::NamespaceElement::CustomType(
                decode_custom_type(variant.payload(element.custom_type.as_ref(), "customType")?)?,
            ),
        })
    })
}

/// Group documentation blocks by the file they were written in. Blocks from
/// the same file keep their order.
pub fn decode_documentation(
    documentation: &[wire::SourceFileDocumentation],
) -> BTreeMap<String, Vec<Vec<String>>> {
    documentation
        .iter()
        .map(|block| (block.file_name.clone(), block.documentation_items.clone()))
        .into_group_map()
        .into_iter()
        .collect()
}

/// Decode a namespace and its elements, in order.
pub fn decode_namespace(namespace: &wire::Namespace) -> Result<syntax::Namespace> {
    tracing::debug!(
        namespace = %namespace.name,
        elements = namespace.elements.len(),
        "decoding namespace"
    );

    let elements = namespace
        .elements
        .iter()
        .map(|element| -> Result<_> {
            let element = decode_namespace_element(element)?;
            tracing::trace!(name = %element.full_name(), "decoded namespace element");
            Ok(element)
        })
        .collect::<Result<_>>()?;

    Ok(syntax::Namespace {
        name: namespace.name.clone(),
        elements,
        documentation: decode_documentation(&namespace.documentation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn signature() -> Value {
        json!({
            "argumentType": { "typeKind": { "kind": "Qubit" } },
            "returnType": { "typeKind": { "kind": "UnitType" } },
            "information": { "characteristics": { "expression": { "kind": "EmptySet" } } },
        })
    }

    fn specialization(kind: &str) -> Value {
        json!({ "kind": kind, "parent": { "namespace": "Foo", "name": "Bar" } })
    }

    fn callable(name: &str, specializations: Vec<Value>) -> Value {
        json!({
            "kind": "Operation",
            "fullName": { "namespace": "Foo", "name": name },
            "signature": signature(),
            "specializations": specializations,
        })
    }

    fn from_json<T: serde::de::DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn callable_with_specializations() {
        let callable = decode_callable(&from_json(callable(
            "Bar",
            vec![
                specialization("Body"),
                specialization("Adjoint"),
                specialization("Controlled"),
                specialization("ControlledAdjoint"),
            ],
        )))
        .unwrap();

        assert_eq!(callable.kind, syntax::CallableKind::Operation);
        assert_eq!(callable.full_name, syntax::QualifiedName::new("Foo", "Bar"));
        assert_eq!(callable.location, None);
        assert!(callable.argument_tuple.is_pending());
        assert_eq!(
            callable
                .specializations
                .iter()
                .map(|specialization| specialization.kind)
                .collect::<Vec<_>>(),
            vec![
                syntax::SpecializationKind::Body,
                syntax::SpecializationKind::Adjoint,
                syntax::SpecializationKind::Controlled,
                syntax::SpecializationKind::ControlledAdjoint,
            ]
        );

        for specialization in &callable.specializations {
            assert_eq!(specialization.parent, callable.full_name);
        }
    }

    #[test]
    fn specialization_deferred_fields_are_pending() {
        let specialization = decode_specialization(&from_json(specialization("Body"))).unwrap();

        assert!(specialization.signature.is_pending());
        assert!(specialization.implementation.is_pending());
        assert!(specialization.documentation.is_pending());
        assert!(specialization.comments.is_pending());
        assert_eq!(specialization.type_arguments, None);
        assert_eq!(specialization.attributes, Vec::new());
    }

    #[test]
    fn specialization_type_arguments() {
        let mut value = specialization("Body");
        value["typeArguments"] = json!([{ "typeKind": { "kind": "Int" } }]);

        let specialization = decode_specialization(&from_json(value)).unwrap();
        assert_eq!(
            specialization.type_arguments,
            Some(vec![syntax::ResolvedType::new(syntax::TypeKind::Int)])
        );
    }

    #[rstest]
    #[case::absent(None, None)]
    #[case::present(
        Some(json!({
            "offset": { "line": 4, "column": 0 },
            "range": { "start": { "line": 0, "column": 10 }, "end": { "line": 0, "column": 13 } },
        })),
        Some(syntax::Location {
            offset: syntax::Position { line: 4, column: 0 },
            range: syntax::Range {
                start: syntax::Position { line: 0, column: 10 },
                end: syntax::Position { line: 0, column: 13 },
            },
        })
    )]
    fn callable_location(
        #[case] location: Option<Value>,
        #[case] expected: Option<syntax::Location>,
    ) {
        let mut value = callable("Bar", Vec::new());
        if let Some(location) = location {
            value["location"] = location;
        }

        assert_eq!(decode_callable(&from_json(value)).unwrap().location, expected);
    }

    #[test]
    fn signature_type_parameters() {
        let mut value = signature();
        value["typeParameters"] = json!([
            { "kind": "ValidName", "name": "T" },
            { "kind": "InvalidName" },
        ]);

        let signature = decode_resolved_signature(&from_json(value)).unwrap();
        assert_eq!(
            signature.type_parameters,
            vec![
                syntax::LocalSymbol::ValidName(String::from("T")),
                syntax::LocalSymbol::InvalidName,
            ]
        );
        assert_eq!(signature.argument_type.kind(), &syntax::TypeKind::Qubit);
        assert_eq!(signature.return_type.kind(), &syntax::TypeKind::UnitType);
    }

    #[test]
    fn local_symbol_without_name() {
        assert_eq!(
            decode_local_symbol(&from_json(json!({ "kind": "ValidName" }))),
            Err(DecodeError::InconsistentDiscriminator {
                union: "LocalSymbol",
                field: "name",
                kind: String::from("ValidName"),
            })
        );
    }

    #[test]
    fn unrecognized_local_symbol() {
        assert_eq!(
            decode_local_symbol(&from_json(json!({ "kind": "Weird", "name": "x" }))),
            Err(DecodeError::UnsupportedDiscriminator {
                union: "LocalSymbol",
                kind: String::from("Weird"),
            })
        );
    }

    #[test]
    fn attribute_with_resolved_type_id() {
        let attribute = decode_declaration_attribute(&from_json(json!({
            "typeId": { "namespace": "Microsoft.Quantum.Core", "name": "EntryPoint" },
            "argument": {
                "expression": { "kind": "UnitValue" },
                "resolvedType": { "typeKind": { "kind": "UnitType" } },
            },
            "offset": { "line": 2, "column": 0 },
        })))
        .unwrap();

        assert_eq!(
            attribute.type_id.map(|type_id| type_id.full_name()),
            Some(syntax::QualifiedName::new("Microsoft.Quantum.Core", "EntryPoint"))
        );
        assert_eq!(attribute.type_id_range, None);
        assert_eq!(*attribute.argument.expression, syntax::ExpressionKind::UnitValue);
        assert_eq!(attribute.offset, syntax::Position { line: 2, column: 0 });
    }

    #[test]
    fn custom_type() {
        let custom_type = decode_custom_type(&from_json(json!({
            "fullName": { "namespace": "Foo", "name": "Complex" },
            "type": {
                "typeKind": {
                    "kind": "TupleType",
                    "tupleType": [
                        { "typeKind": { "kind": "Double" } },
                        { "typeKind": { "kind": "Double" } },
                    ],
                },
            },
            "modifiers": { "access": "Internal" },
            "documentation": ["A complex number."],
        })))
        .unwrap();

        assert_eq!(custom_type.full_name, syntax::QualifiedName::new("Foo", "Complex"));
        assert_eq!(custom_type.modifiers.access, syntax::AccessModifier::Internal);
        assert_eq!(custom_type.documentation, vec![String::from("A complex number.")]);
        assert!(custom_type.type_items.is_pending());
    }

    #[rstest]
    #[case("Callable", "callable")]
    #[case("CustomType", "customType")]
    fn namespace_element_without_payload(#[case] kind: &str, #[case] field: &'static str) {
        assert_eq!(
            decode_namespace_element(&from_json(json!({ "kind": kind }))),
            Err(DecodeError::InconsistentDiscriminator {
                union: "NamespaceElement",
                field,
                kind: kind.to_string(),
            })
        );
    }

    #[test]
    fn unrecognized_namespace_element() {
        assert_eq!(
            decode_namespace_element(&from_json(json!({ "kind": "Module" }))),
            Err(DecodeError::UnsupportedDiscriminator {
                union: "NamespaceElement",
                kind: String::from("Module"),
            })
        );
    }

    #[test]
    fn namespace_keeps_element_order() {
        let elements = ["C", "A", "B"]
            .into_iter()
            .map(|name| json!({ "kind": "Callable", "callable": callable(name, Vec::new()) }))
            .collect::<Vec<_>>();

        let namespace =
            decode_namespace(&from_json(json!({ "name": "Foo", "elements": elements }))).unwrap();

        assert_eq!(namespace.name, "Foo");
        assert_eq!(
            namespace
                .elements
                .iter()
                .map(|element| element.full_name().name.as_str())
                .collect::<Vec<_>>(),
            vec!["C", "A", "B"]
        );
    }

    #[test]
    fn documentation_is_grouped_by_file() {
        let documentation = decode_documentation(&from_json::<Vec<wire::SourceFileDocumentation>>(
            json!([
                { "fileName": "b.qs", "documentationItems": ["first"] },
                { "fileName": "a.qs", "documentationItems": ["only"] },
                { "fileName": "b.qs", "documentationItems": ["second", "more"] },
            ]),
        ));

        assert_eq!(
            documentation,
            BTreeMap::from([
                (String::from("a.qs"), vec![vec![String::from("only")]]),
                (
                    String::from("b.qs"),
                    vec![
                        vec![String::from("first")],
                        vec![String::from("second"), String::from("more")],
                    ],
                ),
            ])
        );
    }

    #[test]
    fn error_in_one_element_fails_the_namespace() {
        let result = decode_namespace(&from_json(json!({
            "name": "Foo",
            "elements": [
                { "kind": "Callable", "callable": callable("A", Vec::new()) },
                { "kind": "CustomType" },
            ],
        })));

        assert!(matches!(
            result,
            Err(DecodeError::InconsistentDiscriminator { field: "customType", .. })
        ));
    }
}
