//! Decode the wire representation of a compiled program into the in-memory
//! syntax tree.
//!
//! Every wire union is decoded through [`decode_union`]: the discriminator
//! selects the variant, the matching payload slot must be present, and the
//! payload is decoded recursively. The generic family decoders
//! ([`decode_type_kind`], [`decode_expression_kind`],
//! [`decode_characteristics_kind`]) take one function per type parameter, so
//! the same logic decodes any composition of nested nodes.

mod declarations;
mod error;
mod expressions;
mod primitives;
mod types;
mod union;

pub use declarations::*;
pub use error::*;
pub use expressions::*;
pub use primitives::*;
pub use types::*;
pub use union::*;

use quill_syntax as syntax;
use quill_wire as wire;
use rayon::prelude::*;
use serde::Deserialize;

/// Options for [`decode_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Decode top-level namespaces in parallel. The result is the same as
    /// decoding sequentially.
    pub parallel: bool,
}

/// Decode a compilation with the default [`Options`].
pub fn decode(compilation: &wire::Compilation) -> Result<syntax::Compilation> {
    decode_with(compilation, &Options::default())
}

/// Decode a compilation. The namespaces keep their order; the first error
/// encountered is returned and no partial tree is produced.
///
/// Entry points are not carried over and the result's list is always empty.
pub fn decode_with(
    compilation: &wire::Compilation,
    options: &Options,
) -> Result<syntax::Compilation> {
    tracing::debug!(
        namespaces = compilation.namespaces.len(),
        parallel = options.parallel,
        "decoding compilation"
    );

    if !compilation.entry_points.is_empty() {
        tracing::debug!(
            entry_points = compilation.entry_points.len(),
            "dropping entry points"
        );
    }

    let namespaces = if options.parallel {
        compilation
            .namespaces
            .par_iter()
            .map(decode_namespace)
            .collect::<Result<Vec<_>>>()?
    } else {
        compilation
            .namespaces
            .iter()
            .map(decode_namespace)
            .collect::<Result<Vec<_>>>()?
    };

    Ok(syntax::Compilation {
        namespaces,
        entry_points: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn operation(namespace: &str, name: &str) -> Value {
        json!({
            "kind": "Callable",
            "callable": {
                "kind": "Operation",
                "fullName": { "namespace": namespace, "name": name },
                "signature": {
                    "argumentType": { "typeKind": { "kind": "UnitType" } },
                    "returnType": { "typeKind": { "kind": "UnitType" } },
                    "information": {
                        "characteristics": { "expression": { "kind": "EmptySet" } },
                    },
                },
                "specializations": [{
                    "kind": "Body",
                    "parent": { "namespace": namespace, "name": name },
                }],
            },
        })
    }

    fn compilation(value: Value) -> wire::Compilation {
        serde_json::from_value(value).unwrap()
    }

    #[rstest]
    #[case::sequential(Options { parallel: false })]
    #[case::parallel(Options { parallel: true })]
    fn single_operation(#[case] options: Options) {
        let decoded = decode_with(
            &compilation(json!({
                "namespaces": [{ "name": "Foo", "elements": [operation("Foo", "Bar")] }],
            })),
            &options,
        )
        .unwrap();

        assert_eq!(decoded.namespaces.len(), 1);
        assert!(decoded.entry_points.is_empty());

        let namespace = &decoded.namespaces[0];
        assert_eq!(namespace.name, "Foo");
        assert_eq!(namespace.elements.len(), 1);

        let syntax::NamespaceElement::Callable(callable) = &namespace.elements[0] else {
            panic!("expected a callable");
        };

        assert_eq!(callable.kind, syntax::CallableKind::Operation);
        assert_eq!(callable.full_name, syntax::QualifiedName::new("Foo", "Bar"));
        assert_eq!(callable.specializations.len(), 1);
        assert_eq!(callable.specializations[0].kind, syntax::SpecializationKind::Body);
    }

    #[test]
    fn namespaces_keep_their_order() {
        let names = ["Zeta", "Alpha", "Mu", "Beta", "Omega"];

        let namespaces = names
            .iter()
            .map(|name| json!({ "name": name, "elements": [operation(name, "Run")] }))
            .collect::<Vec<_>>();

        let input = compilation(json!({ "namespaces": namespaces }));

        for parallel in [false, true] {
            let decoded = decode_with(&input, &Options { parallel }).unwrap();

            assert_eq!(
                decoded
                    .namespaces
                    .iter()
                    .map(|namespace| namespace.name.as_str())
                    .collect::<Vec<_>>(),
                names
            );
        }
    }

    #[test]
    fn decoding_is_deterministic() {
        let input = compilation(json!({
            "namespaces": [
                { "name": "A", "elements": [operation("A", "X"), operation("A", "Y")] },
                { "name": "B", "elements": [operation("B", "Z")] },
            ],
        }));

        let first = decode(&input).unwrap();
        assert_eq!(decode(&input).unwrap(), first);
        assert_eq!(decode_with(&input, &Options { parallel: true }).unwrap(), first);
    }

    #[test]
    fn entry_points_are_dropped() {
        let decoded = decode(&compilation(json!({
            "namespaces": [],
            "entryPoints": [{ "namespace": "Foo", "name": "Main" }],
        })))
        .unwrap();

        assert_eq!(decoded.namespaces, Vec::new());
        assert_eq!(decoded.entry_points, Vec::new());
    }

    #[rstest]
    #[case::sequential(false)]
    #[case::parallel(true)]
    fn first_error_fails_the_compilation(#[case] parallel: bool) {
        let input = compilation(json!({
            "namespaces": [
                { "name": "A", "elements": [operation("A", "X")] },
                { "name": "B", "elements": [{ "kind": "Callable" }] },
                { "name": "C", "elements": [operation("C", "Z")] },
            ],
        }));

        assert_eq!(
            decode_with(&input, &Options { parallel }),
            Err(DecodeError::InconsistentDiscriminator {
                union: "NamespaceElement",
                field: "callable",
                kind: String::from("Callable"),
            })
        );
    }

    #[test]
    fn options_from_json() {
        assert_eq!(
            serde_json::from_value::<Options>(json!({})).unwrap(),
            Options::default()
        );
        assert_eq!(
            serde_json::from_value::<Options>(json!({ "parallel": true })).unwrap(),
            Options { parallel: true }
        );
    }
}
