#![allow(missing_docs)]

use rstest::rstest;

#[rstest]
fn fixtures(#[files("fixtures/*.json")] path: std::path::PathBuf) {
    use quill_decode::{DecodeError, Options};
    use quill_syntax as syntax;
    use serde::Deserialize;
    use tracing_subscriber::EnvFilter;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Fixture {
        expect: Expect,
        compilation: quill_wire::Compilation,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    enum Expect {
        Decoded { namespaces: Vec<String> },
        Error(String),
    }

    fn error_kind(error: &DecodeError) -> &'static str {
        match error {
            DecodeError::InconsistentDiscriminator { .. } => "InconsistentDiscriminator",
            DecodeError::UnsupportedDiscriminator { .. } => "UnsupportedDiscriminator",
            DecodeError::MalformedScalar { .. } => "MalformedScalar",
        }
    }

    fn check_element(element: &syntax::NamespaceElement) {
        match element {
            syntax::NamespaceElement::Callable(callable) => {
                assert!(callable.argument_tuple.is_pending());

                for specialization in &callable.specializations {
                    assert_eq!(specialization.parent, callable.full_name);
                    assert!(specialization.signature.is_pending());
                    assert!(specialization.implementation.is_pending());
                    assert!(specialization.documentation.is_pending());
                    assert!(specialization.comments.is_pending());
                }
            }
            syntax::NamespaceElement::CustomType(custom_type) => {
                assert!(custom_type.type_items.is_pending());
            }
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let fixture: Fixture = quill_util::read_json_file(&path).unwrap();

    let result = quill_decode::decode(&fixture.compilation);

    assert_eq!(
        quill_decode::decode(&fixture.compilation),
        result,
        "decoding is not deterministic"
    );

    assert_eq!(
        quill_decode::decode_with(&fixture.compilation, &Options { parallel: true }),
        result,
        "parallel decoding differs from sequential decoding"
    );

    match (fixture.expect, result) {
        (Expect::Decoded { namespaces }, Ok(compilation)) => {
            let names = compilation
                .namespaces
                .iter()
                .map(|namespace| namespace.name.clone())
                .collect::<Vec<_>>();

            assert_eq!(names, namespaces);
            assert!(compilation.entry_points.is_empty());

            for namespace in &compilation.namespaces {
                for element in &namespace.elements {
                    check_element(element);
                }
            }
        }
        (Expect::Error(expected), Err(error)) => {
            assert_eq!(error_kind(&error), expected, "{error}");
        }
        (expect, result) => panic!("expected {expect:?}, found {result:?}"),
    }
}
