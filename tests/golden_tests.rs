//! Golden Tests for Fixture Schemas
//!
//! Runs whole documents through a generation run and checks the resulting
//! type model.

use std::path::{Path, PathBuf};

use familiar_typegen::loader::{load_file, load_path};
use familiar_typegen::{GenerationConfig, GenerationRun, MarkerOrigin, TypeResolver, TypegenError};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_order_fixture_model() {
    let doc = load_file(&fixture("order.schema.json")).unwrap();
    assert_eq!(doc.name, "order");

    let mut run = GenerationRun::new(GenerationConfig::default()).unwrap();
    let root = run.generate(&doc.locator, &doc.content, "com.acme", &doc.name).unwrap();
    let model = run.model();

    assert_eq!(model.qualified_name(root), "com.acme.Order");
    assert_eq!(model.class_count(), 2);

    let fields: Vec<(String, String, bool)> = model
        .class(root)
        .fields
        .iter()
        .map(|id| {
            let f = model.field(*id);
            (f.name.clone(), model.display_type(&f.ty), f.required)
        })
        .collect();
    assert_eq!(
        fields,
        vec![
            ("id".to_string(), "Long".to_string(), true),
            ("tags".to_string(), "Set<String>".to_string(), false),
            ("lines".to_string(), "List<com.acme.Line>".to_string(), true),
            ("weights".to_string(), "List<Float>".to_string(), false),
            ("legacyCode".to_string(), "String".to_string(), false),
        ]
    );

    let legacy = model.field_by_name(root, "legacyCode").unwrap();
    assert_eq!(model.field(legacy).json_name, "legacy-code");
    let marker_names: Vec<&str> = model
        .field(legacy)
        .markers
        .iter()
        .map(|id| run.markers().get(*id).unwrap().name.as_str())
        .collect();
    assert_eq!(marker_names, vec!["java.lang.Deprecated", "com.acme.Audited"]);

    // com.acme.Audited is referenced twice but synthesized once
    assert_eq!(run.markers().synthesized_count(), 1);
    let audited = run.markers().resolve_loadable_type("com.acme.Audited").unwrap();
    assert_eq!(run.markers().get(audited).unwrap().origin, MarkerOrigin::Synthesized);
}

#[test]
fn test_order_fixture_describe() {
    let doc = load_file(&fixture("order.schema.json")).unwrap();
    let mut run = GenerationRun::new(GenerationConfig {
        use_double_numbers: true,
        known_annotations: vec!["com.acme.Audited".to_string()],
        ..Default::default()
    })
    .unwrap();
    run.generate(&doc.locator, &doc.content, "com.acme", &doc.name).unwrap();

    let listing = run.describe();
    assert!(listing.contains("class com.acme.Line\n"));
    assert!(listing.contains("    @com.acme.Audited\n    sku?: String\n"));
    assert!(listing.contains("    price?: Double\n"));
    assert!(listing.contains("    weights?: List<Double>\n"));
    assert_eq!(run.markers().synthesized_count(), 0);
}

#[test]
fn test_bad_items_fixture_fails_fast() {
    let doc = load_file(&fixture("bad_items.schema.json")).unwrap();
    let mut run = GenerationRun::new(GenerationConfig::default()).unwrap();

    let err = run.generate(&doc.locator, &doc.content, "", &doc.name).unwrap_err();
    match err {
        TypegenError::UnresolvableElementType { locator, node, type_name } => {
            assert!(locator.ends_with("bad_items.schema.json"));
            assert_eq!(node, "matrix");
            assert_eq!(type_name, "tuple");
        }
        other => panic!("Expected UnresolvableElementType, got {:?}", other),
    }
}

#[test]
fn test_model_serializes_for_export() {
    let doc = load_file(&fixture("order.schema.json")).unwrap();
    let mut run = GenerationRun::new(GenerationConfig::default()).unwrap();
    run.generate(&doc.locator, &doc.content, "com.acme", &doc.name).unwrap();

    let (model, markers) = run.into_parts();
    let json = serde_json::json!({ "model": model, "markers": markers });
    let text = serde_json::to_string(&json).unwrap();

    assert!(text.contains(r#""type":"container""#));
    assert!(text.contains(r#""implementation":"Set""#));
    assert!(text.contains(r#""origin":"synthesized""#));
}

#[test]
fn test_load_fixture_directory() {
    let docs = load_path(&fixture("")).unwrap();
    let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["bad_items", "order"]);
}

#[test]
fn test_invalid_config_rejected_by_run() {
    let mut config = GenerationConfig::default();
    config.collections.ordered.implementation = String::new();

    assert!(matches!(
        GenerationRun::new(config),
        Err(TypegenError::InvalidConfig(_))
    ));
}
