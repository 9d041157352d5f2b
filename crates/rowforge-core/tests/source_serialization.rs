use rowforge_core::{FieldDescriptor, FieldKind, SourceSet, TableSource};

#[test]
fn serializes_source_deterministically() {
    let mut id = FieldDescriptor::new("id", FieldKind::Integer);
    id.is_nullable = false;
    id.is_primary_key = true;
    id.is_auto_increment = true;

    let source = SourceSet::new(vec![TableSource::new("m_area", vec![id])]);

    let json = serde_json::to_string_pretty(&source).expect("serialize source");
    let expected = r#"{
  "source_version": "0.1",
  "tables": [
    {
      "name": "m_area",
      "fields": [
        {
          "name": "id",
          "kind": "integer",
          "is_nullable": false,
          "is_primary_key": true,
          "is_unique": false,
          "is_auto_increment": true
        }
      ]
    }
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn deserializes_with_flag_defaults() {
    let json = r#"{
      "source_version": "0.1",
      "tables": [
        {
          "name": "m_area",
          "fields": [
            { "name": "name", "kind": "text", "length": 50 }
          ]
        }
      ]
    }"#;

    let source: SourceSet = serde_json::from_str(json).expect("deserialize source");
    let field = source.tables[0].field("name").expect("field exists");

    assert_eq!(field.kind, FieldKind::Text);
    assert_eq!(field.length, Some(50));
    assert!(field.is_nullable);
    assert!(!field.is_primary_key);
    assert!(!field.is_unique);
    assert!(!field.is_auto_increment);
}

#[test]
fn datetime_kind_uses_flat_spelling() {
    let json = serde_json::to_string(&FieldKind::DateTime).expect("serialize kind");
    assert_eq!(json, "\"datetime\"");
}
