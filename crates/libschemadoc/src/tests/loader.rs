use crate::descriptor::TypeDescriptor;
use crate::error::DocBuildError;
use crate::loader::load_queries;
use crate::loader::load_types;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn write_record(dir: &Path, file_name: &str, content: &str) -> Result<()> {
    std::fs::write(dir.join(file_name), content)?;
    Ok(())
}

#[test]
fn loads_query_records_with_wrapped_type_references() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_record(dir.path(), "userSearch.json", r#"{
        "name": "userSearch",
        "description": "Find users.",
        "args": [
            {
                "name": "first",
                "description": null,
                "defaultValue": "20",
                "type": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": {"kind": "SCALAR", "name": "Int"}
                }
            }
        ],
        "returnType": {
            "kind": "NON_NULL",
            "name": null,
            "ofType": {
                "kind": "LIST",
                "name": null,
                "ofType": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": {"kind": "OBJECT", "name": "User"}
                }
            }
        }
    }"#)?;

    let queries = load_queries(dir.path())?;
    let query = &queries["userSearch"];

    assert_eq!(query.return_type_signature, "[User!]!");
    assert_eq!(query.args[0].type_signature, "Int!");
    assert_eq!(query.args[0].default_value.as_deref(), Some("20"));
    Ok(())
}

#[test]
fn loads_records_storing_prefolded_signature_strings() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_record(dir.path(), "events.json", r#"{
        "name": "events",
        "args": [],
        "returnType": "[Event!]!"
    }"#)?;

    let queries = load_queries(dir.path())?;
    assert_eq!(queries["events"].return_type_signature, "[Event!]!");
    Ok(())
}

#[test]
fn absent_type_reference_degrades_to_unknown() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_record(dir.path(), "mystery.json", r#"{"name": "mystery"}"#)?;

    let queries = load_queries(dir.path())?;
    assert_eq!(queries["mystery"].return_type_signature, "Unknown");
    Ok(())
}

#[test]
fn malformed_record_is_skipped_and_the_run_continues() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_record(dir.path(), "broken.json", "{not json at all")?;
    write_record(dir.path(), "user.json", r#"{
        "kind": "OBJECT",
        "name": "User",
        "fields": [
            {"name": "id", "type": "ID!", "args": []}
        ]
    }"#)?;

    let types = load_types(dir.path())?;
    assert_eq!(types.len(), 1);
    assert!(matches!(types.get("User"), Some(TypeDescriptor::Object(_))));
    Ok(())
}

#[test]
fn non_json_entries_are_ignored() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_record(dir.path(), "notes.txt", "not a record")?;
    write_record(dir.path(), "color.json", r#"{
        "kind": "ENUM",
        "name": "Color",
        "values": [{"name": "RED", "description": null}]
    }"#)?;

    let types = load_types(dir.path())?;
    assert_eq!(types.len(), 1);
    Ok(())
}

#[test]
fn missing_directory_is_the_fatal_path() {
    let result = load_types("/nonexistent/descriptor/records");
    assert!(matches!(
        result,
        Err(DocBuildError::UnreadableRecordDir { .. }),
    ));
}

#[test]
fn sanitization_happens_before_deserialization() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_record(dir.path(), "event.json", r#"{
        "kind": "OBJECT",
        "name": "Event",
        "description": "See https://x.test\nfor details",
        "fields": []
    }"#)?;

    let types = load_types(dir.path())?;
    let description = types["Event"].description().unwrap();
    assert!(description.contains(
        "<a href=\"https://x.test\" target=\"_blank\">https://x.test</a>",
    ));
    assert!(description.contains("<br>"));
    assert!(!description.contains('\n'));
    Ok(())
}

#[test]
fn enum_records_accept_both_wire_spellings() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_record(dir.path(), "color.json", r#"{
        "kind": "ENUM",
        "name": "Color",
        "values": [{"name": "RED"}]
    }"#)?;
    write_record(dir.path(), "shape.json", r#"{
        "kind": "ENUM",
        "name": "Shape",
        "enumValues": [{"name": "CIRCLE"}]
    }"#)?;

    let types = load_types(dir.path())?;
    for name in ["Color", "Shape"] {
        match &types[name] {
            TypeDescriptor::Enum(enum_type) =>
                assert_eq!(enum_type.values.len(), 1),
            other => panic!("expected an enum, got: {other:#?}"),
        }
    }
    Ok(())
}

#[test]
fn descriptors_are_keyed_by_declared_name() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_record(dir.path(), "0001_whatever.json", r#"{
        "kind": "SCALAR",
        "name": "DateTime"
    }"#)?;

    let types = load_types(dir.path())?;
    assert!(types.contains_key("DateTime"));
    Ok(())
}
