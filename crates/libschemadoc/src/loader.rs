use crate::descriptor::QueryDescriptor;
use crate::descriptor::TypeDescriptor;
use crate::descriptor::record::QueryRecord;
use crate::descriptor::record::TypeRecord;
use crate::error::DocBuildError;
use crate::sanitize::sanitize_tree;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, DocBuildError>;

/// Loads every query record stored under `dir_path`, keyed by query name.
pub fn load_queries<P: AsRef<Path>>(
    dir_path: P,
) -> Result<BTreeMap<String, QueryDescriptor>> {
    let records = load_records::<QueryRecord>(dir_path.as_ref())?;
    Ok(records.into_iter()
        .map(|record| {
            let descriptor = QueryDescriptor::from(record);
            (descriptor.name.clone(), descriptor)
        })
        .collect())
}

/// Loads every named-type record stored under `dir_path`, keyed by type
/// name.
pub fn load_types<P: AsRef<Path>>(
    dir_path: P,
) -> Result<BTreeMap<String, TypeDescriptor>> {
    let records = load_records::<TypeRecord>(dir_path.as_ref())?;
    Ok(records.into_iter()
        .map(|record| {
            let descriptor = TypeDescriptor::from(record);
            (descriptor.name().to_string(), descriptor)
        })
        .collect())
}

/// Parses every `.json` file directly under `dir_path` into a record,
/// sanitizing each raw value tree before deserialization.
///
/// Entries are visited in file-name order so the load result never depends
/// on incidental directory enumeration order. A file that cannot be read or
/// parsed is skipped with a warning; failure to enumerate the directory
/// itself is the only fatal path.
fn load_records<R: serde::de::DeserializeOwned>(
    dir_path: &Path,
) -> Result<Vec<R>> {
    let mut records = vec![];
    let walker = WalkDir::new(dir_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| DocBuildError::UnreadableRecordDir {
            dir_path: dir_path.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            log::trace!("Skipping non-record entry: {path:#?}.");
            continue;
        }

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Could not read {path:#?}: {err}");
                continue;
            },
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Could not parse {path:#?}: {err}");
                continue;
            },
        };

        match serde_json::from_value::<R>(sanitize_tree(value)) {
            Ok(record) => records.push(record),
            Err(err) => log::warn!("Could not parse {path:#?}: {err}"),
        }
    }

    Ok(records)
}
