//! Vanilla descriptor to launch profile derivation
//!
//! The vanilla document is treated as opaque JSON: only `id`, `mainClass`
//! and `libraries` are touched, every other field is carried over as is and
//! in its original position.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{
    Result,
    fs::read_failed,
    install::{descriptor_parse_failed, invalid_descriptor, vanilla_descriptor_not_found},
};

/// Read and parse the vanilla descriptor for `version`
pub fn read_vanilla(path: &Path, version: &str) -> Result<Value> {
    if !path.is_file() {
        return Err(vanilla_descriptor_not_found(path, version));
    }
    let content = fs::read_to_string(path).map_err(|e| read_failed(path, e))?;
    serde_json::from_str(&content).map_err(|e| descriptor_parse_failed(path, e))
}

/// Turn a vanilla descriptor into a profile.
///
/// `injected` entries are placed ahead of the original libraries, which keep
/// their order. Nothing is deduplicated. `source` is only used in errors.
pub fn derive_profile(
    mut document: Value,
    profile_name: &str,
    main_class: &str,
    injected: Vec<Value>,
    source: &Path,
) -> Result<Value> {
    let object = document
        .as_object_mut()
        .ok_or_else(|| invalid_descriptor(source, "top-level value is not an object"))?;

    // Take in place; removing would reorder keys
    let original = match object.get_mut("libraries").map(Value::take) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(invalid_descriptor(source, "`libraries` is not an array")),
    };

    let mut libraries = injected;
    libraries.extend(original);

    object.insert("id".to_string(), Value::String(profile_name.to_string()));
    object.insert(
        "mainClass".to_string(),
        Value::String(main_class.to_string()),
    );
    object.insert("libraries".to_string(), Value::Array(libraries));

    Ok(document)
}
