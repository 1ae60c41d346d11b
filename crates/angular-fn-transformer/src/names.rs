//! Entity name derivation from file paths.

use crate::error::TransformError;
use crate::ENTITY_SUFFIX;
use std::path::Path;

/// Derives the synthesized class name for a file.
///
/// Given a path like `/src/app/my-counter.ts`, returns
/// `"MyCounterAnalogComponent"`. The name depends only on the path, never on
/// the file content.
///
/// Fails when the basename yields no identifier characters at all
/// (e.g. `123.ts` or a path with no basename).
pub fn entity_name(file_path: &str) -> Result<String, TransformError> {
    let basename = Path::new(file_path)
        .file_name()
        .and_then(|s| s.to_str())
        .and_then(|s| s.split('.').next())
        .unwrap_or("");

    let class_name = to_class_name(basename);
    if class_name.is_empty() {
        return Err(TransformError::MissingComponentName {
            path: file_path.to_string(),
        });
    }

    Ok(format!("{class_name}{ENTITY_SUFFIX}"))
}

/// Converts a hyphenated/underscored basename to UpperCamelCase.
///
/// `my-counter` -> `MyCounter`, `app_root` -> `AppRoot`. Leading digits are
/// stripped so the result is always a valid class-name prefix; an input with
/// nothing but digits and separators yields an empty string.
pub fn to_class_name(name: &str) -> String {
    capitalize_first(&to_property_name(name))
}

/// Converts to lowerCamelCase: separators drop out and upper-case the
/// following character, remaining non-alphanumerics are removed, leading
/// digits are stripped.
fn to_property_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        } else {
            capitalize_next = true;
        }
    }

    let result = result.trim_start_matches(|c: char| c.is_ascii_digit());
    let mut chars = result.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
