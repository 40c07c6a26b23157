//! Key-casing conversion between the wire format and the caller format.
//!
//! The GuildHub platform speaks snake_case JSON on the wire, while this SDK
//! exposes camelCase keys to callers (matching the platform's official
//! client libraries). This module provides the pure conversion functions
//! used by the transport layer:
//!
//! - [`keys_to_snake`] rewrites every object key in a JSON value to
//!   snake_case (applied to outbound request bodies)
//! - [`keys_to_camel`] rewrites every object key to camelCase (applied to
//!   inbound response bodies)
//!
//! Both functions are deep: they recurse through nested objects and arrays.
//! They never mutate their input and never touch scalar values; only
//! object keys are rewritten.
//!
//! # Convertibility
//!
//! A key is only rewritten when the conversion can be losslessly reversed.
//! Keys that do not fit the convertible shape (leading/trailing/doubled
//! underscores, digit-leading segments, non-ASCII, `@me`-style literals)
//! pass through unchanged. Keys that are fully lowercase with no separators
//! are idempotent under both directions.
//!
//! # Example
//!
//! ```rust
//! use guildhub_api::casing::{keys_to_camel, keys_to_snake};
//! use serde_json::json;
//!
//! let wire = json!({"user_id": "U1", "roles": [{"role_id": "R1"}]});
//! let api = keys_to_camel(&wire);
//! assert_eq!(api, json!({"userId": "U1", "roles": [{"roleId": "R1"}]}));
//! assert_eq!(keys_to_snake(&api), wire);
//! ```

use serde_json::Value;

/// Converts a snake_case key to camelCase.
///
/// Returns the key unchanged when it is not safely convertible (see the
/// module docs). A key with no underscores is returned as-is.
#[must_use]
pub fn snake_to_camel(key: &str) -> String {
    if !is_snake_convertible(key) {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    for (i, segment) in key.split('_').enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.extend(chars);
            }
        }
    }
    out
}

/// Converts a camelCase key to snake_case.
///
/// Returns the key unchanged when it is not safely convertible (see the
/// module docs). A fully-lowercase key is returned as-is.
#[must_use]
pub fn camel_to_snake(key: &str) -> String {
    if !is_camel_convertible(key) {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len() + 2);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Deeply rewrites every object key in `value` to snake_case.
///
/// Recurses into nested objects and arrays; scalar values (including
/// `null`) are cloned unchanged. The input is never mutated.
#[must_use]
pub fn keys_to_snake(value: &Value) -> Value {
    convert_keys(value, camel_to_snake)
}

/// Deeply rewrites every object key in `value` to camelCase.
///
/// Recurses into nested objects and arrays; scalar values (including
/// `null`) are cloned unchanged. The input is never mutated.
#[must_use]
pub fn keys_to_camel(value: &Value) -> Value {
    convert_keys(value, snake_to_camel)
}

/// A snake_case key is convertible when every `_`-separated segment starts
/// with a lowercase ASCII letter followed by lowercase letters or digits.
/// Empty segments (leading/trailing/doubled underscores) and digit-leading
/// segments would not round-trip, so they are left alone.
fn is_snake_convertible(key: &str) -> bool {
    !key.is_empty()
        && key.split('_').all(|segment| {
            segment
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_lowercase())
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// A camelCase key is convertible when it starts with a lowercase ASCII
/// letter and contains only ASCII alphanumerics.
fn is_camel_convertible(key: &str) -> bool {
    key.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && key.chars().all(|c| c.is_ascii_alphanumeric())
}

fn convert_keys(value: &Value, convert: fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (convert(key), convert_keys(val, convert)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| convert_keys(item, convert)).collect())
        }
        scalar => scalar.clone(),
    }
}
