//! Flat, bracketed URL-encoded form encoding.
//!
//! Operations are serialized through serde (so `#[serde(rename)]` supplies
//! wire names) and the resulting tree is flattened into ordered key/value
//! pairs:
//!
//! | value                  | keys                                |
//! |------------------------|-------------------------------------|
//! | scalar field `f`       | `f`                                 |
//! | nested struct `g.f`    | `g[f]`                              |
//! | sequence `xs`          | `xs[]`, once per element, in order  |
//! | struct inside sequence | `xs[][f]`                           |
//! | `None` / null          | omitted                             |

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::FormError;

/// Flattens `value` into ordered form pairs.
///
/// # Errors
///
/// Returns [`FormError`] if the value cannot be serialized or is not a
/// struct or map at the top level.
pub fn form_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>, FormError> {
    let tree = serde_json::to_value(value)?;
    let fields = match tree {
        Value::Object(fields) => fields,
        other => {
            return Err(FormError::NotAnObject {
                kind: kind_of(&other),
            })
        }
    };

    let mut pairs = Vec::new();
    for (name, field) in fields {
        flatten(name, field, &mut pairs);
    }
    Ok(pairs)
}

/// Encodes `value` as an `application/x-www-form-urlencoded` body.
///
/// # Errors
///
/// Returns [`FormError`] under the same conditions as [`form_pairs`].
///
/// # Example
///
/// ```rust
/// use omise_api::encode_form;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Refund {
///     amount: u64,
///     metadata: Metadata,
///     tags: Vec<&'static str>,
/// }
///
/// #[derive(Serialize)]
/// struct Metadata {
///     order: &'static str,
/// }
///
/// let refund = Refund { amount: 100, metadata: Metadata { order: "o-1" }, tags: vec!["a", "b"] };
/// assert_eq!(
///     encode_form(&refund).unwrap(),
///     "amount=100&metadata%5Border%5D=o-1&tags%5B%5D=a&tags%5B%5D=b"
/// );
/// ```
pub fn encode_form<T: Serialize + ?Sized>(value: &T) -> Result<String, FormError> {
    let pairs = form_pairs(value)?;
    Ok(pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&"))
}

fn flatten(key: String, value: Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key, flag.to_string())),
        Value::Number(number) => pairs.push((key, number.to_string())),
        Value::String(text) => pairs.push((key, text)),
        Value::Array(items) => {
            let item_key = format!("{key}[]");
            for item in items {
                flatten(item_key.clone(), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                flatten(format!("{key}[{name}]"), field, pairs);
            }
        }
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
