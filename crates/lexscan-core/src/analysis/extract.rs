use serde_json::Value;

use crate::generation::GenerationError;

/// Field carrying the generated text in provider responses.
const GENERATED_TEXT_FIELD: &str = "generated_text";

/// Pulls generated text out of a provider response.
///
/// Accepts two shapes:
/// - `[{"generated_text": "..."}, ...]` (first element only)
/// - `{"generated_text": "..."}`
///
/// An array whose first element is not an object is malformed. Any other
/// shape, and empty or non-string text, yields `Ok(None)`.
pub fn extract_generated_text(value: &Value) -> Result<Option<String>, GenerationError> {
    let record = match value {
        Value::Array(items) => match items.first() {
            None => return Ok(None),
            Some(first @ Value::Object(_)) => first,
            Some(other) => {
                return Err(GenerationError::MalformedJson(format!(
                    "expected an object as first array element, got {}",
                    other
                )))
            }
        },
        Value::Object(_) => value,
        _ => return Ok(None),
    };

    Ok(record
        .get(GENERATED_TEXT_FIELD)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string))
}
