//! Validation Utilities

use validator::ValidationErrors;

/// Flatten validation errors into a single "field: message" summary.
///
/// Fields are sorted so the summary is deterministic regardless of
/// HashMap iteration order.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for constraint '{}'", e.code));
                format!("{}: {}", field, message)
            })
        })
        .collect();

    parts.sort();

    if parts.is_empty() {
        "validation failed".into()
    } else {
        parts.join("; ")
    }
}
