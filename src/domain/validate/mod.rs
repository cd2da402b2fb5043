//! Declarative payload validation.
//!
//! A rule names a field, the message reported when it fails, and an optional
//! type predicate applied once the field is present. Checking a payload runs
//! every rule and returns the full violation list instead of stopping at the
//! first failure; the caller treats a non-empty list as one aggregate error.

use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A single failed field check, reported back to the client as-is.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

pub struct FieldRule {
    pub field: &'static str,
    pub message: &'static str,
    /// Applied when the field is present; `None` means presence alone passes.
    pub type_check: Option<fn(&JsonValue) -> bool>,
}

/// Rules for `POST /movies` payloads.
pub const MOVIE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        message: "Title of the movie is required",
        type_check: Some(non_empty_string),
    },
    FieldRule {
        field: "year",
        message: "Release year is required and must be an integer",
        type_check: Some(integer),
    },
    FieldRule {
        field: "type",
        message: "Type of movie is required",
        type_check: Some(non_empty_string),
    },
];

/// Rules for `POST /movies/:id/reviews` payloads.
pub const REVIEW_RULES: &[FieldRule] = &[
    FieldRule {
        field: "comment",
        message: "Please leave a comment",
        type_check: Some(non_empty_string),
    },
    FieldRule {
        field: "rate",
        message: "A numeric rate is required",
        type_check: Some(numeric),
    },
];

fn non_empty_string(v: &JsonValue) -> bool {
    v.as_str().map(|s| !s.trim().is_empty()).unwrap_or(false)
}

fn integer(v: &JsonValue) -> bool {
    v.as_i64().is_some()
}

fn numeric(v: &JsonValue) -> bool {
    v.is_number()
}

/// Runs every rule against the payload and collects all violations.
///
/// A missing or `null` field always violates its rule; a payload that is not
/// a JSON object violates every rule.
pub fn check(rules: &[FieldRule], payload: &JsonValue) -> Vec<Violation> {
    let mut violations = Vec::new();
    for rule in rules {
        let ok = match payload.get(rule.field) {
            None | Some(JsonValue::Null) => false,
            Some(v) => rule.type_check.map(|f| f(v)).unwrap_or(true),
        };
        if !ok {
            violations.push(Violation {
                field: rule.field.to_string(),
                message: rule.message.to_string(),
            });
        }
    }
    violations
}
