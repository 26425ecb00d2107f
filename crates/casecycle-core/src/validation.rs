//! Validation gateway for candidate opportunity records.
//!
//! Accepts free-form text (typically pasted JSON) and either produces a
//! normalized [`NewOpportunity`] or a list of human-readable reasons. This is
//! a pure function: no I/O, deterministic, fully unit-testable in isolation.

use crate::opportunity::NewOpportunity;
use serde_json::{Map, Value};

/// Required fields, in the order reasons are reported.
const REQUIRED_FIELDS: [&str; 7] = [
    "title",
    "market_description",
    "tam_estimate",
    "growth_rate",
    "user_id",
    "consumer_insight",
    "hypothesis",
];

/// Subset of [`REQUIRED_FIELDS`] that must coerce to finite numbers.
const NUMERIC_FIELDS: [&str; 3] = ["tam_estimate", "growth_rate", "user_id"];

/// Outcome of validating a candidate record.
///
/// Transient: produced and consumed within a single submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// All checks passed; numeric fields are coerced, the rest pass through.
    Valid(NewOpportunity),
    /// At least one check failed; reasons are user-facing strings.
    Invalid(Vec<String>),
}

impl ValidationOutcome {
    /// Returns true if the candidate passed every check.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Validates and normalizes a candidate opportunity from raw text input.
///
/// Checks run in a fixed order and short-circuit:
///
/// 1. The input must parse as a JSON object; anything else yields
///    `Invalid(["Invalid JSON format"])` immediately.
/// 2. All required fields must be present; missing ones are reported together
///    as `"Missing fields: a, b"`, taking precedence over numeric checks.
/// 3. Each numeric field must coerce to a finite number; the first failure
///    yields `"<field> must be a number"` and stops further checks.
pub fn validate_opportunity(raw: &str) -> ValidationOutcome {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return ValidationOutcome::Invalid(vec!["Invalid JSON format".to_string()]),
    };

    let object = match parsed.as_object() {
        Some(object) => object,
        None => return ValidationOutcome::Invalid(vec!["Invalid JSON format".to_string()]),
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !object.contains_key(**field))
        .copied()
        .collect();
    if !missing.is_empty() {
        return ValidationOutcome::Invalid(vec![format!(
            "Missing fields: {}",
            missing.join(", ")
        )]);
    }

    // Fail-fast: report only the first numeric field that does not coerce.
    let mut numbers = [0f64; NUMERIC_FIELDS.len()];
    for (slot, field) in numbers.iter_mut().zip(NUMERIC_FIELDS) {
        match coerce_number(&object[field]) {
            Some(value) => *slot = value,
            None => {
                return ValidationOutcome::Invalid(vec![format!("{} must be a number", field)])
            }
        }
    }

    let [tam_estimate, growth_rate, user_id] = numbers;
    // user_id is the service's integer primary key; a fractional value is
    // reported with the same reason as a non-numeric one.
    if user_id.fract() != 0.0 {
        return ValidationOutcome::Invalid(vec!["user_id must be a number".to_string()]);
    }

    ValidationOutcome::Valid(NewOpportunity {
        title: text_value(object, "title"),
        market_description: text_value(object, "market_description"),
        tam_estimate,
        growth_rate,
        consumer_insight: text_value(object, "consumer_insight"),
        hypothesis: text_value(object, "hypothesis"),
        user_id: user_id as i64,
    })
}

/// Coerces a JSON value to a finite number, or `None` if it cannot be.
///
/// JSON numbers pass through; strings holding a number parse. Booleans,
/// null, arrays, and objects are not numbers.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Text fields pass through unchanged; a non-string scalar keeps its JSON
/// rendering rather than being rejected.
fn text_value(object: &Map<String, Value>, field: &str) -> String {
    match &object[field] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
