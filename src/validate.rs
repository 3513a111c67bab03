//! Required-field validation hook.

use crate::record::Record;
use serde_json::Value;

/// A single required-field violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
}

/// Checks a record against an entity's required-field list.
///
/// Returns every violation in required-list order; callers that can only
/// report one error take the first. A field counts as missing when it is
/// absent or falsy, not merely when it is null: the upstream clients send
/// `""` and `0` to mean "not filled in".
pub fn validate_required(record: &Record, required: &[String]) -> Vec<FieldError> {
    required
        .iter()
        .filter(|field| !record.get(field).is_some_and(is_truthy))
        .map(|field| FieldError {
            field: field.clone(),
        })
        .collect()
}

/// JavaScript-style truthiness for JSON values.
///
/// Falsy: null, false, 0, "". Arrays and objects are always truthy, empty or
/// not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn required(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn truthiness_matches_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!("on")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn reports_all_violations_in_required_order() {
        let record: Record =
            serde_json::from_value(json!({"name": "", "status": null, "contact": "a@b"})).unwrap();
        let errors = validate_required(&record, &required(&["name", "specialty", "status"]));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "specialty", "status"]);
    }

    #[test]
    fn absent_and_falsy_fields_both_count_as_missing() {
        let record: Record = serde_json::from_value(json!({"age": 0})).unwrap();
        assert_eq!(
            validate_required(&record, &required(&["age"])),
            vec![FieldError {
                field: "age".to_string()
            }]
        );
        assert_eq!(
            validate_required(&record, &required(&["name"])),
            vec![FieldError {
                field: "name".to_string()
            }]
        );
    }

    #[test]
    fn complete_record_passes() {
        let record: Record =
            serde_json::from_value(json!({"name": "Carlos Almeida", "status": "on"})).unwrap();
        assert!(validate_required(&record, &required(&["name", "status"])).is_empty());
    }
}
