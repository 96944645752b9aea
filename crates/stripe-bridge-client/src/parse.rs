//! Response field extraction.

use serde_json::Value;
use stripe_bridge_core::{SessionError, Step};

/// Extract a top-level string field from a successful JSON body.
///
/// # Errors
///
/// Returns [`SessionError::MalformedResponse`] if the body is not JSON, or the
/// field is absent or not a string.
pub fn extract_field(body: &str, field: &str, step: Step) -> Result<String, SessionError> {
    let value: Value = serde_json::from_str(body).map_err(|e| SessionError::MalformedResponse {
        step,
        reason: format!("invalid JSON: {e}"),
    })?;

    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SessionError::MalformedResponse {
            step,
            reason: format!("field `{field}` is not a string"),
        }),
        None => Err(SessionError::MalformedResponse {
            step,
            reason: format!("missing field `{field}`"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id() {
        let body = r#"{"id":"prod_1","object":"product","name":"PayProduct"}"#;
        assert_eq!(extract_field(body, "id", Step::Product).unwrap(), "prod_1");
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = extract_field(r#"{"id":"cs_1"}"#, "url", Step::PaymentLink).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to create payment link: missing field `url`"
        );
    }

    #[test]
    fn null_field_is_malformed() {
        let err = extract_field(r#"{"url":null}"#, "url", Step::SubscriptionLink).unwrap_err();
        assert!(matches!(
            err,
            SessionError::MalformedResponse {
                step: Step::SubscriptionLink,
                ..
            }
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = extract_field("<html>oops</html>", "id", Step::Price).unwrap_err();
        match err {
            SessionError::MalformedResponse { step, reason } => {
                assert_eq!(step, Step::Price);
                assert!(reason.starts_with("invalid JSON"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nested_field_is_not_matched() {
        let err = extract_field(r#"{"data":{"id":"x"}}"#, "id", Step::Product).unwrap_err();
        assert!(matches!(err, SessionError::MalformedResponse { .. }));
    }
}
