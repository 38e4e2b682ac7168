//! HTTP handlers

pub mod categories;
pub mod questions;
pub mod quizzes;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Parse an integer path segment. Anything else is not a known resource.
pub(crate) fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::not_found())
}

/// Decode a JSON request body. An empty body, `null` or `{}` counts as
/// missing and is reported with `missing_message`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8], missing_message: &str) -> Result<T> {
    let missing = || ApiError::BadRequest(missing_message.to_string());

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(missing());
    }

    let value: serde_json::Value = serde_json::from_slice(body).map_err(|_| missing())?;
    match &value {
        serde_json::Value::Null => return Err(missing()),
        serde_json::Value::Object(map) if map.is_empty() => return Err(missing()),
        _ => {}
    }

    serde_json::from_value(value).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Fallback for known routes hit with the wrong method
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::QuizRequest;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("14").unwrap(), 14);
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_parse_body_missing() {
        let bodies: [&[u8]; 5] = [b"", b"   ", b"null", b"{}", b"not json"];
        for body in bodies {
            let result: Result<QuizRequest> = parse_body(body, "missing");
            match result {
                Err(ApiError::BadRequest(message)) => assert_eq!(message, "missing"),
                other => panic!("expected bad request, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_body_wrong_shape() {
        let result: Result<QuizRequest> = parse_body(br#"{"previous_questions": "x"}"#, "missing");
        assert!(matches!(result, Err(ApiError::BadRequest(m)) if m != "missing"));
    }

    #[test]
    fn test_parse_body_ok() {
        let request: QuizRequest =
            parse_body(br#"{"previous_questions": [1, 2]}"#, "missing").unwrap();
        assert_eq!(request.seen().len(), 2);
    }
}
