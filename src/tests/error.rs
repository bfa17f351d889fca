// Unit Tests for API Error Shapes
//
// UNIT UNDER TEST: LegacyError, ProblemError, ApiError
//
// BUSINESS RESPONSIBILITY:
//   - Model the two error formats returned by the UpCloud API
//   - Deserialize from the JSON bodies the transport layer receives
//   - Expose status / code / type uniformly through ApiError
//
// TEST COVERAGE:
//   - Legacy envelope deserialization with status attached afterwards
//   - Problem body deserialization, with and without optional fields
//   - Accessors per shape
//   - Display output

use crate::codes;
use crate::error::{ApiError, InvalidParam, LegacyError, LegacyErrorBody, ProblemError};
use serde_json::json;

#[cfg(test)]
mod legacy_error_tests {
    use super::*;

    #[test]
    fn test_legacy_envelope_deserializes_and_takes_status() {
        // Test verifies the {"error": {...}} envelope maps to LegacyError

        // Arrange
        let body = json!({
            "error": {
                "error_code": "SERVER_NOT_FOUND",
                "error_message": "The server 00798b85 does not exist."
            }
        });

        // Act
        let body: LegacyErrorBody = serde_json::from_value(body).expect("valid legacy body");
        let err = body.into_error(404);

        // Assert
        assert_eq!(err.status, 404);
        assert_eq!(err.error_code, codes::SERVER_NOT_FOUND);
        assert_eq!(err.error_message, "The server 00798b85 does not exist.");
    }

    #[test]
    fn test_legacy_display_includes_status_and_code() {
        let err = LegacyError::new(409, codes::TAG_EXISTS, "Tag already exists");

        assert_eq!(err.to_string(), "API error 409 TAG_EXISTS: Tag already exists");
    }

    #[test]
    fn test_legacy_accessors() {
        let err = ApiError::from(LegacyError::new(409, codes::DB_EXISTS, "exists"));

        assert_eq!(err.status(), 409);
        assert_eq!(err.error_code(), Some(codes::DB_EXISTS));
        assert_eq!(err.problem_type(), None);
    }
}

#[cfg(test)]
mod problem_error_tests {
    use super::*;

    #[test]
    fn test_problem_body_deserializes() {
        // Arrange
        let body = json!({
            "type": "https://developers.upcloud.com/1.3/errors#ERROR_INVALID_REQUEST",
            "title": "Validation error.",
            "status": 400,
            "correlation_id": "01H5Z3Q4",
            "invalid_params": [
                { "name": "name", "reason": "Name must be unique." }
            ]
        });

        // Act
        let err: ProblemError = serde_json::from_value(body).expect("valid problem body");

        // Assert
        assert_eq!(err.status, 400);
        assert_eq!(err.fragment(), "ERROR_INVALID_REQUEST");
        assert_eq!(err.correlation_id.as_deref(), Some("01H5Z3Q4"));
        assert_eq!(
            err.invalid_params,
            vec![InvalidParam {
                name: "name".to_string(),
                reason: "Name must be unique.".to_string(),
            }]
        );
    }

    #[test]
    fn test_problem_body_without_type_defaults_to_empty() {
        // Test verifies a missing type yields no fragment rather than a failure

        let err: ProblemError =
            serde_json::from_value(json!({ "status": 400, "title": "Bad request" }))
                .expect("type is optional");

        assert_eq!(err.problem_type, "");
        assert_eq!(err.fragment(), "");
        assert!(err.invalid_params.is_empty());
    }

    #[test]
    fn test_problem_accessors() {
        let problem_type = "https://developers.upcloud.com/1.3/errors#ERROR_RESOURCE_NOT_FOUND";
        let err = ApiError::from(ProblemError::new(404, problem_type, "Not found"));

        assert_eq!(err.status(), 404);
        assert_eq!(err.error_code(), None);
        assert_eq!(err.problem_type(), Some(problem_type));
    }

    #[test]
    fn test_problem_display_is_transparent_through_api_error() {
        let err = ApiError::from(ProblemError::new(401, "", "Authentication failed"));

        assert_eq!(err.to_string(), "API problem 401: Authentication failed");
    }
}
