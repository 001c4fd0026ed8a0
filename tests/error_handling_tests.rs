//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors carry stable codes for programmatic handling
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows callers to handle specific cases

use civic::prelude::*;

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_config_error_codes() {
        let cases: Vec<(ConfigError, &str)> = vec![
            (
                ConfigError::UnknownView {
                    name: "parks".to_string(),
                },
                "UNKNOWN_VIEW",
            ),
            (
                ConfigError::InvalidView {
                    view: "issues".to_string(),
                    message: "page_size must be at least 1".to_string(),
                },
                "INVALID_VIEW",
            ),
            (
                ConfigError::Io {
                    path: "console.yaml".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                },
                "CONFIG_IO_ERROR",
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.error_code(), code);
            assert_eq!(CivicError::from(err).error_code(), code);
        }
    }

    #[test]
    fn test_session_error_codes() {
        let storage = SessionError::Storage {
            message: "poisoned".to_string(),
        };
        assert_eq!(storage.error_code(), "SESSION_STORAGE_ERROR");

        let io = SessionError::from(std::io::Error::other("disk full"));
        assert_eq!(io.error_code(), "SESSION_IO_ERROR");
    }

    #[test]
    fn test_validation_error_codes() {
        assert_eq!(
            ValidationError::Required {
                field: "email".to_string()
            }
            .error_code(),
            "FIELD_REQUIRED"
        );
        assert_eq!(
            ValidationError::FieldErrors(vec![]).error_code(),
            "VALIDATION_FAILED"
        );
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_error_response_has_code_and_message() {
        let err = CivicError::Config(ConfigError::UnknownView {
            name: "parks".to_string(),
        });
        let response = err.to_response();

        assert_eq!(response.code, "UNKNOWN_VIEW");
        assert_eq!(response.message, "Unknown view: parks");
    }

    #[test]
    fn test_error_response_serializes() {
        let err = CivicError::from(ValidationError::Required {
            field: "email".to_string(),
        });
        let json = serde_json::to_value(err.to_response()).expect("serialize");

        assert_eq!(json["code"], "FIELD_REQUIRED");
        assert_eq!(json["message"], "Field 'email' is required");
    }

    #[test]
    fn test_validation_errors_list_every_field() {
        let err = ValidationError::FieldErrors(vec![
            "Field 'email' is not a valid email address".to_string(),
            "Field 'phone' is not a valid mobile number".to_string(),
        ]);
        let message = CivicError::from(err).to_string();

        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("email"));
        assert!(message.contains("phone"));
    }
}

// =============================================================================
// Error Conversion Tests
// =============================================================================

mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_yaml_error_converts_to_config_error() {
        let yaml_err = serde_yaml::from_str::<ConsoleConfig>("views: 12").unwrap_err();
        let err: CivicError = ConfigError::from(yaml_err).into();
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }

    #[test]
    fn test_serde_json_error_converts_to_session_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CivicError = SessionError::from(json_err).into();
        assert_eq!(err.error_code(), "SESSION_SERIALIZATION_ERROR");
    }

    #[test]
    fn test_errors_convert_to_anyhow() {
        fn load() -> anyhow::Result<ConsoleConfig> {
            Ok(ConsoleConfig::from_yaml_file("/nonexistent/console.yaml")?)
        }

        let err = load().unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().expect("typed error survives");
        assert_eq!(config_err.error_code(), "CONFIG_IO_ERROR");
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[test]
    fn test_can_match_unknown_view() {
        let config = ConsoleConfig::default_config();

        match config.view("sla_extensions") {
            Err(ConfigError::UnknownView { name }) => assert_eq!(name, "sla_extensions"),
            other => panic!("expected UnknownView, got {:?}", other.map(|v| &v.name)),
        }
    }

    #[test]
    fn test_can_match_officer_form_errors() {
        let form = OfficerForm {
            full_name: String::new(),
            email: "rajesh@jharkhand.gov.in".to_string(),
            phone: "9876543211".to_string(),
            officer_code: "OFF-001".to_string(),
            department: "Transport".to_string(),
            role_title: "JE".to_string(),
            status: OfficerStatus::Active,
        };

        match form.validate() {
            Err(ValidationError::FieldErrors(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("fullName"));
                assert!(errors[1].contains("department"));
            }
            other => panic!("expected FieldErrors, got {:?}", other),
        }
    }
}
