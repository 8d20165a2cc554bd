use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::InvalidInput("test".into()), 64)]
#[case(AppError::Money("test".into()), 65)]
#[case(AppError::Codec("test".into()), 65)]
#[case(AppError::Internal("test".into()), 70)]
#[case(AppError::Config("test".into()), 78)]
fn test_app_error_exit_codes(#[case] error: AppError, #[case] expected: i32) {
    assert_eq!(error.exit_code(), expected);
}

#[rstest]
#[case(AppError::Config("test".into()), "CONFIG_ERROR")]
#[case(AppError::InvalidInput("test".into()), "INVALID_INPUT")]
#[case(AppError::Money("test".into()), "MONEY_ERROR")]
#[case(AppError::Codec("test".into()), "CODEC_ERROR")]
#[case(AppError::Internal("test".into()), "INTERNAL_ERROR")]
fn test_app_error_error_codes(#[case] error: AppError, #[case] expected: &str) {
    assert_eq!(error.error_code(), expected);
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        AppError::Config("missing file".into()).to_string(),
        "Configuration error: missing file"
    );
    assert_eq!(
        AppError::InvalidInput("bad amount".into()).to_string(),
        "Invalid input: bad amount"
    );
    assert_eq!(
        AppError::Money("currencies don't match".into()).to_string(),
        "Money error: currencies don't match"
    );
    assert_eq!(
        AppError::Codec("bad json".into()).to_string(),
        "Codec error: bad json"
    );
    assert_eq!(
        AppError::Internal("boom".into()).to_string(),
        "Internal error: boom"
    );
}

#[test]
fn test_app_error_from_config_error() {
    let err: AppError = config::ConfigError::NotFound("codec".into()).into();
    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(err.exit_code(), 78);
}
