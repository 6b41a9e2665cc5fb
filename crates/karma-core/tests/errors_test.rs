use karma_core::errors::*;

#[test]
fn storage_errors_convert_into_karma_error() {
    let err: KarmaError = StorageError::SqliteError {
        message: "disk I/O error".to_string(),
    }
    .into();
    assert!(matches!(err, KarmaError::Storage(_)));
    assert_eq!(err.to_string(), "storage error: SQLite error: disk I/O error");
}

#[test]
fn config_errors_name_the_field() {
    let err: KarmaError = ConfigError::ValidationFailed {
        field: "decay.interval_secs".to_string(),
        message: "must be greater than 0".to_string(),
    }
    .into();
    assert!(err.to_string().contains("decay.interval_secs"));
}

#[test]
fn malformed_tokens_carry_the_token() {
    let err = karma_core::Action::from_token("{}").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("malformed action token \"{}\""), "{msg}");
}

#[test]
fn result_alias_works_with_question_mark() {
    fn inner() -> KarmaResult<()> {
        Err(StorageError::MigrationFailed {
            version: 1,
            reason: "boom".to_string(),
        })?;
        Ok(())
    }
    assert!(matches!(inner(), Err(KarmaError::Storage(StorageError::MigrationFailed { version: 1, .. }))));
}
