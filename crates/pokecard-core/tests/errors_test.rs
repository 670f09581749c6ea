use pokecard_core::errors::*;

#[test]
fn subsystem_errors_convert_into_top_level() {
    let err: PokecardError = StorageError::NotFound {
        category: "pokemon".to_string(),
        key: "1".to_string(),
    }
    .into();
    assert!(matches!(err, PokecardError::StorageError(_)));

    let err: PokecardError = CatalogError::Unavailable {
        reason: "offline".to_string(),
    }
    .into();
    assert!(matches!(err, PokecardError::CatalogError(_)));

    let err: PokecardError = ResolutionError::EmptyRoster { generation: 2 }.into();
    assert!(matches!(err, PokecardError::ResolutionError(_)));
}

#[test]
fn only_local_not_found_escalates() {
    let local: PokecardError = StorageError::NotFound {
        category: "pokemon".to_string(),
        key: "1".to_string(),
    }
    .into();
    assert!(local.is_not_found_locally());

    let sqlite: PokecardError = StorageError::SqliteError {
        message: "disk I/O error".to_string(),
    }
    .into();
    assert!(!sqlite.is_not_found_locally());

    let remote: PokecardError = CatalogError::NotFound {
        resource: "pokemon/99999".to_string(),
    }
    .into();
    assert!(!remote.is_not_found_locally());
}

#[test]
fn error_messages_name_the_failing_value() {
    let err = ResolutionError::OutOfRange { index: 100, len: 100 };
    assert!(err.to_string().contains("100"));

    let err = ResolutionError::EntityNotFound {
        name: "missingno".to_string(),
    };
    assert!(err.to_string().contains("missingno"));
}

#[test]
fn serde_errors_convert() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: PokecardError = parse.into();
    assert!(matches!(err, PokecardError::SerializationError(_)));
}
