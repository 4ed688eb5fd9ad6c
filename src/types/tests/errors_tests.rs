use super::*;
use sqlx::Error as SqlxError;

#[test]
fn test_command_error_from_sqlx() {
    let cmd_err = CommandError::from(SqlxError::RowNotFound);

    match cmd_err {
        CommandError::Database(msg) => {
            assert!(msg.contains("no rows returned"));
        }
        _ => panic!("Expected CommandError::Database"),
    }
}

#[test]
fn test_command_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing root");
    let cmd_err = CommandError::from(io_err);

    assert!(matches!(cmd_err, CommandError::Io(ref msg) if msg.contains("missing root")));
}

#[test]
fn test_command_error_from_bad_json_is_config() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let cmd_err = CommandError::from(json_err);

    assert!(matches!(cmd_err, CommandError::Config(_)));
}

#[test]
fn test_command_error_serialization() {
    let err = CommandError::NotFound("member m-42".to_string());

    // CommandError serializes as just its Display string
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, "\"Not found: member m-42\"");
}
