//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let yahoo_error = YahooError::from(json_error);

    match yahoo_error {
        YahooError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let yahoo_error = YahooError::from(io_error);

    match yahoo_error {
        YahooError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_parse_int_error_conversion() {
    let parse_error = "not_a_number".parse::<u32>().unwrap_err();
    let yahoo_error = YahooError::from(parse_error);

    match yahoo_error {
        YahooError::InvalidLeagueId(_) => (),
        _ => panic!("Expected InvalidLeagueId error variant"),
    }
}

#[test]
fn test_auth_error_display() {
    let err = YahooError::Auth {
        message: "token endpoint returned 401".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Authorization failed: token endpoint returned 401"
    );
}

#[test]
fn test_api_error_display() {
    let err = YahooError::Api {
        status: 404,
        message: "Resource not found".to_string(),
    };
    assert_eq!(err.to_string(), "Yahoo API returned 404: Resource not found");
}

#[test]
fn test_parse_error_display() {
    let err = YahooError::Parse {
        message: "missing field: name.full".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Unexpected response shape: missing field: name.full"
    );
}

#[test]
fn test_missing_credential_display() {
    let err = YahooError::MissingCredential {
        var: "YAHOO_CLIENT_ID".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "YAHOO_CLIENT_ID environment variable not set"
    );
}

#[test]
fn test_missing_league_id_display() {
    let err = YahooError::MissingLeagueId {
        env_var: "YAHOO_FBB_LEAGUE_ID".to_string(),
    };
    assert!(err.to_string().contains("YAHOO_FBB_LEAGUE_ID"));
}

#[test]
fn test_invalid_stat_category_display() {
    let err = YahooError::InvalidStatCategory {
        category: "XYZ".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown stat category: XYZ");
}
