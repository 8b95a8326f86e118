//! Tests for error types

use figsync_core::Error;

#[test]
fn test_fetch_error() {
    let error = Error::fetch("https://api.figma.com/v1/files/abc", "HTTP 403 Forbidden");
    assert_eq!(
        error.to_string(),
        "Failed to fetch https://api.figma.com/v1/files/abc: HTTP 403 Forbidden"
    );
}

#[test]
fn test_not_found_error() {
    let error = Error::not_found("page", "05 - Icons");
    assert_eq!(
        error.to_string(),
        "No page named '05 - Icons' was found in the design document"
    );
}

#[test]
fn test_missing_asset_error() {
    let error = Error::missing_asset("12:34", "OuiIconLeft");
    assert_eq!(
        error.to_string(),
        "No export URL for image 12:34 -> OuiIconLeft"
    );
}

#[test]
fn test_empty_set_error() {
    let error = Error::empty_set("07 - Emojis");
    assert_eq!(error.to_string(), "No icon was found on page '07 - Emojis'");
}

#[test]
fn test_generation_error() {
    let error = Error::generation("OuiIconLeft", "unexpected end of stream");
    assert_eq!(
        error.to_string(),
        "Could not generate component OuiIconLeft: unexpected end of stream"
    );
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("missing FIGMA_TOKEN");
    assert_eq!(error.to_string(), "Configuration error: missing FIGMA_TOKEN");
}

#[test]
fn test_write_error_conversion() {
    use std::io;

    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let error = Error::write(io_error, "out/arrows/index.ts", "append");
    assert!(error.to_string().contains("append"));
    assert!(error.to_string().contains("out/arrows/index.ts"));
}
