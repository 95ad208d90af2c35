// ABOUTME: Tests for approval form body parsing
// ABOUTME: Validates the never-fail contract, pass-through of text fields, and the absent marker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Tests for approval form parsing
//!
//! This test suite validates:
//! 1. Valid request info round-trips through the parser exactly
//! 2. Malformed or missing request info maps to the absent marker without failing
//! 3. Text fields pass through unchanged, including empty strings
//! 4. Binary attachments coerce to empty text / the absent marker

mod common;

use bytes::Bytes;
use mcp_consent_server::consent::form::{
    parse_approve_form, FormSubmission, FormValue, UploadedFile,
};
use serde_json::{json, Value};
use std::collections::HashMap;

fn text_submission(pairs: &[(&str, &str)]) -> FormSubmission {
    FormSubmission::from_text_pairs(
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned())),
    )
}

/// Scenario: approve with a valid serialized request info
#[test]
fn test_approve_with_valid_request_info() {
    common::init_test_logging();

    let form = text_submission(&[
        ("action", "approve"),
        ("email", "user@example.com"),
        ("password", ""),
        ("oauthReqInfo", r#"{"clientId":"abc","scopes":["read"]}"#),
    ]);

    let approval = parse_approve_form(&form);

    assert_eq!(approval.action, "approve");
    assert_eq!(approval.email, "user@example.com");
    assert_eq!(approval.password, "");
    assert_eq!(
        approval.oauth_request_info,
        Some(json!({"clientId": "abc", "scopes": ["read"]}))
    );
}

/// Scenario: reject with a malformed request info payload
#[test]
fn test_reject_with_malformed_request_info() {
    common::init_test_logging();

    let form = text_submission(&[
        ("action", "reject"),
        ("email", ""),
        ("password", ""),
        ("oauthReqInfo", "not-valid-json"),
    ]);

    let approval = parse_approve_form(&form);

    assert_eq!(approval.action, "reject");
    assert_eq!(approval.email, "");
    assert_eq!(approval.password, "");
    assert_eq!(approval.oauth_request_info, None);
}

/// Scenario: the request info field is missing entirely
#[test]
fn test_missing_request_info_field() {
    let form = text_submission(&[
        ("action", "approve"),
        ("email", "user@example.com"),
        ("password", "hunter2"),
    ]);

    let approval = parse_approve_form(&form);

    assert_eq!(approval.oauth_request_info, None);
    assert_eq!(approval.action, "approve");
    assert_eq!(approval.password, "hunter2");
}

/// Truncated JSON is a decode failure, not a panic
#[test]
fn test_truncated_json_request_info() {
    let form = text_submission(&[("oauthReqInfo", "{not json")]);
    let approval = parse_approve_form(&form);
    assert_eq!(approval.oauth_request_info, None);
}

/// Round-trip law: any valid JSON document survives the parser exactly
#[test]
fn test_request_info_round_trip_law() {
    let documents = [
        json!({"clientId": "abc", "redirect_uri": "https://app.example/cb", "scopes": ["read", "write"]}),
        json!([1, 2, 3]),
        json!("just a string"),
        json!(42),
        json!({"nested": {"deeply": {"value": null}}}),
    ];

    for document in documents {
        let serialized = serde_json::to_string(&document).unwrap();
        let form = text_submission(&[("oauthReqInfo", &serialized)]);
        let approval = parse_approve_form(&form);
        assert_eq!(
            approval.oauth_request_info,
            Some(document),
            "document failed to round-trip: {serialized}"
        );
    }
}

/// JSON `null` is a successfully decoded value, distinct from the absent marker
#[test]
fn test_json_null_is_not_absent() {
    let form = text_submission(&[("oauthReqInfo", "null")]);
    let approval = parse_approve_form(&form);
    assert_eq!(approval.oauth_request_info, Some(Value::Null));
}

/// Pass-through law: action, email, and password are never altered or validated
#[test]
fn test_text_fields_pass_through_unchanged() {
    let form = text_submission(&[
        ("action", "definitely_not_a_known_action"),
        ("email", "not even an email"),
        ("password", "  spaces kept  "),
    ]);

    let approval = parse_approve_form(&form);

    assert_eq!(approval.action, "definitely_not_a_known_action");
    assert_eq!(approval.email, "not even an email");
    assert_eq!(approval.password, "  spaces kept  ");
}

/// Absent text fields coerce to the empty string
#[test]
fn test_absent_text_fields_are_empty() {
    let form = FormSubmission::new();
    let approval = parse_approve_form(&form);

    assert_eq!(approval.action, "");
    assert_eq!(approval.email, "");
    assert_eq!(approval.password, "");
    assert_eq!(approval.oauth_request_info, None);
}

/// Binary attachments coerce to empty text; a file-valued request info is absent
#[test]
fn test_binary_attachments_coerce_safely() {
    let attachment = || {
        FormValue::File(UploadedFile {
            file_name: Some("payload.bin".into()),
            content_type: Some("application/octet-stream".into()),
            data: Bytes::from_static(b"\xff\xfe\x00"),
        })
    };

    let mut form = FormSubmission::new();
    form.insert("action", attachment());
    form.insert("email", attachment());
    form.insert("password", attachment());
    form.insert("oauthReqInfo", attachment());

    let approval = parse_approve_form(&form);

    assert_eq!(approval.action, "");
    assert_eq!(approval.email, "");
    assert_eq!(approval.password, "");
    assert_eq!(approval.oauth_request_info, None);
}

/// A urlencoded body decoded by the framework feeds straight into the parser
#[test]
fn test_urlencoded_fixture_end_to_end() {
    let body = "action=login_approve&email=user%40example.com&password=secret\
                &oauthReqInfo=%7B%22clientId%22%3A%22abc%22%7D";
    let decoded: HashMap<String, String> = serde_urlencoded::from_str(body).unwrap();
    let form = FormSubmission::from_text_pairs(decoded);

    let approval = parse_approve_form(&form);

    assert_eq!(approval.action, "login_approve");
    assert_eq!(approval.email, "user@example.com");
    assert_eq!(approval.password, "secret");
    assert_eq!(approval.oauth_request_info, Some(json!({"clientId": "abc"})));
}

/// Later values for a repeated field name win, matching map semantics
#[test]
fn test_repeated_field_last_value_wins() {
    let mut form = FormSubmission::new();
    form.insert("action", FormValue::Text("approve".into()));
    form.insert("action", FormValue::Text("reject".into()));

    let approval = parse_approve_form(&form);
    assert_eq!(approval.action, "reject");
}
