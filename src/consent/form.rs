// ABOUTME: Approval form body parsing for the consent flow
// ABOUTME: Extracts action, credentials, and the opaque authorization request info from a decoded submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Approval form parsing
//!
//! The consent screens submit a single form with four fields: `action`,
//! `email`, `password`, and `oauthReqInfo`. [`parse_approve_form`] turns a
//! decoded submission into a [`ParsedApproval`] and never fails: text fields
//! pass through unchanged (absent or file-valued fields coerce to the empty
//! string), and the request-info payload is best-effort decoded as JSON with
//! any failure swallowed into an absent value.
//!
//! Callers must treat an absent `oauth_request_info` as their own error
//! condition; this module only guarantees it never crashes on malformed
//! input.

use bytes::Bytes;
use serde_json::Value;
use std::collections::HashMap;

/// Form field names submitted by the consent screens
pub mod fields {
    /// The owner's decision: `approve`, `reject`, or `login_approve`
    pub const ACTION: &str = "action";
    /// Email of the (possibly logging-in) resource owner
    pub const EMAIL: &str = "email";
    /// Password, present only on the login variant
    pub const PASSWORD: &str = "password";
    /// JSON-serialized pending authorization request
    pub const OAUTH_REQ_INFO: &str = "oauthReqInfo";
}

/// Action tokens the consent screens submit
///
/// The parser passes any action through unvalidated; these constants exist
/// for callers branching on the decision.
pub mod actions {
    /// Approve as an already-authenticated owner
    pub const APPROVE: &str = "approve";
    /// Reject the authorization request
    pub const REJECT: &str = "reject";
    /// Log in and approve in one step
    pub const LOGIN_APPROVE: &str = "login_approve";
}

/// An uploaded binary attachment in a multipart submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Original file name, if the client sent one
    pub file_name: Option<String>,
    /// Declared content type, if the client sent one
    pub content_type: Option<String>,
    /// Raw file contents
    pub data: Bytes,
}

/// A single decoded form field value: text or an opaque binary attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text field
    Text(String),
    /// Binary attachment from a multipart submission
    File(UploadedFile),
}

/// A decoded form submission, as produced by the web framework layer
///
/// Field names map to text or file values. The submission is built once per
/// request and read-only from the parser's point of view.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    fields: HashMap<String, FormValue>,
}

impl FormSubmission {
    /// Create an empty submission
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field value, replacing any previous value for the name
    pub fn insert(&mut self, name: impl Into<String>, value: FormValue) {
        self.fields.insert(name.into(), value);
    }

    /// Look up a field by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields.get(name)
    }

    /// Build a submission from decoded urlencoded pairs
    pub fn from_text_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(name, value)| (name, FormValue::Text(value)))
                .collect(),
        }
    }
}

/// The parsed result of an approval form submission
///
/// Constructed once per inbound submission and immediately consumed by the
/// caller, which branches on `action` and forwards `oauth_request_info`
/// downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedApproval {
    /// The owner's decision token, passed through unvalidated
    pub action: String,
    /// Decoded authorization request info; `None` means decoding was
    /// attempted and failed, or the field was missing
    pub oauth_request_info: Option<Value>,
    /// Submitted email, empty when absent
    pub email: String,
    /// Submitted password, empty when absent
    pub password: String,
}

/// Parse an approval form submission
///
/// Always succeeds. `action`, `email`, and `password` pass through as text
/// (empty when absent or file-valued). `oauthReqInfo` is decoded as JSON
/// into an opaque [`Value`]; on any decode failure the result carries `None`
/// and the failure is not propagated.
#[must_use]
pub fn parse_approve_form(form: &FormSubmission) -> ParsedApproval {
    let action = text_field(form, fields::ACTION);
    let email = text_field(form, fields::EMAIL);
    let password = text_field(form, fields::PASSWORD);

    let oauth_request_info = match form.get(fields::OAUTH_REQ_INFO) {
        Some(FormValue::Text(raw)) => match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("discarding undecodable oauthReqInfo field: {e}");
                None
            }
        },
        Some(FormValue::File(_)) | None => None,
    };

    ParsedApproval {
        action,
        oauth_request_info,
        email,
        password,
    }
}

/// Coerce a field to text: empty string when absent or file-valued
fn text_field(form: &FormSubmission, name: &str) -> String {
    match form.get(name) {
        Some(FormValue::Text(value)) => value.clone(),
        Some(FormValue::File(_)) | None => String::new(),
    }
}
