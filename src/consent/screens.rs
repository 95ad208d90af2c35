// ABOUTME: Server-rendered HTML screens for the consent flow
// ABOUTME: Authorization consent, combined login, result confirmation, and error pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Consent screen rendering
//!
//! Templates are embedded at compile time with `include_str!` to avoid
//! blocking filesystem IO at runtime, and rendered by placeholder
//! substitution. Every injected value is HTML-escaped: text content with
//! text escaping, attribute values (the serialized request info, redirect
//! targets, prefilled credentials) with the stricter attribute escaping.
//!
//! The pending authorization request is embedded in the form as a hidden
//! `oauthReqInfo` field carrying its JSON serialization; the schema belongs
//! to the external authorization provider and is never interpreted here.

use crate::errors::{AppError, AppResult};
use serde_json::Value;

/// Logged-in consent screen, embedded at compile time
const AUTHORIZE_TEMPLATE: &str = include_str!("../../templates/consent_authorize.html");

/// Combined login-and-consent screen, embedded at compile time
const LOGIN_TEMPLATE: &str = include_str!("../../templates/consent_login.html");

/// Approval/rejection confirmation page, embedded at compile time
const RESULT_TEMPLATE: &str = include_str!("../../templates/consent_result.html");

/// Error page shown for malformed authorization submissions
const ERROR_TEMPLATE: &str = include_str!("../../templates/consent_error.html");

/// One requested permission rendered as a line on the consent screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDescription {
    /// Scope token, e.g. `profile:read`
    pub name: String,
    /// Human-readable explanation shown under the token
    pub description: String,
}

impl ScopeDescription {
    /// Create a scope description
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Parameters for the logged-in authorization screen
#[derive(Debug)]
pub struct AuthorizeScreenParams<'a> {
    /// Display name of the client requesting authorization
    pub client_name: &'a str,
    /// Permissions the client is requesting
    pub scopes: &'a [ScopeDescription],
    /// Opaque pending authorization request, forwarded through the form
    pub oauth_request_info: &'a Value,
    /// Email of the authenticated resource owner, carried as a hidden field
    pub email: &'a str,
}

/// Parameters for the logged-out login-and-authorize screen
#[derive(Debug)]
pub struct LoginScreenParams<'a> {
    /// Display name of the client requesting authorization
    pub client_name: &'a str,
    /// Permissions the client is requesting
    pub scopes: &'a [ScopeDescription],
    /// Opaque pending authorization request, forwarded through the form
    pub oauth_request_info: &'a Value,
    /// Prefilled email (dev/test convenience, empty in production)
    pub default_email: &'a str,
    /// Prefilled password (dev/test convenience, empty in production)
    pub default_password: &'a str,
}

/// Outcome shown on the confirmation page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    /// The authorization was approved
    Success,
    /// The authorization was rejected or failed
    Error,
}

/// Render the consent screen for an already-authenticated resource owner
///
/// # Errors
///
/// Returns an error if the pending authorization request cannot be
/// serialized for embedding in the form.
pub fn render_authorize_screen(params: &AuthorizeScreenParams<'_>) -> AppResult<String> {
    let request_info = serialize_request_info(params.oauth_request_info)?;

    Ok(AUTHORIZE_TEMPLATE
        .replace("{{TITLE}}", &escape_text(params.client_name))
        .replace("{{CLIENT_NAME}}", &escape_text(params.client_name))
        .replace("{{SCOPE_ITEMS}}", &render_scope_items(params.scopes))
        .replace("{{OAUTH_REQ_INFO}}", &escape_attribute(&request_info))
        .replace("{{EMAIL}}", &escape_attribute(params.email)))
}

/// Render the combined login-and-consent screen for an anonymous visitor
///
/// # Errors
///
/// Returns an error if the pending authorization request cannot be
/// serialized for embedding in the form.
pub fn render_login_screen(params: &LoginScreenParams<'_>) -> AppResult<String> {
    let request_info = serialize_request_info(params.oauth_request_info)?;

    Ok(LOGIN_TEMPLATE
        .replace("{{TITLE}}", &escape_text(params.client_name))
        .replace("{{CLIENT_NAME}}", &escape_text(params.client_name))
        .replace("{{SCOPE_ITEMS}}", &render_scope_items(params.scopes))
        .replace("{{OAUTH_REQ_INFO}}", &escape_attribute(&request_info))
        .replace("{{DEFAULT_EMAIL}}", &escape_attribute(params.default_email))
        .replace("{{DEFAULT_PASSWORD}}", &escape_attribute(params.default_password)))
}

/// Render the confirmation page shown after an approval decision
#[must_use]
pub fn render_result_page(message: &str, status: ResultStatus, redirect_url: &str) -> String {
    let (status_class, status_icon) = match status {
        ResultStatus::Success => ("success", "✓"),
        ResultStatus::Error => ("error", "✗"),
    };

    RESULT_TEMPLATE
        .replace("{{TITLE}}", &escape_text(message))
        .replace("{{STATUS_CLASS}}", status_class)
        .replace("{{STATUS_ICON}}", status_icon)
        .replace("{{MESSAGE}}", &escape_text(message))
        .replace("{{REDIRECT_URL}}", &escape_attribute(redirect_url))
}

/// Render the "authorization approved" confirmation page
#[must_use]
pub fn render_authorization_approved(redirect_url: &str) -> String {
    render_result_page("Authorization approved!", ResultStatus::Success, redirect_url)
}

/// Render the "authorization rejected" confirmation page
#[must_use]
pub fn render_authorization_rejected(redirect_url: &str) -> String {
    render_result_page("Authorization rejected.", ResultStatus::Error, redirect_url)
}

/// Render the error page shown for malformed authorization submissions
#[must_use]
pub fn render_error_page(error: &AppError, provider: &str) -> String {
    ERROR_TEMPLATE
        .replace("{{TITLE}}", "Authorization Error")
        .replace(
            "{{ERROR_TITLE}}",
            &format!("✗ {}", error.code.description()),
        )
        .replace("{{DESCRIPTION}}", &escape_text(&error.message))
        .replace("{{PROVIDER}}", &escape_text(provider))
}

/// Serialize the opaque request info for embedding in a hidden form field
fn serialize_request_info(info: &Value) -> AppResult<String> {
    serde_json::to_string(info)
        .map_err(|e| AppError::serialization("authorization request info").with_source(e))
}

/// Render the permission list as `<li>` fragments
fn render_scope_items(scopes: &[ScopeDescription]) -> String {
    scopes
        .iter()
        .map(|scope| {
            format!(
                "            <li><strong>{}</strong><span class=\"scope-description\">{}</span></li>",
                escape_text(&scope.name),
                escape_text(&scope.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape a value for HTML text content
fn escape_text(input: &str) -> String {
    html_escape::encode_text(input).into_owned()
}

/// Escape a value for a quoted HTML attribute
fn escape_attribute(input: &str) -> String {
    crate::utils::html::escape_html_attribute(input)
}
