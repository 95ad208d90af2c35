// ABOUTME: HTTP route handlers for the consent flow
// ABOUTME: Renders the authorize screens and processes the approval form submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Consent flow routes
//!
//! `GET /authorize` shows the consent screen for a pending authorization
//! request whose parameters arrive in the query string (supplied upstream by
//! the external authorization provider). A present session cookie selects
//! the logged-in screen; session *validation* belongs to the external auth
//! collaborator, only presence is checked here.
//!
//! `POST /approve` is the caller side of the form contract: it decodes the
//! submission, branches on the owner's `action`, and treats an absent
//! request info as its own error condition, answering 400 with the error
//! page.

use crate::{
    config::ServerConfig,
    consent::{
        form::{actions, parse_approve_form, FormSubmission},
        screens::{self, AuthorizeScreenParams, LoginScreenParams, ScopeDescription},
    },
    errors::AppError,
};
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use http::{header, HeaderMap, StatusCode};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Consent route handlers
pub struct ConsentRoutes;

impl ConsentRoutes {
    /// Create the consent flow routes
    #[must_use]
    pub fn routes(config: Arc<ServerConfig>) -> Router {
        Router::new()
            .route("/authorize", get(handle_authorize))
            .route("/approve", post(handle_approve))
            .with_state(config)
    }
}

/// Handle the authorization screen (GET /authorize)
async fn handle_authorize(
    State(config): State<Arc<ServerConfig>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let request_info = request_info_from_params(&params);
    let scopes = scopes_from_params(&params);
    let client_name = params
        .get("client_name")
        .or_else(|| params.get("client_id"))
        .map_or(config.app_name.as_str(), String::as_str);

    let session = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| extract_session_token(cookies, &config.session_cookie_name));

    let rendered = if session.is_some() {
        tracing::debug!(client = %client_name, "rendering logged-in consent screen");
        screens::render_authorize_screen(&AuthorizeScreenParams {
            client_name,
            scopes: &scopes,
            oauth_request_info: &request_info,
            email: config.default_login_email.as_deref().unwrap_or(""),
        })
    } else {
        tracing::debug!(client = %client_name, "no session cookie, rendering login consent screen");
        screens::render_login_screen(&LoginScreenParams {
            client_name,
            scopes: &scopes,
            oauth_request_info: &request_info,
            default_email: config.default_login_email.as_deref().unwrap_or(""),
            default_password: config.default_login_password.as_deref().unwrap_or(""),
        })
    };

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            tracing::error!("failed to render consent screen: {error}");
            error_response(&error, &config)
        }
    }
}

/// Handle the approval form submission (POST /approve)
async fn handle_approve(
    State(config): State<Arc<ServerConfig>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let submission = FormSubmission::from_text_pairs(form);
    let approval = parse_approve_form(&submission);

    let Some(request_info) = approval.oauth_request_info else {
        tracing::warn!(
            action = %approval.action,
            "approval submitted without a decodable authorization request"
        );
        let error = AppError::invalid_input(
            "The authorization request attached to this form is missing or malformed. \
             Restart the flow from the application that sent you here.",
        );
        return error_response(&error, &config);
    };

    // The request info is opaque except for the redirect target the
    // confirmation page sends the owner back to.
    let redirect_url = request_info
        .get("redirect_uri")
        .and_then(Value::as_str)
        .unwrap_or("/")
        .to_owned();

    match approval.action.as_str() {
        actions::APPROVE | actions::LOGIN_APPROVE => {
            if approval.action == actions::LOGIN_APPROVE {
                tracing::info!(email = %approval.email, "owner logged in and approved the request");
            } else {
                tracing::info!("owner approved the request");
            }
            Html(screens::render_authorization_approved(&redirect_url)).into_response()
        }
        other => {
            tracing::info!(action = %other, "owner rejected the request");
            Html(screens::render_authorization_rejected(&redirect_url)).into_response()
        }
    }
}

/// Assemble the opaque request info the external provider attached to the
/// authorize URL. The query parameters pass through untyped.
fn request_info_from_params(params: &HashMap<String, String>) -> Value {
    let object: Map<String, Value> = params
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    Value::Object(object)
}

/// Derive the permission list from the space-separated `scope` parameter
fn scopes_from_params(params: &HashMap<String, String>) -> Vec<ScopeDescription> {
    params
        .get("scope")
        .map(|raw| {
            raw.split_whitespace()
                .map(|name| ScopeDescription::new(name, describe_scope(name)))
                .collect()
        })
        .unwrap_or_default()
}

/// Human-readable description for a scope token
fn describe_scope(name: &str) -> String {
    match name.split_once(':') {
        Some((resource, "read")) => format!("Read your {resource} data"),
        Some((resource, "write")) => format!("Modify your {resource} data"),
        _ => format!("Use the {name} permission"),
    }
}

/// Extract the session token from a Cookie header
fn extract_session_token(cookie_header: &str, cookie_name: &str) -> Option<String> {
    let prefix = format!("{cookie_name}=");
    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(token) = cookie.strip_prefix(prefix.as_str()) {
            return Some(token.to_owned());
        }
    }
    None
}

/// Map an application error to an HTML error response
fn error_response(error: &AppError, config: &ServerConfig) -> Response {
    let status = StatusCode::from_u16(error.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let html = screens::render_error_page(error, &config.app_name);
    (status, Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_session_token_finds_named_cookie() {
        let header = "other=1; consent_session=abc123; theme=dark";
        assert_eq!(
            extract_session_token(header, "consent_session"),
            Some("abc123".to_owned())
        );
    }

    #[test]
    fn test_extract_session_token_missing() {
        assert_eq!(extract_session_token("other=1", "consent_session"), None);
    }

    #[test]
    fn test_describe_scope_variants() {
        assert_eq!(describe_scope("profile:read"), "Read your profile data");
        assert_eq!(describe_scope("notes:write"), "Modify your notes data");
        assert_eq!(describe_scope("offline"), "Use the offline permission");
    }
}
