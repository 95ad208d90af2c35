// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, defaults, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! Configuration is environment-only: every setting has a sensible default
//! and can be overridden with an environment variable. There is no
//! configuration file.

use crate::errors::{AppError, AppResult};
use std::env;

/// Default HTTP port for the consent server
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default client display name shown on consent screens
const DEFAULT_APP_NAME: &str = "MCP Remote Auth Demo";

/// Default session cookie checked by the authorize route
const DEFAULT_SESSION_COOKIE: &str = "consent_session";

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port to bind
    pub http_port: u16,
    /// Display name of the application requesting authorization
    pub app_name: String,
    /// Name of the session cookie whose presence selects the logged-in screen
    pub session_cookie_name: String,
    /// Default email prefilled on the login screen (dev/test only)
    pub default_login_email: Option<String>,
    /// Default password prefilled on the login screen (dev/test only)
    pub default_login_password: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            app_name: DEFAULT_APP_NAME.into(),
            session_cookie_name: DEFAULT_SESSION_COOKIE.into(),
            default_login_email: None,
            default_login_password: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse (e.g. a
    /// non-numeric `HTTP_PORT`).
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw.parse().map_err(|e| {
                AppError::config_invalid(format!("HTTP_PORT must be a port number: {e}"))
            })?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        // Note: in production the default credentials should never be set.
        // Set OAUTH_DEFAULT_EMAIL and OAUTH_DEFAULT_PASSWORD for dev convenience.
        Ok(Self {
            http_port,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.into()),
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.into()),
            default_login_email: env::var("OAUTH_DEFAULT_EMAIL").ok(),
            default_login_password: env::var("OAUTH_DEFAULT_PASSWORD").ok(),
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} app_name={:?} session_cookie={} dev_credentials={}",
            self.http_port,
            self.app_name,
            self.session_cookie_name,
            self.default_login_email.is_some()
        )
    }
}
