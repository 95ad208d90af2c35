// ABOUTME: Shared test utilities for the consent server integration tests
// ABOUTME: Provides quiet logging setup and a standard test configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

//! Shared test utilities for `mcp_consent_server`

use mcp_consent_server::config::ServerConfig;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the test logging level; defaults to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test configuration for route tests
pub fn test_config() -> Arc<ServerConfig> {
    init_test_logging();
    Arc::new(ServerConfig {
        http_port: 0,
        app_name: "Test Consent App".into(),
        session_cookie_name: "consent_session".into(),
        default_login_email: Some("dev@example.com".into()),
        default_login_password: None,
    })
}
