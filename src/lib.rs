// ABOUTME: Main library entry point for the MCP consent server
// ABOUTME: Renders OAuth consent screens and parses approval form submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # MCP Consent Server
//!
//! Browser-facing screens for an OAuth-style consent flow on a remote MCP
//! server: the authorization consent page, the combined login-and-consent
//! page, and the approval/rejection confirmation pages, plus the parser for
//! the single form those screens submit.
//!
//! The actual OAuth machinery (token exchange, session validation, client
//! registration) lives in external collaborators. This crate only renders
//! what the resource owner sees and hands the submitted decision back to the
//! caller as structured data.
//!
//! ## Architecture
//!
//! - **Consent**: screen rendering and approval form parsing
//! - **Routes**: thin axum handlers wiring the screens to HTTP
//! - **Config**: environment-based server configuration
//! - **Errors**: unified error types with HTTP status mapping
//!
//! ## Example Usage
//!
//! ```rust
//! use mcp_consent_server::consent::form::{parse_approve_form, FormSubmission};
//!
//! let form = FormSubmission::from_text_pairs([
//!     ("action".to_owned(), "approve".to_owned()),
//!     ("oauthReqInfo".to_owned(), r#"{"clientId":"abc"}"#.to_owned()),
//! ]);
//! let approval = parse_approve_form(&form);
//! assert_eq!(approval.action, "approve");
//! assert!(approval.oauth_request_info.is_some());
//! ```

/// Environment-based server configuration
pub mod config;

/// Consent screen rendering and approval form parsing
pub mod consent;

/// Unified error handling with HTTP status mapping
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// `HTTP` routes for the consent flow
pub mod routes;

/// Shared utilities (HTML escaping)
pub mod utils;
