// ABOUTME: Route module organization for the consent server HTTP endpoints
// ABOUTME: Thin handlers that wire the consent screens and form parser to axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the consent server
//!
//! Each module contains only route definitions and thin handler functions
//! that delegate to the rendering and parsing layers.

/// Consent flow routes: authorize screen and approval submission
pub mod consent;
/// Health check route
pub mod health;

/// Consent route handlers
pub use consent::ConsentRoutes;
/// Health route handlers
pub use health::HealthRoutes;
