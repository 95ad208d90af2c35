// ABOUTME: Consent flow surface: screen rendering and approval form parsing
// ABOUTME: Everything the resource owner sees, and the decoding of what they submit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Approval form submission parsing
pub mod form;
/// Server-rendered consent screens
pub mod screens;

/// Parsed approval form result
pub use form::ParsedApproval;
/// A single decoded form field value
pub use form::FormValue;
/// Binary attachment variant of a form field
pub use form::UploadedFile;
/// Decoded form submission
pub use form::FormSubmission;

/// Consent screen parameters for the logged-in variant
pub use screens::AuthorizeScreenParams;
/// Consent screen parameters for the logged-out variant
pub use screens::LoginScreenParams;
/// One requested permission rendered on the consent screens
pub use screens::ScopeDescription;
