// ABOUTME: Utility modules shared across the application
// ABOUTME: Currently HTML escaping helpers for server-rendered templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTML escaping utilities
pub mod html;
