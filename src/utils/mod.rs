// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Shared helper utilities.

pub mod hash;
pub mod sanitize_component;

/// Compute the SHA-256 hex digest of in-memory bytes.
pub use hash::hash_bytes;
/// Sanitize user-provided strings into filesystem-safe path components.
pub use sanitize_component::sanitize_component;
