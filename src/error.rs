// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Error types for bundle decoding, encoding, and asset mutation.

use thiserror::Error;

/// Errors surfaced by the bundle codec and asset store.
///
/// Resolution misses are deliberately *not* represented here: a markdown
/// reference that matches no asset is a normal, reportable outcome and is
/// returned as a [`crate::logic::resolver::Resolution::NotFound`] value.
#[derive(Error, Debug)]
pub enum BundleError {
    /// The byte stream is not a valid archive container. Decoding is
    /// all-or-nothing; no partial bundle is returned.
    #[error("corrupt archive: {reason}")]
    CorruptArchive { reason: String },

    /// A display name was empty (or whitespace-only) after trimming.
    /// The asset keeps its prior name.
    #[error("invalid asset name: {0:?}")]
    InvalidName(String),

    /// The archive writer failed while serializing a bundle. Does not
    /// occur for structurally valid bundles under normal conditions.
    #[error("failed to write archive: {0}")]
    Archive(String),
}
