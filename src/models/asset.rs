// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Asset domain model: stable identity, display name, and binary content.

use std::fmt;

use uuid::Uuid;

use crate::utils::hash_bytes;

/// File name extensions classified as images on decode (case-insensitive).
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Stable, unique identifier assigned to an asset when it enters the model.
///
/// Minted exactly once (at archive decode or ingestion), retained verbatim
/// across renames and content edits, and never derived from the display
/// name. Two assets are the same asset iff their ids are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssetId(Uuid);

impl AssetId {
    pub(crate) fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The two disjoint asset namespaces of a bundle.
///
/// An attachment named `x.png` never collides with an image named `x.png`;
/// each namespace serializes under its own archive folder and resolves
/// references independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    Images,
    Attachments,
}

impl Namespace {
    /// Archive folder this namespace serializes under.
    pub fn dir(&self) -> &'static str {
        match self {
            Namespace::Images => "images",
            Namespace::Attachments => "attachments",
        }
    }

    /// Namespace-qualified path used for both export and reference
    /// resolution, e.g. `images/photo.png`.
    pub fn canonical_path(&self, name: &str) -> String {
        format!("{}/{}", self.dir(), name)
    }
}

/// A single image or attachment held in memory.
///
/// Fields are private so every mutation goes through the owning
/// [`crate::models::AssetStore`], which keeps the size and digest in step
/// with the content.
#[derive(Clone, Debug)]
pub struct Asset {
    id: AssetId,
    name: String,
    content: Vec<u8>,
    size: u64,
    mime: String,
    sha256: String,
}

impl Asset {
    /// Materialize a new asset with a freshly minted identity.
    ///
    /// The caller must pass an already-trimmed, non-empty name; the store
    /// validates user input before calling this.
    pub(crate) fn ingest(name: String, content: Vec<u8>) -> Self {
        let size = content.len() as u64;
        let mime = guess_mime(&name);
        let sha256 = hash_bytes(&content);
        Self {
            id: AssetId::mint(),
            name,
            content,
            size,
            mime,
            sha256,
        }
    }

    pub fn id(&self) -> AssetId {
        self.id
    }

    /// Mutable display name used for export paths and reference matching.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Byte size; always equal to `content().len()`.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// MIME type guessed from the display name.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Lowercase hex SHA-256 digest of the content.
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.mime = guess_mime(&name);
        self.name = name;
    }

    pub(crate) fn set_content(&mut self, content: Vec<u8>) {
        self.size = content.len() as u64;
        self.sha256 = hash_bytes(&content);
        self.content = content;
        self.assert_size_invariant();
    }

    /// Size must track content length after every mutation. A violation is
    /// a programming defect, fatal in debug builds.
    pub(crate) fn assert_size_invariant(&self) {
        debug_assert_eq!(
            self.size,
            self.content.len() as u64,
            "asset {} size out of step with content",
            self.id
        );
    }
}

/// Return true when the name ends in a recognized image extension.
pub fn is_image_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

fn guess_mime(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{Asset, AssetId, Namespace, is_image_name};

    #[test]
    fn canonical_path_is_namespace_qualified() {
        assert_eq!(
            Namespace::Images.canonical_path("cat.png"),
            "images/cat.png"
        );
        assert_eq!(
            Namespace::Attachments.canonical_path("notes.txt"),
            "attachments/notes.txt"
        );
    }

    // Classification is case-insensitive and restricted to the known set.
    #[test]
    fn image_classification_by_extension() {
        assert!(is_image_name("photo.PNG"));
        assert!(is_image_name("a.b.jpeg"));
        assert!(!is_image_name("notes.txt"));
        assert!(!is_image_name("archive.png.gz"));
        assert!(!is_image_name("noextension"));
    }

    #[test]
    fn ingest_records_size_mime_and_digest() {
        let asset = Asset::ingest("cat.png".into(), vec![1, 2, 3]);
        assert_eq!(asset.size(), 3);
        assert_eq!(asset.mime(), "image/png");
        assert_eq!(asset.sha256().len(), 64);
    }

    #[test]
    fn minted_ids_are_unique() {
        assert_ne!(AssetId::mint(), AssetId::mint());
    }

    // Renaming updates the MIME guess but never the identity.
    #[test]
    fn set_name_reguesses_mime() {
        let mut asset = Asset::ingest("cat.png".into(), Vec::new());
        let id = asset.id();
        asset.set_name("cat.gif".into());
        assert_eq!(asset.mime(), "image/gif");
        assert_eq!(asset.id(), id);
    }
}
