// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Bundle archive codec.
//!
//! Responsibilities:
//! - Decode a ZIP byte stream into a [`Bundle`] with freshly minted asset
//!   identities.
//! - Re-encode an edited bundle into a deterministic archive, re-foldering
//!   assets canonically under `images/` and `attachments/`.
//! - Provide file-path convenience wrappers for hosts that work with the
//!   filesystem directly.

use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zip::{CompressionMethod, ZipArchive, ZipWriter, write::FileOptions};

use crate::error::BundleError;
use crate::logic::naming::export_names;
use crate::models::{Bundle, Namespace, is_image_name};

/// Archive entry holding the readme text. Matched at the root only; a
/// nested `dir/README.md` decodes as a plain attachment.
pub const README_PATH: &str = "README.md";

/// Decode an archive byte stream into a bundle.
///
/// The entry at `README.md` becomes the readme text (empty when absent;
/// invalid UTF-8 decodes lossily). Every other non-directory entry is
/// classified by the extension of its base name: recognized image
/// extensions become image assets, everything else becomes an attachment.
/// Folder structure is discarded; assets are re-foldered canonically on
/// encode. The result is independent of container entry order.
///
/// # Errors
///
/// Returns [`BundleError::CorruptArchive`] when the container cannot be
/// parsed or an entry cannot be read. Decoding is all-or-nothing: no
/// partial bundle is returned.
pub fn decode(archive_bytes: &[u8]) -> Result<Bundle, BundleError> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes)).map_err(|err| {
        BundleError::CorruptArchive {
            reason: err.to_string(),
        }
    })?;

    let mut bundle = Bundle::new();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|err| BundleError::CorruptArchive {
                reason: format!("entry {index}: {err}"),
            })?;
        if entry.is_dir() {
            continue;
        }

        let path = entry.name().to_string();
        let mut content = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut content)
            .map_err(|err| BundleError::CorruptArchive {
                reason: format!("failed to read entry {path:?}: {err}"),
            })?;

        if path == README_PATH {
            bundle.readme = String::from_utf8_lossy(&content).into_owned();
            continue;
        }

        // Only the base name survives as the display name; a fallback
        // covers pathological entries whose final segment is empty or
        // whitespace-only, so decode never trips the name validation.
        let name = base_name(&path)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("asset-{}", index + 1));

        if is_image_name(&name) {
            log::debug!("decoded image entry {path:?} as {name:?}");
            bundle.images.insert(&name, content)?;
        } else {
            log::debug!("decoded attachment entry {path:?} as {name:?}");
            bundle.attachments.insert(&name, content)?;
        }
    }

    Ok(bundle)
}

/// Encode a bundle into archive bytes.
///
/// Writes `README.md`, then every image under `images/<resolvedName>` and
/// every attachment under `attachments/<resolvedName>`, in insertion
/// order. Resolved names come from the collision policy in
/// [`crate::logic::naming`], so encoding a structurally valid bundle
/// always produces pairwise-distinct paths.
///
/// # Errors
///
/// Returns [`BundleError::Archive`] when the underlying writer fails;
/// this does not occur for structurally valid bundles under normal
/// conditions.
pub fn encode(bundle: &Bundle) -> Result<Vec<u8>, BundleError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(README_PATH, options)
        .map_err(|err| write_error(README_PATH, err))?;
    zip.write_all(bundle.readme.as_bytes())
        .map_err(|err| write_error(README_PATH, err))?;

    for namespace in [Namespace::Images, Namespace::Attachments] {
        let store = bundle.store(namespace);
        if store.is_empty() {
            continue;
        }
        zip.add_directory(format!("{}/", namespace.dir()), options)
            .map_err(|err| write_error(namespace.dir(), err))?;

        let names = export_names(store.assets());
        for (asset, name) in store.iter().zip(names) {
            let path = namespace.canonical_path(&name);
            zip.start_file(&path, options)
                .map_err(|err| write_error(&path, err))?;
            zip.write_all(asset.content())
                .map_err(|err| write_error(&path, err))?;
        }
    }

    let cursor = zip
        .finish()
        .map_err(|err| write_error("archive", err))?;
    Ok(cursor.into_inner())
}

fn write_error(path: &str, err: impl std::fmt::Display) -> BundleError {
    BundleError::Archive(format!("{path}: {err}"))
}

/// Read and decode a bundle archive from disk.
pub fn read_bundle(path: &Path) -> Result<Bundle> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read archive file {:?}", path))?;
    decode(&bytes).with_context(|| format!("Failed to decode archive {:?}", path))
}

/// Encode a bundle and write it to disk, creating parent directories as
/// needed.
pub fn write_bundle(path: &Path, bundle: &Bundle) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    let bytes = encode(bundle)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to write archive file {:?}", path))?;
    file.write_all(&bytes)
        .with_context(|| format!("Failed to write archive file {:?}", path))?;
    Ok(())
}

/// Suggest a safe archive filename from a user-facing title.
///
/// Sanitizes and lowercases the title, falling back to `bundle.zip` when
/// nothing usable remains.
pub fn suggested_archive_name(title: &str) -> String {
    let base = crate::utils::sanitize_component(title).to_ascii_lowercase();
    let final_base = if base.is_empty() { "bundle" } else { &base };
    format!("{}.zip", final_base)
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps an existing matching extension (case-insensitive); otherwise
/// replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}

fn base_name(path: &str) -> Option<&str> {
    path.rsplit('/').find(|segment| !segment.is_empty())
}
