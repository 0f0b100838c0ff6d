// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Bundle codec and reference-resolution engine for portable markdown
//! notes.
//!
//! A bundle is a markdown `README.md` together with the binary assets it
//! references, packed into a single ZIP archive: images under `images/`,
//! everything else under `attachments/`. This crate decodes such an
//! archive into editable in-memory state with stably-identified assets,
//! re-encodes edited state back into a coherent archive, and resolves the
//! loosely-formatted textual references a document makes
//! (`images/<name>`, `attachments/<name>`) against the actual asset
//! tables.
//!
//! ```
//! use notepack::{Bundle, decode, encode, resolve_image};
//!
//! let mut bundle = Bundle::from_readme("![cat](images/cat.png)");
//! bundle.images.insert("cat.png", vec![0x89, 0x50]).unwrap();
//!
//! let bytes = encode(&bundle).unwrap();
//! let restored = decode(&bytes).unwrap();
//! assert!(resolve_image("images/cat.png", &restored.images).is_found());
//! ```
//!
//! Rendering, editing UI, and delivery of the encoded bytes are the
//! caller's concern; the core holds no locks, keeps no global state, and
//! treats every bundle as independent.

pub mod error;
pub mod logic;
pub mod models;
pub mod utils;

pub use error::BundleError;
pub use logic::archive::{
    README_PATH, decode, encode, ensure_extension, read_bundle, suggested_archive_name,
    write_bundle,
};
pub use logic::naming::export_names;
pub use logic::resolver::{
    Reference, ReferenceKind, Resolution, resolve_attachment, resolve_image, scan_references,
};
pub use models::{Asset, AssetId, AssetStore, Bundle, Namespace, is_image_name};
