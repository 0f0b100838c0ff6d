// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! The complete in-memory unit of a decoded archive.

use crate::models::asset::Namespace;
use crate::models::store::AssetStore;

/// Readme text plus the image and attachment tables.
///
/// A bundle is created either by decoding an archive or by starting empty;
/// it has no lifecycle of its own and is passed whole between decode, edit,
/// and encode. The core does no caching or persistence.
#[derive(Clone, Debug, Default)]
pub struct Bundle {
    /// UTF-8 markdown text of `README.md`; empty when the archive had none.
    pub readme: String,
    pub images: AssetStore,
    pub attachments: AssetStore,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a bundle from readme text with no assets.
    pub fn from_readme(readme: impl Into<String>) -> Self {
        Self {
            readme: readme.into(),
            ..Self::default()
        }
    }

    pub fn store(&self, namespace: Namespace) -> &AssetStore {
        match namespace {
            Namespace::Images => &self.images,
            Namespace::Attachments => &self.attachments,
        }
    }

    pub fn store_mut(&mut self, namespace: Namespace) -> &mut AssetStore {
        match namespace {
            Namespace::Images => &mut self.images,
            Namespace::Attachments => &mut self.attachments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Bundle;
    use crate::models::asset::Namespace;

    #[test]
    fn namespaces_are_disjoint() {
        let mut bundle = Bundle::new();
        bundle.images.insert("x.png", vec![1]).unwrap();
        bundle.attachments.insert("x.png", vec![2]).unwrap();

        assert_eq!(bundle.store(Namespace::Images).len(), 1);
        assert_eq!(bundle.store(Namespace::Attachments).len(), 1);
        assert_ne!(
            bundle.images.assets()[0].id(),
            bundle.attachments.assets()[0].id()
        );
    }

    #[test]
    fn from_readme_starts_without_assets() {
        let bundle = Bundle::from_readme("# Title");
        assert_eq!(bundle.readme, "# Title");
        assert!(bundle.images.is_empty());
        assert!(bundle.attachments.is_empty());
    }
}
