// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! In-memory asset table for one namespace, keyed by identity.

use crate::error::BundleError;
use crate::models::asset::{Asset, AssetId};

/// Ordered table of assets for a single namespace (images or attachments).
///
/// Insertion order is preserved so export ordering and first-match
/// reference resolution stay deterministic. Display-name uniqueness is
/// deliberately *not* enforced here; collisions are legal in memory and
/// resolved only at encode time by the naming policy.
#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    assets: Vec<Asset>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest new content under `name`, minting a fresh identity.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::InvalidName`] when `name` trims to empty.
    pub fn insert(&mut self, name: &str, content: Vec<u8>) -> Result<AssetId, BundleError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(BundleError::InvalidName(name.to_string()));
        }
        let asset = Asset::ingest(trimmed.to_string(), content);
        let id = asset.id();
        self.assets.push(asset);
        Ok(id)
    }

    /// Change an asset's display name, leaving its identity untouched.
    ///
    /// Returns `Ok(true)` when the asset was renamed and `Ok(false)` when
    /// no asset has this id. No uniqueness check happens here.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::InvalidName`] when `new_name` trims to
    /// empty; the prior name is retained.
    pub fn rename(&mut self, id: AssetId, new_name: &str) -> Result<bool, BundleError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(BundleError::InvalidName(new_name.to_string()));
        }
        match self.find_mut(id) {
            Some(asset) => {
                asset.set_name(trimmed.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an asset by id. Idempotent: returns `false` when nothing
    /// was removed.
    pub fn remove(&mut self, id: AssetId) -> bool {
        let before = self.assets.len();
        self.assets.retain(|asset| asset.id() != id);
        self.assets.len() != before
    }

    /// Replace an asset's binary content; identity and name are unchanged
    /// and the size and digest are recomputed. Returns `false` when no
    /// asset has this id.
    pub fn replace_content(&mut self, id: AssetId, content: Vec<u8>) -> bool {
        match self.find_mut(id) {
            Some(asset) => {
                asset.set_content(content);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id() == id)
    }

    /// Assets in insertion order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    fn find_mut(&mut self, id: AssetId) -> Option<&mut Asset> {
        self.assets.iter_mut().find(|asset| asset.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::AssetStore;
    use crate::error::BundleError;

    #[test]
    fn insert_assigns_distinct_ids_and_preserves_order() {
        let mut store = AssetStore::new();
        let a = store.insert("a.png", vec![1]).unwrap();
        let b = store.insert("b.png", vec![2]).unwrap();

        assert_ne!(a, b);
        let names: Vec<_> = store.iter().map(|asset| asset.name()).collect();
        assert_eq!(names, ["a.png", "b.png"]);
    }

    #[test]
    fn insert_rejects_whitespace_only_names() {
        let mut store = AssetStore::new();
        let err = store.insert("   ", vec![1]).unwrap_err();
        assert!(matches!(err, BundleError::InvalidName(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn rename_trims_and_keeps_identity() {
        let mut store = AssetStore::new();
        let id = store.insert("old.txt", vec![]).unwrap();

        assert!(store.rename(id, "  new.txt  ").unwrap());
        let asset = store.get(id).unwrap();
        assert_eq!(asset.name(), "new.txt");
        assert_eq!(asset.id(), id);
    }

    // Empty rename is rejected and the prior name survives.
    #[test]
    fn rename_to_empty_is_rejected() {
        let mut store = AssetStore::new();
        let id = store.insert("keep.txt", vec![]).unwrap();

        let err = store.rename(id, "   ").unwrap_err();
        assert!(matches!(err, BundleError::InvalidName(_)));
        assert_eq!(store.get(id).unwrap().name(), "keep.txt");
    }

    // Duplicate display names are legal in memory; uniqueness is an
    // encode-time concern.
    #[test]
    fn rename_permits_duplicate_names() {
        let mut store = AssetStore::new();
        store.insert("a.png", vec![]).unwrap();
        let id = store.insert("b.png", vec![]).unwrap();

        assert!(store.rename(id, "a.png").unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = AssetStore::new();
        let id = store.insert("x.bin", vec![0]).unwrap();

        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.is_empty());
    }

    // Size and digest must track the content after replacement.
    #[test]
    fn replace_content_recomputes_size_and_digest() {
        let mut store = AssetStore::new();
        let id = store.insert("x.bin", vec![0]).unwrap();
        let old_digest = store.get(id).unwrap().sha256().to_string();

        assert!(store.replace_content(id, vec![1, 2, 3, 4]));
        let asset = store.get(id).unwrap();
        assert_eq!(asset.size(), 4);
        assert_eq!(asset.size(), asset.content().len() as u64);
        assert_ne!(asset.sha256(), old_digest);
    }

    #[test]
    fn operations_on_missing_ids_are_tolerated() {
        let mut store = AssetStore::new();
        let id = store.insert("x.bin", vec![0]).unwrap();
        store.remove(id);

        assert!(!store.rename(id, "y.bin").unwrap());
        assert!(!store.replace_content(id, vec![1]));
        assert!(store.get(id).is_none());
    }
}
