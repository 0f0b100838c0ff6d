// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Collision-free export naming for one asset namespace.

use std::collections::HashSet;

use crate::models::Asset;

/// Produce a pairwise-distinct archive name for each asset.
///
/// Assets are processed in the given (insertion) order: the first claimant
/// of a name keeps it unmodified, and every later collision gets a numeric
/// suffix before the extension (`photo.png`, `photo-2.png`, `photo-3.png`,
/// …), incremented until unique. Names without an extension are suffixed
/// at the end (`notes`, `notes-2`). The result is aligned index-for-index
/// with the input and never fails by construction.
pub fn export_names(assets: &[Asset]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(assets.len());
    let mut names = Vec::with_capacity(assets.len());

    for asset in assets {
        let mut candidate = asset.name().to_string();
        let mut attempt = 2usize;
        while !taken.insert(candidate.clone()) {
            candidate = suffixed(asset.name(), attempt);
            attempt += 1;
        }
        if candidate != asset.name() {
            log::debug!(
                "export name collision: {:?} serialized as {:?}",
                asset.name(),
                candidate
            );
        }
        names.push(candidate);
    }

    names
}

/// Insert `-n` before the extension, or append it when there is none.
fn suffixed(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{n}.{ext}"),
        _ => format!("{name}-{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{export_names, suffixed};
    use crate::models::AssetStore;

    fn store_with(names: &[&str]) -> AssetStore {
        let mut store = AssetStore::new();
        for name in names {
            store.insert(name, Vec::new()).unwrap();
        }
        store
    }

    // First-inserted asset keeps the bare name; later ones are suffixed in
    // insertion order.
    #[test]
    fn collisions_resolve_deterministically() {
        let store = store_with(&["a.png", "a.png", "a.png"]);
        assert_eq!(
            export_names(store.assets()),
            ["a.png", "a-2.png", "a-3.png"]
        );
    }

    #[test]
    fn unique_names_pass_through_unchanged() {
        let store = store_with(&["a.png", "b.png"]);
        assert_eq!(export_names(store.assets()), ["a.png", "b.png"]);
    }

    // A suffixed name that is itself already taken must keep incrementing.
    #[test]
    fn suffix_skips_names_already_claimed() {
        let store = store_with(&["a.png", "a-2.png", "a.png"]);
        assert_eq!(
            export_names(store.assets()),
            ["a.png", "a-2.png", "a-3.png"]
        );
    }

    #[test]
    fn names_without_extension_are_suffixed_at_the_end() {
        let store = store_with(&["notes", "notes"]);
        assert_eq!(export_names(store.assets()), ["notes", "notes-2"]);
    }

    // Dotfiles have no stem, so the suffix goes at the end of the whole name.
    #[test]
    fn suffixed_handles_dotfiles_and_multi_part_extensions() {
        assert_eq!(suffixed(".gitignore", 2), ".gitignore-2");
        assert_eq!(suffixed("data.tar.gz", 2), "data.tar-2.gz");
    }
}
