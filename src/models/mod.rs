// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Domain layer: pure data types shared between the codec and resolver.

pub mod asset;
pub mod bundle;
pub mod store;

pub use asset::{Asset, AssetId, IMAGE_EXTENSIONS, Namespace, is_image_name};
pub use bundle::Bundle;
pub use store::AssetStore;
