// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Reference resolution: matching markdown targets to assets.
//!
//! Markdown sources express the same asset path with or without URL
//! encoding, with or without a leading folder, and sometimes with stray
//! markdown punctuation leaked in from the surrounding syntax. Resolution
//! is therefore tolerant, but the tolerance boundary is explicit: a fixed,
//! ordered list of match predicates evaluated against each asset in store
//! order, first match wins.

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::models::{Asset, AssetStore, Namespace};

/// Markdown syntax characters stripped from raw targets before matching.
const STRAY_MARKDOWN: [char; 5] = ['!', '[', ']', '(', ')'];

/// Match predicates in priority order. Documented and tested individually;
/// the cascade never falls back to fuzzy matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatchRule {
    /// Cleaned target equals the canonical path (`images/<name>`).
    CanonicalExact,
    /// Cleaned target equals the bare display name.
    NameExact,
    /// Cleaned target ends with the canonical path (`./images/<name>`).
    CanonicalSuffix,
    /// Cleaned target ends with the bare display name.
    NameSuffix,
    /// Cleaned target equals the name after the same punctuation strip.
    CleanedName,
}

const MATCH_RULES: [MatchRule; 5] = [
    MatchRule::CanonicalExact,
    MatchRule::NameExact,
    MatchRule::CanonicalSuffix,
    MatchRule::NameSuffix,
    MatchRule::CleanedName,
];

/// Outcome of resolving one markdown reference.
///
/// A miss is a normal, user-correctable state (the document may reference
/// assets that were never imported), so it is a value rather than an
/// error; callers display the cleaned target as a diagnostic.
#[derive(Debug)]
pub enum Resolution<'a> {
    Found(&'a Asset),
    NotFound(String),
}

impl<'a> Resolution<'a> {
    pub fn asset(&self) -> Option<&'a Asset> {
        match self {
            Resolution::Found(asset) => Some(*asset),
            Resolution::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Match a raw markdown image target against the image table.
///
/// Never fails: an unmatched target comes back as
/// [`Resolution::NotFound`] with the cleaned target string.
pub fn resolve_image<'a>(raw_target: &str, images: &'a AssetStore) -> Resolution<'a> {
    resolve(raw_target, images, Namespace::Images)
}

/// Match a raw link href against the attachment table. Same cleaning and
/// predicate cascade as [`resolve_image`], against `attachments/<name>`.
pub fn resolve_attachment<'a>(raw_href: &str, attachments: &'a AssetStore) -> Resolution<'a> {
    resolve(raw_href, attachments, Namespace::Attachments)
}

fn resolve<'a>(raw: &str, store: &'a AssetStore, namespace: Namespace) -> Resolution<'a> {
    let cleaned = clean_target(raw);

    // First asset in store order satisfying any predicate wins. Ties are
    // not expected in well-formed documents; first-match is a documented
    // limitation, not a best-match guarantee.
    for asset in store.iter() {
        if let Some(rule) = match_asset(&cleaned, namespace, asset) {
            log::trace!(
                "reference {:?} matched asset {} via {:?}",
                cleaned,
                asset.id(),
                rule
            );
            return Resolution::Found(asset);
        }
    }

    log::debug!("no {} asset matched reference {:?}", namespace.dir(), cleaned);
    Resolution::NotFound(cleaned)
}

fn match_asset(cleaned: &str, namespace: Namespace, asset: &Asset) -> Option<MatchRule> {
    let name = asset.name();
    let canonical = namespace.canonical_path(name);

    MATCH_RULES.into_iter().find(|rule| match rule {
        MatchRule::CanonicalExact => cleaned == canonical,
        MatchRule::NameExact => cleaned == name,
        MatchRule::CanonicalSuffix => cleaned.ends_with(&canonical),
        MatchRule::NameSuffix => cleaned.ends_with(name),
        MatchRule::CleanedName => cleaned == strip_stray_punctuation(name),
    })
}

/// URL-decode, strip leaked markdown punctuation, and trim whitespace.
fn clean_target(raw: &str) -> String {
    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        // Percent sequences that do not decode to UTF-8 are left as-is.
        Err(_) => raw.to_string(),
    };
    strip_stray_punctuation(&decoded)
}

fn strip_stray_punctuation(value: &str) -> String {
    let stripped: String = value
        .chars()
        .filter(|ch| !STRAY_MARKDOWN.contains(ch))
        .collect();
    stripped.trim().to_string()
}

/// Kind of markdown reference found by [`scan_references`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Inline image, resolved against the image namespace.
    Image,
    /// Link href, resolved against the attachment namespace.
    Link,
}

/// One raw reference target as written in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub target: String,
}

/// Collect every image and link destination in document order.
///
/// Stateless and safe to call repeatedly; duplicate targets appear once
/// per occurrence. Lets a holder batch-resolve everything a readme
/// mentions, e.g. to flag dangling references before export.
pub fn scan_references(markdown: &str) -> Vec<Reference> {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut references = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Image { dest_url, .. }) => references.push(Reference {
                kind: ReferenceKind::Image,
                target: dest_url.into_string(),
            }),
            Event::Start(Tag::Link { dest_url, .. }) => references.push(Reference {
                kind: ReferenceKind::Link,
                target: dest_url.into_string(),
            }),
            _ => {}
        }
    }

    references
}
