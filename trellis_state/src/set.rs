// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of currently active interaction tags.
//!
//! [`TagSet`] has plain set semantics: membership only, no duplicates, and
//! insertion order never affects anything downstream.
//!
//! # Implementation
//!
//! Storage is a sorted `SmallVec` with binary search rather than a hash set.
//! Interaction sets are almost always tiny (zero to three active tags), so
//! this keeps membership checks cache-friendly and avoids heap allocation
//! entirely in the common case. Sorted storage also makes equality and
//! `Debug` output canonical.
//!
//! ```rust
//! use trellis_state::{Tag, TagSet};
//!
//! let mut tags = TagSet::new();
//! assert!(tags.insert(Tag::HOVERED));
//! assert!(!tags.insert(Tag::HOVERED)); // already present
//! assert!(tags.contains(&Tag::HOVERED));
//! assert_eq!(tags.len(), 1);
//! ```

use core::fmt;
use smallvec::SmallVec;

use crate::tag::Tag;

/// Inline capacity for tag storage.
///
/// Interactive elements rarely carry more than a few simultaneous states,
/// so four inline slots cover nearly every real set without allocating.
const INLINE_TAGS: usize = 4;

/// A set of active [`Tag`]s.
///
/// Membership is by tag value (name) equality. The set holds no duplicates
/// and its iteration order is the sorted name order, which callers must not
/// rely on for resolution semantics.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    /// Sorted by tag name for binary search lookup.
    tags: SmallVec<[Tag; INLINE_TAGS]>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tags: SmallVec::new(),
        }
    }

    /// Builds a set from `(tag, active)` pairs, keeping the tags whose flag
    /// is `true`.
    ///
    /// Later pairs win when the same tag appears more than once.
    ///
    /// ```rust
    /// use trellis_state::{Tag, TagSet};
    ///
    /// let tags = TagSet::from_pairs([(Tag::HOVERED, true), (Tag::PRESSED, false)]);
    /// assert!(tags.contains(&Tag::HOVERED));
    /// assert!(!tags.contains(&Tag::PRESSED));
    /// ```
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Tag, bool)>) -> Self {
        let mut set = Self::new();
        for (tag, active) in pairs {
            if active {
                set.insert(tag);
            } else {
                set.remove(&tag);
            }
        }
        set
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the number of active tags.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the set contains the given tag.
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.binary_search(tag).is_ok()
    }

    /// Inserts a tag, returning `true` if it was not already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        match self.tags.binary_search(&tag) {
            Ok(_) => false,
            Err(idx) => {
                self.tags.insert(idx, tag);
                true
            }
        }
    }

    /// Removes a tag, returning `true` if it was present.
    pub fn remove(&mut self, tag: &Tag) -> bool {
        match self.tags.binary_search(tag) {
            Ok(idx) => {
                self.tags.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes all tags.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Returns an iterator over the active tags in sorted name order.
    pub fn iter(&self) -> core::slice::Iter<'_, Tag> {
        self.tags.iter()
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Tag> for TagSet {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl IntoIterator for TagSet {
    type Item = Tag;
    type IntoIter = smallvec::IntoIter<[Tag; INLINE_TAGS]>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = core::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
