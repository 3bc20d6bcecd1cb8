// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precedence-ordered tag-to-value selection.
//!
//! [`StateTable`] maps tags to candidate values, with a fallback for when
//! nothing matches. Resolution walks the entries in a fixed precedence
//! order and picks the value of the first tag that is active in the
//! queried set — the classic "which child/color/cursor should this element
//! show right now" question.
//!
//! The built-in categories are always consulted in this order:
//!
//! > error, disabled, loading, dragged, pressed, hovered, focused,
//! > indeterminate, selected
//!
//! Custom tags follow after the built-ins, in the order they were first
//! declared on the builder. All entries share one last-write-wins lookup,
//! so a later `when(Tag::ERROR, ..)` replaces the value a `on_error(..)`
//! set while keeping error's position at the front.
//!
//! ```rust
//! use trellis_resolve::StateTable;
//! use trellis_state::{Tag, TagSet};
//!
//! let label = StateTable::builder("idle")
//!     .on_error("failed")
//!     .on_disabled("unavailable")
//!     .on_hovered("ready")
//!     .build();
//!
//! let tags: TagSet = [Tag::DISABLED, Tag::ERROR].into_iter().collect();
//! assert_eq!(label.resolve(&tags), "failed"); // error outranks disabled
//!
//! assert_eq!(label.resolve(&TagSet::new()), "idle"); // fallback
//! ```
//!
//! Tables are immutable after [`build`](StateTableBuilder::build) and
//! implement [`Resolver`], so they slot into
//! [`StateValue::Dynamic`](crate::StateValue) interchangeably with closure
//! resolvers.

use alloc::vec::Vec;

use trellis_state::{Tag, TagSet};

use crate::value::Resolver;

/// The fixed consultation order for the built-in categories.
const CATEGORY_ORDER: [Tag; 9] = [
    Tag::ERROR,
    Tag::DISABLED,
    Tag::LOADING,
    Tag::DRAGGED,
    Tag::PRESSED,
    Tag::HOVERED,
    Tag::FOCUSED,
    Tag::INDETERMINATE,
    Tag::SELECTED,
];

/// An ordered tag-to-value mapping with a fallback.
///
/// Built with [`StateTableBuilder`]; see the [module docs](self) for the
/// precedence rules. Resolution is deterministic and total: every call
/// with the same table and tag set yields the same value.
#[derive(Clone, Debug)]
pub struct StateTable<T> {
    fallback: T,
    /// Entries in final consultation order. A `None` value masks the tag:
    /// it matches nothing and resolution moves on.
    entries: Vec<(Tag, Option<T>)>,
}

impl<T> StateTable<T> {
    /// Starts building a table around the given fallback value.
    #[must_use]
    pub fn builder(fallback: T) -> StateTableBuilder<T> {
        StateTableBuilder {
            fallback,
            entries: Vec::new(),
        }
    }

    /// Returns the fallback value.
    #[must_use]
    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Returns the number of explicit entries (masked ones included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> StateTable<T> {
    /// Resolves to the value of the first entry whose tag is active in
    /// `tags` and whose value is not masked, or the fallback.
    #[must_use]
    pub fn resolve(&self, tags: &TagSet) -> T {
        for (tag, value) in &self.entries {
            if tags.contains(tag)
                && let Some(value) = value
            {
                return value.clone();
            }
        }
        self.fallback.clone()
    }
}

impl<T: Clone> Resolver<T> for StateTable<T> {
    fn resolve(&self, tags: &TagSet) -> T {
        Self::resolve(self, tags)
    }
}

/// Builder for [`StateTable`].
///
/// Named setters cover the built-in categories; [`when`](Self::when) adds
/// custom tags and overrides; [`mask`](Self::mask) maps a tag to "no
/// value" so resolution skips past it.
#[derive(Clone, Debug)]
pub struct StateTableBuilder<T> {
    fallback: T,
    /// Raw declarations in call order; merged at [`build`](Self::build).
    entries: Vec<(Tag, Option<T>)>,
}

impl<T> StateTableBuilder<T> {
    /// Creates a builder around the given fallback value.
    #[must_use]
    pub fn new(fallback: T) -> Self {
        StateTable::builder(fallback)
    }

    /// Maps a tag to a value.
    ///
    /// Declaring the same tag again replaces the value; the tag keeps the
    /// position of its first declaration (or its fixed category position,
    /// for built-ins).
    #[must_use]
    pub fn when(mut self, tag: Tag, value: T) -> Self {
        self.entries.push((tag, Some(value)));
        self
    }

    /// Maps a tag to "no value": the tag matches nothing during
    /// resolution, which moves on to later entries or the fallback.
    #[must_use]
    pub fn mask(mut self, tag: Tag) -> Self {
        self.entries.push((tag, None));
        self
    }

    /// Maps [`Tag::ERROR`] to a value.
    #[must_use]
    pub fn on_error(self, value: T) -> Self {
        self.when(Tag::ERROR, value)
    }

    /// Maps [`Tag::DISABLED`] to a value.
    #[must_use]
    pub fn on_disabled(self, value: T) -> Self {
        self.when(Tag::DISABLED, value)
    }

    /// Maps [`Tag::LOADING`] to a value.
    #[must_use]
    pub fn on_loading(self, value: T) -> Self {
        self.when(Tag::LOADING, value)
    }

    /// Maps [`Tag::DRAGGED`] to a value.
    #[must_use]
    pub fn on_dragged(self, value: T) -> Self {
        self.when(Tag::DRAGGED, value)
    }

    /// Maps [`Tag::PRESSED`] to a value.
    #[must_use]
    pub fn on_pressed(self, value: T) -> Self {
        self.when(Tag::PRESSED, value)
    }

    /// Maps [`Tag::HOVERED`] to a value.
    #[must_use]
    pub fn on_hovered(self, value: T) -> Self {
        self.when(Tag::HOVERED, value)
    }

    /// Maps [`Tag::FOCUSED`] to a value.
    #[must_use]
    pub fn on_focused(self, value: T) -> Self {
        self.when(Tag::FOCUSED, value)
    }

    /// Maps [`Tag::INDETERMINATE`] to a value.
    #[must_use]
    pub fn on_indeterminate(self, value: T) -> Self {
        self.when(Tag::INDETERMINATE, value)
    }

    /// Maps [`Tag::SELECTED`] to a value.
    #[must_use]
    pub fn on_selected(self, value: T) -> Self {
        self.when(Tag::SELECTED, value)
    }

    /// Builds the table.
    ///
    /// Declarations merge into one last-write-wins lookup. The final
    /// consultation order is the nine built-in categories first (those
    /// actually declared), then custom tags in first-declared order.
    #[must_use]
    pub fn build(self) -> StateTable<T> {
        // Last write wins per tag, first declaration fixes a custom tag's
        // relative position.
        let mut merged: Vec<(Tag, Option<T>)> = Vec::new();
        for (tag, value) in self.entries {
            match merged.iter_mut().find(|(existing, _)| *existing == tag) {
                Some(entry) => entry.1 = value,
                None => merged.push((tag, value)),
            }
        }

        let mut entries = Vec::with_capacity(merged.len());
        for category in &CATEGORY_ORDER {
            if let Some(idx) = merged.iter().position(|(tag, _)| tag == category) {
                entries.push(merged.remove(idx));
            }
        }
        entries.extend(merged);

        StateTable {
            fallback: self.fallback,
            entries,
        }
    }
}
