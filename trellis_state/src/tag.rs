// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbolic identifiers for interaction states.
//!
//! This module provides [`Tag`], a value-equal name for one interaction
//! state (hovered, pressed, disabled, ...). Two tags with the same name are
//! interchangeable no matter how they were created; identity never matters.
//!
//! The common interaction vocabulary is available as associated constants,
//! and applications can mint their own tags with [`Tag::new`]:
//!
//! ```rust
//! use trellis_state::Tag;
//!
//! let editing = Tag::new("editing");
//! assert_ne!(editing, Tag::HOVERED);
//!
//! // Equality is by name, not by instance.
//! assert_eq!(Tag::new("hovered"), Tag::HOVERED);
//! ```

use alloc::borrow::Cow;
use core::fmt;

/// A value-equal symbolic identifier for one interaction state.
///
/// Tags compare, order, and hash by their name string alone. The built-in
/// vocabulary is exposed as associated constants ([`Tag::HOVERED`],
/// [`Tag::PRESSED`], ...); custom tags carry any non-empty name.
///
/// A custom tag created with a built-in's name aliases that built-in. This
/// is legal and occasionally useful (e.g. driving `"disabled"` from
/// application logic); avoiding unintended collisions is the caller's
/// responsibility.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// The pointer is over the element.
    pub const HOVERED: Self = Self::well_known("hovered");
    /// The element has keyboard focus.
    pub const FOCUSED: Self = Self::well_known("focused");
    /// The element is being pressed.
    pub const PRESSED: Self = Self::well_known("pressed");
    /// The element is being dragged.
    pub const DRAGGED: Self = Self::well_known("dragged");
    /// The element is selected.
    pub const SELECTED: Self = Self::well_known("selected");
    /// The element is in a mixed/partial state (e.g. a tri-state checkbox).
    pub const INDETERMINATE: Self = Self::well_known("indeterminate");
    /// The element does not accept interaction.
    pub const DISABLED: Self = Self::well_known("disabled");
    /// The element is showing an error.
    pub const ERROR: Self = Self::well_known("error");
    /// The element is waiting on something.
    pub const LOADING: Self = Self::well_known("loading");

    /// The registry of built-in tags.
    ///
    /// The order here is the vocabulary order, not a precedence order;
    /// precedence lives in `trellis_resolve`'s state table.
    pub const BUILT_IN: [Self; 9] = [
        Self::HOVERED,
        Self::FOCUSED,
        Self::PRESSED,
        Self::DRAGGED,
        Self::SELECTED,
        Self::INDETERMINATE,
        Self::DISABLED,
        Self::ERROR,
        Self::LOADING,
    ];

    const fn well_known(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a custom tag with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. Tag names must be non-empty and stable.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "tag name must be non-empty");
        Self(name)
    }

    /// Returns the name of this tag.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this tag is one of the built-in vocabulary.
    #[must_use]
    pub fn is_built_in(&self) -> bool {
        Self::BUILT_IN.iter().any(|t| t == self)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.0).finish()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.0)
    }
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}
