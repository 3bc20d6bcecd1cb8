// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values that may depend on the active tag set.
//!
//! A visual property (a color, a cursor, a child widget) is either a plain
//! value or a function of the element's interaction state. [`StateValue`]
//! makes the two interchangeable at every call site: consumers hold a
//! `StateValue<T>` and call [`resolve`](StateValue::resolve) with the
//! current [`TagSet`], never caring which kind they were given.
//!
//! The state-dependent arm is expressed through the [`Resolver`] trait,
//! which any `Fn(&TagSet) -> T` closure implements, as does the precedence
//! table in [`crate::table`]. Resolvers are pure: same tags in, same value
//! out, no mutation of the set they receive (the `&TagSet` borrow enforces
//! the latter).
//!
//! ```rust
//! use trellis_resolve::StateValue;
//! use trellis_state::{Tag, TagSet};
//!
//! // A static value resolves to itself for any tag set.
//! let opaque: StateValue<f32> = StateValue::new(1.0);
//!
//! // A dynamic value computes from the tags.
//! let dimmed = StateValue::with(|tags: &TagSet| {
//!     if tags.contains(&Tag::DISABLED) { 0.4 } else { 1.0 }
//! });
//!
//! let mut tags = TagSet::new();
//! assert_eq!(opaque.resolve(&tags), 1.0);
//! assert_eq!(dimmed.resolve(&tags), 1.0);
//!
//! tags.insert(Tag::DISABLED);
//! assert_eq!(opaque.resolve(&tags), 1.0);
//! assert_eq!(dimmed.resolve(&tags), 0.4);
//! ```

use alloc::rc::Rc;
use core::fmt;

use trellis_state::TagSet;

/// A pure function from the active tag set to a concrete value.
///
/// Implemented by every `Fn(&TagSet) -> T` closure and by
/// [`StateTable`](crate::StateTable). Implementations must be safe to
/// invoke repeatedly for the same input.
pub trait Resolver<T> {
    /// Computes the value for the given tag set.
    fn resolve(&self, tags: &TagSet) -> T;
}

impl<T, F> Resolver<T> for F
where
    F: Fn(&TagSet) -> T,
{
    fn resolve(&self, tags: &TagSet) -> T {
        self(tags)
    }
}

/// A property value that is either fixed or driven by interaction state.
///
/// This is one generic wrapper for every property kind; there is no
/// per-type hierarchy of "driven color", "driven cursor", and so on.
/// `Dynamic` holds its resolver behind an `Rc`, so cloning a `StateValue`
/// never re-creates resolver state.
pub enum StateValue<T> {
    /// A fixed value, returned unchanged for any tag set.
    Static(T),
    /// A value computed from the tag set on each resolution.
    Dynamic(Rc<dyn Resolver<T>>),
}

impl<T> StateValue<T> {
    /// Wraps a fixed value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::Static(value)
    }

    /// Wraps a closure as a dynamic value.
    #[must_use]
    pub fn with(resolve: impl Fn(&TagSet) -> T + 'static) -> Self {
        Self::Dynamic(Rc::new(resolve))
    }

    /// Wraps any [`Resolver`] as a dynamic value.
    #[must_use]
    pub fn dynamic(resolver: impl Resolver<T> + 'static) -> Self {
        Self::Dynamic(Rc::new(resolver))
    }

    /// Returns `true` for the fixed arm.
    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Returns `true` for the state-driven arm.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

impl<T: Clone> StateValue<T> {
    /// Resolves to a concrete value for the given tag set.
    ///
    /// `Static` values pass through unchanged; `Dynamic` values invoke
    /// their resolver. Taking a non-resolver value down the static path is
    /// the expected default, not an error.
    #[must_use]
    pub fn resolve(&self, tags: &TagSet) -> T {
        match self {
            Self::Static(value) => value.clone(),
            Self::Dynamic(resolver) => resolver.resolve(tags),
        }
    }
}

impl<T: Clone> Clone for StateValue<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(value) => Self::Static(value.clone()),
            Self::Dynamic(resolver) => Self::Dynamic(Rc::clone(resolver)),
        }
    }
}

impl<T> From<T> for StateValue<T> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for StateValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
