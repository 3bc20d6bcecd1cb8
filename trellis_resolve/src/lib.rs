// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_resolve --heading-base-level=0

//! Trellis Resolve: state-driven value resolution over interaction tags.
//!
//! This crate sits on top of `trellis_state` and answers the question "what
//! should this property be, given the element's current interaction state?"
//! without the component author writing per-event branching in render code:
//!
//! - [`Resolver`]: a pure function from a
//!   [`TagSet`](trellis_state::TagSet) to a value; closures qualify
//! - [`StateValue`]: one generic wrapper making a fixed value and a
//!   state-driven value interchangeable at every call site
//! - [`StateTable`]: a precedence-ordered tag-to-value mapping with a
//!   fallback, for child-selection and switcher-style consumers
//!
//! ## A property that varies with state
//!
//! ```rust
//! use trellis_resolve::{StateTable, StateValue};
//! use trellis_state::{Tag, TagController};
//!
//! // Component configuration: one property, three appearances.
//! let background: StateValue<u32> = StateValue::dynamic(
//!     StateTable::builder(0xFFFFFF)
//!         .on_disabled(0xCCCCCC)
//!         .on_pressed(0x0055AA)
//!         .on_hovered(0x3388DD)
//!         .build(),
//! );
//!
//! // Render step: resolve against the controller's current tags.
//! let controller = TagController::new();
//! assert_eq!(background.resolve(&controller.tags()), 0xFFFFFF);
//!
//! controller.add(Tag::HOVERED);
//! assert_eq!(background.resolve(&controller.tags()), 0x3388DD);
//!
//! controller.add(Tag::PRESSED); // pressed outranks hovered
//! assert_eq!(background.resolve(&controller.tags()), 0x0055AA);
//! ```
//!
//! ## Static and dynamic, uniformly
//!
//! Call sites hold a [`StateValue`] and never care which kind they were
//! handed; a plain value simply resolves to itself:
//!
//! ```rust
//! use trellis_resolve::StateValue;
//! use trellis_state::{Tag, TagSet};
//!
//! fn pick(width: &StateValue<f64>, tags: &TagSet) -> f64 {
//!     width.resolve(tags)
//! }
//!
//! let fixed = StateValue::new(1.0);
//! let driven = StateValue::with(|tags: &TagSet| {
//!     if tags.contains(&Tag::FOCUSED) { 2.0 } else { 1.0 }
//! });
//!
//! let focused: TagSet = [Tag::FOCUSED].into_iter().collect();
//! assert_eq!(pick(&fixed, &focused), 1.0);
//! assert_eq!(pick(&driven, &focused), 2.0);
//! ```
//!
//! A [`StateTable`] is itself a [`Resolver`], so table-driven and fully
//! custom logic slot into the same `StateValue::Dynamic` arm.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod table;
mod value;

pub use table::{StateTable, StateTableBuilder};
pub use value::{Resolver, StateValue};
