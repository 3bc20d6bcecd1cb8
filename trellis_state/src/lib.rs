// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_state --heading-base-level=0

//! Trellis State: interaction-state tags with change-notifying controllers.
//!
//! UI elements carry a set of symbolic interaction states (hovered, pressed,
//! focused, disabled, ...). This crate provides the reactive core that tracks
//! that set and tells the embedder when it changes:
//!
//! - [`Tag`]: a value-equal name for one interaction state, with the common
//!   vocabulary built in and an open constructor for custom states
//! - [`TagSet`]: the set of currently active tags for one element
//! - [`TagController`]: owns a [`TagSet`], exposes the mutation API, and
//!   runs listeners synchronously on every net change
//! - [`HostBinding`]: glue that ties a controller (owned or supplied from
//!   outside) to a host's create/update/teardown cycle
//!
//! The crate does not assume any particular UI framework, render tree, or
//! event system. Hosts decide when interaction events occur and call the
//! controller; the controller decides whether anything actually changed and
//! notifies; the host's re-render hook does the rest. Resolving values
//! *from* a tag set (colors, cursors, style objects) lives in the companion
//! `trellis_resolve` crate.
//!
//! ## Tracking interaction state
//!
//! ```rust
//! use trellis_state::{Tag, TagController};
//!
//! let controller = TagController::new();
//!
//! // Pointer enters, then a press begins.
//! controller.add(Tag::HOVERED);
//! controller.set(Tag::PRESSED, true);
//! assert!(controller.is_hovered() && controller.is_pressed());
//!
//! // Redundant events are no-ops, not errors.
//! controller.add(Tag::HOVERED);
//!
//! // Custom application states mix freely with the built-ins.
//! let editing = Tag::new("editing");
//! controller.toggle(editing.clone());
//! assert!(controller.contains(&editing));
//! ```
//!
//! ## Reacting to changes
//!
//! Listeners run synchronously, in subscription order, with the
//! post-mutation set:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use trellis_state::{Tag, TagController};
//!
//! let controller = TagController::new();
//! let hovered = Rc::new(Cell::new(false));
//! let seen = hovered.clone();
//! let id = controller.subscribe(move |tags| seen.set(tags.contains(&Tag::HOVERED)));
//!
//! controller.add(Tag::HOVERED);
//! assert!(hovered.get());
//!
//! controller.unsubscribe(id);
//! ```
//!
//! ## Binding to a host lifecycle
//!
//! A host holds a [`HostBinding`] and forwards three lifecycle calls to it.
//! The binding creates and owns a controller when the host was not handed
//! one, and never disposes a controller it merely borrows:
//!
//! ```rust
//! use trellis_state::{HostBinding, Tag, TagController};
//!
//! let mut binding = HostBinding::new(|_tags| { /* schedule a re-render */ });
//! binding.init(None); // owns a fresh controller
//!
//! // The host is later handed a shared controller.
//! let shared = TagController::new();
//! binding.update(Some(&shared)); // owned one is disposed, listener moves
//! assert!(binding.controller().unwrap().ptr_eq(&shared));
//!
//! binding.dispose();
//! assert!(!shared.is_disposed()); // external, so only unsubscribed
//! ```
//!
//! ## Concurrency
//!
//! Everything here is single-threaded and synchronous: one logical thread
//! drives event handling and rendering, mutations (listener dispatch
//! included) complete before returning, and nothing blocks or suspends.
//! Controllers are `Rc`-based handles and are not `Send` or `Sync`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod binding;
mod controller;
mod set;
mod tag;

pub use binding::HostBinding;
pub use controller::{InitialTags, ListenerId, TagController};
pub use set::TagSet;
pub use tag::Tag;
