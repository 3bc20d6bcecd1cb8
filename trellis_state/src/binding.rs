// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle glue between a [`TagController`] and a render host.
//!
//! [`HostBinding`] is held by a host object (a widget, an element wrapper,
//! whatever drives rendering) which delegates three lifecycle calls to it:
//! [`init`](HostBinding::init) at creation, [`update`](HostBinding::update)
//! whenever the host's external-controller reference changes, and
//! [`dispose`](HostBinding::dispose) at teardown. This is deliberate
//! composition rather than inherited behavior; the binding works with any
//! host that can make those three calls.
//!
//! The binding's one obligation in between: invoke the host's re-render
//! hook exactly once per controller notification, after the tag set has
//! been updated.
//!
//! A binding either *owns* a controller it created itself or *borrows* an
//! external one supplied by the host. It disposes only what it owns;
//! an external controller merely has the binding's listener removed.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use trellis_state::{HostBinding, Tag};
//!
//! let renders = Rc::new(Cell::new(0));
//! let hook = renders.clone();
//! let mut binding = HostBinding::new(move |_tags| hook.set(hook.get() + 1));
//!
//! // No external controller supplied: the binding owns a fresh one.
//! binding.init(None);
//! let controller = binding.controller().unwrap().clone();
//!
//! controller.add(Tag::HOVERED);
//! assert_eq!(renders.get(), 1);
//!
//! binding.dispose();
//! assert!(controller.is_disposed()); // owned, so disposed with the binding
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::controller::{ListenerId, TagController};
use crate::set::TagSet;

type RenderHook = Rc<RefCell<dyn FnMut(&TagSet)>>;

/// Binds a [`TagController`] (owned or external) to a host's
/// create/update/teardown cycle.
///
/// See the [module docs](self) for the ownership rules.
pub struct HostBinding {
    /// The host's re-render trigger, stored once at construction so that
    /// rebinding can resubscribe it.
    hook: RenderHook,
    controller: Option<TagController>,
    owns_controller: bool,
    listener: Option<ListenerId>,
    disposed: bool,
}

impl HostBinding {
    /// Creates an unbound binding around the host's re-render hook.
    ///
    /// The hook receives the post-change tag set and is called exactly once
    /// per controller notification while the binding is bound.
    #[must_use]
    pub fn new(on_change: impl FnMut(&TagSet) + 'static) -> Self {
        Self {
            hook: Rc::new(RefCell::new(on_change)),
            controller: None,
            owns_controller: false,
            listener: None,
            disposed: false,
        }
    }

    /// Binds to `external` if supplied, otherwise creates and owns a fresh
    /// controller. Called once at host creation.
    ///
    /// # Panics
    ///
    /// Panics if the binding is already bound or has been disposed; either
    /// indicates a lifecycle bug in the host.
    pub fn init(&mut self, external: Option<&TagController>) {
        assert!(!self.disposed, "HostBinding::init called after dispose");
        assert!(
            self.controller.is_none(),
            "HostBinding::init called while already bound"
        );
        self.bind(external);
    }

    /// Rebinds when the host's external-controller reference changes.
    ///
    /// A no-op when the active source is unchanged: the same external
    /// controller (by identity), or an owned controller with still no
    /// external supplied. Otherwise the old source's listener is removed,
    /// an owned controller being superseded is disposed, and the binding
    /// re-runs the [`init`](Self::init) logic with the new reference.
    ///
    /// # Panics
    ///
    /// Panics if the binding was never initialized or has been disposed.
    pub fn update(&mut self, new_external: Option<&TagController>) {
        assert!(!self.disposed, "HostBinding::update called after dispose");
        let current = self
            .controller
            .as_ref()
            .expect("HostBinding::update called before init");

        let unchanged = match new_external {
            Some(external) => !self.owns_controller && current.ptr_eq(external),
            None => self.owns_controller,
        };
        if unchanged {
            return;
        }

        self.unbind();
        self.bind(new_external);
    }

    /// Unbinds and marks the binding disposed. Idempotent.
    ///
    /// An owned controller is disposed with the binding; an external one
    /// only has this binding's listener removed, since the binding never
    /// owns a controller it was handed.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.unbind();
        self.disposed = true;
    }

    /// Returns the active controller, if bound.
    #[must_use]
    pub fn controller(&self) -> Option<&TagController> {
        self.controller.as_ref()
    }

    /// Returns `true` while a controller is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.controller.is_some()
    }

    /// Returns `true` if the bound controller is owned by this binding.
    #[must_use]
    pub fn owns_controller(&self) -> bool {
        self.owns_controller
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn bind(&mut self, external: Option<&TagController>) {
        let (controller, owns) = match external {
            Some(external) => (external.clone(), false),
            None => (TagController::new(), true),
        };
        let hook = Rc::clone(&self.hook);
        let id = controller.subscribe(move |tags| (hook.borrow_mut())(tags));
        self.controller = Some(controller);
        self.owns_controller = owns;
        self.listener = Some(id);
    }

    fn unbind(&mut self) {
        if let Some(controller) = self.controller.take() {
            if let Some(id) = self.listener.take() {
                controller.unsubscribe(id);
            }
            if self.owns_controller {
                controller.dispose();
            }
        }
        self.owns_controller = false;
    }
}

impl fmt::Debug for HostBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBinding")
            .field("controller", &self.controller)
            .field("owns_controller", &self.owns_controller)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn render_counter() -> (HostBinding, Rc<Cell<u32>>) {
        let renders = Rc::new(Cell::new(0));
        let hook = Rc::clone(&renders);
        let binding = HostBinding::new(move |_tags| hook.set(hook.get() + 1));
        (binding, renders)
    }

    #[test]
    fn init_without_external_owns_a_controller() {
        let (mut binding, renders) = render_counter();
        binding.init(None);

        assert!(binding.is_bound());
        assert!(binding.owns_controller());

        let controller = binding.controller().unwrap().clone();
        controller.add(Tag::HOVERED);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn init_with_external_borrows_it() {
        let external = TagController::new();
        let (mut binding, renders) = render_counter();
        binding.init(Some(&external));

        assert!(!binding.owns_controller());
        assert!(binding.controller().unwrap().ptr_eq(&external));
        assert_eq!(external.listener_count(), 1);

        external.add(Tag::PRESSED);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn hook_fires_once_per_notification_with_post_state() {
        let observed = Rc::new(Cell::new(false));
        let hook = Rc::clone(&observed);
        let mut binding = HostBinding::new(move |tags| hook.set(tags.contains(&Tag::PRESSED)));
        binding.init(None);

        let controller = binding.controller().unwrap().clone();
        controller.add(Tag::PRESSED);
        assert!(observed.get());
        controller.remove(&Tag::PRESSED);
        assert!(!observed.get());
    }

    #[test]
    fn update_to_external_disposes_owned_and_leaves_one_listener() {
        let (mut binding, renders) = render_counter();
        binding.init(None);
        let owned = binding.controller().unwrap().clone();

        let external = TagController::new();
        binding.update(Some(&external));

        assert!(owned.is_disposed());
        assert!(!binding.owns_controller());
        assert!(binding.controller().unwrap().ptr_eq(&external));
        assert_eq!(external.listener_count(), 1);

        external.add(Tag::FOCUSED);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn update_with_same_external_is_a_no_op() {
        let external = TagController::new();
        let (mut binding, _renders) = render_counter();
        binding.init(Some(&external));

        binding.update(Some(&external));
        binding.update(Some(&external.clone()));
        assert_eq!(external.listener_count(), 1, "no listener leaked");
    }

    #[test]
    fn update_between_externals_moves_the_listener() {
        let first = TagController::new();
        let second = TagController::new();
        let (mut binding, renders) = render_counter();
        binding.init(Some(&first));

        binding.update(Some(&second));
        assert_eq!(first.listener_count(), 0);
        assert_eq!(second.listener_count(), 1);
        assert!(!first.is_disposed(), "external controllers are never disposed");

        first.add(Tag::HOVERED);
        assert_eq!(renders.get(), 0, "stale source must not re-render");
        second.add(Tag::HOVERED);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn update_from_external_to_none_creates_an_owned_controller() {
        let external = TagController::new();
        let (mut binding, renders) = render_counter();
        binding.init(Some(&external));

        binding.update(None);
        assert!(binding.owns_controller());
        assert_eq!(external.listener_count(), 0);
        assert!(!external.is_disposed());

        binding.controller().unwrap().add(Tag::LOADING);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn update_while_owned_and_still_no_external_is_a_no_op() {
        let (mut binding, _renders) = render_counter();
        binding.init(None);
        let owned = binding.controller().unwrap().clone();

        binding.update(None);
        assert!(binding.controller().unwrap().ptr_eq(&owned));
        assert!(!owned.is_disposed());
        assert_eq!(owned.listener_count(), 1);
    }

    #[test]
    fn dispose_releases_external_without_disposing_it() {
        let external = TagController::new();
        let (mut binding, _renders) = render_counter();
        binding.init(Some(&external));

        binding.dispose();
        assert!(binding.is_disposed());
        assert!(!binding.is_bound());
        assert_eq!(external.listener_count(), 0);
        assert!(!external.is_disposed());
    }

    #[test]
    fn dispose_disposes_owned_and_is_idempotent() {
        let (mut binding, _renders) = render_counter();
        binding.init(None);
        let owned = binding.controller().unwrap().clone();

        binding.dispose();
        binding.dispose();
        assert!(owned.is_disposed());
        assert!(binding.is_disposed());
    }

    #[test]
    #[should_panic(expected = "HostBinding::init called while already bound")]
    fn double_init_panics() {
        let (mut binding, _renders) = render_counter();
        binding.init(None);
        binding.init(None);
    }

    #[test]
    #[should_panic(expected = "HostBinding::init called after dispose")]
    fn init_after_dispose_panics() {
        let (mut binding, _renders) = render_counter();
        binding.init(None);
        binding.dispose();
        binding.init(None);
    }

    #[test]
    #[should_panic(expected = "HostBinding::update called before init")]
    fn update_before_init_panics() {
        let (mut binding, _renders) = render_counter();
        binding.update(None);
    }
}
