// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change-notifying ownership of a [`TagSet`].
//!
//! [`TagController`] owns the set of active tags for one interactive
//! element and is the only sanctioned way to mutate it. Every mutation that
//! produces an externally observable net change runs the registered
//! listeners synchronously, after the set has been updated, before the
//! mutating call returns.
//!
//! Single add/remove style operations notify only on actual change; the
//! bulk operations ([`set_pairs`](TagController::set_pairs),
//! [`merge`](TagController::merge), [`replace`](TagController::replace),
//! [`clear`](TagController::clear)) notify unconditionally, treating every
//! call as a potential full replace. That asymmetry is deliberate: it keeps
//! reasoning about bulk updates simple for embedders that recompute the
//! whole set per frame.
//!
//! ```rust
//! use trellis_state::{Tag, TagController};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let controller = TagController::new();
//! let fired = Rc::new(Cell::new(0));
//! let seen = fired.clone();
//! controller.subscribe(move |_tags| seen.set(seen.get() + 1));
//!
//! controller.add(Tag::HOVERED);
//! controller.add(Tag::HOVERED); // no change, no notification
//! assert_eq!(fired.get(), 1);
//! assert!(controller.is_hovered());
//! ```
//!
//! A `TagController` is a cheap-clone handle (`Rc` inside); cloning shares
//! the same underlying set and listener table. That is how a controller
//! supplied from outside a host is shared among several consumers, each
//! subscribing and unsubscribing independently. The engine does not
//! arbitrate conflicting mutations between sharers; ordering is call order.
//!
//! Mutating a controller from inside one of its own listeners (through a
//! cloned handle) is not detected: a listener that unconditionally
//! re-triggers the mutation that fired it will recurse until it overflows
//! the stack. Breaking such cycles is the embedder's responsibility.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::set::TagSet;
use crate::tag::Tag;

/// A handle identifying one subscribed listener.
///
/// Returned by [`TagController::subscribe`]; pass it back to
/// [`TagController::unsubscribe`] to remove the listener.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Debug for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListenerId").field(&self.0).finish()
    }
}

/// Named-boolean seed for [`TagController::with_initial`].
///
/// Each `true` field activates the corresponding built-in tag. Designed for
/// struct-update syntax:
///
/// ```rust
/// use trellis_state::{InitialTags, TagController};
///
/// let controller = TagController::with_initial(InitialTags {
///     pressed: true,
///     ..InitialTags::default()
/// });
/// assert!(controller.is_pressed());
/// assert!(!controller.is_hovered());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InitialTags {
    /// Activate [`Tag::HOVERED`].
    pub hovered: bool,
    /// Activate [`Tag::FOCUSED`].
    pub focused: bool,
    /// Activate [`Tag::PRESSED`].
    pub pressed: bool,
    /// Activate [`Tag::DRAGGED`].
    pub dragged: bool,
    /// Activate [`Tag::SELECTED`].
    pub selected: bool,
    /// Activate [`Tag::INDETERMINATE`].
    pub indeterminate: bool,
    /// Activate [`Tag::DISABLED`].
    pub disabled: bool,
    /// Activate [`Tag::ERROR`].
    pub error: bool,
    /// Activate [`Tag::LOADING`].
    pub loading: bool,
}

impl From<InitialTags> for TagSet {
    fn from(initial: InitialTags) -> Self {
        Self::from_pairs([
            (Tag::HOVERED, initial.hovered),
            (Tag::FOCUSED, initial.focused),
            (Tag::PRESSED, initial.pressed),
            (Tag::DRAGGED, initial.dragged),
            (Tag::SELECTED, initial.selected),
            (Tag::INDETERMINATE, initial.indeterminate),
            (Tag::DISABLED, initial.disabled),
            (Tag::ERROR, initial.error),
            (Tag::LOADING, initial.loading),
        ])
    }
}

type ListenerFn = Rc<RefCell<dyn FnMut(&TagSet)>>;

struct ListenerEntry {
    id: ListenerId,
    callback: ListenerFn,
}

struct ControllerInner {
    tags: RefCell<TagSet>,
    listeners: RefCell<Vec<ListenerEntry>>,
    next_listener: Cell<u64>,
    disposed: Cell<bool>,
}

/// Owns a [`TagSet`] and notifies listeners on change.
///
/// See the [module docs](self) for notification and sharing semantics.
///
/// # Lifecycle
///
/// A controller lives for its host's active lifetime and must be
/// [`dispose`](Self::dispose)d at teardown, which drops every listener.
/// Mutating or subscribing after dispose is a lifecycle bug in the host and
/// panics rather than being silently ignored.
#[derive(Clone)]
pub struct TagController {
    inner: Rc<ControllerInner>,
}

impl TagController {
    /// Creates a controller with no active tags.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tags(TagSet::new())
    }

    /// Creates a controller pre-seeded with the given tags.
    #[must_use]
    pub fn with_tags(tags: TagSet) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                tags: RefCell::new(tags),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                disposed: Cell::new(false),
            }),
        }
    }

    /// Creates a controller from `(tag, active)` pairs, seeding the tags
    /// whose flag is `true`.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Tag, bool)>) -> Self {
        Self::with_tags(TagSet::from_pairs(pairs))
    }

    /// Creates a controller from named built-in flags.
    #[must_use]
    pub fn with_initial(initial: InitialTags) -> Self {
        Self::with_tags(initial.into())
    }

    fn assert_live(&self, operation: &str) {
        assert!(
            !self.inner.disposed.get(),
            "TagController::{operation} called after dispose"
        );
    }

    /// Runs every listener with a snapshot of the current set.
    ///
    /// Listeners are invoked in subscription order. The listener table is
    /// snapshotted first so a callback may subscribe or unsubscribe without
    /// invalidating the iteration: a listener removed mid-notification is
    /// skipped, one added mid-notification waits for the next notification.
    fn notify(&self) {
        let snapshot = self.inner.tags.borrow().clone();
        let entries: Vec<(ListenerId, ListenerFn)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.callback)))
            .collect();
        for (id, callback) in entries {
            let live = self
                .inner
                .listeners
                .borrow()
                .iter()
                .any(|entry| entry.id == id);
            if live {
                (callback.borrow_mut())(&snapshot);
            }
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Activates a tag. Notifies listeners only if it was not already
    /// active. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if the controller has been disposed.
    pub fn add(&self, tag: Tag) {
        self.assert_live("add");
        let changed = self.inner.tags.borrow_mut().insert(tag);
        if changed {
            self.notify();
        }
    }

    /// Deactivates a tag. Notifies listeners only if it was active.
    /// Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if the controller has been disposed.
    pub fn remove(&self, tag: &Tag) {
        self.assert_live("remove");
        let changed = self.inner.tags.borrow_mut().remove(tag);
        if changed {
            self.notify();
        }
    }

    /// Flips a tag's membership.
    pub fn toggle(&self, tag: Tag) {
        if self.contains(&tag) {
            self.remove(&tag);
        } else {
            self.add(tag);
        }
    }

    /// Sets a tag's membership to exactly `active`.
    ///
    /// Delegates to [`add`](Self::add) / [`remove`](Self::remove), so a
    /// call that changes nothing notifies nobody.
    pub fn set(&self, tag: Tag, active: bool) {
        if active {
            self.add(tag);
        } else {
            self.remove(&tag);
        }
    }

    /// Replaces the whole set with exactly the tags whose flag is `true`.
    ///
    /// Always notifies, even when the resulting set equals the previous
    /// one. Bulk updates are treated as potential full replaces.
    ///
    /// # Panics
    ///
    /// Panics if the controller has been disposed.
    pub fn set_pairs(&self, pairs: impl IntoIterator<Item = (Tag, bool)>) {
        self.assert_live("set_pairs");
        *self.inner.tags.borrow_mut() = TagSet::from_pairs(pairs);
        self.notify();
    }

    /// Unions the given tags into the set. Always notifies.
    ///
    /// # Panics
    ///
    /// Panics if the controller has been disposed.
    pub fn merge(&self, tags: impl IntoIterator<Item = Tag>) {
        self.assert_live("merge");
        self.inner.tags.borrow_mut().extend(tags);
        self.notify();
    }

    /// Replaces the whole set. Always notifies.
    ///
    /// # Panics
    ///
    /// Panics if the controller has been disposed.
    pub fn replace(&self, tags: TagSet) {
        self.assert_live("replace");
        *self.inner.tags.borrow_mut() = tags;
        self.notify();
    }

    /// Empties the set. Always notifies.
    ///
    /// # Panics
    ///
    /// Panics if the controller has been disposed.
    pub fn clear(&self) {
        self.assert_live("clear");
        self.inner.tags.borrow_mut().clear();
        self.notify();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns a snapshot of the current tag set.
    #[must_use]
    pub fn tags(&self) -> TagSet {
        self.inner.tags.borrow().clone()
    }

    /// Returns `true` if the given tag is active.
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.inner.tags.borrow().contains(tag)
    }

    /// Returns the number of active tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.tags.borrow().len()
    }

    /// Returns `true` if no tags are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.tags.borrow().is_empty()
    }

    /// Returns `true` if [`Tag::HOVERED`] is active.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.contains(&Tag::HOVERED)
    }

    /// Returns `true` if [`Tag::FOCUSED`] is active.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.contains(&Tag::FOCUSED)
    }

    /// Returns `true` if [`Tag::PRESSED`] is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.contains(&Tag::PRESSED)
    }

    /// Returns `true` if [`Tag::DRAGGED`] is active.
    #[must_use]
    pub fn is_dragged(&self) -> bool {
        self.contains(&Tag::DRAGGED)
    }

    /// Returns `true` if [`Tag::SELECTED`] is active.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.contains(&Tag::SELECTED)
    }

    /// Returns `true` if [`Tag::INDETERMINATE`] is active.
    #[must_use]
    pub fn is_indeterminate(&self) -> bool {
        self.contains(&Tag::INDETERMINATE)
    }

    /// Returns `true` if [`Tag::DISABLED`] is active.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.contains(&Tag::DISABLED)
    }

    /// Returns `true` if [`Tag::ERROR`] is active.
    #[must_use]
    pub fn is_errored(&self) -> bool {
        self.contains(&Tag::ERROR)
    }

    /// Returns `true` if [`Tag::LOADING`] is active.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.contains(&Tag::LOADING)
    }

    // =========================================================================
    // Listeners and lifecycle
    // =========================================================================

    /// Registers a listener, returning its handle.
    ///
    /// The listener is called synchronously, exactly once per notifying
    /// mutation, with the post-mutation tag set. Listeners run in
    /// subscription order. A panic inside a listener propagates to the
    /// mutating caller; the set mutation has already completed by then, so
    /// controller state is never corrupted by a faulty listener.
    ///
    /// # Panics
    ///
    /// Panics if the controller has been disposed.
    pub fn subscribe(&self, listener: impl FnMut(&TagSet) + 'static) -> ListenerId {
        self.assert_live("subscribe");
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push(ListenerEntry {
            id,
            callback: Rc::new(RefCell::new(listener)),
        });
        id
    }

    /// Removes a listener, returning `true` if it was registered.
    ///
    /// Unsubscribing an unknown or already-removed id (including any id
    /// after [`dispose`](Self::dispose)) returns `false`; teardown paths
    /// may call this unconditionally.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|entry| entry.id != id);
        listeners.len() != before
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Drops every listener and marks the controller disposed.
    ///
    /// Idempotent. After dispose no notification is ever delivered, and
    /// mutation or subscription panics (see the struct docs).
    pub fn dispose(&self) {
        if self.inner.disposed.get() {
            return;
        }
        self.inner.listeners.borrow_mut().clear();
        self.inner.disposed.set(true);
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Returns `true` if `self` and `other` are handles to the same
    /// underlying controller.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // =========================================================================
    // Bound toggles
    // =========================================================================

    /// Returns a callback that sets `tag` to the `bool` it is handed.
    ///
    /// The callback short-circuits when the requested state equals current
    /// membership, so a UI input that re-fires the same value repeatedly
    /// causes no redundant notification. Suitable for handing directly to
    /// an input widget's change hook.
    ///
    /// ```rust
    /// use trellis_state::{InitialTags, Tag, TagController};
    ///
    /// let controller = TagController::with_initial(InitialTags {
    ///     pressed: true,
    ///     ..InitialTags::default()
    /// });
    /// let mut on_press = controller.bound_toggle(Tag::PRESSED);
    /// on_press(true); // already pressed, nothing happens
    /// on_press(false); // removes the tag, listeners fire once
    /// assert!(!controller.is_pressed());
    /// ```
    #[must_use]
    pub fn bound_toggle(&self, tag: Tag) -> impl FnMut(bool) + 'static {
        let controller = self.clone();
        move |active| {
            if controller.contains(&tag) != active {
                controller.set(tag.clone(), active);
            }
        }
    }

    /// Like [`bound_toggle`](Self::bound_toggle), additionally invoking
    /// `on_changed(active)` after each actual change.
    #[must_use]
    pub fn bound_toggle_with(
        &self,
        tag: Tag,
        mut on_changed: impl FnMut(bool) + 'static,
    ) -> impl FnMut(bool) + 'static {
        let controller = self.clone();
        move |active| {
            if controller.contains(&tag) != active {
                controller.set(tag.clone(), active);
                on_changed(active);
            }
        }
    }
}

impl Default for TagController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TagController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagController")
            .field("tags", &*self.inner.tags.borrow())
            .field("listeners", &self.listener_count())
            .field("disposed", &self.inner.disposed.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn counted(controller: &TagController) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        controller.subscribe(move |_tags| seen.set(seen.get() + 1));
        count
    }

    #[test]
    fn add_notifies_once_per_net_change() {
        let controller = TagController::new();
        let fired = counted(&controller);

        controller.add(Tag::HOVERED);
        controller.add(Tag::HOVERED);
        assert_eq!(fired.get(), 1);
        assert!(controller.is_hovered());
    }

    #[test]
    fn remove_notifies_only_when_present() {
        let controller = TagController::from_pairs([(Tag::HOVERED, true)]);
        let fired = counted(&controller);

        controller.remove(&Tag::HOVERED);
        assert_eq!(fired.get(), 1);
        controller.remove(&Tag::HOVERED);
        assert_eq!(fired.get(), 1);
        assert!(!controller.is_hovered());
    }

    #[test]
    fn toggle_flips_membership() {
        let controller = TagController::new();
        controller.toggle(Tag::SELECTED);
        assert!(controller.is_selected());
        controller.toggle(Tag::SELECTED);
        assert!(!controller.is_selected());
    }

    #[test]
    fn set_is_a_no_op_when_already_in_state() {
        let controller = TagController::new();
        let fired = counted(&controller);

        controller.set(Tag::FOCUSED, false);
        assert_eq!(fired.get(), 0);
        controller.set(Tag::FOCUSED, true);
        controller.set(Tag::FOCUSED, true);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn set_pairs_replaces_and_always_notifies() {
        let controller = TagController::from_pairs([(Tag::HOVERED, true)]);
        let fired = counted(&controller);

        controller.set_pairs([(Tag::PRESSED, true), (Tag::HOVERED, false)]);
        assert!(controller.is_pressed());
        assert!(!controller.is_hovered());
        assert_eq!(fired.get(), 1);

        // Identical outcome still notifies.
        controller.set_pairs([(Tag::PRESSED, true)]);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn merge_unions_and_always_notifies() {
        let controller = TagController::from_pairs([(Tag::HOVERED, true)]);
        let fired = counted(&controller);

        controller.merge([Tag::PRESSED]);
        let expected: TagSet = [Tag::HOVERED, Tag::PRESSED].into_iter().collect();
        assert_eq!(controller.tags(), expected);
        assert_eq!(fired.get(), 1);

        controller.merge([Tag::PRESSED]);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn replace_is_exact_regardless_of_prior_contents() {
        let controller = TagController::from_pairs([(Tag::HOVERED, true), (Tag::FOCUSED, true)]);
        let fired = counted(&controller);

        let replacement: TagSet = [Tag::DISABLED].into_iter().collect();
        controller.replace(replacement.clone());
        assert_eq!(controller.tags(), replacement);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn clear_empties_and_always_notifies() {
        let controller = TagController::new();
        let fired = counted(&controller);

        controller.clear();
        assert!(controller.is_empty());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn listeners_observe_post_state() {
        let controller = TagController::new();
        let observed = Rc::new(Cell::new(false));
        let seen = Rc::clone(&observed);
        controller.subscribe(move |tags| seen.set(tags.contains(&Tag::PRESSED)));

        controller.add(Tag::PRESSED);
        assert!(observed.get());
        controller.remove(&Tag::PRESSED);
        assert!(!observed.get());
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let controller = TagController::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let log = Rc::clone(&order);
            controller.subscribe(move |_tags| log.borrow_mut().push(label));
        }

        controller.add(Tag::HOVERED);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let controller = TagController::new();
        let fired = Rc::new(Cell::new(0));
        let seen = Rc::clone(&fired);
        let id = controller.subscribe(move |_tags| seen.set(seen.get() + 1));

        controller.add(Tag::HOVERED);
        assert!(controller.unsubscribe(id));
        controller.add(Tag::PRESSED);
        assert_eq!(fired.get(), 1);

        // Unknown id is reported, not an error.
        assert!(!controller.unsubscribe(id));
    }

    #[test]
    fn listener_unsubscribed_during_notification_is_skipped() {
        let controller = TagController::new();
        let fired = Rc::new(Cell::new(0));

        // The first listener unsubscribes the second before it runs.
        let remover: Rc<RefCell<Option<(TagController, ListenerId)>>> =
            Rc::new(RefCell::new(None));
        let hook = Rc::clone(&remover);
        controller.subscribe(move |_tags| {
            if let Some((controller, id)) = hook.borrow_mut().take() {
                controller.unsubscribe(id);
            }
        });
        let seen = Rc::clone(&fired);
        let second = controller.subscribe(move |_tags| seen.set(seen.get() + 1));
        *remover.borrow_mut() = Some((controller.clone(), second));

        controller.add(Tag::HOVERED);
        assert_eq!(fired.get(), 0);
        controller.add(Tag::PRESSED);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn listener_subscribed_during_notification_waits_a_round() {
        let controller = TagController::new();
        let fired = Rc::new(Cell::new(0));

        let outer = controller.clone();
        let seen = Rc::clone(&fired);
        let armed = Rc::new(Cell::new(true));
        let once = Rc::clone(&armed);
        controller.subscribe(move |_tags| {
            if once.get() {
                once.set(false);
                let inner_seen = Rc::clone(&seen);
                let _ = outer.subscribe(move |_tags| inner_seen.set(inner_seen.get() + 1));
            }
        });

        controller.add(Tag::HOVERED);
        assert_eq!(fired.get(), 0, "new listener must not run this round");
        controller.add(Tag::PRESSED);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dispose_drops_listeners_and_is_idempotent() {
        let controller = TagController::new();
        let _ = counted(&controller);
        assert_eq!(controller.listener_count(), 1);

        controller.dispose();
        assert!(controller.is_disposed());
        assert_eq!(controller.listener_count(), 0);
        controller.dispose();
        assert!(controller.is_disposed());
    }

    #[test]
    #[should_panic(expected = "TagController::add called after dispose")]
    fn mutation_after_dispose_panics() {
        let controller = TagController::new();
        controller.dispose();
        controller.add(Tag::HOVERED);
    }

    #[test]
    #[should_panic(expected = "TagController::subscribe called after dispose")]
    fn subscribe_after_dispose_panics() {
        let controller = TagController::new();
        controller.dispose();
        let _ = controller.subscribe(|_tags| {});
    }

    #[test]
    fn initial_flags_seed_the_set() {
        let controller = TagController::with_initial(InitialTags {
            pressed: true,
            ..InitialTags::default()
        });
        assert!(controller.is_pressed());
        assert!(!controller.is_hovered());
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn query_sugar_matches_contains() {
        let controller = TagController::with_initial(InitialTags {
            disabled: true,
            error: true,
            loading: true,
            indeterminate: true,
            dragged: true,
            selected: true,
            focused: true,
            ..InitialTags::default()
        });
        assert!(controller.is_disabled());
        assert!(controller.is_errored());
        assert!(controller.is_loading());
        assert!(controller.is_indeterminate());
        assert!(controller.is_dragged());
        assert!(controller.is_selected());
        assert!(controller.is_focused());
        assert!(!controller.is_pressed());
        assert!(!controller.is_hovered());
    }

    #[test]
    fn bound_toggle_short_circuits_on_same_value() {
        let controller = TagController::with_initial(InitialTags {
            pressed: true,
            ..InitialTags::default()
        });
        let fired = counted(&controller);
        let mut on_press = controller.bound_toggle(Tag::PRESSED);

        on_press(true);
        assert_eq!(fired.get(), 0);
        on_press(false);
        assert_eq!(fired.get(), 1);
        assert!(!controller.is_pressed());
    }

    #[test]
    fn bound_toggle_with_reports_actual_changes_only() {
        let controller = TagController::new();
        let reported = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&reported);
        let mut on_hover = controller.bound_toggle_with(Tag::HOVERED, move |active| {
            log.borrow_mut().push(active);
        });

        on_hover(false); // already inactive
        on_hover(true);
        on_hover(true); // redundant
        on_hover(false);
        assert_eq!(*reported.borrow(), vec![true, false]);
    }

    #[test]
    fn clones_share_state_and_identity() {
        let controller = TagController::new();
        let sharer = controller.clone();
        assert!(controller.ptr_eq(&sharer));
        assert!(!controller.ptr_eq(&TagController::new()));

        sharer.add(Tag::SELECTED);
        assert!(controller.is_selected());
    }

    #[test]
    fn independent_subscribers_on_a_shared_controller() {
        let controller = TagController::new();
        let sharer = controller.clone();
        let a = counted(&controller);
        let b = counted(&sharer);

        controller.add(Tag::HOVERED);
        assert_eq!((a.get(), b.get()), (1, 1));

        sharer.add(Tag::PRESSED);
        assert_eq!((a.get(), b.get()), (2, 2));
    }
}
