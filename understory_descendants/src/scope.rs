// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-container coordination of the reset → register → publish cycle.

use core::hash::Hash;

use crate::identity::DescendantId;
use crate::index::DescendantIndex;
use crate::props::{Descendant, DescendantProps};
use crate::registrar::Registrar;
use crate::registry::Registry;

/// A change in a scope's published total, reported by [`DescendantScope::commit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TotalChange {
    /// Total published before this commit.
    pub previous: usize,
    /// Total published by this commit.
    pub current: usize,
}

/// The scope owned by one container instance.
///
/// A scope outlives individual passes: create it when the container is
/// created and drop it with the container. Each pass of the container runs
/// three phases, in this order:
///
/// 1. [`compose`](Self::compose) during the container's own composition,
///    before any descendant composes. This starts a new epoch.
/// 2. [`register`](Self::register), called by descendants (usually through a
///    [`DescendantBinding`](crate::DescendantBinding)) during their own
///    composition or commit.
/// 3. [`commit`](Self::commit) once the container's whole subtree has
///    committed. This publishes the number of registered descendants.
///
/// If `commit` returns a [`TotalChange`], the host should run the container
/// once more so readers observe the new total. A second pass over an
/// unchanged tree publishes the same total and settles.
///
/// ```rust
/// use understory_descendants::{
///     DescendantProps, DescendantScope, IdentityAllocator, SequentialIds,
/// };
///
/// let mut ids = SequentialIds::new();
/// let (a, b) = (ids.allocate(), ids.allocate());
/// let mut scope: DescendantScope = DescendantScope::new();
///
/// scope.compose();
/// scope.register(a, DescendantProps::VISIBLE);
/// scope.register(b, DescendantProps::HIDDEN);
/// let change = scope.commit().unwrap();
/// assert_eq!((change.previous, change.current), (0, 2));
///
/// // Same tree again: nothing new to publish.
/// scope.compose();
/// scope.register(a, DescendantProps::VISIBLE);
/// scope.register(b, DescendantProps::HIDDEN);
/// assert!(scope.commit().is_none());
/// assert_eq!(scope.total(), 2);
/// ```
#[derive(Debug)]
pub struct DescendantScope<K = DescendantId, P = DescendantProps> {
    registrar: Registrar<K, P>,
    total: usize,
}

impl<K, P> Default for DescendantScope<K, P> {
    fn default() -> Self {
        Self {
            registrar: Registrar::default(),
            total: 0,
        }
    }
}

impl<K, P> DescendantScope<K, P> {
    /// The total published by the most recent [`commit`](Self::commit).
    ///
    /// This is a plain read; it never recomputes.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }
}

impl<K: Hash + Eq, P: Descendant> DescendantScope<K, P> {
    /// Create a scope with an empty registry and a published total of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope pre-sized for `capacity` descendants.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registrar: Registrar::with_capacity(capacity),
            total: 0,
        }
    }

    /// Start a pass: reset the registrar so descendants register from scratch.
    pub fn compose(&mut self) {
        self.registrar.reset();
    }

    /// Register a descendant for the current epoch. See [`Registrar::register`].
    #[doc(alias = "get")]
    #[inline]
    pub fn register(&mut self, id: K, props: P) -> DescendantIndex {
        self.registrar.register(id, props)
    }

    /// Finish a pass: publish the number of descendants registered this epoch.
    ///
    /// Returns the change when the published total differs from the previous
    /// one, and `None` otherwise.
    #[must_use = "a changed total requires another pass before readers observe it"]
    pub fn commit(&mut self) -> Option<TotalChange> {
        let current = self.registrar.registry().len();
        if current == self.total {
            return None;
        }
        let previous = core::mem::replace(&mut self.total, current);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            epoch = self.registrar.epoch(),
            previous,
            current,
            "descendant total changed"
        );
        Some(TotalChange { previous, current })
    }

    /// Run one full pass around `children`.
    ///
    /// This is the provider construct for hosts that compose synchronously:
    /// it resets, hands the scope to `children` so descendants can register,
    /// then publishes. The closure's output is passed through untouched.
    ///
    /// ```rust
    /// use understory_descendants::{DescendantIndex, DescendantScope};
    ///
    /// let mut scope: DescendantScope<&str, ()> = DescendantScope::new();
    /// let (indices, change) = scope.provide(|scope| {
    ///     ["a", "b", "c"].map(|id| scope.register(id, ()))
    /// });
    /// assert_eq!(indices[2], DescendantIndex::Visible(2));
    /// assert_eq!(change.map(|c| c.current), Some(3));
    /// ```
    pub fn provide<R>(
        &mut self,
        children: impl FnOnce(&mut Self) -> R,
    ) -> (R, Option<TotalChange>) {
        self.compose();
        let out = children(&mut *self);
        let change = self.commit();
        (out, change)
    }

    /// The live registrar.
    #[inline]
    pub fn registrar(&self) -> &Registrar<K, P> {
        &self.registrar
    }

    /// The live registrations for this epoch.
    #[inline]
    pub fn registry(&self) -> &Registry<K, P> {
        self.registrar.registry()
    }

    /// The current epoch. See [`Registrar::epoch`].
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.registrar.epoch()
    }
}

/// Explicit phase callbacks a host invokes around a container's subtree.
///
/// This lets a host drive scopes of different identity or props types
/// uniformly, for example as `&mut dyn PassHooks`.
pub trait PassHooks {
    /// Runs during the owner's composition, before any child composes.
    fn before_children(&mut self);

    /// Runs after the owner's whole subtree has committed.
    ///
    /// Returns `true` when published state changed and the host should run
    /// the owner once more.
    fn after_subtree_commit(&mut self) -> bool;
}

impl<K: Hash + Eq, P: Descendant> PassHooks for DescendantScope<K, P> {
    fn before_children(&mut self) {
        self.compose();
    }

    fn after_subtree_commit(&mut self) -> bool {
        self.commit().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Scope = DescendantScope<u32, DescendantProps>;

    #[test]
    fn starts_with_zero_total() {
        let scope = Scope::new();
        assert_eq!(scope.total(), 0);
        assert!(scope.registry().is_empty());
    }

    #[test]
    fn compose_discards_previous_epoch() {
        let mut scope = Scope::new();
        scope.compose();
        scope.register(1, DescendantProps::VISIBLE);
        scope.register(2, DescendantProps::VISIBLE);
        let _ = scope.commit();

        scope.compose();
        assert!(scope.registry().is_empty());
        // Published total survives until the next commit.
        assert_eq!(scope.total(), 2);
        assert_eq!(scope.register(2, DescendantProps::VISIBLE), DescendantIndex::Visible(0));
    }

    #[test]
    fn commit_reports_only_changes() {
        let mut scope = Scope::new();
        scope.compose();
        assert!(scope.commit().is_none(), "empty scope already publishes zero");

        scope.compose();
        scope.register(1, DescendantProps::HIDDEN);
        assert_eq!(
            scope.commit(),
            Some(TotalChange {
                previous: 0,
                current: 1
            })
        );
        assert_eq!(scope.total(), 1);

        scope.compose();
        let _ = scope.commit();
        assert_eq!(scope.total(), 0);
    }

    #[test]
    fn provide_settles_after_one_extra_pass() {
        let mut scope = Scope::new();
        let children = |scope: &mut Scope| {
            for id in 1..=3 {
                scope.register(id, DescendantProps::VISIBLE);
            }
        };
        let ((), first) = scope.provide(children);
        assert!(first.is_some());
        let ((), second) = scope.provide(children);
        assert!(second.is_none());
        assert_eq!(scope.total(), 3);
        assert_eq!(scope.epoch(), 2);
    }

    #[test]
    fn hooks_drive_scopes_as_trait_objects() {
        let mut plain: DescendantScope<u32, ()> = DescendantScope::new();
        let mut rich = Scope::with_capacity(2);

        let all: [&mut dyn PassHooks; 2] = [&mut plain, &mut rich];
        for hooks in all {
            hooks.before_children();
        }
        plain.register(1, ());
        rich.register(1, DescendantProps::HIDDEN);
        rich.register(2, DescendantProps::VISIBLE);

        let rerun: [bool; 2] = [
            plain.after_subtree_commit(),
            rich.after_subtree_commit(),
        ];
        assert_eq!(rerun, [true, true]);
        assert_eq!((plain.total(), rich.total()), (1, 2));
        assert!(!rich.after_subtree_commit());
    }
}
