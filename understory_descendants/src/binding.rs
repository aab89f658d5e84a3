// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-descendant integration with the nearest enclosing scope.

use core::hash::Hash;
use core::marker::PhantomData;

use crate::error::MissingScopeError;
use crate::identity::{DescendantId, IdentityAllocator};
use crate::index::DescendantIndex;
use crate::props::{Descendant, DescendantProps};
use crate::scope::DescendantScope;

/// A change in a binding's local index, reported by [`DescendantBinding::commit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexChange {
    /// Index the descendant held before this commit.
    pub previous: DescendantIndex,
    /// Index the descendant holds now.
    pub current: DescendantIndex,
}

/// Binds one descendant instance into its nearest [`DescendantScope`].
///
/// The binding keeps the descendant's identity for its whole lifetime and a
/// local copy of its index. The host calls:
///
/// - [`mount`](Self::mount) once, when the descendant is created, which
///   registers immediately so the first composition already has an index;
/// - [`compose`](Self::compose) during *every* later composition of the
///   descendant, so the descendant registers in composition order (a parent
///   descendant before the descendants nested under it) even though the host
///   commits children first;
/// - [`maybe_index`](Self::maybe_index) or [`index`](Self::index) while
///   composing, to read the local index;
/// - [`commit`](Self::commit) after *every* commit of the descendant, with the
///   descendant's current props, so the scope tracks live props (in particular
///   the hidden flag) and the local index follows the scope.
///
/// Whether a scope is present is decided by the host on each call: pass the
/// nearest enclosing scope, or `None` if there is none.
#[derive(Debug)]
pub struct DescendantBinding<K = DescendantId, P = DescendantProps> {
    id: K,
    index: DescendantIndex,
    _props: PhantomData<fn(P)>,
}

impl<K: Clone + Hash + Eq, P: Descendant> DescendantBinding<K, P> {
    /// Create a binding for `id` and make a best-effort first registration.
    ///
    /// Without a scope the local index starts out as
    /// [`DescendantIndex::Hidden`]; it is not observable through the accessors
    /// until a scope is present.
    pub fn mount(id: K, scope: Option<&mut DescendantScope<K, P>>, props: P) -> Self {
        let index = match scope {
            Some(scope) => scope.register(id.clone(), props),
            None => DescendantIndex::Hidden,
        };
        Self {
            id,
            index,
            _props: PhantomData,
        }
    }

    /// Like [`mount`](Self::mount), drawing a fresh identity from `ids`.
    pub fn mount_with<A>(
        ids: &mut A,
        scope: Option<&mut DescendantScope<K, P>>,
        props: P,
    ) -> Self
    where
        A: IdentityAllocator<Id = K>,
    {
        Self::mount(ids.allocate(), scope, props)
    }

    /// The identity this descendant registers under.
    #[inline]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// The local index, or `None` when there is no enclosing scope.
    ///
    /// `None` means "not inside a scope"; a hidden descendant inside a scope
    /// reads as `Some(DescendantIndex::Hidden)`.
    #[inline]
    pub fn maybe_index(&self, scope: Option<&DescendantScope<K, P>>) -> Option<DescendantIndex> {
        scope.map(|_| self.index)
    }

    /// The local index, failing when there is no enclosing scope.
    ///
    /// ```rust
    /// use understory_descendants::{DescendantBinding, DescendantProps, MissingScopeError};
    ///
    /// let binding: DescendantBinding<u32> =
    ///     DescendantBinding::mount(7, None, DescendantProps::VISIBLE);
    /// assert_eq!(binding.index(None), Err(MissingScopeError::Index));
    /// assert_eq!(binding.maybe_index(None), None);
    /// ```
    #[inline]
    pub fn index(
        &self,
        scope: Option<&DescendantScope<K, P>>,
    ) -> Result<DescendantIndex, MissingScopeError> {
        self.maybe_index(scope).ok_or(MissingScopeError::Index)
    }

    /// Register during the descendant's composition and refresh the local index.
    ///
    /// Returns the index to render with, or `None` when there is no enclosing
    /// scope. Since the scope reset before its descendants composed, this is
    /// where each descendant claims its place for the new epoch.
    pub fn compose(
        &mut self,
        scope: Option<&mut DescendantScope<K, P>>,
        props: P,
    ) -> Option<DescendantIndex> {
        let _ = self.refresh(scope?, props);
        Some(self.index)
    }

    /// Re-register after the descendant committed and refresh the local index.
    ///
    /// Returns the change when the local index moved, which the host should
    /// treat as a request to compose this descendant again. Does nothing
    /// without a scope.
    pub fn commit(
        &mut self,
        scope: Option<&mut DescendantScope<K, P>>,
        props: P,
    ) -> Option<IndexChange> {
        self.refresh(scope?, props)
    }

    fn refresh(&mut self, scope: &mut DescendantScope<K, P>, props: P) -> Option<IndexChange> {
        let current = scope.register(self.id.clone(), props);
        if current == self.index {
            return None;
        }
        let previous = core::mem::replace(&mut self.index, current);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            previous = previous.to_raw(),
            current = current.to_raw(),
            "descendant index changed"
        );
        Some(IndexChange { previous, current })
    }
}
