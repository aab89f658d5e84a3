// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed storage of registered descendants.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::index::DescendantIndex;

/// What a scope remembers about one registered descendant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescendantRecord<P> {
    /// Index assigned at first registration in the current epoch.
    pub index: DescendantIndex,
    /// Props from the most recent registration call.
    pub props: P,
}

/// Map from descendant identity to its [`DescendantRecord`].
///
/// Iteration order is unspecified and does **not** follow index order. Use
/// [`Registry::ordered`] or [`Registry::find_index`] when order matters.
///
/// A `Registry` is only ever mutated through its owning
/// [`Registrar`](crate::Registrar); everyone else gets shared access.
#[derive(Debug)]
pub struct Registry<K, P> {
    records: HashMap<K, DescendantRecord<P>>,
}

impl<K, P> Default for Registry<K, P> {
    fn default() -> Self {
        Self {
            records: HashMap::default(),
        }
    }
}

impl<K: Hash + Eq, P> Registry<K, P> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn records_mut(&mut self) -> &mut HashMap<K, DescendantRecord<P>> {
        &mut self.records
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of distinct identities registered, hidden ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has registered since the last reset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `id` has registered since the last reset.
    pub fn contains(&self, id: &K) -> bool {
        self.records.contains_key(id)
    }

    /// The record for `id`, if registered.
    pub fn get(&self, id: &K) -> Option<&DescendantRecord<P>> {
        self.records.get(id)
    }

    /// All records, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &DescendantRecord<P>)> + '_ {
        self.records.iter()
    }

    /// Number of records holding a visible index.
    pub fn visible_len(&self) -> usize {
        self.records
            .values()
            .filter(|r| !r.index.is_hidden())
            .count()
    }

    /// Number of records excluded from ordering.
    pub fn hidden_len(&self) -> usize {
        self.len() - self.visible_len()
    }

    /// Visible records sorted by their assigned index.
    pub fn ordered(&self) -> Vec<(&K, &DescendantRecord<P>)> {
        let mut out: Vec<_> = self
            .records
            .iter()
            .filter(|(_, r)| !r.index.is_hidden())
            .collect();
        out.sort_unstable_by_key(|(_, r)| r.index);
        out
    }

    /// The descendant currently holding visible index `index`.
    ///
    /// This is a linear scan; callers stepping through every index should use
    /// [`ordered`](Self::ordered) instead.
    pub fn find_index(&self, index: usize) -> Option<(&K, &DescendantRecord<P>)> {
        let wanted = DescendantIndex::Visible(index);
        self.records.iter().find(|(_, r)| r.index == wanted)
    }
}
