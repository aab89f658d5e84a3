// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index allocation over a [`Registry`].

use core::hash::Hash;

use hashbrown::hash_map::Entry;

use crate::index::DescendantIndex;
use crate::props::Descendant;
use crate::registry::{DescendantRecord, Registry};

/// Owns a [`Registry`] plus the counter that hands out visible indices.
///
/// Indices are assigned lazily in first-registration order. As long as the
/// host visits descendants in the same relative order every epoch, each
/// descendant receives the same index every epoch.
///
/// ```rust
/// use understory_descendants::{DescendantIndex, DescendantProps, Registrar};
///
/// let mut reg: Registrar<&str, DescendantProps> = Registrar::new();
/// assert_eq!(reg.register("a", DescendantProps::VISIBLE), DescendantIndex::Visible(0));
/// assert_eq!(reg.register("b", DescendantProps::HIDDEN), DescendantIndex::Hidden);
/// assert_eq!(reg.register("c", DescendantProps::VISIBLE), DescendantIndex::Visible(1));
///
/// // Re-registering keeps the index.
/// assert_eq!(reg.register("a", DescendantProps::VISIBLE), DescendantIndex::Visible(0));
/// assert_eq!(reg.registry().len(), 3);
///
/// reg.reset();
/// assert!(reg.registry().is_empty());
/// ```
#[derive(Debug)]
pub struct Registrar<K, P> {
    registry: Registry<K, P>,
    next_index: usize,
    epoch: u64,
}

impl<K, P> Default for Registrar<K, P> {
    fn default() -> Self {
        Self {
            registry: Registry::default(),
            next_index: 0,
            epoch: 0,
        }
    }
}

impl<K: Hash + Eq, P: Descendant> Registrar<K, P> {
    /// Create an empty registrar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registrar whose registry can hold `capacity` descendants
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: Registry::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Register `id` with its current `props` and return its index.
    ///
    /// The first call for an identity in an epoch assigns its index: hidden
    /// descendants get [`DescendantIndex::Hidden`], visible ones take the next
    /// counter value. Later calls in the same epoch never reassign the index,
    /// even if the hidden flag changed; they only overwrite the stored props.
    #[doc(alias = "get")]
    pub fn register(&mut self, id: K, props: P) -> DescendantIndex {
        match self.registry.records_mut().entry(id) {
            Entry::Occupied(mut slot) => {
                let record = slot.get_mut();
                record.props = props;
                record.index
            }
            Entry::Vacant(slot) => {
                let index = if props.hidden() {
                    DescendantIndex::Hidden
                } else {
                    let index = self.next_index;
                    self.next_index += 1;
                    DescendantIndex::Visible(index)
                };
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    epoch = self.epoch,
                    index = index.to_raw(),
                    "descendant registered"
                );
                slot.insert(DescendantRecord { index, props });
                index
            }
        }
    }

    /// Forget every registration and restart the counter at zero.
    ///
    /// Safe to call on an already empty registrar; it still starts a new epoch.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.next_index = 0;
        self.epoch = self.epoch.wrapping_add(1);
        #[cfg(feature = "tracing")]
        tracing::trace!(epoch = self.epoch, "descendant registrar reset");
    }

    /// Read-only view of the live registrations.
    #[inline]
    pub fn registry(&self) -> &Registry<K, P> {
        &self.registry
    }

    /// The index the next visible registration will receive.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Number of resets performed so far.
    ///
    /// Indices are only comparable when they were handed out in the same epoch.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
