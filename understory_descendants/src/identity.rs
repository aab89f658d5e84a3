// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity allocation for descendants.
//!
//! A descendant's identity must be unique among the live descendants of a
//! scope and stable for the descendant's lifetime. It must not be derived from
//! the descendant's position or props, otherwise reordering siblings would
//! shuffle registrations between them.

use core::fmt;
use core::num::NonZeroU64;

/// Source of fresh descendant identities.
///
/// Hosts that already have a stable per-instance key (a widget id, a fiber
/// key) can implement this over their own type and skip [`DescendantId`]
/// entirely.
pub trait IdentityAllocator {
    /// Identity type handed out by this allocator.
    type Id;

    /// Produce an identity that has not been handed out before.
    fn allocate(&mut self) -> Self::Id;
}

/// Opaque identity for one descendant instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescendantId(NonZeroU64);

impl DescendantId {
    /// The raw value, useful for logging or bridging to hosts with string keys.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for DescendantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "descendant-{}", self.0)
    }
}

/// Per-instance counter allocator.
///
/// Identities are unique only among ids from the same `SequentialIds`. That is
/// enough when one allocator serves one scope, and it keeps test output
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    /// Create an allocator whose first identity is `1`.
    pub const fn new() -> Self {
        Self { last: 0 }
    }
}

impl IdentityAllocator for SequentialIds {
    type Id = DescendantId;

    fn allocate(&mut self) -> DescendantId {
        self.last += 1;
        match NonZeroU64::new(self.last) {
            Some(raw) => DescendantId(raw),
            None => unreachable!("counter starts at one and only increments"),
        }
    }
}

/// Process-wide allocator backed by a shared atomic counter.
///
/// Every [`ProcessIds`] value draws from the same counter, so identities are
/// unique across all scopes in the process.
#[cfg(target_has_atomic = "64")]
#[derive(Copy, Clone, Debug, Default)]
pub struct ProcessIds;

#[cfg(target_has_atomic = "64")]
impl IdentityAllocator for ProcessIds {
    type Id = DescendantId;

    fn allocate(&mut self) -> DescendantId {
        use core::sync::atomic::{AtomicU64, Ordering};

        static NEXT: AtomicU64 = AtomicU64::new(1);
        let raw = NEXT.fetch_add(1, Ordering::Relaxed);
        match NonZeroU64::new(raw) {
            Some(raw) => DescendantId(raw),
            None => unreachable!("counter starts at one and only increments"),
        }
    }
}
