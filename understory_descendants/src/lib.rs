// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_descendants --heading-base-level=0

//! Understory Descendants: order-respecting indices for registered descendants.
//!
//! A container often needs to know where each of its children sits among its
//! visible siblings (roving tab stops, `aria-posinset`/`aria-setsize`,
//! "option 3 of 7") without enumerating those children itself. Children may
//! mount, unmount, hide, or reorder independently of the container.
//!
//! This crate solves that with a registration protocol:
//!
//! - A container owns a [`DescendantScope`]. At the start of each of its
//!   passes it calls [`DescendantScope::compose`], which resets the scope's
//!   [`Registrar`] and starts a new epoch.
//! - Each descendant owns a [`DescendantBinding`]. It registers with the
//!   nearest scope when mounted, during every later composition, and again
//!   after every commit. The first
//!   registration in an epoch assigns the index: visible descendants get the
//!   next value of a counter starting at `0`, hidden ones get
//!   [`DescendantIndex::Hidden`].
//! - After the container's whole subtree has committed, the host calls
//!   [`DescendantScope::commit`], which publishes the number of distinct
//!   descendants registered this epoch (hidden ones included). If that number
//!   changed, the host runs the container once more.
//! - Anyone inside the scope can read the published total through
//!   [`maybe_descendant_total`] or [`descendant_total`].
//!
//! Because indices are handed out in registration order, they follow the
//! host's traversal order. A host that visits children in the same order every
//! pass gives each child the same index every epoch.
//!
//! This crate deliberately does **not** know about any particular tree,
//! widget, or scheduler. Host frameworks are responsible for:
//!
//! - Composing a container before its children, and calling
//!   [`DescendantScope::compose`] during that composition.
//! - Passing the nearest enclosing scope (or `None`) to bindings.
//! - Calling [`DescendantScope::commit`] only once the whole subtree has
//!   committed, and scheduling one more pass when it reports a change.
//!
//! ## Minimal example
//!
//! A list with three options, the middle one hidden:
//!
//! ```rust
//! use understory_descendants::{
//!     DescendantBinding, DescendantIndex, DescendantProps, DescendantScope, SequentialIds,
//!     descendant_total,
//! };
//!
//! let mut ids = SequentialIds::new();
//! let mut scope: DescendantScope = DescendantScope::new();
//! let props = [
//!     DescendantProps::VISIBLE,
//!     DescendantProps::HIDDEN,
//!     DescendantProps::VISIBLE,
//! ];
//!
//! // Pass 1: the container composes, then each option mounts and commits.
//! scope.compose();
//! let mut options: Vec<DescendantBinding> = props
//!     .iter()
//!     .map(|p| DescendantBinding::mount_with(&mut ids, Some(&mut scope), *p))
//!     .collect();
//! for (option, p) in options.iter_mut().zip(props) {
//!     let _ = option.commit(Some(&mut scope), p);
//! }
//! // The subtree committed: publish. The total changed, so run another pass.
//! assert!(scope.commit().is_some());
//!
//! // Pass 2: same tree, so the scope settles. Options register while they
//! // compose, then re-register after they commit.
//! scope.compose();
//! for (option, p) in options.iter_mut().zip(props) {
//!     option.compose(Some(&mut scope), p);
//! }
//! for (option, p) in options.iter_mut().zip(props) {
//!     assert!(option.commit(Some(&mut scope), p).is_none());
//! }
//! assert!(scope.commit().is_none());
//!
//! let indices: Vec<_> = options.iter().map(|o| o.index(Some(&scope)).unwrap()).collect();
//! assert_eq!(
//!     indices,
//!     [DescendantIndex::Visible(0), DescendantIndex::Hidden, DescendantIndex::Visible(1)]
//! );
//! assert_eq!(descendant_total(Some(&scope)), Ok(3));
//! ```
//!
//! Hosts that compose synchronously can wrap a pass with
//! [`DescendantScope::provide`]. Hosts that hold several kinds of scopes can
//! drive them uniformly through [`PassHooks`].
//!
//! ## Open behavior: hiding mid-epoch
//!
//! A descendant's index is fixed at its first registration in an epoch. If
//! its hidden flag flips later in the same epoch, the new props are stored but
//! the index does not change until the next reset.
//!
//! ## Features
//!
//! - `std`: enables `std` support for dependencies that have it.
//! - `tracing`: emits `tracing` events for resets, first registrations,
//!   changed totals, and changed binding indices.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod error;
mod identity;
mod index;
mod props;
mod registrar;
mod registry;
mod scope;
mod total;

pub use binding::{DescendantBinding, IndexChange};
pub use error::MissingScopeError;
#[cfg(target_has_atomic = "64")]
pub use identity::ProcessIds;
pub use identity::{DescendantId, IdentityAllocator, SequentialIds};
pub use index::DescendantIndex;
pub use props::{Descendant, DescendantProps};
pub use registrar::Registrar;
pub use registry::{DescendantRecord, Registry};
pub use scope::{DescendantScope, PassHooks, TotalChange};
pub use total::{PublishedTotal, descendant_total, maybe_descendant_total};
