// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by the strict accessors.

use thiserror::Error;

/// A strict accessor was used with no enclosing [`DescendantScope`](crate::DescendantScope).
///
/// This signals an integration bug in the host (a descendant composed outside
/// of its container), not a runtime condition to recover from. Hosts that want
/// to render nothing instead should use the optional accessors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum MissingScopeError {
    /// Raised by [`DescendantBinding::index`](crate::DescendantBinding::index).
    #[error("descendant index must be requested within a descendant scope")]
    Index,
    /// Raised by [`descendant_total`](crate::descendant_total).
    #[error("descendant total must be requested within a descendant scope")]
    Total,
}
