// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read access to a scope's published total.

use crate::error::MissingScopeError;
use crate::scope::DescendantScope;

/// Something that publishes a descendant total.
///
/// Readers only need the number, so they take `&dyn PublishedTotal` and stay
/// independent of the scope's identity and props types.
pub trait PublishedTotal {
    /// The last published total.
    fn published_total(&self) -> usize;
}

impl<K, P> PublishedTotal for DescendantScope<K, P> {
    #[inline]
    fn published_total(&self) -> usize {
        self.total()
    }
}

/// The published total of `scope`, or `None` when there is no enclosing scope.
///
/// This is a pure read of the value published by the last
/// [`DescendantScope::commit`]; registrations made since then are not
/// reflected until the next commit.
#[inline]
pub fn maybe_descendant_total(scope: Option<&dyn PublishedTotal>) -> Option<usize> {
    scope.map(|s| s.published_total())
}

/// The published total of `scope`, failing when there is no enclosing scope.
///
/// ```rust
/// use understory_descendants::{DescendantScope, MissingScopeError, descendant_total};
///
/// let scope: DescendantScope = DescendantScope::new();
/// assert_eq!(descendant_total(Some(&scope)), Ok(0));
/// assert_eq!(descendant_total(None), Err(MissingScopeError::Total));
/// ```
#[inline]
pub fn descendant_total(scope: Option<&dyn PublishedTotal>) -> Result<usize, MissingScopeError> {
    maybe_descendant_total(scope).ok_or(MissingScopeError::Total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_published_value_only() {
        let mut scope: DescendantScope<u8, ()> = DescendantScope::new();
        scope.compose();
        scope.register(1, ());
        scope.register(2, ());
        // Not published yet.
        assert_eq!(maybe_descendant_total(Some(&scope)), Some(0));
        let _ = scope.commit();
        assert_eq!(maybe_descendant_total(Some(&scope)), Some(2));
        assert_eq!(descendant_total(Some(&scope)), Ok(2));
    }

    #[test]
    fn no_scope() {
        assert_eq!(maybe_descendant_total(None), None);
        assert_eq!(descendant_total(None), Err(MissingScopeError::Total));
    }
}
