// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-descendant metadata consulted during registration.

/// Metadata a descendant hands to its scope on every registration.
///
/// The only field the registrar interprets is the hidden flag. Everything else
/// on the implementing type is opaque and simply stored alongside the index so
/// the owning container can inspect it later (for example, a label for
/// typeahead or a disabled flag for keyboard navigation).
pub trait Descendant {
    /// Whether this descendant is excluded from the `0..N` index sequence.
    ///
    /// Hidden descendants still count towards the scope's total.
    fn hidden(&self) -> bool {
        false
    }
}

/// Minimal props carrying only the hidden flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DescendantProps {
    /// See [`Descendant::hidden`].
    pub hidden: bool,
}

impl DescendantProps {
    /// Props for a visible descendant.
    pub const VISIBLE: Self = Self { hidden: false };
    /// Props for a hidden descendant.
    pub const HIDDEN: Self = Self { hidden: true };
}

impl Descendant for DescendantProps {
    #[inline]
    fn hidden(&self) -> bool {
        self.hidden
    }
}

impl Descendant for () {}

/// Absent props count as visible.
impl<P: Descendant> Descendant for Option<P> {
    #[inline]
    fn hidden(&self) -> bool {
        self.as_ref().is_some_and(Descendant::hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_props_are_visible() {
        let none: Option<DescendantProps> = None;
        assert!(!none.hidden());
        assert!(Some(DescendantProps::HIDDEN).hidden());
        assert!(!Some(DescendantProps::VISIBLE).hidden());
        assert!(!().hidden());
    }
}
