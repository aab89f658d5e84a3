// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed descendant index.

/// Position assigned to a descendant within its scope's current epoch.
///
/// Visible descendants receive consecutive indices starting at `0`, in the
/// order they first registered after the last reset. Hidden descendants are
/// excluded from that sequence.
///
/// ```rust
/// use understory_descendants::DescendantIndex;
///
/// assert_eq!(DescendantIndex::Visible(2).to_raw(), 2);
/// assert_eq!(DescendantIndex::Hidden.to_raw(), -1);
/// assert_eq!(DescendantIndex::Visible(2).position_in_set(), Some(3));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DescendantIndex {
    /// Zero-based position among visible siblings.
    Visible(usize),
    /// Excluded from ordering.
    Hidden,
}

impl DescendantIndex {
    /// Raw value used for hidden descendants by [`to_raw`](Self::to_raw).
    pub const HIDDEN_RAW: isize = -1;

    /// The zero-based index, or `None` when hidden.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Visible(index) => Some(index),
            Self::Hidden => None,
        }
    }

    /// Returns `true` for [`DescendantIndex::Hidden`].
    #[inline]
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Integer form, with [`HIDDEN_RAW`](Self::HIDDEN_RAW) standing in for hidden.
    ///
    /// Useful when handing the index to a host that expects a plain integer,
    /// such as a `tabindex`-like attribute or a script bridge.
    #[allow(
        clippy::cast_possible_wrap,
        reason = "Descendant counts never approach isize::MAX."
    )]
    #[inline]
    #[must_use]
    pub const fn to_raw(self) -> isize {
        match self {
            Self::Visible(index) => index as isize,
            Self::Hidden => Self::HIDDEN_RAW,
        }
    }

    /// One-based position for "item N of M" semantics (`aria-posinset`).
    #[inline]
    #[must_use]
    pub const fn position_in_set(self) -> Option<usize> {
        match self {
            Self::Visible(index) => Some(index + 1),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DescendantIndex;

    #[test]
    fn hidden_has_no_position() {
        assert_eq!(DescendantIndex::Hidden.get(), None);
        assert_eq!(DescendantIndex::Hidden.position_in_set(), None);
        assert!(DescendantIndex::Hidden.is_hidden());
        assert!(!DescendantIndex::Visible(0).is_hidden());
    }

    #[test]
    fn raw_form_matches_integer_protocol() {
        assert_eq!(DescendantIndex::Visible(0).to_raw(), 0);
        assert_eq!(DescendantIndex::Visible(7).to_raw(), 7);
        assert_eq!(DescendantIndex::Hidden.to_raw(), DescendantIndex::HIDDEN_RAW);
    }
}
