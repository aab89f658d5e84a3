// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for index allocation and total publication.

use std::collections::HashSet;

use proptest::prelude::*;
use understory_descendants::{DescendantIndex, DescendantProps, DescendantScope, Registrar};

fn props(hidden: bool) -> DescendantProps {
    DescendantProps { hidden }
}

/// Register every `(id, hidden)` pair in order and return the assigned indices.
fn register_all(
    reg: &mut Registrar<u16, DescendantProps>,
    items: &[(u16, bool)],
) -> Vec<DescendantIndex> {
    items
        .iter()
        .map(|&(id, hidden)| reg.register(id, props(hidden)))
        .collect()
}

/// Up to 48 registrations over 64 possible identities, so repeats are common.
fn registrations() -> impl Strategy<Value = Vec<(u16, bool)>> {
    prop::collection::vec((0_u16..64, any::<bool>()), 0..48)
}

proptest! {
    #[test]
    fn visible_indices_are_a_dense_unique_prefix(items in registrations()) {
        let mut reg = Registrar::new();
        register_all(&mut reg, &items);

        let visible: Vec<usize> = reg
            .registry()
            .iter()
            .filter_map(|(_, r)| r.index.get())
            .collect();
        let unique: HashSet<usize> = visible.iter().copied().collect();
        prop_assert_eq!(unique.len(), visible.len());
        prop_assert!(visible.iter().all(|&i| i < visible.len()));
        prop_assert_eq!(reg.next_index(), visible.len());
    }

    #[test]
    fn hidden_at_first_registration_means_hidden_index(items in registrations()) {
        let mut reg = Registrar::new();
        let mut first_hidden = std::collections::HashMap::new();
        for &(id, hidden) in &items {
            first_hidden.entry(id).or_insert(hidden);
            reg.register(id, props(hidden));
        }
        for (id, hidden) in first_hidden {
            let record = reg.registry().get(&id).unwrap();
            prop_assert_eq!(record.index.is_hidden(), hidden);
        }
    }

    #[test]
    fn total_counts_distinct_identities(items in registrations()) {
        let mut scope: DescendantScope<u16, DescendantProps> = DescendantScope::new();
        scope.compose();
        for &(id, hidden) in &items {
            scope.register(id, props(hidden));
        }
        let _ = scope.commit();

        let distinct: HashSet<u16> = items.iter().map(|&(id, _)| id).collect();
        prop_assert_eq!(scope.total(), distinct.len());
    }

    #[test]
    fn stable_structure_gives_stable_indices(items in registrations()) {
        let mut reg = Registrar::new();
        let first = register_all(&mut reg, &items);
        reg.reset();
        let second = register_all(&mut reg, &items);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn repeated_reset_matches_single_reset(items in registrations()) {
        let mut once = Registrar::new();
        let mut twice = Registrar::new();
        register_all(&mut once, &items);
        register_all(&mut twice, &items);

        once.reset();
        twice.reset();
        twice.reset();

        prop_assert!(twice.registry().is_empty());
        prop_assert_eq!(once.next_index(), twice.next_index());
        prop_assert_eq!(
            register_all(&mut once, &items),
            register_all(&mut twice, &items)
        );
    }
}
