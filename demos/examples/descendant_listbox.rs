// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A listbox whose options learn their position without the listbox listing them.
//!
//! This example plays the part of a host framework:
//! - the listbox owns a `DescendantScope` and composes before its options,
//! - each option owns a `DescendantBinding`, registers while composing, and
//!   registers again after committing,
//! - the listbox commits once all options have committed, and the host runs
//!   another pass whenever that reports a changed total.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example descendant_listbox`

use tracing_subscriber::EnvFilter;
use understory_descendants::{
    DescendantBinding, DescendantProps, DescendantScope, IdentityAllocator, ProcessIds,
    descendant_total,
};

/// One option: identity binding plus the props the app renders it with.
struct ListOption {
    label: &'static str,
    props: DescendantProps,
    binding: DescendantBinding,
}

/// The container: owns the scope and, for this demo, its options.
struct Listbox {
    scope: DescendantScope,
    options: Vec<ListOption>,
}

impl Listbox {
    fn new(labels: &[&'static str]) -> Self {
        let mut scope = DescendantScope::with_capacity(labels.len());
        let mut ids = ProcessIds;
        // Mounting happens during the first composition.
        scope.compose();
        let options = labels
            .iter()
            .map(|&label| ListOption {
                label,
                props: DescendantProps::VISIBLE,
                binding: DescendantBinding::mount(
                    ids.allocate(),
                    Some(&mut scope),
                    DescendantProps::VISIBLE,
                ),
            })
            .collect();
        let mut listbox = Self { scope, options };
        let _ = listbox.commit();
        listbox
    }

    /// The options' composition: each registers in tree order.
    fn compose_options(&mut self) {
        for option in &mut self.options {
            let _ = option.binding.compose(Some(&mut self.scope), option.props);
        }
    }

    /// The post-compose half of a pass. Returns `true` if another pass is needed.
    fn commit(&mut self) -> bool {
        let mut rerender = false;
        // Hosts commit children before their parent, last sibling first here.
        for option in self.options.iter_mut().rev() {
            rerender |= option
                .binding
                .commit(Some(&mut self.scope), option.props)
                .is_some();
        }
        self.scope.commit().is_some() || rerender
    }

    /// Run passes until nothing changes, then print what the user would see.
    fn run(&mut self, title: &str) {
        let mut passes = 0;
        loop {
            passes += 1;
            self.scope.compose();
            self.compose_options();
            if !self.commit() {
                break;
            }
        }

        let total = descendant_total(Some(&self.scope)).unwrap_or_default();
        let visible = self.scope.registry().visible_len();
        println!("{title} (settled after {passes} pass(es), {total} registered)");
        for option in &self.options {
            let position = option
                .binding
                .index(Some(&self.scope))
                .ok()
                .and_then(|i| i.position_in_set());
            match position {
                Some(n) => println!("  [{n}/{visible}] {}", option.label),
                None => println!("  [hidden] {}", option.label),
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut listbox = Listbox::new(&["Apple", "Banana", "Cherry", "Damson"]);
    listbox.run("initial");

    listbox.options[1].props = DescendantProps::HIDDEN;
    listbox.run("banana hidden");

    listbox.options.swap(0, 3);
    listbox.run("apple and damson swapped");

    listbox.options.remove(2);
    listbox.run("cherry removed");

    // Options outside any listbox can still ask, and get a clear answer.
    let stray: DescendantBinding =
        DescendantBinding::mount(ProcessIds.allocate(), None, DescendantProps::VISIBLE);
    match stray.index(None) {
        Ok(index) => println!("stray option has index {index:?}"),
        Err(err) => println!("stray option: {err}"),
    }
}
