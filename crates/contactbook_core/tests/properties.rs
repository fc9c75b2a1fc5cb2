//! Property tests for list order, index order, first-insert-wins lookups
//! and graph symmetry.

use contactbook_core::{
    compare_names, CollaborationGraph, ContactArena, ContactId, ContactIndex, ContactList,
};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

fn indexed(names: &[String]) -> (ContactArena, ContactIndex, Vec<ContactId>) {
    let mut arena = ContactArena::new();
    let mut index = ContactIndex::new();
    let ids = names
        .iter()
        .map(|name| {
            let id = arena.alloc(name.as_str(), "", "");
            index.insert(&arena, id);
            id
        })
        .collect();
    (arena, index, ids)
}

/// Distinct lowercase names together with one shuffled insertion order.
fn shuffled_names() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::btree_set("[a-z]{1,6}", 1..24).prop_flat_map(|names| {
        let sorted: Vec<String> = names.into_iter().collect();
        (Just(sorted.clone()), Just(sorted).prop_shuffle())
    })
}

/// Contact count plus endpoint pairs drawn from `0..count`.
fn graph_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..10).prop_flat_map(|count| {
        (
            Just(count),
            prop::collection::vec((0..count, 0..count), 0..30),
        )
    })
}

proptest! {
    #[test]
    fn list_keeps_append_order(names in prop::collection::vec("[a-zA-Z ]{0,8}", 0..20)) {
        let mut arena = ContactArena::new();
        let mut list = ContactList::new();
        let ids: Vec<ContactId> = names
            .iter()
            .map(|name| list.append(&mut arena, name.as_str(), "", ""))
            .collect();

        prop_assert_eq!(list.len(), names.len());
        prop_assert_eq!(list.iter().collect::<Vec<_>>(), ids.clone());
        let listed: Vec<String> = ids
            .iter()
            .map(|id| arena.get(*id).map(|contact| contact.name.clone()).unwrap_or_default())
            .collect();
        prop_assert_eq!(listed, names);
    }

    #[test]
    fn in_order_is_sorted_for_any_insertion_order((sorted, order) in shuffled_names()) {
        let (arena, index, _) = indexed(&order);

        let walked: Vec<String> = index
            .in_order()
            .into_iter()
            .filter_map(|id| arena.get(id))
            .map(|contact| contact.name.clone())
            .collect();
        prop_assert_eq!(walked, sorted);
    }

    #[test]
    fn search_finds_only_first_case_insensitive_occurrence(
        names in prop::collection::vec("[a-cA-C]{1,3}", 1..24),
    ) {
        let (arena, index, ids) = indexed(&names);

        for name in &names {
            let first = names
                .iter()
                .position(|other| compare_names(other, name) == Ordering::Equal)
                .map(|position| ids[position]);
            prop_assert_eq!(index.search(&arena, name).map(|contact| contact.id), first);
        }

        let distinct = names
            .iter()
            .map(|name| name.to_lowercase())
            .collect::<BTreeSet<_>>()
            .len();
        prop_assert_eq!(index.len(), distinct);
    }

    #[test]
    fn collaborations_are_symmetric_and_idempotent((count, pairs) in graph_edges()) {
        let mut arena = ContactArena::new();
        let mut graph = CollaborationGraph::new();
        let ids: Vec<ContactId> = (0..count)
            .map(|n| {
                let id = arena.alloc(format!("contact {n}"), "", "");
                graph.add_contact(id);
                id
            })
            .collect();

        let mut expected = BTreeSet::new();
        for (a, b) in &pairs {
            let (first, second) = (ids[*a], ids[*b]);
            let created = graph.add_collaboration(first, second);
            prop_assert_eq!(created, expected.insert((first.min(second), first.max(second))));
            prop_assert!(!graph.add_collaboration(second, first));
        }

        for id in &ids {
            for neighbor in graph.neighbors(*id) {
                prop_assert!(graph.neighbors(neighbor).contains(id));
            }
        }
        prop_assert_eq!(graph.edges(), expected.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(graph.len(), count);
    }
}
