use contactbook_core::{ContactArena, ContactId, ContactIndex};

fn build(names: &[&str]) -> (ContactArena, ContactIndex) {
    let mut arena = ContactArena::new();
    let mut index = ContactIndex::new();
    for name in names {
        let id = arena.alloc(*name, "", "");
        index.insert(&arena, id);
    }
    (arena, index)
}

fn ordered_names(arena: &ContactArena, index: &ContactIndex) -> Vec<String> {
    index
        .in_order()
        .into_iter()
        .map(|id| arena.get(id).unwrap().name.clone())
        .collect()
}

#[test]
fn empty_index_has_no_entries() {
    let (arena, index) = build(&[]);

    assert!(index.is_empty());
    assert_eq!(index.height(), 0);
    assert!(index.search(&arena, "Ana").is_none());
    assert_eq!(index.in_order_text(&arena), "");
}

#[test]
fn search_ignores_case() {
    let (arena, index) = build(&["Luis Gomez", "Ana Perez", "Marta Ruiz"]);

    assert_eq!(index.search(&arena, "ana perez").unwrap().name, "Ana Perez");
    assert_eq!(index.search(&arena, "MARTA RUIZ").unwrap().name, "Marta Ruiz");
    assert!(index.search(&arena, "Zoe").is_none());
}

#[test]
fn duplicate_name_differing_by_case_keeps_first() {
    let mut arena = ContactArena::new();
    let mut index = ContactIndex::new();

    let first = arena.alloc("Ana", "111", "first@email.com");
    let second = arena.alloc("ANA", "222", "second@email.com");

    assert!(index.insert(&arena, first));
    assert!(!index.insert(&arena, second));
    assert_eq!(index.len(), 1);

    let found = index.search(&arena, "ana").unwrap();
    assert_eq!(found.id, first);
    assert_eq!(found.phone, "111");
    assert_eq!(found.email, "first@email.com");
}

#[test]
fn insert_unknown_id_is_ignored() {
    let mut arena = ContactArena::new();
    let mut index = ContactIndex::new();
    arena.alloc("Ana", "", "");

    let mut other_arena = ContactArena::new();
    other_arena.alloc("x", "", "");
    let foreign = other_arena.alloc("y", "", "");

    assert!(!index.insert(&arena, foreign));
    assert!(index.is_empty());
}

#[test]
fn in_order_text_is_alphabetical() {
    let (arena, index) = build(&["Ana Perez", "Luis Gomez", "Marta Ruiz", "Carlos Vega"]);

    assert_eq!(
        index.in_order_text(&arena),
        "Name: Ana Perez, Phone: , Email: \n\
         Name: Carlos Vega, Phone: , Email: \n\
         Name: Luis Gomez, Phone: , Email: \n\
         Name: Marta Ruiz, Phone: , Email: \n"
    );
}

#[test]
fn in_order_sorts_ignoring_case() {
    let (arena, index) = build(&["delta", "Alpha", "charlie", "Echo", "bravo"]);

    assert_eq!(
        ordered_names(&arena, &index),
        vec!["Alpha", "bravo", "charlie", "delta", "Echo"]
    );
}

#[test]
fn sorted_insertion_degrades_to_a_chain() {
    let names: Vec<String> = (0..2_000).map(|n| format!("contact {n:05}")).collect();
    let mut arena = ContactArena::new();
    let mut index = ContactIndex::new();
    let mut last: Option<ContactId> = None;
    for name in &names {
        let id = arena.alloc(name.as_str(), "", "");
        index.insert(&arena, id);
        last = Some(id);
    }

    assert_eq!(index.height(), names.len());
    assert_eq!(index.in_order().len(), names.len());
    assert_eq!(
        Some(index.search(&arena, "CONTACT 01999").unwrap().id),
        last
    );
}

#[test]
fn balanced_insertion_order_keeps_height_logarithmic() {
    let (_, index) = build(&["d", "b", "f", "a", "c", "e", "g"]);

    assert_eq!(index.len(), 7);
    assert_eq!(index.height(), 3);
}
