//! Integration tests for item ownership
//!
//! An item lies in exactly one room or sits in the inventory, never both.

use hollow_storage::WorldBuilder;
use proptest::prelude::*;

#[test]
fn take_moves_item_to_inventory() {
    let mut builder = WorldBuilder::new();
    let hall = builder.add_room("Hall", "").unwrap();
    let lamp = builder.add_item(hall, "lamp").unwrap();
    let mut world = builder.build("Hero", hall).unwrap();

    assert_eq!(world.take_item("lamp"), Some(lamp));
    assert!(!world.current_room().contains_item(lamp));
    assert!(world.player().is_carrying(lamp));
    assert_eq!(world.take_item("lamp"), None);
}

#[test]
fn take_only_looks_in_current_room() {
    let mut builder = WorldBuilder::new();
    let hall = builder.add_room("Hall", "").unwrap();
    let study = builder.add_room("Study", "").unwrap();
    builder.add_item(study, "book").unwrap();
    let mut world = builder.build("Hero", hall).unwrap();

    assert_eq!(world.take_item("book"), None);
    world.place_player(study).unwrap();
    assert!(world.take_item("book").is_some());
}

#[test]
fn take_prefers_first_of_same_name() {
    let mut builder = WorldBuilder::new();
    let hall = builder.add_room("Hall", "").unwrap();
    let first = builder.add_item(hall, "coin").unwrap();
    let second = builder.add_item(hall, "coin").unwrap();
    let mut world = builder.build("Hero", hall).unwrap();

    assert_eq!(world.take_item("coin"), Some(first));
    assert_eq!(world.take_item("coin"), Some(second));
    assert_eq!(world.player().inventory(), [first, second]);
}

#[test]
fn names_match_case_sensitively() {
    let mut builder = WorldBuilder::new();
    let hall = builder.add_room("Hall", "").unwrap();
    builder.add_item(hall, "Lamp").unwrap();
    let mut world = builder.build("Hero", hall).unwrap();

    assert_eq!(world.take_item("lamp"), None);
    assert!(world.take_item("Lamp").is_some());
}

#[test]
fn items_added_after_build_can_be_taken() {
    let mut builder = WorldBuilder::new();
    let hall = builder.add_room("Hall", "").unwrap();
    let mut world = builder.build("Hero", hall).unwrap();

    let key = world.add_item(hall, "key").unwrap();
    assert_eq!(world.item_count(), 1);
    assert_eq!(world.take_item("key"), Some(key));
}

proptest! {
    #[test]
    fn every_item_has_one_owner(names in prop::collection::vec("[a-c]{1,2}", 0..12), picks in prop::collection::vec("[a-c]{1,2}", 0..12)) {
        let mut builder = WorldBuilder::new();
        let hall = builder.add_room("Hall", "").unwrap();
        let ids: Vec<_> = names.iter().map(|n| builder.add_item(hall, n.as_str()).unwrap()).collect();
        let mut world = builder.build("Hero", hall).unwrap();

        for pick in &picks {
            world.take_item(pick);
        }

        for id in ids {
            let in_room = world.current_room().contains_item(id);
            let carried = world.player().is_carrying(id);
            prop_assert!(in_room != carried);
        }
        prop_assert_eq!(
            world.current_room().items().len() + world.player().inventory().len(),
            names.len()
        );
    }
}
