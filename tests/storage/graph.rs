//! Integration tests for the room graph
//!
//! Exits are one-way, may loop back to the same room, and may be added or
//! replaced after the world is built.

use hollow_storage::{World, WorldBuilder};

fn ring(size: usize) -> World {
    let mut builder = WorldBuilder::new();
    let rooms: Vec<_> = (0..size)
        .map(|i| builder.add_room(format!("Room{i}"), format!("Room number {i}.")).unwrap())
        .collect();
    for (i, &room) in rooms.iter().enumerate() {
        builder.connect(room, "next", rooms[(i + 1) % size]).unwrap();
    }
    builder.build("Hero", rooms[0]).unwrap()
}

#[test]
fn connect_is_one_way() {
    let mut builder = WorldBuilder::new();
    let r1 = builder.add_room("Room1", "A small stone chamber.").unwrap();
    let r2 = builder.add_room("Room2", "A dark cave with a damp smell.").unwrap();
    builder.connect(r1, "forward", r2).unwrap();
    let mut world = builder.build("Hero", r1).unwrap();

    assert_eq!(world.move_player("forward"), Some(r2));
    assert_eq!(world.move_player("forward"), None);
    assert_eq!(world.move_player("back"), None);
    assert_eq!(world.player().current_room(), r2);
}

#[test]
fn cycles_return_to_start() {
    let mut world = ring(5);
    let start = world.player().current_room();
    for _ in 0..5 {
        assert!(world.move_player("next").is_some());
    }
    assert_eq!(world.player().current_room(), start);
}

#[test]
fn self_loop_stays_put() {
    let mut builder = WorldBuilder::new();
    let maze = builder.add_room("Maze", "All alike.").unwrap();
    builder.connect(maze, "north", maze).unwrap();
    let mut world = builder.build("Hero", maze).unwrap();

    assert_eq!(world.move_player("north"), Some(maze));
    assert_eq!(world.current_room().name(), "Maze");
}

#[test]
fn reconnect_replaces_target() {
    let mut builder = WorldBuilder::new();
    let a = builder.add_room("A", "").unwrap();
    let b = builder.add_room("B", "").unwrap();
    let c = builder.add_room("C", "").unwrap();
    builder.connect(a, "door", b).unwrap();
    let mut world = builder.build("Hero", a).unwrap();

    world.connect(a, "door", c).unwrap();
    assert_eq!(world.current_room().exit("door"), Some(c));
    assert_eq!(world.current_room().exits().count(), 1);
    assert_eq!(world.move_player("door"), Some(c));
}

#[test]
fn directions_match_exactly() {
    let mut world = ring(2);
    assert_eq!(world.move_player("Next"), None);
    assert_eq!(world.move_player("next "), None);
    assert_eq!(world.move_player(""), None);
    assert!(world.move_player("next").is_some());
}

#[test]
fn exits_list_sorted_by_direction() {
    let mut builder = WorldBuilder::new();
    let hub = builder.add_room("Hub", "").unwrap();
    for dir in ["west", "east", "north"] {
        builder.connect(hub, dir, hub).unwrap();
    }
    let world = builder.build("Hero", hub).unwrap();

    let dirs: Vec<&str> = world.current_room().exits().map(|(d, _)| d).collect();
    assert_eq!(dirs, ["east", "north", "west"]);
}
