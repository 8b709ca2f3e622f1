//! Loading scenario files and playing them.

use hollow_foundation::ErrorKind;
use hollow_runtime::{Scenario, Session};
use std::path::Path;

const LIBRARY: &str = r#"
[player]
name = "Reader"
start = "Lobby"

[[rooms]]
name = "Lobby"
description = "Quiet, carpeted."
items = ["map", "map", "pencil"]
exits = { north = "Stacks", south = "Lobby" }

[[rooms]]
name = "Stacks"
description = "Shelves to the ceiling."
items = ["atlas of the moon"]
exits = { south = "Lobby" }
"#;

#[test]
fn shipped_scenario_plays_like_builtin() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/stone_chamber.toml");
    let scenario = Scenario::load(&path).unwrap();

    let mut from_file = Session::from_scenario(&scenario).unwrap();
    let mut builtin = Session::from_scenario(&Scenario::builtin()).unwrap();
    for input in ["look", "pick up sword", "move forward", "look", "inventory"] {
        assert_eq!(
            from_file.execute(input).into_lines(),
            builtin.execute(input).into_lines()
        );
    }
}

#[test]
fn custom_scenario_round_trip() {
    let scenario = Scenario::from_toml_str(LIBRARY).unwrap();
    let mut session = Session::from_scenario(&scenario).unwrap();
    assert_eq!(session.world().player().name(), "Reader");

    assert_eq!(
        session.execute("look").lines(),
        ["Room: Lobby", "Quiet, carpeted.", "Items here: map map pencil "]
    );
    session.execute("pick up map");
    assert_eq!(session.execute("look").lines()[2], "Items here: map pencil ");

    assert_eq!(session.execute("move south").lines()[1], "Room: Lobby");
    session.execute("move north");
    assert_eq!(
        session.execute("pick up atlas of the moon").lines(),
        ["You pick up the atlas of the moon."]
    );
    session.execute("move south");
    assert_eq!(
        session.execute("inventory").lines(),
        ["You are carrying:", "- map", "- atlas of the moon"]
    );
}

#[test]
fn completions_track_location() {
    let scenario = Scenario::from_toml_str(LIBRARY).unwrap();
    let mut session = Session::from_scenario(&scenario).unwrap();

    let words = session.completions();
    for word in ["north", "south", "map", "pencil", "pick", "exit"] {
        assert!(words.iter().any(|w| w == word), "missing {word}");
    }
    // Duplicate item names collapse
    assert_eq!(words.iter().filter(|w| *w == "map").count(), 1);

    session.execute("move north");
    let words = session.completions();
    assert!(words.iter().any(|w| w == "atlas of the moon"));
    assert!(!words.iter().any(|w| w == "north"));
}

#[test]
fn invalid_scenarios_fail_before_play() {
    let broken = LIBRARY.replace("north = \"Stacks\"", "north = \"Attic\"");
    let scenario = Scenario::from_toml_str(&broken).unwrap();
    let err = Session::from_scenario(&scenario).err().unwrap();
    assert!(matches!(err.kind, ErrorKind::InvalidScenario(_)));

    let err = Scenario::from_toml_str("rooms = 3").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError(_)));
}
