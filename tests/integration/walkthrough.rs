//! Playing through the built-in world.

use hollow_parser::SessionState;
use hollow_runtime::{Scenario, Session};
use proptest::prelude::*;

fn session() -> Session {
    Session::from_scenario(&Scenario::builtin()).unwrap()
}

#[test]
fn full_walkthrough() {
    let mut session = session();

    let script: [(&str, &[&str]); 6] = [
        (
            "look",
            &["Room: Room 1", "A small stone chamber.", "Items here: sword "],
        ),
        ("pick up sword", &["You pick up the sword."]),
        (
            "look",
            &["Room: Room 1", "A small stone chamber.", "Items here: "],
        ),
        (
            "move forward",
            &[
                "You move forward.",
                "Room: Room 2",
                "A dark cave with a damp smell.",
                "Items here: ",
            ],
        ),
        ("inventory", &["You are carrying:", "- sword"]),
        ("quit", &["Goodbye!"]),
    ];

    for (input, expected) in script {
        let response = session.execute(input);
        assert_eq!(response.lines(), expected, "after {input:?}");
    }

    assert_eq!(session.state(), SessionState::Stopped);
}

#[test]
fn one_way_passage() {
    let mut session = session();

    let response = session.execute("move forward");
    assert_eq!(response.lines()[0], "You move forward.");

    for direction in ["forward", "back", "left", "right"] {
        let response = session.execute(&format!("move {direction}"));
        assert_eq!(response.lines(), ["You can't go that way!"]);
    }
    assert_eq!(session.world().current_room().name(), "Room 2");
}

#[test]
fn sword_cannot_be_taken_twice() {
    let mut session = session();
    session.execute("pick up sword");

    let response = session.execute("pick up sword");
    assert_eq!(response.lines(), ["No item named up sword here!"]);
    assert_eq!(session.world().player().inventory().len(), 1);
}

#[test]
fn sword_left_behind_stays_in_room_1() {
    let mut session = session();
    session.execute("move forward");

    assert_eq!(
        session.execute("pick up sword").lines(),
        ["No item named up sword here!"]
    );
    assert_eq!(session.execute("inventory").lines(), ["Your inventory is empty."]);
}

proptest! {
    #[test]
    fn look_never_changes_anything(looks in 1usize..8, take_first in any::<bool>()) {
        let mut session = session();
        if take_first {
            session.execute("pick up sword");
        }

        let first = session.execute("look").into_lines();
        for _ in 0..looks {
            prop_assert_eq!(session.execute("look").into_lines(), first.clone());
        }
        prop_assert_eq!(session.world().current_room().name(), "Room 1");
        prop_assert_eq!(session.world().player().inventory().len(), usize::from(take_first));
    }

    #[test]
    fn only_quit_and_exit_stop(input in "[a-z ]{0,12}") {
        let mut session = session();
        let response = session.execute(&input);
        let word = input.split(' ').next().unwrap_or_default();
        let stops = word == "quit" || word == "exit";
        prop_assert_eq!(response.is_running(), !stops);
    }
}
