//! Player-facing wording.
//!
//! Scripts and tests match these lines verbatim; keep them stable.

/// Reply to a move along a missing exit.
pub const CANT_GO: &str = "You can't go that way!";

/// Reply to `inventory` with nothing carried.
pub const INVENTORY_EMPTY: &str = "Your inventory is empty.";

/// Header before the carried items.
pub const CARRYING: &str = "You are carrying:";

/// Reply to anything the vocabulary does not know.
pub const UNKNOWN_COMMAND: &str = "Unknown command.";

/// Reply to `quit` and `exit`.
pub const GOODBYE: &str = "Goodbye!";

/// The `help` block.
pub const HELP: [&str; 7] = [
    "Available commands:",
    "look - Look around the current room.",
    "move <forward|back|left|right> - Move in a specified direction.",
    "pick up <itemName> - Pick up an item from the room.",
    "inventory - Check your inventory.",
    "help - Show this help message.",
    "quit/exit - Exit the game.",
];

/// `Room: <name>`
#[must_use]
pub fn room_title(name: &str) -> String {
    format!("Room: {name}")
}

/// `Items here: ` followed by each name and a space.
#[must_use]
pub fn items_here<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut line = String::from("Items here: ");
    for name in names {
        line.push_str(name);
        line.push(' ');
    }
    line
}

/// `You move <direction>.`
#[must_use]
pub fn moved(direction: &str) -> String {
    format!("You move {direction}.")
}

/// `You pick up the <name>.`
#[must_use]
pub fn picked_up(name: &str) -> String {
    format!("You pick up the {name}.")
}

/// `No item named <argument> here!`
#[must_use]
pub fn no_such_item(argument: &str) -> String {
    format!("No item named {argument} here!")
}

/// `- <name>`
#[must_use]
pub fn carried(name: &str) -> String {
    format!("- {name}")
}
