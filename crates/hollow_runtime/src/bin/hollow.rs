//! Hollow CLI entry point.

use hollow_runtime::{Repl, Scenario, Session};
use hollow_storage::World;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    world: Option<PathBuf>,
    quiet: bool,
    show_help: bool,
    show_version: bool,
    dump_world: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.quiet = true,
            "--dump-world" => config.dump_world = true,
            "-w" | "--world" => {
                i += 1;
                if i >= args.len() {
                    return Err("--world requires a file".into());
                }
                config.world = Some(PathBuf::from(&args[i]));
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("hollow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let scenario = match &config.world {
        Some(path) => Scenario::load(path)?,
        None => Scenario::builtin(),
    };
    let session = Session::from_scenario(&scenario)?;

    if config.dump_world {
        dump_world_state(session.world());
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    if config.quiet {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn dump_world_state(world: &World) {
    println!("\x1b[1;36m=== World State ===\x1b[0m");
    println!("Player: {}", world.player().name());
    println!("Location: {}", world.current_room().name());
    println!("Rooms: {}", world.room_count());
    println!("Items: {}", world.item_count());

    for (id, room) in world.rooms() {
        println!("  - {id} {}", room.name());
        for (direction, to) in room.exits() {
            let target = world.room(to).map_or("?", |r| r.name());
            println!("      {direction} -> {target}");
        }
        for item in world.contents(id) {
            println!("      * {}", item.name());
        }
    }

    println!();
}

fn print_help() {
    println!(
        "\x1b[1mHollow\x1b[0m - A tiny text adventure

\x1b[1mUSAGE:\x1b[0m
    hollow [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -w, --world FILE    Play the scenario in FILE instead of the built-in one
    -q, --quiet         Start without the welcome banner
    --dump-world        Print rooms, exits, and items, then exit

\x1b[1mEXAMPLES:\x1b[0m
    hollow                                  Play the built-in world
    hollow -w scenarios/stone_chamber.toml  Play a scenario file
    RUST_LOG=debug hollow                   Log moves and pickups to stderr

\x1b[1mGAME COMMANDS:\x1b[0m
    look                 Look around the current room
    move <direction>     Move in a direction
    pick up <item>       Pick up an item
    inventory            List what you are carrying
    help                 Show the command list
    quit, exit           Leave the game
    Ctrl+D               Leave without saying goodbye
    Ctrl+C               Cancel the current line

For more information, visit https://github.com/ndouglas/hollow"
    );
}
