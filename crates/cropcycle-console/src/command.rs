//! Parsing of console input lines.

use core::str::FromStr;

use cropcycle_types::{CellPosition, ItemKind};

use crate::error::ConsoleError;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  autofarm [reload|info]      run the admin command as the console player
  tab <partial>               tab-complete the admin command's first argument
  click <x> <y> <z>           right click a cell (harvest and replant)
  punch <x> <y> <z>           left click a cell (host breaks it)
  grow [steps]                advance every crop by steps stages (default 1)
  hold <ITEM|none> [fortune]  put an item in the player's hand
  inv                         show inventory, experience and pickups
  field                       list every cell
  help                        show this text
  quit                        leave the console";

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Run the admin command with these arguments.
    Admin(Vec<String>),
    /// Tab-complete the admin command.
    Complete(Vec<String>),
    /// Right click on a cell.
    Click(CellPosition),
    /// Left click on a cell.
    Punch(CellPosition),
    /// Grow every crop.
    Grow(u8),
    /// Change the held tool.
    Hold {
        /// The item, `None` for an empty hand.
        item: Option<ItemKind>,
        /// Fortune level.
        fortune: u8,
    },
    /// Dump the player's inventory.
    Inventory,
    /// Dump the field.
    Field,
    /// Print help.
    Help,
    /// Exit.
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Help);
        };
        let rest: Vec<&str> = words.collect();

        match head.to_ascii_lowercase().as_str() {
            "autofarm" | "/autofarm" => Ok(Self::Admin(owned(&rest))),
            "tab" => {
                // A bare `tab` completes an empty first argument.
                if rest.is_empty() {
                    Ok(Self::Complete(vec![String::new()]))
                } else {
                    Ok(Self::Complete(owned(&rest)))
                }
            }
            "click" => parse_position(&rest, "click <x> <y> <z>").map(Self::Click),
            "punch" => parse_position(&rest, "punch <x> <y> <z>").map(Self::Punch),
            "grow" => match rest.as_slice() {
                [] => Ok(Self::Grow(1)),
                [steps] => parse_number(steps).map(Self::Grow),
                _ => Err(ConsoleError::Usage {
                    usage: "grow [steps]",
                }),
            },
            "hold" => parse_hold(&rest),
            "inv" | "inventory" => Ok(Self::Inventory),
            "field" => Ok(Self::Field),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "stop" => Ok(Self::Quit),
            _ => Err(ConsoleError::UnknownCommand {
                command: head.to_owned(),
            }),
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

fn parse_number<T: FromStr>(value: &str) -> Result<T, ConsoleError> {
    value.parse().ok().ok_or_else(|| ConsoleError::InvalidNumber {
        value: value.to_owned(),
    })
}

fn parse_position(args: &[&str], usage: &'static str) -> Result<CellPosition, ConsoleError> {
    let [x, y, z] = args else {
        return Err(ConsoleError::Usage { usage });
    };
    Ok(CellPosition::new(
        parse_number(x)?,
        parse_number(y)?,
        parse_number(z)?,
    ))
}

fn parse_hold(args: &[&str]) -> Result<ConsoleCommand, ConsoleError> {
    const USAGE: &str = "hold <ITEM|none> [fortune]";
    let (name, fortune) = match args {
        [name] => (*name, 0),
        [name, fortune] => (*name, parse_number(fortune)?),
        _ => return Err(ConsoleError::Usage { usage: USAGE }),
    };
    let item = if name.eq_ignore_ascii_case("none") {
        None
    } else {
        let found = ItemKind::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConsoleError::UnknownItem {
                name: name.to_owned(),
            })?;
        Some(found)
    };
    Ok(ConsoleCommand::Hold { item, fortune })
}
