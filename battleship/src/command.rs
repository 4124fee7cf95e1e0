// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Parsing of setup-screen commands.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use battlesetup::ships::{Orientation, ShipClass};

/// Which ship the player picked: one of the standard classes or a bare size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShipChoice {
    Class(ShipClass),
    Size(usize),
}

/// A command typed at the setup prompt.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Select a ship and its orientation.
    Choose(ShipChoice, Orientation),
    /// Move the cursor onto a cell.
    Hover(String),
    /// Move the cursor off the board.
    Leave,
    /// Place the previewed ship.
    Confirm,
    /// Hover a cell, place the ship there and move off again.
    Put(String),
    /// Place one of each standard ship at random.
    Random,
    Show,
    Layout,
    Submit,
    Verify,
    Help,
    Quit,
}

/// Reason a line could not be understood.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CommandError {
    #[error("invalid ship: {0}, choose \"carrier\", \"battleship\", \"cruiser\", \"submarine\", \"destroyer\" or a size")]
    Ship(String),
    #[error("invalid orientation {0}, choose \"horizontal\" or \"vertical\"")]
    Orientation(String),
    #[error("invalid command \"{0}\". Use '?' for help")]
    Unknown(String),
}

/// Matcher for ship selection.
static CHOOSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:ship|choose|select)\s+
        (?P<ship>\w+)\s+
        (?P<dir>\w+)$",
    )
    .unwrap()
});
static HOVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:hover|over|at)\s+(?P<cell>\S+)$").unwrap());
static PUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:put|place)\s+(?P<cell>\S+)$").unwrap());

/// Parse one lowercased, trimmed line of input.
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    Ok(match input {
        "?" | "help" | "h" => Command::Help,
        "leave" | "out" | "exit" => Command::Leave,
        "confirm" | "click" | "ok" => Command::Confirm,
        "random" | "rand" | "randomize" => Command::Random,
        "show" | "board" | "" => Command::Show,
        "layout" | "json" => Command::Layout,
        "submit" | "prove" | "send" => Command::Submit,
        "verify" => Command::Verify,
        "quit" | "q" | "done" => Command::Quit,
        other => {
            if let Some(captures) = CHOOSE.captures(other) {
                let ship = parse_ship(&captures["ship"])?;
                let dir = parse_orientation(&captures["dir"])?;
                Command::Choose(ship, dir)
            } else if let Some(captures) = HOVER.captures(other) {
                Command::Hover(captures["cell"].to_owned())
            } else if let Some(captures) = PUT.captures(other) {
                Command::Put(captures["cell"].to_owned())
            } else {
                return Err(CommandError::Unknown(other.to_owned()));
            }
        }
    })
}

fn parse_ship(name: &str) -> Result<ShipChoice, CommandError> {
    Ok(ShipChoice::Class(match name {
        "cv" | "carrier" => ShipClass::Carrier,
        "bb" | "battleship" => ShipClass::Battleship,
        "ca" | "cl" | "cruiser" => ShipClass::Cruiser,
        "ss" | "sub" | "submarine" => ShipClass::Submarine,
        "dd" | "destroyer" => ShipClass::Destroyer,
        other => {
            return other
                .parse()
                .map(ShipChoice::Size)
                .map_err(|_| CommandError::Ship(other.to_owned()))
        }
    }))
}

fn parse_orientation(name: &str) -> Result<Orientation, CommandError> {
    match name {
        "horizontal" | "horizontally" | "h" | "across" => Ok(Orientation::Horizontal),
        "vertical" | "vertically" | "v" | "down" => Ok(Orientation::Vertical),
        other => Err(CommandError::Orientation(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ship_choice() {
        assert_eq!(
            parse_command("ship cruiser vertically"),
            Ok(Command::Choose(
                ShipChoice::Class(ShipClass::Cruiser),
                Orientation::Vertical
            ))
        );
        assert_eq!(
            parse_command("choose 4   h"),
            Ok(Command::Choose(ShipChoice::Size(4), Orientation::Horizontal))
        );
        assert_eq!(
            parse_command("select 0 v"),
            Ok(Command::Choose(ShipChoice::Size(0), Orientation::Vertical))
        );
    }

    #[test]
    fn rejects_bad_ship_or_orientation() {
        assert_eq!(
            parse_command("ship yacht h"),
            Err(CommandError::Ship("yacht".to_owned()))
        );
        assert_eq!(
            parse_command("ship dd diagonal"),
            Err(CommandError::Orientation("diagonal".to_owned()))
        );
    }

    #[test]
    fn cell_text_is_passed_through() {
        assert_eq!(parse_command("hover c6"), Ok(Command::Hover("c6".to_owned())));
        assert_eq!(parse_command("put k99"), Ok(Command::Put("k99".to_owned())));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("click"), Ok(Command::Confirm));
        assert_eq!(parse_command("submit"), Ok(Command::Submit));
        assert_eq!(parse_command("verify"), Ok(Command::Verify));
        assert_eq!(
            parse_command("fire a1"),
            Err(CommandError::Unknown("fire a1".to_owned()))
        );
    }
}
