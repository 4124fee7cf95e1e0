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
use std::{
    fmt,
    io::{self, BufRead, Write},
    time::Duration,
};

use clap::{App, Arg, ArgMatches};
use log::{info, warn};
use rand::Rng;

use battlesetup::{
    board::{Coordinate, BOARD_SIZE, COLUMN_LETTERS},
    proof::{submit_layout, verify_artifact, ProofArtifact},
    session::{SelectionSession, SessionState},
    ships::{Orientation, ShipClass, ShipSelection},
};

use crate::{
    client::HttpBackend,
    command::{parse_command, Command, ShipChoice},
};

mod client;
mod command;

const DEFAULT_SERVER: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: &str = "30";

/// How many random positions to try for each ship before giving up.
const MAX_RANDOM_ATTEMPTS: usize = 1000;

fn main() -> io::Result<()> {
    env_logger::init();

    let matches = app().get_matches();

    let mut backend = connect(&matches)?;
    info!("using proving server {}", backend.base_url());

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();
    let mut session = SelectionSession::new();
    let mut artifact: Option<ProofArtifact> = None;

    println!("Place your ships. Type help or ? for commands.");
    loop {
        println!();
        show_status(&session);
        show_board(&session);
        println!();

        let cmd = match input.read_input_lower(">", |line| match parse_command(line) {
            Ok(cmd) => Some(cmd),
            Err(err) => {
                println!("{}", err);
                None
            }
        })? {
            Some(cmd) => cmd,
            None => break,
        };

        match cmd {
            Command::Choose(ShipChoice::Class(class), dir) => session.choose_class(class, dir),
            Command::Choose(ShipChoice::Size(size), dir) => {
                if let Err(err) = session.choose_ship(dir, size) {
                    println!("{}", err);
                }
            }
            Command::Hover(cell) => match session.hover_cell(&cell).map(|_| ()) {
                Ok(_) if session.state() == SessionState::Idle => {
                    println!("Choose a ship first.");
                }
                Ok(_) => {}
                Err(err) => println!("{}", err),
            },
            Command::Leave => session.hover_exit(),
            Command::Confirm => confirm(&mut session),
            Command::Put(cell) => match session.hover_cell(&cell).map(|_| ()) {
                Ok(_) if session.state() == SessionState::Idle => {
                    println!("Choose a ship first.");
                }
                Ok(_) => {
                    confirm(&mut session);
                    session.hover_exit();
                }
                Err(err) => println!("{}", err),
            },
            Command::Random => choose_random_placements(&mut rng, &mut session),
            Command::Show => {}
            Command::Layout => match serde_json::to_string(&session.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(err) => println!("Could not serialize layout: {}", err),
            },
            Command::Submit => match submit_layout(&session, &mut backend) {
                Ok(proof) => {
                    println!("Server response:");
                    println!("{}", proof);
                    artifact = Some(proof);
                }
                Err(err) => {
                    warn!("prove failed: {}", err);
                    println!("Submission failed: {}", err);
                }
            },
            Command::Verify => match &artifact {
                Some(proof) => match verify_artifact(proof, &mut backend) {
                    Ok(status) => println!("{}", status),
                    Err(err) => {
                        warn!("verify failed: {}", err);
                        println!("Verification request failed: {}", err);
                    }
                },
                None => println!("Submit a layout first."),
            },
            Command::Help => show_help(),
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Command line definition.
fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("Battleship Setup")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Place ships on a 10x10 board and submit the layout for proving.")
        .arg(
            Arg::with_name("server")
                .short("s")
                .long("server")
                .value_name("URL")
                .help("base URL of the proving server")
                .takes_value(true)
                .env("BATTLESHIP_SERVER")
                .default_value(DEFAULT_SERVER),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .value_name("SECS")
                .help("request timeout in seconds")
                .takes_value(true)
                .default_value(DEFAULT_TIMEOUT_SECS)
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
}

/// Read the request timeout. Clap fills in the default and validates the value.
fn timeout(matches: &ArgMatches) -> io::Result<Duration> {
    let secs = matches.value_of("timeout").unwrap_or(DEFAULT_TIMEOUT_SECS);
    secs.parse()
        .map(Duration::from_secs)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
}

/// Build the HTTP backend from the command line options.
fn connect(matches: &ArgMatches) -> io::Result<HttpBackend> {
    let server = matches.value_of("server").unwrap_or(DEFAULT_SERVER);
    HttpBackend::new(server, timeout(matches)?)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

/// Place the previewed ship and report what happened.
fn confirm(session: &mut SelectionSession) {
    match session.confirm() {
        Ok(placed) if placed.is_empty() => println!("Nothing to place."),
        Ok(placed) => println!("Placed ship on {}.", placed.cell_ids().join(", ")),
        Err(err) => println!("{}", err),
    }
}

/// Place one of each standard ship at a random position where it fits entirely and
/// does not touch cells that are already taken.
fn choose_random_placements(rng: &mut impl Rng, session: &mut SelectionSession) {
    for &class in ShipClass::ALL {
        let mut placed = false;
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let cell = Coordinate::new(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE));
            let dir = if rng.gen() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let selection = ShipSelection::of_class(class, dir);
            let proj = selection.project(cell);
            if !proj.is_complete(&selection)
                || proj.iter().any(|coord| session.grid().is_occupied(coord))
            {
                continue;
            }
            session.choose_class(class, dir);
            session.hover_enter(cell);
            confirm(session);
            placed = true;
            break;
        }
        if !placed {
            println!("No room left for the {}.", ShipFullName(class));
        }
    }
}

/// Print the current selection and preview.
fn show_status(session: &SelectionSession) {
    let selection = session.selection();
    let dir = match selection.orientation {
        Some(Orientation::Horizontal) => "horizontal",
        Some(Orientation::Vertical) => "vertical",
        None => "",
    };
    match session.state() {
        SessionState::Idle => println!("No ship selected."),
        SessionState::Selecting => println!("Selected: {} ship of size {}.", dir, selection.size),
        SessionState::Previewing => {
            let cells: Vec<_> = session.preview().iter().map(|c| c.to_string()).collect();
            println!(
                "Selected: {} ship of size {}, previewing {}.",
                dir,
                selection.size,
                cells.join(", ")
            );
        }
    }
    println!("Occupied cells: {}", session.grid().occupied_count());
}

/// Print out the board with placed ships and the current preview.
fn show_board(session: &SelectionSession) {
    enum SetupCell {
        Empty,
        Ship,
        Preview,
        Overlap,
    }
    impl fmt::Display for SetupCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.pad(match self {
                SetupCell::Empty => "~~",
                SetupCell::Ship => "##",
                SetupCell::Preview => "<>",
                SetupCell::Overlap => "XX",
            })
        }
    }

    let preview = session.preview();
    print!("   ");
    for letter in COLUMN_LETTERS.iter() {
        print!("{:^4}", letter);
    }
    println!();
    for (i, row) in session.grid().iter_rows().enumerate() {
        print!("{:>2} ", i + 1);
        for (coord, occupied) in row {
            let cell = match (occupied, preview.contains(&coord)) {
                (false, false) => SetupCell::Empty,
                (true, false) => SetupCell::Ship,
                (false, true) => SetupCell::Preview,
                (true, true) => SetupCell::Overlap,
            };
            print!("{:^4}", cell);
        }
        println!();
    }
}

fn show_help() {
    println!(
        "Available Commands:
    ship <ship> <orientation>   select a ship. <ship> is a name below or a size.
        Orientations are \"horizontal\" (\"h\") and \"vertical\" (\"v\").
    hover <cell>                preview the ship ending at the cell, e.g. \"hover c6\".
        Horizontal ships extend left of the cell, vertical ships extend up.
    leave                       clear the preview.
    confirm                     place the previewed ship.
    put <cell>                  hover and confirm in one step.
    random                      place one of each ship at random.
    layout                      print the layout as sent to the server.
    submit                      send the layout to the server for proving.
    verify                      ask the server to verify the last proof.
    quit                        exit.

Available Ships:
    \"carrier\" (\"cv\")
    \"battleship\" (\"bb\")
    \"cruiser\" (\"cl\")
    \"submarine\" (\"ss\")
    \"destroyer\" (\"dd\")"
    );
}

/// Display helper that prints the ship's full name.
struct ShipFullName(ShipClass);

impl ShipFullName {
    fn name(&self) -> &'static str {
        match self.0 {
            ShipClass::Carrier => "carrier",
            ShipClass::Battleship => "battleship",
            ShipClass::Cruiser => "cruiser",
            ShipClass::Submarine => "submarine",
            ShipClass::Destroyer => "destroyer",
        }
    }
}

impl fmt::Display for ShipFullName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` at end of input.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// false at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}
