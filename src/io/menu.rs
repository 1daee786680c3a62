// src/io/menu.rs

use std::io::{self, BufRead, Write};

use rand::Rng;
use thiserror::Error;

use crate::error::{Container, PieceError};
use crate::io::display;
use crate::model::piece::Piece;
use crate::model::RESERVE_CAPACITY;
use crate::simulation::config::Tier;
use crate::simulation::engine::{Session, Transfer};

/// A menu entry the current tier offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Reserve,
    InsertFresh,
    UseReserved,
    SwapFrontWithTop,
    SwapTriple,
    Quit,
}

impl Command {
    /// Maps a menu number to a command, or `None` if the tier doesn't offer it.
    pub fn from_choice(choice: i64, tier: Tier) -> Option<Self> {
        Some(match choice {
            0 => Self::Quit,
            1 => Self::Play,
            2 if tier.has_reserve() => Self::Reserve,
            2 => Self::InsertFresh,
            3 if tier.has_reserve() => Self::UseReserved,
            4 if tier.has_swaps() => Self::SwapFrontWithTop,
            5 if tier.has_swaps() => Self::SwapTriple,
            _ => return None,
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Reserve => "reserve",
            Self::InsertFresh => "insert",
            Self::UseReserved => "use reserved",
            Self::SwapFrontWithTop => "swap front/top",
            Self::SwapTriple => "swap triple",
            Self::Quit => "quit",
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected a menu number, got {0:?}")]
    NotANumber(String),
    #[error("input ended")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads one menu choice from a line of input.
///
/// Bytes that aren't UTF-8 are malformed input, not an I/O failure.
pub fn read_choice<I: BufRead>(input: &mut I) -> Result<i64, InputError> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Err(InputError::EndOfInput);
    }
    let line = String::from_utf8_lossy(&bytes);
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Drives the session until the user quits or sends malformed input.
///
/// Only failures of `out` or `input` themselves are returned as errors;
/// malformed input ends the session normally.
pub fn run<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    mut input: I,
    mut out: W,
) -> io::Result<()> {
    loop {
        display::write_queue(&mut out, session.queue())?;
        if session.tier().has_reserve() {
            display::write_reserve(&mut out, session.reserve())?;
        }
        write_menu(&mut out, session.tier())?;
        out.flush()?;

        let choice = match read_choice(&mut input) {
            Ok(choice) => choice,
            Err(InputError::Io(e)) => return Err(e),
            Err(_) => {
                writeln!(out, "\nInvalid input. Exiting.")?;
                return Ok(());
            }
        };

        match Command::from_choice(choice, session.tier()) {
            Some(Command::Quit) => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            Some(command) => {
                let outcome = execute(session, command, &mut out)?;
                session.record(command.label(), &outcome);
            }
            None => writeln!(out, "Invalid option.")?,
        }
    }
}

fn write_menu<W: Write>(out: &mut W, tier: Tier) -> io::Result<()> {
    let title = match tier {
        Tier::Novice => "Novice",
        Tier::Adept => "Adept",
        Tier::Master => "Master",
    };
    writeln!(out, "\nMenu ({title} tier)")?;
    writeln!(out, "1 - Play piece")?;
    if tier.has_reserve() {
        writeln!(out, "2 - Reserve piece (queue -> reserve)")?;
        writeln!(out, "3 - Use reserved piece")?;
    } else {
        writeln!(out, "2 - Insert new piece")?;
    }
    if tier.has_swaps() {
        writeln!(out, "4 - Swap queue front with reserve top")?;
        writeln!(out, "5 - Swap first 3 of queue with the 3 reserved")?;
    }
    writeln!(out, "0 - Quit")?;
    write!(out, "Choice: ")
}

/// Runs one command, prints its result, and returns the headline for history.
fn execute<R: Rng, W: Write>(
    session: &mut Session<R>,
    command: Command,
    out: &mut W,
) -> io::Result<String> {
    let mut refilled = Vec::new();
    let headline = match command {
        Command::Play => match session.play() {
            Ok(transfer) => transferred("Playing piece", transfer, &mut refilled),
            Err(e) => failure_message(e),
        },
        Command::Reserve => match session.reserve_front() {
            Ok(transfer) => transferred("Reserved", transfer, &mut refilled),
            Err(e) => failure_message(e),
        },
        Command::InsertFresh => match session.insert_fresh() {
            Ok(piece) => format!("Inserted: {piece}"),
            Err(e) => failure_message(e),
        },
        Command::UseReserved => match session.use_reserved() {
            Ok(piece) => format!("Using reserved piece: {piece}"),
            Err(_) => "No reserved piece.".to_string(),
        },
        Command::SwapFrontWithTop => match session.swap_front_with_top() {
            Ok(()) => "Swapped: queue front <-> reserve top.".to_string(),
            Err(_) => "Cannot swap (queue and reserve must both hold pieces).".to_string(),
        },
        Command::SwapTriple => match session.swap_triple() {
            Ok(()) => "Swapped trio: first 3 of queue <-> 3 of reserve.".to_string(),
            Err(_) => format!(
                "Cannot swap (needs {RESERVE_CAPACITY} reserved pieces and at least 3 queued)."
            ),
        },
        Command::Quit => return Ok(String::new()),
    };

    writeln!(out, "{headline}")?;
    for piece in refilled {
        writeln!(out, "Auto refill: {piece}")?;
    }
    Ok(headline)
}

fn transferred(verb: &str, transfer: Transfer, refilled: &mut Vec<Piece>) -> String {
    *refilled = transfer.refilled;
    format!("{verb}: {}", transfer.piece)
}

fn failure_message(error: PieceError) -> String {
    match error {
        PieceError::Underflow(Container::Queue) => "Queue is empty!".to_string(),
        PieceError::CapacityExceeded(Container::Queue) => "Queue is full!".to_string(),
        PieceError::CapacityExceeded(Container::Reserve) => {
            format!("Reserve is full (capacity {RESERVE_CAPACITY}).")
        }
        other => format!("Operation failed: {other}."),
    }
}
