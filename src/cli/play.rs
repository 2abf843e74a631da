//! Interactive game against the engine
//!
//! The human plays X and moves first; the engine answers as O with a
//! full-depth search, so the best achievable result is a tie.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::board::{BoardState, Outcome, Player};
use crate::search;

/// Board side for interactive play. Moves are entered as one letter and
/// one digit, which caps the loop at the classic board.
const BOARD_SIZE: usize = 3;

pub fn execute() -> Result<()> {
    println!("Welcome to Tic-Tac-Toe!");
    println!("You are X.  Please input your moves in the form <row><column>, e.g. 'b3'.");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut board = BoardState::new(BOARD_SIZE)?;
    while !board.outcome().is_decided() {
        println!("{board}");

        let (row, column) = prompt_move(&mut input, &board)?;
        board = board.apply_move(row, column, Player::X)?;
        if let Some(text) = victory_text(&board) {
            println!("{text}");
            return Ok(());
        }

        board = search::select_move(&board, Player::O)?;
        if let Some(text) = victory_text(&board) {
            println!("{text}");
            return Ok(());
        }
    }

    Ok(())
}

/// Prompt until the human enters a playable move.
fn prompt_move<R: BufRead>(input: &mut R, board: &BoardState) -> Result<(usize, usize)> {
    loop {
        print!("Enter your move: ");
        io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read move")? == 0 {
            bail!("input closed before the game finished");
        }

        let Some((row, column)) = parse_move(line.trim_end_matches(['\r', '\n']), board.size())
        else {
            println!("Please enter a valid move.");
            continue;
        };

        if !board.is_empty(row, column) {
            println!("That spot is taken.  Please enter a valid move.");
            continue;
        }

        return Ok((row, column));
    }
}

/// Parse a move like `b3` into 0-based (row, column) coordinates.
///
/// The row is a lowercase letter counting from `a` and the column a
/// 1-based digit; both must fall inside the board. Anything else is
/// rejected.
fn parse_move(input: &str, size: usize) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let (row_char, column_char) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }

    if !row_char.is_ascii_lowercase() {
        return None;
    }
    let row = row_char as usize - 'a' as usize;
    if row >= size {
        return None;
    }

    let column = column_char.to_digit(10)? as usize;
    if column == 0 || column > size {
        return None;
    }

    Some((row, column - 1))
}

/// Final text for a decided board: the rendered grid plus the result line
fn victory_text(board: &BoardState) -> Option<String> {
    let message = match board.outcome() {
        Outcome::Win(Player::X) => "You win!",
        Outcome::Win(Player::O) => "Computer wins!",
        Outcome::Tie => "It's a tie!",
        Outcome::Undetermined => return None,
    };
    Some(format!("{board}\n{message}"))
}
