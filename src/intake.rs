//! Interactive console intake for the target word and the clue grids.
//!
//! Both prompts loop until valid input arrives; parsing is separated from
//! the prompt loops so it stays testable.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::grid::{Cell, Grid, Word, EMPTY_MARKER, WORD_LEN};

/// Prompts until a valid target word is entered.
pub fn prompt_word() -> Result<Word> {
    loop {
        let input = prompt_line(&format!("Enter a {WORD_LEN}-letter word to use"))?;
        match Word::parse(&input) {
            Ok(word) => return Ok(word),
            Err(err) => println!("Invalid input: {err}. Please try again."),
        }
    }
}

/// Prompts cell by cell for one clue grid.
///
/// Each cell accepts a single letter of the target word (stored as a
/// fixed clue) or `-` to leave the cell empty. The grid's current state
/// is echoed after every completed row.
pub fn prompt_clue_grid(word: &Word, grid_size: usize, parent_num: usize) -> Result<Grid> {
    let mut grid = Grid::empty(grid_size);
    println!("Please enter the initial grid for Parent {parent_num}.\n");

    for row in 0..grid_size {
        for col in 0..grid_size {
            loop {
                let input = prompt_line(&format!(
                    "Enter a letter for position ({row}, {col}) in Parent {parent_num}"
                ))?;
                match parse_clue_cell(&input, word) {
                    Some(cell) => {
                        grid.set(row, col, cell);
                        break;
                    }
                    None => println!(
                        "Invalid input. Please enter a single letter from the word or '{EMPTY_MARKER}' to leave the cell empty."
                    ),
                }
            }
        }

        for echo_row in 0..grid_size {
            println!("{}", grid.row_line(echo_row));
        }
    }

    println!("Grid for Parent {parent_num} has been set.\n");
    Ok(grid)
}

/// Parses one clue-cell entry: a single letter of the target word
/// (any case) becomes a fixed clue; the empty marker leaves the cell
/// empty. Anything else is invalid.
pub fn parse_clue_cell(input: &str, word: &Word) -> Option<Cell> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if first == EMPTY_MARKER {
        return Some(Cell::Empty);
    }
    let letter = first.to_ascii_lowercase();
    word.contains(letter).then_some(Cell::Fixed(letter))
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim().to_string())
}
