//! Interactive prompts and index-selection parsing.
//!
//! Commands display a numbered table and then ask for one index, a
//! comma-separated list of indices, or a two-element range. The parsing is
//! split from the terminal I/O so the validation rules are testable; the
//! `prompt_*` functions loop until the input passes.

use std::io::{self, Write};

use colored::Colorize;

use crate::{error, warning};

pub fn parse_index(input: &str, rows: usize) -> Result<usize, String> {
    let index: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("Input {} contains invalid characters", input.trim()))?;
    if index >= rows {
        return Err(format!("{} is an invalid index", index));
    }
    Ok(index)
}

pub fn parse_indices(input: &str, rows: usize) -> Result<Vec<usize>, String> {
    if !input
        .chars()
        .all(|c| c.is_ascii_digit() || c == ',' || c == ' ')
    {
        return Err(format!("Input {} contains invalid characters", input.trim()));
    }

    let mut selection = Vec::new();
    for choice in input.split(',') {
        let choice = choice.trim();
        let index: usize = choice
            .parse()
            .map_err(|_| format!("{} is an invalid index", choice))?;
        if index >= rows {
            return Err(format!("{} is an invalid index", index));
        }
        selection.push(index);
    }
    Ok(selection)
}

/// Parses exactly two comma-separated indices as an inclusive range.
pub fn parse_index_range(input: &str, rows: usize) -> Result<(usize, usize), String> {
    let indices = parse_indices(input, rows)?;
    let [start, end] = indices.as_slice() else {
        return Err("You may only enter a range containing two indices.".to_string());
    };
    if start > end {
        return Err(format!("{} is greater than {}", start, end));
    }
    Ok((*start, *end))
}

fn read_line(msg: &str) -> String {
    print!("{}: ", msg.cyan());
    if io::stdout().flush().is_err() {
        error!("Failed to flush stdout.");
    }

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => error!("Input closed."),
        Ok(_) => line.trim().to_string(),
        Err(e) => error!("Failed to read input: {}", e),
    }
}

pub fn prompt_line(msg: &str) -> String {
    loop {
        let line = read_line(msg);
        if !line.is_empty() {
            return line;
        }
        warning!("Input cannot be empty");
    }
}

pub fn prompt_index(msg: &str, rows: usize) -> usize {
    loop {
        let line = read_line(&format!("{} [0-{}]", msg, rows.saturating_sub(1)));
        match parse_index(&line, rows) {
            Ok(index) => return index,
            Err(e) => warning!("{}", e),
        }
    }
}

pub fn prompt_indices(msg: &str, rows: usize) -> Vec<usize> {
    loop {
        let line = read_line(msg);
        match parse_indices(&line, rows) {
            Ok(indices) => return indices,
            Err(e) => warning!("{}", e),
        }
    }
}

pub fn prompt_index_range(msg: &str, rows: usize) -> (usize, usize) {
    loop {
        let line = read_line(msg);
        match parse_index_range(&line, rows) {
            Ok(range) => return range,
            Err(e) => warning!("{}", e),
        }
    }
}

pub fn prompt_confirm(msg: &str) -> bool {
    loop {
        let line = read_line(&format!("{} [y/n]", msg));
        match line.to_lowercase().as_str() {
            "y" => return true,
            "n" => return false,
            other => warning!("{} is not one of y, n", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrQueue {
    Play,
    Queue,
    CreatePlaylist,
}

/// Asks whether to play or queue the selection; `with_create_playlist`
/// additionally offers turning the selection into a new playlist.
pub fn prompt_play_or_queue(msg: &str, with_create_playlist: bool) -> PlayOrQueue {
    let choices = if with_create_playlist {
        "p/q/cp"
    } else {
        "p/q"
    };
    loop {
        let line = read_line(&format!("{} [{}]", msg, choices));
        match line.to_lowercase().as_str() {
            "p" => return PlayOrQueue::Play,
            "q" => return PlayOrQueue::Queue,
            "cp" if with_create_playlist => return PlayOrQueue::CreatePlaylist,
            other => warning!("{} is not one of {}", other, choices),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOrAlbum {
    Track,
    Album,
}

pub fn prompt_track_or_album(msg: &str) -> TrackOrAlbum {
    loop {
        let line = read_line(&format!("{} [t/a]", msg));
        match line.to_lowercase().as_str() {
            "t" => return TrackOrAlbum::Track,
            "a" => return TrackOrAlbum::Album,
            other => warning!("{} is not one of t, a", other),
        }
    }
}
