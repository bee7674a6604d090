// ABOUTME: Input loading for the poseur application
// ABOUTME: Reads raw slide source lines from files or standard input

use crate::errors::{PoseurError, Result};
use log::info;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Read slide source lines from the given files, concatenated in argument
/// order, or from standard input when no files are named. Only the record
/// terminator is stripped from each line.
pub fn load_lines(paths: &[PathBuf]) -> Result<Vec<String>> {
    if paths.is_empty() {
        info!("Reading slide source from stdin");
        return read_lines(io::stdin().lock());
    }

    let mut lines = Vec::new();
    for path in paths {
        lines.extend(load_file(path)?);
    }
    Ok(lines)
}

/// Collect raw lines from any buffered reader.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(PoseurError::InputReadError)
}

fn load_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(PoseurError::PathNotFoundError(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(PoseurError::InputReadError)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    info!("Read {} lines from {:?}", lines.len(), path);
    Ok(lines)
}
