// ABOUTME: Error types for the poseur application
// ABOUTME: Provides structured error handling for input loading and display

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoseurError {
    #[error("Failed to read slide source: {0}")]
    InputReadError(#[from] std::io::Error),

    #[error("Slide source not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Terminal write error: {0}")]
    DisplayError(std::io::Error),
}

pub type Result<T> = std::result::Result<T, PoseurError>;
