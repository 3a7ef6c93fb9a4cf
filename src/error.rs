use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("исходный файл не найден: {}", .0.display())]
    MissingSource(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
