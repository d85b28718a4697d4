//! Opening the raw source and the sink.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{EngineError, EngineResult};

/// Opens `path` for reading, or returns `stdin` when no path is given.
///
/// # Errors
///
/// Returns [`EngineError::SourceUnavailable`] when the file cannot be opened.
pub fn open_source<'a, R>(path: Option<&Path>, stdin: R) -> EngineResult<Box<dyn Read + 'a>>
where
    R: Read + 'a,
{
    match path {
        None => Ok(Box::new(stdin)),
        Some(path) => File::open(path)
            .map(|file| Box::new(file) as Box<dyn Read + 'a>)
            .map_err(|source| EngineError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }),
    }
}

/// Creates `path` for writing, or returns `stdout` when no path is given.
///
/// The file is created with create-new semantics, so an existing path is
/// never truncated or overwritten.
///
/// # Errors
///
/// Returns [`EngineError::SinkConflict`] when `path` already exists and
/// [`EngineError::SinkUnavailable`] for any other creation failure.
pub fn open_sink<'a, W>(path: Option<&Path>, stdout: W) -> EngineResult<Box<dyn Write + 'a>>
where
    W: Write + 'a,
{
    let Some(path) = path else {
        return Ok(Box::new(stdout));
    };

    match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok(Box::new(file)),
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
            Err(EngineError::SinkConflict {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(EngineError::SinkUnavailable {
            path: path.to_path_buf(),
            source,
        }),
    }
}
