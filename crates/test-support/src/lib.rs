//! Shared test utilities for the ddconv workspace.
//!
//! The readers here script exactly what each `read` call returns so tests can
//! place buffer boundaries inside multi-byte characters, inject upstream
//! failures, and drain a stream with unusual caller buffer sizes.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Reader that returns one scripted chunk per `read` call.
///
/// A chunk larger than the caller's buffer is split; the remainder is served
/// by the next call. Empty chunks are skipped because `Ok(0)` would signal
/// end-of-stream.
#[derive(Debug, Default)]
pub struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
    requested: Vec<usize>,
}

impl ChunkedReader {
    /// Creates a reader serving `chunks` in order.
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        Self {
            chunks: chunks
                .into_iter()
                .map(|chunk| chunk.as_ref().to_vec())
                .filter(|chunk| !chunk.is_empty())
                .collect(),
            requested: Vec::new(),
        }
    }

    /// Buffer lengths passed to every `read` call so far.
    pub fn requested_sizes(&self) -> &[usize] {
        &self.requested
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.requested.push(buf.len());
        let Some(chunk) = self.chunks.front_mut() else {
            return Ok(0);
        };

        let count = chunk.len().min(buf.len());
        buf[..count].copy_from_slice(&chunk[..count]);
        chunk.drain(..count);
        if chunk.is_empty() {
            self.chunks.pop_front();
        }
        Ok(count)
    }
}

/// Reader that yields `data` and then fails every later read with `kind`.
#[derive(Debug)]
pub struct FailingReader {
    data: Vec<u8>,
    position: usize,
    kind: io::ErrorKind,
}

impl FailingReader {
    /// Creates a reader that fails once `data` is exhausted.
    pub fn new(data: &[u8], kind: io::ErrorKind) -> Self {
        Self {
            data: data.to_vec(),
            position: 0,
            kind,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.data[self.position..];
        if remaining.is_empty() {
            return Err(io::Error::new(self.kind, "scripted upstream failure"));
        }
        let count = remaining.len().min(buf.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Ok(count)
    }
}

/// Reads `reader` to end-of-stream, cycling through `sizes` for the length of
/// each caller buffer.
pub fn drain_with_sizes<R: Read>(mut reader: R, sizes: &[usize]) -> io::Result<Vec<u8>> {
    assert!(
        sizes.iter().all(|&size| size > 0),
        "read sizes must be positive"
    );
    let mut output = Vec::new();
    let mut buf = Vec::new();

    for &size in sizes.iter().cycle() {
        buf.resize(size, 0);
        let count = reader.read(&mut buf)?;
        assert!(count <= size, "reader reported {count} bytes for a {size}-byte buffer");
        if count == 0 {
            break;
        }
        output.extend_from_slice(&buf[..count]);
    }
    Ok(output)
}

/// Splits `bytes` at the given offsets (clamped, sorted, deduplicated) into
/// non-empty chunks.
pub fn split_at_points(bytes: &[u8], points: &[usize]) -> Vec<Vec<u8>> {
    let mut cuts: Vec<usize> = points
        .iter()
        .map(|&point| point.min(bytes.len()))
        .collect();
    cuts.push(bytes.len());
    cuts.sort_unstable();
    cuts.dedup();

    let mut chunks = Vec::with_capacity(cuts.len());
    let mut start = 0;
    for cut in cuts {
        if cut > start {
            chunks.push(bytes[start..cut].to_vec());
            start = cut;
        }
    }
    chunks
}

/// Reader that fails with `ErrorKind::Interrupted` before every chunk it
/// serves, including the final end-of-stream.
#[derive(Debug)]
pub struct InterruptingReader {
    data: Vec<u8>,
    position: usize,
    interrupt_next: bool,
    interruptions: usize,
}

impl InterruptingReader {
    /// Creates a reader serving `data` with an interruption before each read.
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            position: 0,
            interrupt_next: true,
            interruptions: 0,
        }
    }

    /// Number of interruptions reported so far.
    pub fn interruptions(&self) -> usize {
        self.interruptions
    }
}

impl Read for InterruptingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            self.interruptions += 1;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt_next = true;
        let remaining = &self.data[self.position..];
        let count = remaining.len().min(buf.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Ok(count)
    }
}

/// Temporary directory removed on drop.
#[derive(Debug)]
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Creates a fresh temporary directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root of the directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the directory, whether or not it exists.
    pub fn join(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Writes `contents` to `name` and returns its path.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Reads `name` back.
    pub fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.join(name))
    }

    /// Reports whether `name` exists.
    pub fn exists(&self, name: &str) -> bool {
        self.join(name).exists()
    }
}
