//! Fixed-buffer read loop shared by both benchmark modes.

use std::io::{self, Read};

/// Capacity of the reusable read buffer.
pub(crate) const CHUNK_SIZE: usize = 64 * 1024;

/// Outcome of a single read.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Chunk<'a> {
    Data(&'a [u8]),
    EndOfFile,
}

/// Totals collected while draining a reader.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReadStats {
    pub(crate) bytes: u64,
    pub(crate) chunks: u64,
}

/// Reads a stream through one reusable buffer of [`CHUNK_SIZE`] bytes.
///
/// Each chunk borrows the buffer, so it must be dropped before the next
/// read overwrites it.
pub(crate) struct ChunkedReader<R> {
    reader: R,
    buffer: Box<[u8]>,
}

impl<R: Read> ChunkedReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self::with_capacity(reader, CHUNK_SIZE)
    }

    pub(crate) fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buffer: vec![0u8; capacity.max(1)].into_boxed_slice(),
        }
    }

    /// Read the next chunk. A zero-byte read is end of file; I/O failures
    /// are returned as errors rather than folded into end of file.
    pub(crate) fn next_chunk(&mut self) -> io::Result<Chunk<'_>> {
        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(0) => return Ok(Chunk::EndOfFile),
                Ok(read) => return Ok(Chunk::Data(&self.buffer[..read])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    /// Forward every chunk to `sink` until end of file.
    pub(crate) fn drain(&mut self, mut sink: impl FnMut(&[u8])) -> io::Result<ReadStats> {
        let mut stats = ReadStats::default();
        loop {
            match self.next_chunk()? {
                Chunk::Data(bytes) => {
                    stats.bytes += bytes.len() as u64;
                    stats.chunks += 1;
                    sink(bytes);
                }
                Chunk::EndOfFile => break,
            }
        }
        Ok(stats)
    }
}
