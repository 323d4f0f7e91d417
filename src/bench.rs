//! Timed benchmark passes over an input stream.

use std::io::{self, Read};
use std::time::Duration;

use crate::digest::{HexDigest, StreamingDigest};
use crate::mode::Mode;
use crate::reader::{ChunkedReader, ReadStats};
use crate::timing::Stopwatch;

/// Output of a single timed pass.
pub(crate) struct PassResult {
    pub(crate) stats: ReadStats,
    pub(crate) elapsed: Duration,
    pub(crate) digest: Option<HexDigest>,
}

/// Read `input` to the end once, hashing it in [`Mode::Hash`].
///
/// The buffer is allocated before the clock starts; finalization is
/// included in the measured time.
pub(crate) fn run_pass(input: impl Read, mode: Mode) -> io::Result<PassResult> {
    let mut reader = ChunkedReader::new(input);
    let watch = Stopwatch::start();
    match mode {
        Mode::Hash => {
            let mut digest = StreamingDigest::new();
            let stats = reader.drain(|chunk| digest.add_to_hash(chunk))?;
            debug_assert_eq!(digest.bytes_hashed(), stats.bytes);
            let digest = digest.finalize();
            Ok(PassResult {
                stats,
                elapsed: watch.elapsed(),
                digest: Some(digest),
            })
        }
        Mode::ReadOnly => {
            let stats = reader.drain(|_| {})?;
            Ok(PassResult {
                stats,
                elapsed: watch.elapsed(),
                digest: None,
            })
        }
    }
}
