//! Load recorded events back from disk so tests can match on them.
//!
//! Events are stored as JSON Lines, one [`Event`] per line. A recording
//! directory holds a zstd-compressed archive of older events
//! (`archive.jsonl.zst`, concatenated frames) next to the active log
//! (`app.jsonl`).

use crate::event::Event;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// File name of the active log inside a recording directory.
pub const ACTIVE_LOG: &str = "app.jsonl";

/// File name of the compressed archive inside a recording directory.
pub const ARCHIVE: &str = "archive.jsonl.zst";

/// Read every complete event from a JSON Lines file.
///
/// Empty lines are skipped. A final line without a trailing newline is a
/// torn write and is skipped too.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or with
/// [`io::ErrorKind::InvalidData`] if a complete line is not a valid event.
pub fn read_log(path: impl AsRef<Path>) -> io::Result<Vec<Event>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let events = read_lines(BufReader::new(file))?;
    log::debug!("eventmatch: read {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Read every event from a zstd archive of JSON Lines.
///
/// The archive may hold several concatenated frames; they are read as one
/// continuous stream. A missing archive yields no events.
///
/// # Errors
///
/// Returns an error if decompression fails or a line is not a valid event.
pub fn read_archive(path: impl AsRef<Path>) -> io::Result<Vec<Event>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let decoder = zstd::Decoder::new(File::open(path)?)?;
    let events = read_lines(BufReader::new(decoder))?;
    log::debug!(
        "eventmatch: read {} archived events from {}",
        events.len(),
        path.display()
    );
    Ok(events)
}

/// Read a whole recording directory: archived events first, then the
/// active log, preserving the order they were written in.
///
/// Either file may be missing.
///
/// # Examples
///
/// ```
/// use eventmatch::{assert_that, event_type, journal, sequence_of};
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(
///     dir.path().join(journal::ACTIVE_LOG),
///     "{\"type\":\"a\",\"data\":{},\"ts\":1}\n{\"type\":\"b\",\"data\":{},\"ts\":2}\n",
/// )
/// .unwrap();
///
/// let events = journal::read_recording(dir.path()).unwrap();
/// assert_that!(events.as_slice(), sequence_of![event_type("a"), event_type("b")]);
/// ```
pub fn read_recording(dir: impl AsRef<Path>) -> io::Result<Vec<Event>> {
    let dir = dir.as_ref();
    let mut events = read_archive(dir.join(ARCHIVE))?;
    match read_log(dir.join(ACTIVE_LOG)) {
        Ok(active) => events.extend(active),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    Ok(events)
}

fn read_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_no += 1;

        let Some(content) = line.strip_suffix('\n') else {
            log::warn!("eventmatch: skipping partial line {line_no} (no trailing newline)");
            break;
        };
        let content = content.strip_suffix('\r').unwrap_or(content);
        if content.trim().is_empty() {
            continue;
        }

        let event: Event = serde_json::from_str(content).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("line {line_no}: {e}"))
        })?;
        events.push(event);
    }

    Ok(events)
}
