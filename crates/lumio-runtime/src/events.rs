use crate::{Error, Result};
use lumio_types::{ChatMessageEvent, truncate};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a JSONL event source; `None` or `-` reads stdin
pub fn open_event_source(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        None => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(p) if p == Path::new("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(p) => {
            let file = File::open(p)?;
            tracing::debug!(path = %p.display(), "reading events");
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Parse one event per line, failing on the first malformed line
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
pub fn load_events<R: BufRead>(reader: R) -> Result<Vec<ChatMessageEvent>> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(&line).map_err(|e| Error::Event {
            line: idx + 1,
            message: e.to_string(),
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Result of a lenient load
#[derive(Debug, Default)]
pub struct LenientLoad {
    pub events: Vec<ChatMessageEvent>,
    pub skipped: usize,
}

/// Parse one event per line, skipping lines that do not parse
///
/// Read errors still fail the load.
pub fn load_events_lenient<R: BufRead>(reader: R) -> Result<LenientLoad> {
    let mut load = LenientLoad::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(event) => load.events.push(event),
            Err(e) => {
                tracing::warn!(
                    line = idx + 1,
                    error = %e,
                    content = %truncate(&line, 80),
                    "skipping malformed event"
                );
                load.skipped += 1;
            }
        }
    }
    Ok(load)
}
