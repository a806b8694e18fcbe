//! JSONL session log.
//!
//! One JSON object per line, e.g.
//!
//! ```text
//! {"ts":1729000000000,"generation":0,"type":"swipe","outcome":"swipeLeft","question":"..."}
//! {"ts":1729000001000,"generation":1,"type":"reset","active_len":5}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent<'a> {
    Swipe { outcome: Outcome, question: &'a str },
    Cancelled,
    Reset { active_len: usize },
    ResetIgnored,
    MorePractice { active_len: usize },
    CardAdded { question: &'a str },
    StaleGestureDropped { ticket_generation: u64 },
}

#[derive(Serialize)]
struct Record<'a> {
    ts: u64,
    generation: u64,
    #[serde(flatten)]
    event: SessionEvent<'a>,
}

pub struct SessionLog {
    sink: Option<Box<dyn Write>>,
}

impl SessionLog {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open session log {path}"))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, generation: u64, event: SessionEvent<'_>) -> Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let record = Record {
            ts: now_ms(),
            generation,
            event,
        };
        serde_json::to_writer(&mut *sink, &record)?;
        sink.write_all(b"\n")?;
        sink.flush()?;
        Ok(())
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_are_tagged_json_lines() {
        let shared = Shared::default();
        let mut log = SessionLog::from_writer(shared.clone());
        log.record(
            0,
            SessionEvent::Swipe {
                outcome: Outcome::SwipeLeft,
                question: "Q1",
            },
        )
        .unwrap();
        log.record(1, SessionEvent::ResetIgnored).unwrap();

        let text = String::from_utf8(shared.0.borrow().clone()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "swipe");
        assert_eq!(lines[0]["outcome"], "swipeLeft");
        assert_eq!(lines[0]["question"], "Q1");
        assert_eq!(lines[0]["generation"], 0);
        assert!(lines[0]["ts"].as_u64().is_some());
        assert_eq!(lines[1]["type"], "reset_ignored");
        assert_eq!(lines[1]["generation"], 1);
    }

    #[test]
    fn disabled_log_accepts_records() {
        let mut log = SessionLog::disabled();
        assert!(!log.is_enabled());
        log.record(3, SessionEvent::Cancelled).unwrap();
    }
}
