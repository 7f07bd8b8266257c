//! Timekeeper task: serves the current wall-clock time on demand.
//!
//! The game loop occasionally needs "the time right now" computed by a
//! second thread of control. This crate runs that producer as a dedicated
//! Tokio task and hands values over through an explicit request/response
//! rendezvous: the consumer sends one request carrying a reply channel, the
//! producer computes exactly one fresh timestamp and sends it back, the
//! consumer blocks until it arrives. Neither side polls, and a reply can
//! never be a leftover from an earlier request.
//!
//! The task runs for the process lifetime and is never joined; it exits on
//! its own when every [`ClockHandle`] has been dropped. This is a
//! best-effort protocol for an interactive prompt — callers must not rely
//! on bounded latency.

use chrono::{DateTime, Local};
use tokio::sync::{mpsc, oneshot};

/// Format of a served timestamp: `07:30 PM, Tuesday, October 24, 2017`.
const TIME_FORMAT: &str = "%I:%M %p, %A, %B %d, %Y";

/// Command channel depth. Requests arrive one at a time from a single
/// prompt loop, so this only needs headroom, not throughput.
const CHANNEL_SIZE: usize = 8;

/// Errors from the clock handoff.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The timekeeper task is gone (command or reply channel closed).
    #[error("timekeeper task is unavailable")]
    Unavailable,
}

/// Requests sent to the timekeeper task.
///
/// The `oneshot::Sender` is the reply channel: one request, one fresh
/// value, nothing shared in between.
enum ClockCommand {
    Now { reply: oneshot::Sender<String> },
}

/// Handle to the running timekeeper task.
///
/// Cheap to clone — it wraps an `mpsc::Sender`.
#[derive(Clone)]
pub struct ClockHandle {
    sender: mpsc::Sender<ClockCommand>,
}

impl ClockHandle {
    /// Requests one freshly computed timestamp and waits for it.
    ///
    /// Every call makes the producer compute a new value; replies are never
    /// cached or reused across requests.
    pub async fn now(&self) -> Result<String, ClockError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(ClockCommand::Now { reply: reply_tx })
            .await
            .map_err(|_| ClockError::Unavailable)?;
        reply_rx.await.map_err(|_| ClockError::Unavailable)
    }
}

/// Renders a timestamp in the served format.
pub fn format_timestamp(when: DateTime<Local>) -> String {
    when.format(TIME_FORMAT).to_string()
}

/// Spawns the timekeeper task and returns a handle to it.
pub fn spawn_clock() -> ClockHandle {
    let (tx, rx) = mpsc::channel(CHANNEL_SIZE);
    tokio::spawn(run_clock(rx));
    ClockHandle { sender: tx }
}

/// The producer loop: block on the next request, publish one value.
async fn run_clock(mut receiver: mpsc::Receiver<ClockCommand>) {
    tracing::debug!("timekeeper task started");

    while let Some(cmd) = receiver.recv().await {
        match cmd {
            ClockCommand::Now { reply } => {
                let stamp = format_timestamp(Local::now());
                // A dropped reply receiver just means the consumer gave up
                // waiting; nothing to do about it.
                let _ = reply.send(stamp);
            }
        }
    }

    tracing::debug!("timekeeper task stopped");
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_matches_documented_layout() {
        let when = Local.with_ymd_and_hms(2017, 10, 24, 19, 30, 0).unwrap();
        assert_eq!(format_timestamp(when), "07:30 PM, Tuesday, October 24, 2017");
    }

    #[test]
    fn test_format_uses_twelve_hour_clock() {
        let midnight = Local.with_ymd_and_hms(2024, 1, 1, 0, 5, 0).unwrap();
        assert!(format_timestamp(midnight).starts_with("12:05 AM"));

        let noon = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert!(format_timestamp(noon).starts_with("12:00 PM"));
    }
}
