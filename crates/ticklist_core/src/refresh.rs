//! Refresh signal listener.
//!
//! # Responsibility
//! - Parse the one-way server event stream line by line.
//! - Trigger a full page reload on the refresh sentinel frame.
//!
//! # Invariants
//! - Only the `refresh` event with data `true` triggers a reload.
//! - Comment, retry and unknown lines never produce frames.
//! - The listener performs no acknowledgement, retry or reconnection.

use log::{debug, info};

/// Sentinel event name the server emits to force a reload.
pub const REFRESH_EVENT: &str = "refresh";
/// Sentinel payload accompanying the refresh event.
pub const REFRESH_PAYLOAD: &str = "true";

/// One dispatched server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    /// Event name; `message` when the server sent none.
    pub event: String,
    /// Data lines joined with `\n`.
    pub data: String,
}

impl SseFrame {
    fn is_refresh_sentinel(&self) -> bool {
        self.event == REFRESH_EVENT && self.data == REFRESH_PAYLOAD
    }
}

/// Host-provided reload capability.
///
/// The real embedding reloads the page; tests count invocations.
pub trait PageReloader {
    fn reload(&mut self);
}

/// Listens on a server-sent-event stream and reloads on the sentinel frame.
///
/// Feed the raw stream line by line; framing state is kept internally. Each
/// sentinel frame triggers exactly one reload.
pub struct RefreshListener<R: PageReloader> {
    reloader: R,
    pending_event: Option<String>,
    data_lines: Vec<String>,
}

impl<R: PageReloader> RefreshListener<R> {
    pub fn new(reloader: R) -> Self {
        Self {
            reloader,
            pending_event: None,
            data_lines: Vec::new(),
        }
    }

    /// Releases the wrapped reloader.
    pub fn into_inner(self) -> R {
        self.reloader
    }

    /// Consumes one raw line from the stream.
    ///
    /// Returns the dispatched frame when `line` completed one, whether or
    /// not it was the sentinel.
    pub fn push_line(&mut self, line: &str) -> Option<SseFrame> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            // keep-alive comment
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.pending_event = Some(value.to_string()),
            "data" => self.data_lines.push(value.to_string()),
            // retry hints and ids are the channel's concern, not ours
            _ => {}
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        if self.pending_event.is_none() && self.data_lines.is_empty() {
            return None;
        }

        let frame = SseFrame {
            event: self
                .pending_event
                .take()
                .unwrap_or_else(|| "message".to_string()),
            data: std::mem::take(&mut self.data_lines).join("\n"),
        };

        if frame.is_refresh_sentinel() {
            info!("event=refresh_signal module=refresh status=reload");
            self.reloader.reload();
        } else {
            debug!(
                "event=refresh_signal module=refresh status=ignored name={}",
                frame.event
            );
        }
        Some(frame)
    }
}
