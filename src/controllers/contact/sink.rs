//! Hand-off point for accepted contact submissions.
//!
//! Nothing is sent over the network. [`LogSink`] writes the payload to the log; a real
//! deployment would put an HTTP POST behind the same trait.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::validation::FormInput;

/// An accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub submitted_at: String,
}

impl SubmissionPayload {
    pub fn new(input: FormInput, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            email: input.email,
            message: input.message,
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Receives payloads once validation has passed.
pub trait SubmissionSink {
    fn deliver(&mut self, payload: &SubmissionPayload) -> anyhow::Result<()>;
}

/// Logs payloads at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&mut self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        let json = serde_json::to_string(payload)?;
        tracing::info!(payload = %json, "form payload (send to server)");
        Ok(())
    }
}

/// Keeps delivered payloads in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give another to the
/// page.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    payloads: Rc<RefCell<Vec<SubmissionPayload>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.payloads.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.borrow().is_empty()
    }
}

impl SubmissionSink for RecordingSink {
    fn deliver(&mut self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        self.payloads.borrow_mut().push(payload.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_payload_json_shape() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let payload = SubmissionPayload::new(
            FormInput::new("Al", "al@example.com", "Hello there, testing."),
            at,
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Al",
                "email": "al@example.com",
                "message": "Hello there, testing.",
                "submittedAt": "2026-03-14T09:26:53.000Z",
            })
        );
    }

    #[test]
    fn test_recording_sink_shares_buffer() {
        let handle = RecordingSink::new();
        let mut sink = handle.clone();
        let payload = SubmissionPayload::new(FormInput::new("Al", "a@b.c", "0123456789"), Utc::now());

        sink.deliver(&payload).unwrap();
        assert_eq!(handle.len(), 1);
        assert_eq!(handle.payloads()[0], payload);
    }

    #[test]
    fn test_log_sink_accepts_payload() {
        let payload = SubmissionPayload::new(FormInput::new("Al", "a@b.c", "0123456789"), Utc::now());
        assert!(LogSink.deliver(&payload).is_ok());
    }
}
