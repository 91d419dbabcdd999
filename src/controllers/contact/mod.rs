//! Contact form: validation, simulated submission and clearing.
//!
//! A submit attempt clears every error slot and the status line, then checks the three
//! field rules. Only when all pass is a payload built and handed to the
//! [`SubmissionSink`]; the status then reads "Sending message..." until the completion
//! timer fires, after which it reads the thank-you text and the fields are reset.
//!
//! At most one submission is in flight. Submitting again while sending is ignored, and
//! clearing the form cancels the pending completion.

mod sink;
mod validation;

pub use sink::{LogSink, RecordingSink, SubmissionPayload, SubmissionSink};
pub use validation::{
    is_valid_email, is_valid_message, is_valid_name, Field, FormInput, MESSAGE_MIN_CHARS, NAME_MIN_CHARS,
};

use std::time::Duration;

use crate::clock::Clock;
use crate::page::PageElements;
use crate::scheduler::{Scheduler, TimerId, TimerTask};
use crate::surface::{NodeId, UiSurface};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
}

impl SubmissionStatus {
    /// Text shown in the status line.
    pub fn text(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Sending => "Sending message...",
            SubmissionStatus::Success => "Thanks! We received your message.",
        }
    }
}

/// Result of a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one rule failed; the listed fields now show errors.
    Rejected(Vec<Field>),
    /// Validation passed and `payload` was handed off.
    Sending(SubmissionPayload),
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Clone, Copy)]
struct FieldSlots {
    input: Option<NodeId>,
    error: NodeId,
}

/// Drives the contact form.
pub struct ContactFormController {
    form: NodeId,
    clear_button: NodeId,
    status_line: NodeId,
    name: FieldSlots,
    email: FieldSlots,
    message: FieldSlots,
    status: SubmissionStatus,
    pending: Option<TimerId>,
    delay: Duration,
    sink: Box<dyn SubmissionSink>,
}

impl std::fmt::Debug for ContactFormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactFormController")
            .field("form", &self.form)
            .field("status", &self.status)
            .field("pending", &self.pending)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl ContactFormController {
    pub fn new<S: UiSurface + ?Sized>(
        surface: &S,
        elements: &PageElements,
        delay: Duration,
        sink: Box<dyn SubmissionSink>,
    ) -> Self {
        let slots = |field: Field, error: NodeId| FieldSlots {
            input: surface.form_field(elements.form, field.name()),
            error,
        };
        Self {
            form: elements.form,
            clear_button: elements.clear_button,
            status_line: elements.form_status,
            name: slots(Field::Name, elements.err_name),
            email: slots(Field::Email, elements.err_email),
            message: slots(Field::Message, elements.err_message),
            status: SubmissionStatus::Idle,
            pending: None,
            delay,
            sink,
        }
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn clear_button(&self) -> NodeId {
        self.clear_button
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Timer of the in-flight submission, if any.
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// Current error text of `field`.
    pub fn field_error<S: UiSurface + ?Sized>(&self, surface: &S, field: Field) -> String {
        surface.text(self.slots(field).error)
    }

    /// Current raw value of `field`.
    pub fn field_value<S: UiSurface + ?Sized>(&self, surface: &S, field: Field) -> String {
        self.slots(field)
            .input
            .map(|node| surface.value(node))
            .unwrap_or_default()
    }

    /// Handles a submit action. Default form navigation is always suppressed by the caller.
    pub fn submit<S: UiSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        scheduler: &mut Scheduler,
        clock: &dyn Clock,
    ) -> SubmitOutcome {
        if self.status == SubmissionStatus::Sending {
            tracing::debug!("submission already in flight");
            return SubmitOutcome::Busy;
        }

        let input = FormInput::new(
            &self.field_value(surface, Field::Name),
            &self.field_value(surface, Field::Email),
            &self.field_value(surface, Field::Message),
        );

        self.clear_errors(surface);
        self.set_status(surface, SubmissionStatus::Idle);

        let invalid = input.invalid_fields();
        if !invalid.is_empty() {
            for field in &invalid {
                surface.set_text(self.slots(*field).error, field.error_message());
            }
            tracing::debug!(?invalid, "contact form rejected");
            return SubmitOutcome::Rejected(invalid);
        }

        self.set_status(surface, SubmissionStatus::Sending);
        let payload = SubmissionPayload::new(input, clock.now());
        if let Err(err) = self.sink.deliver(&payload) {
            tracing::warn!(error = %err, "submission sink failed");
        }
        self.pending = Some(scheduler.set_timeout(self.delay, TimerTask::SubmissionComplete));
        SubmitOutcome::Sending(payload)
    }

    /// Completes the submission scheduled as `timer`.
    ///
    /// Returns false for a stale timer that no longer matches the pending submission.
    pub fn complete<S: UiSurface + ?Sized>(&mut self, surface: &mut S, timer: TimerId) -> bool {
        if self.pending != Some(timer) {
            return false;
        }
        self.pending = None;
        self.set_status(surface, SubmissionStatus::Success);
        surface.reset_form(self.form);
        tracing::debug!("contact form submitted");
        true
    }

    /// Resets values, errors and status, cancelling any pending completion.
    pub fn clear<S: UiSurface + ?Sized>(&mut self, surface: &mut S, scheduler: &mut Scheduler) {
        if let Some(timer) = self.pending.take() {
            scheduler.cancel(timer);
            tracing::debug!("pending submission cancelled");
        }
        surface.reset_form(self.form);
        self.clear_errors(surface);
        self.set_status(surface, SubmissionStatus::Idle);
    }

    fn slots(&self, field: Field) -> &FieldSlots {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn clear_errors<S: UiSurface + ?Sized>(&self, surface: &mut S) {
        for field in Field::ALL {
            surface.set_text(self.slots(field).error, "");
        }
    }

    fn set_status<S: UiSurface + ?Sized>(&mut self, surface: &mut S, status: SubmissionStatus) {
        self.status = status;
        surface.set_text(self.status_line, status.text());
    }
}
