// PagePulse - core/form.rs
//
// Submission affordances shared by the signup and contact forms: the
// busy state that relabels and disables the submit control, the settle
// delay before the success notice, and the textarea row fit.
//
// There is no transport behind the forms. A submission is a timed state
// transition, which is exactly what the affordances need to be testable.

use crate::util::constants;
use std::time::{Duration, Instant};

/// Which form a controller belongs to. Determines labels and the
/// success message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Signup,
    Contact,
}

impl FormKind {
    /// Label on the submit control when the form is idle.
    pub fn idle_label(self) -> &'static str {
        match self {
            Self::Signup => "Sign Up",
            Self::Contact => "Send Message",
        }
    }

    /// Label on the submit control while the form is submitting.
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Signup => constants::SUBMIT_BUSY_LABEL,
            Self::Contact => constants::CONTACT_BUSY_LABEL,
        }
    }

    /// Notice shown when a submission settles.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Signup => constants::SIGNUP_SUCCESS_MESSAGE,
            Self::Contact => constants::CONTACT_SUCCESS_MESSAGE,
        }
    }
}

/// Per-form submission state machine.
///
/// The submit control must always come back: `finish_submit` is
/// unconditional, so no path through a submission can leave the button
/// stuck on its busy label.
#[derive(Debug)]
pub struct FormController {
    kind: FormKind,
    submitting_since: Option<Instant>,
}

impl FormController {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            submitting_since: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting_since.is_some()
    }

    /// Current label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            self.kind.busy_label()
        } else {
            self.kind.idle_label()
        }
    }

    /// Start a submission. Returns false (and changes nothing) when one
    /// is already in flight, so a double-activation cannot restart the
    /// settle clock.
    pub fn begin_submit(&mut self, now: Instant) -> bool {
        if self.submitting_since.is_some() {
            return false;
        }
        tracing::info!(form = ?self.kind, "Form submission started");
        self.submitting_since = Some(now);
        true
    }

    /// Complete the submission and re-enable the submit control.
    pub fn finish_submit(&mut self) {
        if self.submitting_since.take().is_some() {
            tracing::info!(form = ?self.kind, "Form submission finished");
        }
    }

    /// Poll the settle clock. Returns true exactly once per submission,
    /// when the settle delay has elapsed; the controller is idle again
    /// afterwards.
    pub fn poll_settled(&mut self, now: Instant) -> bool {
        match self.submitting_since {
            Some(since)
                if now.saturating_duration_since(since)
                    >= Duration::from_millis(constants::FORM_SETTLE_MS) =>
            {
                self.finish_submit();
                true
            }
            _ => false,
        }
    }
}

/// Number of rows a multi-line text field should occupy for `text`:
/// one per line, never fewer than `min_rows`.
pub fn fit_rows(text: &str, min_rows: usize) -> usize {
    text.split('\n').count().max(min_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_labels() {
        let signup = FormController::new(FormKind::Signup);
        let contact = FormController::new(FormKind::Contact);
        assert_eq!(signup.submit_label(), "Sign Up");
        assert_eq!(contact.submit_label(), "Send Message");
    }

    #[test]
    fn test_busy_labels_differ_per_form() {
        let now = Instant::now();
        let mut signup = FormController::new(FormKind::Signup);
        let mut contact = FormController::new(FormKind::Contact);
        signup.begin_submit(now);
        contact.begin_submit(now);
        assert_eq!(signup.submit_label(), "Processing...");
        assert_eq!(contact.submit_label(), "Sending...");
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let now = Instant::now();
        let mut form = FormController::new(FormKind::Contact);
        assert!(form.begin_submit(now));
        assert!(!form.begin_submit(now));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_settle_fires_once_after_delay() {
        let t0 = Instant::now();
        let mut form = FormController::new(FormKind::Contact);
        form.begin_submit(t0);

        let early = t0 + Duration::from_millis(constants::FORM_SETTLE_MS - 1);
        assert!(!form.poll_settled(early));
        assert!(form.is_submitting());

        let late = t0 + Duration::from_millis(constants::FORM_SETTLE_MS);
        assert!(form.poll_settled(late));
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), "Send Message");

        // Already settled: nothing more to report.
        assert!(!form.poll_settled(late + Duration::from_millis(50)));
    }

    #[test]
    fn test_finish_submit_always_reenables() {
        let now = Instant::now();
        let mut form = FormController::new(FormKind::Signup);
        form.begin_submit(now);
        form.finish_submit();
        assert!(!form.is_submitting());
        // Idempotent on an idle form.
        form.finish_submit();
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_can_resubmit_after_settle() {
        let t0 = Instant::now();
        let mut form = FormController::new(FormKind::Contact);
        form.begin_submit(t0);
        let settled = t0 + Duration::from_millis(constants::FORM_SETTLE_MS);
        assert!(form.poll_settled(settled));
        assert!(form.begin_submit(settled));
    }

    #[test]
    fn test_fit_rows() {
        assert_eq!(fit_rows("", 3), 3);
        assert_eq!(fit_rows("one line", 3), 3);
        assert_eq!(fit_rows("a\nb\nc\nd", 3), 4);
        // A trailing newline opens an empty row the caret sits on.
        assert_eq!(fit_rows("a\nb\nc\n", 3), 4);
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(
            FormKind::Contact.success_message(),
            "Thank you for your message! We will get back to you soon."
        );
        assert!(!FormKind::Signup.success_message().is_empty());
    }
}
