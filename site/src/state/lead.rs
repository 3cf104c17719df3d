//! Lead capture form state: the email draft plus submission lifecycle.
//!
//! ```text
//!            on_submit (blank/invalid)
//!   Idle ─────────────────────────────▶ Rejected(..)
//!    │  ▲                                   │
//!    │  └──────── on_email_change ──────────┘
//!    │ on_submit (valid)
//!    ▼
//!   Submitting ──complete(Ok)──▶ Succeeded
//!        └──────complete(Err)──▶ Failed (draft kept, retry with on_submit)
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::error::IntakeError;
use crate::intake::Lead;

// Deliberately loose: one `@`, no whitespace, a dot in the domain part.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email pattern is valid")
});

/// Syntax check applied at submission time.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// Field-level rejection, raised locally before any submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Empty,
    Malformed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LeadStatus {
    #[default]
    Idle,
    Rejected(FieldError),
    Submitting {
        email: String,
    },
    Succeeded {
        email: String,
    },
    Failed {
        email: String,
        reason: String,
    },
}

/// Result of activating the submit control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Hand this lead to the intake.
    Dispatch(Lead),
    Rejected(FieldError),
    /// A submission is already in flight; the activation is ignored.
    AlreadyPending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Success,
    Error,
}

impl NoticeTone {
    pub fn class(self) -> &'static str {
        match self {
            NoticeTone::Info => "lead-notice info",
            NoticeTone::Success => "lead-notice success",
            NoticeTone::Error => "lead-notice error",
        }
    }
}

/// User-visible message for the current status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub text: String,
}

impl Notice {
    fn new(tone: NoticeTone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    draft: String,
    status: LeadStatus,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn status(&self) -> &LeadStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, LeadStatus::Submitting { .. })
    }

    /// Replace the draft. Last write wins; no validation happens here.
    pub fn on_email_change(&mut self, value: impl Into<String>) {
        self.draft = value.into();
        if !self.is_submitting() {
            self.status = LeadStatus::Idle;
        }
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::AlreadyPending;
        }

        let email = self.draft.trim();
        let rejection = if email.is_empty() {
            Some(FieldError::Empty)
        } else if !is_valid_email(email) {
            Some(FieldError::Malformed)
        } else {
            None
        };

        if let Some(field_error) = rejection {
            self.status = LeadStatus::Rejected(field_error);
            return SubmitOutcome::Rejected(field_error);
        }

        let lead = Lead::new(email);
        info!(domain = lead.domain(), "dispatching lead");
        self.status = LeadStatus::Submitting {
            email: lead.email.clone(),
        };
        SubmitOutcome::Dispatch(lead)
    }

    /// Record the intake's answer for the pending submission.
    ///
    /// Ignored unless a submission is pending. On success the field is cleared
    /// if it still holds the submitted address; on failure the draft is kept so
    /// the visitor can retry without retyping.
    pub fn complete(&mut self, result: Result<(), IntakeError>) {
        let email = match &self.status {
            LeadStatus::Submitting { email } => email.clone(),
            _ => return,
        };

        match result {
            Ok(()) => {
                if self.draft.trim() == email {
                    self.draft.clear();
                }
                self.status = LeadStatus::Succeeded { email };
            }
            Err(err) => {
                warn!(error = %err, "lead submission failed");
                self.status = LeadStatus::Failed {
                    email,
                    reason: err.to_string(),
                };
            }
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match &self.status {
            LeadStatus::Idle => None,
            LeadStatus::Rejected(FieldError::Empty) => {
                Some(Notice::new(NoticeTone::Error, "Add your email first."))
            }
            LeadStatus::Rejected(FieldError::Malformed) => Some(Notice::new(
                NoticeTone::Error,
                "That doesn’t look like an email address. Check for typos.",
            )),
            LeadStatus::Submitting { email } => Some(Notice::new(
                NoticeTone::Info,
                format!("Sending {email}…"),
            )),
            LeadStatus::Succeeded { email } => Some(Notice::new(
                NoticeTone::Success,
                format!("Thanks! We’ll reach out to: {email}"),
            )),
            LeadStatus::Failed { .. } => Some(Notice::new(
                NoticeTone::Error,
                "We couldn’t send that just now. Your email is still here, so try again.",
            )),
        }
    }
}
