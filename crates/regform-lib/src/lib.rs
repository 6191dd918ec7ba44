//! Embedding-friendly facade over the registration validation engine.
//!
//! A [`FormSession`] owns one draft and the clock, mirrors the blur/submit
//! rhythm of the browser form, and hands back the multipart payload once the
//! draft is clean.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use regform_spec::payload::PayloadError;
use regform_spec::{SystemClock, next_incomplete_section, section_status, validate, validate_field};

pub use regform_spec::{
    Clock, Field, FixedClock, FormSection, Registration, RegistrationDraft, SectionStatus,
    SubmissionPayload, ValidationIssue, ValidationReport,
};

/// Where the session stands after its last full validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NeedInput,
    Complete,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::NeedInput => "need_input",
            SessionStatus::Complete => "complete",
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("draft failed validation with {} issue(s)", .0.issues.len())]
    Invalid(ValidationReport),
    #[error("payload encoding failed: {0}")]
    Payload(#[from] PayloadError),
}

/// One registration form in flight.
pub struct FormSession {
    draft: RegistrationDraft,
    clock: Box<dyn Clock>,
    report: ValidationReport,
    complete: bool,
}

impl FormSession {
    /// Fresh session on the form defaults, using the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::from_draft(RegistrationDraft::default(), clock)
    }

    /// Resumes a previously saved draft.
    pub fn from_draft(draft: RegistrationDraft, clock: impl Clock + 'static) -> Self {
        Self {
            draft,
            clock: Box::new(clock),
            report: ValidationReport::default(),
            complete: false,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Mutable access for field edits; call [`FormSession::touch`] or
    /// [`FormSession::validate_all`] afterwards to refresh the issues.
    pub fn draft_mut(&mut self) -> &mut RegistrationDraft {
        self.complete = false;
        &mut self.draft
    }

    /// Blur-time feedback for one field: reruns its static checks and
    /// replaces whatever issue the field had.
    pub fn touch(&mut self, field: Field) -> Option<&ValidationIssue> {
        self.report.issues.retain(|issue| issue.field != field);
        if let Some(issue) = validate_field(&self.draft, field, self.clock.as_ref()) {
            self.report.issues.push(issue);
            self.complete = false;
        }
        self.report.issue_for(field)
    }

    /// Full validation pass; refreshes every issue and the session status.
    pub fn validate_all(&mut self) -> SessionStatus {
        self.report = validate(&self.draft, self.clock.as_ref());
        self.complete = self.report.is_valid();
        self.status()
    }

    /// Validates, finalizes, and builds the multipart payload.
    ///
    /// On failure the session keeps the report so the UI can highlight every
    /// field at once, the way the submit button does in the browser.
    pub fn submit(&mut self) -> Result<SubmissionPayload, SessionError> {
        match self.draft.finalize(self.clock.as_ref()) {
            Ok(registration) => {
                self.report = ValidationReport::default();
                self.complete = true;
                Ok(SubmissionPayload::from_registration(&registration))
            }
            Err(report) => {
                self.report = report.clone();
                self.complete = false;
                Err(SessionError::Invalid(report))
            }
        }
    }

    /// [`FormSession::submit`] plus JSON-encoding of the section parts.
    pub fn submit_encoded(&mut self) -> Result<Vec<(&'static str, String)>, SessionError> {
        let payload = self.submit()?;
        Ok(payload.encoded_parts()?)
    }

    pub fn status(&self) -> SessionStatus {
        if self.complete {
            SessionStatus::Complete
        } else {
            SessionStatus::NeedInput
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The issue currently held against `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.report.issue_for(field).map(|issue| issue.message.as_str())
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Wire-name/message map for binding error labels.
    pub fn error_map(&self) -> BTreeMap<&'static str, &str> {
        self.report
            .issues
            .iter()
            .map(|issue| (issue.field.wire_name(), issue.message.as_str()))
            .collect()
    }

    /// One line per issue, in report order.
    pub fn error_summary(&self) -> Vec<String> {
        self.report
            .issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect()
    }

    /// Per-step completion for the stepper header.
    pub fn progress(&self) -> BTreeMap<FormSection, SectionStatus> {
        section_status(&self.draft, &self.report)
    }

    /// First step that still has an issue.
    pub fn next_section(&self) -> Option<FormSection> {
        next_incomplete_section(&self.report)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
