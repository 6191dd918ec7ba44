use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::Field;

/// Machine-readable class of a validation failure.
///
/// The UI keys remediation hints off these; the human message already carries
/// the full wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    Required,
    Length,
    Format,
    Email,
    ReservedDomain,
    Range,
    Selection,
    FileType,
    FileSize,
    Consent,
}

impl IssueCode {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::Required => "required",
            IssueCode::Length => "length",
            IssueCode::Format => "format",
            IssueCode::Email => "email",
            IssueCode::ReservedDomain => "reserved_domain",
            IssueCode::Range => "range",
            IssueCode::Selection => "selection",
            IssueCode::FileType => "file_type",
            IssueCode::FileSize => "file_size",
            IssueCode::Consent => "consent",
        }
    }
}

/// A single failed rule, attached to the field the form should highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationIssue {
    pub field: Field,
    pub code: IssueCode,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: Field, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

/// Outcome of validating a whole draft.
///
/// Issues arrive in the order the rules ran and carry at most one entry per
/// field; the first failing rule for a field wins and the rest stay silent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Error)]
#[error("registration draft has {} validation issue(s)", issues.len())]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Report with a single issue.
    pub fn single(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The issue recorded for `field`, if any.
    pub fn issue_for(&self, field: Field) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.issue_for(field).is_some()
    }

    /// Fields with issues, in report order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.issues.iter().map(|issue| issue.field)
    }
}
