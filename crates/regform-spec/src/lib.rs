#![allow(missing_docs)]

pub mod activation;
pub mod catalog;
pub mod clock;
pub mod examples;
pub mod field;
pub mod issue;
pub mod options;
pub mod payload;
pub mod progress;
pub mod record;
pub mod rules;
pub mod schema;
pub mod validate;

pub use activation::{ActivationMap, resolve_activation};
pub use clock::{Clock, FixedClock, SystemClock};
pub use examples::{graduate_draft, student_draft};
pub use field::Field;
pub use issue::{IssueCode, ValidationIssue, ValidationReport};
pub use options::{OTHER_OPTION, SelectOption};
pub use payload::{Part, PartBody, PayloadError, SubmissionPayload};
pub use progress::{FormSection, SectionStatus, next_incomplete_section, section_status};
pub use record::{
    AcademicRecord, AcademicStanding, Attachment, BankPayment, CashPayment, FieldValue,
    GcashPayment, GraduateRecord, MentorshipEnrollment, MentorshipPreferences, PaymentMethod,
    PaymentProof, PaymentSection, PersonalDetails, ProfessionalBackground, Registration,
    RegistrationDraft, StudentRecord,
};
pub use rules::{Check, FieldChecks, ValueRule, is_email};
pub use schema::submission_schema;
pub use validate::{validate, validate_field};
