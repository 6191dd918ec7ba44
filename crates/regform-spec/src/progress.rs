//! Per-section completion, for the stepper header.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::activation::resolve_activation;
use crate::field::Field;
use crate::issue::ValidationReport;
use crate::record::RegistrationDraft;

/// The six steps of the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    Personal,
    Academic,
    Professional,
    Mentorship,
    Payment,
    Consent,
}

impl FormSection {
    /// Steps in the order the form walks them.
    pub const ALL: &[FormSection] = &[
        FormSection::Personal,
        FormSection::Academic,
        FormSection::Professional,
        FormSection::Mentorship,
        FormSection::Payment,
        FormSection::Consent,
    ];

    /// Fields rendered on this step, in form order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormSection::Personal => &[
                Field::FirstName,
                Field::LastName,
                Field::MiddleName,
                Field::Suffix,
                Field::MaidenName,
                Field::DateOfBirth,
                Field::Email,
                Field::MobileNumber,
                Field::CurrentAddress,
                Field::Province,
                Field::City,
                Field::Barangay,
                Field::ZipCode,
            ],
            FormSection::Academic => &[
                Field::Campus,
                Field::DegreeProgram,
                Field::IsGraduate,
                Field::YearGraduated,
                Field::StudentNumber,
                Field::UnitsThreshold,
                Field::TorAttachment,
            ],
            FormSection::Professional => &[
                Field::CurrentEmployer,
                Field::JobTitle,
                Field::Industry,
                Field::YearsOfExperience,
            ],
            FormSection::Mentorship => &[
                Field::JoinMentorshipProgram,
                Field::MentorshipAreas,
                Field::MentorshipAreasOther,
                Field::MentorshipIndustryTracks,
                Field::MentorshipIndustryTracksOther,
                Field::MentorshipFormat,
                Field::MentorshipAvailability,
            ],
            FormSection::Payment => &[
                Field::IdPhoto,
                Field::PaymentMethod,
                Field::GcashReferenceNumber,
                Field::GcashProofOfPayment,
                Field::BankSenderName,
                Field::BankName,
                Field::BankAccountNumber,
                Field::BankReferenceNumber,
                Field::BankProofOfPayment,
                Field::CashPaymentDate,
                Field::CashReceivedBy,
                Field::PaymentNotes,
            ],
            FormSection::Consent => &[Field::DataPrivacyConsent],
        }
    }

    /// The step that renders the given field.
    pub fn containing(field: Field) -> FormSection {
        match field {
            Field::FirstName
            | Field::LastName
            | Field::MiddleName
            | Field::Suffix
            | Field::MaidenName
            | Field::DateOfBirth
            | Field::Email
            | Field::MobileNumber
            | Field::CurrentAddress
            | Field::Province
            | Field::City
            | Field::Barangay
            | Field::ZipCode => FormSection::Personal,
            Field::Campus
            | Field::DegreeProgram
            | Field::IsGraduate
            | Field::YearGraduated
            | Field::StudentNumber
            | Field::UnitsThreshold
            | Field::TorAttachment => FormSection::Academic,
            Field::CurrentEmployer
            | Field::JobTitle
            | Field::Industry
            | Field::YearsOfExperience => FormSection::Professional,
            Field::JoinMentorshipProgram
            | Field::MentorshipAreas
            | Field::MentorshipAreasOther
            | Field::MentorshipIndustryTracks
            | Field::MentorshipIndustryTracksOther
            | Field::MentorshipFormat
            | Field::MentorshipAvailability => FormSection::Mentorship,
            Field::IdPhoto
            | Field::PaymentMethod
            | Field::GcashReferenceNumber
            | Field::GcashProofOfPayment
            | Field::BankSenderName
            | Field::BankName
            | Field::BankAccountNumber
            | Field::BankReferenceNumber
            | Field::BankProofOfPayment
            | Field::CashPaymentDate
            | Field::CashReceivedBy
            | Field::PaymentNotes => FormSection::Payment,
            Field::DataPrivacyConsent => FormSection::Consent,
        }
    }
}

/// Completion snapshot for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionStatus {
    /// Fields the member has put anything into.
    pub answered: usize,
    /// Fields the activation map currently requires.
    pub required: usize,
    /// No validation issue touches the step.
    pub complete: bool,
}

/// Status per step for the draft and its latest report.
pub fn section_status(
    draft: &RegistrationDraft,
    report: &ValidationReport,
) -> BTreeMap<FormSection, SectionStatus> {
    let activation = resolve_activation(draft);
    FormSection::ALL
        .iter()
        .map(|&section| {
            let fields = section.fields();
            let answered = fields
                .iter()
                .filter(|&&field| draft.value(field).is_answered())
                .count();
            let required = fields
                .iter()
                .filter(|&&field| activation.get(&field).copied().unwrap_or(false))
                .count();
            let complete = !fields.iter().any(|&field| report.contains(field));
            (
                section,
                SectionStatus {
                    answered,
                    required,
                    complete,
                },
            )
        })
        .collect()
}

/// First step, in form order, that still has an issue.
pub fn next_incomplete_section(report: &ValidationReport) -> Option<FormSection> {
    FormSection::ALL
        .iter()
        .copied()
        .find(|section| section.fields().iter().any(|&field| report.contains(field)))
}
