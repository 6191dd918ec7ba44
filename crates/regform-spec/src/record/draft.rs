use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::record::{Attachment, PaymentMethod};

/// Name, contact, and address block of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub suffix: String,
    pub maiden_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub mobile_number: String,
    pub current_address: String,
    pub province: String,
    pub city: String,
    pub barangay: String,
    pub zip_code: String,
}

impl Default for PersonalDetails {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            middle_name: String::new(),
            suffix: String::new(),
            maiden_name: String::new(),
            date_of_birth: String::new(),
            email: String::new(),
            mobile_number: String::new(),
            current_address: String::new(),
            province: "Cebu".to_string(),
            city: String::new(),
            barangay: String::new(),
            zip_code: String::new(),
        }
    }
}

/// Campus history, including the graduate/student split and its
/// student-only extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AcademicStanding {
    pub campus: String,
    pub degree_program: String,
    pub is_graduate: bool,
    pub year_graduated: String,
    pub student_number: String,
    pub units_threshold: String,
    pub tor_attachment: Option<Attachment>,
}

impl Default for AcademicStanding {
    fn default() -> Self {
        Self {
            campus: "UP Cebu".to_string(),
            degree_program: String::new(),
            is_graduate: false,
            year_graduated: String::new(),
            student_number: String::new(),
            units_threshold: String::new(),
            tor_attachment: None,
        }
    }
}

/// Employment block; everything here is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalBackground {
    pub current_employer: String,
    pub job_title: String,
    pub industry: String,
    pub years_of_experience: String,
}

/// Mentorship sign-up; the sub-fields only matter while the opt-in is on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MentorshipPreferences {
    pub join_mentorship_program: bool,
    pub mentorship_areas: BTreeSet<String>,
    pub mentorship_areas_other: String,
    pub mentorship_industry_tracks: BTreeSet<String>,
    pub mentorship_industry_tracks_other: String,
    pub mentorship_format: String,
    pub mentorship_availability: String,
}

/// Membership payment block.
///
/// All three method branches live side by side; switching methods leaves the
/// other branches' text in place, and only the active branch is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentSection {
    pub id_photo: Option<Attachment>,
    pub payment_method: PaymentMethod,
    pub gcash_reference_number: String,
    pub gcash_proof_of_payment: Option<Attachment>,
    pub bank_sender_name: String,
    pub bank_name: String,
    pub bank_account_number: String,
    pub bank_reference_number: String,
    pub bank_proof_of_payment: Option<Attachment>,
    pub cash_payment_date: String,
    pub cash_received_by: String,
    pub payment_notes: String,
}

/// The whole form as the browser holds it: every field present, with empty
/// strings and unchecked boxes standing in for unanswered questions.
///
/// Serialization flattens the sections into the single object the form state
/// uses on the wire, so `RegistrationDraft::default()` round-trips to the
/// same JSON the UI starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    #[serde(flatten)]
    pub personal: PersonalDetails,
    #[serde(flatten)]
    pub academic: AcademicStanding,
    #[serde(flatten)]
    pub professional: ProfessionalBackground,
    #[serde(flatten)]
    pub mentorship: MentorshipPreferences,
    #[serde(flatten)]
    pub payment: PaymentSection,
    pub data_privacy_consent: bool,
}

/// Borrowed view of one field's current value, independent of which section
/// owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    Items(&'a BTreeSet<String>),
    File(Option<&'a Attachment>),
}

impl FieldValue<'_> {
    /// Whether the user has supplied anything at all.
    pub fn is_answered(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Flag(flag) => *flag,
            FieldValue::Items(items) => !items.is_empty(),
            FieldValue::File(file) => file.is_some(),
        }
    }
}

impl RegistrationDraft {
    /// Flat, typed view over the sectioned draft.
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::FirstName => FieldValue::Text(&self.personal.first_name),
            Field::LastName => FieldValue::Text(&self.personal.last_name),
            Field::MiddleName => FieldValue::Text(&self.personal.middle_name),
            Field::Suffix => FieldValue::Text(&self.personal.suffix),
            Field::MaidenName => FieldValue::Text(&self.personal.maiden_name),
            Field::DateOfBirth => FieldValue::Text(&self.personal.date_of_birth),
            Field::Email => FieldValue::Text(&self.personal.email),
            Field::MobileNumber => FieldValue::Text(&self.personal.mobile_number),
            Field::CurrentAddress => FieldValue::Text(&self.personal.current_address),
            Field::Province => FieldValue::Text(&self.personal.province),
            Field::City => FieldValue::Text(&self.personal.city),
            Field::Barangay => FieldValue::Text(&self.personal.barangay),
            Field::ZipCode => FieldValue::Text(&self.personal.zip_code),
            Field::Campus => FieldValue::Text(&self.academic.campus),
            Field::DegreeProgram => FieldValue::Text(&self.academic.degree_program),
            Field::IsGraduate => FieldValue::Flag(self.academic.is_graduate),
            Field::YearGraduated => FieldValue::Text(&self.academic.year_graduated),
            Field::StudentNumber => FieldValue::Text(&self.academic.student_number),
            Field::UnitsThreshold => FieldValue::Text(&self.academic.units_threshold),
            Field::TorAttachment => FieldValue::File(self.academic.tor_attachment.as_ref()),
            Field::CurrentEmployer => FieldValue::Text(&self.professional.current_employer),
            Field::JobTitle => FieldValue::Text(&self.professional.job_title),
            Field::Industry => FieldValue::Text(&self.professional.industry),
            Field::YearsOfExperience => FieldValue::Text(&self.professional.years_of_experience),
            Field::JoinMentorshipProgram => {
                FieldValue::Flag(self.mentorship.join_mentorship_program)
            }
            Field::MentorshipAreas => FieldValue::Items(&self.mentorship.mentorship_areas),
            Field::MentorshipAreasOther => {
                FieldValue::Text(&self.mentorship.mentorship_areas_other)
            }
            Field::MentorshipIndustryTracks => {
                FieldValue::Items(&self.mentorship.mentorship_industry_tracks)
            }
            Field::MentorshipIndustryTracksOther => {
                FieldValue::Text(&self.mentorship.mentorship_industry_tracks_other)
            }
            Field::MentorshipFormat => FieldValue::Text(&self.mentorship.mentorship_format),
            Field::MentorshipAvailability => {
                FieldValue::Text(&self.mentorship.mentorship_availability)
            }
            Field::IdPhoto => FieldValue::File(self.payment.id_photo.as_ref()),
            Field::PaymentMethod => FieldValue::Text(self.payment.payment_method.as_str()),
            Field::GcashReferenceNumber => {
                FieldValue::Text(&self.payment.gcash_reference_number)
            }
            Field::GcashProofOfPayment => {
                FieldValue::File(self.payment.gcash_proof_of_payment.as_ref())
            }
            Field::BankSenderName => FieldValue::Text(&self.payment.bank_sender_name),
            Field::BankName => FieldValue::Text(&self.payment.bank_name),
            Field::BankAccountNumber => FieldValue::Text(&self.payment.bank_account_number),
            Field::BankReferenceNumber => FieldValue::Text(&self.payment.bank_reference_number),
            Field::BankProofOfPayment => {
                FieldValue::File(self.payment.bank_proof_of_payment.as_ref())
            }
            Field::CashPaymentDate => FieldValue::Text(&self.payment.cash_payment_date),
            Field::CashReceivedBy => FieldValue::Text(&self.payment.cash_received_by),
            Field::PaymentNotes => FieldValue::Text(&self.payment.payment_notes),
            Field::DataPrivacyConsent => FieldValue::Flag(self.data_privacy_consent),
        }
    }
}
