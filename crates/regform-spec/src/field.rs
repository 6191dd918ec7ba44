use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier for every field the registration form collects.
///
/// Variant order follows the form top to bottom; validation reports and
/// progress summaries rely on it, so new fields go where the form shows them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Personal details
    FirstName,
    LastName,
    MiddleName,
    Suffix,
    MaidenName,
    DateOfBirth,
    Email,
    MobileNumber,
    CurrentAddress,
    Province,
    City,
    Barangay,
    ZipCode,
    // Academic standing
    Campus,
    DegreeProgram,
    IsGraduate,
    YearGraduated,
    StudentNumber,
    UnitsThreshold,
    TorAttachment,
    // Professional background
    CurrentEmployer,
    JobTitle,
    Industry,
    YearsOfExperience,
    // Mentorship programme
    JoinMentorshipProgram,
    MentorshipAreas,
    MentorshipAreasOther,
    MentorshipIndustryTracks,
    MentorshipIndustryTracksOther,
    MentorshipFormat,
    MentorshipAvailability,
    // Membership payment
    IdPhoto,
    PaymentMethod,
    GcashReferenceNumber,
    GcashProofOfPayment,
    BankSenderName,
    BankName,
    BankAccountNumber,
    BankReferenceNumber,
    BankProofOfPayment,
    CashPaymentDate,
    CashReceivedBy,
    PaymentNotes,
    // Data privacy
    DataPrivacyConsent,
}

impl Field {
    /// Every field in form order.
    pub const ALL: &[Field] = &[
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
        Field::Campus,
        Field::DegreeProgram,
        Field::IsGraduate,
        Field::YearGraduated,
        Field::StudentNumber,
        Field::UnitsThreshold,
        Field::TorAttachment,
        Field::CurrentEmployer,
        Field::JobTitle,
        Field::Industry,
        Field::YearsOfExperience,
        Field::JoinMentorshipProgram,
        Field::MentorshipAreas,
        Field::MentorshipAreasOther,
        Field::MentorshipIndustryTracks,
        Field::MentorshipIndustryTracksOther,
        Field::MentorshipFormat,
        Field::MentorshipAvailability,
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
        Field::DataPrivacyConsent,
    ];

    /// Name the field carries on the wire and in the browser form state.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::MiddleName => "middleName",
            Field::Suffix => "suffix",
            Field::MaidenName => "maidenName",
            Field::DateOfBirth => "dateOfBirth",
            Field::Email => "email",
            Field::MobileNumber => "mobileNumber",
            Field::CurrentAddress => "currentAddress",
            Field::Province => "province",
            Field::City => "city",
            Field::Barangay => "barangay",
            Field::ZipCode => "zipCode",
            Field::Campus => "campus",
            Field::DegreeProgram => "degreeProgram",
            Field::IsGraduate => "isGraduate",
            Field::YearGraduated => "yearGraduated",
            Field::StudentNumber => "studentNumber",
            Field::UnitsThreshold => "unitsThreshold",
            Field::TorAttachment => "torAttachment",
            Field::CurrentEmployer => "currentEmployer",
            Field::JobTitle => "jobTitle",
            Field::Industry => "industry",
            Field::YearsOfExperience => "yearsOfExperience",
            Field::JoinMentorshipProgram => "joinMentorshipProgram",
            Field::MentorshipAreas => "mentorshipAreas",
            Field::MentorshipAreasOther => "mentorshipAreasOther",
            Field::MentorshipIndustryTracks => "mentorshipIndustryTracks",
            Field::MentorshipIndustryTracksOther => "mentorshipIndustryTracksOther",
            Field::MentorshipFormat => "mentorshipFormat",
            Field::MentorshipAvailability => "mentorshipAvailability",
            Field::IdPhoto => "idPhoto",
            Field::PaymentMethod => "paymentMethod",
            Field::GcashReferenceNumber => "gcashReferenceNumber",
            Field::GcashProofOfPayment => "gcashProofOfPayment",
            Field::BankSenderName => "bankSenderName",
            Field::BankName => "bankName",
            Field::BankAccountNumber => "bankAccountNumber",
            Field::BankReferenceNumber => "bankReferenceNumber",
            Field::BankProofOfPayment => "bankProofOfPayment",
            Field::CashPaymentDate => "cashPaymentDate",
            Field::CashReceivedBy => "cashReceivedBy",
            Field::PaymentNotes => "paymentNotes",
            Field::DataPrivacyConsent => "dataPrivacyConsent",
        }
    }

    /// Looks a field up by its wire name.
    pub fn from_wire_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.wire_name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
