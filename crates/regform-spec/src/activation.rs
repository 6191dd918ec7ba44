//! Which fields the form currently demands an answer for.

use std::collections::BTreeMap;

use crate::field::Field;
use crate::options::OTHER_OPTION;
use crate::record::{PaymentMethod, RegistrationDraft};

/// Requirement state for every field, keyed in form order.
pub type ActivationMap = BTreeMap<Field, bool>;

/// Computes which fields must be satisfied for the draft as it stands.
///
/// The UI places required markers off this map without running the engine.
/// Discriminators and always-optional fields map to `false`; there is
/// nothing to enforce on them.
pub fn resolve_activation(draft: &RegistrationDraft) -> ActivationMap {
    Field::ALL
        .iter()
        .map(|&field| (field, is_active(draft, field)))
        .collect()
}

fn is_active(draft: &RegistrationDraft, field: Field) -> bool {
    let method = draft.payment.payment_method;
    let student = !draft.academic.is_graduate;
    let mentoring = draft.mentorship.join_mentorship_program;
    match field {
        Field::FirstName
        | Field::LastName
        | Field::DateOfBirth
        | Field::Email
        | Field::MobileNumber
        | Field::CurrentAddress
        | Field::Province
        | Field::City
        | Field::Barangay
        | Field::ZipCode
        | Field::Campus
        | Field::DegreeProgram
        | Field::IdPhoto
        | Field::DataPrivacyConsent => true,
        Field::UnitsThreshold | Field::TorAttachment => student,
        Field::GcashReferenceNumber | Field::GcashProofOfPayment => {
            method == PaymentMethod::Gcash
        }
        Field::BankSenderName
        | Field::BankName
        | Field::BankAccountNumber
        | Field::BankReferenceNumber
        | Field::BankProofOfPayment => method == PaymentMethod::Bank,
        Field::CashPaymentDate | Field::CashReceivedBy => method == PaymentMethod::Cash,
        Field::MentorshipAreas
        | Field::MentorshipIndustryTracks
        | Field::MentorshipFormat
        | Field::MentorshipAvailability => mentoring,
        Field::MentorshipAreasOther => {
            mentoring && draft.mentorship.mentorship_areas.contains(OTHER_OPTION)
        }
        Field::MentorshipIndustryTracksOther => {
            mentoring
                && draft
                    .mentorship
                    .mentorship_industry_tracks
                    .contains(OTHER_OPTION)
        }
        Field::MiddleName
        | Field::Suffix
        | Field::MaidenName
        | Field::IsGraduate
        | Field::YearGraduated
        | Field::StudentNumber
        | Field::CurrentEmployer
        | Field::JobTitle
        | Field::Industry
        | Field::YearsOfExperience
        | Field::JoinMentorshipProgram
        | Field::PaymentMethod
        | Field::PaymentNotes => false,
    }
}
