//! The multipart-shaped payload the backend ingests.
//!
//! Part names and key sets are a compatibility boundary with the deployed
//! API; change them only together with the backend.

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::record::{AcademicRecord, Attachment, PaymentProof, Registration};

pub const PERSONAL_DETAILS_PART: &str = "personalDetails";
pub const ACADEMIC_STATUS_PART: &str = "academicStatus";
pub const PROFESSIONAL_PART: &str = "professional";
pub const MEMBERSHIP_PART: &str = "membership";
pub const MENTORSHIP_PART: &str = "mentorship";
pub const GCASH_PROOF_PART: &str = "gcashProofOfPayment";
pub const BANK_PROOF_PART: &str = "bankProofOfPayment";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to encode part {part}: {source}")]
    Encode {
        part: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Body of one multipart entry: a JSON section or an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PartBody {
    Json(Value),
    File(Attachment),
}

/// A named multipart entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub name: &'static str,
    pub body: PartBody,
}

/// The whole submission, parts in the order the backend reads them.
///
/// Inactive payment branches flatten back to empty strings and an opted-out
/// mentorship to `false` plus empty lists, so the key set never varies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub parts: Vec<Part>,
}

impl SubmissionPayload {
    pub fn from_registration(registration: &Registration) -> Self {
        let mut parts = vec![
            Part {
                name: PERSONAL_DETAILS_PART,
                body: PartBody::Json(personal_details(registration)),
            },
            Part {
                name: ACADEMIC_STATUS_PART,
                body: PartBody::Json(academic_status(registration)),
            },
            Part {
                name: PROFESSIONAL_PART,
                body: PartBody::Json(professional(registration)),
            },
            Part {
                name: MEMBERSHIP_PART,
                body: PartBody::Json(membership(registration)),
            },
            Part {
                name: MENTORSHIP_PART,
                body: PartBody::Json(mentorship(registration)),
            },
        ];
        match &registration.payment {
            PaymentProof::Gcash(gcash) => parts.push(Part {
                name: GCASH_PROOF_PART,
                body: PartBody::File(gcash.proof.clone()),
            }),
            PaymentProof::Bank(bank) => parts.push(Part {
                name: BANK_PROOF_PART,
                body: PartBody::File(bank.proof.clone()),
            }),
            PaymentProof::Cash(_) => {}
        }
        Self { parts }
    }

    /// JSON body of the named section, if present.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.parts.iter().find_map(|part| match &part.body {
            PartBody::Json(value) if part.name == name => Some(value),
            _ => None,
        })
    }

    /// File parts, in order.
    pub fn attachments(&self) -> impl Iterator<Item = (&'static str, &Attachment)> {
        self.parts.iter().filter_map(|part| match &part.body {
            PartBody::File(file) => Some((part.name, file)),
            _ => None,
        })
    }

    /// JSON sections rendered to the strings a multipart body carries.
    pub fn encoded_parts(&self) -> Result<Vec<(&'static str, String)>, PayloadError> {
        self.parts
            .iter()
            .filter_map(|part| match &part.body {
                PartBody::Json(value) => Some((part.name, value)),
                PartBody::File(_) => None,
            })
            .map(|(name, value)| {
                serde_json::to_string(value)
                    .map(|encoded| (name, encoded))
                    .map_err(|source| PayloadError::Encode { part: name, source })
            })
            .collect()
    }
}

fn personal_details(registration: &Registration) -> Value {
    let personal = &registration.personal;
    json!({
        "firstName": personal.first_name,
        "middleName": personal.middle_name,
        "lastName": personal.last_name,
        "suffix": personal.suffix,
        "maidenName": personal.maiden_name,
        "dateOfBirth": personal.date_of_birth,
        "email": personal.email,
        "mobileNumber": personal.mobile_number,
        "currentAddress": personal.current_address,
        "province": personal.province,
        "city": personal.city,
        "barangay": personal.barangay,
        "zipCode": personal.zip_code,
    })
}

fn academic_status(registration: &Registration) -> Value {
    let year_graduated = match &registration.academic {
        AcademicRecord::Graduate(record) => record
            .year_graduated
            .map(|year| year.to_string())
            .unwrap_or_default(),
        AcademicRecord::Student(_) => String::new(),
    };
    json!({
        "campus": registration.academic.campus(),
        "degreeProgram": registration.academic.degree_program(),
        "yearGraduated": year_graduated,
        "studentNumber": registration.academic.student_number(),
    })
}

fn professional(registration: &Registration) -> Value {
    let professional = &registration.professional;
    json!({
        "currentEmployer": professional.current_employer,
        "jobTitle": professional.job_title,
        "industry": professional.industry,
        "yearsOfExperience": professional.years_of_experience,
    })
}

fn membership(registration: &Registration) -> Value {
    let mut gcash_reference = "";
    let mut bank_name = "";
    let mut bank_account = "";
    let mut bank_reference = "";
    let mut bank_sender = "";
    let mut cash_date = "";
    let mut cash_received_by = "";
    match &registration.payment {
        PaymentProof::Gcash(gcash) => gcash_reference = &gcash.reference_number,
        PaymentProof::Bank(bank) => {
            bank_name = &bank.bank_name;
            bank_account = &bank.account_number;
            bank_reference = &bank.reference_number;
            bank_sender = &bank.sender_name;
        }
        PaymentProof::Cash(cash) => {
            cash_date = &cash.payment_date;
            cash_received_by = &cash.received_by;
        }
    }
    json!({
        "paymentMethod": registration.payment.method().as_str(),
        "gcashReferenceNumber": gcash_reference,
        "bankName": bank_name,
        "bankAccountNumber": bank_account,
        "bankReferenceNumber": bank_reference,
        "bankSenderName": bank_sender,
        "cashPaymentDate": cash_date,
        "cashReceivedBy": cash_received_by,
        "paymentNotes": registration.payment_notes,
    })
}

fn mentorship(registration: &Registration) -> Value {
    match &registration.mentorship {
        Some(enrollment) => json!({
            "joinMentorshipProgram": true,
            "mentorshipAreas": enrollment.areas,
            "mentorshipAreasOther": enrollment.areas_other,
            "mentorshipAvailability": enrollment.availability,
            "mentorshipFormat": enrollment.format,
            "mentorshipIndustryTracks": enrollment.industry_tracks,
            "mentorshipIndustryTracksOther": enrollment.industry_tracks_other,
        }),
        None => json!({
            "joinMentorshipProgram": false,
            "mentorshipAreas": [],
            "mentorshipAreasOther": "",
            "mentorshipAvailability": "",
            "mentorshipFormat": "",
            "mentorshipIndustryTracks": [],
            "mentorshipIndustryTracksOther": "",
        }),
    }
}
