use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::clock::Clock;
use crate::field::Field;
use crate::issue::{IssueCode, ValidationIssue, ValidationReport};
use crate::options::OTHER_OPTION;
use crate::record::{
    Attachment, BankPayment, CashPayment, GcashPayment, PaymentMethod, PaymentProof,
    PersonalDetails, ProfessionalBackground, RegistrationDraft,
};
use crate::validate::validate;

/// A registration that passed every rule, reshaped so the draft's invalid
/// states cannot be expressed: the academic record is either graduate or
/// student, and only the active payment branch survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub personal: PersonalDetails,
    pub academic: AcademicRecord,
    pub professional: ProfessionalBackground,
    pub mentorship: Option<MentorshipEnrollment>,
    pub id_photo: Attachment,
    pub payment: PaymentProof,
    pub payment_notes: String,
}

/// Graduate/student split of the academic section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AcademicRecord {
    Graduate(GraduateRecord),
    Student(StudentRecord),
}

impl AcademicRecord {
    pub fn campus(&self) -> &str {
        match self {
            AcademicRecord::Graduate(record) => &record.campus,
            AcademicRecord::Student(record) => &record.campus,
        }
    }

    pub fn degree_program(&self) -> &str {
        match self {
            AcademicRecord::Graduate(record) => &record.degree_program,
            AcademicRecord::Student(record) => &record.degree_program,
        }
    }

    pub fn student_number(&self) -> &str {
        match self {
            AcademicRecord::Graduate(record) => &record.student_number,
            AcademicRecord::Student(record) => &record.student_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraduateRecord {
    pub campus: String,
    pub degree_program: String,
    /// Graduates may leave the year blank.
    pub year_graduated: Option<i32>,
    pub student_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub campus: String,
    pub degree_program: String,
    pub student_number: String,
    pub units_completed: u16,
    pub transcript: Attachment,
}

/// Mentorship answers, present only when the member opted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipEnrollment {
    pub areas: BTreeSet<String>,
    /// Filled only when `areas` contains the "other" sentinel.
    pub areas_other: String,
    pub industry_tracks: BTreeSet<String>,
    /// Filled only when `industry_tracks` contains the "other" sentinel.
    pub industry_tracks_other: String,
    pub format: String,
    pub availability: String,
}

impl RegistrationDraft {
    /// Validates the draft and, when clean, lifts it into the typed
    /// [`Registration`] aggregate.
    ///
    /// The error is the same report [`validate`] produces, so callers get
    /// identical issues whether they validate first or go straight here.
    pub fn finalize(&self, clock: &dyn Clock) -> Result<Registration, ValidationReport> {
        let report = validate(self, clock);
        if !report.is_valid() {
            return Err(report);
        }
        let academic = self.academic_record()?;
        let payment = self.payment_proof()?;
        let Some(id_photo) = self.payment.id_photo.clone() else {
            return Err(issue_report(
                Field::IdPhoto,
                IssueCode::Required,
                catalog::ID_PHOTO_REQUIRED,
            ));
        };
        Ok(Registration {
            personal: self.personal.clone(),
            academic,
            professional: self.professional.clone(),
            mentorship: self.mentorship_enrollment(),
            id_photo,
            payment,
            payment_notes: self.payment.payment_notes.clone(),
        })
    }

    fn academic_record(&self) -> Result<AcademicRecord, ValidationReport> {
        if self.academic.is_graduate {
            let year_graduated = if self.academic.year_graduated.is_empty() {
                None
            } else {
                self.academic.year_graduated.parse::<i32>().ok()
            };
            return Ok(AcademicRecord::Graduate(GraduateRecord {
                campus: self.academic.campus.clone(),
                degree_program: self.academic.degree_program.clone(),
                year_graduated,
                student_number: self.academic.student_number.clone(),
            }));
        }
        let Ok(units_completed) = self.academic.units_threshold.trim().parse::<u16>() else {
            return Err(issue_report(
                Field::UnitsThreshold,
                IssueCode::Range,
                catalog::UNITS_RANGE,
            ));
        };
        let Some(transcript) = self.academic.tor_attachment.clone() else {
            return Err(issue_report(
                Field::TorAttachment,
                IssueCode::Required,
                catalog::TOR_REQUIRED,
            ));
        };
        Ok(AcademicRecord::Student(StudentRecord {
            campus: self.academic.campus.clone(),
            degree_program: self.academic.degree_program.clone(),
            student_number: self.academic.student_number.clone(),
            units_completed,
            transcript,
        }))
    }

    fn payment_proof(&self) -> Result<PaymentProof, ValidationReport> {
        match self.payment.payment_method {
            PaymentMethod::Gcash => {
                let Some(proof) = self.payment.gcash_proof_of_payment.clone() else {
                    return Err(issue_report(
                        Field::GcashProofOfPayment,
                        IssueCode::Required,
                        catalog::PROOF_REQUIRED,
                    ));
                };
                Ok(PaymentProof::Gcash(GcashPayment {
                    reference_number: self.payment.gcash_reference_number.clone(),
                    proof,
                }))
            }
            PaymentMethod::Bank => {
                let Some(proof) = self.payment.bank_proof_of_payment.clone() else {
                    return Err(issue_report(
                        Field::BankProofOfPayment,
                        IssueCode::Required,
                        catalog::PROOF_REQUIRED,
                    ));
                };
                Ok(PaymentProof::Bank(BankPayment {
                    sender_name: self.payment.bank_sender_name.clone(),
                    bank_name: self.payment.bank_name.clone(),
                    account_number: self.payment.bank_account_number.clone(),
                    reference_number: self.payment.bank_reference_number.clone(),
                    proof,
                }))
            }
            PaymentMethod::Cash => Ok(PaymentProof::Cash(CashPayment {
                payment_date: self.payment.cash_payment_date.clone(),
                received_by: self.payment.cash_received_by.clone(),
            })),
        }
    }

    fn mentorship_enrollment(&self) -> Option<MentorshipEnrollment> {
        if !self.mentorship.join_mentorship_program {
            return None;
        }
        let areas = self.mentorship.mentorship_areas.clone();
        let industry_tracks = self.mentorship.mentorship_industry_tracks.clone();
        // Stale elaborations are dropped when "other" is no longer selected.
        let areas_other = if areas.contains(OTHER_OPTION) {
            self.mentorship.mentorship_areas_other.clone()
        } else {
            String::new()
        };
        let industry_tracks_other = if industry_tracks.contains(OTHER_OPTION) {
            self.mentorship.mentorship_industry_tracks_other.clone()
        } else {
            String::new()
        };
        Some(MentorshipEnrollment {
            areas,
            areas_other,
            industry_tracks,
            industry_tracks_other,
            format: self.mentorship.mentorship_format.clone(),
            availability: self.mentorship.mentorship_availability.clone(),
        })
    }
}

fn issue_report(field: Field, code: IssueCode, message: &'static str) -> ValidationReport {
    ValidationReport::single(ValidationIssue::new(field, code, message))
}
