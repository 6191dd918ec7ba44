//! The validation engine: a static per-field sweep followed by four
//! conditional groups keyed on the form's discriminators.

use std::collections::BTreeSet;

use crate::catalog::{self, static_checks};
use crate::clock::Clock;
use crate::field::Field;
use crate::issue::{IssueCode, ValidationIssue, ValidationReport};
use crate::options::OTHER_OPTION;
use crate::record::{PaymentMethod, RegistrationDraft};
use crate::rules::regex_matches;

/// Validates the whole draft.
///
/// The static sweep runs first in form order, then the groups in a fixed
/// order: current-student requirements, the ID photo, the active payment
/// branch, and mentorship. Every group runs on every call; a field keeps
/// only the first issue raised against it.
pub fn validate(draft: &RegistrationDraft, clock: &dyn Clock) -> ValidationReport {
    let mut issues = Issues::default();

    for entry in catalog::STATIC_CHECKS {
        let value = draft.value(entry.field);
        if let Some(check) = entry
            .checks
            .iter()
            .find(|check| !check.rule.passes(&value, clock))
        {
            issues.push(entry.field, check.code, check.message);
        }
    }

    student_requirements(draft, &mut issues);
    id_photo_requirement(draft, &mut issues);
    payment_requirements(draft, &mut issues);
    mentorship_requirements(draft, &mut issues);

    ValidationReport::new(issues.list)
}

/// Runs only the static checks for one field, for blur-time feedback.
///
/// Conditional requirements stay quiet here; they surface on the full pass.
pub fn validate_field(
    draft: &RegistrationDraft,
    field: Field,
    clock: &dyn Clock,
) -> Option<ValidationIssue> {
    let value = draft.value(field);
    static_checks(field)
        .iter()
        .find(|check| !check.rule.passes(&value, clock))
        .map(|check| ValidationIssue::new(field, check.code, check.message))
}

/// Collector that enforces one issue per field, first writer wins.
#[derive(Default)]
struct Issues {
    list: Vec<ValidationIssue>,
    flagged: BTreeSet<Field>,
}

impl Issues {
    fn push(&mut self, field: Field, code: IssueCode, message: &'static str) {
        if self.flagged.insert(field) {
            self.list.push(ValidationIssue::new(field, code, message));
        }
    }
}

/// Units and transcript are only demanded of current students.
fn student_requirements(draft: &RegistrationDraft, issues: &mut Issues) {
    if draft.academic.is_graduate {
        return;
    }
    let units = draft.academic.units_threshold.trim();
    if units.is_empty() {
        issues.push(
            Field::UnitsThreshold,
            IssueCode::Required,
            catalog::UNITS_REQUIRED,
        );
    } else if !units_in_range(units) {
        issues.push(Field::UnitsThreshold, IssueCode::Range, catalog::UNITS_RANGE);
    }
    if draft.academic.tor_attachment.is_none() {
        issues.push(
            Field::TorAttachment,
            IssueCode::Required,
            catalog::TOR_REQUIRED,
        );
    }
}

fn units_in_range(text: &str) -> bool {
    text.parse::<i64>()
        .is_ok_and(|units| (catalog::UNITS_MIN..=catalog::UNITS_MAX).contains(&units))
}

/// The 1x1 photo is required of everyone, graduate or not.
fn id_photo_requirement(draft: &RegistrationDraft, issues: &mut Issues) {
    if draft.payment.id_photo.is_none() {
        issues.push(
            Field::IdPhoto,
            IssueCode::Required,
            catalog::ID_PHOTO_REQUIRED,
        );
    }
}

/// Only the branch for the selected payment method is checked; text left
/// behind in the other branches is ignored.
fn payment_requirements(draft: &RegistrationDraft, issues: &mut Issues) {
    let payment = &draft.payment;
    match payment.payment_method {
        PaymentMethod::Gcash => {
            let reference = &payment.gcash_reference_number;
            if reference.is_empty() {
                issues.push(
                    Field::GcashReferenceNumber,
                    IssueCode::Required,
                    catalog::REFERENCE_REQUIRED,
                );
            } else if !regex_matches(catalog::GCASH_REFERENCE_PATTERN, reference) {
                issues.push(
                    Field::GcashReferenceNumber,
                    IssueCode::Format,
                    catalog::GCASH_REFERENCE_FORMAT,
                );
            }
            if payment.gcash_proof_of_payment.is_none() {
                issues.push(
                    Field::GcashProofOfPayment,
                    IssueCode::Required,
                    catalog::PROOF_REQUIRED,
                );
            }
        }
        PaymentMethod::Bank => {
            if payment.bank_sender_name.is_empty() {
                issues.push(
                    Field::BankSenderName,
                    IssueCode::Required,
                    catalog::BANK_SENDER_REQUIRED,
                );
            }
            if payment.bank_name.is_empty() {
                issues.push(
                    Field::BankName,
                    IssueCode::Required,
                    catalog::BANK_NAME_REQUIRED,
                );
            }
            if payment.bank_account_number.is_empty() {
                issues.push(
                    Field::BankAccountNumber,
                    IssueCode::Required,
                    catalog::BANK_ACCOUNT_REQUIRED,
                );
            }
            let reference = &payment.bank_reference_number;
            if reference.is_empty() {
                issues.push(
                    Field::BankReferenceNumber,
                    IssueCode::Required,
                    catalog::REFERENCE_REQUIRED,
                );
            } else if reference.chars().count() < catalog::BANK_REFERENCE_MIN_CHARS {
                issues.push(
                    Field::BankReferenceNumber,
                    IssueCode::Length,
                    catalog::BANK_REFERENCE_SHORT,
                );
            }
            if payment.bank_proof_of_payment.is_none() {
                issues.push(
                    Field::BankProofOfPayment,
                    IssueCode::Required,
                    catalog::PROOF_REQUIRED,
                );
            }
        }
        PaymentMethod::Cash => {
            if payment.cash_payment_date.is_empty() {
                issues.push(
                    Field::CashPaymentDate,
                    IssueCode::Required,
                    catalog::CASH_DATE_REQUIRED,
                );
            }
            if payment.cash_received_by.is_empty() {
                issues.push(
                    Field::CashReceivedBy,
                    IssueCode::Required,
                    catalog::CASH_RECEIVER_REQUIRED,
                );
            }
        }
    }
}

/// Mentorship preferences are free-form until the member opts in.
fn mentorship_requirements(draft: &RegistrationDraft, issues: &mut Issues) {
    let mentorship = &draft.mentorship;
    if !mentorship.join_mentorship_program {
        return;
    }
    if mentorship.mentorship_areas.is_empty() {
        issues.push(
            Field::MentorshipAreas,
            IssueCode::Selection,
            catalog::MENTORSHIP_AREAS_REQUIRED,
        );
    }
    if mentorship.mentorship_areas.contains(OTHER_OPTION)
        && mentorship.mentorship_areas_other.is_empty()
    {
        issues.push(
            Field::MentorshipAreasOther,
            IssueCode::Required,
            catalog::MENTORSHIP_AREAS_OTHER_REQUIRED,
        );
    }
    if mentorship.mentorship_industry_tracks.is_empty() {
        issues.push(
            Field::MentorshipIndustryTracks,
            IssueCode::Selection,
            catalog::MENTORSHIP_TRACKS_REQUIRED,
        );
    }
    if mentorship.mentorship_industry_tracks.contains(OTHER_OPTION)
        && mentorship.mentorship_industry_tracks_other.is_empty()
    {
        issues.push(
            Field::MentorshipIndustryTracksOther,
            IssueCode::Required,
            catalog::MENTORSHIP_TRACKS_OTHER_REQUIRED,
        );
    }
    if mentorship.mentorship_format.is_empty() {
        issues.push(
            Field::MentorshipFormat,
            IssueCode::Selection,
            catalog::MENTORSHIP_FORMAT_REQUIRED,
        );
    }
    if mentorship.mentorship_availability.is_empty() {
        issues.push(
            Field::MentorshipAvailability,
            IssueCode::Required,
            catalog::MENTORSHIP_AVAILABILITY_REQUIRED,
        );
    }
}
