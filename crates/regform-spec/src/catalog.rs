//! Every rule the form enforces, in one place.
//!
//! [`STATIC_CHECKS`] holds the per-field rules that apply regardless of what
//! else is on the form; the constants below parameterise those rules and the
//! conditional groups in [`crate::validate`].

use crate::field::Field;
use crate::issue::IssueCode;
use crate::rules::{Check, FieldChecks, ValueRule};

/// Institutional addresses are for current business, not alumni contact.
pub const RESERVED_EMAIL_DOMAIN: &str = "@up.edu.ph";

/// Philippine mobile numbers as the form accepts them.
pub const MOBILE_PATTERN: &str = r"^09\d{9}$";

pub const ZIP_PATTERN: &str = r"^\d{4}$";

/// GCash transaction references are always 13 digits.
pub const GCASH_REFERENCE_PATTERN: &str = r"^\d{13}$";

pub const BANK_REFERENCE_MIN_CHARS: usize = 6;

pub const EARLIEST_GRADUATION_YEAR: i32 = 1970;

pub const UNITS_MIN: i64 = 0;
pub const UNITS_MAX: i64 = 300;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

// Messages for the conditional groups. The static table below carries its
// messages inline next to the rule they belong to.
pub const UNITS_REQUIRED: &str = "Units completed is required for current students";
pub const UNITS_RANGE: &str = "Please enter a valid number of units (0-300)";
pub const TOR_REQUIRED: &str = "Transcript of Records is required for current students";
pub const ID_PHOTO_REQUIRED: &str = "1x1 ID photo is required";
pub const REFERENCE_REQUIRED: &str = "Reference number is required";
pub const GCASH_REFERENCE_FORMAT: &str = "Reference number must be exactly 13 digits";
pub const BANK_REFERENCE_SHORT: &str = "Reference number is too short (minimum 6 characters)";
pub const PROOF_REQUIRED: &str = "Proof of payment is required";
pub const BANK_SENDER_REQUIRED: &str = "Sender name is required";
pub const BANK_NAME_REQUIRED: &str = "Bank name is required";
pub const BANK_ACCOUNT_REQUIRED: &str = "Account number is required";
pub const CASH_DATE_REQUIRED: &str = "Payment date is required";
pub const CASH_RECEIVER_REQUIRED: &str = "Staff member name is required";
pub const MENTORSHIP_AREAS_REQUIRED: &str = "Please select at least one area of interest";
pub const MENTORSHIP_AREAS_OTHER_REQUIRED: &str = "Please specify your other area of interest";
pub const MENTORSHIP_TRACKS_REQUIRED: &str = "Please select at least one industry track";
pub const MENTORSHIP_TRACKS_OTHER_REQUIRED: &str = "Please specify your other industry track";
pub const MENTORSHIP_FORMAT_REQUIRED: &str = "Please select a mentorship format";
pub const MENTORSHIP_AVAILABILITY_REQUIRED: &str = "Please enter your availability";

/// Per-field rules that run on every validation pass, blur or submit.
///
/// Year, zip, and the proof-of-payment image rules tolerate an empty value;
/// presence for the conditional fields is enforced by the groups instead.
pub const STATIC_CHECKS: &[FieldChecks] = &[
    FieldChecks {
        field: Field::FirstName,
        checks: &[Check {
            rule: ValueRule::MinChars(2),
            code: IssueCode::Length,
            message: "First name is required",
        }],
    },
    FieldChecks {
        field: Field::LastName,
        checks: &[Check {
            rule: ValueRule::MinChars(2),
            code: IssueCode::Length,
            message: "Last name is required",
        }],
    },
    FieldChecks {
        field: Field::DateOfBirth,
        checks: &[Check {
            rule: ValueRule::Required,
            code: IssueCode::Required,
            message: "Date of birth is required",
        }],
    },
    FieldChecks {
        field: Field::Email,
        checks: &[
            Check {
                rule: ValueRule::Email,
                code: IssueCode::Email,
                message: "Please enter a valid email address",
            },
            Check {
                rule: ValueRule::OutsideDomain(RESERVED_EMAIL_DOMAIN),
                code: IssueCode::ReservedDomain,
                message: "UP email addresses are not allowed. Please use a personal email.",
            },
        ],
    },
    FieldChecks {
        field: Field::MobileNumber,
        checks: &[Check {
            rule: ValueRule::Matches(MOBILE_PATTERN),
            code: IssueCode::Format,
            message: "Please enter a valid mobile number (09XXXXXXXXX)",
        }],
    },
    FieldChecks {
        field: Field::CurrentAddress,
        checks: &[Check {
            rule: ValueRule::Required,
            code: IssueCode::Required,
            message: "Please enter your complete address",
        }],
    },
    FieldChecks {
        field: Field::Province,
        checks: &[Check {
            rule: ValueRule::Required,
            code: IssueCode::Required,
            message: "Province is required",
        }],
    },
    FieldChecks {
        field: Field::City,
        checks: &[Check {
            rule: ValueRule::Required,
            code: IssueCode::Required,
            message: "City is required",
        }],
    },
    FieldChecks {
        field: Field::Barangay,
        checks: &[Check {
            rule: ValueRule::Required,
            code: IssueCode::Required,
            message: "Barangay is required",
        }],
    },
    FieldChecks {
        field: Field::ZipCode,
        checks: &[Check {
            rule: ValueRule::Matches(ZIP_PATTERN),
            code: IssueCode::Format,
            message: "Zip code must be 4 digits",
        }],
    },
    FieldChecks {
        field: Field::Campus,
        checks: &[Check {
            rule: ValueRule::Required,
            code: IssueCode::Required,
            message: "Campus is required",
        }],
    },
    FieldChecks {
        field: Field::DegreeProgram,
        checks: &[Check {
            rule: ValueRule::MinChars(2),
            code: IssueCode::Length,
            message: "Degree program is required",
        }],
    },
    FieldChecks {
        field: Field::YearGraduated,
        checks: &[Check {
            rule: ValueRule::GraduationYear {
                earliest: EARLIEST_GRADUATION_YEAR,
            },
            code: IssueCode::Range,
            message: "Year must be between 1970 and current year",
        }],
    },
    FieldChecks {
        field: Field::GcashProofOfPayment,
        checks: &[
            Check {
                rule: ValueRule::ImageType(ALLOWED_IMAGE_TYPES),
                code: IssueCode::FileType,
                message: "Please upload a valid image (JPEG, PNG, or WebP)",
            },
            Check {
                rule: ValueRule::ImageSize(MAX_IMAGE_BYTES),
                code: IssueCode::FileSize,
                message: "Image must be less than 5MB",
            },
        ],
    },
    FieldChecks {
        field: Field::BankProofOfPayment,
        checks: &[
            Check {
                rule: ValueRule::ImageType(ALLOWED_IMAGE_TYPES),
                code: IssueCode::FileType,
                message: "Please upload a valid image (JPEG, PNG, or WebP)",
            },
            Check {
                rule: ValueRule::ImageSize(MAX_IMAGE_BYTES),
                code: IssueCode::FileSize,
                message: "Image must be less than 5MB",
            },
        ],
    },
    FieldChecks {
        field: Field::DataPrivacyConsent,
        checks: &[Check {
            rule: ValueRule::Consent,
            code: IssueCode::Consent,
            message: "You must accept the data privacy policy",
        }],
    },
];

/// Static checks for one field; empty for fields without any.
pub fn static_checks(field: Field) -> &'static [Check] {
    STATIC_CHECKS
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| entry.checks)
        .unwrap_or(&[])
}
