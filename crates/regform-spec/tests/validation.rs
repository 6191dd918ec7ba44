use regform_spec::{
    Attachment, Field, FixedClock, IssueCode, PaymentMethod, RegistrationDraft, ValidationReport,
    catalog, graduate_draft, student_draft, validate, validate_field,
};

fn clock() -> FixedClock {
    FixedClock(2026)
}

fn message_for(report: &ValidationReport, field: Field) -> &str {
    report
        .issue_for(field)
        .map(|issue| issue.message.as_str())
        .unwrap_or_default()
}

#[test]
fn empty_draft_reports_every_missing_requirement() {
    let draft = RegistrationDraft::default();
    let report = validate(&draft, &clock());
    assert!(!report.is_valid());

    for field in [
        Field::FirstName,
        Field::LastName,
        Field::DateOfBirth,
        Field::Email,
        Field::MobileNumber,
        Field::CurrentAddress,
        Field::City,
        Field::Barangay,
        Field::ZipCode,
        Field::DegreeProgram,
        Field::UnitsThreshold,
        Field::TorAttachment,
        Field::IdPhoto,
        Field::GcashReferenceNumber,
        Field::GcashProofOfPayment,
        Field::DataPrivacyConsent,
    ] {
        assert!(report.contains(field), "expected issue for {field}");
    }

    // Defaulted selects and optional fields stay quiet.
    for field in [
        Field::Province,
        Field::Campus,
        Field::YearGraduated,
        Field::StudentNumber,
        Field::MiddleName,
        Field::CurrentEmployer,
        Field::MentorshipAreas,
        Field::BankName,
        Field::CashPaymentDate,
        Field::PaymentNotes,
    ] {
        assert!(!report.contains(field), "unexpected issue for {field}");
    }

    assert_eq!(
        message_for(&report, Field::FirstName),
        "First name is required"
    );
    assert_eq!(
        message_for(&report, Field::DataPrivacyConsent),
        "You must accept the data privacy policy"
    );
}

#[test]
fn example_drafts_validate_cleanly() {
    let graduate = validate(&graduate_draft(), &clock());
    assert!(graduate.is_valid(), "graduate: {:?}", graduate.issues);

    let student = validate(&student_draft(), &clock());
    assert!(student.is_valid(), "student: {:?}", student.issues);
}

#[test]
fn email_first_failure_wins() {
    let mut draft = graduate_draft();

    draft.personal.email = "not-an-email".into();
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::Email),
        "Please enter a valid email address"
    );
    let issue = report.issue_for(Field::Email).expect("email issue");
    assert_eq!(issue.code, IssueCode::Email);

    // Well-formed but on the reserved domain, case-insensitively.
    draft.personal.email = "maria@UP.edu.ph".into();
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::Email),
        "UP email addresses are not allowed. Please use a personal email."
    );
    let issue = report.issue_for(Field::Email).expect("email issue");
    assert_eq!(issue.code, IssueCode::ReservedDomain);

    draft.personal.email = "maria@gmail.com".into();
    let report = validate(&draft, &clock());
    assert!(!report.contains(Field::Email));
}

#[test]
fn graduation_year_bounds_follow_the_clock() {
    let mut draft = graduate_draft();

    draft.academic.year_graduated = String::new();
    assert!(validate(&draft, &clock()).is_valid());

    for bad in ["1969", "2027", "199x", "95", "20155"] {
        draft.academic.year_graduated = bad.into();
        let report = validate(&draft, &clock());
        assert_eq!(
            message_for(&report, Field::YearGraduated),
            "Year must be between 1970 and current year",
            "value {bad:?}"
        );
    }

    for good in ["1970", "2015", "2026"] {
        draft.academic.year_graduated = good.into();
        assert!(validate(&draft, &clock()).is_valid(), "value {good:?}");
    }
}

#[test]
fn student_requirements_follow_the_discriminator() {
    let mut draft = student_draft();

    draft.academic.units_threshold = String::new();
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::UnitsThreshold),
        "Units completed is required for current students"
    );

    for bad in ["abc", "-1", "301", "12.5"] {
        draft.academic.units_threshold = bad.into();
        let report = validate(&draft, &clock());
        assert_eq!(
            message_for(&report, Field::UnitsThreshold),
            "Please enter a valid number of units (0-300)",
            "value {bad:?}"
        );
    }

    for good in ["0", "300", " 87 "] {
        draft.academic.units_threshold = good.into();
        assert!(validate(&draft, &clock()).is_valid(), "value {good:?}");
    }

    draft.academic.tor_attachment = None;
    draft.academic.units_threshold = "87".into();
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::TorAttachment),
        "Transcript of Records is required for current students"
    );

    // Flipping the discriminator lifts both requirements, stale values and all.
    draft.academic.is_graduate = true;
    draft.academic.units_threshold = "9999".into();
    let report = validate(&draft, &clock());
    assert!(!report.contains(Field::UnitsThreshold));
    assert!(!report.contains(Field::TorAttachment));
    assert!(report.is_valid());
}

#[test]
fn payment_checks_cover_only_the_active_branch() {
    let mut draft = graduate_draft();
    draft.payment.payment_method = PaymentMethod::Bank;

    let report = validate(&draft, &clock());
    for field in [
        Field::BankSenderName,
        Field::BankName,
        Field::BankAccountNumber,
        Field::BankReferenceNumber,
        Field::BankProofOfPayment,
    ] {
        assert!(report.contains(field), "expected issue for {field}");
    }
    // The stale GCash branch stays silent.
    assert!(!report.contains(Field::GcashReferenceNumber));
    assert!(!report.contains(Field::GcashProofOfPayment));

    draft.payment.bank_sender_name = "Maria S. Villanueva".into();
    draft.payment.bank_name = "BPI".into();
    draft.payment.bank_account_number = "1234-5678-90".into();
    draft.payment.bank_reference_number = "ab123".into();
    draft.payment.bank_proof_of_payment =
        Some(Attachment::new("deposit-slip.jpg", "image/jpeg", 150_000));
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::BankReferenceNumber),
        "Reference number is too short (minimum 6 characters)"
    );

    draft.payment.bank_reference_number = "ab1234".into();
    assert!(validate(&draft, &clock()).is_valid());

    draft.payment.payment_method = PaymentMethod::Cash;
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::CashPaymentDate),
        "Payment date is required"
    );
    assert_eq!(
        message_for(&report, Field::CashReceivedBy),
        "Staff member name is required"
    );
}

#[test]
fn gcash_reference_must_be_thirteen_digits() {
    let mut draft = graduate_draft();

    draft.payment.gcash_reference_number = String::new();
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::GcashReferenceNumber),
        "Reference number is required"
    );

    for bad in ["123", "00237481569201", "002374815692a"] {
        draft.payment.gcash_reference_number = bad.into();
        let report = validate(&draft, &clock());
        assert_eq!(
            message_for(&report, Field::GcashReferenceNumber),
            "Reference number must be exactly 13 digits",
            "value {bad:?}"
        );
    }

    draft.payment.gcash_reference_number = "0023748156920".into();
    assert!(validate(&draft, &clock()).is_valid());
}

#[test]
fn proof_image_rules_apply_to_any_present_upload() {
    let mut draft = student_draft();
    // Cash payer with a stale GCash upload: the branch is inactive but the
    // file rules still look at the attachment itself.
    draft.payment.gcash_proof_of_payment =
        Some(Attachment::new("receipt.pdf", "application/pdf", 90_000));
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::GcashProofOfPayment),
        "Please upload a valid image (JPEG, PNG, or WebP)"
    );

    draft.payment.gcash_proof_of_payment = Some(Attachment::new(
        "receipt.png",
        "image/png",
        catalog::MAX_IMAGE_BYTES + 1,
    ));
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::GcashProofOfPayment),
        "Image must be less than 5MB"
    );

    draft.payment.gcash_proof_of_payment = Some(Attachment::new(
        "receipt.png",
        "image/png",
        catalog::MAX_IMAGE_BYTES,
    ));
    assert!(validate(&draft, &clock()).is_valid());
}

#[test]
fn mentorship_wants_an_elaboration_for_other() {
    let mut draft = student_draft();

    draft.mentorship.mentorship_areas.insert("other".into());
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::MentorshipAreasOther),
        "Please specify your other area of interest"
    );

    draft.mentorship.mentorship_areas_other = "Academic research".into();
    assert!(validate(&draft, &clock()).is_valid());

    draft.mentorship.mentorship_industry_tracks.insert("other".into());
    let report = validate(&draft, &clock());
    assert_eq!(
        message_for(&report, Field::MentorshipIndustryTracksOther),
        "Please specify your other industry track"
    );
}

#[test]
fn mentorship_opt_out_silences_the_group() {
    let mut draft = graduate_draft();
    assert!(!draft.mentorship.join_mentorship_program);

    // Leftover preferences from a withdrawn opt-in change nothing.
    draft.mentorship.mentorship_areas.insert("other".into());
    draft.mentorship.mentorship_format = String::new();
    let report = validate(&draft, &clock());
    assert!(report.is_valid());

    draft.mentorship.join_mentorship_program = true;
    let report = validate(&draft, &clock());
    assert!(report.contains(Field::MentorshipAreasOther));
    assert!(report.contains(Field::MentorshipIndustryTracks));
    assert_eq!(
        message_for(&report, Field::MentorshipFormat),
        "Please select a mentorship format"
    );
    assert_eq!(
        message_for(&report, Field::MentorshipAvailability),
        "Please enter your availability"
    );
}

#[test]
fn mobile_and_zip_formats() {
    let mut draft = graduate_draft();

    for bad in ["9171234567", "091712345678", "0917123456a", "+639171234567"] {
        draft.personal.mobile_number = bad.into();
        let report = validate(&draft, &clock());
        assert_eq!(
            message_for(&report, Field::MobileNumber),
            "Please enter a valid mobile number (09XXXXXXXXX)",
            "value {bad:?}"
        );
    }
    draft.personal.mobile_number = "09171234567".into();

    for bad in ["600", "60000", "6ooo", ""] {
        draft.personal.zip_code = bad.into();
        let report = validate(&draft, &clock());
        assert_eq!(
            message_for(&report, Field::ZipCode),
            "Zip code must be 4 digits",
            "value {bad:?}"
        );
    }
    draft.personal.zip_code = "6000".into();
    assert!(validate(&draft, &clock()).is_valid());
}

#[test]
fn validate_field_runs_static_checks_only() {
    let draft = RegistrationDraft::default();

    let issue = validate_field(&draft, Field::FirstName, &clock()).expect("first name issue");
    assert_eq!(issue.message, "First name is required");
    assert_eq!(issue.code, IssueCode::Length);

    // Conditional requirements stay quiet on blur.
    assert!(validate_field(&draft, Field::UnitsThreshold, &clock()).is_none());
    assert!(validate_field(&draft, Field::GcashReferenceNumber, &clock()).is_none());
    assert!(validate_field(&draft, Field::IdPhoto, &clock()).is_none());

    let issue =
        validate_field(&draft, Field::DataPrivacyConsent, &clock()).expect("consent issue");
    assert_eq!(issue.code, IssueCode::Consent);
}

#[test]
fn one_issue_per_field_and_stable_order() {
    let mut draft = RegistrationDraft::default();
    draft.personal.email = "someone@up.edu.ph".into();
    let report = validate(&draft, &clock());

    let mut seen = std::collections::BTreeSet::new();
    for issue in &report.issues {
        assert!(seen.insert(issue.field), "duplicate issue for {}", issue.field);
    }

    // Static issues come first, in form order.
    assert_eq!(report.issues[0].field, Field::FirstName);
    let units_at = report
        .fields()
        .position(|field| field == Field::UnitsThreshold)
        .expect("units issue");
    let consent_at = report
        .fields()
        .position(|field| field == Field::DataPrivacyConsent)
        .expect("consent issue");
    assert!(consent_at < units_at);
}

#[test]
fn validation_is_pure() {
    let draft = student_draft();
    let before = draft.clone();
    let first = validate(&draft, &clock());
    let second = validate(&draft, &clock());
    assert_eq!(first, second);
    assert_eq!(draft, before);
}
