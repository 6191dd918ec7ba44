use std::collections::BTreeSet;

use regex::Regex;
use serde_json::json;

use regform_spec::catalog::{
    self, GCASH_REFERENCE_PATTERN, MOBILE_PATTERN, STATIC_CHECKS, ZIP_PATTERN,
};
use regform_spec::options::{
    CAMPUSES, INDUSTRY_TRACKS, MENTORSHIP_AREAS, MENTORSHIP_FORMATS, OTHER_OPTION, PAYMENT_OPTIONS,
};
use regform_spec::{Field, PaymentMethod, RegistrationDraft, is_email};

#[test]
fn wire_names_round_trip() {
    assert_eq!(Field::ALL.len(), 44);

    let mut seen = BTreeSet::new();
    for &field in Field::ALL {
        let name = field.wire_name();
        assert!(seen.insert(name), "duplicate wire name {name}");
        assert_eq!(Field::from_wire_name(name), Some(field));
        assert_eq!(field.to_string(), name);
        assert_eq!(serde_json::to_value(field).expect("serialize"), json!(name));
    }

    assert_eq!(Field::from_wire_name("notAField"), None);
    assert_eq!(Field::ALL[0], Field::FirstName);
    assert_eq!(Field::from_wire_name("dataPrivacyConsent"), Some(Field::DataPrivacyConsent));
}

#[test]
fn static_table_follows_form_order() {
    let position = |field: Field| {
        Field::ALL
            .iter()
            .position(|&f| f == field)
            .expect("catalog field is a form field")
    };

    let mut last = None;
    for entry in STATIC_CHECKS {
        let index = position(entry.field);
        if let Some(previous) = last {
            assert!(index > previous, "{} is out of form order", entry.field);
        }
        last = Some(index);

        assert!(!entry.checks.is_empty());
        for check in entry.checks {
            assert!(!check.message.is_empty());
        }
    }
}

#[test]
fn fields_without_static_rules_report_none() {
    assert!(catalog::static_checks(Field::UnitsThreshold).is_empty());
    assert!(catalog::static_checks(Field::GcashReferenceNumber).is_empty());
    assert!(catalog::static_checks(Field::MentorshipFormat).is_empty());
    assert!(!catalog::static_checks(Field::Email).is_empty());
}

#[test]
fn patterns_compile_and_anchor() {
    let mobile = Regex::new(MOBILE_PATTERN).expect("mobile pattern");
    assert!(mobile.is_match("09171234567"));
    assert!(!mobile.is_match("639171234567"));
    assert!(!mobile.is_match("091712345678"));
    assert!(!mobile.is_match("x09171234567"));

    let zip = Regex::new(ZIP_PATTERN).expect("zip pattern");
    assert!(zip.is_match("6000"));
    assert!(!zip.is_match("60000"));

    let gcash = Regex::new(GCASH_REFERENCE_PATTERN).expect("gcash pattern");
    assert!(gcash.is_match("0023748156920"));
    assert!(!gcash.is_match("00237481569"));
}

#[test]
fn email_shape_check() {
    assert!(is_email("maria@gmail.com"));
    assert!(is_email("maria.v+alumni@mail.co"));
    assert!(!is_email("maria"));
    assert!(!is_email("maria@gmail"));
    assert!(!is_email("maria v@gmail.com"));
    assert!(!is_email("@gmail.com"));
    assert!(!is_email(""));
}

#[test]
fn payment_options_match_the_discriminator() {
    assert_eq!(PAYMENT_OPTIONS.len(), PaymentMethod::ALL.len());
    for (option, &method) in PAYMENT_OPTIONS.iter().zip(PaymentMethod::ALL) {
        assert_eq!(option.value, method.as_str());
        assert_eq!(PaymentMethod::parse(option.value), Some(method));
        assert!(option.description.is_some());
    }
    assert_eq!(PaymentMethod::parse("cheque"), None);
}

#[test]
fn choice_tables_have_unique_values() {
    for table in [
        MENTORSHIP_AREAS,
        INDUSTRY_TRACKS,
        PAYMENT_OPTIONS,
        MENTORSHIP_FORMATS,
        CAMPUSES,
    ] {
        let values: BTreeSet<_> = table.iter().map(|option| option.value).collect();
        assert_eq!(values.len(), table.len());
        assert!(!values.contains(OTHER_OPTION), "the UI appends the other entry itself");
    }

    assert_eq!(MENTORSHIP_AREAS.len(), 7);
    assert_eq!(INDUSTRY_TRACKS.len(), 8);
    assert_eq!(
        MENTORSHIP_FORMATS.iter().map(|option| option.value).collect::<Vec<_>>(),
        ["one-on-one", "group", "both"],
    );
}

#[test]
fn default_draft_agrees_with_the_tables() {
    let draft = RegistrationDraft::default();
    assert_eq!(draft.academic.campus, CAMPUSES[0].value);
    assert_eq!(draft.payment.payment_method.as_str(), PAYMENT_OPTIONS[0].value);
}
