use serde_json::{Value, json};

use regform_spec::payload::{
    ACADEMIC_STATUS_PART, BANK_PROOF_PART, GCASH_PROOF_PART, MEMBERSHIP_PART, MENTORSHIP_PART,
    PERSONAL_DETAILS_PART, PROFESSIONAL_PART,
};
use regform_spec::{
    Attachment, FixedClock, PartBody, PaymentMethod, Registration, SubmissionPayload,
    graduate_draft, student_draft, submission_schema,
};

fn clock() -> FixedClock {
    FixedClock(2026)
}

fn graduate_registration() -> Registration {
    graduate_draft().finalize(&clock()).expect("finalize")
}

fn student_registration() -> Registration {
    student_draft().finalize(&clock()).expect("finalize")
}

fn part_names(payload: &SubmissionPayload) -> Vec<&'static str> {
    payload.parts.iter().map(|part| part.name).collect()
}

#[test]
fn part_names_follow_the_backend_contract() {
    let gcash = SubmissionPayload::from_registration(&graduate_registration());
    assert_eq!(
        part_names(&gcash),
        [
            PERSONAL_DETAILS_PART,
            ACADEMIC_STATUS_PART,
            PROFESSIONAL_PART,
            MEMBERSHIP_PART,
            MENTORSHIP_PART,
            GCASH_PROOF_PART,
        ],
    );

    let cash = SubmissionPayload::from_registration(&student_registration());
    assert_eq!(
        part_names(&cash),
        [
            PERSONAL_DETAILS_PART,
            ACADEMIC_STATUS_PART,
            PROFESSIONAL_PART,
            MEMBERSHIP_PART,
            MENTORSHIP_PART,
        ],
    );

    let mut draft = graduate_draft();
    draft.payment.payment_method = PaymentMethod::Bank;
    draft.payment.bank_sender_name = "Maria S. Villanueva".into();
    draft.payment.bank_name = "BPI".into();
    draft.payment.bank_account_number = "1234-5678-90".into();
    draft.payment.bank_reference_number = "FT2602140001".into();
    draft.payment.bank_proof_of_payment =
        Some(Attachment::new("deposit-slip.jpg", "image/jpeg", 163_772));
    let bank = SubmissionPayload::from_registration(&draft.finalize(&clock()).expect("finalize"));
    assert_eq!(part_names(&bank).last(), Some(&BANK_PROOF_PART));
}

#[test]
fn personal_details_carries_the_full_key_set() {
    let payload = SubmissionPayload::from_registration(&graduate_registration());
    assert_eq!(
        payload.section(PERSONAL_DETAILS_PART).expect("section"),
        &json!({
            "firstName": "Maria",
            "middleName": "Santos",
            "lastName": "Villanueva",
            "suffix": "",
            "maidenName": "",
            "dateOfBirth": "1993-04-18",
            "email": "maria.villanueva@example.com",
            "mobileNumber": "09171234567",
            "currentAddress": "12-B Juana Osmeña St.",
            "province": "Cebu",
            "city": "Cebu City",
            "barangay": "Capitol Site",
            "zipCode": "6000",
        }),
    );
}

#[test]
fn academic_status_covers_both_branches() {
    let graduate = SubmissionPayload::from_registration(&graduate_registration());
    assert_eq!(
        graduate.section(ACADEMIC_STATUS_PART).expect("section"),
        &json!({
            "campus": "UP Cebu",
            "degreeProgram": "BS Computer Science",
            "yearGraduated": "2015",
            "studentNumber": "2011-04567",
        }),
    );

    let student = SubmissionPayload::from_registration(&student_registration());
    assert_eq!(
        student.section(ACADEMIC_STATUS_PART).expect("section"),
        &json!({
            "campus": "UP Cebu",
            "degreeProgram": "BS Management",
            "yearGraduated": "",
            "studentNumber": "",
        }),
    );
}

#[test]
fn membership_section_empties_the_inactive_branches() {
    let gcash = SubmissionPayload::from_registration(&graduate_registration());
    assert_eq!(
        gcash.section(MEMBERSHIP_PART).expect("section"),
        &json!({
            "paymentMethod": "gcash",
            "gcashReferenceNumber": "0023748156920",
            "bankName": "",
            "bankAccountNumber": "",
            "bankReferenceNumber": "",
            "bankSenderName": "",
            "cashPaymentDate": "",
            "cashReceivedBy": "",
            "paymentNotes": "",
        }),
    );

    let cash = SubmissionPayload::from_registration(&student_registration());
    assert_eq!(
        cash.section(MEMBERSHIP_PART).expect("section"),
        &json!({
            "paymentMethod": "cash",
            "gcashReferenceNumber": "",
            "bankName": "",
            "bankAccountNumber": "",
            "bankReferenceNumber": "",
            "bankSenderName": "",
            "cashPaymentDate": "2026-02-14",
            "cashReceivedBy": "R. Abellana",
            "paymentNotes": "",
        }),
    );
}

#[test]
fn mentorship_section_flattens_the_opt_out() {
    let opted_out = SubmissionPayload::from_registration(&graduate_registration());
    assert_eq!(
        opted_out.section(MENTORSHIP_PART).expect("section"),
        &json!({
            "joinMentorshipProgram": false,
            "mentorshipAreas": [],
            "mentorshipAreasOther": "",
            "mentorshipAvailability": "",
            "mentorshipFormat": "",
            "mentorshipIndustryTracks": [],
            "mentorshipIndustryTracksOther": "",
        }),
    );

    let opted_in = SubmissionPayload::from_registration(&student_registration());
    assert_eq!(
        opted_in.section(MENTORSHIP_PART).expect("section"),
        &json!({
            "joinMentorshipProgram": true,
            "mentorshipAreas": ["Career Advancement", "Technology & Innovation"],
            "mentorshipAreasOther": "",
            "mentorshipAvailability": "Weekends, 9am-12nn",
            "mentorshipFormat": "group",
            "mentorshipIndustryTracks": ["IT & Software"],
            "mentorshipIndustryTracksOther": "",
        }),
    );
}

#[test]
fn attachments_lists_only_the_proof_uploads() {
    let gcash = SubmissionPayload::from_registration(&graduate_registration());
    let files: Vec<_> = gcash.attachments().collect();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, GCASH_PROOF_PART);
    assert_eq!(files[0].1.file_name, "gcash-receipt.png");

    let cash = SubmissionPayload::from_registration(&student_registration());
    assert_eq!(cash.attachments().count(), 0);
}

#[test]
fn encoded_parts_round_trip() {
    let payload = SubmissionPayload::from_registration(&student_registration());
    let encoded = payload.encoded_parts().expect("encode");
    assert_eq!(encoded.len(), 5);
    for (name, body) in &encoded {
        let decoded: Value = serde_json::from_str(body).expect("decode");
        assert_eq!(Some(&decoded), payload.section(name));
    }
}

#[test]
fn payloads_match_the_published_schema() {
    let schema = submission_schema();
    let validator = jsonschema::validator_for(&schema).expect("schema compiles");

    for registration in [graduate_registration(), student_registration()] {
        let payload = SubmissionPayload::from_registration(&registration);
        let mut instance = serde_json::Map::new();
        for part in &payload.parts {
            if let PartBody::Json(value) = &part.body {
                instance.insert(part.name.to_string(), value.clone());
            }
        }
        let instance = Value::Object(instance);
        assert!(validator.is_valid(&instance));

        let mut wrong_method = instance.clone();
        wrong_method[MEMBERSHIP_PART]["paymentMethod"] = json!("cheque");
        assert!(!validator.is_valid(&wrong_method));

        let mut missing_part = instance.clone();
        missing_part
            .as_object_mut()
            .expect("object")
            .remove(MENTORSHIP_PART);
        assert!(!validator.is_valid(&missing_part));
    }
}
