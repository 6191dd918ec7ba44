//! Ready-made drafts used by docs and integration tests.
//!
//! Both drafts validate cleanly, so tests can start from a good record and
//! break exactly one thing.

use std::collections::BTreeSet;

use crate::record::{
    AcademicStanding, Attachment, MentorshipPreferences, PaymentMethod, PaymentSection,
    PersonalDetails, ProfessionalBackground, RegistrationDraft,
};

/// A 2015 graduate paying the membership fee over GCash, no mentorship.
pub fn graduate_draft() -> RegistrationDraft {
    RegistrationDraft {
        personal: PersonalDetails {
            first_name: "Maria".into(),
            last_name: "Villanueva".into(),
            middle_name: "Santos".into(),
            date_of_birth: "1993-04-18".into(),
            email: "maria.villanueva@example.com".into(),
            mobile_number: "09171234567".into(),
            current_address: "12-B Juana Osmeña St.".into(),
            city: "Cebu City".into(),
            barangay: "Capitol Site".into(),
            zip_code: "6000".into(),
            ..PersonalDetails::default()
        },
        academic: AcademicStanding {
            degree_program: "BS Computer Science".into(),
            is_graduate: true,
            year_graduated: "2015".into(),
            student_number: "2011-04567".into(),
            ..AcademicStanding::default()
        },
        professional: ProfessionalBackground {
            current_employer: "Lexmark Research & Development".into(),
            job_title: "Software Engineer".into(),
            industry: "IT & Software".into(),
            years_of_experience: "8".into(),
        },
        mentorship: MentorshipPreferences::default(),
        payment: PaymentSection {
            id_photo: Some(Attachment::new("id-photo.jpg", "image/jpeg", 84_213)),
            payment_method: PaymentMethod::Gcash,
            gcash_reference_number: "0023748156920".into(),
            gcash_proof_of_payment: Some(Attachment::new("gcash-receipt.png", "image/png", 215_046)),
            ..PaymentSection::default()
        },
        data_privacy_consent: true,
    }
}

/// A current student paying cash, opted into mentorship.
pub fn student_draft() -> RegistrationDraft {
    RegistrationDraft {
        personal: PersonalDetails {
            first_name: "Paolo".into(),
            last_name: "Enriquez".into(),
            date_of_birth: "2003-11-02".into(),
            email: "paolo.enriquez@example.com".into(),
            mobile_number: "09981234567".into(),
            current_address: "Blk 4 Lot 9, Villa del Rio".into(),
            city: "Talisay City".into(),
            barangay: "Lawaan".into(),
            zip_code: "6045".into(),
            ..PersonalDetails::default()
        },
        academic: AcademicStanding {
            degree_program: "BS Management".into(),
            units_threshold: "87".into(),
            tor_attachment: Some(Attachment::new("tor.pdf", "application/pdf", 1_204_833)),
            ..AcademicStanding::default()
        },
        professional: ProfessionalBackground::default(),
        mentorship: MentorshipPreferences {
            join_mentorship_program: true,
            mentorship_areas: BTreeSet::from([
                "Career Advancement".to_string(),
                "Technology & Innovation".to_string(),
            ]),
            mentorship_industry_tracks: BTreeSet::from(["IT & Software".to_string()]),
            mentorship_format: "group".into(),
            mentorship_availability: "Weekends, 9am-12nn".into(),
            ..MentorshipPreferences::default()
        },
        payment: PaymentSection {
            id_photo: Some(Attachment::new("id-photo.png", "image/png", 91_530)),
            payment_method: PaymentMethod::Cash,
            cash_payment_date: "2026-02-14".into(),
            cash_received_by: "R. Abellana".into(),
            ..PaymentSection::default()
        },
        data_privacy_consent: true,
    }
}
