//! JSON Schema for the submission's section parts.

use serde_json::{Map, Value};

use crate::payload::{
    ACADEMIC_STATUS_PART, MEMBERSHIP_PART, MENTORSHIP_PART, PERSONAL_DETAILS_PART,
    PROFESSIONAL_PART,
};
use crate::record::PaymentMethod;

/// Schema for the five JSON parts of a submission, keyed by part name.
///
/// Every key is always present on the wire (inactive branches send empty
/// strings), so each section lists its full key set as required.
pub fn submission_schema() -> Value {
    let mut properties = Map::new();
    properties.insert(
        PERSONAL_DETAILS_PART.into(),
        string_section(&[
            "firstName",
            "middleName",
            "lastName",
            "suffix",
            "maidenName",
            "dateOfBirth",
            "email",
            "mobileNumber",
            "currentAddress",
            "province",
            "city",
            "barangay",
            "zipCode",
        ]),
    );
    properties.insert(
        ACADEMIC_STATUS_PART.into(),
        string_section(&["campus", "degreeProgram", "yearGraduated", "studentNumber"]),
    );
    properties.insert(
        PROFESSIONAL_PART.into(),
        string_section(&["currentEmployer", "jobTitle", "industry", "yearsOfExperience"]),
    );
    properties.insert(MEMBERSHIP_PART.into(), membership_section());
    properties.insert(MENTORSHIP_PART.into(), mentorship_section());

    let mut root = Map::new();
    root.insert("type".into(), Value::String("object".into()));
    root.insert("properties".into(), Value::Object(properties));
    root.insert(
        "required".into(),
        Value::Array(
            [
                PERSONAL_DETAILS_PART,
                ACADEMIC_STATUS_PART,
                PROFESSIONAL_PART,
                MEMBERSHIP_PART,
                MENTORSHIP_PART,
            ]
            .iter()
            .map(|name| Value::String((*name).into()))
            .collect(),
        ),
    );
    Value::Object(root)
}

fn membership_section() -> Value {
    const STRING_KEYS: &[&str] = &[
        "gcashReferenceNumber",
        "bankName",
        "bankAccountNumber",
        "bankReferenceNumber",
        "bankSenderName",
        "cashPaymentDate",
        "cashReceivedBy",
        "paymentNotes",
    ];
    let mut properties = Map::new();
    let mut method = Map::new();
    method.insert("type".into(), Value::String("string".into()));
    method.insert(
        "enum".into(),
        Value::Array(
            PaymentMethod::ALL
                .iter()
                .map(|method| Value::String(method.as_str().into()))
                .collect(),
        ),
    );
    properties.insert("paymentMethod".into(), Value::Object(method));
    for key in STRING_KEYS {
        properties.insert((*key).into(), string_schema());
    }
    let required: Vec<&str> = std::iter::once("paymentMethod")
        .chain(STRING_KEYS.iter().copied())
        .collect();
    object_schema(properties, &required)
}

fn string_section(keys: &[&str]) -> Value {
    let mut properties = Map::new();
    for key in keys {
        properties.insert((*key).into(), string_schema());
    }
    object_schema(properties, keys)
}

fn mentorship_section() -> Value {
    let mut properties = Map::new();
    let mut join = Map::new();
    join.insert("type".into(), Value::String("boolean".into()));
    properties.insert("joinMentorshipProgram".into(), Value::Object(join));
    properties.insert("mentorshipAreas".into(), string_array_schema());
    properties.insert("mentorshipAreasOther".into(), string_schema());
    properties.insert("mentorshipAvailability".into(), string_schema());
    properties.insert("mentorshipFormat".into(), string_schema());
    properties.insert("mentorshipIndustryTracks".into(), string_array_schema());
    properties.insert("mentorshipIndustryTracksOther".into(), string_schema());
    object_schema(
        properties,
        &[
            "joinMentorshipProgram",
            "mentorshipAreas",
            "mentorshipAreasOther",
            "mentorshipAvailability",
            "mentorshipFormat",
            "mentorshipIndustryTracks",
            "mentorshipIndustryTracksOther",
        ],
    )
}

fn object_schema(properties: Map<String, Value>, required: &[&str]) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    schema.insert(
        "required".into(),
        Value::Array(
            required
                .iter()
                .map(|key| Value::String((*key).into()))
                .collect(),
        ),
    );
    Value::Object(schema)
}

fn string_schema() -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    Value::Object(schema)
}

fn string_array_schema() -> Value {
    let mut items = Map::new();
    items.insert("type".into(), Value::String("string".into()));
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("array".into()));
    schema.insert("items".into(), Value::Object(items));
    Value::Object(schema)
}
