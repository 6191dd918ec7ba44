//! Choice lists the form renders and the docs site exports.
//!
//! Validation deliberately does not pin the multi-select answers to these
//! tables; the UI composes them and may append an "other" entry, which is why
//! [`OTHER_OPTION`] is the only value the engine treats specially.

use schemars::JsonSchema;
use serde::Serialize;

/// Sentinel multi-select value that requires a free-text elaboration.
pub const OTHER_OPTION: &str = "other";

/// One renderable choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption {
        value,
        label,
        description: None,
    }
}

pub const MENTORSHIP_AREAS: &[SelectOption] = &[
    option("Career Advancement", "Career Advancement"),
    option("Leadership & Management", "Leadership & Management"),
    option("Business & Corporate Skills", "Business & Corporate Skills"),
    option("Finance & Operations", "Finance & Operations"),
    option("Technology & Innovation", "Technology & Innovation"),
    option("HR & Workplace Skills", "HR & Workplace Skills"),
    option("Entrepreneurship", "Entrepreneurship"),
];

pub const INDUSTRY_TRACKS: &[SelectOption] = &[
    option("IT & Software", "IT & Software"),
    option("Banking & Finance", "Banking & Finance"),
    option("Marketing & Advertising", "Marketing & Advertising"),
    option("Engineering", "Engineering"),
    option("Healthcare", "Healthcare"),
    option("Real Estate", "Real Estate"),
    option("Supply Chain", "Supply Chain"),
    option("Government / Public Sector", "Government / Public Sector"),
];

pub const PAYMENT_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "gcash",
        label: "GCash",
        description: Some("Pay via GCash"),
    },
    SelectOption {
        value: "bank",
        label: "Bank Transfer",
        description: Some("Direct bank deposit"),
    },
    SelectOption {
        value: "cash",
        label: "Cash",
        description: Some("In-person payment"),
    },
];

pub const MENTORSHIP_FORMATS: &[SelectOption] = &[
    option("one-on-one", "1-on-1 Mentorship"),
    option("group", "Group Mentorship"),
    option("both", "Either format works"),
];

pub const CAMPUSES: &[SelectOption] = &[
    option("UP Cebu", "UP Cebu"),
    option("UP Diliman", "UP Diliman"),
    option("UP Los Baños", "UP Los Baños"),
    option("UP Manila", "UP Manila"),
    option("UP Visayas", "UP Visayas"),
    option("UP Open University", "UP Open University"),
    option("UP Mindanao", "UP Mindanao"),
    option("UP Baguio", "UP Baguio"),
    option("UP Tacloban", "UP Tacloban"),
];
