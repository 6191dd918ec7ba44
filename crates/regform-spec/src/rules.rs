use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use regex::Regex;

use crate::clock::Clock;
use crate::field::Field;
use crate::issue::IssueCode;
use crate::record::FieldValue;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const YEAR_PATTERN: &str = r"^\d{4}$";

/// Matches `value` against a compiled-and-cached regex.
///
/// Every pattern in the crate is a constant, so the cache stays tiny. A
/// pattern that fails to compile simply never matches; the catalog tests
/// compile each one.
pub(crate) fn regex_matches(pattern: &'static str, value: &str) -> bool {
    static CACHE: OnceLock<Mutex<HashMap<&'static str, Option<Regex>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(pattern)
        .or_insert_with(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}

/// Loose syntactic email check: something before and after the `@`, with a
/// dot in the domain part.
pub fn is_email(value: &str) -> bool {
    regex_matches(EMAIL_PATTERN, value)
}

/// A single value-level rule.
///
/// Rules are pure predicates over one [`FieldValue`]; anything that spans
/// fields lives in the conditional groups of the validation engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRule {
    /// Any non-empty answer.
    Required,
    /// At least this many characters.
    MinChars(usize),
    /// Whole value matches the pattern.
    Matches(&'static str),
    /// Syntactically valid email address.
    Email,
    /// Email must not end with the given domain suffix (case-insensitive).
    OutsideDomain(&'static str),
    /// Empty, or a four-digit year from `earliest` up to the current year.
    GraduationYear { earliest: i32 },
    /// Attachment, when present, carries one of the allowed media types.
    ImageType(&'static [&'static str]),
    /// Attachment, when present, stays within the byte limit.
    ImageSize(u64),
    /// Checkbox must be ticked.
    Consent,
}

impl ValueRule {
    /// Whether `value` satisfies the rule.
    ///
    /// A value of the wrong shape counts as absent: text rules fail on
    /// non-text, presence-tolerant rules pass.
    pub fn passes(&self, value: &FieldValue<'_>, clock: &dyn Clock) -> bool {
        match self {
            ValueRule::Required => value.is_answered(),
            ValueRule::MinChars(min) => match value {
                FieldValue::Text(text) => text.chars().count() >= *min,
                _ => false,
            },
            ValueRule::Matches(pattern) => match value {
                FieldValue::Text(text) => regex_matches(pattern, text),
                _ => false,
            },
            ValueRule::Email => match value {
                FieldValue::Text(text) => is_email(text),
                _ => false,
            },
            ValueRule::OutsideDomain(domain) => match value {
                FieldValue::Text(text) => !text.to_lowercase().ends_with(domain),
                _ => true,
            },
            ValueRule::GraduationYear { earliest } => match value {
                FieldValue::Text(text) => graduation_year_ok(text, *earliest, clock),
                _ => true,
            },
            ValueRule::ImageType(allowed) => match value {
                FieldValue::File(Some(file)) => allowed.contains(&file.media_type.as_str()),
                _ => true,
            },
            ValueRule::ImageSize(max_bytes) => match value {
                FieldValue::File(Some(file)) => file.size_bytes <= *max_bytes,
                _ => true,
            },
            ValueRule::Consent => match value {
                FieldValue::Flag(flag) => *flag,
                _ => false,
            },
        }
    }
}

fn graduation_year_ok(text: &str, earliest: i32, clock: &dyn Clock) -> bool {
    if text.is_empty() {
        return true;
    }
    if !regex_matches(YEAR_PATTERN, text) {
        return false;
    }
    match text.parse::<i32>() {
        Ok(year) => year >= earliest && year <= clock.current_year(),
        Err(_) => false,
    }
}

/// One rule bound to the code and message it reports when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub rule: ValueRule,
    pub code: IssueCode,
    pub message: &'static str,
}

/// The ordered static checks for one field; the first failure wins.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChecks {
    pub field: Field,
    pub checks: &'static [Check],
}
