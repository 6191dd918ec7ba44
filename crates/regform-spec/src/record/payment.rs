use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::Attachment;

/// How the membership fee is being settled.
///
/// This is the discriminator for the payment rule group; the form can never
/// hold a value outside these three.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Gcash,
    Bank,
    Cash,
}

impl PaymentMethod {
    pub const ALL: &[PaymentMethod] = &[
        PaymentMethod::Gcash,
        PaymentMethod::Bank,
        PaymentMethod::Cash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Gcash => "gcash",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Cash => "cash",
        }
    }

    /// Parses the wire value, e.g. from a select option.
    pub fn parse(value: &str) -> Option<PaymentMethod> {
        match value {
            "gcash" => Some(PaymentMethod::Gcash),
            "bank" => Some(PaymentMethod::Bank),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}

/// Evidence of payment, shaped by the chosen method.
///
/// Only the branch for the active method exists, so a finalized registration
/// cannot carry GCash details next to a cash receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentProof {
    Gcash(GcashPayment),
    Bank(BankPayment),
    Cash(CashPayment),
}

impl PaymentProof {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentProof::Gcash(_) => PaymentMethod::Gcash,
            PaymentProof::Bank(_) => PaymentMethod::Bank,
            PaymentProof::Cash(_) => PaymentMethod::Cash,
        }
    }
}

/// GCash transfer: a 13-digit reference plus a screenshot of the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GcashPayment {
    pub reference_number: String,
    pub proof: Attachment,
}

/// Direct bank deposit details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankPayment {
    pub sender_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub reference_number: String,
    pub proof: Attachment,
}

/// Cash handed over in person to a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashPayment {
    pub payment_date: String,
    pub received_by: String,
}
