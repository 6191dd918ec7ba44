use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata for an uploaded file.
///
/// The bytes themselves stay in the upload store; rules only look at the
/// declared media type and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            size_bytes,
        }
    }
}
