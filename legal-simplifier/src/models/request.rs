use super::document_type::DocumentType;
use crate::error::SimplifyError;
use serde::Deserialize;
use validator::Validate;

/// Maximum accepted input length, in characters.
pub const MAX_TEXT_CHARS: usize = 10_000;

/// One submission: the pasted text and the selected document type.
///
/// Used for both the HTML form and the JSON API.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SimplifyRequest {
    #[serde(default)]
    pub document_type: DocumentType,

    #[serde(default)]
    #[validate(length(max = 10000, message = "Legal text must be at most 10000 characters."))]
    pub text: String,
}

impl SimplifyRequest {
    pub fn new(text: impl Into<String>, document_type: DocumentType) -> Self {
        Self {
            document_type,
            text: text.into(),
        }
    }

    /// Browsers submit textarea line breaks as `\r\n` but count them as one
    /// character against `MAX_TEXT_CHARS`. Collapse them so the server counts
    /// the same way.
    pub fn with_normalized_line_endings(mut self) -> Self {
        if self.text.contains('\r') {
            self.text = self.text.replace("\r\n", "\n");
        }
        self
    }

    /// Check the input before anything touches the network.
    pub fn check(&self) -> Result<(), SimplifyError> {
        if self.text.trim().is_empty() {
            return Err(SimplifyError::empty_input());
        }

        self.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .next()
                .unwrap_or_else(|| errors.to_string());
            SimplifyError::InvalidInput(message)
        })
    }
}
