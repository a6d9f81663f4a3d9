use super::gemini::TextBackend;
use super::prompt::build_prompt;
use crate::error::SimplifyError;
use crate::models::DocumentType;

/// Send `text` to the backend and return its raw reply.
///
/// Empty or whitespace-only text fails without touching the backend. Exactly
/// one backend call is made otherwise; there are no retries.
pub async fn simplify(
    backend: &dyn TextBackend,
    text: &str,
    document_type: DocumentType,
) -> Result<String, SimplifyError> {
    if text.trim().is_empty() {
        return Err(SimplifyError::empty_input());
    }

    let prompt = build_prompt(text, document_type);
    backend.generate(&prompt).await.map_err(|e| {
        tracing::error!(kind = e.kind(), error = %e, "Simplification failed");
        e
    })
}
