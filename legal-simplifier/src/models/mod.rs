pub mod document_type;
pub mod request;
pub mod ui_state;

pub use document_type::DocumentType;
pub use request::{SimplifyRequest, MAX_TEXT_CHARS};
pub use ui_state::{SubmitError, UiState};
