use serde::Serialize;
use thiserror::Error;

/// State of the output panel.
///
/// Transitions are driven by the caller only; nothing here is time-based.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A simplification is already in progress.")]
    Busy,
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            UiState::Success(output) => Some(output),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Loading`, dropping any previous output or error.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::Busy);
        }
        *self = UiState::Loading;
        Ok(())
    }

    /// Leave `Loading` with the outcome of the call.
    pub fn finish<E: ToString>(&mut self, outcome: Result<String, E>) {
        if !self.is_loading() {
            tracing::warn!("Ignoring completion outside of loading state");
            return;
        }
        *self = match outcome {
            Ok(output) => UiState::Success(output),
            Err(e) => UiState::Error(e.to_string()),
        };
    }

    /// Report an input problem inline without entering `Loading`.
    pub fn reject(&mut self, message: impl Into<String>) -> Result<(), SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::Busy);
        }
        *self = UiState::Error(message.into());
        Ok(())
    }
}
