//! Holder of the single UI state.
//!
//! One submission may be in flight at a time. The state lock is only held for
//! transitions, never across the backend call.

use super::gemini::TextBackend;
use super::metrics;
use super::simplifier::simplify;
use crate::error::SimplifyError;
use crate::models::{SimplifyRequest, SubmitError, UiState};
use std::sync::{Arc, Mutex, MutexGuard};

/// Result of one accepted submission: the raw reply or why there is none.
pub type Outcome = Result<String, SimplifyError>;

#[derive(Clone)]
pub struct Workbench {
    backend: Arc<dyn TextBackend>,
    state: Arc<Mutex<UiState>>,
}

impl Workbench {
    pub fn new(backend: Arc<dyn TextBackend>) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(UiState::default())),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.lock().clone()
    }

    /// Run one submission to completion and return its outcome.
    ///
    /// Input problems move the state to `Error` without a backend call.
    /// Returns [`SubmitError::Busy`] while another submission is loading; the
    /// state is left untouched in that case.
    pub async fn submit(&self, request: SimplifyRequest) -> Result<Outcome, SubmitError> {
        {
            let mut state = self.lock();
            if state.is_loading() {
                tracing::info!("Rejected submission while another is in flight");
                metrics::record_outcome("busy");
                return Err(SubmitError::Busy);
            }

            if let Err(e) = request.check() {
                tracing::info!(error = %e, "Rejected submission with invalid input");
                metrics::record_outcome(e.kind());
                state.reject(e.to_string())?;
                return Ok(Err(e));
            }

            state.begin()?;
        }

        tracing::info!(
            document_type = %request.document_type,
            text_chars = request.text.chars().count(),
            "Submitting text for simplification"
        );

        // The call runs on its own task so it completes even if the caller
        // goes away.
        let backend = self.backend.clone();
        let state = self.state.clone();
        let task = tokio::spawn(async move {
            let outcome = simplify(backend.as_ref(), &request.text, request.document_type).await;
            metrics::record_outcome(match &outcome {
                Ok(_) => "success",
                Err(e) => e.kind(),
            });
            lock_state(&state).finish(outcome.clone());
            outcome
        });

        match task.await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                tracing::error!(error = %e, "Simplification task failed");
                let outcome = Err(SimplifyError::unknown(""));
                self.lock().finish(outcome.clone());
                Ok(outcome)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, UiState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<UiState>) -> MutexGuard<'_, UiState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
