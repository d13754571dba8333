//! The submission pipeline
//!
//! One [`FormSubmission`] drives one attempt lifecycle: force-validate,
//! encode, post, resolve. The outcome is written into a
//! [`SubmissionState`] exactly once; transport failures resolve the
//! attempt as unsuccessful rather than surfacing as errors, since the
//! user-facing result is the same dialog either way.

use std::collections::HashMap;

use thiserror::Error;

use leadform::{Form, SubmissionState};

use crate::encode::encode_form;
use crate::transport::Transport;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form did not pass whole-form validation; nothing was sent.
    #[error("form has validation errors")]
    InvalidForm(HashMap<String, String>),
    /// This submission already resolved; a fresh form gets a fresh
    /// submission.
    #[error("submission already completed")]
    AlreadyComplete,
}

/// A single submission attempt bound to a transport.
pub struct FormSubmission {
    transport: Box<dyn Transport>,
    state: SubmissionState,
}

impl FormSubmission {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            state: SubmissionState::pending(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Runs the pipeline. Marks every active field touched, so errors in
    /// never-visited fields become visible. Returns whether the endpoint
    /// accepted the submission; the same outcome lands in
    /// [`FormSubmission::state`].
    pub async fn submit(&mut self, form: &mut Form) -> Result<bool, SubmitError> {
        if self.state.is_complete {
            return Err(SubmitError::AlreadyComplete);
        }

        form.force_validate();
        let errors = form.errors();
        if !errors.is_empty() {
            tracing::debug!(
                form = form.schema().name(),
                fields = errors.len(),
                "submission blocked by validation"
            );
            return Err(SubmitError::InvalidForm(errors));
        }

        let payload = encode_form(form);
        tracing::debug!(form = form.schema().name(), "posting form submission");

        let success = match self.transport.post(payload).await {
            Ok(status) if status < 400 => true,
            Ok(status) => {
                tracing::warn!(
                    form = form.schema().name(),
                    status,
                    "form endpoint rejected submission"
                );
                false
            }
            Err(error) => {
                tracing::error!(
                    form = form.schema().name(),
                    error = %error,
                    "form submission failed to send"
                );
                false
            }
        };

        self.state = SubmissionState::completed(success);
        Ok(success)
    }
}
