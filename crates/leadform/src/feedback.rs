//! Submission outcome state and result feedback
//!
//! A submission attempt resolves to exactly one completed
//! [`SubmissionState`], which drives the result dialog the user sees.
//! The form lifecycle around it is modeled as an explicit [`FormPhase`]
//! machine so an illegal transition fails loudly instead of silently
//! re-submitting.

use serde::{Deserialize, Serialize};

/// Outcome of one submission attempt. Starts pending and is completed at
/// most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionState {
    pub is_complete: bool,
    pub is_success: bool,
}

impl SubmissionState {
    /// The state before the attempt has resolved.
    pub fn pending() -> Self {
        Self {
            is_complete: false,
            is_success: false,
        }
    }

    pub fn completed(is_success: bool) -> Self {
        Self {
            is_complete: true,
            is_success,
        }
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::pending()
    }
}

/// Where a form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input
    Idle,
    /// Whole-form validation is running
    Validating,
    /// The payload is in flight
    Submitting,
    /// The attempt completed successfully; terminal
    Succeeded,
    /// The attempt completed unsuccessfully; dismissable back to Idle
    Failed,
}

impl FormPhase {
    /// The user pressed submit.
    pub fn begin_validation(self) -> Self {
        match self {
            Self::Idle => Self::Validating,
            other => panic!("cannot begin validation from {:?}", other),
        }
    }

    /// Validation finished: either the payload goes out, or the form
    /// returns to accepting input with errors showing.
    pub fn validation_finished(self, is_valid: bool) -> Self {
        match self {
            Self::Validating if is_valid => Self::Submitting,
            Self::Validating => Self::Idle,
            other => panic!("validation did not start from {:?}", other),
        }
    }

    /// The in-flight attempt resolved.
    pub fn submission_finished(self, outcome: &SubmissionState) -> Self {
        if !outcome.is_complete {
            panic!("submission resolved with an incomplete outcome");
        }
        match self {
            Self::Submitting if outcome.is_success => Self::Succeeded,
            Self::Submitting => Self::Failed,
            other => panic!("no submission in flight from {:?}", other),
        }
    }

    /// The user dismissed the result dialog. Success is terminal (the
    /// page reloads instead); failure returns to accepting input.
    pub fn dismissed(self) -> Self {
        match self {
            Self::Failed => Self::Idle,
            other => panic!("nothing to dismiss from {:?}", other),
        }
    }
}

/// Content of the result dialog shown once a submission completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFeedback {
    pub title: String,
    pub message: String,
    /// Successful submissions reload the page on dismiss so the form
    /// cannot be re-submitted.
    pub reload_on_dismiss: bool,
}

impl ResultFeedback {
    /// Derives the dialog from a submission outcome. `None` while the
    /// attempt is still pending, so the dialog never flashes early.
    pub fn from_submission(outcome: &SubmissionState) -> Option<Self> {
        if !outcome.is_complete {
            return None;
        }
        if outcome.is_success {
            Some(Self {
                title: "Thank you!".to_string(),
                message: "Your message was submitted!".to_string(),
                reload_on_dismiss: true,
            })
        } else {
            Some(Self {
                title: "Uh Oh!".to_string(),
                message: "Something went wrong, try again later!".to_string(),
                reload_on_dismiss: false,
            })
        }
    }
}
