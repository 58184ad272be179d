//! Submission state of the create/edit forms

use crate::shared::http::ApiError;
use contracts::shared::validation::ValidationError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

/// Persistence callback injected into a form by its management view
pub type SubmitHandler<R> = Arc<dyn Fn(R) -> SubmitFuture + Send + Sync>;

/// Wrap an async closure as a [`SubmitHandler`]
pub fn submit_handler<R, F, Fut>(f: F) -> SubmitHandler<R>
where
    F: Fn(R) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    Arc::new(move |request: R| -> SubmitFuture { Box::pin(f(request)) })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub phase: FormPhase,
    /// Message shown above the form buttons
    pub error: Option<String>,
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Start a submission with an already-validated draft.
    ///
    /// Returns the request to send, or `None` when nothing may be sent: a
    /// submission is already in flight or validation failed (its message is
    /// kept for display).
    pub fn begin<R>(&mut self, validated: Result<R, ValidationError>) -> Option<R> {
        if self.is_submitting() {
            return None;
        }
        match validated {
            Ok(request) => {
                self.error = None;
                self.phase = FormPhase::Submitting;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.message);
                None
            }
        }
    }

    /// Finish the in-flight submission; a failure shows `failure_message`
    pub fn complete(&mut self, result: Result<(), ApiError>, failure_message: &str) {
        self.phase = FormPhase::Idle;
        if let Err(e) = result {
            log::error!("{}: {}", failure_message, e);
            self.error = Some(failure_message.to_string());
        }
    }
}

/// Whether a management view shows its form, and for which entity
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            FormMode::Edit(entity) => Some(entity),
            _ => None,
        }
    }
}
