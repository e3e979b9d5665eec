use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use roster_domain::employee::{EmployeeField, FieldErrors};
use roster_domain::validation::local_today;

use crate::client::{ClientError, EmployeesApi};
use crate::state::FormState;

/// Why a submit did not store the record.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Local validation failed; nothing was sent.
    #[error("form has invalid fields")]
    Invalid(FieldErrors),
    #[error("There was an error submitting the form.")]
    Failed(#[source] ClientError),
}

/// Drives a [`FormState`] against the employees service.
///
/// Duplicate checks are spawned on the current tokio runtime and never
/// awaited by the form itself; [`FormState`] drops answers that arrive stale.
pub struct FormController<A> {
    api: Arc<A>,
    state: Arc<Mutex<FormState>>,
}

impl<A> Clone for FormController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: EmployeesApi + 'static> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(Mutex::new(FormState::new())),
        }
    }

    /// Copy of the current form for rendering.
    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    /// Handle a field edit. For unique fields, returns the spawned duplicate
    /// check so callers may await it; dropping the handle does not cancel it.
    ///
    /// Outside a tokio runtime the value is still recorded but the check is
    /// skipped.
    pub fn change(&self, field: EmployeeField, value: impl Into<String>) -> Option<JoinHandle<()>> {
        let check = self.lock().change(field, value, local_today())?;
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!(error = %e, field = ?check.field, "no runtime, duplicate check skipped");
                return None;
            }
        };
        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        Some(runtime.spawn(async move {
            match api.duplicate_exists(check.field, &check.value).await {
                Ok(exists) => {
                    let applied = lock(&state).apply_duplicate_check(&check, exists);
                    if !applied {
                        tracing::debug!(field = ?check.field, seq = check.seq, "stale duplicate check dropped");
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, field = ?check.field, "duplicate check failed");
                }
            }
        }))
    }

    /// Validate locally and, when clean, send the record. Clears the form on
    /// success; keeps it populated on failure.
    pub async fn submit(&self) -> Result<i64, SubmitError> {
        let draft = self
            .lock()
            .begin_submit(local_today())
            .map_err(SubmitError::Invalid)?;
        match self.api.submit(&draft).await {
            Ok(id) => {
                self.lock().finish_submit(Some(id));
                tracing::info!(id, "employee submitted");
                Ok(id)
            }
            Err(e) => {
                self.lock().finish_submit(None);
                tracing::warn!(error = %e, "employee submission failed");
                Err(SubmitError::Failed(e))
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
