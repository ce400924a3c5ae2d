pub mod client;

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;

pub use client::{
    GenerationClient, HttpGenerationClient, ImproverInput, ImproverOutput, IMPROVER_PROMPT,
};

use crate::editors::projects::{ProjectForm, MIN_ABSTRACT_CHARS};
use crate::error::{AppError, AppResult};

pub fn cancellation() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    // A signal that can never fire, for callers without an unmount path.
    pub fn never() -> Self {
        let (_handle, signal) = cancellation();
        signal
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // The handle is gone, so cancellation can no longer happen.
                std::future::pending::<()>().await;
            }
        }
    }
}

#[derive(Debug, Default)]
struct FlowState {
    in_flight: bool,
    result: Option<ImproverOutput>,
}

#[derive(Debug)]
pub struct ImproverFlow<C> {
    client: C,
    state: Arc<Mutex<FlowState>>,
}

impl<C: GenerationClient> ImproverFlow<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(FlowState::default())),
        }
    }

    pub fn validate_abstract(text: &str) -> AppResult<()> {
        if text.chars().count() < MIN_ABSTRACT_CHARS {
            return Err(AppError::Validation(format!(
                "Abstract must be at least {MIN_ABSTRACT_CHARS} characters to perform AI check."
            )));
        }

        Ok(())
    }

    pub fn in_flight(&self) -> bool {
        self.with_state(|state| state.in_flight)
    }

    pub fn result(&self) -> Option<ImproverOutput> {
        self.with_state(|state| state.result.clone())
    }

    // Issues at most one request; a failed or cancelled check leaves both
    // AI fields unset. Any previous result is cleared when a check starts.
    pub async fn check(
        &self,
        abstract_text: &str,
        mut cancel: CancelSignal,
    ) -> AppResult<ImproverOutput> {
        Self::validate_abstract(abstract_text)?;

        {
            let started = self.with_state(|state| {
                if state.in_flight {
                    return false;
                }
                state.in_flight = true;
                state.result = None;
                true
            });
            if !started {
                return Err(AppError::CheckInFlight);
            }
        }

        let input = ImproverInput {
            project_abstract: abstract_text.to_string(),
        };

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                self.finish(None);
                tracing::debug!("abstract check cancelled while in flight");
                return Err(AppError::Cancelled);
            }
            outcome = self.client.improve(&input) => outcome,
        };

        // A response that lands after cancellation is discarded, never merged.
        if cancel.is_cancelled() {
            self.finish(None);
            tracing::debug!("abstract check response discarded after cancellation");
            return Err(AppError::Cancelled);
        }

        match outcome {
            Ok(output) => {
                self.finish(Some(output.clone()));
                Ok(output)
            }
            Err(error) => {
                self.finish(None);
                Err(AppError::from(error))
            }
        }
    }

    // Explicit user action: copy the improved abstract over the draft field.
    pub fn apply_improved(&self, form: &mut ProjectForm) -> bool {
        match self.result() {
            Some(output) => {
                form.abstract_text = output.improved_abstract;
                true
            }
            None => false,
        }
    }

    // Stamps the latest AI result onto an outgoing form, as submission does.
    pub fn merge_into(&self, form: &mut ProjectForm) {
        if let Some(output) = self.result() {
            form.originality_report = Some(output.originality_report);
            form.improved_abstract = Some(output.improved_abstract);
        }
    }

    fn finish(&self, result: Option<ImproverOutput>) {
        self.with_state(|state| {
            state.in_flight = false;
            state.result = result;
        });
    }

    fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut FlowState) -> T,
    {
        let mut guard = lock_or_recover(&self.state);
        f(&mut guard)
    }
}

fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("improver flow mutex poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
