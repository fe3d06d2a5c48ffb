//! Cooperative cancellation and background execution.
//!
//! Engine calls take a [`CancelToken`] and poll it between trial batches.
//! [`AnalysisTask`] runs one call on a worker thread so a caller can walk
//! away from it and later observe `Outcome::Cancelled` instead of a stale
//! or partial result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of a cancellable call. Cancellation is neither success nor error.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(v) => Some(v),
            Outcome::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Completed(v) => Outcome::Completed(f(v)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TaskError {
    #[error("analysis worker panicked")]
    Panicked,
    #[error("failed to spawn analysis worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// An engine call running on its own thread.
#[derive(Debug)]
pub struct AnalysisTask<T> {
    token: CancelToken,
    handle: JoinHandle<Outcome<T>>,
}

impl<T: Send + 'static> AnalysisTask<T> {
    /// Run `work` on a named worker thread with a fresh token.
    pub fn spawn<F>(name: &str, work: F) -> Result<Self, TaskError>
    where
        F: FnOnce(&CancelToken) -> Outcome<T> + Send + 'static,
    {
        let token = CancelToken::new();
        let worker_token = token.clone();
        let handle = std::thread::Builder::new()
            .name(name.to_string())
            .spawn(move || work(&worker_token))?;
        Ok(Self { token, handle })
    }

    /// Ask the worker to stop at its next batch boundary.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker. A task cancelled before it finished reports
    /// `Cancelled` even if the worker had already produced a value.
    pub fn join(self) -> Result<Outcome<T>, TaskError> {
        let outcome = self.handle.join().map_err(|_| TaskError::Panicked)?;
        if self.token.is_cancelled() {
            return Ok(Outcome::Cancelled);
        }
        Ok(outcome)
    }
}

/// Run `trials` iterations in batches, polling `cancel` before each batch.
pub(crate) fn run_batched(
    trials: usize,
    batch_size: usize,
    cancel: &CancelToken,
    mut step: impl FnMut(),
) -> Outcome<()> {
    let batch_size = batch_size.max(1);
    let mut done = 0;
    while done < trials {
        if cancel.is_cancelled() {
            log::debug!("cancelled after {done} of {trials} trials");
            return Outcome::Cancelled;
        }
        let batch = batch_size.min(trials - done);
        for _ in 0..batch {
            step();
        }
        done += batch;
    }
    Outcome::Completed(())
}
