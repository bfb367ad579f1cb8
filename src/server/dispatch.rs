//! Bounded-concurrency work dispatch for the sync fan-out.
//!
//! The sync orchestrator hands each phase's units of work (one list page, one chunk of
//! clans) to a [`Dispatcher`] and waits for the whole phase to finish before it moves on.
//! Keeping this behind a trait leaves reconciliation and phase sequencing independent of
//! the concurrency primitive that executes the units.

use std::{future::Future, sync::Arc, time::Duration};

use tokio::{
    sync::Semaphore,
    task::JoinSet,
    time::{interval, MissedTickBehavior},
};

/// Runs independent units of work and collects their outputs.
pub trait Dispatcher: Send + Sync {
    /// Runs `work` once per unit and resolves when every unit has finished.
    ///
    /// Outputs come back in completion order. A unit that panics is logged and has no
    /// output.
    fn dispatch<I, F, Fut, T>(&self, units: Vec<I>, work: F) -> impl Future<Output = Vec<T>> + Send
    where
        I: Send + 'static,
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static;
}

/// Dispatcher running units as tokio tasks under a concurrency cap and a start rate.
#[derive(Debug, Clone)]
pub struct RateLimitedDispatcher {
    max_concurrent: usize,
    requests_per_second: u32,
}

impl RateLimitedDispatcher {
    /// Creates a dispatcher.
    ///
    /// # Arguments
    /// - `max_concurrent` - Units allowed to run at the same time
    /// - `requests_per_second` - Units allowed to start per second
    pub fn new(max_concurrent: usize, requests_per_second: u32) -> Self {
        Self {
            max_concurrent: max_concurrent.max(1),
            requests_per_second: requests_per_second.max(1),
        }
    }

    fn start_interval(&self) -> Duration {
        Duration::from_secs(1) / self.requests_per_second
    }
}

impl Dispatcher for RateLimitedDispatcher {
    async fn dispatch<I, F, Fut, T>(&self, units: Vec<I>, work: F) -> Vec<T>
    where
        I: Send + 'static,
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let total = units.len();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let work = Arc::new(work);
        let mut ticker = interval(self.start_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut tasks = JoinSet::new();
        for unit in units {
            ticker.tick().await;
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    tracing::error!("Dispatcher semaphore closed: {}", e);
                    break;
                }
            };

            let work = work.clone();
            tasks.spawn(async move {
                let _permit = permit;
                work(unit).await
            });
        }

        let mut outputs = Vec::with_capacity(total);
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(output) => outputs.push(output),
                Err(e) => tracing::error!("Dispatched unit did not complete: {}", e),
            }
        }

        outputs
    }
}

/// Dispatcher running units one after another on the calling task.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatcher;

impl Dispatcher for InlineDispatcher {
    async fn dispatch<I, F, Fut, T>(&self, units: Vec<I>, work: F) -> Vec<T>
    where
        I: Send + 'static,
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let mut outputs = Vec::with_capacity(units.len());
        for unit in units {
            outputs.push(work(unit).await);
        }
        outputs
    }
}
