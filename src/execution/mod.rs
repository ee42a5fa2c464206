//! Batch execution of configured operations.
//!
//! The closures returned by [`crate::processing`] are pure, so one of them can be applied to
//! many independent collections at the same time. [`BatchExecutor`] does that on a dedicated
//! rayon pool and reports progress through an optional [`ExecutionObserver`].
//!
//! ```rust
//! use immutable_math::execution::{BatchExecutor, ExecutionOptions};
//! use immutable_math::processing::median;
//!
//! let executor = BatchExecutor::new(ExecutionOptions { num_threads: Some(2) }).unwrap();
//! let batches = vec![vec![3.0, 1.0, 2.0], vec![10.0, 20.0]];
//! assert_eq!(executor.apply_all(&batches, median()), vec![2.0, 15.0]);
//! ```

mod observer;

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

pub use observer::{ExecutionEvent, ExecutionObserver, TracingExecutionObserver};

/// Configuration for the [`BatchExecutor`].
///
/// Deserializable so hosts can keep it in their own config files; missing fields take the
/// [`Default`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionOptions {
    /// Number of worker threads.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
}

/// Applies one operation to many collections in parallel.
pub struct BatchExecutor {
    pool: ThreadPool,
    observer: Option<Arc<dyn ExecutionObserver>>,
}

impl BatchExecutor {
    /// Create a new executor with the given options.
    ///
    /// # Errors
    ///
    /// [`MathError::InvalidOptions`] if `num_threads == Some(0)`, [`MathError::ThreadPool`] if the
    /// pool cannot be built.
    pub fn new(opts: ExecutionOptions) -> MathResult<Self> {
        if opts.num_threads == Some(0) {
            return Err(MathError::InvalidOptions {
                message: "num_threads must be > 0 when set".to_string(),
            });
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1));

        let pool = ThreadPoolBuilder::new().num_threads(n_threads).build()?;
        tracing::debug!(threads = n_threads, "batch executor ready");

        Ok(Self {
            pool,
            observer: None,
        })
    }

    /// Attach an observer for execution events.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Number of worker threads in the pool.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Apply `op` to every input. Results are in input order.
    pub fn apply_all<C, R, F>(&self, inputs: &[C], op: F) -> Vec<R>
    where
        C: Sync,
        R: Send,
        F: Fn(&C) -> R + Sync,
    {
        self.emit(ExecutionEvent::BatchStarted {
            inputs: inputs.len(),
        });
        let start = Instant::now();

        let out: Vec<R> = self
            .pool
            .install(|| inputs.par_iter().map(|input| op(input)).collect());

        self.emit(ExecutionEvent::BatchFinished {
            inputs: inputs.len(),
            elapsed: start.elapsed(),
        });
        out
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
