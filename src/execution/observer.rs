use std::time::Duration;

/// Execution events emitted by [`super::BatchExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionEvent {
    BatchStarted { inputs: usize },
    BatchFinished { inputs: usize, elapsed: Duration },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// Forwards execution events to `tracing` at debug level.
#[derive(Debug, Default)]
pub struct TracingExecutionObserver;

impl ExecutionObserver for TracingExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::BatchStarted { inputs } => {
                tracing::debug!(inputs, "batch started");
            }
            ExecutionEvent::BatchFinished { inputs, elapsed } => {
                tracing::debug!(inputs, elapsed_us = elapsed.as_micros() as u64, "batch finished");
            }
        }
    }
}
