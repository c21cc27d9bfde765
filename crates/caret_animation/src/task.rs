//! Tokio-backed blink timer
//!
//! Runs each blink cycle as a spawned task that sleeps through the stages
//! and sends visibility edges over a channel. Deadlines are measured from
//! the moment the cycle was scheduled, so late wake-ups never accumulate
//! drift. Dropping the [`TaskHandle`] aborts the task.

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::timer::{BlinkEdges, BlinkHandle, BlinkTimer};
use crate::timing::{BlinkStage, BlinkTiming};

/// Timer construction errors
#[derive(Error, Debug)]
pub enum TimerError {
    /// Called outside of a tokio runtime
    #[error("No tokio runtime available on this thread")]
    NoRuntime,
}

/// Schedules blink cycles as tasks on a tokio runtime
#[derive(Clone, Debug)]
pub struct TaskTimer {
    runtime: Handle,
}

impl TaskTimer {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Use the runtime the caller is running on
    pub fn current() -> Result<Self, TimerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| TimerError::NoRuntime)
    }
}

impl BlinkTimer for TaskTimer {
    type Handle = TaskHandle;

    fn schedule(&mut self, timing: BlinkTiming) -> TaskHandle {
        let (tx, edges) = mpsc::unbounded_channel();
        let task = self.runtime.spawn(run_cycle(timing, Instant::now(), tx));
        tracing::trace!("blink: task scheduled");
        TaskHandle { task, edges }
    }
}

/// A running blink task. Dropping it aborts the task.
#[derive(Debug)]
pub struct TaskHandle {
    task: JoinHandle<()>,
    edges: UnboundedReceiver<bool>,
}

impl TaskHandle {
    /// Whether the task is still alive
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl BlinkHandle for TaskHandle {
    fn poll(&mut self, _dt_ms: f32) -> BlinkEdges {
        let mut edges = BlinkEdges::new();
        while let Ok(visible) = self.edges.try_recv() {
            edges.push(visible);
        }
        edges
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_cycle(timing: BlinkTiming, start: Instant, tx: UnboundedSender<bool>) {
    if timing.show_at_ms() <= timing.hide_at_ms() {
        return;
    }

    let mut deadline = start;
    loop {
        deadline += timing.stage_duration(BlinkStage::Hold);
        sleep_until(deadline).await;
        if tx.send(false).is_err() {
            return;
        }

        deadline += timing.stage_duration(BlinkStage::FadeOut);
        deadline += timing.stage_duration(BlinkStage::Hidden);
        sleep_until(deadline).await;
        if tx.send(true).is_err() {
            return;
        }

        deadline += timing.stage_duration(BlinkStage::FadeIn);
    }
}
