//! Background workers and the single-owner handle the UI holds on them
//!
//! A worker runs off the UI thread and answers exactly one start signal with at
//! most one number. The UI side never blocks: it polls [`TaskHandle::try_reply`]
//! once per frame. Releasing the handle (explicitly or by dropping it) fires the
//! cancellation token, drops the reply channel and aborts the task, so a reply
//! produced afterwards has nowhere to go.

use crate::constants::START_SIGNAL;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// How many additions `SumWorker` performs between cancellation checks
const CANCEL_CHECK_INTERVAL: u64 = 1 << 20;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    #[error("start signal was already sent")]
    AlreadyStarted,
    #[error("worker stopped before receiving the start signal")]
    NotListening,
    #[error("worker stopped without replying")]
    NoReply,
}

/// A black-box computation: one signal in, at most one number out.
///
/// `run` executes on the blocking pool. Long computations should check
/// `cancel` and return `None` once it fires.
pub trait Worker: Send + 'static {
    fn name(&self) -> &'static str;

    fn run(self, signal: &str, cancel: &CancellationToken) -> Option<f64>;
}

/// Sums the integers `0..upper` when told to start
#[derive(Debug, Clone, Copy)]
pub struct SumWorker {
    pub upper: u64,
}

impl SumWorker {
    pub fn new(upper: u64) -> Self {
        Self { upper }
    }
}

impl Worker for SumWorker {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn run(self, signal: &str, cancel: &CancellationToken) -> Option<f64> {
        if signal != START_SIGNAL {
            warn!(signal, "Unknown signal, not replying");
            return None;
        }

        let mut total: u64 = 0;
        for i in 0..self.upper {
            if i % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
                debug!(reached = i, "Sum cancelled");
                return None;
            }
            total = total.wrapping_add(i);
        }
        Some(total as f64)
    }
}

/// Exclusive handle on one in-flight worker task
pub struct TaskHandle {
    id: u64,
    start_tx: Option<oneshot::Sender<String>>,
    reply_rx: oneshot::Receiver<f64>,
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

impl TaskHandle {
    /// Spawn `worker` on `runtime`. The worker idles until [`post`](Self::post)
    /// delivers its start signal. `notify` runs on the background side right
    /// after a reply has been handed over, typically to request a repaint.
    pub fn spawn<W, F>(runtime: &tokio::runtime::Handle, worker: W, notify: F) -> Self
    where
        W: Worker,
        F: Fn() + Send + 'static,
    {
        let id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
        let (start_tx, start_rx) = oneshot::channel::<String>();
        let (reply_tx, reply_rx) = oneshot::channel::<f64>();
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let worker_name = worker.name();

        let join = runtime.spawn(async move {
            let body_token = token.clone();
            let body = async move {
                let Ok(signal) = start_rx.await else {
                    debug!(task = id, "Handle released before start");
                    return;
                };
                debug!(task = id, worker = worker_name, signal = %signal, "Worker started");

                let outcome =
                    tokio::task::spawn_blocking(move || worker.run(&signal, &body_token)).await;

                match outcome {
                    Ok(Some(value)) => {
                        if reply_tx.send(value).is_ok() {
                            debug!(task = id, value, "Worker replied");
                            notify();
                        } else {
                            debug!(task = id, "Reply discarded, handle already released");
                        }
                    }
                    Ok(None) => debug!(task = id, "Worker finished without a reply"),
                    Err(e) => warn!(task = id, error = %e, "Worker panicked"),
                }
            };

            tokio::select! {
                _ = token.cancelled() => debug!(task = id, "Worker cancelled"),
                () = body => {}
            }
        });

        Self {
            id,
            start_tx: Some(start_tx),
            reply_rx,
            cancel,
            join,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Deliver the one start signal
    pub fn post(&mut self, signal: &str) -> Result<(), TaskError> {
        let tx = self.start_tx.take().ok_or(TaskError::AlreadyStarted)?;
        tx.send(signal.to_owned()).map_err(|_| TaskError::NotListening)
    }

    /// Non-blocking check for the reply. Yields `Some` at most once.
    pub fn try_reply(&mut self) -> Result<Option<f64>, TaskError> {
        match self.reply_rx.try_recv() {
            Ok(value) => Ok(Some(value)),
            Err(oneshot::error::TryRecvError::Empty) => Ok(None),
            Err(oneshot::error::TryRecvError::Closed) => Err(TaskError::NoReply),
        }
    }

    /// Tear the task down. Equivalent to dropping the handle.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.reply_rx.close();
        self.join.abort();
        debug!(task = self.id, "Task handle released");
    }
}
