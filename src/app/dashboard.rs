//! Dashboard result widget: one background calculation per activation

use crate::constants::{PLACEHOLDER, START_SIGNAL};
use crate::types::CalcState;
use crate::worker::{TaskHandle, Worker};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// One activation of the dashboard widget.
///
/// Idle -> Pending on [`mount`](Self::mount), Pending -> Resolved when the reply
/// is polled, Pending -> Abandoned on [`unmount`](Self::unmount) or drop. Resolved
/// and Abandoned are final; run again by building a new widget.
pub struct ResultWidget {
    id: u64,
    state: CalcState,
    task: Option<TaskHandle>,
}

impl Default for ResultWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultWidget {
    pub fn new() -> Self {
        Self {
            id: NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed),
            state: CalcState::Idle,
            task: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    pub fn has_live_task(&self) -> bool {
        self.task.is_some()
    }

    /// Start the worker and send it the start signal
    pub fn mount<W, F>(&mut self, runtime: &tokio::runtime::Handle, worker: W, notify: F)
    where
        W: Worker,
        F: Fn() + Send + 'static,
    {
        if self.state != CalcState::Idle {
            warn!(widget = self.id, state = ?self.state, "Mount ignored, widget already activated");
            return;
        }

        let mut task = TaskHandle::spawn(runtime, worker, notify);
        self.state = CalcState::Pending;
        info!(widget = self.id, task = task.id(), "Widget mounted");

        match task.post(START_SIGNAL) {
            Ok(()) => self.task = Some(task),
            Err(e) => {
                // Nothing will ever reply; stay Pending like a worker that never answers
                warn!(widget = self.id, error = %e, "Worker did not take the start signal");
                task.release();
            }
        }
    }

    /// Check for the reply without blocking. Returns true if the displayed
    /// state changed.
    pub fn poll(&mut self) -> bool {
        if self.state != CalcState::Pending {
            return false;
        }
        let Some(task) = self.task.as_mut() else {
            return false;
        };

        match task.try_reply() {
            Ok(None) => false,
            Ok(Some(value)) => {
                self.state = CalcState::Resolved(value);
                if let Some(task) = self.task.take() {
                    task.release();
                }
                info!(widget = self.id, value, "Widget resolved");
                true
            }
            Err(e) => {
                warn!(widget = self.id, error = %e, "Worker gone, result will not arrive");
                if let Some(task) = self.task.take() {
                    task.release();
                }
                false
            }
        }
    }

    /// Tear down. Only a Pending widget changes state.
    pub fn unmount(&mut self) {
        if let Some(task) = self.task.take() {
            task.release();
        }
        if self.state == CalcState::Pending {
            self.state = CalcState::Abandoned;
            info!(widget = self.id, "Widget abandoned before a result arrived");
        } else {
            debug!(widget = self.id, state = ?self.state, "Widget unmounted");
        }
    }

    pub fn display_text(&self) -> String {
        match self.state {
            CalcState::Resolved(value) => value.to_string(),
            CalcState::Idle | CalcState::Pending | CalcState::Abandoned => PLACEHOLDER.to_owned(),
        }
    }
}

impl Drop for ResultWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    struct Fixed(f64);

    impl Worker for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn run(self, _signal: &str, _cancel: &CancellationToken) -> Option<f64> {
            Some(self.0)
        }
    }

    struct Silent;

    impl Worker for Silent {
        fn name(&self) -> &'static str {
            "silent"
        }

        fn run(self, _signal: &str, _cancel: &CancellationToken) -> Option<f64> {
            None
        }
    }

    /// Holds its reply until the test opens the gate
    struct Gated {
        gate: mpsc::Receiver<()>,
        value: f64,
        finished: Arc<AtomicBool>,
    }

    impl Worker for Gated {
        fn name(&self) -> &'static str {
            "gated"
        }

        fn run(self, _signal: &str, _cancel: &CancellationToken) -> Option<f64> {
            self.gate.recv().ok()?;
            self.finished.store(true, Ordering::SeqCst);
            Some(self.value)
        }
    }

    async fn poll_until_changed(widget: &mut ResultWidget) -> bool {
        for _ in 0..200 {
            if widget.poll() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }

    #[test]
    fn new_widget_is_idle_with_placeholder() {
        let widget = ResultWidget::new();
        assert_eq!(widget.state(), CalcState::Idle);
        assert_eq!(widget.display_text(), PLACEHOLDER);
        assert!(!widget.has_live_task());
    }

    #[test]
    fn resolved_value_renders_as_is() {
        let mut widget = ResultWidget::new();
        widget.state = CalcState::Resolved(42.0);
        assert_eq!(widget.display_text(), "42");
        widget.state = CalcState::Resolved(1.5);
        assert_eq!(widget.display_text(), "1.5");
    }

    #[tokio::test]
    async fn reply_resolves_exactly_once() {
        let mut widget = ResultWidget::new();
        widget.mount(&tokio::runtime::Handle::current(), Fixed(42.0), || {});
        assert_eq!(widget.state(), CalcState::Pending);
        assert!(widget.has_live_task());
        assert_eq!(widget.display_text(), PLACEHOLDER);

        assert!(poll_until_changed(&mut widget).await);
        assert_eq!(widget.state(), CalcState::Resolved(42.0));
        assert_eq!(widget.display_text(), "42");
        assert!(!widget.has_live_task());

        assert!(!widget.poll());
        widget.unmount();
        assert_eq!(widget.state(), CalcState::Resolved(42.0));
    }

    #[tokio::test]
    async fn unmount_while_pending_ignores_late_reply() {
        let (open, gate) = mpsc::channel();
        let finished = Arc::new(AtomicBool::new(false));
        let notified = Arc::new(AtomicBool::new(false));
        let flag = notified.clone();

        let mut widget = ResultWidget::new();
        widget.mount(
            &tokio::runtime::Handle::current(),
            Gated {
                gate,
                value: 42.0,
                finished: finished.clone(),
            },
            move || flag.store(true, Ordering::SeqCst),
        );
        tokio::time::sleep(Duration::from_millis(20)).await;

        widget.unmount();
        assert_eq!(widget.state(), CalcState::Abandoned);
        assert!(!widget.has_live_task());

        // Let the worker produce its value after teardown
        let _ = open.send(());
        for _ in 0..100 {
            if finished.load(Ordering::SeqCst) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(!widget.poll());
        assert_eq!(widget.state(), CalcState::Abandoned);
        assert_eq!(widget.display_text(), PLACEHOLDER);
        assert!(!notified.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn mount_twice_keeps_single_task() {
        let (_open, gate) = mpsc::channel();
        let mut widget = ResultWidget::new();
        widget.mount(
            &tokio::runtime::Handle::current(),
            Gated {
                gate,
                value: 1.0,
                finished: Arc::new(AtomicBool::new(false)),
            },
            || {},
        );
        widget.mount(&tokio::runtime::Handle::current(), Fixed(2.0), || {});

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!widget.poll());
        assert_eq!(widget.state(), CalcState::Pending);
        widget.unmount();
    }

    #[tokio::test]
    async fn silent_worker_leaves_widget_pending() {
        let mut widget = ResultWidget::new();
        widget.mount(&tokio::runtime::Handle::current(), Silent, || {});
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!widget.poll());
        assert_eq!(widget.state(), CalcState::Pending);
        assert_eq!(widget.display_text(), PLACEHOLDER);
        assert!(!widget.has_live_task());

        widget.unmount();
        assert_eq!(widget.state(), CalcState::Abandoned);
    }

    #[test]
    fn unmount_idle_widget_is_noop() {
        let mut widget = ResultWidget::new();
        widget.unmount();
        assert_eq!(widget.state(), CalcState::Idle);
    }
}
