// SPDX-License-Identifier: GPL-3.0-only

//! Cancellable auto-hide timers.
//!
//! A [`HideTimer`] is a tokio task that sleeps for the toast's duration and
//! then posts [`ToastMessage::HideTimerFired`] to the coordination loop. It
//! never touches shared state itself.
//!
//! Cancelling sets a flag and aborts the task. A message that was already
//! queued when the timer was cancelled still arrives, which is why the
//! controller re-validates every firing against the registry.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::surface::{SurfaceId, WidgetId};
use crate::toast::message::{ToastMessage, ToastSender};

/// Identity of one scheduled timer. Never reused within a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Handle to a scheduled auto-hide.
#[derive(Debug)]
pub struct HideTimer {
    id: TimerId,
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl HideTimer {
    /// Schedules a hide for `widget` on `surface` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(
        id: TimerId,
        delay: Duration,
        surface: SurfaceId,
        widget: WidgetId,
        sender: ToastSender,
    ) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if flag.load(Ordering::SeqCst) {
                return;
            }
            let fired = ToastMessage::HideTimerFired {
                surface,
                widget,
                timer: id,
            };
            if sender.unbounded_send(fired).is_err() {
                tracing::debug!("{} fired after the toast loop stopped", id);
            }
        });

        Self {
            id,
            cancelled,
            task,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Cancels the timer. Safe to call any number of times.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::trace!("Cancelling {}", self.id);
        }
        self.task.abort();
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::StreamExt;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded();
        let start = tokio::time::Instant::now();

        let timer = HideTimer::schedule(
            TimerId(1),
            Duration::from_millis(1500),
            SurfaceId(1),
            WidgetId(2),
            tx,
        );

        let msg = rx.next().await;
        assert_eq!(
            msg,
            Some(ToastMessage::HideTimerFired {
                surface: SurfaceId(1),
                widget: WidgetId(2),
                timer: TimerId(1),
            })
        );
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(!timer.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded();

        let timer = HideTimer::schedule(
            TimerId(1),
            Duration::from_millis(500),
            SurfaceId(1),
            WidgetId(2),
            tx,
        );
        timer.cancel();
        assert!(timer.is_cancelled());

        let waited = tokio::time::timeout(Duration::from_secs(5), rx.next()).await;
        match waited {
            Err(_) => {}
            Ok(msg) => assert_eq!(msg, None, "cancelled timer must not send"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_idempotent() {
        let (tx, _rx) = mpsc::unbounded();
        let timer = HideTimer::schedule(
            TimerId(3),
            Duration::from_millis(500),
            SurfaceId(1),
            WidgetId(2),
            tx,
        );

        timer.cancel();
        timer.cancel();
        assert!(timer.is_cancelled());
        assert_eq!(timer.id(), TimerId(3));
    }
}
