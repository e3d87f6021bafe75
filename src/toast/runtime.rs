// SPDX-License-Identifier: GPL-3.0-only

//! The toast coordination loop and its public handle.
//!
//! [`ToastRuntime`] owns the controller and the receiving end of the message
//! channel. Callers, gesture handlers, timers and animations all talk to it
//! through the same channel, so every state change is applied in order on one
//! task.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::channel::mpsc;
use futures::StreamExt;

use crate::config::ToastSettings;
use crate::surface::{SurfaceId, WidgetId};
use crate::toast::animation::TimedAnimator;
use crate::toast::content::{ToastIcon, ToastRequest};
use crate::toast::controller::ToastController;
use crate::toast::message::{ToastMessage, ToastReceiver, ToastSender};
use crate::toast::presenter::ViewHost;

/// Cloneable entry point for showing and dismissing toasts.
///
/// Every method is fire-and-forget. Once the runtime has stopped, messages
/// are logged and dropped.
///
/// Dropping the last handle stops the runtime as [`shutdown`](Self::shutdown)
/// does. Timers and animations hold their own senders, so the channel alone
/// never closes.
#[derive(Debug)]
pub struct ToastHandle {
    sender: ToastSender,
    live: Arc<AtomicUsize>,
}

impl Clone for ToastHandle {
    fn clone(&self) -> Self {
        self.live.fetch_add(1, Ordering::SeqCst);
        Self {
            sender: self.sender.clone(),
            live: Arc::clone(&self.live),
        }
    }
}

impl Drop for ToastHandle {
    fn drop(&mut self) {
        if self.live.fetch_sub(1, Ordering::SeqCst) == 1 {
            tracing::debug!("Last toast handle dropped, stopping the runtime");
            self.send(ToastMessage::Shutdown);
        }
    }
}

impl ToastHandle {
    /// Shows a toast on the topmost surface.
    ///
    /// `duration` defaults to the configured auto-hide delay.
    pub fn show_toast(
        &self,
        title: impl Into<String>,
        icon: Option<ToastIcon>,
        duration: Option<Duration>,
    ) {
        let mut request = ToastRequest::new(title);
        if let Some(icon) = icon {
            request = request.with_icon(icon);
        }
        if let Some(duration) = duration {
            request = request.with_duration(duration);
        }
        self.show(request);
    }

    pub fn show(&self, request: ToastRequest) {
        self.send(ToastMessage::Show(request));
    }

    /// Reports a swipe-down gesture on `widget`.
    pub fn swipe_down(&self, widget: WidgetId) {
        self.send(ToastMessage::SwipedDown(widget));
    }

    /// Reports a press of `widget`'s close button.
    pub fn press_dismiss(&self, widget: WidgetId) {
        self.send(ToastMessage::DismissPressed(widget));
    }

    pub fn surface_closed(&self, surface: SurfaceId) {
        self.send(ToastMessage::SurfaceClosed(surface));
    }

    /// Asks the loop to stop after cancelling every pending timer.
    pub fn shutdown(&self) {
        self.send(ToastMessage::Shutdown);
    }

    /// Posts `message` to the loop, e.g. one built by a gesture handler.
    pub fn send(&self, message: ToastMessage) {
        if let Err(err) = self.sender.unbounded_send(message) {
            tracing::debug!("Toast runtime is gone, dropping {:?}", err.into_inner());
        }
    }
}

/// Single-task driver of a [`ToastController`].
#[derive(Debug)]
pub struct ToastRuntime<H> {
    controller: ToastController<H, TimedAnimator>,
    receiver: ToastReceiver,
}

impl<H: ViewHost> ToastRuntime<H> {
    /// Creates a runtime for `host` and the handle that feeds it.
    pub fn new(host: H, settings: ToastSettings) -> (Self, ToastHandle) {
        let (sender, receiver) = mpsc::unbounded();
        let animator = TimedAnimator::new(sender.clone());
        let controller = ToastController::new(host, animator, settings, sender.clone());
        (
            Self {
                controller,
                receiver,
            },
            ToastHandle {
                sender,
                live: Arc::new(AtomicUsize::new(1)),
            },
        )
    }

    pub fn controller(&self) -> &ToastController<H, TimedAnimator> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ToastController<H, TimedAnimator> {
        &mut self.controller
    }

    /// Waits for one message and applies it.
    ///
    /// Returns `false` once the loop should stop: on [`ToastMessage::Shutdown`],
    /// which is also sent when the last [`ToastHandle`] is dropped.
    pub async fn step(&mut self) -> bool {
        let Some(message) = self.receiver.next().await else {
            tracing::debug!("Toast channel closed");
            self.controller.update(ToastMessage::Shutdown);
            return false;
        };

        let stop = message == ToastMessage::Shutdown;
        tracing::trace!("Toast message: {:?}", message);
        self.controller.update(message);
        !stop
    }

    /// Applies every message that arrives within `quiet` of the previous one.
    ///
    /// Returns `false` if the loop was asked to stop.
    pub async fn settle(&mut self, quiet: Duration) -> bool {
        loop {
            match tokio::time::timeout(quiet, self.step()).await {
                Ok(true) => continue,
                Ok(false) => return false,
                Err(_) => return true,
            }
        }
    }

    /// Runs until shutdown or until every handle is gone, then hands the host
    /// back.
    pub async fn run(mut self) -> H {
        tracing::info!("Toast runtime started");
        while self.step().await {}
        tracing::info!("Toast runtime stopped");
        self.controller.into_host()
    }
}
