// SPDX-License-Identifier: GPL-3.0-only

//! Messages delivered to the toast coordination loop.
//!
//! Every state change goes through one of these, whether it comes from a
//! caller, a gesture, a timer task, or an animation task. Background tasks
//! never touch the registry; they send a message and the loop applies it.

use futures::channel::mpsc;

use crate::surface::{SurfaceId, WidgetId};
use crate::toast::content::ToastRequest;
use crate::toast::timer::TimerId;

/// Sending half of the coordination loop's channel.
pub type ToastSender = mpsc::UnboundedSender<ToastMessage>;

/// Receiving half of the coordination loop's channel.
pub type ToastReceiver = mpsc::UnboundedReceiver<ToastMessage>;

/// Direction of a toast transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Slide in from below the surface.
    Show,
    /// Slide out below the surface.
    Hide,
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// Ran for its full duration.
    Finished,
    /// Cut short, usually because the widget was removed underneath it.
    Interrupted,
}

/// Messages handled by [`ToastController::update`](crate::toast::ToastController::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastMessage {
    /// Show a toast, replacing any toast already on the target surface.
    Show(ToastRequest),

    /// An auto-hide timer elapsed.
    ///
    /// Carries the identity of the toast it was scheduled for so a late
    /// delivery can be recognised as stale.
    HideTimerFired {
        surface: SurfaceId,
        widget: WidgetId,
        timer: TimerId,
    },

    /// The user swiped down on a toast.
    SwipedDown(WidgetId),

    /// The user pressed a toast's close button.
    DismissPressed(WidgetId),

    /// A show or hide animation ended.
    AnimationFinished {
        surface: SurfaceId,
        widget: WidgetId,
        transition: Transition,
        outcome: AnimationOutcome,
    },

    /// A surface went away; anything pending on it is dropped.
    SurfaceClosed(SurfaceId),

    /// Stop the coordination loop.
    Shutdown,
}
