// SPDX-License-Identifier: GPL-3.0-only

//! Timed toast transitions.
//!
//! [`TimedAnimator`] is the [`Animator`] used by the runtime. Each transition
//! is a tokio task that sleeps for the animation's length and then reports
//! [`AnimationOutcome::Finished`]. Renderers read the progress of a running
//! transition through [`TimedAnimator::progress`] to place the toast.

use std::collections::HashMap;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::surface::{SurfaceId, WidgetId};
use crate::toast::message::{AnimationOutcome, ToastMessage, ToastSender, Transition};
use crate::toast::presenter::{AnimationRequest, Animator};

/// Progress of one transition.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    /// Direction of the transition.
    pub transition: Transition,
    /// When the transition started.
    pub start_time: Instant,
    /// Total length of the transition.
    pub duration: Duration,
}

impl Animation {
    pub fn new(transition: Transition, duration: Duration) -> Self {
        Self {
            transition,
            start_time: Instant::now(),
            duration,
        }
    }

    /// Linear progress from 0.0 (start) to 1.0 (complete).
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.start_time.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Returns `true` if the transition has run its full length.
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Ease-out-cubic progress: `1 - (1 - x)^3`.
    pub fn eased_progress(&self) -> f32 {
        let x = self.progress();
        1.0 - (1.0 - x).powi(3)
    }

    /// How far the toast is into view, from 0.0 (hidden) to 1.0 (showing).
    pub fn visibility(&self) -> f32 {
        match self.transition {
            Transition::Show => self.eased_progress(),
            Transition::Hide => 1.0 - self.eased_progress(),
        }
    }
}

#[derive(Debug)]
struct Running {
    surface: SurfaceId,
    animation: Animation,
    task: JoinHandle<()>,
}

/// Animator backed by tokio timers.
#[derive(Debug)]
pub struct TimedAnimator {
    sender: ToastSender,
    running: HashMap<WidgetId, Running>,
}

impl TimedAnimator {
    pub fn new(sender: ToastSender) -> Self {
        Self {
            sender,
            running: HashMap::new(),
        }
    }

    /// The most recent transition started on `widget`, if it is still known.
    pub fn animation(&self, widget: WidgetId) -> Option<&Animation> {
        self.running.get(&widget).map(|running| &running.animation)
    }

    /// How far `widget` is into view. Widgets with no transition on record
    /// are considered fully shown.
    pub fn progress(&self, widget: WidgetId) -> f32 {
        self.animation(widget).map_or(1.0, Animation::visibility)
    }

    /// Returns `true` while any transition is still running.
    pub fn is_animating(&self) -> bool {
        self.running.values().any(|running| !running.task.is_finished())
    }
}

impl Animator for TimedAnimator {
    fn animate(&mut self, request: AnimationRequest) {
        self.running.retain(|_, running| !running.task.is_finished());
        if let Some(previous) = self.running.remove(&request.widget) {
            previous.task.abort();
        }

        let sender = self.sender.clone();
        let AnimationRequest {
            surface,
            widget,
            transition,
            duration,
        } = request;

        let task = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let finished = ToastMessage::AnimationFinished {
                surface,
                widget,
                transition,
                outcome: AnimationOutcome::Finished,
            };
            if sender.unbounded_send(finished).is_err() {
                tracing::debug!("{:?} animation of {} ended after the toast loop stopped", transition, widget);
            }
        });

        self.running.insert(
            widget,
            Running {
                surface,
                animation: Animation::new(transition, duration),
                task,
            },
        );
    }

    fn interrupt(&mut self, widget: WidgetId) {
        let Some(running) = self.running.remove(&widget) else {
            return;
        };
        if running.task.is_finished() {
            return;
        }

        running.task.abort();
        let interrupted = ToastMessage::AnimationFinished {
            surface: running.surface,
            widget,
            transition: running.animation.transition,
            outcome: AnimationOutcome::Interrupted,
        };
        if self.sender.unbounded_send(interrupted).is_err() {
            tracing::debug!("Interrupted {} after the toast loop stopped", widget);
        }
    }
}
