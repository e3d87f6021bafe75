// SPDX-License-Identifier: GPL-3.0-only

//! Toast lifecycle state machine.
//!
//! Each surface moves through these states independently:
//!
//! ```text
//!            show                 timer fires / dismiss         hide finished
//!   Idle ───────────▶ Showing ───────────────────────▶ Dismissing ───────────▶ Idle
//!                       ▲  │                               │
//!                       └──┴──────── show (supersede) ◀────┘
//! ```
//!
//! The registry holds at most one [`PendingDismissal`] per surface, and every
//! late callback (timer firing, animation completion) is checked against it
//! before acting. A superseded toast is removed synchronously before its
//! replacement is mounted, so nothing that still refers to it can reach the
//! new toast.

use crate::config::ToastSettings;
use crate::surface::{SurfaceId, WidgetId};
use crate::toast::content::{ToastRequest, ToastView};
use crate::toast::message::{AnimationOutcome, ToastMessage, ToastSender, Transition};
use crate::toast::presenter::{Animator, HideStart, Presenter, ViewHost};
use crate::toast::registry::{PendingDismissal, Phase, Registry, ToastPhase};
use crate::toast::timer::{HideTimer, TimerId};

/// Owns the registry and drives the presenter for every surface.
///
/// All methods must run on the coordination loop; the controller is not
/// shared across tasks.
#[derive(Debug)]
pub struct ToastController<H, A> {
    presenter: Presenter<H, A>,
    registry: Registry,
    settings: ToastSettings,
    sender: ToastSender,
    next_timer: u64,
}

impl<H: ViewHost, A: Animator> ToastController<H, A> {
    /// Creates a controller. Timer firings are posted to `sender`.
    pub fn new(host: H, animator: A, settings: ToastSettings, sender: ToastSender) -> Self {
        Self {
            presenter: Presenter::new(host, animator, &settings),
            registry: Registry::new(),
            settings,
            sender,
            next_timer: 0,
        }
    }

    /// Applies a message.
    pub fn update(&mut self, message: ToastMessage) {
        match message {
            ToastMessage::Show(request) => self.show(request),
            ToastMessage::HideTimerFired {
                surface,
                widget,
                timer,
            } => self.on_hide_timer(surface, widget, timer),
            ToastMessage::SwipedDown(widget) => {
                if self.settings.dismiss_trigger.accepts_swipe() {
                    self.dismiss(widget);
                } else {
                    tracing::trace!("Ignoring swipe on {}: swipe dismissal is disabled", widget);
                }
            }
            ToastMessage::DismissPressed(widget) => {
                if self.settings.dismiss_trigger.accepts_button() {
                    self.dismiss(widget);
                } else {
                    tracing::trace!(
                        "Ignoring dismiss button on {}: button dismissal is disabled",
                        widget
                    );
                }
            }
            ToastMessage::AnimationFinished {
                surface,
                widget,
                transition,
                outcome,
            } => self.on_animation_finished(surface, widget, transition, outcome),
            ToastMessage::SurfaceClosed(surface) => self.on_surface_closed(surface),
            ToastMessage::Shutdown => self.registry.clear(),
        }
    }

    /// Shows a toast, superseding whatever is on the target surface.
    ///
    /// Without an explicit surface the topmost one is used; if none can be
    /// resolved the request is dropped.
    pub fn show(&mut self, request: ToastRequest) {
        let surface = request
            .surface
            .or_else(|| self.presenter.host().top_surface());
        let Some(surface) = surface else {
            tracing::debug!("No surface to show toast {:?} on", request.content.title);
            return;
        };

        self.clear_surface(surface);

        let view = ToastView::new(request.content, self.settings.dismiss_trigger);
        let Some(widget) = self.presenter.mount(surface, view) else {
            tracing::warn!("Could not mount toast on {}", surface);
            return;
        };
        self.presenter.present(surface, widget);

        let delay = self.settings.hide_delay(request.duration);
        let timer = HideTimer::schedule(
            self.next_timer_id(),
            delay,
            surface,
            widget,
            self.sender.clone(),
        );
        tracing::debug!("Showing {} on {} for {:?} ({})", widget, surface, delay, timer.id());
        self.registry
            .insert(PendingDismissal::new(surface, widget, timer));
    }

    /// Cancels the pending dismissal on `surface` and removes every toast on
    /// it, registered or not.
    fn clear_surface(&mut self, surface: SurfaceId) {
        if let Some(previous) = self.registry.remove(surface) {
            tracing::debug!("Superseding {} on {}", previous.widget(), surface);
            self.presenter.remove(previous.widget());
        }

        let orphans = self.presenter.remove_all(surface);
        if orphans > 0 {
            tracing::debug!("Removed {} unregistered toast(s) from {}", orphans, surface);
        }
    }

    /// Handles an auto-hide timer firing.
    ///
    /// The firing only counts if the surface's entry still carries this
    /// timer and nothing cancelled it in the meantime.
    pub fn on_hide_timer(&mut self, surface: SurfaceId, widget: WidgetId, timer: TimerId) {
        let current = self
            .registry
            .get(surface)
            .filter(|entry| entry.timer_id() == timer)
            .map(|entry| (entry.is_cancelled(), entry.phase()));

        match current {
            Some((false, _)) => self.begin_hide(surface, widget),
            Some((true, Phase::Dismissing)) => {
                tracing::trace!("{} fired while {} was already hiding", timer, widget);
            }
            Some((true, Phase::Showing)) => {
                tracing::debug!("{} fired after cancellation, removing {}", timer, widget);
                self.presenter.remove(widget);
                self.registry.remove(surface);
            }
            None => {
                tracing::debug!("Stale {} for {} on {}", timer, widget, surface);
                let is_current = self
                    .registry
                    .get(surface)
                    .is_some_and(|entry| entry.widget() == widget);
                if !is_current {
                    self.presenter.remove(widget);
                }
            }
        }
    }

    /// Dismisses a toast early, as a swipe or the close button does.
    ///
    /// Does nothing if the toast is no longer attached.
    pub fn dismiss(&mut self, widget: WidgetId) {
        let Some(surface) = self.presenter.host().container_of(widget) else {
            tracing::trace!("Dismiss of detached {}", widget);
            return;
        };
        self.begin_hide(surface, widget);
    }

    fn begin_hide(&mut self, surface: SurfaceId, widget: WidgetId) {
        if let Some(entry) = self.registry.get_mut(surface) {
            if entry.widget() == widget {
                entry.begin_dismissing();
            }
        }

        match self.presenter.begin_hide(surface, widget) {
            HideStart::Animating => tracing::debug!("Hiding {} on {}", widget, surface),
            HideStart::AlreadyHidden => {
                tracing::debug!("{} was not showing, dropping its entry", widget);
                self.remove_entry_for(surface, widget);
            }
        }
    }

    /// Handles the end of a show or hide animation.
    pub fn on_animation_finished(
        &mut self,
        surface: SurfaceId,
        widget: WidgetId,
        transition: Transition,
        outcome: AnimationOutcome,
    ) {
        match (transition, outcome) {
            (Transition::Show, _) => {
                tracing::trace!("Show animation of {} ended: {:?}", widget, outcome);
            }
            (Transition::Hide, AnimationOutcome::Interrupted) => {
                tracing::trace!("Hide animation of {} interrupted", widget);
            }
            (Transition::Hide, AnimationOutcome::Finished) => {
                self.presenter.remove(widget);
                self.remove_entry_for(surface, widget);
                tracing::debug!("{} hidden on {}", widget, surface);
            }
        }
    }

    fn on_surface_closed(&mut self, surface: SurfaceId) {
        if let Some(entry) = self.registry.remove(surface) {
            tracing::debug!("{} closed with {} pending", surface, entry.widget());
            self.presenter.animator_mut().interrupt(entry.widget());
        }
    }

    /// Removes the entry for `surface` only if it still refers to `widget`.
    fn remove_entry_for(&mut self, surface: SurfaceId, widget: WidgetId) {
        let owns_entry = self
            .registry
            .get(surface)
            .is_some_and(|entry| entry.widget() == widget);
        if owns_entry {
            self.registry.remove(surface);
        }
    }

    /// Cancels and forgets the pending dismissal on `surface`.
    ///
    /// The toast itself is left where it is. Returns `false`, changing
    /// nothing, if there was no entry.
    pub fn remove(&mut self, surface: SurfaceId) -> bool {
        self.registry.remove(surface).is_some()
    }

    fn next_timer_id(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }

    /// Lifecycle phase of `surface`.
    pub fn phase(&self, surface: SurfaceId) -> ToastPhase {
        self.registry.phase(surface)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        self.presenter.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.presenter.host_mut()
    }

    pub fn animator(&self) -> &A {
        self.presenter.animator()
    }

    /// Consumes the controller, cancelling every pending timer.
    pub fn into_host(mut self) -> H {
        self.registry.clear();
        let Self { presenter, .. } = self;
        presenter.into_host()
    }
}
