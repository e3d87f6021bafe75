// SPDX-License-Identifier: GPL-3.0-only

//! Presentation driver: mounting, animating and unmounting toast widgets.
//!
//! The view hierarchy and the animation engine belong to the host
//! application. This module defines the two seams it has to provide
//! ([`ViewHost`] and [`Animator`]) and the [`Presenter`] that drives them on
//! behalf of the lifecycle controller.
//!
//! # Placement
//!
//! A mounted toast is either pinned off-screen below the surface
//! ([`Placement::Hidden`]) or to the bottom of its safe area
//! ([`Placement::Showing`]). Placement changes take effect immediately in the
//! layout; the animator only interpolates the visual transition.

use std::time::Duration;

use crate::config::ToastSettings;
use crate::surface::{SurfaceId, WidgetId};
use crate::toast::content::ToastView;
use crate::toast::message::Transition;

/// Layout position of a mounted toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Just below the bottom edge of the surface.
    Hidden,
    /// Anchored above the bottom of the surface's safe area.
    Showing,
}

/// The host's view hierarchy.
///
/// Lookups take opaque ids and return `None` once the thing they name is
/// gone, which is how stale references are detected.
pub trait ViewHost {
    /// Resolves the topmost visible surface, if any.
    fn top_surface(&self) -> Option<SurfaceId>;

    /// Attaches a toast to `surface`. Returns `None` if the surface is gone.
    fn mount(&mut self, surface: SurfaceId, view: ToastView) -> Option<WidgetId>;

    /// Detaches a toast. Returns `false` if it was not attached.
    fn unmount(&mut self, widget: WidgetId) -> bool;

    /// The surface `widget` is currently attached to.
    fn container_of(&self, widget: WidgetId) -> Option<SurfaceId>;

    /// Every toast attached anywhere in `surface`'s hierarchy.
    fn toasts_on(&self, surface: SurfaceId) -> Vec<WidgetId>;

    /// Current placement of `widget`.
    fn placement(&self, widget: WidgetId) -> Option<Placement>;

    /// Moves `widget` to `placement`. Ignored for unknown widgets.
    fn set_placement(&mut self, widget: WidgetId, placement: Placement);

    /// The data of a mounted toast.
    fn view(&self, widget: WidgetId) -> Option<&ToastView>;
}

/// A visual transition to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequest {
    pub surface: SurfaceId,
    pub widget: WidgetId,
    pub transition: Transition,
    pub duration: Duration,
}

/// The host's animation engine.
///
/// Completion is reported asynchronously by posting
/// [`ToastMessage::AnimationFinished`](crate::toast::ToastMessage::AnimationFinished)
/// to the coordination loop.
pub trait Animator {
    /// Starts a transition.
    fn animate(&mut self, request: AnimationRequest);

    /// Cuts short any transition running on `widget`.
    ///
    /// Engines that cannot interrupt may ignore this; their eventual
    /// completion is filtered out by the controller.
    fn interrupt(&mut self, _widget: WidgetId) {}
}

/// Outcome of starting a hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideStart {
    /// The slide-out animation is running.
    Animating,
    /// The toast was not in its showing placement; nothing to animate.
    AlreadyHidden,
}

/// Drives a [`ViewHost`] and an [`Animator`] for the lifecycle controller.
#[derive(Debug)]
pub struct Presenter<H, A> {
    host: H,
    animator: A,
    show_duration: Duration,
    hide_duration: Duration,
}

impl<H: ViewHost, A: Animator> Presenter<H, A> {
    pub fn new(host: H, animator: A, settings: &ToastSettings) -> Self {
        Self {
            host,
            animator,
            show_duration: settings.show_animation,
            hide_duration: settings.hide_animation,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Attaches a toast below the visible area of `surface`.
    pub fn mount(&mut self, surface: SurfaceId, view: ToastView) -> Option<WidgetId> {
        let widget = self.host.mount(surface, view)?;
        self.host.set_placement(widget, Placement::Hidden);
        Some(widget)
    }

    /// Moves a mounted toast into view and starts the slide-in.
    pub fn present(&mut self, surface: SurfaceId, widget: WidgetId) {
        self.host.set_placement(widget, Placement::Showing);
        self.animator.animate(AnimationRequest {
            surface,
            widget,
            transition: Transition::Show,
            duration: self.show_duration,
        });
    }

    /// Starts the slide-out of a showing toast.
    pub fn begin_hide(&mut self, surface: SurfaceId, widget: WidgetId) -> HideStart {
        if self.host.placement(widget) != Some(Placement::Showing) {
            return HideStart::AlreadyHidden;
        }

        self.host.set_placement(widget, Placement::Hidden);
        self.animator.animate(AnimationRequest {
            surface,
            widget,
            transition: Transition::Hide,
            duration: self.hide_duration,
        });
        HideStart::Animating
    }

    /// Detaches `widget` immediately, without animating.
    ///
    /// Returns `false` if it was already detached.
    pub fn remove(&mut self, widget: WidgetId) -> bool {
        self.animator.interrupt(widget);
        if self.host.container_of(widget).is_none() {
            return false;
        }
        self.host.unmount(widget)
    }

    /// Detaches every toast found in `surface`'s hierarchy.
    ///
    /// Returns how many were removed.
    pub fn remove_all(&mut self, surface: SurfaceId) -> usize {
        let widgets = self.host.toasts_on(surface);
        widgets
            .into_iter()
            .filter(|widget| self.remove(*widget))
            .count()
    }
}

/// An animator that only records requests. Tests deliver completions by hand.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingAnimator {
    pub requests: Vec<AnimationRequest>,
    pub interrupted: Vec<WidgetId>,
}

#[cfg(test)]
impl RecordingAnimator {
    /// Requests for `transition`, oldest first.
    pub fn of(&self, transition: Transition) -> Vec<AnimationRequest> {
        self.requests
            .iter()
            .filter(|request| request.transition == transition)
            .copied()
            .collect()
    }
}

#[cfg(test)]
impl Animator for RecordingAnimator {
    fn animate(&mut self, request: AnimationRequest) {
        self.requests.push(request);
    }

    fn interrupt(&mut self, widget: WidgetId) {
        self.interrupted.push(widget);
    }
}
