// SPDX-License-Identifier: GPL-3.0-only

//! Bookkeeping of the toast currently pending dismissal on each surface.

use crate::surface::{SurfaceId, WidgetId};
use crate::toast::timer::{HideTimer, TimerId};

/// Where a registered toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted and waiting for its auto-hide timer.
    Showing,
    /// Hide animation in flight.
    Dismissing,
}

/// Lifecycle state of a surface as seen from outside the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// No registered toast.
    Idle,
    Showing,
    Dismissing,
}

/// A toast with a scheduled auto-hide.
///
/// Equality only looks at the surface: there is at most one pending
/// dismissal per surface, so the surface alone identifies it.
#[derive(Debug)]
pub struct PendingDismissal {
    surface: SurfaceId,
    widget: WidgetId,
    timer: HideTimer,
    phase: Phase,
}

impl PendingDismissal {
    pub fn new(surface: SurfaceId, widget: WidgetId, timer: HideTimer) -> Self {
        Self {
            surface,
            widget,
            timer,
            phase: Phase::Showing,
        }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    pub fn timer_id(&self) -> TimerId {
        self.timer.id()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_cancelled(&self) -> bool {
        self.timer.is_cancelled()
    }

    /// Cancels the timer and records that the hide is under way.
    pub fn begin_dismissing(&mut self) {
        self.timer.cancel();
        self.phase = Phase::Dismissing;
    }

    fn cancel(&self) {
        self.timer.cancel();
    }
}

impl PartialEq for PendingDismissal {
    fn eq(&self, other: &Self) -> bool {
        self.surface == other.surface
    }
}

impl Eq for PendingDismissal {}

/// Ordered collection of pending dismissals, at most one per surface.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<PendingDismissal>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pending dismissal for `surface`.
    pub fn get(&self, surface: SurfaceId) -> Option<&PendingDismissal> {
        self.entries.iter().find(|entry| entry.surface == surface)
    }

    pub fn get_mut(&mut self, surface: SurfaceId) -> Option<&mut PendingDismissal> {
        self.entries.iter_mut().find(|entry| entry.surface == surface)
    }

    /// Inserts `entry`, replacing the entry for the same surface.
    ///
    /// A replaced entry has its timer cancelled and is returned so the caller
    /// can clean up its widget.
    pub fn insert(&mut self, entry: PendingDismissal) -> Option<PendingDismissal> {
        let replaced = self.remove(entry.surface);
        self.entries.push(entry);
        replaced
    }

    /// Removes the entry for `surface`, cancelling its timer.
    ///
    /// Returns `None` without touching anything if there is no entry.
    pub fn remove(&mut self, surface: SurfaceId) -> Option<PendingDismissal> {
        let index = self.entries.iter().position(|entry| entry.surface == surface)?;
        let entry = self.entries.remove(index);
        entry.cancel();
        Some(entry)
    }

    /// Removes every entry, cancelling all timers.
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            entry.cancel();
        }
    }

    /// Phase of the toast on `surface`.
    pub fn phase(&self, surface: SurfaceId) -> ToastPhase {
        match self.get(surface).map(PendingDismissal::phase) {
            None => ToastPhase::Idle,
            Some(Phase::Showing) => ToastPhase::Showing,
            Some(Phase::Dismissing) => ToastPhase::Dismissing,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingDismissal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
