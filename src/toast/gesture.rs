// SPDX-License-Identifier: GPL-3.0-only

//! Swipe-down detection for toast dismissal.
//!
//! The renderer feeds raw pointer samples into a [`SwipeTracker`]; once the
//! pointer has travelled far enough downward the tracker reports
//! [`Swipe::Down`] exactly once, and the caller forwards
//! [`ToastMessage::SwipedDown`](crate::toast::ToastMessage::SwipedDown) to the
//! coordination loop.
//!
//! Only vertical travel counts. Upward or sideways movement never produces a
//! swipe.

use crate::app_settings;
use crate::surface::WidgetId;
use crate::toast::message::ToastMessage;

/// A recognised gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Down,
}

/// Tracks one pointer interaction on a toast.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    /// Y position of the press, if a press is in progress.
    start_y: Option<f32>,
    /// Set once the current press has produced a swipe.
    fired: bool,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(app_settings::SWIPE_THRESHOLD)
    }

    /// Creates a tracker that needs `threshold` logical pixels of downward
    /// travel.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            start_y: None,
            fired: false,
            threshold,
        }
    }

    /// Returns `true` while a press is in progress.
    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }

    /// Starts tracking at `y`, discarding any earlier interaction.
    pub fn press(&mut self, y: f32) {
        self.start_y = Some(y);
        self.fired = false;
    }

    /// Feeds a pointer move. Returns a swipe the first time the threshold is
    /// crossed during this press.
    pub fn moved(&mut self, y: f32) -> Option<Swipe> {
        let start = self.start_y?;
        if self.fired || y - start < self.threshold {
            return None;
        }
        self.fired = true;
        Some(Swipe::Down)
    }

    /// Ends the press at `y`.
    ///
    /// A fast flick can skip every move event, so the release position is
    /// checked too.
    pub fn release(&mut self, y: f32) -> Option<Swipe> {
        let swipe = self.moved(y);
        self.cancel();
        swipe
    }

    /// Abandons the current press, e.g. when the pointer leaves the toast.
    pub fn cancel(&mut self) {
        self.start_y = None;
        self.fired = false;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Swipe {
    /// The message to send for this gesture on `widget`.
    pub fn into_message(self, widget: WidgetId) -> ToastMessage {
        match self {
            Swipe::Down => ToastMessage::SwipedDown(widget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downward_travel_past_threshold_swipes() {
        let mut tracker = SwipeTracker::new();
        tracker.press(100.0);

        assert_eq!(tracker.moved(110.0), None);
        assert_eq!(tracker.moved(100.0 + app_settings::SWIPE_THRESHOLD), Some(Swipe::Down));
        // Only once per press.
        assert_eq!(tracker.moved(200.0), None);
        assert_eq!(tracker.release(200.0), None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_upward_travel_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.press(100.0);
        assert_eq!(tracker.moved(20.0), None);
        assert_eq!(tracker.release(0.0), None);
    }

    #[test]
    fn test_flick_detected_on_release() {
        let mut tracker = SwipeTracker::with_threshold(10.0);
        tracker.press(0.0);
        assert_eq!(tracker.release(15.0), Some(Swipe::Down));
    }

    #[test]
    fn test_moves_without_press_do_nothing() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.moved(500.0), None);
        assert_eq!(tracker.release(500.0), None);
    }

    #[test]
    fn test_cancel_discards_press() {
        let mut tracker = SwipeTracker::new();
        tracker.press(0.0);
        tracker.cancel();
        assert_eq!(tracker.moved(100.0), None);
    }

    #[test]
    fn test_new_press_rearms_tracker() {
        let mut tracker = SwipeTracker::with_threshold(10.0);
        tracker.press(0.0);
        assert_eq!(tracker.moved(20.0), Some(Swipe::Down));
        tracker.press(0.0);
        assert_eq!(tracker.moved(20.0), Some(Swipe::Down));
    }

    #[test]
    fn test_swipe_maps_to_message() {
        assert_eq!(
            Swipe::Down.into_message(WidgetId(3)),
            ToastMessage::SwipedDown(WidgetId(3))
        );
    }
}
