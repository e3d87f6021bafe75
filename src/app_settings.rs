// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.toastkit.Toastkit";

/// Application version for config versioning.
pub const APP_VERSION: u64 = 1;

/// Default time a toast stays on screen before auto-hiding, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 1500;

/// Duration of the slide-in animation in milliseconds.
pub const SHOW_ANIMATION_MS: u64 = 300;

/// Duration of the slide-out animation in milliseconds.
pub const HIDE_ANIMATION_MS: u64 = 400;

/// Shortest auto-hide delay accepted, in milliseconds.
///
/// Requests below this are clamped up so the timer can never fire before the
/// slide-in animation has finished.
pub const MIN_DURATION_MS: u64 = SHOW_ANIMATION_MS;

/// Distance between the toast and the bottom of the surface's safe area.
pub const TOAST_BOTTOM_MARGIN: f32 = 20.0;

/// Vertical padding inside the toast.
pub const TOAST_PADDING_VERTICAL: f32 = 12.0;

/// Horizontal padding inside the toast.
pub const TOAST_PADDING_HORIZONTAL: f32 = 20.0;

/// Corner radius of the toast container.
pub const TOAST_BORDER_RADIUS: f32 = 10.0;

/// Edge length of the optional icon.
pub const TOAST_ICON_SIZE: u16 = 25;

/// Space between the icon and the title.
pub const TOAST_SPACING: f32 = 10.0;

/// Vertical travel in pixels before a drag counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 24.0;
