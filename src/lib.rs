// SPDX-License-Identifier: GPL-3.0-only

//! Toastkit - transient toast notifications for COSMIC applications
//!
//! A toast is a short message with an optional icon that slides up from the
//! bottom of the topmost surface, stays for a moment, and slides back out on
//! its own or when the user swipes it away.
//!
//! # Architecture
//!
//! All state lives on a single coordination loop ([`toast::ToastRuntime`]).
//! Callers post requests through a cloneable [`toast::ToastHandle`]; timers,
//! animations and gestures post their events into the same channel, so every
//! change is applied in order and late events are recognised as stale.
//!
//! The host application provides its view hierarchy through
//! [`toast::ViewHost`] and its animation engine through [`toast::Animator`].
//! [`host::MemoryHost`] and [`toast::TimedAnimator`] are in-crate
//! implementations used by the demo and the tests.
//!
//! # Modules
//!
//! - `app_settings`: Centralized constants (timings, layout metrics)
//! - `config`: User configuration with cosmic_config persistence
//! - `host`: In-memory view hierarchy
//! - `navigation`: Topmost-surface resolution through stacks, tabs and modals
//! - `surface`: Opaque surface and widget handles
//! - `toast`: Lifecycle controller, runtime, rendering

pub mod app_settings;
pub mod config;
pub mod host;
pub mod navigation;
pub mod surface;
pub mod toast;

pub use crate::config::{Config, DismissTrigger, ToastSettings};
pub use crate::surface::{SurfaceId, WidgetId};
pub use crate::toast::{ToastHandle, ToastIcon, ToastRequest, ToastRuntime};

// ============================================================================
// Integration Tests
// ============================================================================
