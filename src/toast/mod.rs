// SPDX-License-Identifier: GPL-3.0-only

//! Transient toast notifications.
//!
//! A toast is a short message that slides up from the bottom of a surface,
//! stays for a configurable time, then slides back out. At most one toast is
//! shown per surface; a new request replaces the current one immediately.
//!
//! # Structure
//!
//! - [`content`]: what a toast shows and how it is requested
//! - [`message`]: everything the coordination loop reacts to
//! - [`timer`]: cancellable auto-hide timers
//! - [`registry`]: the pending dismissal of each surface
//! - [`presenter`]: the [`ViewHost`] and [`Animator`] seams and their driver
//! - [`animation`]: tokio-backed [`Animator`] with eased progress
//! - [`controller`]: the lifecycle state machine
//! - [`runtime`]: the message loop and the public [`ToastHandle`]
//! - [`gesture`]: swipe-down detection
//! - [`theme`] and [`render`]: libcosmic rendering
//!
//! # Usage
//!
//! ```rust,ignore
//! use toastkit::config::ToastSettings;
//! use toastkit::host::MemoryHost;
//! use toastkit::navigation::Screen;
//! use toastkit::surface::SurfaceId;
//! use toastkit::toast::{ToastIcon, ToastRuntime};
//!
//! let host = MemoryHost::with_navigation(Screen::content(SurfaceId(1)));
//! let (runtime, handle) = ToastRuntime::new(host, ToastSettings::default());
//! tokio::spawn(runtime.run());
//!
//! handle.show_toast("Copied", Some(ToastIcon::named("edit-copy-symbolic")), None);
//! ```

pub mod animation;
pub mod content;
pub mod controller;
pub mod gesture;
pub mod message;
pub mod presenter;
pub mod registry;
pub mod render;
pub mod runtime;
pub mod theme;
pub mod timer;

pub use animation::{Animation, TimedAnimator};
pub use content::{ToastContent, ToastIcon, ToastRequest, ToastView};
pub use controller::ToastController;
pub use gesture::{Swipe, SwipeTracker};
pub use message::{AnimationOutcome, ToastMessage, ToastReceiver, ToastSender, Transition};
pub use presenter::{AnimationRequest, Animator, HideStart, Placement, Presenter, ViewHost};
pub use registry::{PendingDismissal, Registry, ToastPhase};
pub use render::{render_mounted_toast, render_surface_with_toast, render_toast};
pub use runtime::{ToastHandle, ToastRuntime};
pub use timer::{HideTimer, TimerId};
